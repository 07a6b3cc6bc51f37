// Re-export the commonly used surface so callers depend on one crate.
#[doc(inline)]
pub use tiersmith_config::{FileFormat, NameCase, TiersmithConfig};
#[doc(inline)]
pub use tiersmith_core::{ColumnDef, ColumnType, RowsetColumn, RowsetDef, TableDef};
#[doc(inline)]
pub use tiersmith_emitter::{ArtifactKind, EmitError, GenerateReport, Generator, WriteOutcome};
#[doc(inline)]
pub use tiersmith_templates::{TemplateStore, render};
