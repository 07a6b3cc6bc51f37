#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::schema::names::ColumnName;

/// One column of a table as supplied by the schema source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "snake_case")]
pub struct ColumnDef {
    pub name: ColumnName,
    pub r#type: ColumnType,
    #[serde(default)]
    pub nullable: bool,
    #[serde(default)]
    pub primary_key: bool,
    /// Auto-increment / database-generated value.
    #[serde(default)]
    pub identity: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// Semantic column type, named after the CLR type it maps to.
///
/// `Custom` carries a raw type name straight through for database types
/// the mapping does not know about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    Bool,
    Byte,
    Int16,
    Int32,
    Int64,
    Float,
    Double,
    Decimal,
    DateTime,
    Guid,
    Text,
    Binary,
    Object,
    Custom { custom_type: String },
}

impl ColumnType {
    /// The C# type keyword or type name this column renders as.
    pub fn to_csharp_type(&self) -> &str {
        match self {
            ColumnType::Bool => "bool",
            ColumnType::Byte => "byte",
            ColumnType::Int16 => "short",
            ColumnType::Int32 => "int",
            ColumnType::Int64 => "long",
            ColumnType::Float => "float",
            ColumnType::Double => "double",
            ColumnType::Decimal => "decimal",
            ColumnType::DateTime => "DateTime",
            ColumnType::Guid => "Guid",
            ColumnType::Text => "string",
            ColumnType::Binary => "byte[]",
            ColumnType::Object => "object",
            ColumnType::Custom { custom_type } => custom_type,
        }
    }

    /// The declared property type, `?`-suffixed when the column is a
    /// nullable value type. Text, binary, and object types are reference
    /// types and never take the suffix.
    pub fn declared_type(&self, nullable: bool) -> String {
        let base = self.to_csharp_type();
        if nullable && self.is_value_type() {
            format!("{}?", base)
        } else {
            base.to_string()
        }
    }

    /// Returns true for text columns (the only ones carrying max-length).
    pub fn is_text(&self) -> bool {
        matches!(self, ColumnType::Text)
    }

    /// Returns true for raw binary columns.
    pub fn is_binary(&self) -> bool {
        matches!(self, ColumnType::Binary)
    }

    /// Value type = anything that is not text, binary, or a generic
    /// object. Custom types count as value types.
    pub fn is_value_type(&self) -> bool {
        !matches!(
            self,
            ColumnType::Text | ColumnType::Binary | ColumnType::Object
        )
    }

    /// Returns true if this type supports identity generation (integer
    /// types only).
    pub fn supports_identity(&self) -> bool {
        matches!(
            self,
            ColumnType::Int16 | ColumnType::Int32 | ColumnType::Int64
        )
    }
}
