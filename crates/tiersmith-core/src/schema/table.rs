use std::collections::HashSet;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::schema::{column::ColumnDef, names::TableName};

/// One table of the schema source: name, optional comment, ordered
/// columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "snake_case")]
pub struct TableDef {
    pub name: TableName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub columns: Vec<ColumnDef>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableValidationError {
    #[error("table name is empty")]
    EmptyTableName,
    #[error("table '{table}' has no columns")]
    NoColumns { table: String },
    #[error("table '{table}' declares column '{column}' more than once")]
    DuplicateColumn { table: String, column: String },
}

impl TableDef {
    /// The first column flagged as primary key, if any.
    pub fn primary_key(&self) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.primary_key)
    }

    /// Whether this table is eligible for generation.
    pub fn has_primary_key(&self) -> bool {
        self.primary_key().is_some()
    }

    /// Structural sanity check run on freshly loaded model files.
    pub fn validate(&self) -> Result<(), TableValidationError> {
        if self.name.is_empty() {
            return Err(TableValidationError::EmptyTableName);
        }
        if self.columns.is_empty() {
            return Err(TableValidationError::NoColumns {
                table: self.name.clone(),
            });
        }
        let mut seen = HashSet::new();
        for column in &self.columns {
            if !seen.insert(column.name.as_str()) {
                return Err(TableValidationError::DuplicateColumn {
                    table: self.name.clone(),
                    column: column.name.clone(),
                });
            }
        }
        Ok(())
    }
}
