#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::schema::column::ColumnType;

/// A tabular result shape used for view-model generation: named columns
/// with runtime value types, no keys or constraints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "snake_case")]
pub struct RowsetDef {
    pub name: String,
    pub columns: Vec<RowsetColumn>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "snake_case")]
pub struct RowsetColumn {
    pub name: String,
    pub r#type: ColumnType,
}
