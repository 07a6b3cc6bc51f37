/// Raw table name as it appears in the schema source.
pub type TableName = String;

/// Raw column name as it appears in the schema source.
pub type ColumnName = String;
