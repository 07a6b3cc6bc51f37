pub mod schema;

pub use schema::{
    ColumnDef, ColumnName, ColumnType, RowsetColumn, RowsetDef, TableDef, TableName,
    TableValidationError,
};
