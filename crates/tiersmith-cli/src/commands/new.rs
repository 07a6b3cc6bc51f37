use std::fs;

use anyhow::{Context, Result, bail};
use tiersmith_config::FileFormat;
use tiersmith_core::{ColumnDef, ColumnType, TableDef};

use crate::utils::load_config;

/// Scaffold a table model file with a single identity key column, ready
/// to be extended by hand.
pub fn cmd_new(name: String, format: FileFormat) -> Result<()> {
    let config = load_config()?;
    let dir = config.schema_dir();
    if !dir.exists() {
        fs::create_dir_all(dir).context("create schema directory")?;
    }

    let path = dir.join(format!("{name}.{}", format.extension()));
    if path.exists() {
        bail!("model file already exists: {}", path.display());
    }

    let table = TableDef {
        name: name.clone(),
        comment: None,
        columns: vec![ColumnDef {
            name: "id".into(),
            r#type: ColumnType::Int32,
            nullable: false,
            primary_key: true,
            identity: true,
            max_length: None,
            comment: None,
        }],
    };

    let text = match format {
        FileFormat::Json => {
            serde_json::to_string_pretty(&table).context("serialize table to json")?
        }
        FileFormat::Yaml | FileFormat::Yml => {
            serde_yaml::to_string(&table).context("serialize table to yaml")?
        }
    };
    fs::write(&path, text).with_context(|| format!("write file: {}", path.display()))?;

    println!("Created model template: {}", path.display());
    Ok(())
}
