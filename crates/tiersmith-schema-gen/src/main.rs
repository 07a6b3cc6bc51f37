use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use schemars::schema_for;
use tiersmith_config::TiersmithConfig;
use tiersmith_core::{RowsetDef, TableDef};

#[derive(Debug, Parser)]
#[command(
    name = "tiersmith-schema-gen",
    about = "Emit JSON Schemas for tiersmith table models, rowsets, and configuration."
)]
struct Args {
    /// Output directory for schema files.
    #[arg(short = 'o', long = "out", default_value = "schemas")]
    out: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();
    run(args.out)
}

fn run(out: PathBuf) -> Result<()> {
    if !out.exists() {
        fs::create_dir_all(&out).with_context(|| format!("create dir {}", out.display()))?;
    }

    let model_schema = schema_for!(TableDef);
    let rowset_schema = schema_for!(RowsetDef);
    let config_schema = schema_for!(TiersmithConfig);

    let model_path = out.join("model.schema.json");
    let rowset_path = out.join("rowset.schema.json");
    let config_path = out.join("config.schema.json");

    fs::write(
        &model_path,
        serde_json::to_string_pretty(&model_schema).context("serialize model schema")?,
    )
    .with_context(|| format!("write {}", model_path.display()))?;

    fs::write(
        &rowset_path,
        serde_json::to_string_pretty(&rowset_schema).context("serialize rowset schema")?,
    )
    .with_context(|| format!("write {}", rowset_path.display()))?;

    fs::write(
        &config_path,
        serde_json::to_string_pretty(&config_schema).context("serialize config schema")?,
    )
    .with_context(|| format!("write {}", config_path.display()))?;

    println!("Wrote schemas:");
    println!("  {}", model_path.display());
    println!("  {}", rowset_path.display());
    println!("  {}", config_path.display());

    Ok(())
}
