use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colored::Colorize;
use tiersmith_config::TiersmithConfig;
use tiersmith_core::{RowsetDef, TableDef};
use tiersmith_emitter::GenerateReport;
use tiersmith_templates::TemplateStore;

pub const CONFIG_FILE: &str = "tiersmith.json";

/// Load tiersmith.json config from the current directory.
pub fn load_config() -> Result<TiersmithConfig> {
    let path = PathBuf::from(CONFIG_FILE);
    if !path.exists() {
        anyhow::bail!("tiersmith.json not found. Run 'tiersmith init' first.");
    }

    let content = fs::read_to_string(&path).context("read tiersmith.json")?;
    let config: TiersmithConfig =
        serde_json::from_str(&content).context("parse tiersmith.json")?;
    Ok(config)
}

/// Load all table model definitions from the schema directory, sorted by
/// table name for a deterministic batch order.
pub fn load_tables(config: &TiersmithConfig) -> Result<Vec<TableDef>> {
    let schema_dir = config.schema_dir();
    if !schema_dir.exists() {
        return Ok(Vec::new());
    }

    let mut tables = Vec::new();
    let entries = fs::read_dir(schema_dir).context("read schema directory")?;

    for entry in entries {
        let entry = entry.context("read directory entry")?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let ext = path.extension().and_then(|s| s.to_str());
        let table: TableDef = match ext {
            Some("json") => {
                let content = fs::read_to_string(&path)
                    .with_context(|| format!("read model file: {}", path.display()))?;
                serde_json::from_str(&content)
                    .with_context(|| format!("parse JSON model: {}", path.display()))?
            }
            Some("yaml") | Some("yml") => {
                let content = fs::read_to_string(&path)
                    .with_context(|| format!("read model file: {}", path.display()))?;
                serde_yaml::from_str(&content)
                    .with_context(|| format!("parse YAML model: {}", path.display()))?
            }
            _ => continue,
        };

        table
            .validate()
            .map_err(|e| anyhow::anyhow!("invalid model {}: {}", path.display(), e))?;
        tables.push(table);
    }

    tables.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(tables)
}

/// Load one or more rowset definitions from a JSON/YAML file. The file
/// may hold a single rowset object or an array of them.
pub fn load_rowsets(path: &Path) -> Result<Vec<RowsetDef>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("read rowset file: {}", path.display()))?;

    let ext = path.extension().and_then(|s| s.to_str());
    let rowsets = match ext {
        Some("yaml") | Some("yml") => serde_yaml::from_str::<Vec<RowsetDef>>(&content)
            .or_else(|_| serde_yaml::from_str::<RowsetDef>(&content).map(|r| vec![r]))
            .with_context(|| format!("parse YAML rowsets: {}", path.display()))?,
        _ => serde_json::from_str::<Vec<RowsetDef>>(&content)
            .or_else(|_| serde_json::from_str::<RowsetDef>(&content).map(|r| vec![r]))
            .with_context(|| format!("parse JSON rowsets: {}", path.display()))?,
    };
    Ok(rowsets)
}

/// Template store per configuration: built-in set, overlaid with the
/// configured template directory when one is set.
pub fn load_templates(config: &TiersmithConfig) -> Result<TemplateStore> {
    match config.template_dir() {
        Some(dir) => TemplateStore::from_dir(dir)
            .with_context(|| format!("load templates from {}", dir.display())),
        None => Ok(TemplateStore::builtin()),
    }
}

/// Print a generation report and fail when any write failed.
pub fn print_report(report: &GenerateReport) -> Result<()> {
    for path in &report.written {
        println!("{} {}", "wrote".green(), path.display());
    }
    for path in &report.skipped_existing {
        println!("{} {} (exists)", "skipped".yellow(), path.display());
    }
    for table in &report.missing_primary_key {
        println!(
            "{} table '{}' has no primary key",
            "skipped".yellow(),
            table
        );
    }
    for name in &report.missing_templates {
        println!(
            "{} template '{}' not found, emitted empty content",
            "warning".yellow(),
            name
        );
    }
    for failure in &report.failed {
        println!(
            "{} {}: {}",
            "failed".red(),
            failure.path.display(),
            failure.reason
        );
    }

    println!(
        "{} written, {} skipped, {} failed",
        report.written_count(),
        report.skipped_count(),
        report.failed.len()
    );

    if report.has_failures() {
        anyhow::bail!("{} file(s) failed to write", report.failed.len());
    }
    Ok(())
}
