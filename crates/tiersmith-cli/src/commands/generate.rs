use anyhow::Result;
use tiersmith_emitter::Generator;

use crate::utils::{load_config, load_tables, load_templates, print_report};

pub fn cmd_generate(overwrite: bool, tables_filter: Vec<String>) -> Result<()> {
    let config = load_config()?;
    let tables = load_tables(&config)?;
    if tables.is_empty() {
        println!(
            "No table models found in {}",
            config.schema_dir().display()
        );
        return Ok(());
    }

    let templates = load_templates(&config)?;
    let generator = Generator::new(config, templates);

    let report = if tables_filter.is_empty() {
        generator.generate_all(&tables, overwrite)
    } else {
        generator.generate_all_filtered(
            &tables,
            |t| tables_filter.iter().any(|n| n == &t.name),
            overwrite,
        )
    };

    print_report(&report)
}
