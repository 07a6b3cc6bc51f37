use std::path::PathBuf;

use anyhow::Result;
use tiersmith_emitter::Generator;

use crate::utils::{load_config, load_rowsets, load_templates, print_report};

pub fn cmd_viewmodel(file: PathBuf, overwrite: bool) -> Result<()> {
    let config = load_config()?;
    let rowsets = load_rowsets(&file)?;
    if rowsets.is_empty() {
        println!("No rowsets found in {}", file.display());
        return Ok(());
    }

    let templates = load_templates(&config)?;
    let generator = Generator::new(config, templates);

    let report = generator.generate_view_models(&rowsets, overwrite);
    print_report(&report)
}
