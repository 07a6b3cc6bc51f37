use std::{fs, path::PathBuf};

use anyhow::{Context, Result, bail};
use tiersmith_config::TiersmithConfig;

use crate::utils::CONFIG_FILE;

pub fn cmd_init() -> Result<()> {
    let path = PathBuf::from(CONFIG_FILE);
    if path.exists() {
        bail!("tiersmith.json already exists");
    }

    let config = TiersmithConfig::default();
    let json = serde_json::to_string_pretty(&config).context("serialize default config")?;
    fs::write(&path, json).context("write tiersmith.json")?;
    println!("created {:?}", path);
    Ok(())
}
