use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tiersmith_config::FileFormat;

mod commands;
mod utils;
use commands::{cmd_generate, cmd_init, cmd_new, cmd_viewmodel};

/// tiersmith command-line interface.
#[derive(Parser, Debug)]
#[command(name = "tiersmith", author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Initialize tiersmith.json with defaults.
    Init,
    /// Create a table model template in the schema directory.
    New {
        name: String,
        #[arg(short = 'f', long = "format", value_enum, default_value = "json")]
        format: FileFormat,
    },
    /// Generate entity, repository, service, and controller artifacts
    /// for every table model.
    Generate {
        /// Overwrite existing output files instead of skipping them.
        #[arg(long)]
        overwrite: bool,
        /// Restrict generation to the named tables.
        #[arg(short = 't', long = "table")]
        tables: Vec<String>,
    },
    /// Generate view models from a rowset file.
    Viewmodel {
        file: PathBuf,
        /// Overwrite existing output files instead of skipping them.
        #[arg(long)]
        overwrite: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Init => cmd_init(),
        Commands::New { name, format } => cmd_new(name, format),
        Commands::Generate { overwrite, tables } => cmd_generate(overwrite, tables),
        Commands::Viewmodel { file, overwrite } => cmd_viewmodel(file, overwrite),
    }
}
