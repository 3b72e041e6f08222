use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to the config file (defaults to the first of flexisvg.toml,
    /// flexisvg.config.toml, flexisvg.config.json)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let cwd = std::env::current_dir().wrap_err("Failed to get current directory")?;
        let loaded = flexisvg_config::load(&cwd, self.config.as_deref()).unwrap_or_exit();

        let report = ops::generate(loaded)?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
