use clap::Args;
use eyre::{Context, Result};

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct InitCommand {}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let cwd = std::env::current_dir().wrap_err("Failed to get current directory")?;
        ops::init::ensure_uninitialized(&cwd).unwrap_or_exit();

        let report = ops::init(&cwd)?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
