mod completions;
mod generate;
mod init;

use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use init::InitCommand;

use crate::logging::Verbosity;

/// Extension trait for exiting on config errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for flexisvg_config::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "flexisvg")]
#[command(version)]
#[command(about = "Bundle SVG icons into a sprite and generate a typed icon component")]
#[command(args_conflicts_with_subcommands = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    // Bare invocation runs generation
    #[command(flatten)]
    generate: GenerateCommand,

    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

impl Cli {
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.verbose, self.quiet)
    }

    pub fn run(&self) -> Result<()> {
        match &self.command {
            None => self.generate.run(),
            Some(Commands::Generate(cmd)) => cmd.run(),
            Some(Commands::Init(cmd)) => cmd.run(),
            Some(Commands::Completions(cmd)) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the sprite and the icon component (default)
    Generate(GenerateCommand),

    /// Create a config file and the standard icon directories
    Init(InitCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
