//! Configuration for the flexisvg sprite generator.
//!
//! Provides the resolved [`SpriteGeneratorConfig`], the optional user
//! overrides ([`PartialConfig`]) and the config file discovery used by the CLI.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod file;

pub use config::{PartialConfig, SpriteGeneratorConfig};
pub use error::{Error, Result};
pub use file::{
    CONFIG_FILE_NAMES, CONFIG_TEMPLATE, ConfigFile, ConfigSource, DEFAULT_CONFIG_FILE,
    LoadedConfig, load, parse_json, parse_toml,
};

/// Directories created by `flexisvg init`, relative to the project root.
pub const SCAFFOLD_DIRS: [&str; 5] = [
    "public/icons/static",
    "public/icons/dynamic",
    "public/icons/resizable",
    "public",
    "src/components",
];
