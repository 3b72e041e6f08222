//! Config file discovery and loading.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::{Error, PartialConfig, Result};

/// Config file names searched, in order, when no path is given.
pub const CONFIG_FILE_NAMES: [&str; 3] = [
    "flexisvg.toml",
    "flexisvg.config.toml",
    "flexisvg.config.json",
];

/// File name written by `flexisvg init`.
pub const DEFAULT_CONFIG_FILE: &str = CONFIG_FILE_NAMES[0];

/// Contents written by `flexisvg init`.
pub const CONFIG_TEMPLATE: &str = include_str!("../templates/flexisvg.toml");

/// Represents a config file with both raw content and parsed overrides.
#[derive(Debug)]
pub struct ConfigFile {
    path: PathBuf,
    content: String,
    config: PartialConfig,
}

impl ConfigFile {
    /// Open and parse a config file.
    ///
    /// `.json` files are read as JSON, anything else as TOML.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        let filename = path.display().to_string();
        let config = if is_json(&path) {
            parse_json(&content, &filename)?
        } else {
            parse_toml(&content, &filename)?
        };

        Ok(Self {
            path,
            content,
            config,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed overrides.
    pub fn config(&self) -> &PartialConfig {
        &self.config
    }

    /// Consume the file, keeping only the parsed overrides.
    pub fn into_config(self) -> PartialConfig {
        self.config
    }

    /// Find the first existing config file in `dir`.
    pub fn discover(dir: &Path) -> Option<PathBuf> {
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|candidate| candidate.is_file())
    }
}

/// Parse TOML overrides with a filename for error reporting.
pub fn parse_toml(content: &str, filename: &str) -> Result<PartialConfig> {
    toml::from_str(content).map_err(|e| Error::parse(e, content, filename))
}

/// Parse JSON overrides with a filename for error reporting.
pub fn parse_json(content: &str, filename: &str) -> Result<PartialConfig> {
    serde_json::from_str(content).map_err(|e| Error::json(e, content, filename))
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// Where the effective configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Overrides were read from this file.
    File(PathBuf),
    /// No usable file; built-in defaults apply.
    Defaults,
}

/// Overrides together with their origin.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub source: ConfigSource,
    pub overrides: PartialConfig,
}

/// Load the user configuration for a run started in `cwd`.
///
/// An explicit path is resolved against `cwd`; otherwise the first of
/// [`CONFIG_FILE_NAMES`] that exists is used. A missing or unreadable file
/// falls back to the defaults. A file that exists but does not parse is an
/// error.
pub fn load(cwd: &Path, explicit: Option<&Path>) -> Result<LoadedConfig> {
    let candidate = match explicit {
        Some(path) => Some(cwd.join(path)),
        None => ConfigFile::discover(cwd),
    };

    let Some(path) = candidate else {
        info!("No config file found, using default configuration");
        return Ok(defaults());
    };

    match ConfigFile::open(&path) {
        Ok(file) => {
            info!("Using config from: {}", path.display());
            Ok(LoadedConfig {
                source: ConfigSource::File(path),
                overrides: file.into_config(),
            })
        }
        Err(err) if err.is_io() => {
            debug!(error = ?err, "config file unreadable");
            info!(
                "Config file {} could not be read, using default configuration",
                path.display()
            );
            Ok(defaults())
        }
        Err(err) => Err(err),
    }
}

fn defaults() -> LoadedConfig {
    LoadedConfig {
        source: ConfigSource::Defaults,
        overrides: PartialConfig::default(),
    }
}
