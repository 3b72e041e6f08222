//! Init operation - config template and icon directories.

use std::path::Path;

use eyre::{Context, Result};
use flexisvg_config::{CONFIG_TEMPLATE, ConfigFile, DEFAULT_CONFIG_FILE, Error, SCAFFOLD_DIRS};
use flexisvg_core::File;
use tracing::info;

use crate::reports::InitReport;

/// Fail if `root` already holds a config file.
pub fn ensure_uninitialized(root: &Path) -> flexisvg_config::Result<()> {
    match ConfigFile::discover(root) {
        Some(existing) => Err(Error::already_exists(existing)),
        None => Ok(()),
    }
}

/// Execute the init operation.
///
/// Writes the config template to `root` and creates the standard
/// directories, skipping those that already exist.
pub fn init(root: &Path) -> Result<InitReport> {
    ensure_uninitialized(root).map_err(|err| eyre::Report::new(*err))?;

    let config_path = root.join(DEFAULT_CONFIG_FILE);
    File::new(&config_path, CONFIG_TEMPLATE).if_missing().write()?;
    info!("Created {}", config_path.display());

    let mut created = Vec::new();
    let mut skipped = Vec::new();
    for dir in SCAFFOLD_DIRS {
        let path = root.join(dir);
        if path.exists() {
            info!("Directory already exists, skipping: {dir}");
            skipped.push(dir.to_string());
            continue;
        }
        std::fs::create_dir_all(&path)
            .wrap_err_with(|| format!("failed to create directory '{}'", path.display()))?;
        info!("Created directory: {dir}");
        created.push(dir.to_string());
    }

    Ok(InitReport {
        config_file: DEFAULT_CONFIG_FILE.to_string(),
        created_dirs: created,
        skipped_dirs: skipped,
    })
}
