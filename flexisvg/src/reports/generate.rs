//! Generate command report data structures.

use std::path::PathBuf;

use flexisvg_config::ConfigSource;
use flexisvg_core::VariantKind;

use super::output::{Output, Report};

/// Report data from a generation run.
#[derive(Debug)]
pub struct GenerateReport {
    /// Where the configuration came from.
    pub config_source: ConfigSource,
    /// Icons collected per variant, in scan order.
    pub counts: Vec<(VariantKind, usize)>,
    pub total: usize,
    /// Ids shared by more than one icon.
    pub duplicates: Vec<String>,
    pub sprite_path: PathBuf,
    /// URL the component uses to reference the sprite.
    pub web_path: String,
    pub component_path: PathBuf,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for id in &self.duplicates {
            out.warning(&format!("icon id '{}' is used by more than one file", id));
        }

        let config = match &self.config_source {
            ConfigSource::File(path) => path.display().to_string(),
            ConfigSource::Defaults => "defaults".to_string(),
        };
        out.key_value("Config", &config);
        out.newline();

        out.section(&format!("Icons ({})", self.total));
        for (variant, count) in &self.counts {
            out.key_value_indented(variant.as_str(), &count.to_string());
        }
        out.newline();

        out.section("Written");
        out.added_item(&self.sprite_path.display().to_string());
        out.added_item(&self.component_path.display().to_string());
        out.newline();

        out.key_value("Sprite URL", &self.web_path);
    }
}
