//! Generator configuration and user overrides.

use std::path::{Path, PathBuf};

use flexisvg_core::VariantKind;
use serde::Deserialize;

/// Fully resolved configuration for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteGeneratorConfig {
    /// Icons with fixed colors and size.
    pub static_dir: PathBuf,
    /// Icons recolored to `currentColor` and resizable.
    pub dynamic_dir: PathBuf,
    /// Icons with fixed colors that can be resized.
    pub resizable_dir: PathBuf,
    /// Directory receiving `sprite.svg`.
    pub output_sprite_dir: PathBuf,
    /// Path of the generated component source.
    pub output_component_path: PathBuf,
}

impl SpriteGeneratorConfig {
    /// Directory scanned for icons of the given variant.
    pub fn dir_for(&self, variant: VariantKind) -> &Path {
        match variant {
            VariantKind::Static => &self.static_dir,
            VariantKind::Dynamic => &self.dynamic_dir,
            VariantKind::Resizable => &self.resizable_dir,
        }
    }
}

impl Default for SpriteGeneratorConfig {
    fn default() -> Self {
        Self {
            static_dir: PathBuf::from("public/icons/static"),
            dynamic_dir: PathBuf::from("public/icons/dynamic"),
            resizable_dir: PathBuf::from("public/icons/resizable"),
            output_sprite_dir: PathBuf::from("public/icons"),
            output_component_path: PathBuf::from("src/components/icon/index.tsx"),
        }
    }
}

/// User-supplied configuration where every field is optional.
///
/// Keys are snake_case; the camelCase spellings are accepted as aliases.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PartialConfig {
    #[serde(alias = "staticDir")]
    pub static_dir: Option<PathBuf>,
    #[serde(alias = "dynamicDir")]
    pub dynamic_dir: Option<PathBuf>,
    #[serde(alias = "resizableDir")]
    pub resizable_dir: Option<PathBuf>,
    #[serde(alias = "outputSpriteDir")]
    pub output_sprite_dir: Option<PathBuf>,
    #[serde(alias = "outputComponentPath")]
    pub output_component_path: Option<PathBuf>,
}

impl PartialConfig {
    /// Apply these overrides field-by-field on top of `base`.
    pub fn merge_over(self, base: SpriteGeneratorConfig) -> SpriteGeneratorConfig {
        SpriteGeneratorConfig {
            static_dir: self.static_dir.unwrap_or(base.static_dir),
            dynamic_dir: self.dynamic_dir.unwrap_or(base.dynamic_dir),
            resizable_dir: self.resizable_dir.unwrap_or(base.resizable_dir),
            output_sprite_dir: self.output_sprite_dir.unwrap_or(base.output_sprite_dir),
            output_component_path: self
                .output_component_path
                .unwrap_or(base.output_component_path),
        }
    }

    /// Resolve against the built-in defaults.
    pub fn resolve(self) -> SpriteGeneratorConfig {
        self.merge_over(SpriteGeneratorConfig::default())
    }
}

impl From<PartialConfig> for SpriteGeneratorConfig {
    fn from(partial: PartialConfig) -> Self {
        partial.resolve()
    }
}
