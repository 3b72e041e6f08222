//! SVG optimizer.
//!
//! Runs an ordered list of [`PluginSpec`]s over a parsed document and
//! serializes the result compactly.

mod colors;
mod dimensions;
mod preset;
mod remove_attrs;

pub use colors::normalize_color;
pub use remove_attrs::AttrPattern;

pub(crate) use dimensions::parse_length;

use crate::{
    error::Result,
    svg::{Element, parse_svg},
};

/// Presentation attributes that carry a color value.
pub(crate) const COLOR_ATTRS: [&str; 6] = [
    "fill",
    "stroke",
    "stop-color",
    "flood-color",
    "lighting-color",
    "color",
];

/// A single optimizer pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PluginSpec {
    /// Conservative cleanup applied to every icon.
    PresetDefault,
    /// Rewrite color values; with `current_color` every concrete color
    /// becomes `currentColor`.
    ConvertColors { current_color: bool },
    /// Remove attributes matching an `elem:attr:value` pattern.
    RemoveAttrs { pattern: String },
    /// Drop `width`/`height` from the root, keeping the aspect ratio in `viewBox`.
    RemoveDimensions,
}

impl PluginSpec {
    /// Plugin name as used by common SVG optimizers.
    pub fn name(&self) -> &'static str {
        match self {
            Self::PresetDefault => "preset-default",
            Self::ConvertColors { .. } => "convertColors",
            Self::RemoveAttrs { .. } => "removeAttrs",
            Self::RemoveDimensions => "removeDimensions",
        }
    }

    /// Apply this pass to a parsed document.
    pub fn apply(&self, root: &mut Element) -> Result<()> {
        match self {
            Self::PresetDefault => preset::apply(root),
            Self::ConvertColors { current_color } => colors::convert(root, *current_color),
            Self::RemoveAttrs { pattern } => AttrPattern::parse(pattern)?.remove_from(root),
            Self::RemoveDimensions => dimensions::remove(root),
        }
        Ok(())
    }
}

/// Optimize SVG markup with the given passes, in order.
pub fn optimize(svg: &str, plugins: &[PluginSpec]) -> Result<String> {
    let mut root = parse_svg(svg)?;
    for plugin in plugins {
        plugin.apply(&mut root)?;
    }
    root.to_markup()
}
