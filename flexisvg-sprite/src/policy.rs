//! Which optimizer passes apply to each icon variant.

use flexisvg_core::VariantKind;

use crate::optimize::PluginSpec;

/// Colors neutralized on dynamic icons.
pub const DYNAMIC_COLOR_PATTERN: &str = "(stroke|fill):(none|black|#000000)";

/// Transforms derived from a [`VariantKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransformOptions {
    pub transform_colors: bool,
    pub remove_size: bool,
}

impl TransformOptions {
    /// | variant   | transform_colors | remove_size |
    /// |-----------|------------------|-------------|
    /// | static    | false            | false       |
    /// | dynamic   | true             | true        |
    /// | resizable | false            | true        |
    pub fn for_variant(variant: VariantKind) -> Self {
        match variant {
            VariantKind::Static => Self {
                transform_colors: false,
                remove_size: false,
            },
            VariantKind::Dynamic => Self {
                transform_colors: true,
                remove_size: true,
            },
            VariantKind::Resizable => Self {
                transform_colors: false,
                remove_size: true,
            },
        }
    }

    /// Ordered optimizer passes: the default preset, then the conditional ones.
    pub fn plugins(&self) -> Vec<PluginSpec> {
        let mut plugins = vec![PluginSpec::PresetDefault];
        if self.transform_colors {
            plugins.push(PluginSpec::ConvertColors {
                current_color: true,
            });
            plugins.push(PluginSpec::RemoveAttrs {
                pattern: DYNAMIC_COLOR_PATTERN.to_string(),
            });
        }
        if self.remove_size {
            plugins.push(PluginSpec::RemoveDimensions);
        }
        plugins
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_table() {
        let table: Vec<_> = VariantKind::ALL
            .iter()
            .map(|v| {
                let opts = TransformOptions::for_variant(*v);
                (v.as_str(), opts.transform_colors, opts.remove_size)
            })
            .collect();
        assert_eq!(
            table,
            vec![
                ("static", false, false),
                ("dynamic", true, true),
                ("resizable", false, true),
            ]
        );
    }

    #[test]
    fn test_static_plugins() {
        let plugins = TransformOptions::for_variant(VariantKind::Static).plugins();
        assert_eq!(plugins, vec![PluginSpec::PresetDefault]);
    }

    #[test]
    fn test_dynamic_plugins() {
        let names: Vec<_> = TransformOptions::for_variant(VariantKind::Dynamic)
            .plugins()
            .iter()
            .map(PluginSpec::name)
            .collect();
        assert_eq!(
            names,
            vec![
                "preset-default",
                "convertColors",
                "removeAttrs",
                "removeDimensions"
            ]
        );
    }

    #[test]
    fn test_resizable_plugins() {
        let plugins = TransformOptions::for_variant(VariantKind::Resizable).plugins();
        assert_eq!(
            plugins,
            vec![PluginSpec::PresetDefault, PluginSpec::RemoveDimensions]
        );
    }
}
