//! Generate operation - sprite first, then the component that references it.

use std::collections::HashSet;

use eyre::Result;
use flexisvg_codegen::generate_component;
use flexisvg_config::{LoadedConfig, SpriteGeneratorConfig};
use flexisvg_core::{IconRecord, SPRITE_FILE_NAME, VariantKind, sprite_web_path};
use flexisvg_sprite::generate_sprite;
use tracing::{error, info};

use crate::reports::GenerateReport;

/// Execute the generate operation.
///
/// The overrides are merged over the defaults, then the sprite is generated
/// and its icon list feeds the component generator. A failure in either
/// stage is logged and returned.
pub fn generate(loaded: LoadedConfig) -> Result<GenerateReport> {
    let LoadedConfig { source, overrides } = loaded;
    let config = SpriteGeneratorConfig::from(overrides);

    info!("Starting SVG sprite generation...");
    match run(&config) {
        Ok((records, web_path)) => {
            info!("SVG sprite and icon component generated successfully");
            Ok(GenerateReport {
                config_source: source,
                counts: count_by_variant(&records),
                total: records.len(),
                duplicates: duplicate_ids(&records),
                sprite_path: config.output_sprite_dir.join(SPRITE_FILE_NAME),
                web_path,
                component_path: config.output_component_path,
            })
        }
        Err(err) => {
            error!("Error during SVG sprite generation: {err:#}");
            Err(err)
        }
    }
}

fn run(config: &SpriteGeneratorConfig) -> Result<(Vec<IconRecord>, String)> {
    let records = generate_sprite(config)?;
    info!("Collected {} icons", records.len());

    let web_path = sprite_web_path(&config.output_sprite_dir.to_string_lossy());
    info!("Sprite web path: {web_path}");

    generate_component(&config.output_component_path, &records, &web_path)?;
    Ok((records, web_path))
}

fn count_by_variant(records: &[IconRecord]) -> Vec<(VariantKind, usize)> {
    VariantKind::ALL
        .iter()
        .map(|variant| {
            let count = records.iter().filter(|r| r.variant == *variant).count();
            (*variant, count)
        })
        .collect()
}

/// Ids that occur more than once, in first-repeat order.
fn duplicate_ids(records: &[IconRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();
    for record in records {
        if !seen.insert(record.id.as_str()) && !duplicates.contains(&record.id) {
            duplicates.push(record.id.clone());
        }
    }
    duplicates
}

#[cfg(test)]
mod tests {
    use std::{fs, path::Path};

    use flexisvg_config::{ConfigSource, PartialConfig};
    use tempfile::TempDir;

    use super::*;

    const SQUARE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24"><rect width="24" height="24" fill="#000"/></svg>"##;

    fn loaded_in(root: &Path) -> LoadedConfig {
        LoadedConfig {
            source: ConfigSource::Defaults,
            overrides: PartialConfig {
                static_dir: Some(root.join("icons/static")),
                dynamic_dir: Some(root.join("icons/dynamic")),
                resizable_dir: Some(root.join("icons/resizable")),
                output_sprite_dir: Some(root.join("public")),
                output_component_path: Some(root.join("src/components/icon/index.tsx")),
            },
        }
    }

    fn write_icon(root: &Path, dir: &str, name: &str, contents: &str) {
        let dir = root.join(dir);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(name), contents).unwrap();
    }

    #[test]
    fn test_generate_writes_sprite_and_component() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        write_icon(root, "icons/static", "icon-logo.svg", SQUARE);
        write_icon(root, "icons/dynamic", "icon-arrow.svg", SQUARE);
        write_icon(root, "icons/dynamic", "icon-close.svg", SQUARE);

        let report = generate(loaded_in(root)).unwrap();

        assert_eq!(report.total, 3);
        assert_eq!(
            report.counts,
            vec![
                (VariantKind::Static, 1),
                (VariantKind::Dynamic, 2),
                (VariantKind::Resizable, 0),
            ]
        );
        assert!(report.duplicates.is_empty());
        assert_eq!(report.sprite_path, root.join("public/sprite.svg"));
        assert!(report.web_path.ends_with("/sprite.svg"));

        let sprite = fs::read_to_string(&report.sprite_path).unwrap();
        assert_eq!(sprite.matches("<symbol ").count(), 3);

        let component = fs::read_to_string(&report.component_path).unwrap();
        assert!(component.contains("export type StaticIconId = 'logo';"));
        assert!(component.contains("export type DynamicIconId = 'arrow' | 'close';"));
        assert!(component.contains("export type ResizableIconId = never;"));
        assert!(component.contains(&format!("{}#${{id}}", report.web_path)));
    }

    #[test]
    fn test_generate_with_no_icons() {
        let temp = TempDir::new().unwrap();
        let report = generate(loaded_in(temp.path())).unwrap();

        assert_eq!(report.total, 0);
        assert!(report.sprite_path.exists());
        let component = fs::read_to_string(&report.component_path).unwrap();
        assert!(component.contains("export type StaticIconId = never;"));
    }

    #[test]
    fn test_duplicate_ids_are_reported() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        write_icon(root, "icons/static", "icon-user.svg", SQUARE);
        write_icon(root, "icons/resizable", "icon-user.svg", SQUARE);

        let report = generate(loaded_in(root)).unwrap();
        assert_eq!(report.total, 2);
        assert_eq!(report.duplicates, vec!["user".to_string()]);
    }

    #[test]
    fn test_malformed_icon_aborts_before_component() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        write_icon(root, "icons/static", "icon-broken.svg", "<svg><g></svg>");

        let loaded = loaded_in(root);
        let component_path = loaded.overrides.output_component_path.clone().unwrap();

        assert!(generate(loaded).is_err());
        assert!(!component_path.exists());
    }
}
