//! Sprite generation: scan the variant directories, optimize each icon for
//! its variant and write the compiled sprite.

use std::path::PathBuf;

use eyre::{Context, Result};
use flexisvg_config::SpriteGeneratorConfig;
use flexisvg_core::{
    File, FormatOptions, Formatter, IconRecord, VariantKind, derive_icon_id, list_svg_files,
};
use indexmap::IndexMap;
use tracing::{debug, error, info, warn};

use crate::{
    compiler::{Shape, ShapeTransform, SpriteCompiler, SpriteOptions},
    format::MarkupFormatter,
    optimize::optimize,
    policy::TransformOptions,
};

/// Variant of every registered source file, in scan order.
pub type VariantTable = IndexMap<PathBuf, VariantKind>;

/// Optimizes each shape according to the variant of its source file.
#[derive(Debug)]
pub struct VariantTransform<'a> {
    variants: &'a VariantTable,
}

impl<'a> VariantTransform<'a> {
    pub fn new(variants: &'a VariantTable) -> Self {
        Self { variants }
    }
}

impl ShapeTransform for VariantTransform<'_> {
    fn transform(&self, shape: &mut Shape) -> crate::Result<()> {
        let Some(variant) = shape
            .source()
            .and_then(|source| self.variants.get(source))
            .copied()
        else {
            debug!(id = shape.id(), "no variant for shape, skipping transform");
            return Ok(());
        };

        let plugins = TransformOptions::for_variant(variant).plugins();
        let optimized = optimize(shape.svg(), &plugins)?;
        shape.set_svg(optimized);
        Ok(())
    }
}

/// Generate the sprite described by `config` and return the collected icons.
pub fn generate_sprite(config: &SpriteGeneratorConfig) -> Result<Vec<IconRecord>> {
    generate_sprite_with(config, &MarkupFormatter)
}

/// Like [`generate_sprite`], formatting the output with `formatter`.
///
/// Icons are collected in scan order: static, dynamic, then resizable, each
/// directory sorted by file name. Missing directories contribute nothing.
/// A resource that fails to format is written unformatted.
pub fn generate_sprite_with(
    config: &SpriteGeneratorConfig,
    formatter: &dyn Formatter,
) -> Result<Vec<IconRecord>> {
    let mut records = Vec::new();
    let mut variants = VariantTable::new();
    let mut compiler = SpriteCompiler::new(SpriteOptions::symbol(&config.output_sprite_dir));

    for variant in VariantKind::ALL {
        let dir = config.dir_for(variant);
        let files = list_svg_files(dir)?;
        debug!(
            variant = %variant,
            dir = %dir.display(),
            count = files.len(),
            "scanned icon directory"
        );

        for name in files {
            let path = dir.join(&name);
            let contents = std::fs::read_to_string(&path)
                .wrap_err_with(|| format!("failed to read '{}'", path.display()))?;

            records.push(IconRecord::new(derive_icon_id(&name), variant));
            variants.insert(path.clone(), variant);
            compiler.add(path, contents);
        }
    }

    let result = match compiler.compile(&VariantTransform::new(&variants)) {
        Ok(result) => result,
        Err(err) => {
            error!(error = %err, "Sprite compilation failed");
            return Err(err).wrap_err("failed to compile sprite");
        }
    };

    let options = FormatOptions::html();
    for resource in result.resources() {
        let contents = match formatter.format(&resource.contents, &options) {
            Ok(formatted) => formatted,
            Err(err) => {
                warn!(
                    path = %resource.path.display(),
                    error = %err,
                    "Failed to format sprite, writing unformatted output"
                );
                resource.contents.clone()
            }
        };
        File::new(&resource.path, contents).write()?;
        info!("Sprite written to {}", resource.path.display());
    }

    Ok(records)
}
