//! SVG optimization and symbol sprite compilation.
//!
//! Icons are scanned per [`VariantKind`](flexisvg_core::VariantKind), optimized
//! with the passes chosen by [`TransformOptions`] and assembled into a single
//! `<symbol>` sprite by [`SpriteCompiler`].

mod compiler;
mod error;
mod format;
mod generate;
pub mod optimize;
mod policy;
pub mod svg;

pub use compiler::{
    CompileResult, NoTransform, Resource, SPRITE_RESOURCE, SYMBOL_MODE, Shape, ShapeTransform,
    SpriteCompiler, SpriteOptions,
};
pub use error::{Result, SpriteError};
pub use format::MarkupFormatter;
pub use generate::{VariantTable, VariantTransform, generate_sprite, generate_sprite_with};
pub use optimize::{PluginSpec, optimize};
pub use policy::{DYNAMIC_COLOR_PATTERN, TransformOptions};
