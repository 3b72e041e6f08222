//! Core utilities and types for the flexisvg sprite generator.
//!
//! This crate provides the icon data model, the path and id helpers shared by
//! the sprite and component generators, and the file writing primitives.

mod file;
mod format;
mod paths;
mod types;

// File operations
pub use file::{File, FileRules, Overwrite, WriteResult, write_file};
// Formatting seam
pub use format::{FormatOptions, Formatter, ParserMode, TrailingComma};
// Path and id helpers
pub use paths::{SPRITE_FILE_NAME, derive_icon_id, list_svg_files, sprite_web_path};
// Fundamental types
pub use types::{IconRecord, VariantKind};
