//! TypeScript generation for the flexisvg icon component.
//!
//! A small set of AST builders ([`Union`], [`ObjectType`], [`Const`], ...)
//! render through [`CodeFragment`]s into a [`CodeBuilder`]. The icon
//! component itself is produced by [`generate_component`].

pub mod ast;
mod code_builder;
mod code_file;
mod component;
mod formatter;
mod indent;
mod renderable;
mod style;

pub use ast::{ArrowFn, Const, Expr, Field, Import, ObjectType, Union, literal};
pub use code_builder::CodeBuilder;
pub use code_file::CodeFile;
pub use component::{
    DEFAULT_ICON_SIZE, GENERATED_HEADER, generate_component, generate_component_with,
    render_component,
};
pub use formatter::{TsxFormatter, check_syntax};
pub use indent::Indent;
pub use renderable::{CodeFragment, Renderable};
pub use style::{Quote, Style, escape_template};
