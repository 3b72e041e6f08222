//! TypeScript AST builders.

mod consts;
mod expr;
mod fns;
mod imports;
mod literals;
mod types;

pub use consts::Const;
pub use expr::Expr;
pub use fns::ArrowFn;
pub use imports::Import;
pub use literals::literal;
pub use types::{Field, ObjectType, Union};
