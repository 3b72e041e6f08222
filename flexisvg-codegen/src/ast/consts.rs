//! TypeScript const declaration builder.

use super::Expr;
use crate::{CodeFragment, Renderable};

/// A `const` declaration.
#[derive(Debug, Clone)]
pub struct Const {
    name: String,
    value: Expr,
    exported: bool,
    as_const: bool,
}

impl Const {
    pub fn new(name: impl Into<String>, value: Expr) -> Self {
        Self {
            name: name.into(),
            value,
            exported: true,
            as_const: false,
        }
    }

    /// Append the `as const` assertion.
    pub fn as_const(mut self) -> Self {
        self.as_const = true;
        self
    }

    pub fn private(mut self) -> Self {
        self.exported = false;
        self
    }
}

impl Renderable for Const {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let export = if self.exported { "export " } else { "" };
        let prefix = format!("{}const {} = ", export, self.name);
        let suffix = if self.as_const { " as const;" } else { ";" };
        vec![self.value.to_fragment(&prefix, suffix)]
    }
}
