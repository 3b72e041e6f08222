//! Expressions used as initializers and property values.

use crate::CodeFragment;

/// An expression that is either written on one line or spans a block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// Single-line expression text.
    Inline(String),
    /// `open`, indented body lines, then `close`.
    Block {
        open: String,
        body: Vec<CodeFragment>,
        close: String,
    },
}

impl Expr {
    pub fn inline(text: impl Into<String>) -> Self {
        Self::Inline(text.into())
    }

    /// Render as a statement or list element: `prefix` goes before the
    /// expression and `suffix` after it.
    pub fn to_fragment(&self, prefix: &str, suffix: &str) -> CodeFragment {
        match self {
            Self::Inline(text) => CodeFragment::Line(format!("{prefix}{text}{suffix}")),
            Self::Block { open, body, close } => CodeFragment::Block {
                header: format!("{prefix}{open}"),
                body: body.clone(),
                close: Some(format!("{close}{suffix}")),
            },
        }
    }
}
