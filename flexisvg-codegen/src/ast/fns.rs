//! Arrow function expressions.

use super::Expr;
use crate::CodeFragment;

/// An arrow function with a block body.
#[derive(Debug, Clone)]
pub struct ArrowFn {
    params: String,
    body: Vec<CodeFragment>,
}

impl ArrowFn {
    pub fn new(params: impl Into<String>) -> Self {
        Self {
            params: params.into(),
            body: Vec::new(),
        }
    }

    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(CodeFragment::Line(line.into()));
        self
    }

    pub fn body_fragment(mut self, fragment: CodeFragment) -> Self {
        self.body.push(fragment);
        self
    }
}

impl From<ArrowFn> for Expr {
    fn from(func: ArrowFn) -> Self {
        Expr::Block {
            open: format!("({}) => {{", func.params),
            body: func.body,
            close: "}".to_string(),
        }
    }
}
