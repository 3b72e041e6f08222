//! TypeScript import builder.

use crate::{CodeFragment, Renderable, Style};

/// An `import` statement.
#[derive(Debug, Clone)]
pub struct Import {
    from: String,
    default: Option<String>,
    named: Vec<String>,
    style: Style,
}

impl Import {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            default: None,
            named: Vec::new(),
            style: Style::default(),
        }
    }

    /// Import a default export.
    #[allow(clippy::should_implement_trait)]
    pub fn default(mut self, name: impl Into<String>) -> Self {
        self.default = Some(name.into());
        self
    }

    /// Import a named export.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(name.into());
        self
    }

    /// Import a named export used only as a type (`{ type Name }`).
    pub fn named_type(mut self, name: impl Into<String>) -> Self {
        self.named.push(format!("type {}", name.into()));
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn build(&self) -> String {
        let from = self.style.string(&self.from);
        let named = self.named.join(", ");
        match (&self.default, self.named.is_empty()) {
            (Some(default), true) => format!("import {default} from {from};"),
            (Some(default), false) => format!("import {default}, {{ {named} }} from {from};"),
            (None, false) => format!("import {{ {named} }} from {from};"),
            (None, true) => format!("import {from};"),
        }
    }
}

impl Renderable for Import {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::Line(self.build())]
    }
}
