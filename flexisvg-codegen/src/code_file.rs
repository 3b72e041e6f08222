//! Structured TypeScript file assembly.

use crate::{CodeBuilder, CodeFragment, Indent, Renderable, ast::Import};

/// A TypeScript source file: leading comments, imports, then body sections.
///
/// Sections are separated by a blank line; nodes added with
/// [`CodeFile::group`] share one section.
///
/// ```
/// use flexisvg_codegen::{CodeFile, Const, Expr, Import};
///
/// let code = CodeFile::new()
///     .comment("generated")
///     .import(Import::new("react").named("useMemo"))
///     .add(Const::new("size", Expr::inline("24")))
///     .render();
///
/// assert_eq!(
///     code,
///     "// generated\nimport { useMemo } from 'react';\n\nexport const size = 24;\n"
/// );
/// ```
#[derive(Debug, Default)]
pub struct CodeFile {
    comments: Vec<String>,
    imports: Vec<Import>,
    body: Vec<Vec<CodeFragment>>,
}

impl CodeFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a `//` comment at the top of the file.
    pub fn comment(mut self, text: impl Into<String>) -> Self {
        self.comments.push(text.into());
        self
    }

    pub fn import(mut self, import: Import) -> Self {
        self.imports.push(import);
        self
    }

    /// Add a body section.
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    /// Add several nodes as a single section, without blank lines between them.
    pub fn group<R: Renderable>(mut self, nodes: impl IntoIterator<Item = R>) -> Self {
        let fragments = nodes
            .into_iter()
            .flat_map(|node| node.to_fragments())
            .collect();
        self.body.push(fragments);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty() && self.imports.is_empty() && self.body.is_empty()
    }

    /// Render with TypeScript indentation.
    pub fn render(&self) -> String {
        self.render_with_indent(Indent::TYPESCRIPT)
    }

    pub fn render_with_indent(&self, indent: Indent) -> String {
        let mut builder = CodeBuilder::new(indent);

        for comment in &self.comments {
            builder.push_comment(comment);
        }
        for import in &self.imports {
            builder.emit(import);
        }

        let has_header = !self.comments.is_empty() || !self.imports.is_empty();
        for (i, fragments) in self.body.iter().enumerate() {
            if i > 0 || has_header {
                builder.push_blank();
            }
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
        }

        builder.build()
    }
}
