//! Indentation-aware string builder.

use crate::{CodeFragment, Indent, Renderable};

/// Accumulates generated code line by line.
///
/// ```
/// use flexisvg_codegen::{CodeBuilder, Indent};
///
/// let mut builder = CodeBuilder::new(Indent::TYPESCRIPT);
/// builder
///     .push_line("if (ok) {")
///     .push_indent()
///     .push_line("run();")
///     .push_dedent()
///     .push_line("}");
///
/// assert_eq!(builder.build(), "if (ok) {\n  run();\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Add a line at the current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add an empty line.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a `//` comment line.
    pub fn push_comment(&mut self, text: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str("// ");
        self.buffer.push_str(text);
        self.buffer.push('\n');
        self
    }

    /// Render an AST node.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent();
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
            CodeFragment::Indent(fragments) => {
                self.push_indent();
                for f in fragments {
                    self.apply_fragment(f);
                }
                self.push_dedent();
            }
            CodeFragment::Comment(text) => {
                self.push_comment(&text);
            }
        }
    }

    pub fn current_indent(&self) -> usize {
        self.indent_level
    }

    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.indent.write_to(&mut self.buffer);
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::new(Indent::TYPESCRIPT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let mut builder = CodeBuilder::default();
        builder.push_line("const x = 1;");
        assert_eq!(builder.build(), "const x = 1;\n");
    }

    #[test]
    fn test_blank_line_has_no_indent() {
        let mut builder = CodeBuilder::default();
        builder.push_indent().push_line("a;").push_blank().push_line("b;");
        assert_eq!(builder.build(), "  a;\n\n  b;\n");
    }

    #[test]
    fn test_nested_blocks() {
        let mut builder = CodeBuilder::default();
        builder.apply_fragment(CodeFragment::block(
            "const f = () => {",
            vec![CodeFragment::block(
                "return (",
                vec![CodeFragment::line("<svg />")],
                ");",
            )],
            "};",
        ));
        assert_eq!(
            builder.build(),
            "const f = () => {\n  return (\n    <svg />\n  );\n};\n"
        );
    }

    #[test]
    fn test_indent_fragment_and_comment() {
        let mut builder = CodeBuilder::new(Indent::Spaces(4));
        builder.apply_fragment(CodeFragment::Indent(vec![
            CodeFragment::comment("generated"),
            CodeFragment::line("x;"),
        ]));
        assert_eq!(builder.build(), "    // generated\n    x;\n");
        assert_eq!(CodeBuilder::default().current_indent(), 0);
    }

    #[test]
    fn test_dedent_saturates() {
        let mut builder = CodeBuilder::default();
        builder.push_dedent().push_line("x;");
        assert_eq!(builder.build(), "x;\n");
    }
}
