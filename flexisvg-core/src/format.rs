//! Source formatting seam shared by the sprite and component generators.

use eyre::Result;

/// Which grammar a formatter should read the source with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserMode {
    /// Markup (sprite output).
    Html,
    /// TypeScript with JSX (component output).
    TypeScript,
}

/// Where trailing commas are emitted in multi-line literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrailingComma {
    None,
    All,
}

/// Formatting options, mirroring the knobs of common web formatters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    pub parser: ParserMode,
    pub print_width: usize,
    pub tab_width: u8,
    pub single_quote: bool,
    pub trailing_comma: TrailingComma,
}

impl FormatOptions {
    /// Options used for the compiled sprite.
    pub fn html() -> Self {
        Self {
            parser: ParserMode::Html,
            print_width: 100,
            tab_width: 2,
            single_quote: false,
            trailing_comma: TrailingComma::None,
        }
    }

    /// Options used for the generated component source.
    pub fn typescript() -> Self {
        Self {
            parser: ParserMode::TypeScript,
            print_width: 100,
            tab_width: 2,
            single_quote: true,
            trailing_comma: TrailingComma::All,
        }
    }

    /// One level of indentation.
    pub fn indent_unit(&self) -> String {
        " ".repeat(usize::from(self.tab_width))
    }
}

/// A source formatter.
///
/// Returns the formatted text, or an error when the source cannot be parsed
/// in the requested mode.
pub trait Formatter {
    fn format(&self, source: &str, options: &FormatOptions) -> Result<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        let html = FormatOptions::html();
        assert_eq!(html.parser, ParserMode::Html);
        assert_eq!(html.print_width, 100);
        assert_eq!(html.indent_unit(), "  ");

        let ts = FormatOptions::typescript();
        assert_eq!(ts.parser, ParserMode::TypeScript);
        assert!(ts.single_quote);
        assert_eq!(ts.trailing_comma, TrailingComma::All);
    }
}
