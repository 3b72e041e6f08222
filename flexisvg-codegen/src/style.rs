//! Layout preferences applied while generating TypeScript.

use flexisvg_core::{FormatOptions, TrailingComma};

use crate::Indent;

/// Quote character for string literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quote {
    Single,
    Double,
}

impl Quote {
    pub fn as_char(&self) -> char {
        match self {
            Self::Single => '\'',
            Self::Double => '"',
        }
    }
}

/// Layout rules derived from [`FormatOptions`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub indent: Indent,
    pub quote: Quote,
    pub trailing_comma: bool,
    pub print_width: usize,
}

impl Style {
    /// Quote and escape a string literal.
    ///
    /// ```
    /// use flexisvg_codegen::Style;
    ///
    /// let style = Style::default();
    /// assert_eq!(style.string("it's"), r"'it\'s'");
    /// ```
    pub fn string(&self, value: &str) -> String {
        let quote = self.quote.as_char();
        let mut out = String::with_capacity(value.len() + 2);
        out.push(quote);
        for c in value.chars() {
            match c {
                '\\' => out.push_str("\\\\"),
                '\n' => out.push_str("\\n"),
                '\r' => out.push_str("\\r"),
                c if c == quote => {
                    out.push('\\');
                    out.push(c);
                }
                c => out.push(c),
            }
        }
        out.push(quote);
        out
    }

    /// Separator after the element at `index` of a multi-line list of `len`.
    pub fn separator(&self, index: usize, len: usize) -> &'static str {
        if self.trailing_comma || index + 1 < len {
            ","
        } else {
            ""
        }
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::from(&FormatOptions::typescript())
    }
}

impl From<&FormatOptions> for Style {
    fn from(options: &FormatOptions) -> Self {
        Self {
            indent: Indent::from(options),
            quote: if options.single_quote {
                Quote::Single
            } else {
                Quote::Double
            },
            trailing_comma: options.trailing_comma == TrailingComma::All,
            print_width: options.print_width,
        }
    }
}

/// Escape text for use inside a template literal.
pub fn escape_template(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace("${", "\\${")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_typescript_preset() {
        let style = Style::default();
        assert_eq!(style.indent, Indent::Spaces(2));
        assert_eq!(style.quote, Quote::Single);
        assert!(style.trailing_comma);
        assert_eq!(style.print_width, 100);
    }

    #[test]
    fn test_string_escaping() {
        let single = Style::default();
        assert_eq!(single.string("user"), "'user'");
        assert_eq!(single.string(r"a\b"), r"'a\\b'");
        assert_eq!(single.string("say \"hi\""), "'say \"hi\"'");

        let double = Style {
            quote: Quote::Double,
            ..Style::default()
        };
        assert_eq!(double.string("it's"), "\"it's\"");
        assert_eq!(double.string("a\"b"), r#""a\"b""#);
    }

    #[test]
    fn test_separator() {
        let trailing = Style::default();
        assert_eq!(trailing.separator(1, 2), ",");

        let none = Style {
            trailing_comma: false,
            ..Style::default()
        };
        assert_eq!(none.separator(0, 2), ",");
        assert_eq!(none.separator(1, 2), "");
    }

    #[test]
    fn test_escape_template() {
        assert_eq!(escape_template("/icons/sprite.svg"), "/icons/sprite.svg");
        assert_eq!(escape_template("/a`b/${x}"), "/a\\`b/\\${x}");
    }
}
