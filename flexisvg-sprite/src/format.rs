use eyre::{Context, Result, bail};
use flexisvg_core::{FormatOptions, Formatter, ParserMode};

use crate::svg::parse_svg;

/// Re-indents SVG markup.
///
/// The document is parsed and written back with `tab_width` spaces per level,
/// so malformed markup is reported as a formatting failure.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkupFormatter;

impl Formatter for MarkupFormatter {
    fn format(&self, source: &str, options: &FormatOptions) -> Result<String> {
        if options.parser != ParserMode::Html {
            bail!("markup formatter cannot read {:?} sources", options.parser);
        }
        let root = parse_svg(source).wrap_err("failed to parse markup")?;
        let formatted = root.to_pretty_markup(usize::from(options.tab_width))?;
        Ok(formatted)
    }
}
