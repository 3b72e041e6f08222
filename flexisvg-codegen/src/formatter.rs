//! Syntax check and whitespace normalization for generated TSX.

use eyre::{Context, Result, bail, eyre};
use flexisvg_core::{FormatOptions, Formatter, ParserMode};
use tree_sitter::{Node, Parser};

/// Formatter for generated TypeScript/TSX.
///
/// The source is parsed with the tree-sitter TSX grammar and rejected on any
/// syntax error. Layout is left to the generator; this pass only strips
/// trailing whitespace, collapses runs of blank lines and ensures a single
/// trailing newline.
#[derive(Debug, Clone, Copy, Default)]
pub struct TsxFormatter;

impl Formatter for TsxFormatter {
    fn format(&self, source: &str, options: &FormatOptions) -> Result<String> {
        if options.parser != ParserMode::TypeScript {
            bail!("TSX formatter cannot read {:?} sources", options.parser);
        }
        check_syntax(source)?;
        Ok(normalize_whitespace(source))
    }
}

/// Fail if `source` is not valid TSX.
pub fn check_syntax(source: &str) -> Result<()> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_typescript::LANGUAGE_TSX.into())
        .wrap_err("failed to load the TSX grammar")?;
    let tree = parser
        .parse(source, None)
        .ok_or_else(|| eyre!("TSX parser returned no tree"))?;

    let root = tree.root_node();
    if root.has_error() {
        let position = first_error(root)
            .unwrap_or(root)
            .start_position();
        bail!(
            "syntax error at line {}, column {}",
            position.row + 1,
            position.column + 1
        );
    }
    Ok(())
}

fn first_error<'t>(node: Node<'t>) -> Option<Node<'t>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if child.has_error() {
            if let Some(found) = first_error(child) {
                return Some(found);
            }
        }
    }
    None
}

fn normalize_whitespace(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut blank_run = 0;
    for line in source.lines() {
        let line = line.trim_end();
        if line.is_empty() {
            blank_run += 1;
            continue;
        }
        if blank_run > 0 && !out.is_empty() {
            out.push('\n');
        }
        blank_run = 0;
        out.push_str(line);
        out.push('\n');
    }
    out
}
