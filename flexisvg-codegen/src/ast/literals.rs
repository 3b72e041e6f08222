//! Object and array literals built from JSON values.

use serde_json::Value;

use super::Expr;
use crate::{CodeFragment, Style};

/// Convert a JSON value into a TypeScript literal.
///
/// Non-empty arrays and objects are always expanded, one entry per line,
/// with separators following [`Style::separator`]. Object keys that are
/// valid identifiers are left unquoted.
pub fn literal(value: &Value, style: &Style) -> Expr {
    match value {
        Value::Null => Expr::inline("null"),
        Value::Bool(b) => Expr::inline(b.to_string()),
        Value::Number(n) => Expr::inline(n.to_string()),
        Value::String(s) => Expr::inline(style.string(s)),
        Value::Array(items) if items.is_empty() => Expr::inline("[]"),
        Value::Array(items) => Expr::Block {
            open: "[".to_string(),
            body: items
                .iter()
                .enumerate()
                .map(|(i, item)| literal(item, style).to_fragment("", style.separator(i, items.len())))
                .collect(),
            close: "]".to_string(),
        },
        Value::Object(map) if map.is_empty() => Expr::inline("{}"),
        Value::Object(map) => Expr::Block {
            open: "{".to_string(),
            body: map
                .iter()
                .enumerate()
                .map(|(i, (key, value))| {
                    let prefix = format!("{}: ", property_key(key, style));
                    literal(value, style).to_fragment(&prefix, style.separator(i, map.len()))
                })
                .collect::<Vec<CodeFragment>>(),
            close: "}".to_string(),
        },
    }
}

fn property_key(key: &str, style: &Style) -> String {
    if is_identifier(key) {
        key.to_string()
    } else {
        style.string(key)
    }
}

fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::CodeBuilder;

    fn render(value: Value, style: &Style) -> String {
        let mut builder = CodeBuilder::new(style.indent);
        builder.apply_fragment(literal(&value, style).to_fragment("", ""));
        builder.build()
    }

    #[test]
    fn test_scalars() {
        let style = Style::default();
        assert_eq!(render(json!(null), &style), "null\n");
        assert_eq!(render(json!(true), &style), "true\n");
        assert_eq!(render(json!(24), &style), "24\n");
        assert_eq!(render(json!("it's"), &style), "'it\\'s'\n");
    }

    #[test]
    fn test_empty_collections() {
        let style = Style::default();
        assert_eq!(render(json!([]), &style), "[]\n");
        assert_eq!(render(json!({}), &style), "{}\n");
    }

    #[test]
    fn test_array_of_objects() {
        let style = Style::default();
        let out = render(json!([{ "id": "logo", "variant": "static" }]), &style);
        assert_eq!(
            out,
            "[\n  {\n    id: 'logo',\n    variant: 'static',\n  },\n]\n"
        );
    }

    #[test]
    fn test_without_trailing_commas() {
        let style = Style {
            trailing_comma: false,
            ..Style::default()
        };
        let out = render(json!(["a", "b"]), &style);
        assert_eq!(out, "[\n  'a',\n  'b'\n]\n");
    }

    #[test]
    fn test_quoted_keys() {
        let style = Style::default();
        let out = render(json!({ "data-id": 1, "$ok": 2 }), &style);
        assert!(out.contains("'data-id': 1,"));
        assert!(out.contains("$ok: 2,"));
    }
}
