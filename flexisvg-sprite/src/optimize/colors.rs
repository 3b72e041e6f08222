//! Color normalization and `currentColor` conversion.

use super::COLOR_ATTRS;
use crate::svg::Element;

const CURRENT_COLOR: &str = "currentColor";

/// Normalize a color value to its shortest hex form.
///
/// Returns `None` when the value is not a color this pass understands, in
/// which case it should be kept as is.
///
/// ```
/// use flexisvg_sprite::optimize::normalize_color;
///
/// assert_eq!(normalize_color("#AABBCC").as_deref(), Some("#abc"));
/// assert_eq!(normalize_color("rgb(255, 0, 0)").as_deref(), Some("#f00"));
/// assert_eq!(normalize_color("url(#grad)"), None);
/// ```
pub fn normalize_color(value: &str) -> Option<String> {
    let value = value.trim();
    let hex = match value.to_ascii_lowercase().as_str() {
        "black" => "#000000".to_string(),
        "white" => "#ffffff".to_string(),
        lower if lower.starts_with('#') => lower.to_string(),
        lower if lower.starts_with("rgb(") => rgb_to_hex(lower)?,
        _ => return None,
    };
    shorten_hex(&hex)
}

/// Rewrite color attributes and `style` declarations on every element.
///
/// With `current_color` every concrete color becomes `currentColor`;
/// `none` and paint server references (`url(...)`) are kept. Without it
/// colors are only normalized.
pub(super) fn convert(root: &mut Element, current_color: bool) {
    root.walk_mut(&mut |el| {
        for attr in &mut el.attributes {
            if COLOR_ATTRS.contains(&attr.name.as_str()) {
                if let Some(value) = convert_value(&attr.value, current_color) {
                    attr.value = value;
                }
            } else if attr.name == "style" {
                if let Some(style) = convert_style(&attr.value, current_color) {
                    attr.value = style;
                }
            }
        }
    });
}

fn convert_value(value: &str, current_color: bool) -> Option<String> {
    if !current_color {
        return normalize_color(value);
    }
    let trimmed = value.trim();
    if trimmed.eq_ignore_ascii_case("none")
        || trimmed == CURRENT_COLOR
        || trimmed.starts_with("url(")
    {
        return None;
    }
    Some(CURRENT_COLOR.to_string())
}

/// Returns the rewritten declaration list, or `None` when nothing changed.
fn convert_style(style: &str, current_color: bool) -> Option<String> {
    let mut changed = false;
    let declarations: Vec<String> = style
        .split(';')
        .filter(|decl| !decl.trim().is_empty())
        .map(|decl| {
            let Some((property, value)) = decl.split_once(':') else {
                return decl.trim().to_string();
            };
            let property = property.trim();
            if COLOR_ATTRS.contains(&property) {
                if let Some(value) = convert_value(value, current_color) {
                    changed = true;
                    return format!("{property}:{value}");
                }
            }
            format!("{property}:{}", value.trim())
        })
        .collect();

    changed.then(|| declarations.join(";"))
}

fn rgb_to_hex(value: &str) -> Option<String> {
    let inner = value.strip_prefix("rgb(")?.strip_suffix(')')?;
    let channels = inner
        .split(',')
        .map(|part| channel(part.trim()))
        .collect::<Option<Vec<u8>>>()?;
    match channels.as_slice() {
        [r, g, b] => Some(format!("#{r:02x}{g:02x}{b:02x}")),
        _ => None,
    }
}

fn channel(part: &str) -> Option<u8> {
    match part.strip_suffix('%') {
        Some(percent) => {
            let percent: f64 = percent.trim().parse().ok()?;
            Some((percent.clamp(0.0, 100.0) * 2.55).round() as u8)
        }
        None => {
            let value: f64 = part.parse().ok()?;
            Some(value.clamp(0.0, 255.0).round() as u8)
        }
    }
}

fn shorten_hex(hex: &str) -> Option<String> {
    let digits = hex.strip_prefix('#')?;
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match digits.len() {
        3 => Some(hex.to_string()),
        6 => {
            let bytes = digits.as_bytes();
            if bytes[0] == bytes[1] && bytes[2] == bytes[3] && bytes[4] == bytes[5] {
                let short: String = [bytes[0], bytes[2], bytes[4]]
                    .iter()
                    .map(|b| *b as char)
                    .collect();
                Some(format!("#{short}"))
            } else {
                Some(hex.to_string())
            }
        }
        _ => None,
    }
}
