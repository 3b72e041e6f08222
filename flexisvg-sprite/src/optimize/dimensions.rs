use crate::svg::Element;

/// Drop `width` and `height` from the root element.
///
/// Without a `viewBox` the dimensions are only removed when both are plain
/// numbers, after moving them into a synthesized `viewBox`.
pub(super) fn remove(root: &mut Element) {
    if root.attr("viewBox").is_none() {
        let width = root.attr("width").and_then(parse_length);
        let height = root.attr("height").and_then(parse_length);
        let (Some(width), Some(height)) = (width, height) else {
            return;
        };
        root.set_attr("viewBox", format!("0 0 {width} {height}"));
    }
    root.remove_attr("width");
    root.remove_attr("height");
}

/// Parse a length in user units, allowing a `px` suffix.
pub(crate) fn parse_length(value: &str) -> Option<f64> {
    let value = value.trim();
    let number = value.strip_suffix("px").unwrap_or(value);
    number.parse::<f64>().ok().filter(|n| n.is_finite())
}
