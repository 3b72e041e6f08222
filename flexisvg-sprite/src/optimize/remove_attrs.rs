use regex::Regex;

use crate::{
    error::{Result, SpriteError},
    svg::Element,
};

/// Attribute removal pattern in `element:attribute:value` form.
///
/// Each part is an anchored, case-insensitive regular expression and `*`
/// alone means "any".
/// A pattern without `:` matches the attribute name on every element; a
/// pattern with one `:` matches any value.
#[derive(Debug, Clone)]
pub struct AttrPattern {
    element: Regex,
    attribute: Regex,
    value: Regex,
}

impl AttrPattern {
    pub fn parse(pattern: &str) -> Result<Self> {
        let mut parts = pattern.splitn(3, ':');
        let first = parts.next().unwrap_or_default();
        let (element, attribute, value) = match (parts.next(), parts.next()) {
            (None, _) => ("*", first, "*"),
            (Some(attribute), None) => (first, attribute, "*"),
            (Some(attribute), Some(value)) => (first, attribute, value),
        };

        let compile = |part: &str| {
            let part = if part == "*" { ".*" } else { part };
            Regex::new(&format!("(?i)^(?:{part})$")).map_err(|source| SpriteError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })
        };

        Ok(Self {
            element: compile(element)?,
            attribute: compile(attribute)?,
            value: compile(value)?,
        })
    }

    /// Whether the attribute `name="value"` on `element` should be removed.
    pub fn matches(&self, element: &str, name: &str, value: &str) -> bool {
        self.element.is_match(element)
            && self.attribute.is_match(name)
            && self.value.is_match(value)
    }

    /// Remove every matching attribute in the document.
    pub fn remove_from(&self, root: &mut Element) {
        root.walk_mut(&mut |el| {
            if !self.element.is_match(&el.name) {
                return;
            }
            el.attributes.retain(|attr| {
                !(self.attribute.is_match(&attr.name) && self.value.is_match(&attr.value))
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::svg::parse_svg;

    fn run(pattern: &str, src: &str) -> String {
        let mut root = parse_svg(src).unwrap();
        AttrPattern::parse(pattern).unwrap().remove_from(&mut root);
        root.to_markup().unwrap()
    }

    #[test]
    fn test_attribute_only_pattern() {
        let out = run("fill", r#"<svg fill="none"><path fill="red" d="M0 0"/></svg>"#);
        assert_eq!(out, r#"<svg><path d="M0 0"/></svg>"#);
    }

    #[test]
    fn test_alternation_in_attribute() {
        let out = run(
            "(fill|stroke)",
            r#"<svg><path fill="red" stroke="blue" stroke-width="2"/></svg>"#,
        );
        assert_eq!(out, r#"<svg><path stroke-width="2"/></svg>"#);
    }

    #[test]
    fn test_element_and_attribute_pattern() {
        let out = run(
            "path:fill",
            r#"<svg fill="none"><path fill="red"/><circle fill="red"/></svg>"#,
        );
        assert_eq!(out, r#"<svg fill="none"><path/><circle fill="red"/></svg>"#);
    }

    #[test]
    fn test_full_pattern_matches_value() {
        let out = run(
            "*:fill:(none|black)",
            r#"<svg><path fill="none"/><path fill="black"/><path fill="red"/></svg>"#,
        );
        assert_eq!(out, r#"<svg><path/><path/><path fill="red"/></svg>"#);
    }

    #[test]
    fn test_two_part_pattern_selects_elements() {
        // First part is an element name, so this only matches <stroke>/<fill> elements.
        let out = run(
            "(stroke|fill):(none|black|#000000)",
            r##"<svg><path stroke="#000000" fill="none"/></svg>"##,
        );
        assert_eq!(out, r##"<svg><path stroke="#000000" fill="none"/></svg>"##);
    }

    #[test]
    fn test_matches_is_anchored() {
        let pattern = AttrPattern::parse("fill").unwrap();
        assert!(pattern.matches("path", "fill", "red"));
        assert!(!pattern.matches("path", "fill-rule", "evenodd"));
    }

    #[test]
    fn test_patterns_ignore_case() {
        let out = run(
            "PATH:Fill:(NONE|#FFF)",
            r##"<svg><path fill="none"/><path fill="#fff"/><path Fill="#FFF"/><path fill="red"/></svg>"##,
        );
        assert_eq!(out, r#"<svg><path/><path/><path/><path fill="red"/></svg>"#);

        let pattern = AttrPattern::parse("STROKE").unwrap();
        assert!(pattern.matches("circle", "stroke", "black"));
    }

    #[test]
    fn test_invalid_regex() {
        let err = AttrPattern::parse("path:(fill").unwrap_err();
        assert!(matches!(err, SpriteError::InvalidPattern { .. }));
    }
}
