//! Default cleanup passes.
//!
//! Deliberately conservative: nothing here changes how an icon renders.
//! `viewBox` is never touched since symbols depend on it.

use super::{COLOR_ATTRS, colors::normalize_color};
use crate::svg::{Element, Node};

/// Elements that never contribute to rendering.
const NON_RENDERING: [&str; 3] = ["metadata", "title", "desc"];

/// Namespace prefixes written by vector editors (Inkscape, Sketch, Affinity
/// and Illustrator).
const EDITOR_PREFIXES: [&str; 6] = ["sodipodi", "inkscape", "sketch", "serif", "a", "i"];

/// Containers removed when they end up with no children.
const EMPTY_CONTAINERS: [&str; 2] = ["g", "defs"];

pub(super) fn apply(root: &mut Element) {
    prune(root);
    root.walk_mut(&mut |el| {
        el.attributes.retain(|attr| !is_editor_name(&attr.name));
        for attr in &mut el.attributes {
            attr.value = collapse_whitespace(&attr.value);
            if COLOR_ATTRS.contains(&attr.name.as_str()) {
                if let Some(color) = normalize_color(&attr.value) {
                    attr.value = color;
                }
            }
        }
        el.attributes.retain(|attr| !attr.value.is_empty());
    });
}

/// Remove comments, non-rendering and editor elements, then empty containers.
fn prune(el: &mut Element) {
    el.children.retain(|node| match node {
        Node::Comment(_) => false,
        Node::Element(child) => {
            !NON_RENDERING.contains(&child.name.as_str()) && !is_editor_name(&child.name)
        }
        _ => true,
    });

    for child in &mut el.children {
        if let Node::Element(child) = child {
            prune(child);
        }
    }

    el.children.retain(|node| match node {
        Node::Element(child) => {
            !(EMPTY_CONTAINERS.contains(&child.name.as_str()) && child.children.is_empty())
        }
        _ => true,
    });
}

/// `xmlns:<editor>` declarations and `<editor>:*` names.
///
/// Unprefixed names never match, so `<a>` links survive.
fn is_editor_name(name: &str) -> bool {
    let prefix = match name.strip_prefix("xmlns:") {
        Some(declared) => declared,
        None => match name.split_once(':') {
            Some((prefix, _)) => prefix,
            None => return false,
        },
    };
    EDITOR_PREFIXES.contains(&prefix)
}

fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::svg::parse_svg;

    fn run(src: &str) -> String {
        let mut root = parse_svg(src).unwrap();
        apply(&mut root);
        root.to_markup().unwrap()
    }

    #[test]
    fn test_removes_non_rendering_elements() {
        let out = run(
            "<svg><title>t</title><desc>d</desc><metadata><x/></metadata><!-- c --><path d=\"M0 0\"/></svg>",
        );
        assert_eq!(out, "<svg><path d=\"M0 0\"/></svg>");
    }

    #[test]
    fn test_removes_editor_namespaces() {
        let out = run(
            r#"<svg xmlns:inkscape="http://www.inkscape.org/namespaces/inkscape" inkscape:version="1.0" sketch:type="MSPage"><sodipodi:namedview/><path d="M0 0" inkscape:label="x"/></svg>"#,
        );
        assert_eq!(out, r#"<svg><path d="M0 0"/></svg>"#);
    }

    #[test]
    fn test_removes_affinity_and_illustrator_namespaces() {
        let out = run(
            r#"<svg xmlns:serif="http://www.serif.com/" xmlns:i="http://ns.adobe.com/AdobeIllustrator/10.0/" xmlns:a="http://ns.adobe.com/AdobeSVGViewerExtensions/3.0/" serif:id="Icon" i:viewOrigin="0 0"><g serif:id="Layer 1" a:adobe-blending-mode="normal"><path d="M0 0"/></g><i:pgf/></svg>"#,
        );
        assert_eq!(out, r#"<svg><g><path d="M0 0"/></g></svg>"#);
    }

    #[test]
    fn test_keeps_unprefixed_editor_lookalikes() {
        let out = run(r##"<svg><a href="#x"><path d="M0 0" i="1"/></a></svg>"##);
        assert_eq!(out, r##"<svg><a href="#x"><path d="M0 0" i="1"/></a></svg>"##);
    }

    #[test]
    fn test_keeps_lookalike_names() {
        let out = run(r#"<svg sketchy="1"><path d="M0 0"/></svg>"#);
        assert_eq!(out, r#"<svg sketchy="1"><path d="M0 0"/></svg>"#);
    }

    #[test]
    fn test_collapses_whitespace_and_drops_empty_attrs() {
        let out = run("<svg class=\"\"><path d=\"M0 0\n   L 10 10\" fill=\"  #FFFFFF \"/></svg>");
        assert_eq!(out, "<svg><path d=\"M0 0 L 10 10\" fill=\"#fff\"/></svg>");
    }

    #[test]
    fn test_removes_nested_empty_containers() {
        let out = run("<svg><g><g><defs/></g></g><path d=\"M0 0\"/></svg>");
        assert_eq!(out, "<svg><path d=\"M0 0\"/></svg>");
    }

    #[test]
    fn test_keeps_view_box() {
        let out = run(r#"<svg viewBox="0 0 24 24" width="24" height="24"/>"#);
        assert_eq!(out, r#"<svg viewBox="0 0 24 24" width="24" height="24"/>"#);
    }
}
