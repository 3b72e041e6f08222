//! Owned SVG document tree.
//!
//! Parsed and serialized with `quick-xml`. Attribute order is preserved so
//! that the same input always serializes to the same bytes. XML declarations,
//! doctypes and processing instructions are dropped while parsing.

use std::io::Write;

use quick_xml::{
    Reader, Writer,
    events::{BytesCData, BytesEnd, BytesStart, BytesText, Event},
};

use crate::error::{Result, SpriteError};

/// Elements whose whitespace-only text is significant.
const TEXT_CONTENT: [&str; 3] = ["text", "tspan", "textPath"];

/// A single attribute, kept in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

/// A node in an SVG document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
    CData(String),
    Comment(String),
}

/// An SVG element with ordered attributes and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<Attribute>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Gets an attribute value.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// Sets an attribute, replacing the value in place if it already exists.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|a| a.name == name) {
            Some(existing) => existing.value = value,
            None => self.attributes.push(Attribute { name, value }),
        }
    }

    /// Removes an attribute, returning its value.
    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        let index = self.attributes.iter().position(|a| a.name == name)?;
        Some(self.attributes.remove(index).value)
    }

    /// Returns child elements only.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(el) => Some(el),
            _ => None,
        })
    }

    /// Visit this element and every descendant element, parents first.
    pub fn walk_mut(&mut self, f: &mut impl FnMut(&mut Element)) {
        f(self);
        for child in &mut self.children {
            if let Node::Element(el) = child {
                el.walk_mut(f);
            }
        }
    }

    /// Serialize without added whitespace.
    pub fn to_markup(&self) -> Result<String> {
        let mut writer = Writer::new(Vec::new());
        self.write_to(&mut writer)?;
        into_string(writer)
    }

    /// Serialize with one element per line, indented by `indent` spaces.
    ///
    /// Elements holding text or CDATA are written compactly so their content
    /// is not altered.
    pub fn to_pretty_markup(&self, indent: usize) -> Result<String> {
        let mut writer = Writer::new(Vec::new());
        self.write_pretty(&mut writer, 0, indent)?;
        let mut out = into_string(writer)?;
        out.push('\n');
        Ok(out)
    }

    fn has_character_data(&self) -> bool {
        self.children
            .iter()
            .any(|node| matches!(node, Node::Text(_) | Node::CData(_)))
    }

    fn write_pretty<W: Write>(
        &self,
        writer: &mut Writer<W>,
        depth: usize,
        indent: usize,
    ) -> Result<()> {
        if self.children.is_empty() || self.has_character_data() {
            return self.write_to(writer);
        }

        emit(writer, Event::Start(self.start_tag()))?;
        for child in &self.children {
            line_break(writer, (depth + 1) * indent)?;
            match child {
                Node::Element(el) => el.write_pretty(writer, depth + 1, indent)?,
                Node::Comment(comment) => {
                    emit(writer, Event::Comment(BytesText::from_escaped(comment.as_str())))?
                }
                // Written by the compact path above
                Node::Text(_) | Node::CData(_) => {}
            }
        }
        line_break(writer, depth * indent)?;
        emit(writer, Event::End(BytesEnd::new(self.name.as_str())))
    }

    fn start_tag(&self) -> BytesStart<'_> {
        let mut start = BytesStart::new(self.name.as_str());
        for attr in &self.attributes {
            start.push_attribute((attr.name.as_str(), attr.value.as_str()));
        }
        start
    }

    fn write_to<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        let start = self.start_tag();
        if self.children.is_empty() {
            return emit(writer, Event::Empty(start));
        }

        emit(writer, Event::Start(start))?;
        for child in &self.children {
            match child {
                Node::Element(el) => el.write_to(writer)?,
                Node::Text(text) => emit(writer, Event::Text(BytesText::new(text)))?,
                Node::CData(data) => emit(writer, Event::CData(BytesCData::new(data.as_str())))?,
                Node::Comment(comment) => {
                    emit(writer, Event::Comment(BytesText::from_escaped(comment.as_str())))?
                }
            }
        }
        emit(writer, Event::End(BytesEnd::new(self.name.as_str())))
    }
}

fn emit<W: Write>(writer: &mut Writer<W>, event: Event<'_>) -> Result<()> {
    writer
        .write_event(event)
        .map_err(SpriteError::serialize)
}

fn line_break<W: Write>(writer: &mut Writer<W>, width: usize) -> Result<()> {
    let line = format!("\n{:width$}", "");
    writer
        .get_mut()
        .write_all(line.as_bytes())
        .map_err(SpriteError::serialize)
}

fn into_string(writer: Writer<Vec<u8>>) -> Result<String> {
    String::from_utf8(writer.into_inner()).map_err(SpriteError::serialize)
}

/// Parse SVG markup into its root element.
pub fn parse_svg(src: &str) -> Result<Element> {
    let mut reader = Reader::from_str(src);

    let mut root: Option<Element> = None;
    let mut stack: Vec<Element> = Vec::new();

    loop {
        match reader.read_event().map_err(SpriteError::parse)? {
            Event::Eof => break,
            Event::Start(start) => stack.push(element_from(&start)?),
            Event::Empty(empty) => {
                let element = element_from(&empty)?;
                attach(&mut stack, &mut root, element)?;
            }
            Event::End(_) => {
                let element = stack
                    .pop()
                    .ok_or_else(|| SpriteError::parse("unexpected closing tag"))?;
                attach(&mut stack, &mut root, element)?;
            }
            Event::Text(text) => {
                let content = match text.unescape() {
                    Ok(content) => content.into_owned(),
                    Err(_) => String::from_utf8_lossy(&text).into_owned(),
                };
                if let Some(parent) = stack.last_mut() {
                    let keep = if content.trim().is_empty() {
                        TEXT_CONTENT.contains(&parent.name.as_str()) && !content.is_empty()
                    } else {
                        true
                    };
                    if keep {
                        parent.children.push(Node::Text(content));
                    }
                }
            }
            Event::CData(cdata) => {
                if let Some(parent) = stack.last_mut() {
                    let content = String::from_utf8_lossy(&cdata).into_owned();
                    parent.children.push(Node::CData(content));
                }
            }
            Event::Comment(comment) => {
                if let Some(parent) = stack.last_mut() {
                    let content = String::from_utf8_lossy(&comment).into_owned();
                    parent.children.push(Node::Comment(content));
                }
            }
            // Declarations, doctypes and processing instructions
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(SpriteError::parse(format!("unclosed element <{}>", open.name)));
    }
    root.ok_or_else(|| SpriteError::parse("document has no root element"))
}

fn element_from(start: &BytesStart<'_>) -> Result<Element> {
    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut element = Element::new(name);
    for attr in start.attributes() {
        let attr = attr.map_err(SpriteError::parse)?;
        let name = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(SpriteError::parse)?
            .into_owned();
        element.attributes.push(Attribute { name, value });
    }
    Ok(element)
}

fn attach(stack: &mut [Element], root: &mut Option<Element>, element: Element) -> Result<()> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(Node::Element(element)),
        None if root.is_some() => {
            return Err(SpriteError::parse("document has more than one root element"));
        }
        None => *root = Some(element),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_preserves_attribute_order() {
        let root = parse_svg(r#"<svg viewBox="0 0 24 24" width="24" fill="none"/>"#).unwrap();
        let names: Vec<_> = root.attributes.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["viewBox", "width", "fill"]);
    }

    #[test]
    fn test_parse_drops_declaration_and_doctype() {
        let src = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE svg PUBLIC "-//W3C//DTD SVG 1.1//EN" "http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd">
<svg xmlns="http://www.w3.org/2000/svg"><path d="M0 0"/></svg>"#;
        let root = parse_svg(src).unwrap();
        assert_eq!(root.name, "svg");
        assert_eq!(root.child_elements().count(), 1);
    }

    #[test]
    fn test_parse_keeps_comments_and_text() {
        let root = parse_svg("<svg><!-- drawn by hand --><text>Hi &amp; bye</text></svg>").unwrap();
        assert_eq!(root.children[0], Node::Comment(" drawn by hand ".to_string()));
        let text = root.child_elements().next().unwrap();
        assert_eq!(text.children[0], Node::Text("Hi & bye".to_string()));
    }

    #[test]
    fn test_parse_rejects_unclosed_element() {
        assert!(parse_svg("<svg><g>").is_err());
    }

    #[test]
    fn test_parse_rejects_empty_input() {
        assert!(parse_svg("").is_err());
        assert!(parse_svg("not markup").is_err());
    }

    #[test]
    fn test_parse_rejects_mismatched_tags() {
        assert!(parse_svg("<svg><g></svg>").is_err());
    }

    #[test]
    fn test_set_and_remove_attr() {
        let mut el = Element::new("path");
        el.set_attr("fill", "#000");
        el.set_attr("d", "M0 0");
        el.set_attr("fill", "red");
        assert_eq!(el.attr("fill"), Some("red"));
        assert_eq!(el.attributes[0].name, "fill");

        assert_eq!(el.remove_attr("fill"), Some("red".to_string()));
        assert_eq!(el.attr("fill"), None);
        assert_eq!(el.remove_attr("fill"), None);
    }

    #[test]
    fn test_compact_markup() {
        let root = parse_svg(
            r#"<svg viewBox="0 0 24 24">
                 <path d="M0 0h24" fill="a&amp;b"/>
               </svg>"#,
        )
        .unwrap();
        assert_eq!(
            root.to_markup().unwrap(),
            r#"<svg viewBox="0 0 24 24"><path d="M0 0h24" fill="a&amp;b"/></svg>"#
        );
    }

    #[test]
    fn test_pretty_markup_reparses_to_same_tree() {
        let root =
            parse_svg(r#"<svg><g id="a"><path d="M0 0"/><path d="M1 1"/></g></svg>"#).unwrap();
        let pretty = root.to_pretty_markup(2).unwrap();

        assert!(pretty.contains("\n  <g id=\"a\">"));
        assert!(pretty.contains("\n    <path d=\"M0 0\"/>"));
        assert!(pretty.ends_with("</svg>\n"));
        assert_eq!(parse_svg(&pretty).unwrap(), root);
    }

    #[test]
    fn test_text_spacing_survives_round_trip() {
        let src = "<svg><text>Hello <tspan>World</tspan></text></svg>";
        let root = parse_svg(src).unwrap();
        assert_eq!(root.to_markup().unwrap(), src);

        let text = root.child_elements().next().unwrap();
        assert_eq!(text.children[0], Node::Text("Hello ".to_string()));
    }

    #[test]
    fn test_whitespace_between_tspans_is_kept() {
        let src = "<svg><text><tspan>a</tspan> <tspan>b</tspan></text></svg>";
        let root = parse_svg(src).unwrap();
        assert_eq!(root.to_markup().unwrap(), src);
    }

    #[test]
    fn test_pretty_markup_leaves_text_content_alone() {
        let root = parse_svg(
            r#"<svg><g><text x="1">Hello <tspan>World</tspan></text><path d="M0 0"/></g></svg>"#,
        )
        .unwrap();
        let pretty = root.to_pretty_markup(2).unwrap();

        assert!(pretty.contains("\n    <text x=\"1\">Hello <tspan>World</tspan></text>\n"));
        assert!(pretty.contains("\n    <path d=\"M0 0\"/>\n  </g>"));
        assert_eq!(parse_svg(&pretty).unwrap(), root);
    }

    #[test]
    fn test_walk_mut_visits_all_elements() {
        let mut root = parse_svg("<svg><g><path/><circle/></g><rect/></svg>").unwrap();
        let mut names = Vec::new();
        root.walk_mut(&mut |el| names.push(el.name.clone()));
        assert_eq!(names, vec!["svg", "g", "path", "circle", "rect"]);
    }
}
