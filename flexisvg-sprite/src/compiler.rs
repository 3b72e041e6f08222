//! Symbol sprite compiler.
//!
//! Shapes are registered with their raw markup, optionally rewritten by a
//! [`ShapeTransform`] hook, then assembled into one `<symbol>` per shape.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use flexisvg_core::{SPRITE_FILE_NAME, derive_icon_id};
use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::{
    error::{Result, SpriteError},
    optimize::parse_length,
    svg::{Attribute, Element, Node, parse_svg},
};

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const XLINK_NS: &str = "http://www.w3.org/1999/xlink";

/// Output mode name for symbol sprites.
pub const SYMBOL_MODE: &str = "symbol";

/// Resource name of the compiled sprite within [`SYMBOL_MODE`].
pub const SPRITE_RESOURCE: &str = "sprite";

/// Root attributes that never carry over to a `<symbol>`.
const DROPPED_ROOT_ATTRS: [&str; 4] = ["version", "x", "y", "id"];

/// Compiler settings.
#[derive(Debug, Clone)]
pub struct SpriteOptions {
    /// Directory the sprite is written to.
    pub dest: PathBuf,
    /// Sprite file name within `dest`.
    pub sprite: String,
    /// Maps a registered file name to its symbol id.
    pub id_generator: fn(&str) -> String,
}

impl SpriteOptions {
    /// Symbol sprite at `dest/sprite.svg`, with ids derived from file names.
    pub fn symbol(dest: impl Into<PathBuf>) -> Self {
        Self {
            dest: dest.into(),
            sprite: SPRITE_FILE_NAME.to_string(),
            id_generator: derive_icon_id,
        }
    }
}

/// A registered icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    id: String,
    source: Option<PathBuf>,
    svg: String,
}

impl Shape {
    /// A shape with no source file.
    pub fn new(id: impl Into<String>, svg: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            source: None,
            svg: svg.into(),
        }
    }

    pub fn with_source(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Path the shape was registered from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Current markup.
    pub fn svg(&self) -> &str {
        &self.svg
    }

    /// Replace the markup.
    pub fn set_svg(&mut self, svg: impl Into<String>) {
        self.svg = svg.into();
    }
}

/// Per-shape hook run before the sprite is assembled.
pub trait ShapeTransform {
    fn transform(&self, shape: &mut Shape) -> Result<()>;
}

impl<F> ShapeTransform for F
where
    F: Fn(&mut Shape) -> Result<()>,
{
    fn transform(&self, shape: &mut Shape) -> Result<()> {
        self(shape)
    }
}

/// Leaves every shape untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTransform;

impl ShapeTransform for NoTransform {
    fn transform(&self, _shape: &mut Shape) -> Result<()> {
        Ok(())
    }
}

/// A compiled output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    pub path: PathBuf,
    pub contents: String,
}

/// Compiled resources, keyed by mode then resource name.
#[derive(Debug, Clone, Default)]
pub struct CompileResult {
    modes: IndexMap<String, IndexMap<String, Resource>>,
}

impl CompileResult {
    fn insert(&mut self, mode: &str, name: &str, resource: Resource) {
        self.modes
            .entry(mode.to_string())
            .or_default()
            .insert(name.to_string(), resource);
    }

    /// Get a single resource.
    pub fn get(&self, mode: &str, name: &str) -> Option<&Resource> {
        self.modes.get(mode)?.get(name)
    }

    /// The compiled symbol sprite.
    pub fn sprite(&self) -> Option<&Resource> {
        self.get(SYMBOL_MODE, SPRITE_RESOURCE)
    }

    /// Every resource in the order it was produced.
    pub fn resources(&self) -> impl Iterator<Item = &Resource> {
        self.modes.values().flat_map(|resources| resources.values())
    }
}

/// Collects shapes and compiles them into a symbol sprite.
#[derive(Debug)]
pub struct SpriteCompiler {
    options: SpriteOptions,
    shapes: Vec<Shape>,
}

impl SpriteCompiler {
    pub fn new(options: SpriteOptions) -> Self {
        Self {
            options,
            shapes: Vec::new(),
        }
    }

    /// Register a file; its id comes from the id generator over the file name.
    pub fn add(&mut self, path: impl Into<PathBuf>, contents: impl Into<String>) -> &mut Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        let id = (self.options.id_generator)(&name);
        self.add_shape(Shape::new(id, contents).with_source(path))
    }

    /// Register a shape as is.
    pub fn add_shape(&mut self, shape: Shape) -> &mut Self {
        self.shapes.push(shape);
        self
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Run `hook` over every shape in registration order, then build the sprite.
    pub fn compile(mut self, hook: &dyn ShapeTransform) -> Result<CompileResult> {
        for shape in &mut self.shapes {
            hook.transform(shape)
                .map_err(|source| SpriteError::Transform {
                    id: shape.id.clone(),
                    source: Box::new(source),
                })?;
        }

        warn_duplicates(&self.shapes);

        let mut sprite = Element::new("svg");
        sprite.set_attr("xmlns", SVG_NS);
        sprite.set_attr("xmlns:xlink", XLINK_NS);
        for shape in &self.shapes {
            let (symbol, namespaces) =
                to_symbol(shape).map_err(|source| SpriteError::InvalidShape {
                    id: shape.id.clone(),
                    source: Box::new(source),
                })?;
            declare_namespaces(&mut sprite, &shape.id, namespaces);
            sprite.children.push(Node::Element(symbol));
        }
        debug!(symbols = self.shapes.len(), "sprite assembled");

        let mut result = CompileResult::default();
        result.insert(
            SYMBOL_MODE,
            SPRITE_RESOURCE,
            Resource {
                path: self.options.dest.join(&self.options.sprite),
                contents: sprite.to_markup()?,
            },
        );
        Ok(result)
    }
}

/// Build the `<symbol>` for a shape, returning it with the prefixed namespace
/// declarations of the shape's root.
fn to_symbol(shape: &Shape) -> Result<(Element, Vec<Attribute>)> {
    let root = parse_svg(&shape.svg)?;
    if root.name != "svg" {
        return Err(SpriteError::UnexpectedRoot {
            id: shape.id.clone(),
            root: root.name,
        });
    }

    let mut symbol = Element::new("symbol");
    symbol.set_attr("id", shape.id.as_str());
    if let Some(view_box) = view_box_of(&root) {
        symbol.set_attr("viewBox", view_box);
    }
    let mut namespaces = Vec::new();
    for attr in &root.attributes {
        let name = attr.name.as_str();
        if name.starts_with("xmlns:") {
            namespaces.push(attr.clone());
            continue;
        }
        if name == "viewBox" || name == "xmlns" || DROPPED_ROOT_ATTRS.contains(&name) {
            continue;
        }
        symbol.set_attr(name, attr.value.as_str());
    }
    symbol.children = root.children;
    scope_ids(&mut symbol, &shape.id);
    Ok((symbol, namespaces))
}

/// Declare prefixed namespaces on the sprite root. The first URI bound to a
/// prefix wins.
fn declare_namespaces(sprite: &mut Element, id: &str, namespaces: Vec<Attribute>) {
    for declaration in namespaces {
        let bound = sprite.attr(&declaration.name).map(str::to_string);
        match bound {
            None => sprite.set_attr(declaration.name, declaration.value),
            Some(uri) if uri == declaration.value => {}
            Some(uri) => warn!(
                id = %id,
                prefix = %declaration.name,
                kept = %uri,
                ignored = %declaration.value,
                "Namespace prefix bound to different URIs, keeping the first"
            ),
        }
    }
}

/// Prefix every id inside `symbol` with `{prefix}_` and rewrite the
/// `url(#...)` and `#...` references that point at them.
fn scope_ids(symbol: &mut Element, prefix: &str) {
    let mut ids = HashMap::new();
    for child in &mut symbol.children {
        if let Node::Element(el) = child {
            el.walk_mut(&mut |el| {
                if let Some(id) = el.attr("id") {
                    ids.insert(id.to_string(), format!("{prefix}_{id}"));
                }
            });
        }
    }
    if ids.is_empty() {
        return;
    }

    for child in &mut symbol.children {
        if let Node::Element(el) = child {
            el.walk_mut(&mut |el| rewrite_references(el, &ids));
        }
    }
}

fn rewrite_references(el: &mut Element, ids: &HashMap<String, String>) {
    for attr in &mut el.attributes {
        match attr.name.as_str() {
            "id" => {
                if let Some(scoped) = ids.get(&attr.value) {
                    attr.value = scoped.clone();
                }
            }
            "href" | "xlink:href" => {
                if let Some(scoped) = attr.value.strip_prefix('#').and_then(|id| ids.get(id)) {
                    attr.value = format!("#{scoped}");
                }
            }
            _ => {
                if let Some(value) = rewrite_url_refs(&attr.value, ids) {
                    attr.value = value;
                }
            }
        }
    }

    if el.name == "style" {
        for node in &mut el.children {
            if let Node::Text(css) | Node::CData(css) = node {
                if let Some(value) = rewrite_url_refs(css, ids) {
                    *css = value;
                }
            }
        }
    }
}

/// Rewrite `url(#id)` references, quoted or not. `None` when nothing changed.
fn rewrite_url_refs(value: &str, ids: &HashMap<String, String>) -> Option<String> {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;
    let mut changed = false;

    while let Some(start) = rest.find("url(") {
        let (head, tail) = rest.split_at(start + "url(".len());
        out.push_str(head);

        let body = tail.trim_start();
        out.push_str(&tail[..tail.len() - body.len()]);
        let body = match body.strip_prefix(['"', '\'']) {
            Some(unquoted) => {
                out.push_str(&body[..1]);
                unquoted
            }
            None => body,
        };

        rest = body;
        if let Some(reference) = body.strip_prefix('#') {
            let end = reference
                .find(|c: char| matches!(c, ')' | '"' | '\'') || c.is_whitespace())
                .unwrap_or(reference.len());
            let id = &reference[..end];
            out.push('#');
            match ids.get(id) {
                Some(scoped) => {
                    out.push_str(scoped);
                    changed = true;
                }
                None => out.push_str(id),
            }
            rest = &reference[end..];
        }
    }

    out.push_str(rest);
    changed.then_some(out)
}

fn view_box_of(root: &Element) -> Option<String> {
    if let Some(view_box) = root.attr("viewBox") {
        return Some(view_box.to_string());
    }
    let width = parse_length(root.attr("width")?)?;
    let height = parse_length(root.attr("height")?)?;
    Some(format!("0 0 {width} {height}"))
}

fn warn_duplicates(shapes: &[Shape]) {
    let mut by_id: IndexMap<&str, Vec<String>> = IndexMap::new();
    for shape in shapes {
        let source = shape
            .source()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "<inline>".to_string());
        by_id.entry(shape.id()).or_default().push(source);
    }

    for (id, sources) in by_id.iter().filter(|(_, sources)| sources.len() > 1) {
        warn!(
            id = %id,
            sources = %sources.join(", "),
            "Duplicate icon id, every symbol is kept and browsers use the first"
        );
    }
}
