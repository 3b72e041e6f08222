//! TypeScript union and object type builders.

use crate::{CodeBuilder, CodeFragment, Renderable, Style};

#[derive(Debug, Clone)]
enum Member {
    Type(String),
    Literal(String),
}

/// Builder for union type aliases (`type Id = 'a' | 'b';`).
///
/// An empty union is written as `never`. A union that does not fit in the
/// print width is broken onto one member per line with leading pipes.
#[derive(Debug, Clone)]
pub struct Union {
    name: String,
    members: Vec<Member>,
    exported: bool,
    style: Style,
}

impl Union {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
            exported: true,
            style: Style::default(),
        }
    }

    /// Add a member written as is (a type reference).
    pub fn member(mut self, ty: impl Into<String>) -> Self {
        self.members.push(Member::Type(ty.into()));
        self
    }

    /// Add a string literal member.
    pub fn literal(mut self, value: impl Into<String>) -> Self {
        self.members.push(Member::Literal(value.into()));
        self
    }

    pub fn private(mut self) -> Self {
        self.exported = false;
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::new(self.style.indent);
        builder.emit(self);
        builder.build().trim_end().to_string()
    }

    fn member_text(&self, member: &Member) -> String {
        match member {
            Member::Type(ty) => ty.clone(),
            Member::Literal(value) => self.style.string(value),
        }
    }
}

impl Renderable for Union {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let export = if self.exported { "export " } else { "" };
        let head = format!("{}type {} =", export, self.name);

        if self.members.is_empty() {
            return vec![CodeFragment::Line(format!("{head} never;"))];
        }

        let members: Vec<String> = self.members.iter().map(|m| self.member_text(m)).collect();
        let single = format!("{head} {};", members.join(" | "));
        if single.chars().count() <= self.style.print_width {
            return vec![CodeFragment::Line(single)];
        }

        let last = members.len() - 1;
        let members = members
            .iter()
            .enumerate()
            .map(|(i, member)| {
                let end = if i == last { ";" } else { "" };
                CodeFragment::Line(format!("| {member}{end}"))
            })
            .collect();
        vec![CodeFragment::Line(head), CodeFragment::Indent(members)]
    }
}

/// A property of an object type.
#[derive(Debug, Clone)]
pub struct Field {
    pub name: String,
    pub ty: String,
    pub optional: bool,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            optional: false,
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

/// Builder for object type aliases, optionally intersected with a base type
/// (`type Props = Base & { ... };`).
#[derive(Debug, Clone)]
pub struct ObjectType {
    name: String,
    base: Option<String>,
    fields: Vec<Field>,
    exported: bool,
}

impl ObjectType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base: None,
            fields: Vec::new(),
            exported: true,
        }
    }

    /// Intersect with `base`.
    pub fn extends(mut self, base: impl Into<String>) -> Self {
        self.base = Some(base.into());
        self
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn private(mut self) -> Self {
        self.exported = false;
        self
    }
}

impl Renderable for ObjectType {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let export = if self.exported { "export " } else { "" };
        let base = self
            .base
            .as_ref()
            .map(|base| format!("{base} & "))
            .unwrap_or_default();
        let header = format!("{}type {} = {}{{", export, self.name, base);

        if self.fields.is_empty() {
            return vec![CodeFragment::Line(format!("{header}}};"))];
        }

        let body = self
            .fields
            .iter()
            .map(|field| {
                let optional = if field.optional { "?" } else { "" };
                CodeFragment::Line(format!("{}{}: {};", field.name, optional, field.ty))
            })
            .collect();
        vec![CodeFragment::block(header, body, "};")]
    }
}
