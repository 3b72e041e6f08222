//! Icon classification and metadata types.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// How an icon is allowed to vary at its use-site.
///
/// The variant is fixed by the directory an icon was scanned from and decides
/// which optimizer transforms run and which generated id union it joins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariantKind {
    /// Fixed colors, fixed size.
    Static,
    /// Recolored to `currentColor`, freely resizable.
    Dynamic,
    /// Fixed colors, freely resizable.
    Resizable,
}

impl VariantKind {
    /// All variants in scan order.
    pub const ALL: [VariantKind; 3] = [Self::Static, Self::Dynamic, Self::Resizable];

    /// Get the variant name as it appears in generated metadata.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Static => "static",
            Self::Dynamic => "dynamic",
            Self::Resizable => "resizable",
        }
    }

    /// Name of the generated TypeScript union holding this variant's ids.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Static => "StaticIconId",
            Self::Dynamic => "DynamicIconId",
            Self::Resizable => "ResizableIconId",
        }
    }
}

impl fmt::Display for VariantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VariantKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "static" => Ok(Self::Static),
            "dynamic" => Ok(Self::Dynamic),
            "resizable" => Ok(Self::Resizable),
            other => Err(format!(
                "unknown icon variant '{other}', expected one of: static, dynamic, resizable"
            )),
        }
    }
}

/// A single collected icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconRecord {
    pub id: String,
    pub variant: VariantKind,
}

impl IconRecord {
    pub fn new(id: impl Into<String>, variant: VariantKind) -> Self {
        Self {
            id: id.into(),
            variant,
        }
    }
}
