//! Indentation for generated source.

use flexisvg_core::FormatOptions;

/// One level of indentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// The given number of spaces.
    Spaces(u8),
    Tab,
}

impl Indent {
    /// 2-space indentation used for TypeScript output.
    pub const TYPESCRIPT: Self = Self::Spaces(2);

    /// Write one level into `buffer`.
    pub fn write_to(&self, buffer: &mut String) {
        match self {
            Self::Spaces(width) => buffer.extend(std::iter::repeat_n(' ', usize::from(*width))),
            Self::Tab => buffer.push('\t'),
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::TYPESCRIPT
    }
}

impl From<&FormatOptions> for Indent {
    fn from(options: &FormatOptions) -> Self {
        Self::Spaces(options.tab_width)
    }
}
