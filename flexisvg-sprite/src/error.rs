use std::fmt::Display;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SpriteError>;

#[derive(Debug, Error)]
pub enum SpriteError {
    #[error("malformed SVG: {message}")]
    Parse { message: String },

    #[error("failed to serialize SVG: {message}")]
    Serialize { message: String },

    #[error("invalid removeAttrs pattern '{pattern}'")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("shape '{id}' has root <{root}>, expected <svg>")]
    UnexpectedRoot { id: String, root: String },

    #[error("invalid shape '{id}'")]
    InvalidShape {
        id: String,
        #[source]
        source: Box<SpriteError>,
    },

    #[error("failed to transform shape '{id}'")]
    Transform {
        id: String,
        #[source]
        source: Box<SpriteError>,
    },
}

impl SpriteError {
    pub(crate) fn parse(message: impl Display) -> Self {
        Self::Parse {
            message: message.to_string(),
        }
    }

    pub(crate) fn serialize(message: impl Display) -> Self {
        Self::Serialize {
            message: message.to_string(),
        }
    }
}
