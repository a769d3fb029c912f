//! Error types for the boundary pipeline.
//!
//! | Variant | Raised by | Fatal? |
//! |---------|-----------|--------|
//! | [`Parse`](BoundsError::Parse) | catalog readers, on a row that does not match the record layout | Yes |
//! | [`InvalidConfig`](BoundsError::InvalidConfig) | [`RegenerateConfig::validate`](crate::pipeline::RegenerateConfig::validate) | Yes |
//! | [`Geometry`](BoundsError::Geometry) | constellation-line conversion, on an unexpected coordinate shape | Yes |
//! | [`Io`](BoundsError::Io) | file reads and the atomic catalog writer | Yes |
//! | [`Json`](BoundsError::Json) | JSON decoding/encoding | Yes |
//!
//! A parse failure aborts the whole run: a silently dropped vertex would break
//! segment continuity without any visible symptom.
//!
//! ```
//! use celestial_bounds::BoundsError;
//!
//! let err = BoundsError::parse(12, "garbage", "expected `RA DEC CON [CON]`");
//! assert_eq!(err.line_number(), Some(12));
//! assert!(err.to_string().contains("line 12"));
//! ```

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoundsError {
    /// A catalog row that does not match the expected field layout.
    #[error("Malformed boundary record at line {line_number} ({reason}): {line:?}")]
    Parse {
        line_number: usize,
        line: String,
        reason: String,
    },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Invalid constellation geometry for {id}: {message}")]
    Geometry { id: String, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type BoundsResult<T> = Result<T, BoundsError>;

impl BoundsError {
    /// Creates a [`Parse`](Self::Parse) error for a 1-based line number.
    pub fn parse(line_number: usize, line: &str, reason: &str) -> Self {
        Self::Parse {
            line_number,
            line: line.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn invalid_config(message: &str) -> Self {
        Self::InvalidConfig {
            message: message.to_string(),
        }
    }

    pub fn geometry(id: &str, message: &str) -> Self {
        Self::Geometry {
            id: id.to_string(),
            message: message.to_string(),
        }
    }

    /// Line number of the offending row, for parse errors.
    pub fn line_number(&self) -> Option<usize> {
        match self {
            Self::Parse { line_number, .. } => Some(*line_number),
            _ => None,
        }
    }
}
