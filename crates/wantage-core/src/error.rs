//! Error types for core parsing.
//!
//! These errors never reach a rendered page: the formatters turn them into
//! placeholder text. They exist so callers that need to distinguish the
//! failure (logging, validation) can.

use thiserror::Error;

/// An instant string from the content store could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InstantError {
    /// The field was present but blank.
    #[error("instant is empty")]
    Empty,

    /// The field did not match any accepted ISO-8601 shape.
    #[error("malformed instant {input:?}")]
    Malformed { input: String },

    /// A local wall-clock time that the display zone skips (DST gap).
    #[error("local time {input:?} does not exist in the display time zone")]
    NonexistentLocalTime { input: String },
}

impl InstantError {
    /// Creates a malformed instant error.
    pub fn malformed(input: impl Into<String>) -> Self {
        Self::Malformed {
            input: input.into(),
        }
    }

    /// Creates a nonexistent local time error.
    pub fn nonexistent(input: impl Into<String>) -> Self {
        Self::NonexistentLocalTime {
            input: input.into(),
        }
    }
}

/// An image asset reference could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImageRefError {
    /// The reference does not follow `image-<id>-<width>x<height>-<format>`.
    #[error("unrecognised image asset reference {reference:?}")]
    Unrecognised { reference: String },

    /// The image source carries neither a reference nor a URL.
    #[error("image source has no asset")]
    MissingAsset,
}

impl ImageRefError {
    /// Creates an unrecognised reference error.
    pub fn unrecognised(reference: impl Into<String>) -> Self {
        Self::Unrecognised {
            reference: reference.into(),
        }
    }
}
