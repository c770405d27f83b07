//! Error types for the Graft core model.
//!
//! The engine itself has no fatal error class: unresolved references and
//! unsupported paints degrade to absent values and generation always
//! completes. Parsing host-supplied color strings is the one fallible
//! boundary.

use thiserror::Error;

/// Errors from parsing a color string supplied by the host.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// A hex digit pair was not valid hexadecimal.
    #[error("invalid hex color: {0}")]
    InvalidHex(String),

    /// The string was not 6 or 8 hex digits long.
    #[error("hex color must have 6 or 8 digits: {0}")]
    InvalidLength(String),
}
