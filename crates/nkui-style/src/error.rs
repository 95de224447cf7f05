#![forbid(unsafe_code)]

//! Errors raised while building, selecting or configuring styles.

use thiserror::Error;

/// Result alias for fallible style operations.
pub type Result<T> = std::result::Result<T, StyleError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StyleError {
    #[error("palette has {len} colors, {required} required")]
    PaletteTooShort { len: usize, required: usize },

    #[error("unknown theme: {0}")]
    UnknownTheme(String),

    #[error("unknown color role: {0}")]
    UnknownColor(String),

    #[error("invalid scale factor: {0}")]
    InvalidScale(f64),
}
