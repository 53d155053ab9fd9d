//! Error types shared by every stage of the pipeline.
//!
//! Only the I/O boundary (open/decode/write) and parameter validation can fail
//! in practice. The [`InvariantViolation`] variants guard the completeness of
//! the angle bucketing arithmetic and are never produced for finite input.
use std::path::PathBuf;
use thiserror::Error;

/// Internal consistency failures of the angle classifiers.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum InvariantViolation {
    /// The thinning pass could not assign a neighbour direction.
    #[error("illegal angle found while thinning edges: {degrees:.5}")]
    ThinningDirection { degrees: f64 },
    /// The glyph classifier could not assign a character.
    #[error("illegal angle found while selecting a glyph: {degrees:.5}")]
    GlyphAngle { degrees: f64 },
}

#[derive(Debug, Error)]
pub enum AsciiError {
    #[error("failed to open file {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode file {}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error(transparent)]
    Invariant(#[from] InvariantViolation),
    #[error("invalid parameters: {0}")]
    InvalidParams(String),
    #[error("config {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },
    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T, E = AsciiError> = std::result::Result<T, E>;
