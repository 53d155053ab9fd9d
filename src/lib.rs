#![doc = include_str!("../README.md")]

// Public modules
pub mod angle;
pub mod ascii;
pub mod config;
pub mod convolve;
pub mod diagnostics;
pub mod edges;
pub mod error;
pub mod image;
pub mod pipeline;

// --- High-level re-exports -------------------------------------------------

pub use crate::ascii::{Glyph, GlyphGrid};
pub use crate::config::{AsciiConfig, AsciiParams};
pub use crate::error::{AsciiError, InvariantViolation, Result};
pub use crate::pipeline::{asciiize, AsciiArt, Asciiizer};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use edge_ascii::prelude::*;
///
/// let gray = ImageF64::filled(4, 4, 30000.0);
/// let params = AsciiParams {
///     blur: false,
///     ..Default::default()
/// };
/// let art = Asciiizer::new(params)
///     .unwrap()
///     .run_intensity(gray, &mut NoopObserver)
///     .unwrap();
/// assert_eq!(art.text, "    \n    \n");
/// ```
pub mod prelude {
    pub use crate::diagnostics::{NoopObserver, StageObserver, TimingBreakdown};
    pub use crate::image::ImageF64;
    pub use crate::{AsciiParams, Asciiizer, Glyph};
}

// --- Stage-level API (for tools & tests) -----------------------------------

pub mod stages {
    pub use crate::ascii::{quantize, render, BlockParams};
    pub use crate::convolve::{convolve, Kernel, GAUSSIAN_5X5, SOBEL_X, SOBEL_Y};
    pub use crate::edges::{detect_edges, thin_edges, EdgeMap, EdgeParams};
    pub use crate::image::to_grayscale;
}
