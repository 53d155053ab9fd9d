//! ASCII side of the pipeline: glyph classification, block quantization and
//! text rendering.

pub mod glyph;
pub mod grid;
pub mod quantize;
pub mod render;

pub use glyph::Glyph;
pub use grid::GlyphGrid;
pub use quantize::{block_glyph, block_stats, quantize, BlockParams, BlockStats};
pub use render::render;
