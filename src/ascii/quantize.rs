//! Block-wise reduction of an [`EdgeMap`] to glyphs.
//!
//! The image is tiled into `x_win × y_win` blocks starting at the top-left;
//! the `w % x_win` rightmost columns and `h % y_win` bottom rows are dropped.
//! A block emits a glyph when it holds more than `particle_threshold` edge
//! pixels and its total magnitude is non-zero; the glyph is classified from
//! the magnitude-weighted mean angle of every pixel in the block (edge or
//! not). Blocks with zero total magnitude have no defined mean angle and are
//! always blank.
use super::glyph::Glyph;
use super::grid::GlyphGrid;
use crate::edges::EdgeMap;
use crate::error::{AsciiError, Result};
use crate::image::ImageView;
use log::debug;
use rayon::prelude::*;

/// Block geometry and the minimum evidence for a glyph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockParams {
    pub x_win: usize,
    pub y_win: usize,
    pub particle_threshold: usize,
}

impl BlockParams {
    pub fn validate(&self) -> Result<()> {
        if self.x_win == 0 || self.y_win == 0 {
            return Err(AsciiError::InvalidParams(format!(
                "block size must be at least 1x1, got {}x{}",
                self.x_win, self.y_win
            )));
        }
        Ok(())
    }

    /// `(cols, rows)` of the block grid over a `w × h` image.
    pub fn grid_dims(&self, w: usize, h: usize) -> (usize, usize) {
        (w / self.x_win, h / self.y_win)
    }
}

/// Accumulators of one block.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BlockStats {
    pub edge_count: usize,
    pub magnitude_total: f64,
    /// Sum of `angle * magnitude`
    pub angle_total: f64,
}

impl BlockStats {
    /// Magnitude-weighted mean angle, `None` when the block has no magnitude.
    pub fn mean_angle(&self) -> Option<f64> {
        (self.magnitude_total != 0.0).then(|| self.angle_total / self.magnitude_total)
    }
}

/// Accumulate the block whose top-left pixel is `(bx * x_win, by * y_win)`.
pub fn block_stats(map: &EdgeMap, params: &BlockParams, bx: usize, by: usize) -> BlockStats {
    let w = map.width();
    let origin = bx * params.x_win + by * params.y_win * w;
    let mut stats = BlockStats::default();
    for i in 0..params.x_win {
        for j in 0..params.y_win {
            let idx = origin + i + j * w;
            if map.edges.data[idx] {
                stats.edge_count += 1;
            }
            let m = map.magnitude.data[idx];
            stats.magnitude_total += m;
            stats.angle_total += map.angle.data[idx] * m;
        }
    }
    stats
}

/// Glyph for one block.
pub fn block_glyph(stats: &BlockStats, particle_threshold: usize) -> Result<Glyph> {
    if stats.edge_count <= particle_threshold {
        return Ok(Glyph::Blank);
    }
    match stats.mean_angle() {
        Some(angle) => Ok(Glyph::from_angle(angle)?),
        None => Ok(Glyph::Blank),
    }
}

/// Reduce an edge map to a glyph grid.
pub fn quantize(map: &EdgeMap, params: &BlockParams) -> Result<GlyphGrid> {
    params.validate()?;
    if !map.edges.same_dims(&map.magnitude) || !map.edges.same_dims(&map.angle) {
        return Err(AsciiError::InvalidParams(
            "edge mask, magnitude and angle differ in size".to_string(),
        ));
    }
    let (cols, rows) = params.grid_dims(map.width(), map.height());

    let glyph_rows = (0..rows)
        .into_par_iter()
        .map(|by| {
            (0..cols)
                .map(|bx| block_glyph(&block_stats(map, params, bx, by), params.particle_threshold))
                .collect::<Result<Vec<Glyph>>>()
        })
        .collect::<Result<Vec<Vec<Glyph>>>>()?;
    let glyphs: Vec<Glyph> = glyph_rows.into_iter().flatten().collect();

    let grid = GlyphGrid { cols, rows, glyphs };
    debug!(
        "quantize {}x{} blocks of {}x{} -> {} glyphs",
        cols,
        rows,
        params.x_win,
        params.y_win,
        grid.ink()
    );
    Ok(grid)
}
