//! Text serialization of a glyph grid: one line per block row, columns
//! concatenated, every line newline-terminated.
use super::grid::GlyphGrid;
use std::fmt;

pub fn render(grid: &GlyphGrid) -> String {
    let mut out = String::with_capacity(grid.rows * (grid.cols + 1));
    for by in 0..grid.rows {
        out.extend(grid.row(by).iter().map(|g| g.as_char()));
        out.push('\n');
    }
    out
}

impl fmt::Display for GlyphGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}
