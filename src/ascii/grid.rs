use super::glyph::Glyph;

/// One glyph per block, row-major, `cols × rows`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlyphGrid {
    pub cols: usize,
    pub rows: usize,
    pub glyphs: Vec<Glyph>,
}

impl GlyphGrid {
    /// A grid of blanks.
    pub fn blank(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            glyphs: vec![Glyph::Blank; cols * rows],
        }
    }

    pub fn from_vec(cols: usize, rows: usize, glyphs: Vec<Glyph>) -> Option<Self> {
        (glyphs.len() == cols * rows).then_some(Self { cols, rows, glyphs })
    }

    #[inline]
    pub fn get(&self, bx: usize, by: usize) -> Glyph {
        self.glyphs[bx + by * self.cols]
    }

    pub fn row(&self, by: usize) -> &[Glyph] {
        &self.glyphs[by * self.cols..(by + 1) * self.cols]
    }

    /// Number of non-blank glyphs.
    pub fn ink(&self) -> usize {
        self.glyphs.iter().filter(|&&g| g != Glyph::Blank).count()
    }
}
