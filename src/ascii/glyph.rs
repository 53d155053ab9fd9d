//! Angle-to-glyph classification.
//!
//! Gradient angles follow `atan2(gx, gy)`, so a vertical line (horizontal
//! gradient) sits near 90°/270° and maps to `'|'`. Windows are half-open
//! `[lo, hi)` on `[0, 360)`:
//!
//! | glyph | windows (V = 10, H = -10)                 |
//! |-------|-------------------------------------------|
//! | `\`   | `[40, 70)`, `[220, 250)`                  |
//! | `\|`  | `[70, 110)`, `[250, 290)`                 |
//! | `/`   | `[110, 140)`, `[290, 320)`                |
//! | `-`   | `[140, 220)`, `[320, 360]`, `[0, 40)`     |
use crate::angle::rad_to_deg;
use crate::error::InvariantViolation;
use serde::Serialize;
use std::fmt;

/// Shrinks the `'|'` windows from both sides.
pub const VERTICAL_TOLERANCE: f64 = 10.0;
/// Negative, so it widens the `'-'` windows at the expense of `'\'` and `'/'`.
pub const HORIZONTAL_TOLERANCE: f64 = -10.0;

/// One output character.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum Glyph {
    Backslash,
    Vertical,
    Slash,
    Horizontal,
    #[default]
    Blank,
}

impl Glyph {
    pub const fn as_char(self) -> char {
        match self {
            Glyph::Backslash => '\\',
            Glyph::Vertical => '|',
            Glyph::Slash => '/',
            Glyph::Horizontal => '-',
            Glyph::Blank => ' ',
        }
    }

    /// Classify a mean gradient angle in radians.
    pub fn from_angle(angle: f64) -> Result<Self, InvariantViolation> {
        Self::from_degrees(rad_to_deg(angle, 0.0))
    }

    /// Classify an angle already expressed in degrees on `[0, 360]`.
    pub fn from_degrees(deg: f64) -> Result<Self, InvariantViolation> {
        const V: f64 = VERTICAL_TOLERANCE;
        const H: f64 = HORIZONTAL_TOLERANCE;
        let deg = if deg < 0.0 { deg + 360.0 } else { deg };
        let within = |lo: f64, hi: f64| lo <= deg && deg < hi;

        if within(30.0 - H, 60.0 + V) || within(210.0 - H, 240.0 + V) {
            Ok(Glyph::Backslash)
        } else if within(60.0 + V, 120.0 - V) || within(240.0 + V, 300.0 - V) {
            Ok(Glyph::Vertical)
        } else if within(120.0 - V, 150.0 + H) || within(300.0 - V, 330.0 + H) {
            Ok(Glyph::Slash)
        } else if within(150.0 + H, 210.0 - H)
            || (330.0 + H <= deg && deg <= 360.0)
            || within(0.0, 30.0 - H)
        {
            Ok(Glyph::Horizontal)
        } else {
            Err(InvariantViolation::GlyphAngle { degrees: deg })
        }
    }
}

impl From<Glyph> for char {
    fn from(g: Glyph) -> char {
        g.as_char()
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
