//! Directional edge thinning on the squared gradient magnitude.
//!
//! The gradient angle is rotated by +90° and bucketed into one of four
//! directions with 45° windows centred on 0°, 45°, 90° and 135° (and their
//! opposites). The two samples along that direction are `left = (x-dx, y-dy)`
//! and `right = (x+dx, y+dy)`; a sample whose coordinate is not strictly inside
//! `(0, w) × (0, h)` reads as 0, so row 0 and column 0 never contribute.
//!
//! A pixel survives when `center > left && right > left`. The centre is never
//! compared with `right`: the test keeps the rising side of a ridge, not the
//! symmetric maximum. Magnitudes are read-only, so thinning an already
//! thinned mask against the same magnitudes is a no-op.
use crate::angle::rad_to_deg;
use crate::error::{AsciiError, InvariantViolation, Result};
use crate::image::{EdgeMask, ImageF64, ImageView};
use rayon::prelude::*;

/// Neighbour axis selected from a gradient angle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThinDirection {
    /// Centred on 0° / 180°
    Horizontal,
    /// Centred on 45° / 225°
    Diagonal,
    /// Centred on 90° / 270°
    Vertical,
    /// Centred on 135° / 315°
    AntiDiagonal,
}

impl ThinDirection {
    /// Bucket a gradient angle (radians, `atan2(gx, gy)`).
    pub fn from_angle(angle: f64) -> Result<Self, InvariantViolation> {
        Self::from_degrees(rad_to_deg(angle, 90.0))
    }

    /// Bucket an already rotated angle in degrees.
    pub fn from_degrees(deg: f64) -> Result<Self, InvariantViolation> {
        let within = |lo: f64, hi: f64| lo <= deg && deg < hi;
        if within(0.0, 22.5) || (337.5..=360.0).contains(&deg) || within(157.5, 202.5) {
            Ok(ThinDirection::Horizontal)
        } else if within(22.5, 67.5) || within(202.5, 247.5) {
            Ok(ThinDirection::Diagonal)
        } else if within(67.5, 112.5) || within(247.5, 292.5) {
            Ok(ThinDirection::Vertical)
        } else if within(112.5, 157.5) || within(292.5, 337.5) {
            Ok(ThinDirection::AntiDiagonal)
        } else {
            Err(InvariantViolation::ThinningDirection { degrees: deg })
        }
    }

    /// `(dx, dy)` step towards the `right` sample.
    pub const fn offset(self) -> (isize, isize) {
        match self {
            ThinDirection::Horizontal => (1, 0),
            ThinDirection::Diagonal => (1, 1),
            ThinDirection::Vertical => (0, 1),
            ThinDirection::AntiDiagonal => (-1, 1),
        }
    }
}

#[inline]
fn sample(magnitude: &ImageF64, x: isize, y: isize) -> f64 {
    let inside = 0 < x && x < magnitude.w as isize && 0 < y && y < magnitude.h as isize;
    if inside {
        magnitude.data[x as usize + y as usize * magnitude.w]
    } else {
        0.0
    }
}

/// Whether `(x, y)` survives thinning given the magnitude and angle planes.
pub fn is_local_max(
    x: usize,
    y: usize,
    magnitude: &ImageF64,
    angle: &ImageF64,
) -> Result<bool, InvariantViolation> {
    let (dx, dy) = ThinDirection::from_angle(angle.get(x, y))?.offset();
    let (xi, yi) = (x as isize, y as isize);
    let center = magnitude.get(x, y);
    let left = sample(magnitude, xi - dx, yi - dy);
    let right = sample(magnitude, xi + dx, yi + dy);
    Ok(center > left && right > left)
}

/// AND `edges` with the local-maximum test, returning a fresh mask.
///
/// Only pixels already set in `edges` are tested.
pub fn thin_edges(edges: &EdgeMask, magnitude: &ImageF64, angle: &ImageF64) -> Result<EdgeMask> {
    if !edges.same_dims(magnitude) || !edges.same_dims(angle) {
        return Err(AsciiError::InvalidParams(format!(
            "thinning inputs differ in size: mask {}x{}, magnitude {}x{}, angle {}x{}",
            edges.w, edges.h, magnitude.w, magnitude.h, angle.w, angle.h
        )));
    }
    let w = edges.w;
    let mut out = EdgeMask::new(w, edges.h);
    if out.is_empty() {
        return Ok(out);
    }

    out.data
        .par_chunks_mut(w)
        .zip(edges.data.par_chunks(w))
        .enumerate()
        .try_for_each(|(y, (dst, src))| -> Result<(), InvariantViolation> {
            for (x, (d, &candidate)) in dst.iter_mut().zip(src).enumerate() {
                *d = candidate && is_local_max(x, y, magnitude, angle)?;
            }
            Ok(())
        })?;
    Ok(out)
}
