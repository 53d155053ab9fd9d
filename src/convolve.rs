//! Direct 2D correlation of an intensity plane with a square, odd-sized kernel.
//!
//! - Kernel offsets that land outside `[0, w) × [0, h)` are skipped, which acts
//!   as zero padding. Border pixels therefore accumulate less total weight and
//!   are not renormalized.
//! - The kernel is applied as stored (no flip), row-major, top-left first.
//! - Output rows are computed in parallel; each row sums its footprint in the
//!   same order a sequential pass would, so results do not depend on the
//!   thread count.
//!
//! Complexity: O(W·H·d²).
use crate::error::{AsciiError, Result};
use crate::image::ImageF64;
use rayon::prelude::*;

/// Square kernel of odd dimension `dim`, weights in row-major order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Kernel<'a> {
    weights: &'a [f64],
    dim: usize,
}

impl<'a> Kernel<'a> {
    /// Validate and wrap `dim × dim` weights.
    pub fn new(weights: &'a [f64], dim: usize) -> Result<Self> {
        if dim % 2 == 0 {
            return Err(AsciiError::InvalidParams(format!(
                "kernel dimension must be odd, got {dim}"
            )));
        }
        if weights.len() != dim * dim {
            return Err(AsciiError::InvalidParams(format!(
                "kernel of dimension {dim} needs {} weights, got {}",
                dim * dim,
                weights.len()
            )));
        }
        Ok(Self { weights, dim })
    }

    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Half extent `dim / 2`.
    #[inline]
    pub fn half(&self) -> usize {
        self.dim / 2
    }

    #[inline]
    pub fn weights(&self) -> &'a [f64] {
        self.weights
    }

    pub fn sum(&self) -> f64 {
        self.weights.iter().sum()
    }
}

const GAUSSIAN_WEIGHTS: [f64; 25] = [
    2.0 / 159.0, 4.0 / 159.0, 5.0 / 159.0, 4.0 / 159.0, 2.0 / 159.0,
    4.0 / 159.0, 9.0 / 159.0, 12.0 / 159.0, 9.0 / 159.0, 4.0 / 159.0,
    5.0 / 159.0, 12.0 / 159.0, 15.0 / 159.0, 12.0 / 159.0, 5.0 / 159.0,
    4.0 / 159.0, 9.0 / 159.0, 12.0 / 159.0, 9.0 / 159.0, 4.0 / 159.0,
    2.0 / 159.0, 4.0 / 159.0, 5.0 / 159.0, 4.0 / 159.0, 2.0 / 159.0,
];

const SOBEL_X_WEIGHTS: [f64; 9] = [-1.0, 0.0, 1.0, -2.0, 0.0, 2.0, -1.0, 0.0, 1.0];
const SOBEL_Y_WEIGHTS: [f64; 9] = [1.0, 2.0, 1.0, 0.0, 0.0, 0.0, -1.0, -2.0, -1.0];

/// 5×5 Gaussian low-pass (σ ≈ 1.4), weights sum to 1.
pub const GAUSSIAN_5X5: Kernel<'static> = Kernel {
    weights: &GAUSSIAN_WEIGHTS,
    dim: 5,
};

/// Horizontal Sobel derivative, positive for intensity increasing to the right.
pub const SOBEL_X: Kernel<'static> = Kernel {
    weights: &SOBEL_X_WEIGHTS,
    dim: 3,
};

/// Vertical Sobel derivative, positive for intensity increasing upwards.
pub const SOBEL_Y: Kernel<'static> = Kernel {
    weights: &SOBEL_Y_WEIGHTS,
    dim: 3,
};

/// Correlate `image` with `kernel`, returning a plane of the same size.
pub fn convolve(image: &ImageF64, kernel: &Kernel<'_>) -> ImageF64 {
    let (w, h) = (image.w, image.h);
    let mut out = ImageF64::new(w, h);
    if w == 0 || h == 0 {
        return out;
    }

    let dim = kernel.dim;
    let half = kernel.half() as isize;
    let (wi, hi) = (w as isize, h as isize);
    out.data
        .par_chunks_mut(w)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, px) in row.iter_mut().enumerate() {
                let mut acc = 0.0;
                for (j, &weight) in kernel.weights.iter().enumerate() {
                    let sx = x as isize + (j % dim) as isize - half;
                    let sy = y as isize + (j / dim) as isize - half;
                    if sx >= 0 && sx < wi && sy >= 0 && sy < hi {
                        acc += weight * image.data[sx as usize + sy as usize * w];
                    }
                }
                *px = acc;
            }
        });
    out
}
