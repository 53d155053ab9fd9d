//! Smoothing and Sobel gradients, unpacked into magnitude, angle and a
//! threshold mask.
//!
//! - `magnitude = gx² + gy²` is kept squared; thresholds are squared too.
//! - `angle = atan2(gx, gy)` in radians, so `0` is a purely vertical gradient
//!   and `±π/2` a purely horizontal one.
use crate::angle::gradient_angle;
use crate::convolve::{convolve, GAUSSIAN_5X5, SOBEL_X, SOBEL_Y};
use crate::image::{EdgeMask, ImageF64};
use rayon::prelude::*;

/// Directional derivatives of one intensity plane.
#[derive(Clone, Debug)]
pub struct Gradients {
    /// Horizontal derivative (Sobel X)
    pub gx: ImageF64,
    /// Vertical derivative (Sobel Y)
    pub gy: ImageF64,
}

/// Co-indexed outputs of the edge detector.
#[derive(Clone, Debug)]
pub struct EdgeMap {
    /// Pixels above threshold (and, after thinning, local maxima)
    pub edges: EdgeMask,
    /// Squared gradient norm
    pub magnitude: ImageF64,
    /// `atan2(gx, gy)` in radians
    pub angle: ImageF64,
}

impl EdgeMap {
    pub fn width(&self) -> usize {
        self.magnitude.w
    }

    pub fn height(&self) -> usize {
        self.magnitude.h
    }

    pub fn edge_count(&self) -> usize {
        self.edges.count()
    }
}

/// 5×5 Gaussian smoothing with zero-padded borders.
pub fn gaussian_blur(l: &ImageF64) -> ImageF64 {
    convolve(l, &GAUSSIAN_5X5)
}

pub fn sobel_gradients(l: &ImageF64) -> Gradients {
    let (gx, gy) = rayon::join(|| convolve(l, &SOBEL_X), || convolve(l, &SOBEL_Y));
    Gradients { gx, gy }
}

/// Per-pixel magnitude, angle and `magnitude > edge_threshold` mask.
pub fn unpack_gradients(grad: &Gradients, edge_threshold: u64) -> EdgeMap {
    let (w, h) = (grad.gx.w, grad.gx.h);
    let threshold = edge_threshold as f64;

    let (magnitude, angle): (Vec<f64>, Vec<f64>) = grad
        .gx
        .data
        .par_iter()
        .zip(grad.gy.data.par_iter())
        .map(|(&gx, &gy)| (gx * gx + gy * gy, gradient_angle(gx, gy)))
        .unzip();
    let edges: Vec<bool> = magnitude.par_iter().map(|&m| m > threshold).collect();

    EdgeMap {
        edges: EdgeMask { w, h, data: edges },
        magnitude: ImageF64 {
            w,
            h,
            data: magnitude,
        },
        angle: ImageF64 { w, h, data: angle },
    }
}
