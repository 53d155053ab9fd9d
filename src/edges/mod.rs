//! Edge detection: optional Gaussian smoothing, Sobel gradients, squared
//! magnitude thresholding and directional thinning.
//!
//! - Borders are zero padded by the convolver, so the outermost pixels see
//!   partial kernels.
//! - Every step allocates fresh planes; inputs are never modified.

pub mod grad;
pub mod nms;

pub use grad::{gaussian_blur, sobel_gradients, unpack_gradients, EdgeMap, Gradients};
pub use nms::{is_local_max, thin_edges, ThinDirection};

use crate::diagnostics::{observe, NoopObserver, Stage, StageObserver};
use crate::error::Result;
use crate::image::ImageF64;
use log::debug;
use std::borrow::Cow;

/// Knobs of the edge detector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EdgeParams {
    /// Compared against the squared gradient magnitude.
    pub edge_threshold: u64,
    /// Apply the 5×5 Gaussian before differentiating.
    pub blur: bool,
}

/// Detect edges on an intensity plane.
pub fn detect_edges(l: &ImageF64, params: EdgeParams) -> Result<EdgeMap> {
    detect_edges_observed(l, params, &mut NoopObserver)
}

/// [`detect_edges`] reporting each sub-stage to `observer`.
pub fn detect_edges_observed(
    l: &ImageF64,
    params: EdgeParams,
    observer: &mut dyn StageObserver,
) -> Result<EdgeMap> {
    let smoothed: Cow<'_, ImageF64> = if params.blur {
        Cow::Owned(observe(observer, Stage::Blur, || gaussian_blur(l)))
    } else {
        Cow::Borrowed(l)
    };
    let grad = observe(observer, Stage::Sobel, || sobel_gradients(&smoothed));
    let unpacked = observe(observer, Stage::Unpack, || {
        unpack_gradients(&grad, params.edge_threshold)
    });
    let candidates = unpacked.edges.count();
    let edges = observe(observer, Stage::Thinning, || {
        thin_edges(&unpacked.edges, &unpacked.magnitude, &unpacked.angle)
    })?;
    debug!(
        "detect_edges w={} h={} blur={} threshold={} candidates={} thinned={}",
        l.w,
        l.h,
        params.blur,
        params.edge_threshold,
        candidates,
        edges.count()
    );
    Ok(EdgeMap {
        edges,
        magnitude: unpacked.magnitude,
        angle: unpacked.angle,
    })
}
