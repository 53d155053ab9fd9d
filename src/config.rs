//! Run parameters and their JSON configuration file.
//!
//! [`AsciiConfig`] is what users write (raw threshold, every field optional);
//! [`AsciiParams`] is what the pipeline consumes (threshold already squared,
//! window sizes validated).
use crate::ascii::BlockParams;
use crate::edges::EdgeParams;
use crate::error::{AsciiError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Raw edge threshold before squaring.
pub const DEFAULT_THRESHOLD: i64 = 100_000;

/// Validated parameters for one pipeline run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AsciiParams {
    /// Compared against the squared gradient magnitude.
    pub edge_threshold: u64,
    /// A block needs more than this many edge pixels to get a glyph.
    pub particle_threshold: usize,
    /// Block width in pixels.
    pub x_win: usize,
    /// Block height in pixels.
    pub y_win: usize,
    /// Apply the Gaussian blur before differentiating.
    pub blur: bool,
}

impl Default for AsciiParams {
    fn default() -> Self {
        Self {
            edge_threshold: squared_threshold(DEFAULT_THRESHOLD),
            particle_threshold: 0,
            x_win: 1,
            y_win: 2,
            blur: true,
        }
    }
}

impl AsciiParams {
    pub fn validate(&self) -> Result<()> {
        self.block_params().validate()
    }

    pub fn edge_params(&self) -> EdgeParams {
        EdgeParams {
            edge_threshold: self.edge_threshold,
            blur: self.blur,
        }
    }

    pub fn block_params(&self) -> BlockParams {
        BlockParams {
            x_win: self.x_win,
            y_win: self.y_win,
            particle_threshold: self.particle_threshold,
        }
    }
}

/// Square a raw threshold, saturating instead of overflowing.
pub fn squared_threshold(raw: i64) -> u64 {
    let abs = raw.unsigned_abs();
    abs.saturating_mul(abs)
}

/// User-facing configuration, loadable from JSON.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AsciiConfig {
    /// Raw gradient threshold; squared before use.
    pub threshold: i64,
    /// Minimum edge pixels per block (exclusive).
    pub particles: usize,
    pub x_win: usize,
    pub y_win: usize,
    pub blur: bool,
}

impl Default for AsciiConfig {
    fn default() -> Self {
        let params = AsciiParams::default();
        Self {
            threshold: DEFAULT_THRESHOLD,
            particles: params.particle_threshold,
            x_win: params.x_win,
            y_win: params.y_win,
            blur: params.blur,
        }
    }
}

impl AsciiConfig {
    pub fn to_params(&self) -> Result<AsciiParams> {
        let params = AsciiParams {
            edge_threshold: squared_threshold(self.threshold),
            particle_threshold: self.particles,
            x_win: self.x_win,
            y_win: self.y_win,
            blur: self.blur,
        };
        params.validate()?;
        Ok(params)
    }
}

pub fn load_config(path: &Path) -> Result<AsciiConfig> {
    let data = fs::read_to_string(path).map_err(|e| AsciiError::Config {
        path: path.to_path_buf(),
        message: format!("failed to read: {e}"),
    })?;
    serde_json::from_str(&data).map_err(|e| AsciiError::Config {
        path: path.to_path_buf(),
        message: format!("failed to parse: {e}"),
    })
}
