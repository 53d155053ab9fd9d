use super::TimingBreakdown;
use serde::Serialize;
use std::path::PathBuf;

/// Summary of one input processed by the binary, written with `--report`.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReport {
    pub input: PathBuf,
    pub width: usize,
    pub height: usize,
    pub columns: usize,
    pub rows: usize,
    pub edge_pixels: usize,
    pub timings: TimingBreakdown,
}
