use super::observer::{Stage, StageObserver};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Timing entry describing a single stage of the pipeline.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub label: String,
    pub elapsed_ms: f64,
}

impl StageTiming {
    pub fn new(label: impl Into<String>, elapsed_ms: f64) -> Self {
        Self {
            label: label.into(),
            elapsed_ms,
        }
    }
}

/// Aggregated timing trace for one pipeline run.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    pub fn push(&mut self, label: impl Into<String>, elapsed_ms: f64) {
        self.total_ms += elapsed_ms;
        self.stages.push(StageTiming::new(label, elapsed_ms));
    }

    /// Elapsed time of the first stage recorded under `label`.
    pub fn get(&self, label: &str) -> Option<f64> {
        self.stages
            .iter()
            .find(|s| s.label == label)
            .map(|s| s.elapsed_ms)
    }
}

impl StageObserver for TimingBreakdown {
    fn on_stage(&mut self, stage: Stage, elapsed: Duration) {
        self.push(stage.label(), elapsed.as_secs_f64() * 1000.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_accumulates_stage_times() {
        let mut t = TimingBreakdown::default();
        t.on_stage(Stage::Blur, Duration::from_millis(3));
        t.on_stage(Stage::Sobel, Duration::from_millis(2));
        assert_eq!(t.stages.len(), 2);
        assert!((t.total_ms - 5.0).abs() < 1e-9);
        assert!(t.get("gaussian convolution").is_some_and(|ms| (ms - 3.0).abs() < 1e-9));
        assert_eq!(t.get("image load"), None);
    }
}
