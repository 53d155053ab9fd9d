//! Injectable per-stage observation hook.
//!
//! Stages never print or time themselves; the pipeline wraps each one with
//! [`observe`] and hands the elapsed time to a [`StageObserver`].
use log::info;
use serde::Serialize;
use std::time::{Duration, Instant};

/// Pipeline stages in execution order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Stage {
    Load,
    Grayscale,
    Blur,
    Sobel,
    Unpack,
    Thinning,
    Quantize,
    Render,
}

impl Stage {
    pub const ALL: [Stage; 8] = [
        Stage::Load,
        Stage::Grayscale,
        Stage::Blur,
        Stage::Sobel,
        Stage::Unpack,
        Stage::Thinning,
        Stage::Quantize,
        Stage::Render,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Stage::Load => "image load",
            Stage::Grayscale => "grayscale conversion",
            Stage::Blur => "gaussian convolution",
            Stage::Sobel => "sobel filter convolution",
            Stage::Unpack => "sobel unpacking",
            Stage::Thinning => "edge thinning",
            Stage::Quantize => "ascii conversion",
            Stage::Render => "rendering",
        }
    }
}

pub trait StageObserver {
    fn on_stage(&mut self, stage: Stage, elapsed: Duration);
}

/// Discards every observation.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl StageObserver for NoopObserver {
    fn on_stage(&mut self, _stage: Stage, _elapsed: Duration) {}
}

/// Logs one `info` line per stage.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogObserver;

impl StageObserver for LogObserver {
    fn on_stage(&mut self, stage: Stage, elapsed: Duration) {
        info!(
            "Time taken by {}: {:.3} ms",
            stage.label(),
            elapsed.as_secs_f64() * 1000.0
        );
    }
}

impl<O: StageObserver + ?Sized> StageObserver for &mut O {
    fn on_stage(&mut self, stage: Stage, elapsed: Duration) {
        (**self).on_stage(stage, elapsed);
    }
}

impl<O: StageObserver> StageObserver for Option<O> {
    fn on_stage(&mut self, stage: Stage, elapsed: Duration) {
        if let Some(inner) = self {
            inner.on_stage(stage, elapsed);
        }
    }
}

impl<A: StageObserver, B: StageObserver> StageObserver for (A, B) {
    fn on_stage(&mut self, stage: Stage, elapsed: Duration) {
        self.0.on_stage(stage, elapsed);
        self.1.on_stage(stage, elapsed);
    }
}

/// Run `f`, report its wall time for `stage`, and return its output.
pub fn observe<T>(observer: &mut dyn StageObserver, stage: Stage, f: impl FnOnce() -> T) -> T {
    let start = Instant::now();
    let out = f();
    observer.on_stage(stage, start.elapsed());
    out
}
