//! Observability around the pipeline: the stage hook, timing records, run
//! reports and text dumps of intermediate planes.

pub mod dump;
pub mod observer;
pub mod report;
pub mod timing;

pub use dump::{render_intensity, render_mask};
pub use observer::{observe, LogObserver, NoopObserver, Stage, StageObserver};
pub use report::RunReport;
pub use timing::{StageTiming, TimingBreakdown};
