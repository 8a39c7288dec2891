pub mod generator;
pub mod progress;

pub use generator::{generate_report, timer_summary};
pub use progress::{build_progress, ProgressReport, RatioView, TracePoint, TraceView, NO_DATA_TEXT};
