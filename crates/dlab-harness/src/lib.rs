//! Wall-clock benchmark harness for the decimation strategies.
//!
//! The harness owns everything the kernels deliberately do not: buffer
//! allocation, synthetic input generation, timing and reporting. Each
//! strategy is timed on a fresh destination buffer and its output is checked
//! byte for byte against the `RowColIndexed` reference.

mod config;
mod report;
mod run;
mod timing;

pub use config::{HarnessConfig, Pattern};
pub use report::{RunRecord, format_line, format_report};
pub use run::{RunOutcome, StrategyRun, run_all, run_strategy};
pub use timing::{Stopwatch, time};
