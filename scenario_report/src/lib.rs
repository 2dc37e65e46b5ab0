//! Summarise scenario output directories.
//!
//! Each immediate subdirectory of a root directory is treated as one scenario. For every scenario
//! the number of `state-*.json` and `errors-*.json` entries is counted, and the results can be
//! rendered as a fixed-width table followed by a JSON block of totals.
//!
//! ```rust,no_run
//! use scenario_report::{render_report, Report};
//! use std::path::Path;
//!
//! let report = Report::collect(Path::new("output")).unwrap();
//! render_report(&report, &mut std::io::stdout()).unwrap();
//! ```

#[macro_use]
extern crate log;

mod collect;
mod error;
mod model;
mod render;

pub use collect::{collect_scenarios, resolve_root, ERROR_FILE_PATTERN, STATE_FILE_PATTERN};
pub use error::ReportError;
pub use model::{Report, ReportTotals, ScenarioRecord};
pub use render::{render_report, SEPARATOR_WIDTH};
