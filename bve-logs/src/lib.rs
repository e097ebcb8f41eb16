//! Reads the CSV logs of an experiment and plots episode returns.
//!
//! An experiment writes `{actor,evaluator,learner}/logs.csv` under its
//! results directory. [`LogSet::load`] reads the three files; columns are
//! selected by header or, for old logs, by position through
//! [`ColumnSelector`]. [`ReturnCurve`] renders two numeric columns as a line
//! plot.
//!
//! ```no_run
//! use bve_logs::{ColumnSelector, LogSet, ReturnCurve};
//!
//! # fn main() -> Result<(), bve_logs::LogError> {
//! let logs = LogSet::load("results")?;
//! let curve = ReturnCurve::from_table(
//!     &logs.evaluator,
//!     &ColumnSelector::name("actor_steps"),
//!     &ColumnSelector::name("episode_return"),
//! )?;
//! curve.save("returns.png")?;
//! # Ok(())
//! # }
//! ```
mod error;
mod ingest;
mod plot;
pub use error::LogError;
pub use ingest::{
    ColumnSelector, LogSet, LogTable, DEFAULT_RETURN_COLUMN, DEFAULT_STEP_COLUMN, LOG_FILE,
};
pub use plot::{ReturnCurve, PLOT_SIZE};
