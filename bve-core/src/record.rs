//! Types and traits for logging experiment metrics.
//!
//! # Core Components
//!
//! * [`Record`] - A container of named values
//! * [`RecordValue`] - The types of values a record can hold
//! * [`Logger`] - Writes records to some destination
//! * [`LoggerFactory`] - Creates the logger of each experiment component
//! * [`LoggerRegistry`] - Shares one in-memory logger per label
//!
//! Loggers shipped with the crate are [`InMemoryLogger`], [`CsvLogger`],
//! [`TerminalLogger`], [`FanoutLogger`] and [`NullLogger`].
//!
//! # Basic Usage
//!
//! ```rust
//! use bve_core::record::{Logger, LoggerFactory, LoggerRegistry, Record, RecordValue};
//!
//! # fn main() -> anyhow::Result<()> {
//! let registry = LoggerRegistry::new();
//! let mut logger = registry.make_logger("evaluator", None, None)?;
//!
//! let mut record = Record::empty();
//! record.insert("actor_steps", RecordValue::Integer(1000));
//! record.insert("episode_return", RecordValue::Scalar(21.0));
//! logger.write(record)?;
//!
//! assert_eq!(registry.records("evaluator").len(), 1);
//! # Ok(())
//! # }
//! ```
mod base;
mod csv_logger;
mod in_memory;
mod logger;
mod registry;
mod terminal;

pub use base::{Record, RecordValue};
pub use csv_logger::{CsvLogger, CSV_LOG_FILE};
pub use in_memory::InMemoryLogger;
pub use logger::{FanoutLogger, Logger, NullLogger};
pub use registry::{make_default_logger, LoggerFactory, LoggerRegistry};
pub use terminal::{format_record, TerminalLogger};
