use super::{Logger, Record};
use anyhow::Result;
use log::info;
use std::time::{Duration, Instant};

/// Writes records to the log output with [`log::info!`].
///
/// Records arriving less than `time_delta` after the previously printed one
/// are dropped.
pub struct TerminalLogger {
    label: String,
    time_delta: Duration,
    last_write: Option<Instant>,
}

impl TerminalLogger {
    /// Constructs a logger printing every record.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            time_delta: Duration::from_secs(0),
            last_write: None,
        }
    }

    /// Sets the minimum interval between two printed records.
    pub fn time_delta(mut self, time_delta: Duration) -> Self {
        self.time_delta = time_delta;
        self
    }
}

/// Formats a record as `key = value | key = value`.
pub fn format_record(record: &Record) -> String {
    record
        .iter()
        .map(|(k, v)| format!("{} = {}", k, v))
        .collect::<Vec<_>>()
        .join(" | ")
}

impl Logger for TerminalLogger {
    fn write(&mut self, record: Record) -> Result<()> {
        let now = Instant::now();
        if let Some(last) = self.last_write {
            if now.duration_since(last) < self.time_delta {
                return Ok(());
            }
        }
        info!("[{}] {}", self.label, format_record(&record));
        self.last_write = Some(now);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::RecordValue;

    #[test]
    fn test_format_record() {
        let record = Record::from_slice(&[
            ("episode_return", RecordValue::Scalar(1.5)),
            ("actor_steps", RecordValue::Integer(10)),
        ]);
        assert_eq!(
            format_record(&record),
            "actor_steps = 10 | episode_return = 1.5"
        );
    }
}
