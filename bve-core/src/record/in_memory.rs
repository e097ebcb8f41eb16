use super::{Logger, Record};
use anyhow::Result;

/// Keeps every record in memory.
///
/// This is used for inspecting what an experiment logged once it has finished,
/// for example to plot evaluation returns.
#[derive(Debug, Default, Clone)]
pub struct InMemoryLogger {
    buf: Vec<Record>,
}

impl InMemoryLogger {
    /// Constructs the logger.
    pub fn new() -> Self {
        Self { buf: Vec::default() }
    }

    /// Returns an iterator over the records.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.buf.iter()
    }

    /// Returns the records written so far.
    pub fn data(&self) -> &[Record] {
        &self.buf
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
}

impl Logger for InMemoryLogger {
    fn write(&mut self, record: Record) -> Result<()> {
        self.buf.push(record);
        Ok(())
    }
}
