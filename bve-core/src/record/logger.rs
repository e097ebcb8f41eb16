use super::Record;
use anyhow::Result;

/// Writes records to an output destination.
///
/// Actors, learners and evaluators each get their own logger, identified by a
/// label such as `"actor"` or `"evaluator"`.
pub trait Logger: Send {
    /// Writes a record.
    fn write(&mut self, record: Record) -> Result<()>;

    /// Flushes buffered output and releases the destination.
    ///
    /// Writing after closing is an error for loggers that own a destination.
    fn close(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<L: Logger + ?Sized> Logger for Box<L> {
    fn write(&mut self, record: Record) -> Result<()> {
        (**self).write(record)
    }

    fn close(&mut self) -> Result<()> {
        (**self).close()
    }
}

/// A logger that ignores any record.
#[derive(Debug, Default)]
pub struct NullLogger {}

impl Logger for NullLogger {
    fn write(&mut self, _record: Record) -> Result<()> {
        Ok(())
    }
}

/// Writes every record to each of the wrapped loggers.
#[derive(Default)]
pub struct FanoutLogger {
    loggers: Vec<Box<dyn Logger>>,
}

impl FanoutLogger {
    /// Constructs the logger.
    pub fn new(loggers: Vec<Box<dyn Logger>>) -> Self {
        Self { loggers }
    }

    /// Adds a logger.
    pub fn push(mut self, logger: Box<dyn Logger>) -> Self {
        self.loggers.push(logger);
        self
    }
}

impl Logger for FanoutLogger {
    fn write(&mut self, record: Record) -> Result<()> {
        for logger in self.loggers.iter_mut() {
            logger.write(record.clone())?;
        }
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        for logger in self.loggers.iter_mut() {
            logger.close()?;
        }
        Ok(())
    }
}
