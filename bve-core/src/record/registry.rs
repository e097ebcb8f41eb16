//! Registry of loggers shared by label.
use super::{CsvLogger, InMemoryLogger, Logger, Record, TerminalLogger};
use anyhow::Result;
use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

/// Creates the logger used by a component of an experiment.
///
/// * `label` - Name of the component, e.g. `"actor"`, `"learner"` or `"evaluator"`.
/// * `steps_key` - Key of the step counter the component reports against.
/// * `task_id` - Index of the component among its replicas, e.g. the actor id.
pub trait LoggerFactory: Send + Sync {
    /// Creates a logger.
    fn make_logger(
        &self,
        label: &str,
        steps_key: Option<&str>,
        task_id: Option<usize>,
    ) -> Result<Box<dyn Logger>>;
}

impl<F> LoggerFactory for F
where
    F: Fn(&str, Option<&str>, Option<usize>) -> Result<Box<dyn Logger>> + Send + Sync,
{
    fn make_logger(
        &self,
        label: &str,
        steps_key: Option<&str>,
        task_id: Option<usize>,
    ) -> Result<Box<dyn Logger>> {
        self(label, steps_key, task_id)
    }
}

/// Logger factory used when an experiment does not provide one.
pub fn make_default_logger(
    label: &str,
    _steps_key: Option<&str>,
    _task_id: Option<usize>,
) -> Result<Box<dyn Logger>> {
    Ok(Box::new(TerminalLogger::new(label)))
}

struct Entry {
    memory: InMemoryLogger,
    csv: Option<CsvLogger>,
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A registry of in-memory loggers keyed by label.
///
/// Every call to [`LoggerFactory::make_logger`] with the same label returns a
/// handle to the same underlying logger, so records written by the components
/// of an experiment can be read back with [`LoggerRegistry::records`] once it
/// finishes. Clones of the registry share their loggers, which is how the
/// registry is handed to experiment components.
///
/// With [`LoggerRegistry::csv_dir`], each label is mirrored to
/// `<dir>/<label>/logs.csv`.
#[derive(Clone, Default)]
pub struct LoggerRegistry {
    entries: Arc<Mutex<BTreeMap<String, Arc<Mutex<Entry>>>>>,
    csv_dir: Option<PathBuf>,
    terminal: bool,
}

impl LoggerRegistry {
    /// Constructs an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mirrors every label to a CSV log under `dir`.
    pub fn csv_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.csv_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Also prints records with a [`TerminalLogger`].
    pub fn terminal(mut self, terminal: bool) -> Self {
        self.terminal = terminal;
        self
    }

    fn entry(&self, label: &str) -> Result<Arc<Mutex<Entry>>> {
        let mut entries = lock(&self.entries);
        if let Some(entry) = entries.get(label) {
            return Ok(entry.clone());
        }

        let csv = match &self.csv_dir {
            Some(dir) => Some(CsvLogger::new(dir, label)?),
            None => None,
        };
        let entry = Arc::new(Mutex::new(Entry {
            memory: InMemoryLogger::new(),
            csv,
        }));
        entries.insert(label.to_string(), entry.clone());
        Ok(entry)
    }

    /// Returns the labels of the loggers created so far.
    pub fn labels(&self) -> Vec<String> {
        lock(&self.entries).keys().cloned().collect()
    }

    /// Returns a copy of the records written with the given label.
    ///
    /// An unknown label has no records.
    pub fn records(&self, label: &str) -> Vec<Record> {
        let entry = lock(&self.entries).get(label).cloned();
        match entry {
            Some(entry) => lock(&entry).memory.data().to_vec(),
            None => vec![],
        }
    }
}

impl LoggerFactory for LoggerRegistry {
    fn make_logger(
        &self,
        label: &str,
        _steps_key: Option<&str>,
        _task_id: Option<usize>,
    ) -> Result<Box<dyn Logger>> {
        let terminal = if self.terminal {
            Some(TerminalLogger::new(label))
        } else {
            None
        };

        Ok(Box::new(RegisteredLogger {
            entry: self.entry(label)?,
            terminal,
        }))
    }
}

/// Handle to a logger owned by a [`LoggerRegistry`].
struct RegisteredLogger {
    entry: Arc<Mutex<Entry>>,
    terminal: Option<TerminalLogger>,
}

impl Logger for RegisteredLogger {
    fn write(&mut self, record: Record) -> Result<()> {
        {
            let mut entry = lock(&self.entry);
            if let Some(csv) = entry.csv.as_mut() {
                csv.write(record.clone())?;
            }
            entry.memory.write(record.clone())?;
        }
        if let Some(terminal) = self.terminal.as_mut() {
            terminal.write(record)?;
        }
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        // Other handles of the same label may still write.
        let mut entry = lock(&self.entry);
        if let Some(csv) = entry.csv.as_mut() {
            csv.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::RecordValue;
    use tempdir::TempDir;

    #[test]
    fn test_same_label_shares_logger() -> Result<()> {
        let registry = LoggerRegistry::new();
        let factory = registry.clone();
        let mut l1 = factory.make_logger("evaluator", None, None)?;
        let mut l2 = factory.make_logger("evaluator", Some("actor_steps"), Some(3))?;
        l1.write(Record::from_scalar("episode_return", 1.0))?;
        l2.write(Record::from_scalar("episode_return", 2.0))?;

        let records = registry.records("evaluator");
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].get_scalar("episode_return")?, 2.0);
        assert_eq!(registry.labels(), vec!["evaluator".to_string()]);
        assert!(registry.records("learner").is_empty());
        Ok(())
    }

    #[test]
    fn test_csv_mirror() -> Result<()> {
        let dir = TempDir::new("registry")?;
        let registry = LoggerRegistry::new().csv_dir(dir.path());
        let mut logger = registry.make_logger("actor", None, None)?;
        logger.write(Record::from_slice(&[
            ("actor_steps", RecordValue::Integer(5)),
            ("episode_return", RecordValue::Scalar(3.0)),
        ]))?;
        logger.close()?;

        let text = std::fs::read_to_string(dir.path().join("actor").join("logs.csv"))?;
        assert_eq!(text, "actor_steps,episode_return\n5,3\n");
        Ok(())
    }

    #[test]
    fn test_closure_factory() -> Result<()> {
        let factory = |label: &str, _: Option<&str>, _: Option<usize>| -> Result<Box<dyn Logger>> {
            Ok(Box::new(TerminalLogger::new(label)))
        };
        let mut logger = factory.make_logger("learner", None, None)?;
        logger.write(Record::from_scalar("loss", 0.5))?;
        Ok(())
    }
}
