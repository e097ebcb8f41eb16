use super::{Logger, Record};
use crate::error::BveError;
use anyhow::{Context, Result};
use log::info;
use std::{
    fs::{self, File},
    path::{Path, PathBuf},
};

/// Name of the file written in the directory of each label.
pub const CSV_LOG_FILE: &str = "logs.csv";

/// Writes records as rows of `<directory>/<label>/logs.csv`.
///
/// The header is taken from the keys of the first non-empty record. Later
/// records may omit columns, which are then left empty, but must not add new
/// ones.
pub struct CsvLogger {
    label: String,
    path: PathBuf,
    writer: Option<csv::Writer<File>>,
    header: Option<Vec<String>>,
}

impl CsvLogger {
    /// Creates `<directory>/<label>/logs.csv`, truncating an existing file.
    pub fn new(directory: impl AsRef<Path>, label: impl Into<String>) -> Result<Self> {
        let label = label.into();
        let dir = directory.as_ref().join(&label);
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create log directory {:?}", dir))?;
        let path = dir.join(CSV_LOG_FILE);
        let writer = csv::WriterBuilder::new()
            .delimiter(b',')
            .quote(b'"')
            .from_path(&path)
            .with_context(|| format!("Failed to create {:?}", path))?;
        info!("Logging '{}' to {:?}", label, path);

        Ok(Self {
            label,
            path,
            writer: Some(writer),
            header: None,
        })
    }

    /// Returns the path of the CSV file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Flushes written rows to the file.
    pub fn flush(&mut self) -> Result<()> {
        if let Some(writer) = self.writer.as_mut() {
            writer.flush()?;
        }
        Ok(())
    }
}

impl Logger for CsvLogger {
    fn write(&mut self, record: Record) -> Result<()> {
        if record.is_empty() {
            return Ok(());
        }

        let writer = match self.writer.as_mut() {
            Some(writer) => writer,
            None => return Err(BveError::LoggerClosed(self.label.clone()).into()),
        };

        let header = match self.header.take() {
            Some(header) => header,
            None => {
                let header = record.keys().cloned().collect::<Vec<_>>();
                writer.write_record(&header)?;
                header
            }
        };
        let unknown = record.keys().find(|k| !header.contains(k)).cloned();
        let row = header
            .iter()
            .map(|k| record.get(k).map(|v| v.to_string()).unwrap_or_default())
            .collect::<Vec<_>>();
        self.header = Some(header);

        if let Some(key) = unknown {
            return Err(BveError::CsvColumnError {
                key,
                path: self.path.clone(),
            }
            .into());
        }

        writer.write_record(&row)?;
        writer.flush()?;
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        if let Some(mut writer) = self.writer.take() {
            writer.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::RecordValue;
    use tempdir::TempDir;

    fn read(path: &Path) -> String {
        fs::read_to_string(path).unwrap()
    }

    #[test]
    fn test_header_from_first_record() -> Result<()> {
        let dir = TempDir::new("csv_logger")?;
        let mut logger = CsvLogger::new(dir.path(), "evaluator")?;
        logger.write(Record::from_slice(&[
            ("episode_return", RecordValue::Scalar(10.5)),
            ("actor_steps", RecordValue::Integer(100)),
        ]))?;
        logger.write(Record::from_slice(&[("actor_steps", RecordValue::Integer(200))]))?;
        logger.close()?;

        let path = dir.path().join("evaluator").join(CSV_LOG_FILE);
        assert_eq!(logger.path(), path.as_path());
        assert_eq!(read(&path), "actor_steps,episode_return\n100,10.5\n200,\n");
        Ok(())
    }

    #[test]
    fn test_new_column_is_rejected() -> Result<()> {
        let dir = TempDir::new("csv_logger")?;
        let mut logger = CsvLogger::new(dir.path(), "actor")?;
        logger.write(Record::from_scalar("a", 1.0))?;
        let err = logger.write(Record::from_scalar("b", 1.0)).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<BveError>(),
            Some(BveError::CsvColumnError { .. })
        ));
        Ok(())
    }

    #[test]
    fn test_write_after_close() -> Result<()> {
        let dir = TempDir::new("csv_logger")?;
        let mut logger = CsvLogger::new(dir.path(), "learner")?;
        logger.close()?;
        assert!(logger.write(Record::from_scalar("loss", 0.1)).is_err());
        Ok(())
    }
}
