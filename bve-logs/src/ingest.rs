//! Reading of CSV logs.
use crate::LogError;
use csv::{ReaderBuilder, StringRecord};
use log::info;
use std::{
    convert::Infallible,
    fmt,
    fs::File,
    path::{Path, PathBuf},
    str::FromStr,
};

/// Name of the log file in each label directory.
pub const LOG_FILE: &str = "logs.csv";

/// Default column of the step counter.
pub const DEFAULT_STEP_COLUMN: &str = "actor_steps";

/// Default column of the episode return.
pub const DEFAULT_RETURN_COLUMN: &str = "episode_return";

/// Selects a column of a [`LogTable`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColumnSelector {
    /// Column with the given header.
    Name(String),

    /// Column at the given position, `0` being the first.
    Index(usize),
}

impl ColumnSelector {
    /// Selects a column by its header.
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }
}

impl FromStr for ColumnSelector {
    type Err = Infallible;

    /// Integers select by position, anything else by header.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.parse::<usize>() {
            Ok(i) => Self::Index(i),
            Err(_) => Self::Name(s.to_string()),
        })
    }
}

impl fmt::Display for ColumnSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => write!(f, "'{}'", name),
            Self::Index(i) => write!(f, "#{}", i),
        }
    }
}

/// The content of a CSV log, header first.
#[derive(Clone, Debug)]
pub struct LogTable {
    path: PathBuf,
    header: Vec<String>,
    rows: Vec<StringRecord>,
}

impl LogTable {
    /// Reads a whole log file.
    ///
    /// Cells are comma separated and may be quoted with `"`.
    pub fn read(path: impl AsRef<Path>) -> Result<Self, LogError> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path).map_err(|source| LogError::Open {
            path: path.clone(),
            source,
        })?;
        let csv_err = |source| LogError::Csv {
            path: path.clone(),
            source,
        };
        let mut rdr = ReaderBuilder::new()
            .delimiter(b',')
            .quote(b'"')
            .has_headers(true)
            .flexible(true)
            .from_reader(file);
        let header = rdr
            .headers()
            .map_err(csv_err)?
            .iter()
            .map(str::to_string)
            .collect();
        let rows = rdr
            .records()
            .collect::<Result<Vec<_>, _>>()
            .map_err(csv_err)?;

        Ok(Self { path, header, rows })
    }

    /// Path of the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Column headers.
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if there is no data row.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The last data row.
    pub fn last_row(&self) -> Option<Vec<&str>> {
        self.rows.last().map(|row| row.iter().collect())
    }

    /// Position of a selected column.
    ///
    /// Positions are not checked against the header: rows may be wider than
    /// it, and each row is checked when its cell is read.
    pub fn column_index(&self, column: &ColumnSelector) -> Result<usize, LogError> {
        match column {
            ColumnSelector::Name(name) => self.header.iter().position(|h| h == name).ok_or_else(
                || LogError::MissingColumn {
                    path: self.path.clone(),
                    column: column.to_string(),
                },
            ),
            ColumnSelector::Index(i) => Ok(*i),
        }
    }

    /// Cells of a column.
    pub fn column(&self, column: &ColumnSelector) -> Result<Vec<&str>, LogError> {
        let index = self.column_index(column)?;
        self.rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                row.get(index).ok_or_else(|| LogError::MissingCell {
                    path: self.path.clone(),
                    line: line_of(row, i),
                    column: column.to_string(),
                })
            })
            .collect()
    }

    /// Cells of a column parsed to `T`.
    ///
    /// Fails on the first cell that does not parse; no cell is skipped.
    pub fn numeric_column<T: FromStr>(&self, column: &ColumnSelector) -> Result<Vec<T>, LogError> {
        let cells = self.column(column)?;
        cells
            .into_iter()
            .zip(&self.rows)
            .enumerate()
            .map(|(i, (cell, row))| {
                cell.trim().parse::<T>().map_err(|_| LogError::Parse {
                    path: self.path.clone(),
                    line: line_of(row, i),
                    column: column.to_string(),
                    value: cell.to_string(),
                })
            })
            .collect()
    }
}

fn line_of(row: &StringRecord, index: usize) -> u64 {
    row.position()
        .map(|p| p.line())
        .unwrap_or(index as u64 + 2)
}

/// Logs of the actor, the evaluator and the learner of an experiment.
#[derive(Clone, Debug)]
pub struct LogSet {
    /// Log of the training actor.
    pub actor: LogTable,

    /// Log of the evaluator.
    pub evaluator: LogTable,

    /// Log of the learner.
    pub learner: LogTable,
}

impl LogSet {
    /// Reads `{actor,evaluator,learner}/logs.csv` under `results_dir`.
    pub fn load(results_dir: impl AsRef<Path>) -> Result<Self, LogError> {
        let dir = results_dir.as_ref();
        let read = |label: &str| LogTable::read(dir.join(label).join(LOG_FILE));
        let logs = Self {
            actor: read("actor")?,
            evaluator: read("evaluator")?,
            learner: read("learner")?,
        };
        info!(
            "Loaded {} actor, {} evaluator and {} learner rows from {}",
            logs.actor.len(),
            logs.evaluator.len(),
            logs.learner.len(),
            dir.display()
        );
        Ok(logs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempdir::TempDir;

    const EVALUATOR: &str = "\
actor_episodes,actor_steps,episode_length,evaluator_episodes,evaluator_steps,steps_per_second,episode_return
0,1000,200,1,200,510.2,10.5
1,2000,180,2,380,498.7,12
2,3000,\"210\",3,590,505.0,-3.25
";

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn selector_from_str() {
        assert_eq!("6".parse::<ColumnSelector>().unwrap(), ColumnSelector::Index(6));
        assert_eq!(
            "episode_return".parse::<ColumnSelector>().unwrap(),
            ColumnSelector::name("episode_return")
        );
    }

    #[test]
    fn positional_columns_match_manual_parse() {
        let dir = TempDir::new("ingest").unwrap();
        let table = LogTable::read(write(&dir, "logs.csv", EVALUATOR)).unwrap();

        let manual: Vec<Vec<&str>> = EVALUATOR
            .lines()
            .skip(1)
            .map(|l| l.split(',').collect())
            .collect();
        let steps: Vec<i64> = table.numeric_column(&ColumnSelector::Index(1)).unwrap();
        let returns: Vec<f64> = table.numeric_column(&ColumnSelector::Index(6)).unwrap();

        assert_eq!(steps.len(), manual.len());
        assert_eq!(returns.len(), manual.len());
        for (i, row) in manual.iter().enumerate() {
            assert_eq!(steps[i], row[1].parse::<i64>().unwrap());
            assert_eq!(returns[i], row[6].parse::<f64>().unwrap());
        }
    }

    #[test]
    fn named_columns_follow_header() {
        let dir = TempDir::new("ingest").unwrap();
        let table = LogTable::read(write(&dir, "logs.csv", EVALUATOR)).unwrap();

        let lengths: Vec<usize> = table
            .numeric_column(&ColumnSelector::name("episode_length"))
            .unwrap();
        assert_eq!(lengths, vec![200, 180, 210]);
        assert_eq!(table.last_row().unwrap()[0], "2");
    }

    #[test]
    fn non_numeric_cell_fails() {
        let dir = TempDir::new("ingest").unwrap();
        let path = write(&dir, "logs.csv", "step,ret\n1,10.0\n2,n/a\n");
        let table = LogTable::read(path).unwrap();

        match table.numeric_column::<f64>(&ColumnSelector::name("ret")) {
            Err(LogError::Parse { line, value, .. }) => {
                assert_eq!(line, 3);
                assert_eq!(value, "n/a");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn integer_column_rejects_float() {
        let dir = TempDir::new("ingest").unwrap();
        let table = LogTable::read(write(&dir, "logs.csv", "step\n1.5\n")).unwrap();
        assert!(table.numeric_column::<i64>(&ColumnSelector::Index(0)).is_err());
    }

    #[test]
    fn missing_columns_fail() {
        let dir = TempDir::new("ingest").unwrap();
        let table = LogTable::read(write(&dir, "logs.csv", "a,b\n1,2\n")).unwrap();

        assert!(matches!(
            table.column(&ColumnSelector::Index(2)),
            Err(LogError::MissingCell { line: 2, .. })
        ));
        assert!(matches!(
            table.column(&ColumnSelector::name("c")),
            Err(LogError::MissingColumn { .. })
        ));
    }

    #[test]
    fn short_row_fails() {
        let dir = TempDir::new("ingest").unwrap();
        let table = LogTable::read(write(&dir, "logs.csv", "a,b\n1,2\n3\n")).unwrap();
        assert!(matches!(
            table.column(&ColumnSelector::name("b")),
            Err(LogError::MissingCell { line: 3, .. })
        ));
    }

    #[test]
    fn header_only_yields_empty_columns() {
        let dir = TempDir::new("ingest").unwrap();
        let table = LogTable::read(write(&dir, "logs.csv", "step,ret\n")).unwrap();

        assert!(table.is_empty());
        assert!(table.last_row().is_none());
        let returns: Vec<f64> = table.numeric_column(&ColumnSelector::name("ret")).unwrap();
        assert!(returns.is_empty());
    }

    #[test]
    fn header_only_yields_empty_positional_columns() {
        let dir = TempDir::new("ingest").unwrap();
        let table = LogTable::read(write(&dir, "logs.csv", "step,ret\n")).unwrap();

        let returns: Vec<f64> = table.numeric_column(&ColumnSelector::Index(6)).unwrap();
        assert!(returns.is_empty());
    }

    #[test]
    fn empty_file_yields_empty_columns() {
        let dir = TempDir::new("ingest").unwrap();
        let table = LogTable::read(write(&dir, "logs.csv", "")).unwrap();

        assert!(table.header().is_empty());
        assert!(table.is_empty());
        let steps: Vec<i64> = table.numeric_column(&ColumnSelector::Index(1)).unwrap();
        let returns: Vec<f64> = table.numeric_column(&ColumnSelector::Index(6)).unwrap();
        assert!(steps.is_empty());
        assert!(returns.is_empty());
    }

    #[test]
    fn rows_wider_than_header_are_indexed() {
        let dir = TempDir::new("ingest").unwrap();
        let path = write(&dir, "logs.csv", "t,step\nh0,1,-,-,-,-,10.0\n");
        let table = LogTable::read(path).unwrap();

        let steps: Vec<i64> = table.numeric_column(&ColumnSelector::Index(1)).unwrap();
        let returns: Vec<f64> = table.numeric_column(&ColumnSelector::Index(6)).unwrap();
        assert_eq!(steps, vec![1]);
        assert_eq!(returns, vec![10.0]);
    }

    #[test]
    fn missing_file_fails() {
        let dir = TempDir::new("ingest").unwrap();
        assert!(matches!(
            LogSet::load(dir.path()),
            Err(LogError::Open { .. })
        ));
    }
}
