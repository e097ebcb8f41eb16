//! Base implementation of records for logging.
//!
//! A [`Record`] is what every [`Logger`](super::Logger) consumes: a set of
//! named values produced by an actor, a learner or an evaluator at one point
//! of an experiment.
use crate::error::BveError;
use chrono::prelude::{DateTime, Local};
use std::{
    collections::{
        btree_map::{Iter, Keys},
        BTreeMap,
    },
    convert::Into,
    fmt,
};

/// Represents possible types of values that can be stored in a [`Record`].
#[derive(Debug, Clone, PartialEq)]
pub enum RecordValue {
    /// A single floating-point value, typically used for metrics like loss or return.
    Scalar(f32),

    /// An integer value, typically used for step and episode counters.
    Integer(i64),

    /// A timestamp with local timezone.
    DateTime(DateTime<Local>),

    /// A 1-dimensional array of floating-point values.
    Array1(Vec<f32>),

    /// A text value.
    String(String),
}

impl fmt::Display for RecordValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(v) => write!(f, "{}", v),
            Self::Integer(v) => write!(f, "{}", v),
            Self::DateTime(v) => write!(f, "{}", v.to_rfc3339()),
            Self::Array1(v) => {
                let items = v.iter().map(|e| e.to_string()).collect::<Vec<_>>();
                write!(f, "[{}]", items.join(" "))
            }
            Self::String(v) => write!(f, "{}", v),
        }
    }
}

/// A container for storing key-value pairs of various data types.
///
/// Keys are kept sorted, so iterating a record is deterministic. Loggers that
/// produce tabular output rely on this to keep a stable column order.
///
/// ```rust
/// use bve_core::record::{Record, RecordValue};
///
/// let mut record = Record::from_scalar("episode_return", 21.0);
/// record.insert("actor_steps", RecordValue::Integer(1000));
///
/// assert_eq!(record.get_scalar("episode_return").unwrap(), 21.0);
/// assert_eq!(record.get_integer("actor_steps").unwrap(), 1000);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record(BTreeMap<String, RecordValue>);

impl Record {
    /// Creates an empty record.
    pub fn empty() -> Self {
        Self(BTreeMap::new())
    }

    /// Creates a record containing a single scalar value.
    pub fn from_scalar(name: impl Into<String>, value: f32) -> Self {
        let mut record = Self::empty();
        record.insert(name, RecordValue::Scalar(value));
        record
    }

    /// Creates a record from a slice of key-value pairs.
    pub fn from_slice<K: Into<String> + Clone>(s: &[(K, RecordValue)]) -> Self {
        Self(
            s.iter()
                .map(|(k, v)| (k.clone().into(), v.clone()))
                .collect(),
        )
    }

    /// Returns an iterator over the keys in the record.
    pub fn keys(&self) -> Keys<'_, String, RecordValue> {
        self.0.keys()
    }

    /// Inserts a key-value pair into the record.
    pub fn insert(&mut self, k: impl Into<String>, v: RecordValue) {
        self.0.insert(k.into(), v);
    }

    /// Returns an iterator over the key-value pairs in the record.
    pub fn iter(&self) -> Iter<'_, String, RecordValue> {
        self.0.iter()
    }

    /// Gets a reference to the value associated with the given key.
    pub fn get(&self, k: &str) -> Option<&RecordValue> {
        self.0.get(k)
    }

    /// Merges two records, consuming both.
    ///
    /// If both records contain the same key, the value from the second record wins.
    pub fn merge(self, record: Record) -> Self {
        Record(self.0.into_iter().chain(record.0).collect())
    }

    /// Merges another record into this one in place.
    pub fn merge_inplace(&mut self, record: Record) {
        self.0.extend(record.0);
    }

    /// Gets a scalar value from the record.
    ///
    /// Integers are widened to `f32`, so counters can be read as scalars.
    pub fn get_scalar(&self, k: &str) -> Result<f32, BveError> {
        match self.0.get(k) {
            Some(RecordValue::Scalar(v)) => Ok(*v),
            Some(RecordValue::Integer(v)) => Ok(*v as f32),
            Some(_) => Err(BveError::RecordValueTypeError("Scalar".to_string())),
            None => Err(BveError::RecordKeyError(k.to_string())),
        }
    }

    /// Gets an integer value from the record.
    pub fn get_integer(&self, k: &str) -> Result<i64, BveError> {
        match self.0.get(k) {
            Some(RecordValue::Integer(v)) => Ok(*v),
            Some(_) => Err(BveError::RecordValueTypeError("Integer".to_string())),
            None => Err(BveError::RecordKeyError(k.to_string())),
        }
    }

    /// Gets a 1-dimensional array from the record.
    pub fn get_array1(&self, k: &str) -> Result<Vec<f32>, BveError> {
        match self.0.get(k) {
            Some(RecordValue::Array1(v)) => Ok(v.clone()),
            Some(_) => Err(BveError::RecordValueTypeError("Array1".to_string())),
            None => Err(BveError::RecordKeyError(k.to_string())),
        }
    }

    /// Gets a string value from the record.
    pub fn get_string(&self, k: &str) -> Result<String, BveError> {
        match self.0.get(k) {
            Some(RecordValue::String(s)) => Ok(s.clone()),
            Some(_) => Err(BveError::RecordValueTypeError("String".to_string())),
            None => Err(BveError::RecordKeyError(k.to_string())),
        }
    }

    /// Returns `true` if the record contains no key-value pairs.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of values in the record.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}
