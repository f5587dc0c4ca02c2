//! Stats Model
//!
//! Typed values produced by the parsers, plus the error type shared by the
//! executor, the parsers and the façade.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::num::{ParseFloatError, ParseIntError};
use thiserror::Error;

/// A single converted statistic value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatValue {
    Integer(u64),
    Float(f64),
    Timestamp(NaiveDateTime),
    Text(String),
}

impl StatValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            StatValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            StatValue::Integer(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            StatValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<NaiveDateTime> {
        match self {
            StatValue::Timestamp(t) => Some(*t),
            _ => None,
        }
    }
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatValue::Integer(v) => write!(f, "{}", v),
            StatValue::Float(v) => write!(f, "{}", v),
            StatValue::Timestamp(t) => write!(f, "{}", t.format(STATS_DATE_FORMAT)),
            StatValue::Text(s) => f.write_str(s),
        }
    }
}

/// Date format used by ccache, e.g. `Thu Nov 29 15:15:44 2018`
pub const STATS_DATE_FORMAT: &str = "%a %b %d %H:%M:%S %Y";

/// Parsed statistics from one `ccache -s` run.
///
/// Only fields that were found in the output are present. Iteration is
/// ordered by field name.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct StatsSnapshot {
    fields: BTreeMap<&'static str, StatValue>,
}

impl StatsSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, replacing any earlier value for the same field
    pub fn insert(&mut self, field: &'static str, value: StatValue) {
        self.fields.insert(field, value);
    }

    pub fn get(&self, field: &str) -> Option<&StatValue> {
        self.fields.get(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(StatValue::as_str)
    }

    pub fn get_u64(&self, field: &str) -> Option<u64> {
        self.get(field).and_then(StatValue::as_u64)
    }

    pub fn get_f64(&self, field: &str) -> Option<f64> {
        self.get(field).and_then(StatValue::as_f64)
    }

    pub fn get_timestamp(&self, field: &str) -> Option<NaiveDateTime> {
        self.get(field).and_then(StatValue::as_timestamp)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &StatValue)> {
        self.fields.iter().map(|(k, v)| (*k, v))
    }

    /// Keep only the named fields
    pub fn retain_fields(&mut self, names: &[impl AsRef<str>]) {
        self.fields
            .retain(|k, _| names.iter().any(|n| n.as_ref() == *k));
    }
}

/// ccache version triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl From<(u32, u32, u32)> for Version {
    fn from((major, minor, patch): (u32, u32, u32)) -> Self {
        Self::new(major, minor, patch)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Why a matched token could not be converted
#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("invalid integer: {0}")]
    Int(#[from] ParseIntError),

    #[error("invalid float: {0}")]
    Float(#[from] ParseFloatError),

    #[error("invalid date (expected e.g. 'Thu Nov 29 15:15:44 2018'): {0}")]
    Date(#[from] chrono::ParseError),
}

/// Errors raised while running ccache or parsing its output
#[derive(Debug, Error)]
pub enum CcacheError {
    #[error("failed to start '{executable}': {source}")]
    Spawn {
        executable: String,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "'{executable} {}' exited with {}{}",
        .args.join(" "),
        describe_code(.code),
        describe_stderr(.stderr)
    )]
    ExitStatus {
        executable: String,
        args: Vec<String>,
        code: Option<i32>,
        stderr: String,
    },

    #[error("cannot convert {field} value '{value}': {reason}")]
    Conversion {
        field: &'static str,
        value: String,
        #[source]
        reason: ConversionError,
    },
}

impl CcacheError {
    /// True for errors coming from the external process rather than parsing
    pub fn is_process_error(&self) -> bool {
        matches!(
            self,
            CcacheError::Spawn { .. } | CcacheError::ExitStatus { .. }
        )
    }
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(c) => format!("status {}", c),
        None => "no status (terminated by signal)".to_string(),
    }
}

fn describe_stderr(stderr: &str) -> String {
    if stderr.is_empty() {
        String::new()
    } else {
        format!(": {}", stderr)
    }
}

pub type Result<T> = std::result::Result<T, CcacheError>;
