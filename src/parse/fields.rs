//! Stat line descriptors
//!
//! Each ccache stat line is recognised by an anchored regex whose first
//! capture group holds the value token. Units such as `%` or `GB` stay
//! outside the capture group.

use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::model::{CcacheError, ConversionError, Result, StatValue, STATS_DATE_FORMAT};

/// How the captured token is converted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Text,
    Integer,
    Float,
    Timestamp,
}

impl ValueKind {
    /// Convert a captured token for `field`
    pub fn convert(self, field: &'static str, token: &str) -> Result<StatValue> {
        let converted: std::result::Result<StatValue, ConversionError> = match self {
            ValueKind::Text => Ok(StatValue::Text(token.to_string())),
            ValueKind::Integer => token
                .parse::<u64>()
                .map(StatValue::Integer)
                .map_err(Into::into),
            ValueKind::Float => token
                .parse::<f64>()
                .map(StatValue::Float)
                .map_err(Into::into),
            ValueKind::Timestamp => NaiveDateTime::parse_from_str(token, STATS_DATE_FORMAT)
                .map(StatValue::Timestamp)
                .map_err(Into::into),
        };

        converted.map_err(|reason| CcacheError::Conversion {
            field,
            value: token.to_string(),
            reason,
        })
    }
}

/// A recognisable stat line
#[derive(Debug)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub kind: ValueKind,
    pub pattern: Regex,
}

/// (pattern, field name, kind), in matching order
const FIELD_TABLE: &[(&str, &str, ValueKind)] = &[
    (r"cache directory[ ]+(.*)", "cache_directory", ValueKind::Text),
    (r"primary config[ ]+(.*)", "primary_config", ValueKind::Text),
    (
        r"secondary config[ ]+\(readonly\)[ ]+(.*)",
        "secondary_config",
        ValueKind::Text,
    ),
    (
        r"stats zero time[ ]+([A-Z].*)",
        "stats_zero_time",
        ValueKind::Timestamp,
    ),
    (
        r"cache hit \(direct\)[ ]+([0-9]+)",
        "cache_hit_direct",
        ValueKind::Integer,
    ),
    (
        r"cache hit \(preprocessed\)[ ]+([0-9]+)",
        "cache_hit_preprocessed",
        ValueKind::Integer,
    ),
    (r"cache miss[ ]+([0-9]+)", "cache_hit_miss", ValueKind::Integer),
    (
        r"cache hit rate[ ]+([0-9]{1,3}\.[0-9]{2}) %",
        "cache_hit_rate",
        ValueKind::Float,
    ),
    (
        r"cleanups performed[ ]+([0-9]+)",
        "cleanups_performed",
        ValueKind::Integer,
    ),
    (r"files in cache[ ]+([0-9]+)", "files_in_cache", ValueKind::Integer),
    (r"cache size[ ]+([0-9]+\.[0-9]) GB", "cache_size", ValueKind::Float),
    (
        r"max cache size[ ]+([0-9]+\.[0-9]) GB",
        "max_cache_size",
        ValueKind::Float,
    ),
];

/// Canonical field names, in table order
pub const FIELD_NAMES: &[&str] = &[
    "cache_directory",
    "primary_config",
    "secondary_config",
    "stats_zero_time",
    "cache_hit_direct",
    "cache_hit_preprocessed",
    "cache_hit_miss",
    "cache_hit_rate",
    "cleanups_performed",
    "files_in_cache",
    "cache_size",
    "max_cache_size",
];

/// Compiled descriptors, built once on first use
pub static FIELDS: Lazy<Vec<FieldDescriptor>> = Lazy::new(|| {
    FIELD_TABLE
        .iter()
        .map(|&(pattern, name, kind)| FieldDescriptor {
            name,
            kind,
            pattern: Regex::new(&format!("^{}", pattern)).expect("Invalid stat field regex"),
        })
        .collect()
});

/// Look up a descriptor by field name
pub fn descriptor(name: &str) -> Option<&'static FieldDescriptor> {
    FIELDS.iter().find(|d| d.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names_follow_table() {
        let names: Vec<_> = FIELDS.iter().map(|d| d.name).collect();
        assert_eq!(names, FIELD_NAMES);
    }

    #[test]
    fn test_patterns_are_anchored() {
        let cache_size = descriptor("cache_size").unwrap();
        assert!(cache_size.pattern.is_match("cache size  1.2 GB"));
        assert!(!cache_size.pattern.is_match("max cache size  5.0 GB"));
    }

    #[test]
    fn test_units_are_not_captured() {
        let rate = descriptor("cache_hit_rate").unwrap();
        let caps = rate.pattern.captures("cache hit rate  78.56 %").unwrap();
        assert_eq!(&caps[1], "78.56");
    }

    #[test]
    fn test_convert_each_kind() {
        assert_eq!(
            ValueKind::Text.convert("f", "/a b").unwrap(),
            StatValue::Text("/a b".into())
        );
        assert_eq!(
            ValueKind::Integer.convert("f", "12").unwrap(),
            StatValue::Integer(12)
        );
        assert_eq!(
            ValueKind::Float.convert("f", "1.5").unwrap(),
            StatValue::Float(1.5)
        );
        assert!(ValueKind::Timestamp
            .convert("f", "Sat Aug 11 12:01:02 2012")
            .unwrap()
            .as_timestamp()
            .is_some());
    }

    #[test]
    fn test_convert_failure_names_field() {
        let err = ValueKind::Integer
            .convert("files_in_cache", "99999999999999999999999")
            .unwrap_err();
        match err {
            CcacheError::Conversion { field, value, reason } => {
                assert_eq!(field, "files_in_cache");
                assert_eq!(value, "99999999999999999999999");
                assert!(matches!(reason, ConversionError::Int(_)));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unknown_descriptor() {
        assert!(descriptor("called_for_link").is_none());
    }
}
