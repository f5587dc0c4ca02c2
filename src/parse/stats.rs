//! Stats parsing
//!
//! Applies the field table line by line to `ccache -s` output.
//! A line contributes at most one field (the first descriptor that matches),
//! and a field seen on several lines keeps the value of the last one.

use tracing::{debug, trace};

use crate::core::model::{Result, StatValue, StatsSnapshot};
use crate::parse::fields::FIELDS;

/// Parse a single line, returning the first field that matches
pub fn parse_stat_line(line: &str) -> Result<Option<(&'static str, StatValue)>> {
    for field in FIELDS.iter() {
        if let Some(caps) = field.pattern.captures(line) {
            let token = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
            let value = field.kind.convert(field.name, token)?;
            trace!(field = field.name, token, "matched stat line");
            return Ok(Some((field.name, value)));
        }
    }

    Ok(None)
}

/// Parse multi-line `ccache -s` output.
///
/// Unrecognised lines are skipped. Returns an empty snapshot when nothing
/// matches; fails on the first value that cannot be converted.
pub fn parse_stats(output: &str) -> Result<StatsSnapshot> {
    let mut snapshot = StatsSnapshot::new();

    for line in output.lines() {
        if let Some((name, value)) = parse_stat_line(line)? {
            snapshot.insert(name, value);
        }
    }

    debug!(fields = snapshot.len(), "parsed ccache stats");
    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{CcacheError, ConversionError};
    use chrono::NaiveDate;

    fn parse_one(field: &str, value: &str) -> StatsSnapshot {
        let snapshot = parse_stats(&format!("{}  {}", field, value)).unwrap();
        assert_eq!(snapshot.len(), 1, "expected exactly one field for '{}'", field);
        snapshot
    }

    #[test]
    fn test_cache_dir() {
        let s = parse_one("cache directory", "/some/path/");
        assert_eq!(s.get_str("cache_directory"), Some("/some/path/"));
    }

    #[test]
    fn test_primary_config() {
        let s = parse_one("primary config", "/some/path/ccache.config");
        assert_eq!(s.get_str("primary_config"), Some("/some/path/ccache.config"));
    }

    #[test]
    fn test_secondary_config() {
        let s = parse_one("secondary config (readonly)", "/some/path/ccache.config");
        assert_eq!(
            s.get_str("secondary_config"),
            Some("/some/path/ccache.config")
        );
    }

    #[test]
    fn test_stats_zero_time() {
        let s = parse_one("stats zero time", "Sat Aug 11 12:01:02 2012");
        let expected = NaiveDate::from_ymd_opt(2012, 8, 11)
            .unwrap()
            .and_hms_opt(12, 1, 2)
            .unwrap();
        assert_eq!(s.get_timestamp("stats_zero_time"), Some(expected));
    }

    #[test]
    fn test_cache_hits() {
        let s = parse_one("cache hit (direct)", "11");
        assert_eq!(s.get("cache_hit_direct"), Some(&StatValue::Integer(11)));

        let s = parse_one("cache hit (preprocessed)", "11");
        assert_eq!(s.get("cache_hit_preprocessed"), Some(&StatValue::Integer(11)));

        let s = parse_one("cache miss", "7");
        assert_eq!(s.get_u64("cache_hit_miss"), Some(7));
    }

    #[test]
    fn test_cache_hit_rate() {
        let s = parse_one("cache hit rate", "101.01 %");
        assert_eq!(s.get("cache_hit_rate"), Some(&StatValue::Float(101.01)));
    }

    #[test]
    fn test_counters() {
        assert_eq!(
            parse_one("cleanups performed", "3").get_u64("cleanups_performed"),
            Some(3)
        );
        assert_eq!(
            parse_one("files in cache", "9870").get_u64("files_in_cache"),
            Some(9870)
        );
    }

    #[test]
    fn test_sizes() {
        assert_eq!(parse_one("cache size", "1.2 GB").get_f64("cache_size"), Some(1.2));
        assert_eq!(
            parse_one("max cache size", "5.0 GB").get_f64("max_cache_size"),
            Some(5.0)
        );
    }

    #[test]
    fn test_unknown() {
        let result = parse_stats("invalid field").unwrap();
        assert!(result.is_empty());
        assert!(parse_stats("").unwrap().is_empty());
    }

    #[test]
    fn test_last_line_wins() {
        let s = parse_stats("cache miss  1\ncache directory  /a\ncache miss  2\n").unwrap();
        assert_eq!(s.get_u64("cache_hit_miss"), Some(2));
        assert_eq!(s.get_str("cache_directory"), Some("/a"));
    }

    #[test]
    fn test_rate_without_percent_is_ignored() {
        assert!(parse_stats("cache hit rate  78.56").unwrap().is_empty());
    }

    #[test]
    fn test_size_in_other_unit_is_ignored() {
        assert!(parse_stats("cache size  512.0 MB").unwrap().is_empty());
    }

    #[test]
    fn test_bad_date_is_fatal() {
        let err = parse_stats("cache miss  1\nstats zero time  Never reset").unwrap_err();
        assert!(matches!(
            err,
            CcacheError::Conversion {
                field: "stats_zero_time",
                reason: ConversionError::Date(_),
                ..
            }
        ));
    }

    #[test]
    fn test_parse_stat_line_none() {
        assert!(parse_stat_line("called for link  612").unwrap().is_none());
    }
}
