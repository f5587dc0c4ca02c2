//! Version parsing for `ccache -V` output

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::model::{CcacheError, Result, Version};

/// Format: `<tool> version MAJOR.MINOR.PATCH`
pub static VERSION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\S+ version ([0-9]+)\.([0-9]+)\.([0-9]+)").expect("Invalid VERSION_RE regex")
});

/// Parse the version from the first matching line.
///
/// Returns `Ok(None)` when no line carries a version.
pub fn parse_version(output: &str) -> Result<Option<Version>> {
    for line in output.lines() {
        if let Some(caps) = VERSION_RE.captures(line) {
            let major = parse_component("version_major", &caps[1])?;
            let minor = parse_component("version_minor", &caps[2])?;
            let patch = parse_component("version_patch", &caps[3])?;
            return Ok(Some(Version::new(major, minor, patch)));
        }
    }

    Ok(None)
}

fn parse_component(part: &'static str, token: &str) -> Result<u32> {
    token.parse::<u32>().map_err(|e| CcacheError::Conversion {
        field: part,
        value: token.to_string(),
        reason: e.into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let result = parse_version("ccache version 3.4.1").unwrap();
        assert_eq!(result, Some(Version::new(3, 4, 1)));
    }

    #[test]
    fn test_version_full_output() {
        let output = "ccache version 4.8.3\nFeatures: file-storage http-storage\n\n\
Copyright (C) 2002-2007 Andrew Tridgell\n";
        assert_eq!(parse_version(output).unwrap(), Some(Version::new(4, 8, 3)));
    }

    #[test]
    fn test_first_match_wins() {
        let output = "ccache version 3.4.1\nccache version 9.9.9";
        assert_eq!(parse_version(output).unwrap(), Some(Version::new(3, 4, 1)));
    }

    #[test]
    fn test_no_version() {
        assert_eq!(parse_version("no version here").unwrap(), None);
        assert_eq!(parse_version("").unwrap(), None);
    }

    #[test]
    fn test_version_must_start_line() {
        assert_eq!(parse_version("  ccache version 3.4.1").unwrap(), None);
    }

    #[test]
    fn test_component_overflow_is_error() {
        assert!(parse_version("ccache version 3.99999999999.1").is_err());
    }
}
