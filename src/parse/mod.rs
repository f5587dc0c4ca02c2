//! Parse module - Turns ccache text output into typed values
//!
//! Provides:
//! - fields: the fixed table of stat line descriptors
//! - stats: `ccache -s` output into a StatsSnapshot
//! - version: `ccache -V` output into a Version

pub mod fields;
pub mod stats;
pub mod version;
