//! Backends module - External tool integrations
//!
//! Provides:
//! - executor: process execution behind the `Executor` trait
//! - ccache: the `CcacheStats` façade over `ccache -V` / `ccache -s`

pub mod ccache;
pub mod executor;
