//! ccache-stats - Access ccache version and statistics from Rust
//!
//! ccache-stats provides:
//! - A façade (`CcacheStats`) that runs `ccache -V` / `ccache -s`
//! - Parsers turning that output into typed values
//! - An `Executor` seam so the process call can be replaced in tests
//!
//! ```no_run
//! use ccache_stats::CcacheStats;
//!
//! let ccache = CcacheStats::new("ccache");
//! if let Some(version) = ccache.version()? {
//!     println!("ccache {}", version);
//! }
//! let stats = ccache.stats()?;
//! println!("direct hits: {:?}", stats.get_u64("cache_hit_direct"));
//! # Ok::<(), ccache_stats::CcacheError>(())
//! ```

pub mod backends;
pub mod core;
pub mod parse;

pub use backends::ccache::{CcacheStats, DEFAULT_EXECUTABLE};
pub use backends::executor::{BlockingExecutor, Executor};
pub use crate::core::model::{CcacheError, ConversionError, Result, StatValue, StatsSnapshot, Version};
pub use parse::fields::FIELD_NAMES;
pub use parse::stats::parse_stats;
pub use parse::version::parse_version;
