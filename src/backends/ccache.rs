//! ccache integration
//!
//! Runs `ccache -V` / `ccache -s` through an `Executor` and parses the output.

use crate::backends::executor::{BlockingExecutor, Executor};
use crate::core::model::{Result, StatsSnapshot, Version};
use crate::parse::stats::parse_stats;
use crate::parse::version::parse_version;

/// Executable used when none is given
pub const DEFAULT_EXECUTABLE: &str = "ccache";

const VERSION_FLAG: &str = "-V";
const SHOW_STATS_FLAG: &str = "-s";

/// Query a ccache executable for its version and statistics
#[derive(Debug, Clone)]
pub struct CcacheStats<E = BlockingExecutor> {
    executable: String,
    executor: E,
}

impl CcacheStats<BlockingExecutor> {
    /// Use the process-spawning executor
    pub fn new(executable: impl Into<String>) -> Self {
        Self::with_executor(executable, BlockingExecutor)
    }
}

impl Default for CcacheStats<BlockingExecutor> {
    fn default() -> Self {
        Self::new(DEFAULT_EXECUTABLE)
    }
}

impl<E: Executor> CcacheStats<E> {
    pub fn with_executor(executable: impl Into<String>, executor: E) -> Self {
        Self {
            executable: executable.into(),
            executor,
        }
    }

    pub fn executable(&self) -> &str {
        &self.executable
    }

    /// The version of the ccache executable, `None` if it printed none
    pub fn version(&self) -> Result<Option<Version>> {
        let output = self.executor.run(&self.executable, &[VERSION_FLAG])?;
        parse_version(&output)
    }

    /// Run ccache and parse its stats
    pub fn stats(&self) -> Result<StatsSnapshot> {
        let output = self.executor.run(&self.executable, &[SHOW_STATS_FLAG])?;
        parse_stats(&output)
    }
}
