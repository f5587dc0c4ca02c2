//! Process execution
//!
//! The `Executor` trait is the seam between the façade and the OS: the
//! production `BlockingExecutor` spawns the process, tests pass a closure
//! that returns canned output.

use std::process::{Command, Stdio};
use tracing::debug;

use crate::core::model::{CcacheError, Result};

/// Runs an executable and returns its standard output as text
pub trait Executor {
    fn run(&self, executable: &str, args: &[&str]) -> Result<String>;
}

impl<F> Executor for F
where
    F: Fn(&str, &[&str]) -> Result<String>,
{
    fn run(&self, executable: &str, args: &[&str]) -> Result<String> {
        self(executable, args)
    }
}

/// Spawns the process and blocks until it exits
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockingExecutor;

impl Executor for BlockingExecutor {
    fn run(&self, executable: &str, args: &[&str]) -> Result<String> {
        debug!(executable, ?args, "running");

        let output = Command::new(executable)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| CcacheError::Spawn {
                executable: executable.to_string(),
                source,
            })?;

        debug!(
            executable,
            status = ?output.status.code(),
            stdout_bytes = output.stdout.len(),
            "finished"
        );

        if !output.status.success() {
            return Err(CcacheError::ExitStatus {
                executable: executable.to_string(),
                args: args.iter().map(|a| a.to_string()).collect(),
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
