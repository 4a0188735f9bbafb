/*!
Runs curl as a child process.

The child inherits stdin / stdout / stderr, so curl's own output and error
text reach the user untouched. A non-zero exit is surfaced as
`CurlyError::CurlFailed` without further wrapping; the caller only needs to
turn it into an exit code. Nothing is logged on this path: stderr is curl's.
*/

use std::path::PathBuf;
use std::process::Stdio;

use anyhow::{Context, Result};
use tokio::process::Command;

use super::CURL_PROGRAM;
use super::builder::CurlBuilder;
use crate::error::CurlyError;

/// Launches the curl executable for a finished `CurlBuilder`.
#[derive(Debug, Clone)]
pub struct Executor {
    program: String,
}

impl Default for Executor {
    fn default() -> Self {
        Self::new()
    }
}

impl Executor {
    /// Executor for `curl` resolved from PATH.
    pub fn new() -> Self {
        Self {
            program: CURL_PROGRAM.to_string(),
        }
    }

    /// Executor for a different program name (resolved from PATH the same way).
    #[cfg(test)]
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Resolve the program on PATH.
    pub fn locate(&self) -> Result<PathBuf, CurlyError> {
        which::which(&self.program).map_err(|source| CurlyError::CurlNotFound {
            program: self.program.clone(),
            source,
        })
    }

    /// Run the request and wait for curl to finish.
    ///
    /// Blocks the calling thread on a single-threaded runtime for the lifetime
    /// of the child.
    pub fn run(&self, builder: &CurlBuilder) -> Result<()> {
        let path = self.locate()?;
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .context("Failed to create Tokio runtime")?;
        rt.block_on(self.run_async(path, builder.build()))?;
        Ok(())
    }

    async fn run_async(&self, path: PathBuf, args: Vec<String>) -> Result<(), CurlyError> {
        let status = Command::new(&path)
            .args(&args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|source| CurlyError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if status.success() {
            return Ok(());
        }
        Err(CurlyError::CurlFailed {
            program: self.program.clone(),
            code: status.code(),
        })
    }

    /// The command line that `run` would execute, for display only.
    pub fn dry_run(&self, builder: &CurlBuilder) -> String {
        builder.display_string()
    }
}
