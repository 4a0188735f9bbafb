//! Error kinds raised by curly itself (as opposed to curl's own failures).
use thiserror::Error;

/// Failures of the wrapper layer.
#[derive(Debug, Error)]
pub enum CurlyError {
    /// No positional argument at all.
    #[error("URL is required")]
    UrlRequired,

    /// More than one positional argument and no `--` separator.
    #[error("exactly one URL is required")]
    ExactlyOneUrl,

    /// `--` present but not directly after the URL.
    #[error("URL must come before '--'")]
    UrlBeforeSeparator,

    /// `basic-auth` invoked with an empty `--user`.
    #[error("--user flag is required for basic auth")]
    MissingCredentials,

    /// `post --file` value without the `@` prefix curl expects.
    #[error("file parameter should start with @")]
    FileReferenceWithoutAt,

    /// The curl executable could not be resolved on PATH.
    #[error("{program} not found in PATH")]
    CurlNotFound {
        program: String,
        #[source]
        source: which::Error,
    },

    /// The executable was found but could not be started.
    #[error("failed to launch {program}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// curl ran and exited unsuccessfully. It has already reported on stderr.
    #[error("{program} exited with {}", describe_exit(.code))]
    CurlFailed { program: String, code: Option<i32> },
}

impl CurlyError {
    /// Whether the top level should stay quiet and only set the exit code.
    pub fn is_silent(&self) -> bool {
        matches!(self, CurlyError::CurlFailed { .. })
    }
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(c) => format!("status {c}"),
        None => "no status (terminated by signal)".to_string(),
    }
}
