//! Error types for the dispatch library.

use crate::invocation::INVOCATION_ENV;
use std::ffi::OsString;
use std::fmt;
use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// A child process could not be run to a successful exit.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("cargo not found: {0}")]
    CargoNotFound(#[source] which::Error),

    #[error("failed to start '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("'{program}' failed with {status}")]
    Failed { program: String, status: ExitStatus },
}

/// The invocation descriptor handed over by `meta` is missing or unusable.
#[derive(Debug, Error)]
pub enum InvocationError {
    #[error("{env} is not set; run this program through `meta`", env = INVOCATION_ENV)]
    Missing,

    #[error("malformed {env}: {0}", env = INVOCATION_ENV)]
    Malformed(#[from] serde_json::Error),

    #[error("{field} must be an absolute path, got '{}'", .path.display())]
    RelativePath { field: &'static str, path: PathBuf },
}

/// Which setup hook failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookStage {
    BeforeSetup,
    AfterSetup,
}

impl fmt::Display for HookStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BeforeSetup => f.write_str("before-setup"),
            Self::AfterSetup => f.write_str("after-setup"),
        }
    }
}

/// Everything a dispatched command can fail with.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error(transparent)]
    Invocation(#[from] InvocationError),

    #[error("argument is not valid UTF-8: '{}'", .0.to_string_lossy())]
    NonUtf8Argument(OsString),

    #[error("'{0}': no such tool installed")]
    ToolNotFound(String),

    #[error("'{0}': undefined task")]
    TaskNotFound(String),

    #[error("failed to install '{spec}': {source}")]
    Install {
        spec: String,
        #[source]
        source: CommandError,
    },

    #[error("{stage} hook failed: {error:#}")]
    Hook { stage: HookStage, error: anyhow::Error },

    #[error("task '{name}' failed: {error:#}")]
    Task { name: String, error: anyhow::Error },

    #[error(transparent)]
    Command(#[from] CommandError),

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },
}
