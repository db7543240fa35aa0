//! The invocation descriptor passed from `meta` to the automation program.
//!
//! `meta` serializes an [`Invocation`] as JSON into [`INVOCATION_ENV`] before
//! spawning the compiled metafile; the user's arguments travel as plain argv.

use crate::error::InvocationError;
use crate::layout::Layout;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable carrying the JSON-encoded [`Invocation`].
pub const INVOCATION_ENV: &str = "METAFILE_INVOCATION";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invocation {
    /// Directory `meta` was run from.
    pub caller_dir: PathBuf,
    /// Directory containing `metafile.rs`.
    pub project_root: PathBuf,
}

impl Invocation {
    pub fn new(caller_dir: impl Into<PathBuf>, project_root: impl Into<PathBuf>) -> Self {
        Self {
            caller_dir: caller_dir.into(),
            project_root: project_root.into(),
        }
    }

    #[must_use]
    pub fn layout(&self) -> Layout {
        Layout::new(&self.project_root)
    }

    /// Encode for [`INVOCATION_ENV`].
    ///
    /// # Errors
    ///
    /// Returns `Err` if a path cannot be represented as JSON (non-UTF-8 paths).
    pub fn to_env_value(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Decode and validate a value previously produced by [`Invocation::to_env_value`].
    ///
    /// # Errors
    ///
    /// Returns `Err` if the JSON is malformed or either path is relative.
    pub fn from_env_value(value: &str) -> Result<Self, InvocationError> {
        let invocation: Self = serde_json::from_str(value)?;
        check_absolute("caller_dir", &invocation.caller_dir)?;
        check_absolute("project_root", &invocation.project_root)?;
        Ok(invocation)
    }

    /// Read the descriptor from the current process environment.
    ///
    /// # Errors
    ///
    /// Returns `Err` if [`INVOCATION_ENV`] is unset or invalid.
    pub fn from_env() -> Result<Self, InvocationError> {
        let value = std::env::var(INVOCATION_ENV).map_err(|_| InvocationError::Missing)?;
        Self::from_env_value(&value)
    }
}

fn check_absolute(field: &'static str, path: &Path) -> Result<(), InvocationError> {
    if path.is_absolute() {
        Ok(())
    } else {
        Err(InvocationError::RelativePath {
            field,
            path: path.to_path_buf(),
        })
    }
}
