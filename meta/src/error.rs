//! Launcher error type.

use metafile::CommandError;
use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LaunchError {
    /// The project root has a `metafile.rs` but no `Cargo.toml`.
    #[error("Cargo.toml required in '{}'", .root.display())]
    MissingManifest { root: PathBuf },

    /// Cargo could not be located or started.
    #[error(transparent)]
    Toolchain(#[from] CommandError),

    /// `cargo build` of the automation program failed.
    #[error("failed to build metafile ({status}):\n{diagnostics}")]
    Build {
        status: ExitStatus,
        diagnostics: String,
    },

    /// The compiled automation program could not be run or failed.
    #[error(transparent)]
    Delegation(CommandError),

    #[error("failed to write '{}': {source}", .path.display())]
    Scaffold {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot encode invocation: {0}")]
    Descriptor(#[from] serde_json::Error),

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },
}
