//! Building the automation program with Cargo.

use crate::error::LaunchError;
use metafile::CommandError;
use metafile::layout::{BINARY_NAME, Layout};
use std::env::consts::EXE_SUFFIX;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

/// `cargo build` the `metafile` bin target into `meta/target` and copy the
/// result to `meta/bin`. There is no staleness check here.
///
/// # Errors
///
/// Returns [`LaunchError::Build`] with Cargo's stderr if the build fails, or
/// an I/O error if the artifact cannot be put in place.
pub fn build_automation_binary(layout: &Layout, cargo: &Path) -> Result<PathBuf, LaunchError> {
    let target_dir = layout.target_dir();
    let mut cmd = Command::new(cargo);
    cmd.args(["build", "--quiet", "--bin", BINARY_NAME, "--target-dir"])
        .arg(&target_dir)
        .current_dir(layout.root());
    debug!(?cmd, "building automation program");

    let output = cmd.output().map_err(|source| CommandError::Spawn {
        program: cargo.display().to_string(),
        source,
    })?;

    if !output.status.success() {
        return Err(LaunchError::Build {
            status: output.status,
            diagnostics: String::from_utf8_lossy(&output.stderr).trim_end().to_string(),
        });
    }

    let artifact = target_dir
        .join("debug")
        .join(format!("{BINARY_NAME}{EXE_SUFFIX}"));
    install_binary(&artifact, &layout.binary())?;
    Ok(layout.binary())
}

/// Copy to a staging file next to `dest`, then rename it into place.
fn install_binary(artifact: &Path, dest: &Path) -> Result<(), LaunchError> {
    let staging = dest.with_extension("tmp");
    fs::copy(artifact, &staging).map_err(|source| LaunchError::Io {
        context: format!("failed to copy '{}'", artifact.display()),
        source,
    })?;
    fs::rename(&staging, dest).map_err(|source| LaunchError::Io {
        context: format!("failed to replace '{}'", dest.display()),
        source,
    })
}
