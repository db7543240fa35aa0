//! Common test helpers shared across integration tests

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(dead_code)] // Not all helpers are used by every test file

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Helper to get the compiled binary path
pub fn get_binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_meta"))
}

/// Helper to create a temporary directory for tests
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Helper to create a metafile.rs in a directory
pub fn create_metafile(dir: &Path, content: &str) {
    fs::write(dir.join("metafile.rs"), content).unwrap();
}

/// Helper to create a Cargo.toml in a directory
pub fn create_manifest(dir: &Path, content: &str) {
    fs::write(dir.join("Cargo.toml"), content).unwrap();
}

/// Path of the metafile crate in this workspace, for projects that depend on it
pub fn metafile_crate_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .join("metafile")
}

/// Helper to create a Command running `meta` in `dir`
/// Clears `METAFILE_INVOCATION` so the outer test environment cannot leak in
pub fn test_command(dir: &Path) -> Command {
    let mut cmd = Command::new(get_binary_path());
    cmd.current_dir(dir).env_remove("METAFILE_INVOCATION");
    cmd
}
