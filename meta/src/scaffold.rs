//! `meta init`: write a starter `metafile.rs`.

use crate::error::LaunchError;
use metafile::layout::MARKER_FILE;
use std::fs;
use std::path::{Path, PathBuf};

/// Contents written by `meta init`.
pub const TEMPLATE: &str = r#"use metafile::{Metafile, anyhow};

fn main() {
    Metafile::new()
        // .tool("cargo-nextest")
        .task("test", test)
        .run();
}

fn test(_args: &[String]) -> anyhow::Result<()> {
    anyhow::bail!("no test specified.")
}
"#;

/// Write [`TEMPLATE`] to `metafile.rs` in `dir`, replacing any existing file.
///
/// # Errors
///
/// Returns [`LaunchError::Scaffold`] if the file cannot be written.
pub fn init(dir: &Path) -> Result<PathBuf, LaunchError> {
    let path = dir.join(MARKER_FILE);
    fs::write(&path, TEMPLATE).map_err(|source| LaunchError::Scaffold {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}
