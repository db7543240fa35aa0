//! Project discovery: finding `metafile.rs` and preparing the `meta/` tree.

use crate::error::LaunchError;
use metafile::layout::{Layout, MARKER_FILE};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Search `start` and then each of its ancestors for `metafile.rs`.
/// Returns the first directory that contains it, or `None` once the
/// filesystem root has been checked.
#[must_use]
pub fn resolve_project_root(start: &Path) -> Option<PathBuf> {
    let mut current_dir = Some(start);

    while let Some(dir) = current_dir {
        if Layout::new(dir).marker().is_file() {
            debug!(root = %dir.display(), "found {MARKER_FILE}");
            return Some(dir.to_path_buf());
        }
        current_dir = dir.parent();
    }

    debug!(start = %start.display(), "no {MARKER_FILE} found");
    None
}

/// Fail unless `Cargo.toml` sits next to `metafile.rs`.
///
/// # Errors
///
/// Returns [`LaunchError::MissingManifest`] if the manifest is absent.
pub fn ensure_module_manifest(layout: &Layout) -> Result<(), LaunchError> {
    if layout.manifest().is_file() {
        Ok(())
    } else {
        Err(LaunchError::MissingManifest {
            root: layout.root().to_path_buf(),
        })
    }
}

/// Create `meta/` and `meta/tools/bin` if missing. Failures are logged and
/// otherwise ignored; a later step that needs the directory reports its own error.
pub fn ensure_directories(layout: &Layout) {
    for dir in [layout.meta_dir(), layout.tools_bin_dir()] {
        if let Err(e) = fs::create_dir_all(&dir) {
            warn!(dir = %dir.display(), error = %e, "failed to create directory");
        }
    }
}
