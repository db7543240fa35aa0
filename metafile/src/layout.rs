//! Project layout: the marker files and the `meta/` working tree under a project root.

use std::env::consts::EXE_SUFFIX;
use std::path::{Path, PathBuf};

/// File whose presence marks a project root. It is also the automation program's source.
pub const MARKER_FILE: &str = "metafile.rs";

/// Cargo manifest that must sit next to the marker file.
pub const MANIFEST_FILE: &str = "Cargo.toml";

/// Name of the bin target the project's manifest declares for the marker file.
pub const BINARY_NAME: &str = "metafile";

/// Working directory created under the project root.
pub const META_DIR: &str = "meta";

/// Paths derived from a resolved project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    root: PathBuf,
}

impl Layout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn marker(&self) -> PathBuf {
        self.root.join(MARKER_FILE)
    }

    #[must_use]
    pub fn manifest(&self) -> PathBuf {
        self.root.join(MANIFEST_FILE)
    }

    /// `meta/`
    #[must_use]
    pub fn meta_dir(&self) -> PathBuf {
        self.root.join(META_DIR)
    }

    /// `meta/bin`, the compiled automation program.
    #[must_use]
    pub fn binary(&self) -> PathBuf {
        self.meta_dir().join(format!("bin{EXE_SUFFIX}"))
    }

    /// `meta/target`, Cargo's target directory for the automation build.
    #[must_use]
    pub fn target_dir(&self) -> PathBuf {
        self.meta_dir().join("target")
    }

    /// `meta/tools`, used as `CARGO_INSTALL_ROOT` during setup.
    #[must_use]
    pub fn tools_root(&self) -> PathBuf {
        self.meta_dir().join("tools")
    }

    /// `meta/tools/bin`, where `cargo install` drops tool binaries.
    #[must_use]
    pub fn tools_bin_dir(&self) -> PathBuf {
        self.tools_root().join("bin")
    }
}
