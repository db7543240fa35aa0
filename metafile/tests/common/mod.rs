//! Common test helpers shared across integration tests

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(dead_code)] // Not all helpers are used by every test file

use metafile::Invocation;
use metafile::layout::Layout;
use std::cell::RefCell;
use std::fs;
use std::path::Path;
use std::rc::Rc;

/// Shared, append-only log that task and hook closures write into.
pub type Calls = Rc<RefCell<Vec<String>>>;

pub fn calls() -> Calls {
    Rc::new(RefCell::new(Vec::new()))
}

/// Helper to create a temporary project directory
pub fn create_project() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Invocation rooted at `root`, called from the root itself
pub fn invocation(root: &Path) -> Invocation {
    Invocation::new(root, root)
}

pub fn args(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

/// Write an executable shell script into `meta/tools/bin`
#[cfg(unix)]
pub fn install_script_tool(root: &Path, name: &str, body: &str) {
    use std::os::unix::fs::PermissionsExt;

    let dir = Layout::new(root).tools_bin_dir();
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
}
