//! Installed tools under `meta/tools/bin`.

use crate::error::DispatchError;
use crate::layout::Layout;
use crate::process;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

/// Base names of the entries in the tools directory, in directory order.
/// A tools directory that does not exist yet lists nothing.
///
/// # Errors
///
/// Returns `Err` if the directory exists but cannot be read.
pub fn list_tools(layout: &Layout) -> Result<Vec<String>, DispatchError> {
    let dir = layout.tools_bin_dir();
    let entries = match fs::read_dir(&dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(source) => return Err(read_error(&dir, source)),
    };

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| read_error(&dir, source))?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    Ok(names)
}

/// Path of the installed tool called `name`, if there is one.
#[must_use]
pub fn find_tool(layout: &Layout, name: &str) -> Option<PathBuf> {
    if name.is_empty() || Path::new(name).components().count() != 1 || name == ".." {
        return None;
    }

    let dir = layout.tools_bin_dir();
    let exact = dir.join(name);
    if exact.is_file() {
        return Some(exact);
    }

    if cfg!(windows) {
        let with_suffix = dir.join(format!("{name}{}", std::env::consts::EXE_SUFFIX));
        if with_suffix.is_file() {
            return Some(with_suffix);
        }
    }
    None
}

/// Run the installed tool `name` with `args`, inheriting stdio and the
/// current working directory.
///
/// # Errors
///
/// Returns [`DispatchError::ToolNotFound`] if no such tool is installed, or
/// [`DispatchError::Command`] if it fails.
pub fn run_tool(layout: &Layout, name: &str, args: &[String]) -> Result<(), DispatchError> {
    let path = find_tool(layout, name).ok_or_else(|| DispatchError::ToolNotFound(name.to_string()))?;
    debug!(tool = %path.display(), "running installed tool");

    let mut cmd = Command::new(&path);
    cmd.args(args);
    process::run_inherited(&mut cmd)?;
    Ok(())
}

fn read_error(dir: &Path, source: io::Error) -> DispatchError {
    DispatchError::Io {
        context: format!("failed to read '{}'", dir.display()),
        source,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn project() -> (TempDir, Layout) {
        let dir = TempDir::new().unwrap();
        let layout = Layout::new(dir.path());
        (dir, layout)
    }

    #[test]
    fn test_list_tools_missing_dir_is_empty() {
        let (_dir, layout) = project();
        assert!(list_tools(&layout).unwrap().is_empty());
    }

    #[test]
    fn test_list_tools_reflects_directory() {
        let (_dir, layout) = project();
        fs::create_dir_all(layout.tools_bin_dir()).unwrap();
        fs::write(layout.tools_bin_dir().join("rg"), "").unwrap();

        assert_eq!(list_tools(&layout).unwrap(), ["rg"]);

        fs::write(layout.tools_bin_dir().join("fd"), "").unwrap();
        let mut names = list_tools(&layout).unwrap();
        names.sort();
        assert_eq!(names, ["fd", "rg"]);
    }

    #[test]
    fn test_find_tool_rejects_paths() {
        let (_dir, layout) = project();
        fs::create_dir_all(layout.tools_bin_dir()).unwrap();
        fs::write(layout.meta_dir().join("secret"), "").unwrap();

        assert!(find_tool(&layout, "").is_none());
        assert!(find_tool(&layout, "..").is_none());
        assert!(find_tool(&layout, "../../secret").is_none());
    }

    #[test]
    fn test_find_tool_ignores_directories() {
        let (_dir, layout) = project();
        fs::create_dir_all(layout.tools_bin_dir().join("nested")).unwrap();
        assert!(find_tool(&layout, "nested").is_none());
    }

    #[test]
    fn test_run_tool_not_found() {
        let (_dir, layout) = project();
        let err = run_tool(&layout, "rg", &[]).unwrap_err();
        assert!(matches!(err, DispatchError::ToolNotFound(ref name) if name == "rg"));
    }
}
