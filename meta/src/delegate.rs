//! Handing the invocation over to the compiled automation program.

use crate::error::LaunchError;
use metafile::dispatch::family;
use metafile::layout::Layout;
use metafile::{CommandError, INVOCATION_ENV, Invocation};
use std::ffi::OsString;
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Working directory for the automation program: the project root, except
/// for `use`, which keeps the caller's directory (`None`: inherit).
#[must_use]
pub fn working_dir<'a>(layout: &'a Layout, args: &[OsString]) -> Option<&'a Path> {
    match args.first() {
        Some(first) if first == family::USE => None,
        _ => Some(layout.root()),
    }
}

/// Run `binary` with `args`, passing the invocation descriptor in
/// `METAFILE_INVOCATION` and inheriting stdio.
///
/// # Errors
///
/// Returns [`LaunchError::Delegation`] if the program cannot be started or
/// exits unsuccessfully.
pub fn delegate(
    layout: &Layout,
    binary: &Path,
    caller_dir: &Path,
    args: &[OsString],
) -> Result<(), LaunchError> {
    let invocation = Invocation::new(caller_dir, layout.root());

    let mut cmd = Command::new(binary);
    cmd.args(args)
        .env(INVOCATION_ENV, invocation.to_env_value()?);
    if let Some(dir) = working_dir(layout, args) {
        cmd.current_dir(dir);
    }
    debug!(binary = %binary.display(), ?args, "delegating");

    let program = binary.display().to_string();
    let status = cmd.status().map_err(|source| {
        LaunchError::Delegation(CommandError::Spawn {
            program: program.clone(),
            source,
        })
    })?;

    if status.success() {
        Ok(())
    } else {
        Err(LaunchError::Delegation(CommandError::Failed {
            program,
            status,
        }))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn args(items: &[&str]) -> Vec<OsString> {
        items.iter().map(OsString::from).collect()
    }

    #[test]
    fn test_working_dir_is_root_by_default() {
        let layout = Layout::new("/work/project");
        for first in ["setup", "tools", "tool", "task", "build"] {
            assert_eq!(
                working_dir(&layout, &args(&[first, "x"])),
                Some(Path::new("/work/project"))
            );
        }
    }

    #[test]
    fn test_working_dir_inherited_for_use() {
        let layout = Layout::new("/work/project");
        assert_eq!(working_dir(&layout, &args(&["use", "rg", "TODO"])), None);
    }

    #[cfg(unix)]
    #[test]
    fn test_delegate_passes_invocation_and_args() {
        use std::fs;
        use std::os::unix::fs::PermissionsExt;

        let project = TempDir::new().unwrap();
        let caller = project.path().join("sub");
        fs::create_dir_all(&caller).unwrap();
        let layout = Layout::new(project.path());

        let binary = project.path().join("fake-metafile");
        fs::write(
            &binary,
            "#!/bin/sh\n{ pwd; echo \"$METAFILE_INVOCATION\"; printf '%s\\n' \"$@\"; } > out.txt\n",
        )
        .unwrap();
        fs::set_permissions(&binary, fs::Permissions::from_mode(0o755)).unwrap();

        delegate(&layout, &binary, &caller, &args(&["test", "a b"])).unwrap();

        let out = fs::read_to_string(project.path().join("out.txt")).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(
            Path::new(lines[0]).canonicalize().unwrap(),
            project.path().canonicalize().unwrap()
        );
        let invocation = Invocation::from_env_value(lines[1]).unwrap();
        assert_eq!(invocation, Invocation::new(&caller, project.path()));
        assert_eq!(&lines[2..], ["test", "a b"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_delegate_reports_failure() {
        use std::fs;
        use std::os::unix::fs::PermissionsExt;

        let project = TempDir::new().unwrap();
        let layout = Layout::new(project.path());
        let binary = project.path().join("fake-metafile");
        fs::write(&binary, "#!/bin/sh\nexit 1\n").unwrap();
        fs::set_permissions(&binary, fs::Permissions::from_mode(0o755)).unwrap();

        let err = delegate(&layout, &binary, project.path(), &args(&["nope"])).unwrap_err();
        assert!(matches!(
            err,
            LaunchError::Delegation(CommandError::Failed { .. })
        ));
    }

    #[test]
    fn test_delegate_missing_binary() {
        let project = TempDir::new().unwrap();
        let layout = Layout::new(project.path());
        let err = delegate(
            &layout,
            &project.path().join("missing"),
            project.path(),
            &args(&["build"]),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            LaunchError::Delegation(CommandError::Spawn { .. })
        ));
    }
}
