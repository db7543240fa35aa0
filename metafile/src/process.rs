//! Running child processes with inherited standard streams.
//!
//! These helpers are what task bodies in a `metafile.rs` usually reach for:
//!
//! ```no_run
//! fn build(args: &[String]) -> metafile::anyhow::Result<()> {
//!     metafile::run_v("cargo", ["build", "--release"])?;
//!     metafile::run_v_in("docs", "mdbook", args)?;
//!     Ok(())
//! }
//! ```

use crate::error::CommandError;
use std::ffi::OsStr;
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Run `program` with `args` to completion, streaming its output.
///
/// # Errors
///
/// Returns `Err` if the program cannot be started or exits unsuccessfully.
pub fn run_v<P, I, S>(program: P, args: I) -> Result<(), CommandError>
where
    P: AsRef<OsStr>,
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut cmd = Command::new(program);
    cmd.args(args);
    run_inherited(&mut cmd)
}

/// Like [`run_v`], but with `dir` as the working directory.
///
/// # Errors
///
/// Returns `Err` if the program cannot be started or exits unsuccessfully.
pub fn run_v_in<D, P, I, S>(dir: D, program: P, args: I) -> Result<(), CommandError>
where
    D: AsRef<Path>,
    P: AsRef<OsStr>,
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut cmd = Command::new(program);
    cmd.args(args).current_dir(dir);
    run_inherited(&mut cmd)
}

pub(crate) fn run_inherited(cmd: &mut Command) -> Result<(), CommandError> {
    let program = cmd.get_program().to_string_lossy().into_owned();
    debug!(program = %program, args = ?cmd.get_args().collect::<Vec<_>>(), "running");

    let status = cmd.status().map_err(|source| CommandError::Spawn {
        program: program.clone(),
        source,
    })?;

    if status.success() {
        Ok(())
    } else {
        Err(CommandError::Failed { program, status })
    }
}

#[cfg(all(test, unix))]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_run_v_success() {
        run_v("sh", ["-c", "exit 0"]).unwrap();
    }

    #[test]
    fn test_run_v_reports_exit_status() {
        let err = run_v("sh", ["-c", "exit 3"]).unwrap_err();
        match err {
            CommandError::Failed { program, status } => {
                assert_eq!(program, "sh");
                assert_eq!(status.code(), Some(3));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_run_v_missing_program() {
        let err = run_v("definitely-not-a-real-program-xyz", std::iter::empty::<&str>()).unwrap_err();
        assert!(matches!(err, CommandError::Spawn { .. }));
    }

    #[test]
    fn test_run_v_in_uses_directory() {
        let dir = tempfile::TempDir::new().unwrap();
        run_v_in(dir.path(), "sh", ["-c", "touch marker"]).unwrap();
        assert!(dir.path().join("marker").exists());
    }
}
