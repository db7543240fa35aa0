//! Locating the Cargo executable.

use crate::error::CommandError;
use std::path::PathBuf;

/// Explicit Cargo executable. Cargo itself sets this for processes it spawns.
pub const CARGO_ENV: &str = "CARGO";

/// Environment variable `cargo install` reads its install root from.
pub const INSTALL_ROOT_ENV: &str = "CARGO_INSTALL_ROOT";

/// Resolve the Cargo executable: `$CARGO` if set, otherwise `cargo` on `PATH`.
///
/// # Errors
///
/// Returns `Err` if `$CARGO` is unset and no `cargo` is found on `PATH`.
pub fn cargo() -> Result<PathBuf, CommandError> {
    if let Some(path) = std::env::var_os(CARGO_ENV).filter(|p| !p.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    which::which("cargo").map_err(CommandError::CargoNotFound)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_cargo_prefers_env_override() {
        let previous = std::env::var_os(CARGO_ENV);
        // SAFETY: serialized with every other test touching the environment.
        unsafe { std::env::set_var(CARGO_ENV, "/opt/toolchain/cargo") };

        let resolved = cargo();

        // SAFETY: as above.
        unsafe {
            match previous {
                Some(value) => std::env::set_var(CARGO_ENV, value),
                None => std::env::remove_var(CARGO_ENV),
            }
        }
        assert_eq!(resolved.unwrap(), PathBuf::from("/opt/toolchain/cargo"));
    }
}
