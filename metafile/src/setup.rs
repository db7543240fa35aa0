//! `setup`: install declared tools into the project-local tools directory.

use crate::config::Metafile;
use crate::error::{CommandError, DispatchError, HookStage};
use crate::layout::Layout;
use crate::process;
use crate::toolchain::{self, INSTALL_ROOT_ENV};
use tracing::info;

/// Installs a single tool spec. The destination is taken from
/// `CARGO_INSTALL_ROOT`, which [`run_setup`] points at `meta/tools`.
pub trait Installer {
    /// Install `spec`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the install command cannot be run or fails.
    fn install(&self, spec: &str) -> Result<(), CommandError>;
}

/// Installs tools with `cargo install <spec>`.
#[derive(Debug, Default, Clone, Copy)]
pub struct CargoInstaller;

impl Installer for CargoInstaller {
    fn install(&self, spec: &str) -> Result<(), CommandError> {
        let cargo = toolchain::cargo()?;
        process::run_v(cargo, ["install", spec])
    }
}

/// Run the before hook, install every tool in declaration order, then run
/// the after hook. Stops at the first failure; tools installed before it
/// stay installed.
pub(crate) fn run_setup(metafile: &Metafile, layout: &Layout) -> Result<(), DispatchError> {
    if let Some(hook) = &metafile.before_setup {
        hook().map_err(|error| DispatchError::Hook {
            stage: HookStage::BeforeSetup,
            error,
        })?;
    }

    let install_root = layout.tools_root();
    // SAFETY: the dispatch library is single-threaded; nothing else reads or
    // writes the environment concurrently. The override is left in place.
    unsafe { std::env::set_var(INSTALL_ROOT_ENV, &install_root) };

    for spec in &metafile.tools {
        info!(tool = %spec, root = %install_root.display(), "installing");
        metafile
            .installer
            .install(spec)
            .map_err(|source| DispatchError::Install {
                spec: spec.clone(),
                source,
            })?;
    }

    if let Some(hook) = &metafile.after_setup {
        hook().map_err(|error| DispatchError::Hook {
            stage: HookStage::AfterSetup,
            error,
        })?;
    }
    Ok(())
}
