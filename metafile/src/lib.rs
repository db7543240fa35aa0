//! # metafile
//!
//! The dispatch library linked into every `metafile.rs` automation program.
//! `meta` compiles the program, then runs it with the invocation descriptor
//! in the environment and the user's arguments on the command line:
//!
//! - `setup` installs the declared tools into `meta/tools`
//! - `tools` lists installed tools
//! - `tool NAME ...` / `use NAME ...` runs an installed tool
//! - `task NAME ...` or just `NAME ...` runs a registered task

pub mod config;
pub mod dispatch;
pub mod error;
pub mod invocation;
pub mod layout;
pub mod logging;
pub mod process;
pub mod setup;
pub mod tasks;
pub mod toolchain;
pub mod tools;

pub use anyhow;
pub use config::{Hook, Metafile};
pub use error::{CommandError, DispatchError, HookStage, InvocationError};
pub use invocation::{INVOCATION_ENV, Invocation};
pub use process::{run_v, run_v_in};
pub use setup::{CargoInstaller, Installer};
pub use tasks::Task;

/// Print an error message and exit with code 1.
pub fn fatal_error(message: &str) -> ! {
    eprintln!("{message}");
    std::process::exit(1);
}
