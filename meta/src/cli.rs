//! CLI module containing the main entry point logic.

use crate::error::LaunchError;
use crate::{compile, config, delegate, scaffold};
use clap::{CommandFactory, Parser as ClapParser, Subcommand};
use metafile::dispatch::family;
use metafile::layout::{BINARY_NAME, Layout, MANIFEST_FILE, MARKER_FILE};
use metafile::{logging, toolchain};
use std::ffi::OsString;
use std::path::Path;
use tracing::debug;

const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// CLI arguments inside a project.
#[derive(ClapParser)]
#[command(name = "meta")]
#[command(version = PKG_VERSION)]
#[command(about = "Run project tasks written in Rust (metafile.rs)", long_about = None)]
#[command(after_help = "\
Commands:
  setup              Install the tools declared in metafile.rs into meta/tools
  tools              List installed tools
  tool NAME [ARGS]   Run an installed tool from the project root
  use NAME [ARGS]    Run an installed tool from the current directory
  task NAME [ARGS]   Run a task
  NAME [ARGS]        Shorthand for `task NAME [ARGS]`")]
struct Cli {
    /// Command family or task name
    #[arg(value_name = "COMMAND")]
    command: Option<String>,

    /// Arguments forwarded to the command
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

impl Cli {
    fn into_forwarded_args(self) -> Vec<OsString> {
        self.command
            .into_iter()
            .chain(self.args)
            .map(OsString::from)
            .collect()
    }
}

/// CLI arguments when no `metafile.rs` was found.
#[derive(ClapParser)]
#[command(name = "meta")]
#[command(version = PKG_VERSION)]
#[command(about = "Run project tasks written in Rust (metafile.rs)", long_about = None)]
#[command(after_help = "Please run `meta init` to create an initial metafile.rs.")]
struct BootstrapCli {
    #[command(subcommand)]
    command: Option<BootstrapCommand>,
}

#[derive(Subcommand)]
enum BootstrapCommand {
    /// Create a starter metafile.rs in the current directory
    Init,
}

/// Arguments for the automation program, exactly as given on the command
/// line. Only a leading flag (`--help`, `--version`, `--`) goes through clap;
/// everything from the first command token on is passed through untouched.
///
/// # Errors
///
/// Returns the clap error (including the help and version "errors") when
/// the first argument is a flag clap handles or rejects.
pub fn forwarded_args(raw: Vec<OsString>) -> Result<Vec<OsString>, clap::Error> {
    let leading_flag = raw
        .first()
        .is_some_and(|first| first.to_string_lossy().starts_with('-'));
    if !leading_flag {
        return Ok(raw);
    }

    let cli = Cli::try_parse_from(std::iter::once(OsString::from("meta")).chain(raw))?;
    Ok(cli.into_forwarded_args())
}

/// Whether `args` should show help instead of being delegated: nothing at
/// all, or a family that needs a name given without one.
#[must_use]
pub fn wants_help(args: &[OsString]) -> bool {
    match args {
        [] => true,
        [only] => only
            .to_str()
            .is_some_and(|only| family::NEEDS_NAME.contains(&only)),
        _ => false,
    }
}

/// Main CLI logic: resolve the project, build its metafile and hand over.
pub fn run_cli() {
    logging::init_tracing();

    if let Err(e) = try_run() {
        metafile::fatal_error(&e.to_string());
    }
}

fn try_run() -> Result<(), LaunchError> {
    let caller_dir = std::env::current_dir().map_err(|source| LaunchError::Io {
        context: "cannot determine current directory".to_string(),
        source,
    })?;

    let Some(root) = config::resolve_project_root(&caller_dir) else {
        return run_bootstrap(&caller_dir);
    };
    let args = match forwarded_args(std::env::args_os().skip(1).collect()) {
        Ok(args) => args,
        Err(e) => e.exit(),
    };

    let layout = Layout::new(root);
    config::ensure_module_manifest(&layout)?;
    config::ensure_directories(&layout);

    if wants_help(&args) {
        return print_help(Cli::command());
    }

    let cargo = toolchain::cargo()?;
    let binary = compile::build_automation_binary(&layout, &cargo)?;
    delegate::delegate(&layout, &binary, &caller_dir, &args)
}

fn run_bootstrap(dir: &Path) -> Result<(), LaunchError> {
    debug!(dir = %dir.display(), "no project, bootstrap mode");

    match BootstrapCli::parse().command {
        Some(BootstrapCommand::Init) => {
            scaffold::init(dir)?;
            println!("{MARKER_FILE} created.");
            println!(
                "Make sure {MANIFEST_FILE} exists and declares a `{BINARY_NAME}` bin target for {MARKER_FILE}."
            );
            Ok(())
        }
        None => print_help(BootstrapCli::command()),
    }
}

fn print_help(mut command: clap::Command) -> Result<(), LaunchError> {
    command.print_help().map_err(|source| LaunchError::Io {
        context: "failed to print help".to_string(),
        source,
    })
}
