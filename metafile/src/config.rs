//! The [`Metafile`] builder: what an automation program declares.

use crate::dispatch::{self, Command};
use crate::error::DispatchError;
use crate::invocation::Invocation;
use crate::setup::{self, CargoInstaller, Installer};
use crate::tasks::{Task, TaskTable};
use crate::tools;
use tracing::{debug, warn};

/// Hook run around `setup`.
pub type Hook = Box<dyn Fn() -> anyhow::Result<()>>;

/// Tools, tasks and setup hooks declared by a `metafile.rs`.
///
/// ```no_run
/// use metafile::Metafile;
///
/// fn main() {
///     Metafile::new()
///         .tool("cargo-nextest")
///         .task("test", |args| {
///             metafile::run_v("cargo", ["build", "--tests"])?;
///             metafile::run_v("meta/tools/bin/cargo-nextest", args)?;
///             Ok(())
///         })
///         .run();
/// }
/// ```
pub struct Metafile {
    pub(crate) tools: Vec<String>,
    pub(crate) tasks: TaskTable,
    pub(crate) before_setup: Option<Hook>,
    pub(crate) after_setup: Option<Hook>,
    pub(crate) installer: Box<dyn Installer>,
}

impl Default for Metafile {
    fn default() -> Self {
        Self::new()
    }
}

impl Metafile {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tools: Vec::new(),
            tasks: TaskTable::default(),
            before_setup: None,
            after_setup: None,
            installer: Box::new(CargoInstaller),
        }
    }

    /// Declare a tool to install on `setup`. The spec is passed to
    /// `cargo install` as is, e.g. `ripgrep` or `cargo-nextest@0.9.70`.
    #[must_use]
    pub fn tool(mut self, spec: impl Into<String>) -> Self {
        self.tools.push(spec.into());
        self
    }

    /// Declare several tools, in install order.
    #[must_use]
    pub fn tools<I, S>(mut self, specs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tools.extend(specs.into_iter().map(Into::into));
        self
    }

    /// Register a task. If the name is already registered the earlier task is kept.
    #[must_use]
    pub fn task<F>(mut self, name: impl Into<String>, action: F) -> Self
    where
        F: Fn(&[String]) -> anyhow::Result<()> + 'static,
    {
        let task = Task::new(name, action);
        let name = task.name().to_string();
        if !self.tasks.insert(task) {
            warn!(task = %name, "task registered twice; keeping the first definition");
        }
        self
    }

    #[must_use]
    pub fn before_setup<F>(mut self, hook: F) -> Self
    where
        F: Fn() -> anyhow::Result<()> + 'static,
    {
        self.before_setup = Some(Box::new(hook));
        self
    }

    #[must_use]
    pub fn after_setup<F>(mut self, hook: F) -> Self
    where
        F: Fn() -> anyhow::Result<()> + 'static,
    {
        self.after_setup = Some(Box::new(hook));
        self
    }

    /// Replace the `cargo install` backend used by `setup`.
    #[must_use]
    pub fn installer(mut self, installer: impl Installer + 'static) -> Self {
        self.installer = Box::new(installer);
        self
    }

    /// Declared tool specs, in install order.
    #[must_use]
    pub fn tool_specs(&self) -> &[String] {
        &self.tools
    }

    /// Registered task names, sorted.
    pub fn task_names(&self) -> impl Iterator<Item = &str> {
        self.tasks.names()
    }

    /// Execute the command named by `args`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the tool or task is unknown, or if the command fails.
    pub fn dispatch(&self, invocation: &Invocation, args: &[String]) -> Result<(), DispatchError> {
        let layout = invocation.layout();
        let command = Command::parse(args);
        debug!(?command, root = %layout.root().display(), "dispatching");

        match command {
            Command::Setup => setup::run_setup(self, &layout),
            Command::ListTools => {
                for name in tools::list_tools(&layout)? {
                    println!("{name}");
                }
                Ok(())
            }
            Command::RunTool { name, args } => tools::run_tool(&layout, name, args),
            Command::RunTask { name, args } => {
                let task = self
                    .tasks
                    .get(name)
                    .ok_or_else(|| DispatchError::TaskNotFound(name.to_string()))?;
                task.call(args).map_err(|error| DispatchError::Task {
                    name: name.to_string(),
                    error,
                })
            }
        }
    }

    /// Entry point for a compiled `metafile.rs`: read the invocation set up by
    /// `meta`, dispatch the process arguments and exit.
    pub fn run(self) -> ! {
        crate::logging::init_tracing();

        let result = dispatch::utf8_args(std::env::args_os().skip(1)).and_then(|args| {
            let invocation = Invocation::from_env()?;
            self.dispatch(&invocation, &args)
        });

        match result {
            Ok(()) => std::process::exit(0),
            Err(e) => crate::fatal_error(&e.to_string()),
        }
    }
}
