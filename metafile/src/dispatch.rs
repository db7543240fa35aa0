//! Routing the forwarded arguments to a command family.

use crate::error::DispatchError;
use std::ffi::OsString;

/// Command family names. Matching is exact and case-sensitive.
pub mod family {
    pub const SETUP: &str = "setup";
    pub const TOOLS: &str = "tools";
    pub const TOOL: &str = "tool";
    pub const USE: &str = "use";
    pub const TASK: &str = "task";

    /// Families that need a following name; on their own `meta` shows help.
    pub const NEEDS_NAME: [&str; 3] = [TOOL, USE, TASK];
}

/// What a list of forwarded arguments asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    Setup,
    ListTools,
    RunTool { name: &'a str, args: &'a [String] },
    RunTask { name: &'a str, args: &'a [String] },
}

impl<'a> Command<'a> {
    /// Classify `args` by their first token. Anything that is not a family
    /// name is a task name, so `test x` and `task test x` are the same
    /// command. A missing name is the empty string.
    #[must_use]
    pub fn parse(args: &'a [String]) -> Self {
        let (first, rest) = shift(args);
        match first {
            family::SETUP => Self::Setup,
            family::TOOLS => Self::ListTools,
            family::TOOL | family::USE => {
                let (name, args) = shift(rest);
                Self::RunTool { name, args }
            }
            family::TASK => {
                let (name, args) = shift(rest);
                Self::RunTask { name, args }
            }
            name => Self::RunTask { name, args: rest },
        }
    }
}

fn shift(args: &[String]) -> (&str, &[String]) {
    match args.split_first() {
        Some((first, rest)) => (first.as_str(), rest),
        None => ("", args),
    }
}

/// Convert process arguments for dispatch. Task and tool names are matched
/// as text, so an argument that is not valid UTF-8 is an error rather than
/// being silently replaced.
///
/// # Errors
///
/// Returns [`DispatchError::NonUtf8Argument`] for the first such argument.
pub fn utf8_args<I>(raw: I) -> Result<Vec<String>, DispatchError>
where
    I: IntoIterator<Item = OsString>,
{
    raw.into_iter()
        .map(|arg| arg.into_string().map_err(DispatchError::NonUtf8Argument))
        .collect()
}
