//! User-registered tasks and their lookup table.

use std::collections::BTreeMap;
use std::fmt;

/// Body of a task: receives the arguments that followed the task name.
pub type TaskAction = Box<dyn Fn(&[String]) -> anyhow::Result<()>>;

pub struct Task {
    name: String,
    action: TaskAction,
}

impl Task {
    pub fn new<F>(name: impl Into<String>, action: F) -> Self
    where
        F: Fn(&[String]) -> anyhow::Result<()> + 'static,
    {
        Self {
            name: name.into(),
            action: Box::new(action),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Invoke the task body.
    ///
    /// # Errors
    ///
    /// Returns whatever error the task body returns.
    pub fn call(&self, args: &[String]) -> anyhow::Result<()> {
        (self.action)(args)
    }
}

impl fmt::Debug for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Task").field("name", &self.name).finish_non_exhaustive()
    }
}

/// Tasks keyed by exact name.
#[derive(Debug, Default)]
pub(crate) struct TaskTable {
    tasks: BTreeMap<String, Task>,
}

impl TaskTable {
    /// Register `task`. Returns `false` and keeps the existing entry if the
    /// name is already taken.
    pub(crate) fn insert(&mut self, task: Task) -> bool {
        if self.tasks.contains_key(task.name()) {
            return false;
        }
        self.tasks.insert(task.name.clone(), task);
        true
    }

    pub(crate) fn get(&self, name: &str) -> Option<&Task> {
        self.tasks.get(name)
    }

    pub(crate) fn names(&self) -> impl Iterator<Item = &str> {
        self.tasks.keys().map(String::as_str)
    }
}
