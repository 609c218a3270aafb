use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// One `--name=value` argument. Switches carry no value and render as `--name=`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flag {
    pub name: &'static str,
    pub value: Option<String>,
}

impl Flag {
    pub fn to_arg(&self) -> String {
        format!("--{}={}", self.name, self.value.as_deref().unwrap_or(""))
    }
}

/// Ordered arguments for a single filtershift invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandPlan {
    executable: PathBuf,
    flags: Vec<Flag>,
}

impl CommandPlan {
    pub fn new(executable: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
            flags: Vec::new(),
        }
    }

    pub fn push(&mut self, name: &'static str, value: impl fmt::Display) -> Result<()> {
        self.insert(name, Some(value.to_string()))
    }

    pub fn push_switch(&mut self, name: &'static str) -> Result<()> {
        self.insert(name, None)
    }

    fn insert(&mut self, name: &'static str, value: Option<String>) -> Result<()> {
        if self.contains(name) {
            return Err(Error::DuplicateFlag { flag: name });
        }
        self.flags.push(Flag { name, value });
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.flags.iter().any(|f| f.name == name)
    }

    /// Value of `name`; `Some("")` for a switch, `None` when absent.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.flags
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_deref().unwrap_or(""))
    }

    pub fn executable(&self) -> &Path {
        &self.executable
    }

    pub fn flags(&self) -> &[Flag] {
        &self.flags
    }

    pub fn args(&self) -> Vec<String> {
        self.flags.iter().map(Flag::to_arg).collect()
    }
}

impl fmt::Display for CommandPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.executable.display())?;
        for flag in &self.flags {
            write!(f, " {}", flag.to_arg())?;
        }
        Ok(())
    }
}
