//! Manifest updates through external tooling
//!
//! Writing the new version into `Cargo.toml`, `package.json` and friends is
//! delegated to the ecosystem's own commands (`cargo set-version`,
//! `npm version`, ...). This module renders those commands for a version and
//! runs them in order through a [`CommandRunner`]:
//!
//! - [runner::SystemRunner]: spawns real processes
//! - [mock::RecordingRunner]: records invocations for tests

pub mod mock;
pub mod runner;

pub use mock::RecordingRunner;
pub use runner::SystemRunner;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::domain::Version;
use crate::error::Result;

/// Placeholder substituted with the new version in command arguments.
pub const VERSION_PLACEHOLDER: &str = "{version}";

/// A configured external command that persists a version.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct UpdateCommand {
    pub program: String,

    #[serde(default)]
    pub args: Vec<String>,

    /// Working directory relative to the project root
    #[serde(default)]
    pub cwd: Option<PathBuf>,
}

impl UpdateCommand {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        UpdateCommand {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            cwd: None,
        }
    }

    /// Run the command from `dir` instead of the project root.
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    /// Substitute `version` into the arguments and resolve the working directory.
    pub fn render(&self, version: &Version, root: &Path) -> Invocation {
        let version = version.to_string();
        Invocation {
            program: self.program.clone(),
            args: self
                .args
                .iter()
                .map(|arg| arg.replace(VERSION_PLACEHOLDER, &version))
                .collect(),
            cwd: match &self.cwd {
                Some(dir) => root.join(dir),
                None => root.to_path_buf(),
            },
        }
    }
}

/// A fully rendered command, ready to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        write!(f, " (in {})", self.cwd.display())
    }
}

/// Runs rendered invocations.
///
/// Implementations must return `ExternalUpdateFailure` when the command
/// cannot be started or exits unsuccessfully.
pub trait CommandRunner {
    fn run(&self, invocation: &Invocation) -> Result<()>;
}

impl<T: CommandRunner + ?Sized> CommandRunner for &T {
    fn run(&self, invocation: &Invocation) -> Result<()> {
        (**self).run(invocation)
    }
}

/// Persists a version by running every configured [`UpdateCommand`].
pub struct ManifestUpdater<'a, R> {
    commands: &'a [UpdateCommand],
    root: &'a Path,
    runner: R,
}

impl<'a, R: CommandRunner> ManifestUpdater<'a, R> {
    pub fn new(commands: &'a [UpdateCommand], root: &'a Path, runner: R) -> Self {
        ManifestUpdater {
            commands,
            root,
            runner,
        }
    }

    /// Invocations that [`apply`](Self::apply) would run, in order.
    pub fn plan(&self, version: &Version) -> Vec<Invocation> {
        self.commands
            .iter()
            .map(|command| command.render(version, self.root))
            .collect()
    }

    /// Runs every invocation in order.
    ///
    /// Stops at the first failure. Updates that already ran are left in
    /// place.
    ///
    /// # Returns
    /// * `Ok(Vec<Invocation>)` - The invocations that ran
    /// * `Err(ExternalUpdateFailure)` - From the first failing invocation
    pub fn apply(&self, version: &Version) -> Result<Vec<Invocation>> {
        let mut applied = Vec::with_capacity(self.commands.len());
        for invocation in self.plan(version) {
            info!("running {}", invocation);
            self.runner.run(&invocation)?;
            applied.push(invocation);
        }
        Ok(applied)
    }
}
