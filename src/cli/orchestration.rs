//! Workflow orchestration for both binaries
//!
//! Keeps argument parsing in the binaries and the read → compute → persist
//! flow here, so it can be driven programmatically with any
//! [`CommandRunner`] and output sink.

use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::Config;
use crate::domain::{Channel, Version};
use crate::error::Result;
use crate::manifest;
use crate::ui;
use crate::updater::{CommandRunner, Invocation, ManifestUpdater};

/// Note printed when the computed version is not persisted.
pub const NOT_UPDATING_NOTE: &str = "Not updating manifests as --update was not set";

/// Arguments for the bump workflow
///
/// Mirrors the CLI flags without depending on clap.
#[derive(Debug, Clone, PartialEq)]
pub struct BumpWorkflowArgs {
    /// Project root
    pub root: PathBuf,

    /// Manifest override; the configured manifest is used when `None`
    pub manifest: Option<PathBuf>,

    /// Write the new version back through the update commands
    pub update: bool,

    /// With `update`, list the update commands without running them
    pub dry_run: bool,
}

/// Result of a successful bump workflow
#[derive(Debug, Clone, PartialEq)]
pub struct BumpResult {
    /// Version found in the manifest
    pub current: Version,

    /// Computed successor
    pub next: Version,

    /// Update commands that ran (empty unless updating for real)
    pub applied: Vec<Invocation>,
}

/// Arguments for the classify workflow
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifyWorkflowArgs {
    pub root: PathBuf,
    pub manifest: Option<PathBuf>,
}

/// Manifest path from an explicit override or the configuration, resolved against `root`.
pub fn resolve_manifest(root: &Path, manifest: Option<&Path>, config: &Config) -> PathBuf {
    match manifest {
        Some(path) => root.join(path),
        None => config.manifest_path(root),
    }
}

/// Main bump workflow
///
/// 1. Read the current version from the manifest
/// 2. Compute the next version and write it to `out`
/// 3. Persist it through the update commands when requested
///
/// The version is written before any update runs, so it is reported even
/// if an update command fails afterwards.
pub fn run_bump<R, W>(
    args: &BumpWorkflowArgs,
    config: &Config,
    runner: R,
    out: &mut W,
) -> Result<BumpResult>
where
    R: CommandRunner,
    W: Write,
{
    let manifest_path = resolve_manifest(&args.root, args.manifest.as_deref(), config);
    let current = manifest::load_version(&manifest_path)?;
    let next = current.next()?;
    debug!(%current, %next, channel = %current.channel(), "computed next version");

    writeln!(out, "{}", next)?;
    out.flush()?;

    if !args.update {
        ui::display_info(NOT_UPDATING_NOTE);
        return Ok(BumpResult {
            current,
            next,
            applied: Vec::new(),
        });
    }

    let updater = ManifestUpdater::new(&config.update, &args.root, runner);

    if args.dry_run {
        for invocation in updater.plan(&next) {
            ui::display_status(&format!("Would run: {}", invocation));
        }
        return Ok(BumpResult {
            current,
            next,
            applied: Vec::new(),
        });
    }

    let applied = updater.apply(&next)?;
    Ok(BumpResult {
        current,
        next,
        applied,
    })
}

/// Classify workflow
///
/// Reads the manifest version and returns its channel. Produces no output.
pub fn run_classify(args: &ClassifyWorkflowArgs, config: &Config) -> Result<Channel> {
    let manifest_path = resolve_manifest(&args.root, args.manifest.as_deref(), config);
    let version = manifest::load_version(&manifest_path)?;
    let channel = version.channel();
    debug!(%version, %channel, "classified version");
    Ok(channel)
}
