//! Command-line surface shared by `bump-version` and `is-prerelease`

pub mod orchestration;

use clap::ArgAction;
use std::path::PathBuf;

/// Options accepted by both binaries
#[derive(clap::Args, Debug, Clone, PartialEq)]
pub struct CommonArgs {
    #[arg(
        short = 'C',
        long,
        default_value = ".",
        help = "Project root; relative paths resolve against it"
    )]
    pub root: PathBuf,

    #[arg(long, help = "Custom configuration file path")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Manifest to read the version from")]
    pub manifest: Option<PathBuf>,

    #[arg(short, long, action = ArgAction::Count, help = "Increase log verbosity")]
    pub verbose: u8,
}
