use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use channel_bump::cli::orchestration::{run_classify, ClassifyWorkflowArgs};
use channel_bump::cli::CommonArgs;
use channel_bump::domain::Channel;
use channel_bump::{config, logging, ui};

/// Exit code for malformed input, distinct from the prerelease signal.
const ERROR_EXIT_CODE: u8 = 2;

#[derive(clap::Parser)]
#[command(
    name = "is-prerelease",
    version,
    about = "Exit with status 1 if the manifest version is a prerelease (even minor), 0 otherwise"
)]
struct Args {
    #[command(flatten)]
    common: CommonArgs,
}

fn run(args: Args) -> Result<Channel> {
    let config = config::load_config(args.common.config.as_deref(), &args.common.root)
        .context("Failed to load configuration")?;

    let workflow_args = ClassifyWorkflowArgs {
        root: args.common.root,
        manifest: args.common.manifest,
    };
    run_classify(&workflow_args, &config).context("Failed to classify version")
}

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.common.verbose);

    match run(args) {
        Ok(channel) => ExitCode::from(channel.exit_code()),
        Err(e) => {
            ui::display_error_chain(&e);
            ExitCode::from(ERROR_EXIT_CODE)
        }
    }
}
