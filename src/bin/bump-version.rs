use anyhow::{Context, Result};
use clap::Parser;

use channel_bump::cli::orchestration::{run_bump, BumpWorkflowArgs};
use channel_bump::cli::CommonArgs;
use channel_bump::updater::SystemRunner;
use channel_bump::{config, logging, ui};

#[derive(clap::Parser)]
#[command(
    name = "bump-version",
    version,
    about = "Print the next version of the manifest following the even/odd minor convention"
)]
struct Args {
    #[command(flatten)]
    common: CommonArgs,

    #[arg(long, help = "Update manifests with the new version")]
    update: bool,

    #[arg(
        long,
        requires = "update",
        help = "Show the update commands without running them"
    )]
    dry_run: bool,
}

fn run(args: Args) -> Result<()> {
    let config = config::load_config(args.common.config.as_deref(), &args.common.root)
        .context("Failed to load configuration")?;

    let workflow_args = BumpWorkflowArgs {
        root: args.common.root,
        manifest: args.common.manifest,
        update: args.update,
        dry_run: args.dry_run,
    };

    let stdout = std::io::stdout();
    run_bump(&workflow_args, &config, SystemRunner, &mut stdout.lock())
        .context("Failed to bump version")?;
    Ok(())
}

fn main() {
    let args = Args::parse();
    logging::init(args.common.verbose);

    if let Err(e) = run(args) {
        ui::display_error_chain(&e);
        std::process::exit(1);
    }
}
