mod cli;
mod cli_utils;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging (warn unless RUST_LOG says otherwise)
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("minigame=warn,minigame_core=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let rules = args.rules.as_deref();

    match args.command {
        Command::Score { result } => commands::score::run(&result, rules),
        Command::Play {
            progress,
            result,
            unlock,
        } => commands::play::run(&progress, &result, unlock, rules),
        Command::Settings {
            progress,
            sound,
            animation,
        } => commands::settings::run(&progress, sound, animation),
        Command::Reconcile {
            local,
            remote,
            output,
        } => commands::reconcile::run(&local, &remote, output.as_deref()),
        Command::Sync {
            identity,
            local_dir,
            remote_dir,
        } => commands::sync::run(&identity, &local_dir, &remote_dir),
        Command::Rules { format } => commands::rules::run(format, rules),
        Command::Init { output } => commands::init::run(output.as_deref()),
    }
}
