//! finvault CLI - encrypted value storage and credit-score history tooling
//!
//! This is the command-line interface for finvault. It wraps the core
//! library's cipher, encrypted store, and score-history synthesizer.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod output;

use std::io::IsTerminal;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{crypto, history, init, misc, store};
use crate::constants::LOG_ENV;
use crate::errors::{exit_code_for, hint_for};

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let ctx = AppContext::new(&cli);

    if let Err(e) = run(&ctx, &cli) {
        eprintln!("Error: {:#}", e);
        if let Some(hint) = hint_for(&e) {
            eprintln!("{}", hint);
        }
        std::process::exit(exit_code_for(&e));
    }
}

/// Logs go to stderr so stdout stays clean for blobs and JSON.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Init(args) => init::handle_init(ctx, args),
        Commands::Encrypt(args) => crypto::handle_encrypt(ctx, args),
        Commands::Decrypt(args) => crypto::handle_decrypt(ctx, args),
        Commands::Hash(args) => crypto::handle_hash(args),
        Commands::History(args) => history::handle_history(ctx, args),
        Commands::Store(args) => store::handle_store(ctx, &args.command),
        Commands::Completions(args) => misc::handle_completions(args),
    }
}
