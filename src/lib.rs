//! notebag - named notes kept in a checksummed index and opened in your editor

pub mod bag;
pub mod cli;
pub mod domain;
pub mod index;
pub mod infra;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{
    Cli, Command,
    config::Config,
    handlers::{
        handle_action, handle_add, handle_completions, handle_delete, handle_go, handle_list,
        handle_open, handle_setup,
    },
};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = Config::load_from(&config_path)?;
    let paths = config.paths(cli.dir.as_ref());

    match &cli.command {
        Command::List(args) => handle_list(args, &paths),
        Command::Action(args) => handle_action(args, &paths),
        Command::Go(args) => handle_go(args, &paths, &config),
        Command::Add(args) => handle_add(args, &paths, &config),
        Command::Open(args) => handle_open(args, &paths, &config),
        Command::Delete(args) => handle_delete(args, &paths),
        Command::Setup(args) => handle_setup(args, &config_path, &config),
        Command::Completions(args) => handle_completions(args),
    }
}

/// Logs to stderr. `RUST_LOG` wins over the `-v` count.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
