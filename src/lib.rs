//! SIAP Lapor library root.
//! Exposes the CLI parser, the high-level `run()` function and the modules
//! behind each command.

pub mod api;
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::commands;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use models::Status;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => commands::init::handle(&cli.command),
        Commands::Config { .. } => commands::config::handle(&cli.command, cfg),
        Commands::Login { .. } => commands::login::handle_login(&cli.command, cfg),
        Commands::Logout => commands::login::handle_logout(),
        Commands::Whoami => commands::login::handle_whoami(cfg),
        Commands::Dashboard { .. } => commands::dashboard::handle(&cli.command, cfg),
        Commands::Submit { .. } => commands::submit::handle_submit(&cli.command, cfg),
        Commands::Edit { .. } => commands::submit::handle_edit(&cli.command, cfg),
        Commands::Options { .. } => commands::options::handle(&cli.command),
        Commands::Approve { id } => commands::approve::handle(id, Status::Approved, cfg),
        Commands::Reject { id } => commands::approve::handle(id, Status::Rejected, cfg),
        Commands::Del { .. } => commands::del::handle(&cli.command, cfg),
        Commands::Pdf { .. } => commands::pdf::handle(&cli.command, cfg),
        Commands::Form { .. } => commands::form::handle(&cli.command, cfg),
        Commands::Profile { .. } => commands::profile::handle(&cli.command, cfg),
        Commands::Users { .. } => commands::users::handle(&cli.command, cfg),
        Commands::Db { .. } => commands::db::handle(&cli.command, cfg),
        Commands::Export { .. } => commands::export::handle(&cli.command, cfg),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    // RUST_LOG still wins over the default level
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let mut cfg = Config::load()?;

    if let Some(endpoint) = &cli.endpoint {
        cfg.endpoint = Some(endpoint.clone());
    }
    cfg.offline = cli.offline;

    log::debug!(
        "config dir {}, endpoint {:?}, offline {}",
        Config::config_dir().display(),
        cfg.endpoint(),
        cfg.offline
    );

    dispatch(&cli, &cfg)
}
