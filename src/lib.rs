//! mealtally library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::{Config, EnvOrConfigSecrets, SecretProvider};
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, secrets: &dyn SecretProvider) -> AppResult<()> {
    use crate::cli::commands;

    match &cli.command {
        Commands::Init => commands::init::handle(cli),
        Commands::Config { .. } => commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => commands::db::handle(&cli.command, cfg),
        Commands::Log { .. } => commands::log::handle(&cli.command, cfg),
        Commands::Add { .. } => commands::add::handle(&cli.command, cfg, secrets),
        Commands::List => commands::list::handle(cfg, secrets),
        Commands::Edit { .. } => commands::edit::handle(&cli.command, cfg, secrets),
        Commands::Del { .. } => commands::del::handle(&cli.command, cfg, secrets),
        Commands::Summary => commands::summary::handle(cfg, secrets),
        Commands::Chart { .. } => commands::chart::handle(&cli.command, cfg, secrets),
        Commands::Export { .. } => commands::export::handle(&cli.command, cfg),
        Commands::Feedback { .. } => commands::feedback::handle(&cli.command, cfg, secrets),
        Commands::Form => commands::form::handle(cfg, secrets),
        Commands::Backup { .. } => commands::backup::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once
    let mut cfg = Config::load()?;

    // 3️⃣ command-line overrides
    if let Some(custom_db) = &cli.db {
        cfg.database = utils::path::expand_tilde(custom_db)
            .to_string_lossy()
            .to_string();
    }
    if let Some(name) = &cli.name {
        cfg.default_person = Some(name.clone());
    }

    // 4️⃣ admin secret, read once
    let secrets = EnvOrConfigSecrets::resolve(&cfg);

    dispatch(&cli, &cfg, &secrets)
}
