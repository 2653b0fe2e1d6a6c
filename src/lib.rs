//! ragenda library root.
//! Exposes the CLI parser, the high-level run() function, the event store,
//! the presentation rules and the supporting modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::session::Session;
use crate::errors::AppResult;
use clap::Parser;

/// Central command dispatcher. The session goes in and the next one comes out.
pub fn dispatch(cli: &Cli, cfg: &Config, session: Session) -> AppResult<Session> {
    let color = !cli.plain;
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli, session),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, session),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, cfg, session),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg, session),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg, session),
        Commands::Edit { .. } => cli::commands::edit::handle(&cli.command, cfg, session),
        Commands::Status { .. } => cli::commands::status::handle(&cli.command, cfg, session),
        Commands::Del { .. } => cli::commands::del::handle(&cli.command, cfg, session),
        Commands::Show { .. } => cli::commands::show::handle(&cli.command, cfg, session, color),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg, session, color),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg, session),
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, cfg, session),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<Session> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once
    let mut cfg = Config::load()?;

    // 3️⃣ command-line override of the database
    if let Some(custom_db) = &cli.db {
        cfg.database = utils::path::expand_tilde(custom_db)
            .to_string_lossy()
            .to_string();
    }

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg, Session::start())
}
