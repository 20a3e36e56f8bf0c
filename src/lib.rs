//! commtrack library root.
//! Exposes the CLI parser, the high-level run() function, and the internal
//! modules: record store, repositories, dashboard aggregator, access control.

pub mod cli;
pub mod config;
pub mod dashboard;
pub mod errors;
pub mod export;
pub mod models;
pub mod repo;
pub mod session;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::{AppError, AppResult};
use session::{Role, Session, StaticPassphrase};

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, session: &Session) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Dashboard { .. } => cli::commands::dashboard::handle(&cli.command, cfg),
        Commands::Equipment { action } => cli::commands::equipment::handle(action, cfg, session),
        Commands::Task { action } => cli::commands::task::handle(action, cfg, session),
        Commands::Search { .. } => cli::commands::search::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;

    // Command-line data dir wins over the configured one
    if let Some(custom_dir) = &cli.data_dir {
        cfg.data_dir = custom_dir.clone();
    }

    // One session per invocation. Guest is the default; the Admin role needs
    // the shared passphrase and is verified before any command runs.
    let mut session = Session::new();
    match Role::role_from_str(&cli.role) {
        Some(Role::Admin) => {
            session.begin_admin_login();
            let passphrase = cli.password.clone().unwrap_or_default();
            let check = StaticPassphrase(cfg.admin_password.clone());
            session.login_admin(&check, &passphrase)?;
        }
        Some(Role::Guest) => session.login_guest(),
        None => return Err(AppError::InvalidRole(cli.role.clone())),
    }

    dispatch(&cli, &cfg, &session)
}
