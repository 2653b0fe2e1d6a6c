use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::core::session::Session;
use crate::core::store::EventStore;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config, session: Session) -> AppResult<Session> {
    if matches!(cmd, Commands::Log { print: true }) {
        let store = EventStore::open(&cfg.database)?;
        LogLogic::print_log(store.pool())?;
    }

    Ok(session)
}
