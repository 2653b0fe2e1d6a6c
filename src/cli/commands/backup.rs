use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::core::session::Session;
use crate::core::store::EventStore;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config, session: Session) -> AppResult<Session> {
    if let Commands::Backup {
        file,
        compress,
        force,
    } = cmd
    {
        let store = EventStore::open(&cfg.database)?;
        BackupLogic::backup(store.pool(), &cfg.database, file, *compress, *force)?;
    }

    Ok(session)
}
