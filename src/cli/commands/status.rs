use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::Session;
use crate::core::store::EventStore;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config, session: Session) -> AppResult<Session> {
    if let Commands::Status { id } = cmd {
        let mut store = EventStore::open(&cfg.database)?;

        return Ok(match store.toggle_status(*id) {
            Ok(status) => {
                session.completed(format!("Event #{} is now {}.", id, status.to_db_str()))
            }
            Err(e) => session.failed(format!("Could not change status: {e}")),
        });
    }

    Ok(session)
}
