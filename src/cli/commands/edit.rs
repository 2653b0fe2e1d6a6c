use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::Session;
use crate::core::store::EventStore;
use crate::errors::AppResult;

/// Edit an event: load it, overlay the flags, save every field back.
pub fn handle(cmd: &Commands, cfg: &Config, session: Session) -> AppResult<Session> {
    if let Commands::Edit { id, event } = cmd {
        let session = session.edit_event(*id);
        let mut store = EventStore::open(&cfg.database)?;

        let current = store.require(*id)?;
        let fields = event.apply(current.fields)?;

        return Ok(match store.update(*id, &fields) {
            Ok(()) => session.completed(format!("💾 Event #{} updated.", id)),
            Err(e) => session.failed(format!("Could not save event #{}: {e}", id)),
        });
    }

    Ok(session)
}
