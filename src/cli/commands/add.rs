use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::Session;
use crate::core::store::EventStore;
use crate::errors::AppResult;
use crate::models::event::EventFields;
use crate::utils::date::civil_now;

/// Create a new event from the given flags.
pub fn handle(cmd: &Commands, cfg: &Config, session: Session) -> AppResult<Session> {
    if let Commands::Add { event } = cmd {
        let session = session.new_event();

        //
        // 1. Defaults: today (civil clock) and the configured time window
        //
        let today = civil_now(cfg.offset()?).date();
        let base = EventFields::new("", today, cfg.start_default()?, cfg.end_default()?);

        //
        // 2. Overlay flags (malformed input is rejected before touching the DB)
        //
        let fields = event.apply(base)?;

        //
        // 3. Persist
        //
        let mut store = EventStore::open(&cfg.database)?;
        return Ok(match store.create(&fields) {
            Ok(id) => session.completed(format!(
                "💾 Event #{} saved: {} on {} {}-{}",
                id,
                fields.title,
                fields.date_str(),
                fields.start_str(),
                fields.end_str()
            )),
            Err(e) => session.failed(format!("Could not save the event: {e}")),
        });
    }

    Ok(session)
}
