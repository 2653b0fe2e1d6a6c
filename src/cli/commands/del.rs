use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::Session;
use crate::core::store::EventStore;
use crate::errors::AppResult;
use crate::ui::messages::warning;

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config, session: Session) -> AppResult<Session> {
    if let Commands::Del { id, yes } = cmd {
        let mut store = EventStore::open(&cfg.database)?;
        let event = store.require(*id)?;

        let prompt = format!(
            "Delete event #{} '{}' on {}? This action is irreversible.",
            id,
            event.fields.title,
            event.fields.date_str()
        );

        if !*yes && !ask_confirmation(&prompt) {
            return Ok(session.inform("Operation cancelled."));
        }

        return Ok(match store.delete(*id) {
            Ok(()) => session.completed(format!("🗑️ Event #{} deleted.", id)),
            Err(e) => session.failed(format!("Could not delete event #{}: {e}", id)),
        });
    }

    Ok(session)
}
