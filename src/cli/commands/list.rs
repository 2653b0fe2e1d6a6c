use crate::cli::commands::form::resolve_now;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::presenter::present;
use crate::core::session::Session;
use crate::core::store::EventStore;
use crate::errors::AppResult;
use crate::ui::card::render_card;
use crate::ui::messages::{header, info};
use crate::utils::date::format_date_label;

pub fn handle(cmd: &Commands, cfg: &Config, session: Session, color: bool) -> AppResult<Session> {
    if let Commands::List { filter } = cmd {
        let session = session.show_list();
        let store = EventStore::open(&cfg.database)?;

        // "now" is read once per render
        let now = resolve_now(filter.at.as_ref(), cfg)?;
        let criteria = filter.criteria(now)?;

        let events = store.list_all()?;
        let rows = present(&events, &criteria, now);

        if rows.is_empty() {
            info("No events found.");
            return Ok(session);
        }

        header(format!(
            "Agenda | now: {} {}",
            format_date_label(now.date()),
            now.format("%H:%M")
        ));

        for (event, view) in &rows {
            println!("{}", render_card(event, view, color));
        }

        println!("{} event(s)", rows.len());
        return Ok(session);
    }

    Ok(session)
}
