use crate::cli::commands::form::resolve_now;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::presenter::EventView;
use crate::core::session::Session;
use crate::core::store::EventStore;
use crate::errors::AppResult;
use crate::ui::card::render_card;

pub fn handle(cmd: &Commands, cfg: &Config, session: Session, color: bool) -> AppResult<Session> {
    if let Commands::Show { id, at } = cmd {
        let store = EventStore::open(&cfg.database)?;
        let event = store.require(*id)?;
        let now = resolve_now(at.as_ref(), cfg)?;

        let view = EventView::build(&event, now);
        print!("{}", render_card(&event, &view, color));
    }

    Ok(session)
}
