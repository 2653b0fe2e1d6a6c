use crate::cli::commands::form::resolve_now;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::presenter::present;
use crate::core::session::Session;
use crate::core::store::EventStore;
use crate::db::log::record;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config, session: Session) -> AppResult<Session> {
    if let Commands::Export {
        format,
        file,
        force,
        filter,
    } = cmd
    {
        let store = EventStore::open(&cfg.database)?;
        let now = resolve_now(filter.at.as_ref(), cfg)?;
        let criteria = filter.criteria(now)?;

        let events = store.list_all()?;
        let rows = present(&events, &criteria, now);

        let count = ExportLogic::export(&rows, *format, file, *force)?;
        if count > 0 {
            record(
                &store.pool().conn,
                "export",
                file,
                &format!("{} event(s) exported as {}", count, format.as_str()),
            )?;
        }
    }

    Ok(session)
}
