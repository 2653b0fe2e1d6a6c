use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::session::Session;
use crate::core::store::EventStore;
use crate::db::log::record;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the SQLite database
///  - all pending DB migrations
pub fn handle(cli: &Cli, session: Session) -> AppResult<Session> {
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;
    let db_str = db_path.to_string_lossy().to_string();

    println!("⚙️  Initializing ragenda…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database   : {}", db_str);

    let store = EventStore::open(&db_str)?;
    record(&store.pool().conn, "init", &db_str, "Database initialized")?;

    Ok(session.completed(format!("Database initialized at {}", db_str)))
}
