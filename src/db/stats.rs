use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RED, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) EVENT COUNTS
    //
    let (total, cancelled, presidential): (i64, i64, i64) = pool.conn.query_row(
        "SELECT COUNT(*),
                COALESCE(SUM(status = 'CANCELLED'), 0),
                COALESCE(SUM(is_presidential_agenda = 1), 0)
         FROM eventos",
        [],
        |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
    )?;

    println!("{}• Total events:{} {}{}{}", CYAN, RESET, GREEN, total, RESET);
    println!("{}• Cancelled:{} {}{}{}", CYAN, RESET, RED, cancelled, RESET);
    println!("{}• Presidential agenda:{} {}", CYAN, RESET, presidential);

    //
    // 3) DATE RANGE
    //
    let range: Option<(Option<String>, Option<String>)> = pool
        .conn
        .query_row("SELECT MIN(date), MAX(date) FROM eventos", [], |row| {
            Ok((row.get(0)?, row.get(1)?))
        })
        .optional()?;

    let (first, last) = range.unwrap_or((None, None));
    let placeholder = format!("{GREY}--{RESET}");

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", first.unwrap_or_else(|| placeholder.clone()));
    println!("    to:   {}", last.unwrap_or(placeholder));

    println!();
    Ok(())
}
