//! Parameterised SQL for the `eventos` table.
//!
//! All functions take a plain `&Connection` so they can run inside a
//! transaction (a `Transaction` derefs to `Connection`).

use crate::errors::{AppError, AppResult};
use crate::models::coverage::CoverageSet;
use crate::models::event::{Event, EventFields};
use crate::models::status::EventStatus;
use crate::utils::time::parse_stored_time;
use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const SELECT_EVENT: &str = "SELECT id, is_presidential_agenda, title, date, start_time, end_time,
        location, address, coverage, responsible_parties, equipment, notes,
        needs_driver, driver_name, driver_phone, status
     FROM eventos";

fn conversion_error(e: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
}

pub fn map_row(row: &Row) -> Result<Event> {
    let date_str: String = row.get("date")?;
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
        .map_err(|_| conversion_error(AppError::InvalidDate(date_str.clone())))?;

    let status_str: String = row.get("status")?;
    let status = EventStatus::from_db_str(&status_str)
        .ok_or_else(|| conversion_error(AppError::InvalidStatus(status_str.clone())))?;

    let start_raw: String = row.get("start_time")?;
    let end_raw: String = row.get("end_time")?;
    let coverage_raw: String = row.get("coverage")?;

    Ok(Event {
        id: row.get("id")?,
        fields: EventFields {
            is_presidential_agenda: row.get::<_, i32>("is_presidential_agenda")? == 1,
            title: row.get("title")?,
            date,
            start_time: parse_stored_time(&start_raw),
            end_time: parse_stored_time(&end_raw),
            location: row.get("location")?,
            address: row.get("address")?,
            coverage: CoverageSet::from_db_str(&coverage_raw),
            responsible_parties: row.get("responsible_parties")?,
            equipment: row.get("equipment")?,
            notes: row.get("notes")?,
            needs_driver: row.get::<_, i32>("needs_driver")? == 1,
            driver_name: row.get("driver_name")?,
            driver_phone: row.get("driver_phone")?,
            status,
        },
    })
}

pub fn insert_event(conn: &Connection, f: &EventFields) -> Result<i64> {
    conn.execute(
        "INSERT INTO eventos (
            is_presidential_agenda, title, date, start_time, end_time,
            location, address, coverage, responsible_parties, equipment, notes,
            needs_driver, driver_name, driver_phone, status
         ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15)",
        params![
            if f.is_presidential_agenda { 1 } else { 0 },
            f.title,
            f.date_str(),
            f.start_str(),
            f.end_str(),
            f.location,
            f.address,
            f.coverage.to_db_string(),
            f.responsible_parties,
            f.equipment,
            f.notes,
            if f.needs_driver { 1 } else { 0 },
            f.driver_name,
            f.driver_phone,
            f.status.to_db_str(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Full replace of every column. Returns the number of rows touched (0 or 1).
pub fn update_event(conn: &Connection, id: i64, f: &EventFields) -> Result<usize> {
    conn.execute(
        "UPDATE eventos SET
            is_presidential_agenda = ?1,
            title = ?2,
            date = ?3,
            start_time = ?4,
            end_time = ?5,
            location = ?6,
            address = ?7,
            coverage = ?8,
            responsible_parties = ?9,
            equipment = ?10,
            notes = ?11,
            needs_driver = ?12,
            driver_name = ?13,
            driver_phone = ?14,
            status = ?15
         WHERE id = ?16",
        params![
            if f.is_presidential_agenda { 1 } else { 0 },
            f.title,
            f.date_str(),
            f.start_str(),
            f.end_str(),
            f.location,
            f.address,
            f.coverage.to_db_string(),
            f.responsible_parties,
            f.equipment,
            f.notes,
            if f.needs_driver { 1 } else { 0 },
            f.driver_name,
            f.driver_phone,
            f.status.to_db_str(),
            id,
        ],
    )
}

pub fn load_status(conn: &Connection, id: i64) -> AppResult<Option<EventStatus>> {
    let raw: Option<String> = conn
        .query_row("SELECT status FROM eventos WHERE id = ?1", [id], |row| {
            row.get(0)
        })
        .optional()?;

    match raw {
        None => Ok(None),
        Some(s) => EventStatus::from_db_str(&s)
            .map(Some)
            .ok_or(AppError::InvalidStatus(s)),
    }
}

pub fn set_status(conn: &Connection, id: i64, status: EventStatus) -> Result<usize> {
    conn.execute(
        "UPDATE eventos SET status = ?1 WHERE id = ?2",
        params![status.to_db_str(), id],
    )
}

pub fn delete_event(conn: &Connection, id: i64) -> Result<usize> {
    conn.execute("DELETE FROM eventos WHERE id = ?1", [id])
}

pub fn load_event(conn: &Connection, id: i64) -> Result<Option<Event>> {
    let sql = format!("{SELECT_EVENT} WHERE id = ?1");
    conn.query_row(&sql, [id], map_row).optional()
}

/// Every event, ordered by date, then start time, then id.
///
/// The final order is taken on the decoded values: stored times written by
/// other tools may not be zero-padded (`9:00`), so the text order is only a
/// first pass.
pub fn load_all_events(conn: &Connection) -> Result<Vec<Event>> {
    let sql = format!("{SELECT_EVENT} ORDER BY date ASC, start_time ASC, id ASC");
    let mut stmt = conn.prepare(&sql)?;
    let mut out = stmt
        .query_map([], map_row)?
        .collect::<Result<Vec<_>>>()?;

    out.sort_by_key(|e| (e.fields.date, e.fields.start_time, e.id));
    Ok(out)
}
