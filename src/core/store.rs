//! Persistent record of events.
//!
//! Every write runs in its own transaction together with its audit-log row.
//! Returning early with `?` drops the `Transaction`, which rolls it back, so a
//! failed write is never visible to later reads.

use crate::db::migrate::run_pending_migrations;
use crate::db::log::record;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::event::{Event, EventFields};
use crate::models::status::EventStatus;

pub struct EventStore {
    pool: DbPool,
}

impl EventStore {
    /// Open the database at `path` and bring its schema up to date.
    pub fn open(path: &str) -> AppResult<Self> {
        Self::from_pool(DbPool::new(path)?)
    }

    pub fn from_pool(pool: DbPool) -> AppResult<Self> {
        run_pending_migrations(&pool.conn)?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    pub fn create(&mut self, fields: &EventFields) -> AppResult<i64> {
        fields.validate()?;

        let tx = self.pool.conn.transaction()?;
        let id = queries::insert_event(&tx, fields)?;
        record(
            &tx,
            "add",
            &id.to_string(),
            &format!("Created '{}' on {}", fields.title, fields.date_str()),
        )?;
        tx.commit()?;

        Ok(id)
    }

    /// Replace all fields of an existing event. Last write wins.
    pub fn update(&mut self, id: i64, fields: &EventFields) -> AppResult<()> {
        fields.validate()?;

        let tx = self.pool.conn.transaction()?;
        if queries::update_event(&tx, id, fields)? == 0 {
            return Err(AppError::NotFound(id));
        }
        record(
            &tx,
            "edit",
            &id.to_string(),
            &format!("Updated '{}' on {}", fields.title, fields.date_str()),
        )?;
        tx.commit()?;

        Ok(())
    }

    /// Flip ACTIVE ↔ CANCELLED and return the new status.
    pub fn toggle_status(&mut self, id: i64) -> AppResult<EventStatus> {
        let tx = self.pool.conn.transaction()?;
        let current = queries::load_status(&tx, id)?.ok_or(AppError::NotFound(id))?;
        let next = current.toggled();

        queries::set_status(&tx, id, next)?;
        record(
            &tx,
            "status",
            &id.to_string(),
            &format!("{} → {}", current.to_db_str(), next.to_db_str()),
        )?;
        tx.commit()?;

        Ok(next)
    }

    pub fn delete(&mut self, id: i64) -> AppResult<()> {
        let tx = self.pool.conn.transaction()?;
        if queries::delete_event(&tx, id)? == 0 {
            return Err(AppError::NotFound(id));
        }
        record(&tx, "del", &id.to_string(), "Event deleted")?;
        tx.commit()?;

        Ok(())
    }

    pub fn get(&self, id: i64) -> AppResult<Option<Event>> {
        Ok(queries::load_event(&self.pool.conn, id)?)
    }

    /// Like `get`, but a missing id is an error.
    pub fn require(&self, id: i64) -> AppResult<Event> {
        self.get(id)?.ok_or(AppError::NotFound(id))
    }

    /// All events ordered by (date, start_time) ascending.
    pub fn list_all(&self) -> AppResult<Vec<Event>> {
        Ok(queries::load_all_events(&self.pool.conn)?)
    }
}
