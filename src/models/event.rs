use super::{coverage::CoverageSet, status::EventStatus};
use crate::errors::{AppError, AppResult};
use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

/// The fifteen user-editable attributes of an event.
///
/// Optional text fields are empty strings when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventFields {
    pub is_presidential_agenda: bool, // ⇔ eventos.is_presidential_agenda (INT 0/1)
    pub title: String,                // ⇔ eventos.title
    pub date: NaiveDate,              // ⇔ eventos.date (TEXT "YYYY-MM-DD")
    pub start_time: NaiveTime,        // ⇔ eventos.start_time (TEXT "HH:MM")
    pub end_time: NaiveTime,          // ⇔ eventos.end_time (TEXT "HH:MM")
    pub location: String,
    pub address: String,
    pub coverage: CoverageSet, // ⇔ eventos.coverage ("Social, Photo")
    pub responsible_parties: String,
    pub equipment: String,
    pub notes: String,
    pub needs_driver: bool, // ⇔ eventos.needs_driver (INT 0/1)
    pub driver_name: String,
    pub driver_phone: String,
    pub status: EventStatus, // ⇔ eventos.status ('ACTIVE' | 'CANCELLED')
}

impl EventFields {
    /// Build a record with the required fields; everything else takes its default.
    pub fn new(title: &str, date: NaiveDate, start_time: NaiveTime, end_time: NaiveTime) -> Self {
        Self {
            is_presidential_agenda: false,
            title: title.to_string(),
            date,
            start_time,
            end_time,
            location: String::new(),
            address: String::new(),
            coverage: CoverageSet::default(),
            responsible_parties: String::new(),
            equipment: String::new(),
            notes: String::new(),
            needs_driver: false,
            driver_name: String::new(),
            driver_phone: String::new(),
            status: EventStatus::Active,
        }
    }

    /// Checks the constraints a record must satisfy before it is written.
    ///
    /// `end_time` earlier than `start_time` is accepted (overnight windows).
    pub fn validate(&self) -> AppResult<()> {
        if self.title.trim().is_empty() {
            return Err(AppError::Validation("title is required".into()));
        }
        Ok(())
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn start_str(&self) -> String {
        self.start_time.format("%H:%M").to_string()
    }

    pub fn end_str(&self) -> String {
        self.end_time.format("%H:%M").to_string()
    }
}

/// A stored event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    pub id: i64,
    #[serde(flatten)]
    pub fields: EventFields,
}

impl Event {
    pub fn new(id: i64, fields: EventFields) -> Self {
        Self { id, fields }
    }

    pub fn is_cancelled(&self) -> bool {
        self.fields.status.is_cancelled()
    }
}
