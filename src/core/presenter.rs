//! Presentation rules: list filtering, temporal classification and the
//! display strings derived from them. Pure functions; no I/O and no markup.

use crate::models::agenda::AgendaFilter;
use crate::models::event::{Event, EventFields};
use crate::utils::date::format_date_label;
use crate::utils::formatting::phone_digits;
use crate::utils::time::{format_time, truncate_to_minute};
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// Base URL of the driver contact link; the phone digits are appended.
pub const DRIVER_LINK_BASE: &str = "https://wa.me/";

/// Criteria of the list view. The default lets every event through.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub date: Option<NaiveDate>,
    pub agenda: AgendaFilter,
    pub responsible: Option<String>,
}

impl FilterCriteria {
    pub fn matches(&self, event: &EventFields) -> bool {
        if let Some(d) = self.date
            && d != event.date
        {
            return false;
        }

        if !self.agenda.accepts(event.is_presidential_agenda) {
            return false;
        }

        match self.responsible.as_deref() {
            Some(needle) if !needle.trim().is_empty() => event
                .responsible_parties
                .to_lowercase()
                .contains(&needle.to_lowercase()),
            _ => true,
        }
    }
}

/// Where an event sits relative to "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TemporalClass {
    Past,
    Today,
    Ongoing,
    Future,
}

impl TemporalClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemporalClass::Past => "past",
            TemporalClass::Today => "today",
            TemporalClass::Ongoing => "ongoing",
            TemporalClass::Future => "future",
        }
    }
}

/// Classify an event against a civil "now". Comparison is at minute precision
/// and the window is inclusive on both ends.
pub fn classify(event: &EventFields, now: NaiveDateTime) -> TemporalClass {
    let today = now.date();

    if event.date < today {
        return TemporalClass::Past;
    }
    if event.date > today {
        return TemporalClass::Future;
    }

    let t = truncate_to_minute(now.time());
    let start = truncate_to_minute(event.start_time);
    let end = truncate_to_minute(event.end_time);

    if start <= t && t <= end {
        TemporalClass::Ongoing
    } else {
        TemporalClass::Today
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Accent {
    Grey,
    Gold,
    Red,
    Blue,
    Green,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Badge {
    Today,
    Now,
}

impl Badge {
    pub fn label(&self) -> &'static str {
        match self {
            Badge::Today => "TODAY!",
            Badge::Now => "NOW!",
        }
    }
}

/// Styling hints for one card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Highlight {
    pub accent: Accent,
    pub badge: Option<Badge>,
    pub dimmed: bool,
    pub struck_through: bool,
}

impl Highlight {
    pub fn for_event(class: TemporalClass, event: &EventFields) -> Self {
        let base = if event.is_presidential_agenda {
            Accent::Blue
        } else {
            Accent::Green
        };

        let (accent, badge, dimmed) = match class {
            TemporalClass::Past => (Accent::Grey, None, true),
            TemporalClass::Today => (Accent::Gold, Some(Badge::Today), false),
            TemporalClass::Ongoing => (Accent::Red, Some(Badge::Now), false),
            TemporalClass::Future => (base, None, false),
        };

        Self {
            accent,
            badge,
            dimmed,
            struck_through: event.status.is_cancelled(),
        }
    }
}

/// Contact link for the driver, if one should be shown.
///
/// Requires `needs_driver` and a phone with at least one digit. `target` holds
/// the digits only; `label` is the phone as typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DriverLink {
    pub target: String,
    pub label: String,
}

impl DriverLink {
    pub fn for_event(event: &EventFields) -> Option<Self> {
        if !event.needs_driver || event.driver_phone.trim().is_empty() {
            return None;
        }

        let digits = phone_digits(&event.driver_phone);
        if digits.is_empty() {
            return None;
        }

        Some(Self {
            target: digits,
            label: event.driver_phone.clone(),
        })
    }

    pub fn url(&self) -> String {
        format!("{DRIVER_LINK_BASE}{}", self.target)
    }
}

/// Everything a renderer needs for one event, precomputed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventView {
    pub id: i64,
    pub title: String,
    pub class: TemporalClass,
    pub highlight: Highlight,
    pub date_label: String,
    pub start_label: String,
    pub end_label: String,
    pub coverage_label: String,
    pub driver_link: Option<DriverLink>,
    pub is_presidential: bool,
    pub is_cancelled: bool,
}

impl EventView {
    pub fn build(event: &Event, now: NaiveDateTime) -> Self {
        let f = &event.fields;
        let class = classify(f, now);

        Self {
            id: event.id,
            title: f.title.clone(),
            class,
            highlight: Highlight::for_event(class, f),
            date_label: format_date_label(f.date),
            start_label: format_time(f.start_time),
            end_label: format_time(f.end_time),
            coverage_label: f.coverage.to_db_string(),
            driver_link: DriverLink::for_event(f),
            is_presidential: f.is_presidential_agenda,
            is_cancelled: f.status.is_cancelled(),
        }
    }
}

/// Filter `events` (already in store order) and build their views.
/// The output keeps the input order.
pub fn present<'a>(
    events: &'a [Event],
    criteria: &FilterCriteria,
    now: NaiveDateTime,
) -> Vec<(&'a Event, EventView)> {
    events
        .iter()
        .filter(|ev| criteria.matches(&ev.fields))
        .map(|ev| (ev, EventView::build(ev, now)))
        .collect()
}
