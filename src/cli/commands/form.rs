//! Turns command-line flags into event records and list criteria.

use crate::cli::parser::{EventArgs, FilterArgs};
use crate::config::Config;
use crate::core::presenter::FilterCriteria;
use crate::errors::{AppError, AppResult};
use crate::models::coverage::CoverageSet;
use crate::models::event::EventFields;
use crate::models::status::EventStatus;
use crate::utils::date::{civil_now, parse_date, parse_datetime};
use crate::utils::time::parse_optional_time;
use chrono::NaiveDateTime;

impl EventArgs {
    /// Overlay the flags that were given onto `base`.
    pub fn apply(&self, base: EventFields) -> AppResult<EventFields> {
        let mut f = base;

        if let Some(t) = &self.title {
            f.title = t.trim().to_string();
        }
        if let Some(d) = &self.date {
            f.date = parse_date(d).ok_or_else(|| AppError::InvalidDate(d.clone()))?;
        }
        if let Some(t) = parse_optional_time(self.start.as_ref())? {
            f.start_time = t;
        }
        if let Some(t) = parse_optional_time(self.end.as_ref())? {
            f.end_time = t;
        }

        if let Some(v) = &self.location {
            f.location = v.clone();
        }
        if let Some(v) = &self.address {
            f.address = v.clone();
        }
        if let Some(tags) = &self.coverage {
            f.coverage = CoverageSet::new(tags.iter().copied());
        } else if self.no_coverage {
            f.coverage = CoverageSet::default();
        }
        if let Some(v) = &self.responsible {
            f.responsible_parties = v.clone();
        }
        if let Some(v) = &self.equipment {
            f.equipment = v.clone();
        }
        if let Some(v) = &self.notes {
            f.notes = v.clone();
        }

        if self.presidential {
            f.is_presidential_agenda = true;
        } else if self.not_presidential {
            f.is_presidential_agenda = false;
        }

        if self.driver {
            f.needs_driver = true;
        } else if self.no_driver {
            f.needs_driver = false;
        }
        if let Some(v) = &self.driver_name {
            f.driver_name = v.clone();
        }
        if let Some(v) = &self.driver_phone {
            f.driver_phone = v.clone();
        }

        if let Some(s) = &self.status {
            f.status = EventStatus::from_code(s).ok_or_else(|| AppError::InvalidStatus(s.clone()))?;
        }

        Ok(f)
    }
}

/// Civil "now": the pinned value if one was given, the clock otherwise.
pub fn resolve_now(at: Option<&String>, cfg: &Config) -> AppResult<NaiveDateTime> {
    match at {
        Some(s) => parse_datetime(s).ok_or_else(|| AppError::InvalidDate(s.clone())),
        None => Ok(civil_now(cfg.offset()?)),
    }
}

impl FilterArgs {
    pub fn criteria(&self, now: NaiveDateTime) -> AppResult<FilterCriteria> {
        let date = if self.today {
            Some(now.date())
        } else {
            match &self.date {
                Some(d) => Some(parse_date(d).ok_or_else(|| AppError::InvalidDate(d.clone()))?),
                None => None,
            }
        };

        Ok(FilterCriteria {
            date,
            agenda: self.agenda,
            responsible: self.responsible.clone(),
        })
    }
}
