use serde::Serialize;

/// Lifecycle status of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum EventStatus {
    #[default]
    Active,
    Cancelled,
}

impl EventStatus {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            EventStatus::Active => "ACTIVE",
            EventStatus::Cancelled => "CANCELLED",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "ACTIVE" => Some(EventStatus::Active),
            "CANCELLED" => Some(EventStatus::Cancelled),
            _ => None,
        }
    }

    /// Helper: parse user input (case-insensitive, short forms allowed)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_uppercase().as_str() {
            "A" | "ACTIVE" => Some(EventStatus::Active),
            "C" | "CANCELLED" | "CANCELED" => Some(EventStatus::Cancelled),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            EventStatus::Active => EventStatus::Cancelled,
            EventStatus::Cancelled => EventStatus::Active,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, EventStatus::Cancelled)
    }
}
