use clap::ValueEnum;
use serde::Serialize;

/// Agenda-type selector used by the list filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize)]
pub enum AgendaFilter {
    #[default]
    All,
    Presidential,
    Other,
}

impl AgendaFilter {
    pub fn accepts(&self, is_presidential: bool) -> bool {
        match self {
            AgendaFilter::All => true,
            AgendaFilter::Presidential => is_presidential,
            AgendaFilter::Other => !is_presidential,
        }
    }
}
