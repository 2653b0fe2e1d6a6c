// src/export/model.rs

use crate::core::presenter::EventView;
use crate::models::event::Event;
use serde::Serialize;

/// Flat row written by the CSV / JSON exporters.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct EventExport {
    pub id: i64,
    pub presidential: bool,
    pub title: String,
    pub date: String,
    pub start: String,
    pub end: String,
    pub location: String,
    pub address: String,
    pub coverage: String,
    pub responsible: String,
    pub equipment: String,
    pub notes: String,
    pub needs_driver: bool,
    pub driver_name: String,
    pub driver_phone: String,
    pub driver_link: String,
    pub status: String,
    pub class: String,
}

impl EventExport {
    pub fn from_view(ev: &Event, view: &EventView) -> Self {
        let f = &ev.fields;
        Self {
            id: ev.id,
            presidential: f.is_presidential_agenda,
            title: f.title.clone(),
            date: f.date_str(),
            start: view.start_label.clone(),
            end: view.end_label.clone(),
            location: f.location.clone(),
            address: f.address.clone(),
            coverage: view.coverage_label.clone(),
            responsible: f.responsible_parties.clone(),
            equipment: f.equipment.clone(),
            notes: f.notes.clone(),
            needs_driver: f.needs_driver,
            driver_name: f.driver_name.clone(),
            driver_phone: f.driver_phone.clone(),
            driver_link: view
                .driver_link
                .as_ref()
                .map(|l| l.url())
                .unwrap_or_default(),
            status: f.status.to_db_str().to_string(),
            class: view.class.as_str().to_string(),
        }
    }
}
