// src/export/logic.rs

use crate::core::presenter::EventView;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::EventExport;
use crate::models::event::Event;
use crate::ui::messages::warning;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Write the already filtered agenda to `file`.
    /// Returns the number of exported events.
    pub fn export(
        rows: &[(&Event, EventView)],
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        if rows.is_empty() {
            warning("No events match the selected filters; nothing exported.");
            return Ok(0);
        }

        ensure_writable(path, force)?;

        let data: Vec<EventExport> = rows
            .iter()
            .map(|(ev, view)| EventExport::from_view(ev, view))
            .collect();

        match format {
            ExportFormat::Csv => export_csv(&data, path)?,
            ExportFormat::Json => export_json(&data, path)?,
        }

        Ok(data.len())
    }
}
