// src/export/logic.rs

use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::list_meals_by_person;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::MealExport;
use crate::export::xlsx::export_xlsx;
use crate::ui::messages::warning;
use crate::utils::path::{expand_tilde, export_file_name};
use std::fs;
use std::path::PathBuf;

/// Where the export goes.
#[derive(Debug, Clone)]
pub enum ExportTarget {
    /// `{person}_meals.{ext}` inside this directory
    Dir(String),
    /// Explicit file path
    File(String),
}

/// High level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export every record of `person`.
    ///
    /// Returns the written path, or `None` when there was nothing to export.
    pub fn export(
        pool: &mut DbPool,
        person: &str,
        format: ExportFormat,
        target: &ExportTarget,
        force: bool,
    ) -> AppResult<Option<PathBuf>> {
        let rows: Vec<MealExport> = list_meals_by_person(&pool.conn, person)?
            .iter()
            .map(MealExport::from)
            .collect();

        if rows.is_empty() {
            warning(format!("No records found for '{}': nothing to export.", person.trim()));
            return Ok(None);
        }

        let path = match target {
            ExportTarget::Dir(dir) => export_file_name(&expand_tilde(dir), person, format.as_str()),
            ExportTarget::File(file) => expand_tilde(file),
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        ensure_writable(&path, force)?;

        match format {
            ExportFormat::Csv => export_csv(&rows, &path)?,
            ExportFormat::Xlsx => export_xlsx(&rows, &path)?,
            ExportFormat::Json => export_json(&rows, &path)?,
        }

        ttlog_quiet(
            &pool.conn,
            "export",
            &path.to_string_lossy(),
            &format!("Exported {} rows as {}", rows.len(), format.as_str()),
        );

        Ok(Some(path))
    }
}
