// src/export/logic.rs

use crate::core::database::{StatusFilter, Tab};
use crate::errors::AppResult;
use crate::export::fs_utils::{ensure_writable, require_absolute};
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{ExportRecord, RequestExport, UserExport};
use crate::export::pdf_export::export_pdf;
use crate::export::xlsx::export_xlsx;
use crate::export::ExportFormat;
use crate::models::{LeaveRequest, User};
use crate::ui::messages::warning;
use std::path::Path;

/// High-level export of one database tab.
pub struct ExportLogic;

impl ExportLogic {
    /// Export already filtered leave requests.
    pub fn export_requests(
        requests: &[&LeaveRequest],
        format: ExportFormat,
        file: &str,
        status: StatusFilter,
        force: bool,
    ) -> AppResult<()> {
        let rows: Vec<RequestExport> = requests.iter().map(|r| RequestExport::from(*r)).collect();
        let title = build_pdf_title(Tab::Requests, status);
        Self::write(&rows, format, file, force, Tab::Requests.title(), &title)
    }

    /// Export already filtered employees.
    pub fn export_users(users: &[&User], format: ExportFormat, file: &str, force: bool) -> AppResult<()> {
        let rows: Vec<UserExport> = users.iter().map(|u| UserExport::from(*u)).collect();
        let title = build_pdf_title(Tab::Users, StatusFilter::All);
        Self::write(&rows, format, file, force, Tab::Users.title(), &title)
    }

    fn write<T: ExportRecord>(
        rows: &[T],
        format: ExportFormat,
        file: &str,
        force: bool,
        sheet_name: &str,
        title: &str,
    ) -> AppResult<()> {
        let path_buf = require_absolute(file)?;
        let path: &Path = &path_buf;

        ensure_writable(path, force)?;

        if rows.is_empty() {
            warning("No rows match the selected filter; writing an empty table.");
        }

        log::debug!("exporting {} rows as {}", rows.len(), format.as_str());

        match format {
            ExportFormat::Csv => export_csv(rows, path),
            ExportFormat::Json => export_json(rows, path),
            ExportFormat::Xlsx => export_xlsx(rows, path, sheet_name),
            ExportFormat::Pdf => export_pdf(rows, path, title),
        }
    }
}

fn build_pdf_title(tab: Tab, status: StatusFilter) -> String {
    match (tab, status) {
        (Tab::Users, _) => "Database Sekolah - Data Pegawai".to_string(),
        (Tab::Requests, StatusFilter::All) => "Database Sekolah - Rekap Data Ijin".to_string(),
        (Tab::Requests, StatusFilter::Pending) => "Rekap Data Ijin (Menunggu)".to_string(),
        (Tab::Requests, StatusFilter::Approved) => "Rekap Data Ijin (Disetujui)".to_string(),
        (Tab::Requests, StatusFilter::Rejected) => "Rekap Data Ijin (Ditolak)".to_string(),
    }
}
