// src/export/pdf_export.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::records_to_table;
use crate::export::pdf::PdfManager;
use crate::export::{ExportRecord, notify_export_success};
use crate::ui::messages::info;
use std::io;
use std::path::Path;

/// Render the records as a paged table.
pub(crate) fn export_pdf<T: ExportRecord>(records: &[T], path: &Path, title: &str) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let headers = T::pdf_headers();
    let rows = records_to_table(records);

    let mut pdf = PdfManager::new();
    pdf.write_table(title, &headers, &rows);

    pdf.save(path)
        .map_err(|e| AppError::from(io::Error::other(format!("PDF export error: {e}"))))?;

    notify_export_success("PDF", path);
    Ok(())
}
