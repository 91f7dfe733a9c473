// src/export/model.rs

use crate::models::{LeaveRequest, User};
use crate::utils::date::sheet_day;
use serde::Serialize;

/// A flat row that every exporter knows how to write.
pub trait ExportRecord: Serialize {
    fn headers() -> Vec<&'static str>;
    fn to_row(&self) -> Vec<String>;

    /// Columns printed in the PDF table; defaults to every column.
    fn pdf_headers() -> Vec<&'static str> {
        Self::headers()
    }

    fn pdf_row(&self) -> Vec<String> {
        self.to_row()
    }
}

/// One leave request as it appears in the database view.
#[derive(Serialize, Clone, Debug)]
pub struct RequestExport {
    pub id: String,
    pub created_at: String,
    pub name: String,
    pub nip: String,
    pub position: String,
    pub rank: String,
    pub department: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub reason: String,
    pub start_date: String,
    pub start_time: String,
    pub end_date: String,
    pub end_time: String,
    pub status: String,
    pub doc_url: String,
}

impl From<&LeaveRequest> for RequestExport {
    fn from(r: &LeaveRequest) -> Self {
        Self {
            id: r.id.clone(),
            created_at: r.created_at.clone(),
            name: r.name.clone(),
            nip: r.nip.clone(),
            position: r.position.clone(),
            rank: r.rank.clone().unwrap_or_default(),
            department: r.department.clone(),
            kind: r.kind.clone(),
            reason: r.reason.clone(),
            start_date: r.start_day(),
            start_time: r.start_time.clone(),
            end_date: r.end_day(),
            end_time: r.end_time.clone(),
            status: r.status.label().to_string(),
            doc_url: r.doc_url.clone().unwrap_or_default(),
        }
    }
}

impl ExportRecord for RequestExport {
    fn headers() -> Vec<&'static str> {
        vec![
            "id",
            "created_at",
            "name",
            "nip",
            "position",
            "rank",
            "department",
            "type",
            "reason",
            "start_date",
            "start_time",
            "end_date",
            "end_time",
            "status",
            "doc_url",
        ]
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.created_at.clone(),
            self.name.clone(),
            self.nip.clone(),
            self.position.clone(),
            self.rank.clone(),
            self.department.clone(),
            self.kind.clone(),
            self.reason.clone(),
            self.start_date.clone(),
            self.start_time.clone(),
            self.end_date.clone(),
            self.end_time.clone(),
            self.status.clone(),
            self.doc_url.clone(),
        ]
    }

    fn pdf_headers() -> Vec<&'static str> {
        vec!["Tanggal", "Nama Pegawai", "NIP", "Jenis Ijin", "Alasan", "Durasi", "Status"]
    }

    fn pdf_row(&self) -> Vec<String> {
        vec![
            sheet_day(&self.created_at),
            self.name.clone(),
            self.nip.clone(),
            self.kind.clone(),
            self.reason.clone(),
            format!("{} s/d {}", self.start_date, self.end_date),
            self.status.clone(),
        ]
    }
}

/// Employee row; credentials are never exported.
#[derive(Serialize, Clone, Debug)]
pub struct UserExport {
    pub name: String,
    pub nip: String,
    pub position: String,
    pub rank: String,
    pub role: String,
}

impl From<&User> for UserExport {
    fn from(u: &User) -> Self {
        Self {
            name: u.name.clone(),
            nip: u.nip.clone(),
            position: u.position.clone(),
            rank: u.rank_or_dash().to_string(),
            role: u.role.code().to_string(),
        }
    }
}

impl ExportRecord for UserExport {
    fn headers() -> Vec<&'static str> {
        vec!["name", "nip", "position", "rank", "role"]
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.nip.clone(),
            self.position.clone(),
            self.rank.clone(),
            self.role.clone(),
        ]
    }
}

pub(crate) fn records_to_table<T: ExportRecord>(records: &[T]) -> Vec<Vec<String>> {
    records.iter().map(ExportRecord::pdf_row).collect()
}
