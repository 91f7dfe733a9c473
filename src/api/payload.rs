use crate::models::{LeaveRequest, Status, User};
use serde::Serialize;

/// Request row as the sheet script expects it (Indonesian column keys).
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RequestRow {
    pub id: String,
    pub nama: String,
    pub nip: String,
    pub jabatan: String,
    pub pangkat: String,
    #[serde(rename = "unitKerja")]
    pub unit_kerja: String,
    pub tipe: String,
    pub alasan: String,
    pub mulai: String,
    #[serde(rename = "jamMulai")]
    pub jam_mulai: String,
    pub selesai: String,
    #[serde(rename = "jamSelesai")]
    pub jam_selesai: String,
    pub status: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

impl From<&LeaveRequest> for RequestRow {
    fn from(r: &LeaveRequest) -> Self {
        Self {
            id: r.id.clone(),
            nama: r.name.clone(),
            nip: r.nip.clone(),
            jabatan: r.position.clone(),
            pangkat: r.rank.clone().unwrap_or_default(),
            unit_kerja: r.department.clone(),
            tipe: r.kind.clone(),
            alasan: r.reason.clone(),
            mulai: r.start_date.clone(),
            jam_mulai: r.start_time.clone(),
            selesai: r.end_date.clone(),
            jam_selesai: r.end_time.clone(),
            status: r.status.label().to_string(),
            created_at: r.created_at.clone(),
        }
    }
}

/// Every call understood by the sheet script.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    Create(RequestRow),
    UpdateData(RequestRow),
    UpdateStatus { id: String, status: String },
    Delete { id: String },
    SyncUsers { users: Vec<User> },
    GetUsers,
    GetRequests,
    GeneratePdfDrive(RequestRow),
    DownloadPdf(RequestRow),
}

impl Action {
    pub fn update_status(id: &str, status: Status) -> Self {
        Action::UpdateStatus {
            id: id.to_string(),
            status: status.key().to_string(),
        }
    }

    /// Wire name of the action, used in logs and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Action::Create(_) => "create",
            Action::UpdateData(_) => "update_data",
            Action::UpdateStatus { .. } => "update_status",
            Action::Delete { .. } => "delete",
            Action::SyncUsers { .. } => "sync_users",
            Action::GetUsers => "get_users",
            Action::GetRequests => "get_requests",
            Action::GeneratePdfDrive(_) => "generate_pdf_drive",
            Action::DownloadPdf(_) => "download_pdf",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn sample() -> LeaveRequest {
        LeaveRequest {
            id: "abc123xyz".into(),
            name: "Budi".into(),
            nip: "1987".into(),
            position: "Guru Kelas".into(),
            rank: None,
            department: "UPT SD Negeri Remen 2".into(),
            start_date: "2025-03-10".into(),
            end_date: "2025-03-10".into(),
            start_time: "07:00".into(),
            end_time: "14:00".into(),
            kind: "Ijin".into(),
            reason: "Sakit".into(),
            status: Status::Pending,
            created_at: "2025-03-01T08:00:00+07:00".into(),
            doc_url: None,
        }
    }

    #[test]
    fn create_uses_sheet_column_keys() {
        let v: Value = serde_json::to_value(Action::Create(RequestRow::from(&sample()))).unwrap();
        assert_eq!(v["action"], "create");
        assert_eq!(v["nama"], "Budi");
        assert_eq!(v["jamMulai"], "07:00");
        assert_eq!(v["status"], "Menunggu");
        assert_eq!(v["pangkat"], "");
    }

    #[test]
    fn unit_actions_carry_only_the_tag() {
        let v = serde_json::to_value(Action::GetUsers).unwrap();
        assert_eq!(v, json!({"action": "get_users"}));
    }

    #[test]
    fn update_status_sends_english_key() {
        let v = serde_json::to_value(Action::update_status("abc", Status::Approved)).unwrap();
        assert_eq!(v, json!({"action": "update_status", "id": "abc", "status": "APPROVED"}));
        assert_eq!(Action::GeneratePdfDrive(RequestRow::from(&sample())).name(), "generate_pdf_drive");
    }
}
