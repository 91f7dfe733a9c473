use super::category::LeaveCategory;
use super::lenient;
use super::status::Status;
use crate::utils::date::sheet_day;
use serde::{Deserialize, Serialize};

/// A leave / permission request as returned by `get_requests`.
///
/// Requester identity is copied from the user at submission time. Dates and
/// times are kept as the strings the sheet holds (`YYYY-MM-DD`, `HH:MM`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequest {
    #[serde(deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub nip: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub position: String,
    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub rank: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub department: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub start_date: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub end_date: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub start_time: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub end_time: String,
    #[serde(rename = "type", default, deserialize_with = "lenient::string")]
    pub kind: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub reason: String,
    #[serde(default)]
    pub status: Status,
    #[serde(default, deserialize_with = "lenient::string")]
    pub created_at: String,
    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub doc_url: Option<String>,
}

impl LeaveRequest {
    pub fn category(&self) -> LeaveCategory {
        LeaveCategory::from_type(&self.kind)
    }

    /// Type shown in tallies; blank types are grouped as "Lainnya".
    pub fn type_or_other(&self) -> &str {
        if self.kind.trim().is_empty() {
            "Lainnya"
        } else {
            &self.kind
        }
    }

    pub fn is_owned_by(&self, nip: &str) -> bool {
        self.nip == nip
    }

    /// Local day of `start_date`; the sheet sometimes returns full timestamps.
    pub fn start_day(&self) -> String {
        sheet_day(&self.start_date)
    }

    pub fn end_day(&self) -> String {
        sheet_day(&self.end_date)
    }
}
