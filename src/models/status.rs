use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Approval state of a leave request.
///
/// Serialized with the Indonesian labels stored in the spreadsheet; reading
/// also accepts the English keys sent by `update_status`, in any case. A blank
/// cell reads as pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
pub enum Status {
    #[default]
    #[serde(rename = "Menunggu")]
    Pending,
    #[serde(rename = "Disetujui")]
    Approved,
    #[serde(rename = "Ditolak")]
    Rejected,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Pending, Status::Approved, Status::Rejected];

    /// Label shown to users and stored in the sheet.
    pub fn label(&self) -> &'static str {
        match self {
            Status::Pending => "Menunggu",
            Status::Approved => "Disetujui",
            Status::Rejected => "Ditolak",
        }
    }

    /// Key sent with the `update_status` action.
    pub fn key(&self) -> &'static str {
        match self {
            Status::Pending => "PENDING",
            Status::Approved => "APPROVED",
            Status::Rejected => "REJECTED",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "menunggu" | "pending" => Some(Status::Pending),
            "disetujui" | "approved" => Some(Status::Approved),
            "ditolak" | "rejected" => Some(Status::Rejected),
            _ => None,
        }
    }

    pub fn is_approved(&self) -> bool {
        matches!(self, Status::Approved)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Status::Pending)
    }
}

impl<'de> Deserialize<'de> for Status {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
        if raw.trim().is_empty() {
            return Ok(Status::default());
        }
        Status::parse(&raw).ok_or_else(|| serde::de::Error::custom(format!("unknown status '{raw}'")))
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_labels_and_keys() {
        let a: Status = serde_json::from_str("\"Disetujui\"").unwrap();
        let b: Status = serde_json::from_str("\"APPROVED\"").unwrap();
        assert_eq!(a, Status::Approved);
        assert_eq!(b, Status::Approved);
        assert!(serde_json::from_str::<Status>("\"Unknown\"").is_err());

        let c: Status = serde_json::from_str("\"ditolak\"").unwrap();
        assert_eq!(c, Status::Rejected);
        let blank: Status = serde_json::from_str("\"  \"").unwrap();
        assert_eq!(blank, Status::Pending);
    }

    #[test]
    fn writes_label() {
        assert_eq!(serde_json::to_string(&Status::Rejected).unwrap(), "\"Ditolak\"");
        assert_eq!(Status::Rejected.key(), "REJECTED");
    }
}
