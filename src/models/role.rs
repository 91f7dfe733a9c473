use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub enum Role {
    #[default]
    #[serde(rename = "GURU")]
    Guru, // teacher / staff, submits requests
    #[serde(rename = "KEPALA_SEKOLAH")]
    KepalaSekolah, // principal, approves requests
}

impl Role {
    /// Convert enum → wire string
    pub fn code(&self) -> &'static str {
        match self {
            Role::Guru => "GURU",
            Role::KepalaSekolah => "KEPALA_SEKOLAH",
        }
    }

    /// Short label used in tables
    pub fn short_label(&self) -> &'static str {
        match self {
            Role::Guru => "Guru",
            Role::KepalaSekolah => "KS",
        }
    }

    /// Helper: convert input code from CLI (case-insensitive, accepts short forms)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_uppercase().replace([' ', '-'], "_").as_str() {
            "GURU" | "G" => Some(Role::Guru),
            "KEPALA_SEKOLAH" | "KS" | "KEPSEK" => Some(Role::KepalaSekolah),
            _ => None,
        }
    }

    pub fn is_approver(&self) -> bool {
        matches!(self, Role::KepalaSekolah)
    }
}

/// Sheet cells: case-insensitive, a blank or missing cell is `GURU`.
impl<'de> Deserialize<'de> for Role {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
        if raw.trim().is_empty() {
            return Ok(Role::default());
        }
        Role::from_code(&raw).ok_or_else(|| serde::de::Error::custom(format!("unknown role '{raw}'")))
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
