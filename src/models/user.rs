use super::lenient;
use super::role::Role;
use serde::{Deserialize, Serialize};

/// An employee record as stored in the users sheet.
///
/// `nip` is the natural key. `username` and `password` are optional in the
/// sheet and both fall back to the NIP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub nip: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub position: String,
    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub rank: Option<String>,
    #[serde(default)]
    pub role: Role,
    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl User {
    pub fn new(name: &str, nip: &str, position: &str, role: Role) -> Self {
        Self {
            name: name.to_string(),
            nip: nip.to_string(),
            position: position.to_string(),
            rank: None,
            role,
            username: None,
            password: None,
        }
    }

    /// Username used to log in (falls back to the NIP).
    pub fn login_name(&self) -> &str {
        self.username.as_deref().unwrap_or(&self.nip)
    }

    /// Password checked at login (falls back to the NIP).
    pub fn effective_password(&self) -> &str {
        self.password.as_deref().unwrap_or(&self.nip)
    }

    /// True when `input` identifies this user, either by username or by NIP.
    pub fn matches_login(&self, input: &str) -> bool {
        self.username.as_deref() == Some(input) || self.nip == input
    }

    pub fn is_approver(&self) -> bool {
        self.role.is_approver()
    }

    pub fn rank_or_dash(&self) -> &str {
        self.rank.as_deref().unwrap_or("-")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_default_to_nip() {
        let u = User::new("Budi", "1987", "Guru Kelas", Role::Guru);
        assert_eq!(u.login_name(), "1987");
        assert_eq!(u.effective_password(), "1987");
        assert!(u.matches_login("1987"));
    }

    #[test]
    fn username_and_nip_both_match() {
        let mut u = User::new("Budi", "1987", "Guru Kelas", Role::Guru);
        u.username = Some("budi".into());
        assert!(u.matches_login("budi"));
        assert!(u.matches_login("1987"));
        assert!(!u.matches_login("Budi"));
    }

    #[test]
    fn reads_sheet_row_with_numeric_cells() {
        let json = r#"{"name":"Siti","nip":198001012005012001,"position":"Guru PJOK",
                       "rank":"","role":"KEPALA_SEKOLAH","password":123456}"#;
        let u: User = serde_json::from_str(json).unwrap();
        assert_eq!(u.nip, "198001012005012001");
        assert_eq!(u.rank, None);
        assert_eq!(u.role, Role::KepalaSekolah);
        assert_eq!(u.effective_password(), "123456");
    }
}
