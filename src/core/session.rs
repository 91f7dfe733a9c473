//! Login, the persisted session and the view guard.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::User;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Screens of the application. Each command renders one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Login,
    Dashboard,
    Input,
    Profile,
    UserManagement,
    FormFrame,
    Database,
}

impl View {
    /// Views reserved to the principal.
    pub fn requires_approver(&self) -> bool {
        matches!(self, View::UserManagement | View::Database)
    }

    pub fn title(&self) -> &'static str {
        match self {
            View::Login => "Login",
            View::Dashboard => "Dashboard",
            View::Input => "Ajukan Ijin",
            View::Profile => "Profil",
            View::UserManagement => "Data Pegawai",
            View::FormFrame => "Form Eksternal",
            View::Database => "Database",
        }
    }
}

/// Check that `user` may open `view`.
pub fn authorize(view: View, user: Option<&User>) -> AppResult<()> {
    if view == View::Login {
        return Ok(());
    }

    let user = user.ok_or(AppError::NotLoggedIn)?;

    if view.requires_approver() && !user.is_approver() {
        return Err(AppError::Forbidden(format!(
            "'{}' is only available to the principal",
            view.title()
        )));
    }

    Ok(())
}

/// Find the user matching `username` (or NIP) and check the password.
/// Both inputs are trimmed.
pub fn authenticate<'a>(users: &'a [User], username: &str, password: &str) -> AppResult<&'a User> {
    if users.is_empty() {
        return Err(AppError::DataNotReady);
    }

    let username = username.trim();
    let password = password.trim();

    let user = users
        .iter()
        .find(|u| u.matches_login(username))
        .ok_or_else(|| AppError::UnknownUser(username.to_string()))?;

    if user.effective_password() != password {
        return Err(AppError::WrongPassword);
    }

    Ok(user)
}

/// What survives between two invocations: who is logged in and which
/// request ids they have already seen.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    pub nip: String,
    #[serde(default)]
    pub seen_request_ids: Option<Vec<String>>,
}

impl Session {
    pub fn new(nip: &str) -> Self {
        Self {
            nip: nip.to_string(),
            seen_request_ids: None,
        }
    }

    pub fn path() -> PathBuf {
        Config::session_file()
    }

    /// Load the session at `path`; `None` when nobody is logged in.
    pub fn load_from(path: &Path) -> AppResult<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path)?;
        let session: Session = serde_yaml::from_str(&content)?;
        Ok(Some(session))
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, serde_yaml::to_string(self)?)?;
        Ok(())
    }

    /// Remove the session file. Returns `false` when there was none.
    pub fn clear(path: &Path) -> AppResult<bool> {
        if path.exists() {
            fs::remove_file(path)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Resolve the logged-in user against freshly loaded users.
    pub fn current_user<'a>(&self, users: &'a [User]) -> AppResult<&'a User> {
        users
            .iter()
            .find(|u| u.nip == self.nip)
            .ok_or_else(|| AppError::UserNotFound(self.nip.clone()))
    }
}
