//! Per-command setup: sheet service, freshly loaded data and the session.

use crate::api::{DataSource, SheetService};
use crate::config::Config;
use crate::core::session::{Session, View, authorize};
use crate::core::store::AppState;
use crate::errors::{AppError, AppResult};
use crate::models::User;
use crate::ui::messages::warning;
use std::path::PathBuf;

pub struct Context {
    pub service: SheetService,
    pub state: AppState,
    pub session_path: PathBuf,
}

impl Context {
    /// Connect and fetch users and requests.
    pub fn open(cfg: &Config) -> AppResult<Self> {
        let service = SheetService::from_config(cfg)?;
        let state = AppState::load(&service)?;

        if state.source == DataSource::Mock {
            warning("Offline mode: showing sample data, changes are not saved to the sheet.");
        }

        Ok(Self {
            service,
            state,
            session_path: Session::path(),
        })
    }

    pub fn session(&self) -> AppResult<Session> {
        Session::load_from(&self.session_path)?.ok_or(AppError::NotLoggedIn)
    }

    /// The logged-in user, checked against the role `view` requires.
    pub fn viewer(&self, view: View) -> AppResult<User> {
        let session = self.session()?;
        let user = session.current_user(&self.state.users).map_err(|e| {
            log::debug!("session user lookup failed: {e}");
            AppError::NotLoggedIn
        })?;
        authorize(view, Some(user))?;
        Ok(user.clone())
    }
}
