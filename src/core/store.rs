//! In-memory application state and the optimistic update flow.
//!
//! Each mutation is applied locally first, then sent to the sheet. When the
//! remote call fails the error is returned; a delete is reverted, every other
//! change stays applied locally. State loaded from the sample dataset is
//! never written back.

use crate::api::{DataSource, SheetService};
use crate::errors::{AppError, AppResult};
use crate::models::{LeaveRequest, Status, User};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submitted {
    Created,
    Updated,
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub users: Vec<User>,
    pub requests: Vec<LeaveRequest>,
    pub source: DataSource,
}

impl AppState {
    pub fn new(users: Vec<User>, requests: Vec<LeaveRequest>, source: DataSource) -> Self {
        Self {
            users,
            requests,
            source,
        }
    }

    /// Fetch users and requests. The state is marked as mock data when
    /// either read fell back.
    pub fn load(service: &SheetService) -> AppResult<Self> {
        let (users, users_src) = service.get_users()?;
        let (requests, req_src) = service.get_requests()?;

        if users.is_empty() {
            log::warn!("user sheet is empty");
        }

        let source = if users_src == DataSource::Mock || req_src == DataSource::Mock {
            DataSource::Mock
        } else {
            DataSource::Remote
        };

        log::debug!(
            "loaded {} users and {} requests ({:?})",
            users.len(),
            requests.len(),
            source
        );

        Ok(Self::new(users, requests, source))
    }

    pub fn find_request(&self, id: &str) -> AppResult<&LeaveRequest> {
        self.requests
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| AppError::RequestNotFound(id.to_string()))
    }

    pub fn find_user(&self, nip: &str) -> AppResult<&User> {
        self.users
            .iter()
            .find(|u| u.nip == nip)
            .ok_or_else(|| AppError::UserNotFound(nip.to_string()))
    }

    pub fn is_live(&self) -> bool {
        self.source == DataSource::Remote
    }

    fn ensure_live(&self, action: &str) -> AppResult<()> {
        if self.is_live() {
            Ok(())
        } else {
            Err(AppError::SampleData(action.to_string()))
        }
    }

    pub fn request_ids(&self) -> Vec<String> {
        self.requests.iter().map(|r| r.id.clone()).collect()
    }

    /// Create a new request (prepended) or replace the one with the same id.
    pub fn submit(&mut self, service: &SheetService, req: LeaveRequest) -> AppResult<Submitted> {
        match self.requests.iter().position(|r| r.id == req.id) {
            Some(idx) => {
                self.ensure_live("update_data")?;
                self.requests[idx] = req.clone();
                service.update_request(&req)?;
                Ok(Submitted::Updated)
            }
            None => {
                self.ensure_live("create")?;
                self.requests.insert(0, req.clone());
                service.create_request(&req)?;
                Ok(Submitted::Created)
            }
        }
    }

    pub fn set_status(&mut self, service: &SheetService, id: &str, status: Status) -> AppResult<()> {
        self.ensure_live("update_status")?;
        let req = self
            .requests
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| AppError::RequestNotFound(id.to_string()))?;
        req.status = status;
        service.update_status(id, status)
    }

    /// Remove a request; it is put back in place if the sheet refuses.
    pub fn delete_request(&mut self, service: &SheetService, id: &str) -> AppResult<LeaveRequest> {
        self.ensure_live("delete")?;
        let idx = self
            .requests
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| AppError::RequestNotFound(id.to_string()))?;

        let removed = self.requests.remove(idx);

        if let Err(e) = service.delete_request(id) {
            log::debug!("delete of {id} failed, restoring local row");
            self.requests.insert(idx, removed);
            return Err(e);
        }

        Ok(removed)
    }

    /// Ask the sheet for a rendered document and remember its URL.
    pub fn attach_document(&mut self, service: &SheetService, id: &str) -> AppResult<String> {
        self.ensure_live("generate_pdf_drive")?;
        let req = self.find_request(id)?.clone();
        let url = service.generate_pdf(&req)?;

        if let Some(r) = self.requests.iter_mut().find(|r| r.id == id) {
            r.doc_url = Some(url.clone());
        }
        Ok(url)
    }

    /// Upload the whole user collection.
    pub fn sync_users(&self, service: &SheetService) -> AppResult<()> {
        self.ensure_live("sync_users")?;
        service.sync_users(&self.users)
    }

    /// Self-service profile edit (name and position only).
    pub fn update_profile(
        &mut self,
        service: &SheetService,
        nip: &str,
        name: Option<String>,
        position: Option<String>,
    ) -> AppResult<User> {
        self.ensure_live("sync_users")?;
        let user = self
            .users
            .iter_mut()
            .find(|u| u.nip == nip)
            .ok_or_else(|| AppError::UserNotFound(nip.to_string()))?;

        if let Some(n) = name.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()) {
            user.name = n;
        }
        if let Some(p) = position.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()) {
            user.position = p;
        }
        let updated = user.clone();

        self.sync_users(service)?;
        Ok(updated)
    }
}
