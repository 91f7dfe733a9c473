use super::client::{HttpSheet, OfflineSheet, SheetApi};
use super::mock;
use super::payload::{Action, RequestRow};
use super::response::SheetResponse;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::{LeaveRequest, Status, User};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::time::Duration;

/// Where a read result came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    Remote,
    Mock,
}

/// Typed operations over a [`SheetApi`] transport.
///
/// Reads fall back to the mock dataset when the sheet is unreachable or no
/// endpoint is configured. Writes always report failure to the caller.
pub struct SheetService {
    api: Box<dyn SheetApi>,
}

impl SheetService {
    pub fn new(api: Box<dyn SheetApi>) -> Self {
        Self { api }
    }

    /// Build the service from configuration; `cfg.offline` or a missing
    /// endpoint selects the offline transport.
    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        match cfg.endpoint() {
            Some(url) if !cfg.offline => {
                let http = HttpSheet::new(url, Duration::from_secs(cfg.timeout_secs))?;
                log::debug!("sheet endpoint: {}", http.endpoint());
                Ok(Self::new(Box::new(http)))
            }
            _ => {
                log::info!("running without endpoint: reads use sample data");
                Ok(Self::new(Box::new(OfflineSheet)))
            }
        }
    }

    fn call(&self, action: &Action) -> AppResult<SheetResponse> {
        self.api.post(action)?.into_result(action.name())
    }

    fn read<T, F>(&self, action: Action, fallback: F) -> AppResult<(Vec<T>, DataSource)>
    where
        T: serde::de::DeserializeOwned,
        F: FnOnce() -> Vec<T>,
    {
        match self.call(&action).and_then(|resp| resp.data_list()) {
            Ok(items) => Ok((items, DataSource::Remote)),
            Err(e) if e.is_network() || matches!(e, AppError::Offline(_)) => {
                log::warn!("{} failed ({e}); using sample data", action.name());
                Ok((fallback(), DataSource::Mock))
            }
            Err(e) => Err(e),
        }
    }

    pub fn get_users(&self) -> AppResult<(Vec<User>, DataSource)> {
        self.read(Action::GetUsers, mock::users)
    }

    pub fn get_requests(&self) -> AppResult<(Vec<LeaveRequest>, DataSource)> {
        self.read(Action::GetRequests, mock::requests)
    }

    pub fn create_request(&self, req: &LeaveRequest) -> AppResult<()> {
        self.call(&Action::Create(RequestRow::from(req)))?;
        Ok(())
    }

    pub fn update_request(&self, req: &LeaveRequest) -> AppResult<()> {
        self.call(&Action::UpdateData(RequestRow::from(req)))?;
        Ok(())
    }

    pub fn update_status(&self, id: &str, status: Status) -> AppResult<()> {
        self.call(&Action::update_status(id, status))?;
        Ok(())
    }

    pub fn delete_request(&self, id: &str) -> AppResult<()> {
        self.call(&Action::Delete { id: id.to_string() })?;
        Ok(())
    }

    /// Upload the whole user collection; the sheet has no partial update.
    pub fn sync_users(&self, users: &[User]) -> AppResult<()> {
        self.call(&Action::SyncUsers {
            users: users.to_vec(),
        })?;
        Ok(())
    }

    /// Ask the script to render the request into a Drive document and
    /// return its URL.
    pub fn generate_pdf(&self, req: &LeaveRequest) -> AppResult<String> {
        let action = Action::GeneratePdfDrive(RequestRow::from(req));
        let resp = self.call(&action)?;

        resp.url
            .filter(|u| !u.trim().is_empty())
            .ok_or_else(|| AppError::InvalidResponse("generate_pdf_drive returned no url".into()))
    }

    /// Download the rendered document: `(filename, bytes)`.
    pub fn download_pdf(&self, req: &LeaveRequest) -> AppResult<(String, Vec<u8>)> {
        let action = Action::DownloadPdf(RequestRow::from(req));
        let resp = self.call(&action)?;

        let encoded = resp
            .data
            .as_ref()
            .and_then(|d| d.as_str())
            .ok_or_else(|| AppError::InvalidResponse("download_pdf returned no data".into()))?;

        let bytes = STANDARD
            .decode(encoded.trim())
            .map_err(|e| AppError::InvalidResponse(format!("download_pdf: bad base64 ({e})")))?;

        let filename = resp
            .filename
            .filter(|f| !f.trim().is_empty())
            .unwrap_or_else(|| format!("ijin-{}.pdf", req.id));

        Ok((filename, bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Transport returning canned results and recording the actions sent.
    struct Canned {
        reply: Box<dyn Fn(&Action) -> AppResult<SheetResponse>>,
        sent: RefCell<Vec<String>>,
    }

    impl SheetApi for std::rc::Rc<Canned> {
        fn post(&self, action: &Action) -> AppResult<SheetResponse> {
            self.sent.borrow_mut().push(action.name().to_string());
            (self.reply)(action)
        }
    }

    fn service(reply: impl Fn(&Action) -> AppResult<SheetResponse> + 'static) -> (SheetService, std::rc::Rc<Canned>) {
        let canned = std::rc::Rc::new(Canned {
            reply: Box::new(reply),
            sent: RefCell::new(Vec::new()),
        });
        (SheetService::new(Box::new(canned.clone())), canned)
    }

    #[test]
    fn offline_reads_use_mock_data() {
        let svc = SheetService::new(Box::new(OfflineSheet));
        let (users, src) = svc.get_users().unwrap();
        assert_eq!(src, DataSource::Mock);
        assert_eq!(users.len(), mock::users().len());
    }

    #[test]
    fn offline_writes_fail() {
        let svc = SheetService::new(Box::new(OfflineSheet));
        let err = svc.delete_request("abc").unwrap_err();
        assert!(matches!(err, AppError::Offline(ref a) if a == "delete"));
    }

    #[test]
    fn network_failure_on_read_falls_back() {
        let (svc, canned) = service(|_| Err(AppError::Network("connection refused".into())));
        let (reqs, src) = svc.get_requests().unwrap();
        assert_eq!(src, DataSource::Mock);
        assert!(!reqs.is_empty());
        assert_eq!(canned.sent.borrow().as_slice(), ["get_requests"]);
    }

    #[test]
    fn server_error_on_read_is_reported() {
        let (svc, _) = service(|_| {
            Ok(serde_json::from_str(r#"{"status":"error","message":"quota"}"#).unwrap())
        });
        assert!(matches!(svc.get_users(), Err(AppError::Server { .. })));
    }

    #[test]
    fn bad_row_is_reported_not_replaced_by_sample_data() {
        let (svc, _) = service(|_| {
            Ok(serde_json::from_str(
                r#"{"status":"success","data":[{"name":"Ani","nip":"1","role":"ADMIN"}]}"#,
            )
            .unwrap())
        });
        assert!(matches!(svc.get_users(), Err(AppError::InvalidData(_))));
    }

    #[test]
    fn blank_role_and_status_cells_are_read() {
        let (svc, _) = service(|action| {
            let body = match action {
                Action::GetUsers => r#"{"status":"success","data":[{"name":"Ani","nip":"1","role":""},{"name":"Ida","nip":"2","role":"kepala_sekolah"}]}"#,
                _ => r#"{"status":"success","data":[{"id":"x1","name":"Ani","nip":"1","status":""}]}"#,
            };
            Ok(serde_json::from_str(body).unwrap())
        });

        let (users, src) = svc.get_users().unwrap();
        assert_eq!(src, DataSource::Remote);
        assert_eq!(users[0].role, crate::models::Role::Guru);
        assert_eq!(users[1].role, crate::models::Role::KepalaSekolah);

        let (reqs, _) = svc.get_requests().unwrap();
        assert_eq!(reqs[0].status, crate::models::Status::Pending);
    }

    #[test]
    fn generate_pdf_requires_url() {
        let (svc, _) = service(|_| Ok(SheetResponse::success()));
        let req = mock::requests().remove(1);
        assert!(svc.generate_pdf(&req).is_err());
    }

    #[test]
    fn download_pdf_decodes_base64() {
        let (svc, _) = service(|_| {
            Ok(serde_json::from_str(
                r#"{"status":"success","data":"JVBERi0xLjQ=","filename":"surat.pdf"}"#,
            )
            .unwrap())
        });
        let req = mock::requests().remove(1);
        let (name, bytes) = svc.download_pdf(&req).unwrap();
        assert_eq!(name, "surat.pdf");
        assert_eq!(bytes, b"%PDF-1.4");
    }
}
