use super::payload::Action;
use super::response::SheetResponse;
use crate::errors::{AppError, AppResult};
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use reqwest::redirect::Policy;
use std::time::Duration;

/// Transport seam: post one action, get one decoded response back.
pub trait SheetApi {
    fn post(&self, action: &Action) -> AppResult<SheetResponse>;
}

/// Blocking HTTP transport for the Apps Script web app.
///
/// The body is sent as `text/plain` so the script's `doPost` receives the raw
/// JSON; the script answers through a redirect, which is followed.
pub struct HttpSheet {
    client: Client,
    endpoint: String,
}

impl HttpSheet {
    pub fn new(endpoint: &str, timeout: Duration) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .redirect(Policy::limited(10))
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl SheetApi for HttpSheet {
    fn post(&self, action: &Action) -> AppResult<SheetResponse> {
        let body = serde_json::to_string(action)
            .map_err(|e| AppError::InvalidResponse(format!("cannot encode payload: {e}")))?;

        log::debug!("POST {} action={}", self.endpoint, action.name());

        let resp = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "text/plain;charset=utf-8")
            .body(body)
            .send()?;

        let status = resp.status();
        let text = resp.text()?;

        if !status.is_success() {
            return Err(AppError::Network(format!(
                "HTTP {} on '{}'",
                status.as_u16(),
                action.name()
            )));
        }

        serde_json::from_str::<SheetResponse>(&text).map_err(|e| {
            log::debug!("undecodable body for {}: {}", action.name(), text);
            AppError::InvalidResponse(format!("{} ({e})", action.name()))
        })
    }
}

/// Transport used when no endpoint is configured: every call fails with
/// [`AppError::Offline`].
pub struct OfflineSheet;

impl SheetApi for OfflineSheet {
    fn post(&self, action: &Action) -> AppResult<SheetResponse> {
        Err(AppError::Offline(action.name().to_string()))
    }
}
