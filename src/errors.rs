//! Unified application error type.
//! Every layer (api, core, cli, export) returns AppError so that `main`
//! can report failures in a single place.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Remote spreadsheet API
    // ---------------------------
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server error on '{action}': {message}")]
    Server { action: String, message: String },

    #[error("No endpoint configured (offline mode): '{0}' was not sent")]
    Offline(String),

    #[error("Invalid server response: {0}")]
    InvalidResponse(String),

    #[error("Invalid sheet data: {0}")]
    InvalidData(String),

    #[error("Working on sample data: '{0}' was not sent to the sheet")]
    SampleData(String),

    // ---------------------------
    // Parsing / validation
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    #[error("Invalid role: {0}")]
    InvalidRole(String),

    #[error("Invalid status: {0}")]
    InvalidStatus(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("NIP already registered: {0}")]
    DuplicateNip(String),

    // ---------------------------
    // Session / authorization
    // ---------------------------
    #[error("Employee data is not loaded yet")]
    DataNotReady,

    #[error("Username not found: {0}")]
    UnknownUser(String),

    #[error("Wrong password")]
    WrongPassword,

    #[error("Not logged in: run `siaplapor login <username>` first")]
    NotLoggedIn,

    #[error("Not allowed: {0}")]
    Forbidden(String),

    // ---------------------------
    // Lookup
    // ---------------------------
    #[error("Leave request not found: {0}")]
    RequestNotFound(String),

    #[error("Employee not found: {0}")]
    UserNotFound(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

impl From<serde_yaml::Error> for AppError {
    fn from(e: serde_yaml::Error) -> Self {
        AppError::Config(e.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e.to_string())
    }
}

impl AppError {
    /// True for failures of the transport itself (unreachable host,
    /// timeouts, broken responses), as opposed to a server-side rejection.
    pub fn is_network(&self) -> bool {
        matches!(self, AppError::Network(_) | AppError::InvalidResponse(_))
    }
}

pub type AppResult<T> = Result<T, AppError>;
