//! Client for the spreadsheet-backed Apps Script API.
//!
//! Every operation is a JSON body with an `action` discriminator posted to a
//! single endpoint; see [`payload::Action`].

pub mod client;
pub mod mock;
pub mod payload;
pub mod response;
pub mod service;

pub use client::{HttpSheet, OfflineSheet, SheetApi};
pub use payload::{Action, RequestRow};
pub use response::{ResponseStatus, SheetResponse};
pub use service::{DataSource, SheetService};
