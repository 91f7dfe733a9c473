pub mod approve;
pub mod config;
pub mod dashboard;
pub mod db;
pub mod del;
pub mod export;
pub mod form;
pub mod init;
pub mod login;
pub mod options;
pub mod pdf;
pub mod profile;
pub mod submit;
pub mod users;
