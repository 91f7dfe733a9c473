pub mod dashboard;
pub mod database;
pub mod form;
pub mod session;
pub mod store;
pub mod users;
