pub mod colors;
pub mod date;
pub mod formatting;
pub mod id;
pub mod path;
pub mod table;
pub mod time;
