pub mod formatting;
pub mod id;
pub mod table;
pub mod time;
