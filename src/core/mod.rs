pub mod clock;
pub mod config;
pub mod log;
pub mod profiles;
pub mod projection;
pub mod rows;
pub mod shortfall;
pub mod store;
