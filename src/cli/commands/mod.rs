pub mod add;
pub mod calc;
pub mod config;
pub mod del;
pub mod export;
pub mod import;
pub mod init;
pub mod list;
pub mod log;
pub mod profile;
pub mod rate;
pub mod rename;
pub mod stock;
