//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.
//!
//! The projection engine itself never fails: only the shell around it
//! (validation, storage, transfer) produces these errors.

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
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Input validation
    // ---------------------------
    #[error("Invalid quantity: {0} (expected a finite number >= 0)")]
    InvalidQuantity(String),

    #[error("Invalid hours: {0} (expected a finite number > 0)")]
    InvalidHours(String),

    #[error("Invalid name: {0}")]
    InvalidName(String),

    // ---------------------------
    // Lookup errors
    // ---------------------------
    #[error("Profile not found: {0}")]
    ProfileNotFound(String),

    #[error("Row not found: {0}")]
    RowNotFound(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Import / export errors
    // ---------------------------
    #[error("Import failed: {0}")]
    Import(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type AppResult<T> = Result<T, AppError>;
