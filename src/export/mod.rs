// src/export/mod.rs

pub mod codec;
mod fs_utils;
pub mod logic;

pub use logic::{ExportLogic, ImportLogic};

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Helper comune per messaggi di completamento export.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Full share link (`…?data=…`)
    Link,
    /// Bare `data=` value
    Data,
    /// Pretty-printed JSON of the profile set
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Link => "link",
            ExportFormat::Data => "data",
            ExportFormat::Json => "json",
        }
    }
}
