// src/export/logic.rs

use crate::config::Config;
use crate::core::store;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::codec;
use crate::export::fs_utils::{ensure_writable, write_output};
use crate::export::{ExportFormat, notify_export_success};
use crate::models::State;
use crate::ui::messages::{confirm, info, warning};
use std::path::Path;

/// High-level export of the whole profile set.
pub struct ExportLogic;

impl ExportLogic {
    /// Render the profile set in `format`.
    pub fn render(state: &State, format: ExportFormat, base_url: &str) -> AppResult<String> {
        match format {
            ExportFormat::Link => codec::export_link(base_url, state),
            ExportFormat::Data => codec::encode(state),
            ExportFormat::Json => Ok(serde_json::to_string_pretty(state)?),
        }
    }

    /// Print the export, or write it to `file` (asks before overwriting unless `force`).
    pub fn export(
        pool: &DbPool,
        cfg: &Config,
        format: ExportFormat,
        file: Option<&str>,
        force: bool,
        base_url: Option<&str>,
    ) -> AppResult<()> {
        let state = store::load(pool, cfg)?;
        let base_url = base_url.unwrap_or(cfg.export_base_url.as_str());
        let output = Self::render(&state, format, base_url)?;

        match file {
            Some(f) => {
                let path = Path::new(f);
                ensure_writable(path, force)?;
                write_output(path, &output)?;
                notify_export_success(format.as_str(), path);
            }
            None => println!("{}", output),
        }

        if let Err(e) = ttlog(
            &pool.conn,
            "export",
            format.as_str(),
            &format!("Exported {} profiles", state.profiles.len()),
        ) {
            warning(format!("Failed to write internal log: {}", e));
        }
        Ok(())
    }
}

/// High-level import: replaces the whole profile set.
pub struct ImportLogic;

impl ImportLogic {
    /// Parse a pasted link / `data=` value, or a JSON file.
    pub fn parse(src: Option<&str>, file: Option<&str>) -> AppResult<State> {
        match (src, file) {
            (_, Some(f)) => {
                let content = std::fs::read_to_string(f)?;
                serde_json::from_str(&content)
                    .map_err(|e| AppError::Import(format!("invalid JSON file: {}", e)))
            }
            (Some(s), None) => codec::decode(&codec::extract_data(s)),
            (None, None) => Err(AppError::Import(
                "nothing to import: pass a link, a data value or --file".into(),
            )),
        }
    }

    /// Returns the imported state, or `None` when the user declined.
    pub fn import(
        pool: &mut DbPool,
        cfg: &Config,
        src: Option<&str>,
        file: Option<&str>,
        assume_yes: bool,
    ) -> AppResult<Option<State>> {
        let mut incoming = Self::parse(src, file)?;
        incoming.normalize(&cfg.default_profile_name);

        let rows: usize = incoming.profiles.iter().map(|p| p.rows.len()).sum();
        info(format!(
            "Payload contains {} profiles and {} rows.",
            incoming.profiles.len(),
            rows
        ));

        if !confirm("Import data and replace the current profiles?", assume_yes) {
            return Ok(None);
        }

        store::commit(
            pool,
            &incoming,
            "import",
            if file.is_some() { "file" } else { "link" },
            &format!("Imported {} profiles, {} rows", incoming.profiles.len(), rows),
        )?;
        Ok(Some(incoming))
    }
}
