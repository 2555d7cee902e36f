use crate::cli::parser::{Commands, ProfileAction};
use crate::config::Config;
use crate::core::profiles::ProfileLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{confirm, info, success};
use crate::utils::formatting::trim_number;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Profile { action } = cmd else {
        return Ok(());
    };

    let mut pool = DbPool::new(&cfg.database)?;

    match action {
        ProfileAction::List => {
            let state = ProfileLogic::list(&pool, cfg)?;
            let selected_id = state.selected()?.id.clone();

            let mut table = Table::new(vec![
                Column::left(" "),
                Column::left("Name"),
                Column::right("Rows"),
                Column::right("Hours"),
                Column::left("ID"),
            ]);
            for p in &state.profiles {
                table.add_row(vec![
                    (if p.id == selected_id { "*" } else { "" }).to_string(),
                    p.name.clone(),
                    p.rows.len().to_string(),
                    p.config
                        .desired_hours
                        .map(|h| trim_number(h, 2))
                        .unwrap_or_else(|| "-".into()),
                    p.id.clone(),
                ]);
            }
            print!("{}", table.render());
        }

        ProfileAction::Add { name } => {
            let profile = ProfileLogic::create(&mut pool, cfg, name.as_deref())?;
            success(format!("Created and selected profile '{}' ({})", profile.name, profile.id));
        }

        ProfileAction::Select { profile } => {
            let p = ProfileLogic::select(&mut pool, cfg, profile)?;
            success(format!("Selected profile '{}'", p.name));
        }

        ProfileAction::Rename { profile, name } => {
            let p = ProfileLogic::rename(&mut pool, cfg, profile, name)?;
            success(format!("Profile renamed to '{}'", p.name));
        }

        ProfileAction::Del { profile, yes } => {
            let prompt = format!(
                "Delete profile '{}' and all its rows? This action is irreversible.",
                profile
            );
            if !confirm(&prompt, *yes) {
                info("Operation cancelled.");
                return Ok(());
            }

            let (removed, selected) = ProfileLogic::delete(&mut pool, cfg, profile)?;
            success(format!(
                "Profile '{}' deleted. Selected profile: '{}'",
                removed.name, selected.name
            ));
        }

        ProfileAction::Hours { hours } => {
            let p = ProfileLogic::set_desired_hours(&mut pool, cfg, *hours)?;
            success(format!(
                "Desired hours for '{}' set to {}",
                p.name,
                trim_number(*hours, 2)
            ));
        }
    }

    Ok(())
}
