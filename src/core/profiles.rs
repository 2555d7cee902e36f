use crate::config::Config;
use crate::core::store;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::{Profile, State};
use crate::utils::formatting::trim_number;

/// High-level operations on the profile set.
pub struct ProfileLogic;

impl ProfileLogic {
    pub fn list(pool: &DbPool, cfg: &Config) -> AppResult<State> {
        store::load(pool, cfg)
    }

    /// Create a profile and select it.
    pub fn create(pool: &mut DbPool, cfg: &Config, name: Option<&str>) -> AppResult<Profile> {
        let mut state = store::load(pool, cfg)?;
        let profile = state
            .create_profile(name.unwrap_or(""), &cfg.new_profile_name)
            .clone();

        store::commit(pool, &state, "profile_add", &profile.name, "Created profile")?;
        Ok(profile)
    }

    pub fn select(pool: &mut DbPool, cfg: &Config, key: &str) -> AppResult<Profile> {
        let mut state = store::load(pool, cfg)?;
        state.select(key)?;
        let profile = state.selected()?.clone();

        store::commit(pool, &state, "profile_select", &profile.name, "Selected profile")?;
        Ok(profile)
    }

    pub fn rename(pool: &mut DbPool, cfg: &Config, key: &str, name: &str) -> AppResult<Profile> {
        let mut state = store::load(pool, cfg)?;
        let id = state.find_profile(key)?.id.clone();
        state.rename_profile(&id, name)?;
        let profile = state.find_profile(&id)?.clone();

        store::commit(pool, &state, "profile_edit", &profile.name, "Renamed profile")?;
        Ok(profile)
    }

    /// Delete a profile; returns the removed profile and the one now selected.
    pub fn delete(pool: &mut DbPool, cfg: &Config, key: &str) -> AppResult<(Profile, Profile)> {
        let mut state = store::load(pool, cfg)?;
        let id = state.find_profile(key)?.id.clone();
        let removed = state.delete_profile(&id, &cfg.default_profile_name)?;
        let selected = state.selected()?.clone();

        store::commit(
            pool,
            &state,
            "profile_del",
            &removed.name,
            &format!("Deleted profile with {} rows", removed.rows.len()),
        )?;
        Ok((removed, selected))
    }

    /// Store the default shortfall horizon of the selected profile.
    pub fn set_desired_hours(pool: &mut DbPool, cfg: &Config, hours: f64) -> AppResult<Profile> {
        if !hours.is_finite() || hours < 0.0 {
            return Err(AppError::InvalidHours(hours.to_string()));
        }

        let mut state = store::load(pool, cfg)?;
        let profile = state.selected_mut()?;
        profile.set_desired_hours(hours);
        let profile = profile.clone();

        store::commit(
            pool,
            &state,
            "profile_hours",
            &profile.name,
            &format!("Desired hours set to {}", trim_number(hours, 2)),
        )?;
        Ok(profile)
    }
}
