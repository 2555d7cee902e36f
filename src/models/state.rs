use super::profile::Profile;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// The whole profile set plus the current selection.
///
/// This is also the shape of the export payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct State {
    #[serde(default)]
    pub selected_profile_id: String,
    #[serde(default)]
    pub profiles: Vec<Profile>,
}

impl State {
    /// One empty profile, selected.
    pub fn with_default_profile(name: &str) -> Self {
        let profile = Profile::new(name);
        Self {
            selected_profile_id: profile.id.clone(),
            profiles: vec![profile],
        }
    }

    fn selected_index(&self) -> Option<usize> {
        self.profiles
            .iter()
            .position(|p| p.id == self.selected_profile_id)
            .or_else(|| (!self.profiles.is_empty()).then_some(0))
    }

    /// The selected profile, or the first one when the selection is stale.
    pub fn selected(&self) -> AppResult<&Profile> {
        self.selected_index()
            .map(|i| &self.profiles[i])
            .ok_or_else(|| AppError::ProfileNotFound(self.selected_profile_id.clone()))
    }

    pub fn selected_mut(&mut self) -> AppResult<&mut Profile> {
        match self.selected_index() {
            Some(i) => Ok(&mut self.profiles[i]),
            None => Err(AppError::ProfileNotFound(self.selected_profile_id.clone())),
        }
    }

    /// Lookup by id, then by name (case-insensitive).
    pub fn find_profile(&self, key: &str) -> AppResult<&Profile> {
        let lower = key.to_lowercase();
        self.profiles
            .iter()
            .find(|p| p.id == key)
            .or_else(|| self.profiles.iter().find(|p| p.name.to_lowercase() == lower))
            .ok_or_else(|| AppError::ProfileNotFound(key.to_string()))
    }

    pub fn select(&mut self, profile_id: &str) -> AppResult<()> {
        let id = self.find_profile(profile_id)?.id.clone();
        self.selected_profile_id = id;
        Ok(())
    }

    /// Append a new profile and select it. A blank name falls back to `fallback_name`.
    pub fn create_profile(&mut self, name: &str, fallback_name: &str) -> &Profile {
        let name = name.trim();
        let profile = Profile::new(if name.is_empty() { fallback_name } else { name });
        self.selected_profile_id = profile.id.clone();
        self.profiles.push(profile);
        &self.profiles[self.profiles.len() - 1]
    }

    pub fn rename_profile(&mut self, profile_id: &str, name: &str) -> AppResult<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::InvalidName("profile name cannot be empty".into()));
        }
        let id = self.find_profile(profile_id)?.id.clone();
        if let Some(p) = self.profiles.iter_mut().find(|p| p.id == id) {
            p.name = name.to_string();
        }
        Ok(())
    }

    /// Remove a profile. The last profile is replaced by a fresh default one.
    pub fn delete_profile(&mut self, profile_id: &str, default_name: &str) -> AppResult<Profile> {
        let idx = self
            .profiles
            .iter()
            .position(|p| p.id == profile_id)
            .ok_or_else(|| AppError::ProfileNotFound(profile_id.to_string()))?;

        let removed = self.profiles.remove(idx);

        if self.profiles.is_empty() {
            *self = State::with_default_profile(default_name);
        } else if !self
            .profiles
            .iter()
            .any(|p| p.id == self.selected_profile_id)
        {
            self.selected_profile_id = self.profiles[0].id.clone();
        }

        Ok(removed)
    }

    /// Make an imported state usable: never empty, selection always valid.
    pub fn normalize(&mut self, default_name: &str) {
        if self.profiles.is_empty() {
            *self = State::with_default_profile(default_name);
            return;
        }
        if !self
            .profiles
            .iter()
            .any(|p| p.id == self.selected_profile_id)
        {
            self.selected_profile_id = self.profiles[0].id.clone();
        }
    }
}
