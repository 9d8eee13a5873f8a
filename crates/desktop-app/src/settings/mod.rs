// SPDX-FileCopyrightText: Copyright (C) 2018-2025 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use primeflix_core::poster::FilePosterLoader;

pub const FILE_NAME: &str = "primeflix_settings";

pub const FILE_SUFFIX: &str = "ron";

pub const DEFAULT_POSTER_CACHE_DIR_NAME: &str = "posters";

pub const DEFAULT_BROWSE_SAMPLE_SIZE: usize = 20;

pub const DEFAULT_BROWSE_COLUMNS: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct State {
    /// Base directory for relative poster paths.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster_dir: Option<PathBuf>,

    /// Destination of pre-processed posters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster_cache_dir: Option<PathBuf>,

    /// Maximum number of movies on the browse page.
    pub browse_sample_size: usize,

    /// Number of poster columns on the browse page.
    pub browse_columns: usize,

    pub fullscreen: bool,
}

impl Default for State {
    fn default() -> Self {
        Self {
            poster_dir: None,
            poster_cache_dir: None,
            browse_sample_size: DEFAULT_BROWSE_SAMPLE_SIZE,
            browse_columns: DEFAULT_BROWSE_COLUMNS,
            fullscreen: false,
        }
    }
}

impl State {
    /// Restore the saved settings or start with defaults.
    ///
    /// Defaults are written back if no settings have been saved yet.
    /// Unreadable settings are logged and replaced by defaults, but
    /// the file is left untouched.
    pub fn restore(
        parent_dir: &Path,
        default_data_dir: impl FnOnce() -> anyhow::Result<PathBuf>,
    ) -> anyhow::Result<Self> {
        log::info!("Loading saved settings from: {}", parent_dir.display());
        let (mut settings, save_defaults) = match Self::load(parent_dir) {
            Ok(Some(settings)) => (settings, false),
            Ok(None) => {
                log::info!("No saved settings found");
                (Self::default(), true)
            }
            Err(err) => {
                log::warn!("Failed to load saved settings: {err}");
                (Self::default(), false)
            }
        };
        if settings.poster_cache_dir.is_none() {
            let poster_cache_dir = default_data_dir()?.join(DEFAULT_POSTER_CACHE_DIR_NAME);
            log::info!(
                "Using default poster cache directory: {}",
                poster_cache_dir.display()
            );
            settings.poster_cache_dir = Some(poster_cache_dir);
        }
        if save_defaults && let Err(err) = settings.save(parent_dir) {
            log::warn!("Failed to save default settings: {err}");
        }
        debug_assert!(settings.poster_cache_dir.is_some());
        Ok(settings)
    }

    /// Load the saved settings.
    ///
    /// Returns `None` if no settings have been saved yet.
    pub fn load(parent_dir: &Path) -> anyhow::Result<Option<Self>> {
        let file_path = new_settings_file_path(parent_dir.to_path_buf());
        log::info!("Loading settings from file: {}", file_path.display());
        match fs::read_to_string(&file_path) {
            Ok(text) => ron::from_str(&text).map(Some).map_err(Into::into),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    pub fn save(&self, parent_dir: &Path) -> anyhow::Result<()> {
        let file_path = new_settings_file_path(parent_dir.to_path_buf());
        log::info!("Saving current settings into file: {}", file_path.display());
        let text = ron::ser::to_string_pretty(self, Default::default())?;
        if let Some(parent_path) = file_path.parent() {
            fs::create_dir_all(parent_path)?;
        }
        fs::write(&file_path, text)?;
        Ok(())
    }

    pub async fn save_spawn_blocking(self, parent_dir: PathBuf) -> anyhow::Result<()> {
        match tokio::runtime::Handle::current()
            .spawn_blocking(move || self.save(&parent_dir))
            .await
        {
            Ok(Ok(())) => Ok(()),
            Ok(Err(err)) => {
                anyhow::bail!("failed to save: {err}");
            }
            Err(err) => {
                anyhow::bail!("failed to join blocking task after saving: {err}");
            }
        }
    }

    #[must_use]
    pub fn poster_loader(&self) -> FilePosterLoader {
        FilePosterLoader::new(self.poster_dir.clone())
    }

    #[must_use]
    pub fn poster_cache_dir(&self) -> Option<&Path> {
        self.poster_cache_dir.as_deref()
    }

    /// Returns `true` if the value has changed.
    pub fn update_fullscreen(&mut self, fullscreen: bool) -> bool {
        if self.fullscreen == fullscreen {
            // No effect
            return false;
        }
        log::info!("Updating fullscreen: {fullscreen}");
        self.fullscreen = fullscreen;
        true
    }
}

#[must_use]
pub fn new_settings_file_path(parent_dir: PathBuf) -> PathBuf {
    let mut file_path = parent_dir;
    file_path.push(FILE_NAME);
    file_path.set_extension(FILE_SUFFIX);
    file_path
}

#[cfg(test)]
mod tests;
