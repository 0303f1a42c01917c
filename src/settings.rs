//! View preferences
//!
//! Persisted separately from the roster in LocalStorage.

use serde::{Deserialize, Serialize};

use crate::persistence::{self, KeyValueStore, LoadError};

/// How the employee list is laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Table,
    Grid,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Table => "table",
            ViewMode::Grid => "grid",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            ViewMode::Table => ViewMode::Grid,
            ViewMode::Grid => ViewMode::Table,
        }
    }

    /// Translation key of the toggle label
    pub fn label_key(&self) -> &'static str {
        match self {
            ViewMode::Table => "view.table",
            ViewMode::Grid => "view.grid",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Table or card grid
    pub view_mode: ViewMode,
}

impl Settings {
    /// LocalStorage key
    pub const STORAGE_KEY: &'static str = "roster_settings";

    pub fn load(storage: &dyn KeyValueStore) -> Self {
        match persistence::load_json(storage, Self::STORAGE_KEY) {
            Ok(settings) => {
                log::info!("Loaded settings from LocalStorage");
                settings
            }
            Err(LoadError::Missing(_)) => {
                log::info!("Using default settings");
                Self::default()
            }
            Err(e) => {
                log::warn!("Using default settings: {e}");
                Self::default()
            }
        }
    }

    pub fn save(&self, storage: &dyn KeyValueStore) {
        match persistence::save_json(storage, Self::STORAGE_KEY, self) {
            Ok(()) => log::info!("Settings saved"),
            Err(e) => log::warn!("Settings not saved: {e}"),
        }
    }

    /// Flip between table and grid. Returns the new mode.
    pub fn toggle_view(&mut self) -> ViewMode {
        self.view_mode = self.view_mode.toggled();
        self.view_mode
    }
}
