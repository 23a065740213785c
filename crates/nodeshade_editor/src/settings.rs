// SPDX-License-Identifier: MIT OR Apache-2.0
//! Editor settings, stored as RON.

use crate::error::{EditorError, Result};
use nodeshade_graph::history::MAX_HISTORY;
use nodeshade_graph::DEFAULT_CURVE_STEPS;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Current settings format version
pub const SETTINGS_FORMAT_VERSION: u32 = 1;

/// Default settings file name
pub const SETTINGS_FILE_NAME: &str = "nodeshade.ron";

/// Editor settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Settings format version
    pub version: u32,
    /// Entries kept on each side of the undo history
    pub history_depth: usize,
    /// Resampling steps for cubic curves
    pub curve_resolution: usize,
    /// Default `tracing` filter directives, overridden by `RUST_LOG`
    pub log_filter: String,
    /// Graph file used when no explicit path is given
    pub autosave_path: Option<PathBuf>,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            version: SETTINGS_FORMAT_VERSION,
            history_depth: MAX_HISTORY,
            curve_resolution: DEFAULT_CURVE_STEPS,
            log_filter: String::from("nodeshade=info"),
            autosave_path: None,
        }
    }
}

impl EditorSettings {
    /// Parse settings from RON text
    pub fn from_ron(text: &str) -> Result<Self> {
        let settings: EditorSettings = ron::from_str(text)?;

        if settings.version > SETTINGS_FORMAT_VERSION {
            return Err(EditorError::UnsupportedVersion {
                found: settings.version,
                supported: SETTINGS_FORMAT_VERSION,
            });
        }

        Ok(settings)
    }

    /// Encode settings as pretty RON
    pub fn to_ron(&self) -> Result<String> {
        let config = ron::ser::PrettyConfig::default()
            .struct_names(true)
            .enumerate_arrays(false);
        Ok(ron::ser::to_string_pretty(self, config)?)
    }

    /// Load settings from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| EditorError::io(path, e))?;
        let settings = Self::from_ron(&content)?;
        tracing::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings, falling back to defaults when the file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!("No settings at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save settings to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = self.to_ron()?;
        std::fs::write(path, content).map_err(|e| EditorError::io(path, e))
    }

    /// Settings file path inside a directory
    pub fn settings_file_path(dir: &Path) -> PathBuf {
        dir.join(SETTINGS_FILE_NAME)
    }
}
