// SPDX-License-Identifier: MIT OR Apache-2.0
//! Error types for the editor session.

use std::path::PathBuf;
use thiserror::Error;

/// Editor errors
#[derive(Debug, Error)]
pub enum EditorError {
    /// Reading or writing a file failed
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// File involved
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// Settings file is not valid RON
    #[error("Invalid settings: {0}")]
    SettingsParse(#[from] ron::error::SpannedError),

    /// Settings could not be encoded
    #[error("Could not encode settings: {0}")]
    SettingsEncode(#[from] ron::Error),

    /// Settings were written by a newer version
    #[error("Settings version {found} is newer than supported version {supported}")]
    UnsupportedVersion {
        /// Version in the file
        found: u32,
        /// Newest version this build reads
        supported: u32,
    },

    /// No file path given and none configured
    #[error("No save path configured")]
    NoPath,

    /// The node does not exist or has no curve input of that name
    #[error("No curve named {0:?} on that node")]
    NoCurve(String),

    /// Log filter directive could not be parsed
    #[error("Invalid log filter: {0}")]
    LogFilter(#[from] tracing_subscriber::filter::ParseError),
}

impl EditorError {
    /// Wrap an I/O error together with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for editor operations
pub type Result<T> = std::result::Result<T, EditorError>;
