//! Error types for the engine.

use std::path::PathBuf;

use crate::category::Category;

/// Errors that can occur during engine operations.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The theme file is missing or could not be read.
    #[error("cannot read theme file {path}: {source}")]
    ThemeRead {
        /// Path of the theme file.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// The theme file is not valid JSON or is missing required fields.
    #[error("malformed theme file {path}: {source}")]
    ThemeParse {
        /// Path of the theme file.
        path: PathBuf,
        /// Underlying parse failure.
        source: serde_json::Error,
    },

    /// The theme file parsed but defines no themes.
    #[error("theme file {path} defines no themes")]
    NoThemes {
        /// Path of the theme file.
        path: PathBuf,
    },

    /// The category has already been scored this match.
    #[error("category '{0}' is not open for scoring")]
    CategoryNotOpen(Category),

    /// The score file could not be read or written.
    #[error("cannot access score file {path}: {source}")]
    ScoreFile {
        /// Path of the score file.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },
}

/// Convenience result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
