use std::path::PathBuf;

use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the engine, settings and save files.
///
/// Physics never fails: degenerate collisions and placement shortfalls are
/// handled in place. Everything here comes from data crossing the crate boundary.
#[derive(Debug, Error)]
pub enum Error {
    /// A snapshot that does not describe a valid population.
    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(String),

    /// Invalid settings or arena parameter.
    #[error("invalid parameter: {0}")]
    InvalidParam(String),

    /// Quick load requested but no quick save exists.
    #[error("no quick save found at {}", .0.display())]
    NoQuickSave(PathBuf),

    /// Save file written by a newer format.
    #[error("unsupported save version {0}")]
    UnsupportedVersion(u32),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
