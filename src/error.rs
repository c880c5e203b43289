//! Error type for the boundary layer: reading answer files, loading a
//! program catalog, writing and reading export rows.
//!
//! The scoring engine itself never fails; every problem inside it degrades
//! to an absent indicator or a zero total.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid catalog TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid answers: {0}")]
    InvalidAnswers(String),

    #[error("invalid export: {0}")]
    InvalidExport(String),

    #[error("invalid catalog:\n  {}", .0.join("\n  "))]
    InvalidCatalog(Vec<String>),

    #[error("telemetry: {0}")]
    Telemetry(String),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
