//! Error types for the pelada CLI

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PeladaError>;

#[derive(Error, Debug)]
pub enum PeladaError {
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Storage(#[from] anyhow::Error),

    #[error("League ID not provided and {env_var} environment variable not set")]
    MissingLeagueId { env_var: String },

    #[error("Failed to parse numeric ID: {0}")]
    InvalidId(#[from] std::num::ParseIntError),

    #[error("Invalid month: {year:04}-{month:02}")]
    InvalidMonth { year: i32, month: u32 },

    #[error("Invalid scope: {message}")]
    InvalidScope { message: String },

    #[error("Invalid position: {position}")]
    InvalidPosition { position: String },
}

#[cfg(test)]
mod tests;
