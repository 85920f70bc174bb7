//! Error types for the charm decision engine
//!
//! Failure to select is never an error here - selectors decline by
//! returning an empty selection. Errors cover the surrounding
//! surfaces: scenario files and their parsing.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CharmError {
    #[error("Invalid scenario: {0}")]
    InvalidScenario(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CharmError>;
