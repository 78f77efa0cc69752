//! The module contains the errors the engine can throw.
//!
//! Input validation failures ([`InvalidDescription`], [`InvalidAmount`],
//! [`UnknownCategory`]) leave the ledger untouched; the remaining variants
//! wrap persistence failures.
//!
//! [`InvalidDescription`]: EngineError::InvalidDescription
//! [`InvalidAmount`]: EngineError::InvalidAmount
//! [`UnknownCategory`]: EngineError::UnknownCategory
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("description must not be empty")]
    InvalidDescription,
    #[error("invalid amount: {0}")]
    InvalidAmount(String),
    #[error("unknown category: {0}")]
    UnknownCategory(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::InvalidDescription, Self::InvalidDescription) => true,
            (Self::InvalidAmount(a), Self::InvalidAmount(b)) => a == b,
            (Self::UnknownCategory(a), Self::UnknownCategory(b)) => a == b,
            (Self::Io(a), Self::Io(b)) => a.kind() == b.kind(),
            (Self::Serialization(a), Self::Serialization(b)) => {
                a.to_string() == b.to_string()
            }
            _ => false,
        }
    }
}
