//! Error types for the cryptanalysis library.

use crate::core::types::Method;
use thiserror::Error;

/// A single cipher method that produced no candidates, with the reason.
#[derive(Debug)]
pub struct MethodFailure {
    pub method: Method,
    pub error: CryptanalysisError,
}

/// Errors produced by the cryptanalysis library.
#[derive(Debug, Error)]
pub enum CryptanalysisError {
    /// Fewer than two alphabet letters survived cleaning, so no key length is estimable.
    #[error("cleaned text has {letters} letter(s); at least 2 are needed to estimate a key length")]
    Estimation { letters: usize },

    #[error("ciphertext is empty")]
    EmptyInput,

    #[error("invalid key {key:?}: {reason}")]
    InvalidKey { key: String, reason: String },

    #[error("invalid alphabet profile: {0}")]
    InvalidProfile(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Every decryption method failed; the individual failures are kept.
    #[error("all decryption methods failed")]
    AllMethodsFailed { failures: Vec<MethodFailure> },

    #[error("text is required")]
    TextRequired,

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Bincode(#[from] bincode::Error),
}

pub type Result<T> = std::result::Result<T, CryptanalysisError>;
