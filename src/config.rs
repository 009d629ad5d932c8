// File: src/config.rs
use crate::core::key_length::DEFAULT_MAX_KEY_LENGTH;
use crate::error::{CryptanalysisError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const DEFAULT_KEY_LENGTH_CANDIDATES: usize = 5;

/// Tunables for [`crate::CryptanalysisEngine`]. Missing JSON fields take the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Longest repeating key tried by the key-length estimator.
    pub max_key_length: usize,
    /// How many of the best-ranked key lengths get a decryption candidate.
    pub key_length_candidates: usize,
    /// Default for the rare-letter flag when the caller does not give one.
    pub include_rare_letter: bool,
    /// Evaluate key lengths and rotations on the rayon pool.
    pub parallel: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_key_length: DEFAULT_MAX_KEY_LENGTH,
            key_length_candidates: DEFAULT_KEY_LENGTH_CANDIDATES,
            include_rare_letter: true,
            parallel: true,
        }
    }
}

impl AnalysisConfig {
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    pub fn from_json(contents: &str) -> Result<Self> {
        let config: AnalysisConfig = serde_json::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_key_length == 0 {
            return Err(CryptanalysisError::InvalidConfig(
                "max_key_length must be at least 1".to_string(),
            ));
        }
        if self.key_length_candidates == 0 {
            return Err(CryptanalysisError::InvalidConfig(
                "key_length_candidates must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
