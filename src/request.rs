// File: src/request.rs
//! JSON framing for one-shot analysis requests.
//!
//! A request is `{"text": "<ciphertext><flag>"}`: the final character is the
//! rare-letter flag (`1` includes it, anything else excludes it) and is
//! always stripped before analysis.

use crate::core::engine::CryptanalysisEngine;
use crate::core::types::{Candidate, CandidateSet};
use crate::error::{CryptanalysisError, Result};
use crate::ranking::RankerFactory;
use serde::{Deserialize, Serialize};

const RARE_LETTER_ON: char = '1';

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalysisRequest {
    #[serde(default)]
    pub text: Option<String>,
}

impl AnalysisRequest {
    pub fn from_json(input: &str) -> Result<Self> {
        serde_json::from_str(input).map_err(|e| CryptanalysisError::InvalidRequest(e.to_string()))
    }

    /// Splits the payload into ciphertext and rare-letter flag.
    pub fn into_parts(self) -> Result<(String, bool)> {
        let mut text = match self.text {
            Some(text) if !text.is_empty() => text,
            _ => return Err(CryptanalysisError::TextRequired),
        };
        let include_rare_letter = text.pop() == Some(RARE_LETTER_ON);
        Ok((text, include_rare_letter))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnalysisResponse {
    Success {
        candidates: CandidateSet,
        #[serde(skip_serializing_if = "Option::is_none")]
        chosen: Option<Candidate>,
    },
    Failure {
        error: String,
    },
}

impl AnalysisResponse {
    pub fn is_failure(&self) -> bool {
        matches!(self, AnalysisResponse::Failure { .. })
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|e| serde_json::json!({ "error": e.to_string() }).to_string())
    }
}

impl From<CryptanalysisError> for AnalysisResponse {
    fn from(error: CryptanalysisError) -> Self {
        AnalysisResponse::Failure {
            error: error.to_string(),
        }
    }
}

/// Parses, analyses and optionally ranks one request. Never fails: errors
/// become a `Failure` response. The ranker is built for the request's own
/// rare-letter flag.
pub fn handle_request(
    engine: &CryptanalysisEngine,
    ranker: Option<&RankerFactory<'_>>,
    input: &str,
) -> AnalysisResponse {
    let outcome = AnalysisRequest::from_json(input)
        .and_then(AnalysisRequest::into_parts)
        .and_then(|(text, include_rare_letter)| {
            let candidates = engine.analyze(&text, include_rare_letter)?;
            Ok((candidates, include_rare_letter))
        });
    match outcome {
        Ok((candidates, include_rare_letter)) => {
            let chosen = ranker.and_then(|make| make(include_rare_letter).choose(&candidates));
            AnalysisResponse::Success { candidates, chosen }
        }
        Err(error) => error.into(),
    }
}
