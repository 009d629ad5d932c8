// File: src/ranking.rs
//! Choosing "the" plaintext is left to a pluggable collaborator; the engine
//! itself only enumerates candidates.

use crate::core::alphabet::detect_profile;
use crate::core::statistics::chi_squared;
use crate::core::types::{Candidate, CandidateSet};

/// Judges which candidate, if any, reads as natural language.
pub trait Ranker {
    fn choose(&self, candidates: &CandidateSet) -> Option<Candidate>;
}

/// Builds a ranker for one request's rare-letter setting, so candidates are
/// judged with the same alphabet they were produced with.
pub type RankerFactory<'a> = dyn Fn(bool) -> Box<dyn Ranker> + 'a;

/// Picks the candidate whose letters best fit their own language's frequency
/// table (lowest chi-squared per letter).
#[derive(Debug, Clone)]
pub struct FrequencyRanker {
    include_rare_letter: bool,
    /// Candidates scoring above this are treated as unreadable.
    max_score: Option<f64>,
}

const MIN_SCORED_LETTERS: usize = 2;

impl FrequencyRanker {
    pub fn new(include_rare_letter: bool) -> Self {
        Self {
            include_rare_letter,
            max_score: None,
        }
    }

    pub fn with_max_score(mut self, max_score: f64) -> Self {
        self.max_score = Some(max_score);
        self
    }

    pub fn include_rare_letter(&self) -> bool {
        self.include_rare_letter
    }

    /// Chi-squared per letter, or `None` when there is too little text to judge.
    pub fn score(&self, plaintext: &str) -> Option<f64> {
        let profile = detect_profile(plaintext, self.include_rare_letter);
        let letters = profile.clean(plaintext);
        if letters.len() < MIN_SCORED_LETTERS {
            return None;
        }
        Some(chi_squared(&letters, profile) / letters.len() as f64)
    }
}

impl Ranker for FrequencyRanker {
    fn choose(&self, candidates: &CandidateSet) -> Option<Candidate> {
        let mut best: Option<(f64, &Candidate)> = None;
        for candidate in candidates {
            let Some(score) = self.score(&candidate.plaintext) else {
                continue;
            };
            // Strict comparison keeps the earliest candidate on ties.
            if best.map_or(true, |(best_score, _)| score < best_score) {
                best = Some((score, candidate));
            }
        }
        let (score, candidate) = best?;
        match self.max_score {
            Some(limit) if score > limit => None,
            _ => Some(candidate.clone()),
        }
    }
}
