// File: src/core/key_length.rs
use crate::core::alphabet::AlphabetProfile;
use crate::core::statistics::index_of_coincidence;
use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_KEY_LENGTH: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeyLengthCandidate {
    pub length: usize,
    pub average_ic: f64,
}

impl KeyLengthCandidate {
    /// Distance from the language's typical IC; the ranking key.
    pub fn distance(&self, profile: &AlphabetProfile) -> f64 {
        (self.average_ic - profile.typical_ic()).abs()
    }
}

/// Characters at positions `offset, offset + stride, offset + 2*stride, ...`.
pub fn residue_class(text: &[char], offset: usize, stride: usize) -> Vec<char> {
    text.iter().skip(offset).step_by(stride).copied().collect()
}

/// Ranks trial key lengths `1..=min(max_length, len - 1)` best-first by how
/// close the average residue-class IC comes to the profile's typical IC.
///
/// The sort is stable, so equally distant lengths keep ascending order.
pub fn estimate_key_lengths(
    cleaned: &[char],
    profile: &AlphabetProfile,
    max_length: usize,
) -> Vec<KeyLengthCandidate> {
    let upper = max_length.min(cleaned.len().saturating_sub(1));
    let mut candidates: Vec<KeyLengthCandidate> = (1..=upper)
        .map(|length| {
            let total: f64 = (0..length)
                .map(|offset| index_of_coincidence(&residue_class(cleaned, offset, length)))
                .sum();
            KeyLengthCandidate {
                length,
                average_ic: total / length as f64,
            }
        })
        .collect();

    candidates.sort_by(|a, b| a.distance(profile).total_cmp(&b.distance(profile)));
    candidates
}
