// File: src/core/polyalphabetic.rs
//! Repeating-key substitution: key recovery from ciphertext statistics and
//! keyed encryption/decryption.
//!
//! Only letters of the profile's alphabet consume key positions; everything
//! else passes through untouched. Estimation works on the cleaned projection
//! of the text, which drops the same characters, so residue classes line up
//! with the key positions used while decrypting.

use crate::config::AnalysisConfig;
use crate::core::alphabet::{AlphabetProfile, Direction};
use crate::core::key_length::{estimate_key_lengths, residue_class, KeyLengthCandidate};
use crate::core::shift::best_shift;
use crate::core::types::{Candidate, Method, Parameter};
use crate::error::{CryptanalysisError, Result};
use log::debug;
use rayon::prelude::*;
use std::fmt;

/// A validated key: one alphabet letter (and therefore one shift) per position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolyalphabeticKey {
    letters: String,
    shifts: Vec<usize>,
}

/// Key recovered letter by letter from residue-class statistics.
pub type RecoveredKey = PolyalphabeticKey;

impl PolyalphabeticKey {
    /// Parses a user key case-insensitively. Every character must be a letter
    /// of the profile's alphabet.
    pub fn parse(key: &str, profile: &AlphabetProfile) -> Result<Self> {
        Self::parse_in(key, &[profile])
    }

    /// Parses a key whose letters may come from any of `profiles`. Each
    /// letter's shift is its position in the first alphabet containing it.
    pub fn parse_in(key: &str, profiles: &[&AlphabetProfile]) -> Result<Self> {
        if key.is_empty() {
            return Err(CryptanalysisError::InvalidKey {
                key: key.to_string(),
                reason: "key is empty".to_string(),
            });
        }
        let mut letters = String::with_capacity(key.len());
        let mut shifts = Vec::with_capacity(key.len());
        for c in key.chars() {
            let (letter, shift) = profiles
                .iter()
                .find_map(|profile| {
                    profile
                        .index_of(c)
                        .map(|index| (profile.letters().letter(index), index))
                })
                .ok_or_else(|| CryptanalysisError::InvalidKey {
                    key: key.to_string(),
                    reason: format!("{:?} is not a letter of the alphabet", c),
                })?;
            letters.push(letter);
            shifts.push(shift);
        }
        Ok(Self { letters, shifts })
    }

    fn from_shifts(shifts: Vec<usize>, profile: &AlphabetProfile) -> Self {
        let letters = shifts.iter().map(|&s| profile.letters().letter(s)).collect();
        Self { letters, shifts }
    }

    pub fn as_str(&self) -> &str {
        &self.letters
    }

    pub fn shifts(&self) -> &[usize] {
        &self.shifts
    }

    pub fn len(&self) -> usize {
        self.shifts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shifts.is_empty()
    }
}

impl fmt::Display for PolyalphabeticKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.letters)
    }
}

/// Recovers one key letter per residue class of `cleaned` at stride `key_length`.
pub fn recover_key(
    cleaned: &[char],
    key_length: usize,
    profile: &AlphabetProfile,
) -> Result<RecoveredKey> {
    if key_length == 0 {
        return Err(CryptanalysisError::InvalidKey {
            key: String::new(),
            reason: "key length must be at least 1".to_string(),
        });
    }
    let shifts = (0..key_length)
        .map(|offset| best_shift(&residue_class(cleaned, offset, key_length), profile))
        .collect();
    Ok(PolyalphabeticKey::from_shifts(shifts, profile))
}

fn apply(
    text: &str,
    key: &PolyalphabeticKey,
    profiles: &[&AlphabetProfile],
    direction: Direction,
) -> String {
    let mut output = String::with_capacity(text.len());
    let mut key_position = 0;
    for c in text.chars() {
        let found = profiles
            .iter()
            .find_map(|profile| profile.index_of(c).map(|index| (profile.letters(), index)));
        match found {
            Some((letters, index)) => {
                let shift = key.shifts[key_position % key.shifts.len()];
                let shifted = letters.shift(index, shift, direction);
                if c.is_uppercase() {
                    output.push(shifted);
                } else {
                    output.extend(shifted.to_lowercase());
                }
                key_position += 1;
            }
            None => output.push(c),
        }
    }
    output
}

/// Shifts each alphabet letter back by the current key letter, preserving
/// case. Non-letters pass through and do not advance the key.
pub fn decrypt(ciphertext: &str, key: &PolyalphabeticKey, profile: &AlphabetProfile) -> String {
    apply(ciphertext, key, &[profile], Direction::Backward)
}

/// Inverse of [`decrypt`].
pub fn encrypt(plaintext: &str, key: &PolyalphabeticKey, profile: &AlphabetProfile) -> String {
    apply(plaintext, key, &[profile], Direction::Forward)
}

/// The Latin profile and the selected Cyrillic variant, for texts that mix
/// both scripts.
pub fn mixed_script_profiles(include_rare_letter: bool) -> [&'static AlphabetProfile; 2] {
    [
        AlphabetProfile::latin(),
        AlphabetProfile::cyrillic(include_rare_letter),
    ]
}

/// Known-key encryption over Latin and Cyrillic letters at once. Every letter
/// of either script takes the next key shift, reduced modulo its own
/// alphabet. Parse the key with [`PolyalphabeticKey::parse_in`] against
/// [`mixed_script_profiles`].
pub fn encrypt_mixed(plaintext: &str, key: &PolyalphabeticKey, include_rare_letter: bool) -> String {
    apply(
        plaintext,
        key,
        &mixed_script_profiles(include_rare_letter),
        Direction::Forward,
    )
}

/// Inverse of [`encrypt_mixed`].
pub fn decrypt_mixed(ciphertext: &str, key: &PolyalphabeticKey, include_rare_letter: bool) -> String {
    apply(
        ciphertext,
        key,
        &mixed_script_profiles(include_rare_letter),
        Direction::Backward,
    )
}

/// Estimates key lengths, recovers a key for each of the best
/// `config.key_length_candidates` and decrypts the full ciphertext with it.
pub fn polyalphabetic_candidates(
    ciphertext: &str,
    profile: &AlphabetProfile,
    config: &AnalysisConfig,
) -> Result<Vec<Candidate>> {
    let cleaned = profile.clean(ciphertext);
    if cleaned.len() < 2 {
        return Err(CryptanalysisError::Estimation {
            letters: cleaned.len(),
        });
    }

    let mut ranked = estimate_key_lengths(&cleaned, profile, config.max_key_length);
    ranked.truncate(config.key_length_candidates);
    debug!(
        "key length ranking: {:?}",
        ranked.iter().map(|c| c.length).collect::<Vec<_>>()
    );

    let build = |candidate: &KeyLengthCandidate| -> Result<Candidate> {
        let key = recover_key(&cleaned, candidate.length, profile)?;
        debug!(
            "key length {} (avg IC {:.4}) -> key {}",
            candidate.length, candidate.average_ic, key
        );
        Ok(Candidate {
            method: Method::Polyalphabetic,
            plaintext: decrypt(ciphertext, &key, profile),
            parameter: Parameter::Key(key.letters),
        })
    };

    if config.parallel {
        ranked.par_iter().map(build).collect()
    } else {
        ranked.iter().map(build).collect()
    }
}
