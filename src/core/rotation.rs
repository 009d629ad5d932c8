// File: src/core/rotation.rs
use crate::core::alphabet::{cyrillic_letters, latin_letters, Case, Direction};
use crate::core::types::{Candidate, Method, Parameter};
use crate::error::{CryptanalysisError, Result};
use rayon::prelude::*;

/// Number of rotations tried: enough to cover the larger of the Latin
/// alphabet and the selected Cyrillic variant.
pub fn rotation_count(include_rare_letter: bool) -> usize {
    latin_letters(Case::Upper)
        .len()
        .max(cyrillic_letters(Case::Upper, include_rare_letter).len())
}

/// Shifts every Cyrillic or Latin letter by `shift` within its own alphabet
/// and case. Other characters are unchanged.
pub fn rotate_text(text: &str, shift: usize, direction: Direction, include_rare_letter: bool) -> String {
    let alphabets = [
        cyrillic_letters(Case::Upper, include_rare_letter),
        cyrillic_letters(Case::Lower, include_rare_letter),
        latin_letters(Case::Upper),
        latin_letters(Case::Lower),
    ];
    text.chars()
        .map(|c| {
            alphabets
                .iter()
                .find_map(|letters| letters.shift_char(c, shift, direction))
                .unwrap_or(c)
        })
        .collect()
}

/// One candidate per backward shift `0..rotation_count`, ascending.
pub fn rotation_candidates(
    ciphertext: &str,
    include_rare_letter: bool,
    parallel: bool,
) -> Result<Vec<Candidate>> {
    if ciphertext.is_empty() {
        return Err(CryptanalysisError::EmptyInput);
    }
    let build = |shift: usize| Candidate {
        method: Method::Rotation,
        parameter: Parameter::Shift(shift),
        plaintext: rotate_text(ciphertext, shift, Direction::Backward, include_rare_letter),
    };
    let shifts = 0..rotation_count(include_rare_letter);
    let candidates: Vec<Candidate> = if parallel {
        shifts.into_par_iter().map(build).collect()
    } else {
        shifts.map(build).collect()
    };
    Ok(candidates)
}
