// File: src/core/fixed_substitution.rs
use crate::core::alphabet::{cyrillic_letters, latin_letters, Case};
use crate::core::types::{Candidate, Method, Parameter};
use crate::error::{CryptanalysisError, Result};

/// Reversed-alphabet (Atbash) transform over the Latin letters and the
/// selected Cyrillic variant, each case independently. Self-inverse;
/// characters outside those alphabets are unchanged.
pub fn mirror_text(text: &str, include_rare_letter: bool) -> String {
    let alphabets = [
        latin_letters(Case::Upper),
        latin_letters(Case::Lower),
        cyrillic_letters(Case::Upper, include_rare_letter),
        cyrillic_letters(Case::Lower, include_rare_letter),
    ];
    text.chars()
        .map(|c| {
            alphabets
                .iter()
                .find_map(|letters| letters.mirror(c))
                .unwrap_or(c)
        })
        .collect()
}

pub fn fixed_substitution_candidates(
    ciphertext: &str,
    include_rare_letter: bool,
) -> Result<Vec<Candidate>> {
    if ciphertext.is_empty() {
        return Err(CryptanalysisError::EmptyInput);
    }
    Ok(vec![Candidate {
        method: Method::FixedSubstitution,
        parameter: Parameter::None,
        plaintext: mirror_text(ciphertext, include_rare_letter),
    }])
}
