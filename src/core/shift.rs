// File: src/core/shift.rs
use crate::core::alphabet::AlphabetProfile;
use crate::core::statistics::{chi_squared_from_counts, letter_counts};

/// Finds the rotation in `[0, |alphabet|)` that, undone, makes `substring`
/// look most like the profile's language (minimum chi-squared).
///
/// Scans shifts in ascending order and keeps the first minimum.
pub fn best_shift(substring: &[char], profile: &AlphabetProfile) -> usize {
    let n = profile.len();
    // Rotating every character back by `s` moves the count of letter `j + s`
    // onto letter `j`, so the histogram is built once and read rotated.
    let counts = letter_counts(substring, profile);
    let mut best_shift = 0;
    let mut best_chi = f64::INFINITY;
    for shift in 0..n {
        let chi = chi_squared_from_counts(|j| counts[(j + shift) % n], substring.len(), profile);
        if chi < best_chi {
            best_chi = chi;
            best_shift = shift;
        }
    }
    best_shift
}
