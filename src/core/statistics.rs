// File: src/core/statistics.rs
use crate::core::alphabet::AlphabetProfile;
use std::collections::HashMap;

/// Unbiased index of coincidence: `Σ f(f-1) / (n(n-1))`, 0 when `n <= 1`.
pub fn index_of_coincidence(text: &[char]) -> f64 {
    let n = text.len();
    if n <= 1 {
        return 0.0;
    }
    let mut counts: HashMap<char, usize> = HashMap::new();
    for &c in text {
        *counts.entry(c).or_insert(0) += 1;
    }
    let coincidences: usize = counts.values().map(|&f| f * (f - 1)).sum();
    coincidences as f64 / (n * (n - 1)) as f64
}

/// Per-letter occurrence counts, indexed by alphabet position.
/// Characters outside the alphabet are not counted.
pub fn letter_counts(text: &[char], profile: &AlphabetProfile) -> Vec<usize> {
    let mut counts = vec![0; profile.len()];
    for &c in text {
        if let Some(index) = profile.index_of(c) {
            counts[index] += 1;
        }
    }
    counts
}

/// Chi-squared divergence of `text` from the profile's expected frequencies.
/// Lower means closer to natural language; `+inf` for empty text.
pub fn chi_squared(text: &[char], profile: &AlphabetProfile) -> f64 {
    let counts = letter_counts(text, profile);
    chi_squared_from_counts(|i| counts[i], text.len(), profile)
}

/// Chi-squared over precomputed counts. `observed(i)` yields the count of the
/// i-th letter, `total` the length of the text the counts came from.
pub(crate) fn chi_squared_from_counts<F>(observed: F, total: usize, profile: &AlphabetProfile) -> f64
where
    F: Fn(usize) -> usize,
{
    if total == 0 {
        return f64::INFINITY;
    }
    let mut chi2 = 0.0;
    for i in 0..profile.len() {
        let expected = profile.frequency_at(i) * total as f64 / 100.0;
        // Letters with no expected occurrences are skipped, not penalised.
        if expected > 0.0 {
            let deviation = observed(i) as f64 - expected;
            chi2 += deviation * deviation / expected;
        }
    }
    chi2
}
