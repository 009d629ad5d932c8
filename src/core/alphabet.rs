// File: src/core/alphabet.rs
use crate::error::{CryptanalysisError, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const LATIN_LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const CYRILLIC_LETTERS: &str = "АБВГДЕЁЖЗИЙКЛМНОПРСТУФХЦЧШЩЪЫЬЭЮЯ";
/// The optional Cyrillic letter whose inclusion changes the alphabet size.
pub const RARE_LETTER: char = 'Ё';

const LATIN_TYPICAL_IC: f64 = 0.0667;
const CYRILLIC_TYPICAL_IC: f64 = 0.055;

const LATIN_FREQUENCIES: [f64; 26] = [
    8.167, 1.492, 2.782, 4.253, 12.702, 2.228, 2.015, 6.094, 6.966, 0.153, 0.772, 4.025, 2.406,
    6.749, 7.507, 1.929, 0.095, 5.987, 6.327, 9.056, 2.758, 0.978, 2.360, 0.150, 1.974, 0.074,
];

/// Parallel to `CYRILLIC_LETTERS`, rare letter included.
const CYRILLIC_FREQUENCIES: [f64; 33] = [
    8.01, 1.59, 4.54, 1.70, 2.98, 8.45, 0.04, 0.94, 1.65, 7.35, 1.21, 3.49, 4.40, 3.21, 6.70,
    10.97, 2.81, 4.73, 5.47, 6.26, 2.62, 0.26, 0.97, 0.48, 1.44, 0.73, 0.36, 0.04, 1.90, 1.74,
    0.32, 0.64, 2.01,
];

/// Folds a character to its canonical (uppercase) form.
/// Characters whose uppercase form is more than one character have no canonical form.
pub fn fold_case(c: char) -> Option<char> {
    let mut upper = c.to_uppercase();
    let first = upper.next()?;
    match upper.next() {
        Some(_) => None,
        None => Some(first),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Encryption: shift forward along the alphabet.
    Forward,
    /// Decryption: shift backward along the alphabet.
    Backward,
}

/// An ordered set of unique characters with O(1) position lookup.
#[derive(Debug, Clone)]
pub struct LetterSet {
    letters: Vec<char>,
    positions: HashMap<char, usize>,
}

impl LetterSet {
    fn from_chars<I: IntoIterator<Item = char>>(chars: I) -> Self {
        let mut letters = Vec::new();
        let mut positions = HashMap::new();
        for c in chars {
            if !positions.contains_key(&c) {
                positions.insert(c, letters.len());
                letters.push(c);
            }
        }
        Self { letters, positions }
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    pub fn position(&self, c: char) -> Option<usize> {
        self.positions.get(&c).copied()
    }

    pub fn contains(&self, c: char) -> bool {
        self.positions.contains_key(&c)
    }

    /// Letter at `index`, wrapping around the end of the set.
    pub fn letter(&self, index: usize) -> char {
        self.letters[index % self.letters.len()]
    }

    /// Moves the letter at `position` by `offset` places, circularly.
    pub fn shift(&self, position: usize, offset: usize, direction: Direction) -> char {
        let n = self.letters.len();
        let offset = offset % n;
        match direction {
            Direction::Forward => self.letters[(position + offset) % n],
            Direction::Backward => self.letters[(position + n - offset) % n],
        }
    }

    /// Shifts `c` if it belongs to this set.
    pub fn shift_char(&self, c: char, offset: usize, direction: Direction) -> Option<char> {
        self.position(c)
            .map(|position| self.shift(position, offset, direction))
    }

    /// Maps `c` to the letter at the mirrored position (`i <-> n-1-i`).
    pub fn mirror(&self, c: char) -> Option<char> {
        self.position(c)
            .map(|position| self.letters[self.letters.len() - 1 - position])
    }
}

static LATIN_UPPER: Lazy<LetterSet> = Lazy::new(|| LetterSet::from_chars(LATIN_LETTERS.chars()));
static LATIN_LOWER: Lazy<LetterSet> =
    Lazy::new(|| LetterSet::from_chars(LATIN_LETTERS.to_lowercase().chars()));
static CYRILLIC_UPPER_FULL: Lazy<LetterSet> =
    Lazy::new(|| LetterSet::from_chars(CYRILLIC_LETTERS.chars()));
static CYRILLIC_LOWER_FULL: Lazy<LetterSet> =
    Lazy::new(|| LetterSet::from_chars(CYRILLIC_LETTERS.to_lowercase().chars()));
static CYRILLIC_UPPER_BASIC: Lazy<LetterSet> = Lazy::new(|| {
    LetterSet::from_chars(CYRILLIC_LETTERS.chars().filter(|&c| c != RARE_LETTER))
});
static CYRILLIC_LOWER_BASIC: Lazy<LetterSet> = Lazy::new(|| {
    LetterSet::from_chars(
        CYRILLIC_LETTERS
            .chars()
            .filter(|&c| c != RARE_LETTER)
            .flat_map(char::to_lowercase),
    )
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    Upper,
    Lower,
}

pub fn latin_letters(case: Case) -> &'static LetterSet {
    match case {
        Case::Upper => &*LATIN_UPPER,
        Case::Lower => &*LATIN_LOWER,
    }
}

pub fn cyrillic_letters(case: Case, include_rare_letter: bool) -> &'static LetterSet {
    match (case, include_rare_letter) {
        (Case::Upper, true) => &*CYRILLIC_UPPER_FULL,
        (Case::Lower, true) => &*CYRILLIC_LOWER_FULL,
        (Case::Upper, false) => &*CYRILLIC_UPPER_BASIC,
        (Case::Lower, false) => &*CYRILLIC_LOWER_BASIC,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Script {
    Latin,
    Cyrillic,
    Custom,
}

/// Ordered alphabet plus the expected letter frequencies of one language variant.
///
/// Letters are stored in canonical (uppercase) form; lookups through
/// [`AlphabetProfile::index_of`] are case-insensitive.
#[derive(Debug, Clone)]
pub struct AlphabetProfile {
    script: Script,
    letters: LetterSet,
    /// Percentages, parallel to `letters`.
    expected_frequency: Vec<f64>,
    typical_ic: f64,
}

static LATIN_PROFILE: Lazy<AlphabetProfile> = Lazy::new(|| AlphabetProfile {
    script: Script::Latin,
    letters: (*LATIN_UPPER).clone(),
    expected_frequency: LATIN_FREQUENCIES.to_vec(),
    typical_ic: LATIN_TYPICAL_IC,
});

static CYRILLIC_PROFILE_FULL: Lazy<AlphabetProfile> = Lazy::new(|| AlphabetProfile {
    script: Script::Cyrillic,
    letters: (*CYRILLIC_UPPER_FULL).clone(),
    expected_frequency: CYRILLIC_FREQUENCIES.to_vec(),
    typical_ic: CYRILLIC_TYPICAL_IC,
});

static CYRILLIC_PROFILE_BASIC: Lazy<AlphabetProfile> = Lazy::new(|| AlphabetProfile {
    script: Script::Cyrillic,
    letters: (*CYRILLIC_UPPER_BASIC).clone(),
    expected_frequency: CYRILLIC_LETTERS
        .chars()
        .zip(CYRILLIC_FREQUENCIES)
        .filter(|&(c, _)| c != RARE_LETTER)
        .map(|(_, freq)| freq)
        .collect(),
    typical_ic: CYRILLIC_TYPICAL_IC,
});

impl AlphabetProfile {
    /// Builds a custom profile. `letters` are folded to uppercase and must be
    /// unique; `frequencies` is parallel to `letters`.
    pub fn new(letters: &str, frequencies: &[f64], typical_ic: f64) -> Result<Self> {
        let mut folded = Vec::new();
        for c in letters.chars() {
            let canonical = fold_case(c).ok_or_else(|| {
                CryptanalysisError::InvalidProfile(format!("{:?} has no single-letter uppercase form", c))
            })?;
            if folded.contains(&canonical) {
                return Err(CryptanalysisError::InvalidProfile(format!(
                    "duplicate letter {:?}",
                    canonical
                )));
            }
            folded.push(canonical);
        }
        if folded.is_empty() {
            return Err(CryptanalysisError::InvalidProfile("alphabet is empty".to_string()));
        }
        if folded.len() != frequencies.len() {
            return Err(CryptanalysisError::InvalidProfile(format!(
                "{} letters but {} frequencies",
                folded.len(),
                frequencies.len()
            )));
        }
        if frequencies.iter().any(|f| !f.is_finite() || *f < 0.0) {
            return Err(CryptanalysisError::InvalidProfile(
                "frequencies must be finite and non-negative".to_string(),
            ));
        }
        Ok(Self {
            script: Script::Custom,
            letters: LetterSet::from_chars(folded),
            expected_frequency: frequencies.to_vec(),
            typical_ic,
        })
    }

    pub fn latin() -> &'static AlphabetProfile {
        &LATIN_PROFILE
    }

    pub fn cyrillic(include_rare_letter: bool) -> &'static AlphabetProfile {
        if include_rare_letter {
            &CYRILLIC_PROFILE_FULL
        } else {
            &CYRILLIC_PROFILE_BASIC
        }
    }

    pub fn script(&self) -> Script {
        self.script
    }

    pub fn letters(&self) -> &LetterSet {
        &self.letters
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn typical_ic(&self) -> f64 {
        self.typical_ic
    }

    /// Expected percentage of the letter at `index`.
    pub fn frequency_at(&self, index: usize) -> f64 {
        self.expected_frequency[index]
    }

    pub fn expected_frequency(&self, letter: char) -> Option<f64> {
        self.index_of(letter).map(|i| self.expected_frequency[i])
    }

    /// Case-insensitive position of `c` in the alphabet.
    pub fn index_of(&self, c: char) -> Option<usize> {
        self.letters.position(fold_case(c)?)
    }

    /// Uppercase, alphabet-filtered projection used for estimation only.
    pub fn clean(&self, text: &str) -> Vec<char> {
        text.chars()
            .filter_map(fold_case)
            .filter(|c| self.letters.contains(*c))
            .collect()
    }
}

/// Picks the Cyrillic profile when any character of the text is a Cyrillic
/// letter (rare letter always recognised), otherwise the Latin one.
pub fn detect_profile(text: &str, include_rare_letter: bool) -> &'static AlphabetProfile {
    let cyrillic = text
        .chars()
        .filter_map(fold_case)
        .any(|c| CYRILLIC_UPPER_FULL.contains(c));
    if cyrillic {
        AlphabetProfile::cyrillic(include_rare_letter)
    } else {
        AlphabetProfile::latin()
    }
}
