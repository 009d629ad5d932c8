// src/core/types.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// The cipher model that produced a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    /// Repeating-key (Vigenère-style) substitution with a recovered key.
    Polyalphabetic,
    /// Reversed-alphabet (Atbash) substitution.
    FixedSubstitution,
    /// Monoalphabetic shift (Caesar), one candidate per rotation.
    Rotation,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Polyalphabetic => write!(f, "Vigenere"),
            Method::FixedSubstitution => write!(f, "Atbash"),
            Method::Rotation => write!(f, "Caesar"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Parameter {
    Key(String),
    Shift(usize),
    None,
}

/// One decryption attempt. Created by exactly one cipher method, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub method: Method,
    pub parameter: Parameter,
    pub plaintext: String,
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.parameter {
            Parameter::Key(key) => write!(f, "{} key: {} - {}", self.method, key, self.plaintext),
            Parameter::Shift(shift) => write!(f, "{} shift {}: {}", self.method, shift, self.plaintext),
            Parameter::None => write!(f, "{}: {}", self.method, self.plaintext),
        }
    }
}

/// Ordered candidates: method order, then key-length rank (polyalphabetic)
/// or ascending shift (rotation). Never deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandidateSet(Vec<Candidate>);

impl CandidateSet {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Candidate> {
        self.0.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Candidate> {
        self.0.get(index)
    }

    pub fn by_method(&self, method: Method) -> impl Iterator<Item = &Candidate> {
        self.0.iter().filter(move |c| c.method == method)
    }

    pub(crate) fn extend(&mut self, candidates: Vec<Candidate>) {
        self.0.extend(candidates);
    }

    pub fn into_vec(self) -> Vec<Candidate> {
        self.0
    }
}

impl From<Vec<Candidate>> for CandidateSet {
    fn from(candidates: Vec<Candidate>) -> Self {
        Self(candidates)
    }
}

impl IntoIterator for CandidateSet {
    type Item = Candidate;
    type IntoIter = std::vec::IntoIter<Candidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = &'a Candidate;
    type IntoIter = std::slice::Iter<'a, Candidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
