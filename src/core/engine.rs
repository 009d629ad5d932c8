// File: src/core/engine.rs
use crate::config::AnalysisConfig;
use crate::core::alphabet::detect_profile;
use crate::core::fixed_substitution::fixed_substitution_candidates;
use crate::core::polyalphabetic::polyalphabetic_candidates;
use crate::core::rotation::rotation_candidates;
use crate::core::types::{Candidate, CandidateSet, Method};
use crate::error::{CryptanalysisError, MethodFailure, Result};
use log::{debug, warn};

/// Outcome of one cipher method, kept apart so one failure cannot abort the others.
#[derive(Debug)]
pub struct MethodReport {
    pub method: Method,
    pub outcome: Result<Vec<Candidate>>,
}

// The aggregator: detects the alphabet once, runs every cipher model and
// merges their candidates in a fixed order.
#[derive(Debug, Clone, Default)]
pub struct CryptanalysisEngine {
    config: AnalysisConfig,
}

impl CryptanalysisEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: AnalysisConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Runs the polyalphabetic, fixed-substitution and rotation methods in
    /// that order and reports each outcome separately.
    pub fn run_methods(&self, ciphertext: &str, include_rare_letter: bool) -> Vec<MethodReport> {
        // 1. Detect the alphabet once for the statistical method
        let profile = detect_profile(ciphertext, include_rare_letter);
        debug!(
            "detected {:?} profile ({} letters)",
            profile.script(),
            profile.len()
        );

        // 2. Run every method in isolation
        vec![
            MethodReport {
                method: Method::Polyalphabetic,
                outcome: polyalphabetic_candidates(ciphertext, profile, &self.config),
            },
            MethodReport {
                method: Method::FixedSubstitution,
                outcome: fixed_substitution_candidates(ciphertext, include_rare_letter),
            },
            MethodReport {
                method: Method::Rotation,
                outcome: rotation_candidates(ciphertext, include_rare_letter, self.config.parallel),
            },
        ]
    }

    /// Produces the full, order-stable candidate set for `ciphertext`.
    /// Fails only when every method failed.
    pub fn analyze(&self, ciphertext: &str, include_rare_letter: bool) -> Result<CandidateSet> {
        let mut candidates = CandidateSet::new();
        let mut failures = Vec::new();

        for report in self.run_methods(ciphertext, include_rare_letter) {
            match report.outcome {
                Ok(produced) => candidates.extend(produced),
                Err(error) => {
                    warn!("{} decryption failed: {}", report.method, error);
                    failures.push(MethodFailure {
                        method: report.method,
                        error,
                    });
                }
            }
        }

        if candidates.is_empty() {
            return Err(CryptanalysisError::AllMethodsFailed { failures });
        }
        debug!(
            "{} candidates, {} method(s) failed",
            candidates.len(),
            failures.len()
        );
        Ok(candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Parameter;

    #[test]
    fn empty_input_fails_every_method() {
        let engine = CryptanalysisEngine::new();
        match engine.analyze("", true) {
            Err(CryptanalysisError::AllMethodsFailed { failures }) => {
                let methods: Vec<Method> = failures.iter().map(|f| f.method).collect();
                assert_eq!(
                    methods,
                    vec![Method::Polyalphabetic, Method::FixedSubstitution, Method::Rotation]
                );
                assert!(matches!(
                    failures[0].error,
                    CryptanalysisError::Estimation { letters: 0 }
                ));
            }
            other => panic!("expected AllMethodsFailed, got {:?}", other),
        }
    }

    #[test]
    fn one_failing_method_does_not_abort_the_others() {
        let engine = CryptanalysisEngine::new();
        // One letter: nothing to estimate, but the fixed transforms still apply.
        let candidates = engine.analyze("A!", true).unwrap();
        assert_eq!(candidates.by_method(Method::Polyalphabetic).count(), 0);
        assert_eq!(candidates.by_method(Method::FixedSubstitution).count(), 1);
        assert_eq!(candidates.by_method(Method::Rotation).count(), 33);
        assert_eq!(candidates.get(0).unwrap().plaintext, "Z!");
    }

    #[test]
    fn methods_are_concatenated_in_order() {
        let engine = CryptanalysisEngine::new();
        let candidates = engine.analyze("Khoor, Zruog!", false).unwrap();
        let methods: Vec<Method> = candidates.iter().map(|c| c.method).collect();
        let first_atbash = methods
            .iter()
            .position(|m| *m == Method::FixedSubstitution)
            .unwrap();
        assert!(methods[..first_atbash]
            .iter()
            .all(|m| *m == Method::Polyalphabetic));
        assert!(methods[first_atbash + 1..]
            .iter()
            .all(|m| *m == Method::Rotation));
        assert!(candidates
            .iter()
            .any(|c| c.parameter == Parameter::Shift(3) && c.plaintext == "Hello, World!"));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = AnalysisConfig {
            max_key_length: 0,
            ..AnalysisConfig::default()
        };
        assert!(CryptanalysisEngine::with_config(config).is_err());
    }
}
