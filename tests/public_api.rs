//! Behaviour of the public analysis API on small, fixed inputs.

use cryptanalysis_core::core::alphabet::Script;
use cryptanalysis_core::core::fixed_substitution::mirror_text;
use cryptanalysis_core::core::rotation::rotate_text;
use cryptanalysis_core::core::statistics::{chi_squared, index_of_coincidence};
use cryptanalysis_core::error::CryptanalysisError;
use cryptanalysis_core::{
    detect_profile, AlphabetProfile, AnalysisConfig, CryptanalysisEngine, Direction, Method,
    Parameter,
};

#[test]
fn caesar_hello_world_is_among_rotations() {
    let candidates = CryptanalysisEngine::new()
        .analyze("KHOOR ZRUOG", false)
        .unwrap();
    let rotations: Vec<_> = candidates.by_method(Method::Rotation).collect();
    assert_eq!(rotations.len(), 32);
    assert_eq!(rotations[3].parameter, Parameter::Shift(3));
    assert_eq!(rotations[3].plaintext, "HELLO WORLD");
    assert_eq!(rotations[0].plaintext, "KHOOR ZRUOG");
}

#[test]
fn atbash_hello() {
    assert_eq!(mirror_text("HELLO", true), "SVOOL");
    let candidates = CryptanalysisEngine::new().analyze("HELLO", true).unwrap();
    let atbash: Vec<_> = candidates.by_method(Method::FixedSubstitution).collect();
    assert_eq!(atbash.len(), 1);
    assert_eq!(atbash[0].plaintext, "SVOOL");
    assert_eq!(atbash[0].parameter, Parameter::None);
}

#[test]
fn empty_ciphertext_fails_all_methods() {
    let err = CryptanalysisEngine::new().analyze("", true).unwrap_err();
    match err {
        CryptanalysisError::AllMethodsFailed { failures } => assert_eq!(failures.len(), 3),
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn punctuation_only_still_yields_fixed_candidates() {
    let candidates = CryptanalysisEngine::new().analyze("123 ...", true).unwrap();
    assert_eq!(candidates.by_method(Method::Polyalphabetic).count(), 0);
    assert!(candidates.iter().all(|c| c.plaintext == "123 ..."));
}

#[test]
fn output_is_deterministic() {
    let engine = CryptanalysisEngine::new();
    let sequential = CryptanalysisEngine::with_config(AnalysisConfig {
        parallel: false,
        ..AnalysisConfig::default()
    })
    .unwrap();
    let text = "Ymnx nx f xjhwjy rjxxflj, Рйцдзх!";
    let first = engine.analyze(text, true).unwrap();
    assert_eq!(first, engine.analyze(text, true).unwrap());
    assert_eq!(first, sequential.analyze(text, true).unwrap());
}

#[test]
fn key_length_candidate_count_follows_config() {
    let engine = CryptanalysisEngine::with_config(AnalysisConfig {
        key_length_candidates: 2,
        ..AnalysisConfig::default()
    })
    .unwrap();
    let candidates = engine.analyze("Lxfopv ef rnhr, lxfopv ef rnhr", true).unwrap();
    assert_eq!(candidates.by_method(Method::Polyalphabetic).count(), 2);
}

#[test]
fn statistics_edge_cases() {
    assert_eq!(index_of_coincidence(&['E'; 7]), 1.0);
    assert_eq!(index_of_coincidence(&['E']), 0.0);
    assert!(chi_squared(&[], AlphabetProfile::latin()).is_infinite());
    assert!(chi_squared(&['Ж', 'Щ'], AlphabetProfile::cyrillic(false)) > 0.0);
}

#[test]
fn detection_is_case_insensitive() {
    assert_eq!(detect_profile("abc ЖЖ", true).script(), Script::Cyrillic);
    assert_eq!(detect_profile("abc жж", false).len(), 32);
    assert_eq!(detect_profile("ABC", false).script(), Script::Latin);
}

#[test]
fn rotation_round_trips_mixed_scripts() {
    let text = "Hello, мир! Ёлка 2024";
    for shift in 0..33 {
        let back = rotate_text(text, shift, Direction::Backward, true);
        assert_eq!(rotate_text(&back, shift, Direction::Forward, true), text);
    }
}

#[test]
fn atbash_leaves_foreign_characters_alone() {
    let text = "ñ ü 中文 42 ¿?";
    assert_eq!(mirror_text(text, true), text);
}

#[test]
fn framed_request_round_trips_through_a_report() {
    use cryptanalysis_core::persistence::{load_report, save_report, ReportFormat};
    use cryptanalysis_core::request::{handle_request, AnalysisResponse};

    let engine = CryptanalysisEngine::new();
    let response = handle_request(&engine, None, r#"{"text": "Khoor, Zruog!0"}"#);
    let AnalysisResponse::Success { candidates, chosen } = response else {
        panic!("request failed");
    };
    assert!(chosen.is_none());
    assert_eq!(candidates.by_method(Method::Rotation).count(), 32);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("khoor.bin");
    save_report(&candidates, &path, ReportFormat::Bincode).unwrap();
    assert_eq!(load_report(&path, ReportFormat::Bincode).unwrap(), candidates);
}
