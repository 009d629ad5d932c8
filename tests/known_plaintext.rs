//! Known-plaintext recovery: encrypt long natural-language passages with a
//! known key and check the analyser finds that key and plaintext again.

use cryptanalysis_core::core::polyalphabetic::{self, recover_key, PolyalphabeticKey};
use cryptanalysis_core::core::key_length::estimate_key_lengths;
use cryptanalysis_core::{AlphabetProfile, CryptanalysisEngine, Method, Parameter};

const ENGLISH: &str = "It was a bright cold day in April, and the clocks were striking thirteen. \
Winston Smith, his chin nuzzled into his breast in an effort to escape the vile wind, \
slipped quickly through the glass doors of Victory Mansions, though not quickly enough \
to prevent a swirl of gritty dust from entering along with him. The hallway smelt of \
boiled cabbage and old rag mats. At one end of it a coloured poster, too large for \
indoor display, had been tacked to the wall. It depicted simply an enormous face, more \
than a metre wide: the face of a man of about forty-five, with a heavy black moustache \
and ruggedly handsome features. Winston made for the stairs. It was no use trying the \
lift. Even at the best of times it was seldom working, and at present the electric \
current was cut off during daylight hours. It was part of the economy drive in \
preparation for Hate Week.";

const RUSSIAN: &str = "Все счастливые семьи похожи друг на друга, каждая несчастливая семья несчастлива по-своему. \
Всё смешалось в доме Облонских. Жена узнала, что муж был в связи с бывшею в их доме \
француженкою-гувернанткой, и объявила мужу, что не может жить с ним в одном доме. \
Положение это продолжалось уже третий день и мучительно чувствовалось и самими супругами, \
и всеми членами семьи, и домочадцами. Все члены семьи и домочадцы чувствовали, что нет \
смысла в их сожительстве и что на каждом постоялом дворе случайно сошедшиеся люди более \
связаны между собой, чем они, члены семьи и домочадцы Облонских. Жена не выходила из своих \
комнат, мужа третий день не было дома. Дети бегали по всему дому, как потерянные; \
англичанка поссорилась с экономкой и написала записку приятельнице, прося приискать ей \
новое место; повар ушел вчера со двора, во время самого обеда; черная кухарка и кучер \
просили расчета.";

fn recovered(ciphertext: &str, key_length: usize, profile: &AlphabetProfile) -> String {
    let cleaned = profile.clean(ciphertext);
    recover_key(&cleaned, key_length, profile).unwrap().to_string()
}

#[test]
fn latin_keys_are_recovered() {
    let profile = AlphabetProfile::latin();
    for key in ["LEMON", "CIPHER", "KEY", "SECRETS"] {
        let parsed = PolyalphabeticKey::parse(key, profile).unwrap();
        let ciphertext = polyalphabetic::encrypt(ENGLISH, &parsed, profile);
        assert_eq!(recovered(&ciphertext, key.len(), profile), key);
    }
}

#[test]
fn cyrillic_keys_are_recovered_with_and_without_rare_letter() {
    for include_rare_letter in [true, false] {
        let profile = AlphabetProfile::cyrillic(include_rare_letter);
        for key in ["КЛЮЧ", "ШИФР", "ЗИМА"] {
            let parsed = PolyalphabeticKey::parse(key, profile).unwrap();
            let ciphertext = polyalphabetic::encrypt(RUSSIAN, &parsed, profile);
            assert_eq!(recovered(&ciphertext, 4, profile), key);
        }
    }
}

#[test]
fn true_key_length_is_among_top_five() {
    let profile = AlphabetProfile::latin();
    let key = PolyalphabeticKey::parse("LEMON", profile).unwrap();
    let ciphertext = polyalphabetic::encrypt(ENGLISH, &key, profile);
    let ranked = estimate_key_lengths(&profile.clean(&ciphertext), profile, 20);
    assert!(ranked.iter().take(5).any(|c| c.length == 5));
}

#[test]
fn analysis_yields_the_original_plaintext() {
    let engine = CryptanalysisEngine::new();
    let profile = AlphabetProfile::latin();
    let key = PolyalphabeticKey::parse("CIPHER", profile).unwrap();
    let ciphertext = polyalphabetic::encrypt(ENGLISH, &key, profile);

    let candidates = engine.analyze(&ciphertext, true).unwrap();
    let polyalphabetic: Vec<_> = candidates.by_method(Method::Polyalphabetic).collect();
    assert_eq!(polyalphabetic.len(), 5);
    assert!(polyalphabetic.iter().any(|c| c.plaintext == ENGLISH));
    assert!(polyalphabetic
        .iter()
        .any(|c| c.parameter == Parameter::Key("CIPHER".to_string())));
}

#[test]
fn cyrillic_analysis_yields_the_original_plaintext() {
    let engine = CryptanalysisEngine::new();
    let profile = AlphabetProfile::cyrillic(true);
    let key = PolyalphabeticKey::parse("ключ", profile).unwrap();
    let ciphertext = polyalphabetic::encrypt(RUSSIAN, &key, profile);

    let candidates = engine.analyze(&ciphertext, true).unwrap();
    assert!(candidates
        .by_method(Method::Polyalphabetic)
        .any(|c| c.plaintext == RUSSIAN));
    assert_eq!(candidates.by_method(Method::Rotation).count(), 33);
}

#[test]
fn decryption_preserves_layout_and_case() {
    let profile = AlphabetProfile::latin();
    let key = PolyalphabeticKey::parse("SECRETS", profile).unwrap();
    let ciphertext = polyalphabetic::encrypt(ENGLISH, &key, profile);
    let plain = polyalphabetic::decrypt(&ciphertext, &key, profile);
    assert_eq!(plain, ENGLISH);
    for (c, p) in ciphertext.chars().zip(ENGLISH.chars()) {
        if p.is_ascii_alphabetic() {
            assert_eq!(c.is_uppercase(), p.is_uppercase());
        } else {
            assert_eq!(c, p);
        }
    }
}
