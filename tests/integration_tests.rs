//! End-to-end tests over the public API: generation, formatting, and
//! translation working together.

use std::collections::BTreeSet;

use phoneword::prelude::*;

fn keypad() -> LetterMap {
    LetterMap::standard()
}

fn kars_kids_index() -> VocabularyIndex {
    VocabularyIndex::build(["kars", "kids"], &keypad()).unwrap()
}

#[test]
fn us_number_with_kars_and_kids() {
    let index = kars_kids_index();
    let out = Wordifier::new(&index)
        .wordify("1-877-527-7454", &NumberTemplate::us())
        .unwrap();

    assert!(out.contains("1-877-527-7454"));
    // KARS dials 5277, covering digits 4..8 of the base.
    assert!(out.contains("1-877-KARS-454"));
    // KIDS dials 5437, which this number does not contain.
    assert_eq!(out.len(), 2);
}

#[test]
fn vanity_number_renders_kars_4_kids() {
    // The charity line dials twelve base digits; the two digits past the
    // ten-digit US base are ignored by the switch but still wordify.
    let index = kars_kids_index();
    let template = NumberTemplate::parse("0-000-000-000000").unwrap();
    let out = Wordifier::new(&index)
        .wordify("1-877-527-745437", &template)
        .unwrap();

    assert!(out.contains("1-877-KARS-4-KIDS"));
    assert!(out.contains("1-877-527-745437"));
}

#[test]
fn kars_4_kids_translates_to_us_number() {
    let out = Translator::new(&keypad())
        .translate_with("1-877-KARS-4-KIDS", &NumberTemplate::us())
        .unwrap();
    assert_eq!(out, "1-877-527-7454");
}

#[test]
fn every_rendering_translates_back() {
    let index = kars_kids_index();
    let template = NumberTemplate::parse("0-000-000-000000").unwrap();
    let number = "1-877-527-745437";
    let keypad = keypad();
    let translator = Translator::new(&keypad);

    for rendering in Wordifier::new(&index).wordify(number, &template).unwrap() {
        let back = translator.translate_with(&rendering, &template).unwrap();
        assert_eq!(back, number, "rendering {rendering} did not round-trip");
    }
}

#[test]
fn renderings_are_uppercase_with_known_words() {
    let vocab: BTreeSet<&str> = ["kars", "kids", "bike", "cat"].into();
    let index = VocabularyIndex::build(vocab.iter().copied(), &keypad()).unwrap();
    let out = Wordifier::new(&index)
        .wordify("1-877-527-7454", &NumberTemplate::us())
        .unwrap();

    for rendering in &out {
        assert!(!rendering.chars().any(|c| c.is_ascii_lowercase()));
        for segment in rendering.split('-') {
            if !segment.is_empty() && segment.chars().all(|c| c.is_ascii_uppercase()) {
                assert!(
                    vocab.contains(segment.to_lowercase().as_str()),
                    "letter run {segment} is not a vocabulary word"
                );
            }
        }
    }
}

#[test]
fn index_reuse_across_numbers() {
    let index = VocabularyIndex::build(["bike"], &keypad()).unwrap();
    let engine = Wordifier::new(&index);
    let template = NumberTemplate::parse("0-00000").unwrap();

    // bike dials 2453.
    let with_match = engine.wordify("1-24533", &template).unwrap();
    assert!(with_match.contains("1-BIKE-3"));

    let without_match = engine.wordify("1-99999", &template).unwrap();
    assert_eq!(without_match.len(), 1);
    assert!(without_match.contains("1-99999"));
}

#[test]
fn deterministic_across_calls() {
    let index = VocabularyIndex::build(["kars", "raps", "pars"], &keypad()).unwrap();
    let engine = Wordifier::new(&index);
    let first = engine
        .wordify("1-877-527-7454", &NumberTemplate::us())
        .unwrap();
    let second = engine
        .wordify("1-877-527-7454", &NumberTemplate::us())
        .unwrap();
    assert_eq!(first, second);
}

#[test]
fn empty_inputs_are_not_errors() {
    let empty = VocabularyIndex::build(std::iter::empty::<&str>(), &keypad()).unwrap();
    let out = Wordifier::new(&empty)
        .wordify("1-877-527-7454", &NumberTemplate::us())
        .unwrap();
    assert!(out.is_empty());

    let index = kars_kids_index();
    let out = Wordifier::new(&index)
        .wordify("", &NumberTemplate::parse("").unwrap())
        .unwrap();
    assert!(out.is_empty());
}

#[test]
fn whitespace_is_stripped_before_validation() {
    let index = kars_kids_index();
    let out = Wordifier::new(&index)
        .wordify(" 1-877-527-7454 ", &NumberTemplate::us())
        .unwrap();
    assert!(out.contains("1-877-KARS-454"));
}

#[test]
fn translation_canonicalizes_separator_positions() {
    let out = Translator::new(&keypad())
        .translate_with("1877-527-74-54", &NumberTemplate::us())
        .unwrap();
    assert_eq!(out, "1-877-527-7454");
}
