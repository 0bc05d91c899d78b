use super::Scorer;
use crate::nlp::Language;
use proptest::prelude::*;

fn scorer() -> Scorer {
    Scorer::for_language(Language::Russian)
}

#[test]
fn test_empty_input_floor() {
    let s = scorer();
    assert!(s.similarity("", "anything at all").abs() < f64::EPSILON);
    assert!(s.similarity("Общие сведения", "").abs() < f64::EPSILON);
}

#[test]
fn test_reflexive() {
    let s = scorer();
    let score = s.similarity("Требования к надежности", "Требования к надежности");
    assert!((score - 1.0).abs() < 1e-12);
}

#[test]
fn test_numbering_does_not_affect_score() {
    let s = scorer();
    let score = s.similarity("2.1 Требования к надежности", "Требования к надежности");
    assert!((score - 1.0).abs() < 1e-12);
}

#[test]
fn test_partial_overlap() {
    let s = scorer();
    // {требован, систем} vs {требован, надежн}: 1 / sqrt(2 * 2)
    let score = s.similarity("Требования к системе", "Требования к надежности");
    assert!((score - 0.5).abs() < 1e-12, "Expected 0.5, got {score}");
}

#[test]
fn test_repeated_words_do_not_add_weight() {
    let s = scorer();
    let score = s.similarity("система система система", "система");
    assert!((score - 1.0).abs() < 1e-12);
}

#[test]
fn test_unrelated_strings_score_zero() {
    let s = scorer();
    let score = s.similarity("Система предназначена для учёта.", "Общие сведения");
    assert!(score.abs() < f64::EPSILON);
}

proptest! {
    #[test]
    fn prop_symmetric(a in "[а-яa-z ]{0,40}", b in "[а-яa-z ]{0,40}") {
        let s = scorer();
        prop_assert_eq!(s.similarity(&a, &b).to_bits(), s.similarity(&b, &a).to_bits());
    }

    #[test]
    fn prop_bounded(a in "\\PC{0,40}", b in "\\PC{0,40}") {
        let s = scorer();
        let score = s.similarity(&a, &b);
        prop_assert!((0.0..=1.0).contains(&score));
    }

    #[test]
    fn prop_reflexive_when_tokenizable(a in "[а-я]{3,12}( [а-я]{3,12}){0,4}") {
        let s = scorer();
        prop_assume!(!s.token_set(&a).is_empty());
        prop_assert!((s.similarity(&a, &a) - 1.0).abs() < 1e-12);
    }
}
