use super::{deaccent, Normalizer};
use crate::nlp::Language;

#[test]
fn test_empty_input_yields_no_tokens() {
    let norm = Normalizer::new(Language::Russian);
    assert!(norm.tokenize("").is_empty());
    assert!(norm.tokenize("  1.2.3 ) — ").is_empty());
}

#[test]
fn test_stopwords_and_short_tokens_dropped() {
    let norm = Normalizer::new(Language::Russian);
    let tokens = norm.tokenize("Требования к системе и для");
    assert_eq!(tokens.len(), 2, "Only content words survive: {tokens:?}");
}

#[test]
fn test_digits_split_tokens() {
    let norm = Normalizer::new(Language::Russian);
    assert_eq!(norm.tokenize("1.1 Общие"), norm.tokenize("Общие"));
}

#[test]
fn test_case_and_yo_folding() {
    let norm = Normalizer::new(Language::Russian);
    assert_eq!(norm.tokenize("УЧЁТА"), norm.tokenize("учета"));
}

#[test]
fn test_overlong_tokens_dropped() {
    let norm = Normalizer::new(Language::English);
    let long = "a".repeat(51);
    assert!(norm.tokenize(&long).is_empty());
}

#[test]
fn test_deaccent_map() {
    assert_eq!(deaccent('й'), 'и');
    assert_eq!(deaccent('é'), 'e');
    assert_eq!(deaccent('ж'), 'ж');
}
