//! End-to-end tokenization scenarios over the full scanner + tokenizer
//! pipeline, driven through the factory exactly the way CLI callers use it.

use ancora::spanish::{SplitMarker, Token, TokenizerFactory, NEWLINE_TOKEN};
use rstest::rstest;
use std::io::Cursor;

fn tokenize(options: &str, input: &str) -> Vec<Token> {
    let mut factory = TokenizerFactory::new();
    factory.set_options(options);
    let mut tokenizer = factory.tokenizer(Cursor::new(input.to_string()));
    let mut out = Vec::new();
    while let Some(tok) = tokenizer.next_token().expect("in-memory input") {
        out.push(tok);
    }
    out
}

fn words(tokens: &[Token]) -> Vec<&str> {
    tokens.iter().map(|t| t.word_text()).collect()
}

#[rstest]
#[case::contraction("splitContractions", "del", vec!["de", "el"])]
#[case::contraction_caps("splitContractions", "DEL", vec!["DE", "EL"])]
#[case::contraction_al("splitContractions", "al", vec!["a", "el"])]
#[case::compound("splitCompounds", "punto-final", vec!["punto", "-", "final"])]
#[case::verb("splitVerbs", "cantarla", vec!["cantar", "la"])]
#[case::verb_two_clitics("splitVerbs", "dándoselo", vec!["dando", "se", "lo"])]
#[case::verb_no_decomposition("splitVerbs", "canta", vec!["canta"])]
#[case::disabled_contraction("splitCompounds", "del", vec!["del"])]
#[case::everything(
    "splitAll",
    "El perro del vecino corre al parque",
    vec!["El", "perro", "de", "el", "vecino", "corre", "a", "el", "parque"]
)]
#[case::override_disables_verbs(
    "splitAll,splitVerbs=false",
    "quiero cantarla del campo",
    vec!["quiero", "cantarla", "de", "el", "campo"]
)]
#[case::no_options("", "del punto-final cantarla", vec!["del", "punto-final", "cantarla"])]
fn scenario(#[case] options: &str, #[case] input: &str, #[case] expected: Vec<&str>) {
    assert_eq!(words(&tokenize(options, input)), expected);
}

#[test]
fn test_emitted_tokens_carry_no_marker() {
    let tokens = tokenize("splitAll", "del punto-final cantarla canta");
    assert!(tokens.iter().all(|t| t.marker() == SplitMarker::None));
}

#[test]
fn test_punctuation_not_split() {
    let tokens = tokenize("splitAll", "hola, del.");
    assert_eq!(words(&tokens), vec!["hola", ",", "de", "el", "."]);
}

#[test]
fn test_newline_tokens_interleave_correctly() {
    let tokens = tokenize("splitAll,tokenizeNLs", "del campo\nal mar\n");
    assert_eq!(
        words(&tokens),
        vec!["de", "el", "campo", NEWLINE_TOKEN, "a", "el", "mar", NEWLINE_TOKEN]
    );
}

#[test]
fn test_obliterated_tokens_are_dropped() {
    // A token consisting only of a soft hyphen normalizes to a zero-length
    // word and never reaches the caller
    let tokens = tokenize("splitAll", "uno \u{00AD} dos");
    assert_eq!(words(&tokens), vec!["uno", "dos"]);
}

#[test]
fn test_ancora_factory_end_to_end() {
    let factory = TokenizerFactory::ancora();
    let mut tokenizer = factory.tokenizer(Cursor::new("del punto-final".to_string()));
    let mut out = Vec::new();
    while let Some(tok) = tokenizer.next_token().expect("in-memory input") {
        out.push(tok);
    }
    assert_eq!(words(&out), vec!["de", "el", "punto", "-", "final"]);
}

#[test]
fn test_lower_case_option_lowers_values() {
    let tokens = tokenize("lowerCase", "HOLA Mundo");
    let values: Vec<&str> = tokens.iter().map(|t| t.value()).collect();
    assert_eq!(values, vec!["hola", "mundo"]);
    // The surface word keeps its casing; only the canonical value changes
    assert_eq!(words(&tokens), vec!["HOLA", "Mundo"]);
}

#[test]
fn test_sub_tokens_keep_source_line() {
    let tokens = tokenize("splitAll", "uno\ndel\n");
    let del_parts: Vec<&Token> = tokens
        .iter()
        .filter(|t| t.word_text() == "de" || t.word_text() == "el")
        .collect();
    assert_eq!(del_parts.len(), 2);
    assert!(del_parts.iter().all(|t| t.line() == 2));
}
