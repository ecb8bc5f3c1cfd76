//! Splitting rules applied to marked tokens
//!
//! Each rule consumes one marked token and produces the ordered, non-empty
//! sequence of tokens that replaces it. Sub-tokens are built with
//! [`Token::derive`], so they share all scanner metadata with the source
//! token and carry no marker of their own.

use crate::spanish::tokens::Token;
use crate::spanish::verbs;

/// Split a fused preposition+article form into its two parts.
///
/// The stem is the original text minus its final character; the article is
/// lowercase `el` when the final character is lowercase and `EL` otherwise.
/// Inferring whole-word capitalization from the single trailing character is
/// a known heuristic and kept as-is.
pub fn split_contraction(token: &Token) -> Vec<Token> {
    let text = token.original_text();
    let mut chars = text.chars();
    let Some(last) = chars.next_back() else {
        return vec![token.cleared()];
    };
    let stem: String = chars.collect();
    let article = if last.is_lowercase() { "el" } else { "EL" };
    vec![token.derive(&stem), token.derive(article)]
}

/// Split a verb form with attached clitic pronouns: stem first, then each
/// pronoun in surface order. A form that does not decompose passes through
/// with its marker cleared.
pub fn split_verb(token: &Token) -> Vec<Token> {
    match verbs::separate_pronouns(token.word_text()) {
        None => vec![token.cleared()],
        Some((stem, pronouns)) => {
            let mut parts = Vec::with_capacity(1 + pronouns.len());
            parts.push(token.derive(&stem));
            parts.extend(pronouns.iter().map(|p| token.derive(p)));
            parts
        }
    }
}

/// Split a multiword compound on its hyphens. Every hyphen gets padded with
/// whitespace first, so a hyphen that joined two words becomes a token of
/// its own.
pub fn split_compound(token: &Token) -> Vec<Token> {
    let padded = token.word_text().replace('-', " - ");
    let parts: Vec<Token> = padded
        .split_whitespace()
        .map(|part| token.derive(part))
        .collect();
    if parts.is_empty() {
        // A compound-marked token always has a non-empty word, but the
        // replacement sequence must never be empty either
        return vec![token.cleared()];
    }
    parts
}
