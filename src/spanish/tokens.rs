//! Token record for the Spanish tokenizer
//!
//! A `Token` carries three text fields: the surface `word` used for matching,
//! the canonical `value` (normally equal to the word) and the `original_text`
//! as it appeared in the input before orthographic normalization. The scanner
//! additionally tags each token with a `SplitMarker` telling the tokenizer
//! which post-splitting rule, if any, applies to it.
//!
//! Tokens are plain values. Sub-tokens produced by a splitting rule are built
//! with [`Token::derive`], which copies every field of the source token,
//! replaces the three text fields and clears the marker. No token is ever
//! mutated after it has been handed to the tokenizer's pending buffer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel word emitted for a newline when the scanner runs with the
/// `tokenizeNLs` property enabled.
pub const NEWLINE_TOKEN: &str = "*NL*";

/// Tag assigned by the scanner to tokens that a splitting rule should rewrite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SplitMarker {
    /// No post-splitting applies
    #[default]
    None,
    /// Fused preposition + article form (del, al)
    Contraction,
    /// Verb form with attached clitic pronouns
    VerbPronoun,
    /// Hyphenated or otherwise fused multiword compound
    Compound,
}

/// A single token produced by the scanner or derived by a splitting rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    word: String,
    value: String,
    original_text: String,
    marker: SplitMarker,
    /// 1-based input line the token was scanned from. Sub-tokens inherit the
    /// line of their source token unchanged.
    line: usize,
}

impl Token {
    /// Create a raw token as the scanner emits it
    pub fn raw(
        word: impl Into<String>,
        original_text: impl Into<String>,
        marker: SplitMarker,
        line: usize,
    ) -> Self {
        let word = word.into();
        Token {
            value: word.clone(),
            word,
            original_text: original_text.into(),
            marker,
            line,
        }
    }

    /// Create an unmarked token whose three text fields are all equal
    pub fn word(text: impl Into<String>) -> Self {
        let text = text.into();
        Token::raw(text.clone(), text, SplitMarker::None, 0)
    }

    /// Surface text used for matching
    pub fn word_text(&self) -> &str {
        &self.word
    }

    /// Canonical text, normally equal to the word
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Text before orthographic normalization
    pub fn original_text(&self) -> &str {
        &self.original_text
    }

    pub fn marker(&self) -> SplitMarker {
        self.marker
    }

    pub fn line(&self) -> usize {
        self.line
    }

    /// True when normalization obliterated the surface text entirely
    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    pub fn is_newline(&self) -> bool {
        self.word == NEWLINE_TOKEN
    }

    /// Build a sub-token: copy of `self` with all three text fields replaced
    /// by `part` and the marker cleared
    pub fn derive(&self, part: &str) -> Token {
        Token {
            word: part.to_string(),
            value: part.to_string(),
            original_text: part.to_string(),
            marker: SplitMarker::None,
            line: self.line,
        }
    }

    /// Copy of `self` with the marker cleared and the text untouched
    pub fn cleared(&self) -> Token {
        Token {
            marker: SplitMarker::None,
            ..self.clone()
        }
    }

    /// Consume the token, clearing its marker
    pub fn unmarked(mut self) -> Token {
        self.marker = SplitMarker::None;
        self
    }

    /// Consume the token, lowercasing its canonical value. The surface word
    /// and the original text keep their casing.
    pub fn lower_value(mut self) -> Token {
        self.value = self.value.to_lowercase();
        self
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.word)
    }
}
