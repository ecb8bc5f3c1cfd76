//! Pull-based tokenizer that rewrites marked tokens into sub-token sequences
//!
//! The tokenizer wraps a raw token source and serves one token per call,
//! fully lazily. Each call works through the same sequence:
//! 1. If the pending buffer holds sub-tokens from an earlier split, emit its
//!    front element immediately.
//! 2. Otherwise pull the next raw token; end of stream propagates as-is.
//! 3. Tokens whose surface word was normalized down to zero length are
//!    discarded in a loop and never reach the caller.
//! 4. An unmarked token, or a marked token whose splitting rule is disabled,
//!    is returned unchanged with its marker cleared.
//! 5. A marked token with its rule enabled is handed to that rule; the first
//!    replacement token is returned right away and the rest are buffered, in
//!    order, ahead of any further pull from the source.
//!
//! Sub-tokens coming back out of the buffer are never re-dispatched: their
//! markers were cleared when they were derived.
//!
//! A tokenizer instance is single-consumer and not reentrant. Independent
//! instances over independent inputs are fully isolated.

use crate::spanish::options::TokenizerOptions;
use crate::spanish::scanner::{ScanError, ScannerOptions, SpanishScanner, TokenSource};
use crate::spanish::splitting;
use crate::spanish::tokens::{SplitMarker, Token};
use log::debug;
use std::collections::VecDeque;
use std::io::BufRead;

/// Options replicating the AnCora corpus tokenization conventions
pub const ANCORA_OPTIONS: &str =
    "ptb3Ellipsis=true,normalizeParentheses=true,ptb3Dashes=false,splitAll=true";

/// Lazy pull tokenizer over a raw token source
pub struct SpanishTokenizer<S> {
    scanner: S,
    split_compounds: bool,
    split_verbs: bool,
    split_contractions: bool,
    split_any: bool,
    /// Sub-tokens awaiting emission, FIFO. Only exists when at least one
    /// splitting rule is enabled.
    buffer: Option<VecDeque<Token>>,
}

impl<S: TokenSource> SpanishTokenizer<S> {
    /// Wrap a token source. The splitting flags are fixed for the lifetime
    /// of the instance.
    pub fn new(scanner: S, options: &TokenizerOptions) -> Self {
        let split_any = options.split_any();
        SpanishTokenizer {
            scanner,
            split_compounds: options.split_compounds,
            split_verbs: options.split_verbs,
            split_contractions: options.split_contractions,
            split_any,
            buffer: split_any.then(VecDeque::new),
        }
    }

    /// Produce the next corrected token, or `None` at end of stream
    pub fn next_token(&mut self) -> Result<Option<Token>, ScanError> {
        loop {
            // Buffered sub-tokens have already been through dispatch
            if let Some(tok) = self.buffer.as_mut().and_then(|b| b.pop_front()) {
                return Ok(Some(tok));
            }

            let Some(tok) = self.scanner.next_raw()? else {
                return Ok(None);
            };

            // Orthographic normalization can obliterate a token entirely
            if tok.is_empty() {
                continue;
            }

            if !self.split_any || tok.marker() == SplitMarker::None {
                return Ok(Some(tok.unmarked()));
            }

            let parts = match tok.marker() {
                SplitMarker::Contraction if self.split_contractions => {
                    splitting::split_contraction(&tok)
                }
                SplitMarker::VerbPronoun if self.split_verbs => splitting::split_verb(&tok),
                SplitMarker::Compound if self.split_compounds => splitting::split_compound(&tok),
                _ => return Ok(Some(tok.unmarked())),
            };
            debug!(
                "rewrote {:?} token '{}' into {} sub-tokens",
                tok.marker(),
                tok.word_text(),
                parts.len()
            );

            let mut parts = parts.into_iter();
            match parts.next() {
                Some(first) => {
                    if let Some(buffer) = self.buffer.as_mut() {
                        buffer.extend(parts);
                    }
                    return Ok(Some(first));
                }
                // Splitting rules never return an empty sequence; fall back
                // to pass-through rather than dropping the token
                None => return Ok(Some(tok.unmarked())),
            }
        }
    }
}

impl<S: TokenSource> Iterator for SpanishTokenizer<S> {
    type Item = Result<Token, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}

/// Builds tokenizers over readers, carrying accumulated options.
///
/// The factory can be reconfigured between instance creations; a tokenizer
/// keeps the flags it was created with.
#[derive(Debug, Clone, Default)]
pub struct TokenizerFactory {
    options: TokenizerOptions,
}

impl TokenizerFactory {
    pub fn new() -> Self {
        TokenizerFactory::default()
    }

    /// Factory preconfigured for the AnCora tokenization scheme
    pub fn ancora() -> Self {
        let mut factory = TokenizerFactory::new();
        factory.set_options(ANCORA_OPTIONS);
        factory
    }

    /// Apply an option string on top of the accumulated options
    pub fn set_options(&mut self, options: &str) {
        self.options.set_options(options);
    }

    pub fn options(&self) -> &TokenizerOptions {
        &self.options
    }

    /// Build a tokenizer over a reader with the current options
    pub fn tokenizer<R: BufRead>(&self, reader: R) -> SpanishTokenizer<SpanishScanner<R>> {
        let scanner_options = ScannerOptions::from_properties(self.options.scanner_properties());
        SpanishTokenizer::new(SpanishScanner::new(reader, scanner_options), &self.options)
    }
}
