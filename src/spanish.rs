//! Tokenization of raw Spanish text
//!
//! The pipeline has two layers:
//! 1. The scanner lexes the input line by line and tags tokens that need
//!    post-splitting (contractions, verb+clitic clusters, hyphenated
//!    compounds).
//! 2. The tokenizer pulls raw tokens from the scanner and rewrites marked
//!    ones into ordered sub-token sequences, buffering the tail of each
//!    split so the caller still receives exactly one token per call.
//!
//! Which splitting rules run is controlled by a comma-separated option
//! string (`splitAll`, `splitCompounds`, `splitVerbs`, `splitContractions`);
//! unrecognized keys pass through to the scanner.

pub mod options;
pub mod scanner;
pub mod splitting;
pub mod tokenizer;
pub mod tokens;
pub mod verbs;

pub use options::TokenizerOptions;
pub use scanner::{ScanError, ScannerOptions, SpanishScanner, TokenSource};
pub use tokenizer::{SpanishTokenizer, TokenizerFactory, ANCORA_OPTIONS};
pub use tokens::{SplitMarker, Token, NEWLINE_TOKEN};
