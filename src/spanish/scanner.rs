//! Lexical scanner producing raw marked tokens from Spanish text
//!
//! The scanner reads one line at a time from any `BufRead`, tokenizes the
//! line with a logos lexer, and classifies each word:
//! - `del` / `al` in any casing are marked [`SplitMarker::Contraction`];
//! - hyphen-joined alphabetic words are marked [`SplitMarker::Compound`];
//! - words that end in what could be a clitic pronoun cluster are marked
//!   [`SplitMarker::VerbPronoun`] (the verb module later decides whether the
//!   word actually decomposes).
//!
//! Orthographic normalization strips soft hyphens and zero-width characters
//! from the surface word. A token made up entirely of such characters ends
//! up with a zero-length word; the tokenizer drops those before they reach
//! the caller.
//!
//! A scanner instance is tied to one reader and is not reentrant. Read
//! failures are fatal to the tokenization session and surface as
//! [`ScanError::Io`].

use crate::spanish::tokens::{SplitMarker, Token, NEWLINE_TOKEN};
use crate::spanish::verbs;
use logos::Logos;
use std::collections::{BTreeMap, VecDeque};
use std::fmt;
use std::io::{self, BufRead};

/// Raw per-line token classes. Whitespace separates tokens and is skipped.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r]+")]
enum RawTok {
    #[regex(r"\p{L}+(?:-\p{L}+)+", priority = 4)]
    HyphenCompound,

    #[regex(r"[\p{L}\p{M}\u{00AD}\u{200B}\u{FEFF}]+", priority = 3)]
    Word,

    #[regex(r"[0-9]+(?:[.,][0-9]+)*", priority = 3)]
    Number,

    // Ellipsis kept whole; any other single character stands alone
    #[regex(r"\.\.\.|[^\s]", priority = 1)]
    Punct,
}

/// Error produced when the underlying reader fails mid-session
#[derive(Debug)]
pub enum ScanError {
    Io(io::Error),
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanError::Io(e) => write!(f, "I/O error while reading input: {}", e),
        }
    }
}

impl std::error::Error for ScanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScanError::Io(e) => Some(e),
        }
    }
}

impl From<io::Error> for ScanError {
    fn from(e: io::Error) -> Self {
        ScanError::Io(e)
    }
}

/// Anything that can feed raw marked tokens to the tokenizer
pub trait TokenSource {
    /// Produce the next raw token, or `None` at end of stream
    fn next_raw(&mut self) -> Result<Option<Token>, ScanError>;
}

/// Scanner behavior controlled through the forwarded property set
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScannerOptions {
    /// Emit a `*NL*` token for every newline in the input
    pub tokenize_newlines: bool,
    /// Disable orthographic normalization of surface words
    pub raw_text: bool,
    /// Lowercase the canonical value of every token
    pub lower_case: bool,
}

impl ScannerOptions {
    /// Read the properties the scanner recognizes; unknown keys are ignored
    pub fn from_properties(properties: &BTreeMap<String, String>) -> Self {
        let truthy = |key: &str| {
            properties
                .get(key)
                .map(|v| v.eq_ignore_ascii_case("true"))
                .unwrap_or(false)
        };
        ScannerOptions {
            tokenize_newlines: truthy("tokenizeNLs"),
            raw_text: truthy("rawText"),
            lower_case: truthy("lowerCase"),
        }
    }
}

/// Line-buffered lexical scanner over a reader
pub struct SpanishScanner<R> {
    reader: R,
    options: ScannerOptions,
    pending: VecDeque<Token>,
    line_no: usize,
    at_eof: bool,
}

impl<R: BufRead> SpanishScanner<R> {
    pub fn new(reader: R, options: ScannerOptions) -> Self {
        SpanishScanner {
            reader,
            options,
            pending: VecDeque::new(),
            line_no: 0,
            at_eof: false,
        }
    }

    /// Tokenize one line and queue its tokens
    fn scan_line(&mut self, line: &str, had_newline: bool) {
        let mut lexer = RawTok::lexer(line);
        while let Some(result) = lexer.next() {
            let Ok(raw) = result else { continue };
            let slice = lexer.slice();
            let word = if self.options.raw_text {
                slice.to_string()
            } else {
                normalize(slice)
            };
            let marker = classify(raw, &word);
            let mut token = Token::raw(word, slice, marker, self.line_no);
            if self.options.lower_case {
                token = token.lower_value();
            }
            self.pending.push_back(token);
        }
        if self.options.tokenize_newlines && had_newline {
            self.pending
                .push_back(Token::raw(NEWLINE_TOKEN, "\n", SplitMarker::None, self.line_no));
        }
    }
}

impl<R: BufRead> TokenSource for SpanishScanner<R> {
    fn next_raw(&mut self) -> Result<Option<Token>, ScanError> {
        while self.pending.is_empty() {
            if self.at_eof {
                return Ok(None);
            }
            let mut line = String::new();
            let read = self.reader.read_line(&mut line)?;
            if read == 0 {
                self.at_eof = true;
                return Ok(None);
            }
            self.line_no += 1;
            let had_newline = line.ends_with('\n');
            self.scan_line(line.trim_end_matches(['\n', '\r']), had_newline);
        }
        Ok(self.pending.pop_front())
    }
}

/// Strip characters that orthographic normalization obliterates
fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, '\u{00AD}' | '\u{200B}' | '\u{FEFF}'))
        .collect()
}

fn classify(raw: RawTok, word: &str) -> SplitMarker {
    match raw {
        RawTok::HyphenCompound => SplitMarker::Compound,
        RawTok::Word if word.eq_ignore_ascii_case("del") || word.eq_ignore_ascii_case("al") => {
            SplitMarker::Contraction
        }
        RawTok::Word if verbs::has_attached_pronoun(word) => SplitMarker::VerbPronoun,
        _ => SplitMarker::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn scan_all(input: &str, options: ScannerOptions) -> Vec<Token> {
        let mut scanner = SpanishScanner::new(Cursor::new(input.to_string()), options);
        let mut tokens = Vec::new();
        while let Some(tok) = scanner.next_raw().expect("read from cursor") {
            tokens.push(tok);
        }
        tokens
    }

    fn words(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.word_text()).collect()
    }

    #[test]
    fn test_plain_words() {
        let tokens = scan_all("el gato corre", ScannerOptions::default());
        assert_eq!(words(&tokens), vec!["el", "gato", "corre"]);
        assert!(tokens.iter().all(|t| t.marker() == SplitMarker::None));
    }

    #[test]
    fn test_contractions_marked_any_casing() {
        let tokens = scan_all("del al DEL Al", ScannerOptions::default());
        assert_eq!(tokens.len(), 4);
        for tok in &tokens {
            assert_eq!(tok.marker(), SplitMarker::Contraction, "{}", tok);
        }
    }

    #[test]
    fn test_compound_marked() {
        let tokens = scan_all("punto-final", ScannerOptions::default());
        assert_eq!(words(&tokens), vec!["punto-final"]);
        assert_eq!(tokens[0].marker(), SplitMarker::Compound);
    }

    #[test]
    fn test_verb_pronoun_candidate_marked() {
        let tokens = scan_all("quiero verla", ScannerOptions::default());
        assert_eq!(tokens[1].word_text(), "verla");
        assert_eq!(tokens[1].marker(), SplitMarker::VerbPronoun);
        assert_eq!(tokens[0].marker(), SplitMarker::None);
    }

    #[test]
    fn test_punctuation_separated() {
        let tokens = scan_all("hola, mundo.", ScannerOptions::default());
        assert_eq!(words(&tokens), vec!["hola", ",", "mundo", "."]);
    }

    #[test]
    fn test_ellipsis_kept_whole() {
        let tokens = scan_all("bueno...", ScannerOptions::default());
        assert_eq!(words(&tokens), vec!["bueno", "..."]);
    }

    #[test]
    fn test_numbers() {
        let tokens = scan_all("3,5 millones", ScannerOptions::default());
        assert_eq!(words(&tokens), vec!["3,5", "millones"]);
    }

    #[test]
    fn test_soft_hyphen_normalized_away() {
        // Soft hyphen inside a word disappears from the surface form but
        // stays in the original text
        let tokens = scan_all("cami\u{00AD}no", ScannerOptions::default());
        assert_eq!(tokens[0].word_text(), "camino");
        assert_eq!(tokens[0].original_text(), "cami\u{00AD}no");
    }

    #[test]
    fn test_obliterated_token_has_empty_word() {
        let tokens = scan_all("hola \u{00AD} mundo", ScannerOptions::default());
        assert_eq!(words(&tokens), vec!["hola", "", "mundo"]);
    }

    #[test]
    fn test_raw_text_disables_normalization() {
        let options = ScannerOptions {
            raw_text: true,
            ..ScannerOptions::default()
        };
        let tokens = scan_all("cami\u{00AD}no", options);
        assert_eq!(tokens[0].word_text(), "cami\u{00AD}no");
    }

    #[test]
    fn test_newline_tokens() {
        let options = ScannerOptions {
            tokenize_newlines: true,
            ..ScannerOptions::default()
        };
        let tokens = scan_all("uno dos\ntres\n", options);
        assert_eq!(words(&tokens), vec!["uno", "dos", NEWLINE_TOKEN, "tres", NEWLINE_TOKEN]);
    }

    #[test]
    fn test_no_newline_token_without_option() {
        let tokens = scan_all("uno\ndos\n", ScannerOptions::default());
        assert_eq!(words(&tokens), vec!["uno", "dos"]);
    }

    #[test]
    fn test_line_numbers_assigned() {
        let tokens = scan_all("uno\ndos\n", ScannerOptions::default());
        assert_eq!(tokens[0].line(), 1);
        assert_eq!(tokens[1].line(), 2);
    }

    #[test]
    fn test_options_from_properties() {
        let mut props = BTreeMap::new();
        props.insert("tokenizeNLs".to_string(), "true".to_string());
        props.insert("ptb3Ellipsis".to_string(), "true".to_string());
        let options = ScannerOptions::from_properties(&props);
        assert!(options.tokenize_newlines);
        assert!(!options.raw_text);
        assert!(!options.lower_case);
    }

    #[test]
    fn test_lower_case_lowers_value_not_word() {
        let options = ScannerOptions {
            lower_case: true,
            ..ScannerOptions::default()
        };
        let tokens = scan_all("HOLA Mundo", options);
        let values: Vec<&str> = tokens.iter().map(|t| t.value()).collect();
        assert_eq!(values, vec!["hola", "mundo"]);
        assert_eq!(words(&tokens), vec!["HOLA", "Mundo"]);
    }

    #[test]
    fn test_read_error_is_fatal() {
        struct FailingReader;
        impl io::Read for FailingReader {
            fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "boom"))
            }
        }
        let reader = io::BufReader::new(FailingReader);
        let mut scanner = SpanishScanner::new(reader, ScannerOptions::default());
        assert!(matches!(scanner.next_raw(), Err(ScanError::Io(_))));
    }
}
