//! Option-string configuration for the tokenizer
//!
//! Options come as a comma-separated list of `key` or `key=value` entries.
//! The four splitting keys (`splitAll`, `splitCompounds`, `splitVerbs`,
//! `splitContractions`) configure the tokenizer itself; every other entry is
//! forwarded verbatim to the scanner's property set. A bare key implies
//! `true`; an explicit value is parsed case-insensitively as a boolean
//! literal. Options can be supplied incrementally and a later occurrence of
//! a key overrides an earlier one.

use log::warn;
use std::collections::BTreeMap;

/// Accumulated tokenizer configuration
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenizerOptions {
    pub split_compounds: bool,
    pub split_verbs: bool,
    pub split_contractions: bool,
    scanner_properties: BTreeMap<String, String>,
}

impl TokenizerOptions {
    pub fn new() -> Self {
        TokenizerOptions::default()
    }

    /// Parse a fresh option set from a single option string
    pub fn parse(options: &str) -> Self {
        let mut parsed = TokenizerOptions::default();
        parsed.set_options(options);
        parsed
    }

    /// Apply an option string on top of the current settings
    pub fn set_options(&mut self, options: &str) {
        for entry in options.split(',') {
            if entry.is_empty() {
                continue;
            }
            let fields: Vec<&str> = entry.split('=').collect();
            match fields.as_slice() {
                &[key] => self.apply(key, true, None),
                // A trailing '=' with no value acts like a bare key
                &[key, ""] => self.apply(key, true, None),
                &[key, value] => self.apply(key, parse_bool(value), Some(value)),
                _ => warn!("tokenizer options: bad entry '{}', skipping it", entry),
            }
        }
    }

    fn apply(&mut self, key: &str, enabled: bool, value: Option<&str>) {
        match key {
            "splitAll" => {
                self.split_compounds = enabled;
                self.split_verbs = enabled;
                self.split_contractions = enabled;
            }
            "splitCompounds" => self.split_compounds = enabled,
            "splitVerbs" => self.split_verbs = enabled,
            "splitContractions" => self.split_contractions = enabled,
            _ => {
                self.scanner_properties
                    .insert(key.to_string(), value.unwrap_or("true").to_string());
            }
        }
    }

    /// True when at least one splitting rule is enabled
    pub fn split_any(&self) -> bool {
        self.split_compounds || self.split_verbs || self.split_contractions
    }

    /// Properties forwarded verbatim to the scanner
    pub fn scanner_properties(&self) -> &BTreeMap<String, String> {
        &self.scanner_properties
    }
}

/// Case-insensitive boolean literal; anything else is false
fn parse_bool(value: &str) -> bool {
    value.eq_ignore_ascii_case("true")
}
