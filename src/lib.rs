//! # ancora
//!
//! A rule-based tokenizer for raw Spanish text. Splits contractions
//! ("del" -> "de el"), verb forms with attached clitic pronouns
//! ("cantarla" -> "cantar la") and hyphenated compounds
//! ("punto-final" -> "punto - final") on top of a lower-level lexical
//! scanner, lazily and one token at a time.

pub mod spanish;
