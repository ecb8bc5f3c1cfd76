//! Separation of enclitic pronouns from Spanish verb forms
//!
//! Infinitives, gerunds and plural imperatives can carry up to two attached
//! clitic pronouns ("cantarla", "dándoselo", "decidme"). The scanner marks
//! candidate words cheaply with [`has_attached_pronoun`]; the tokenizer's
//! verb-splitting rule then calls [`separate_pronouns`], which applies the
//! strict decomposition. A word that looks like a verb+clitic cluster but
//! does not decompose ("canta") simply yields `None` and is passed through
//! unchanged by the caller.

use once_cell::sync::Lazy;
use regex::Regex;

/// The clitic pronouns that can attach to a verb form, longest first so that
/// greedy front-stripping of a cluster never picks a strict prefix ("les"
/// before "le")
const PRONOUNS: [&str; 11] = [
    "nos", "les", "los", "las", "me", "te", "se", "le", "lo", "la", "os",
];

/// Strict pattern: a verbal stem ending (infinitive -r, gerund -ndo, plural
/// imperative -d) followed by one or two clitic pronouns
static SEPARABLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(\p{L}+?(?:[aeiouáéíóú]r|[áé]ndo|ndo|[aeiáéí]d))((?:nos|les|los|las|me|te|se|le|lo|la|os){1,2})$",
    )
    .expect("verb separation pattern is valid")
});

/// Loose candidate pattern used by the scanner: any word of two or more
/// letters ending in what could be a clitic cluster
static CANDIDATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\p{L}{2,}(?:nos|les|los|las|me|te|se|le|lo|la|os){1,2}$")
        .expect("verb candidate pattern is valid")
});

/// Cheap test for whether a word might be a verb with attached pronouns.
/// Overgenerates by design; [`separate_pronouns`] gives the final answer.
pub fn has_attached_pronoun(word: &str) -> bool {
    CANDIDATE.is_match(word)
}

/// Decompose a verb form into its bare stem and attached clitic pronouns,
/// in surface order. Returns `None` when the word does not decompose.
pub fn separate_pronouns(word: &str) -> Option<(String, Vec<String>)> {
    let caps = SEPARABLE.captures(word)?;
    let stem = fix_stem(caps.get(1)?.as_str());
    let pronouns = split_cluster(caps.get(2)?.as_str());
    Some((stem, pronouns))
}

/// Split a matched clitic cluster into individual pronouns, front to back
fn split_cluster(cluster: &str) -> Vec<String> {
    let mut rest = cluster;
    let mut out = Vec::new();
    'outer: while !rest.is_empty() {
        for p in PRONOUNS {
            if rest.len() >= p.len() && rest[..p.len()].eq_ignore_ascii_case(p) {
                out.push(rest[..p.len()].to_string());
                rest = &rest[p.len()..];
                continue 'outer;
            }
        }
        // The strict pattern guarantees the cluster is decomposable; keep
        // whatever is left as a single piece rather than looping forever
        out.push(rest.to_string());
        break;
    }
    out
}

/// Restore the diacritics of the bare stem. Attaching clitics shifts stress
/// ("dando" -> "dándoselo"), so the detached stem drops its last accented
/// vowel, except for verbs whose infinitive is legitimately accented
/// ("oír", "reír", "sonreír").
fn fix_stem(stem: &str) -> String {
    let lower = stem.to_lowercase();
    if lower.ends_with("ír") {
        return stem.to_string();
    }
    let mut chars: Vec<char> = stem.chars().collect();
    for c in chars.iter_mut().rev() {
        if let Some(plain) = deaccent(*c) {
            *c = plain;
            break;
        }
    }
    chars.into_iter().collect()
}

fn deaccent(c: char) -> Option<char> {
    match c {
        'á' => Some('a'),
        'é' => Some('e'),
        'í' => Some('i'),
        'ó' => Some('o'),
        'ú' => Some('u'),
        'Á' => Some('A'),
        'É' => Some('E'),
        'Í' => Some('I'),
        'Ó' => Some('O'),
        'Ú' => Some('U'),
        _ => None,
    }
}
