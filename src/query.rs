//! Query classification and search pattern construction.
//!
//! Classification is pure: the same input always lands in the same class.
//! "Advanced" inputs carry Scryfall field syntax and pass through mostly
//! verbatim; Japanese free text gets the furigana-tolerant name patterns
//! built here.

use std::sync::LazyLock;

use regex::Regex;

/// Structured-query field prefixes recognized by the collaborator.
static ADVANCED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(^|\s)(t:|c:|o:|oracle:|f:|format:|lang:|is:|set:|cn:|rarity:|type:|pow|tou|cmc)\b",
    )
    .expect("invalid advanced-query regex")
});

static LANG_FILTER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(^|\s)lang:").expect("invalid lang-filter regex"));

/// How a raw input should be treated by the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryClass {
    /// Structured collaborator syntax, passed through largely verbatim.
    Advanced,
    /// Japanese free text; name-scoped matching only.
    JapaneseFree,
    /// Everything else.
    PlainFree,
}

/// Classify raw input text.
pub fn classify(text: &str) -> QueryClass {
    if is_advanced(text) {
        QueryClass::Advanced
    } else if looks_japanese(text) {
        QueryClass::JapaneseFree
    } else {
        QueryClass::PlainFree
    }
}

/// True when any character falls in the hiragana, katakana or CJK ideograph
/// blocks.
pub fn looks_japanese(text: &str) -> bool {
    text.chars().any(|c| {
        matches!(c, '\u{3040}'..='\u{30FF}' | '\u{4E00}'..='\u{9FFF}')
    })
}

/// True when the input uses structured-query syntax: a known field prefix,
/// a colon, or a quote.
pub fn is_advanced(text: &str) -> bool {
    ADVANCED_RE.is_match(text) || text.contains(':') || text.contains('"')
}

/// True when an advanced query already pins a language.
pub fn has_lang_filter(text: &str) -> bool {
    LANG_FILTER_RE.is_match(text)
}

/// Escape regex metacharacters in a literal user character sequence.
///
/// Only user text is escaped; the structural groups and separators injected
/// by the pattern builders below stay live.
pub fn escape_regex(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if matches!(
            ch,
            '.' | '*' | '+' | '?' | '^' | '$' | '{' | '}' | '(' | ')' | '|' | '[' | ']' | '\\'
        ) {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

/// Optional parenthetical annotation group appended after each input char.
/// Covers both ASCII and fullwidth parentheses.
const ANNOTATION_GROUP: &str = r"(?:[（(][^）)]*[）)])?";

/// Build a furigana-tolerant name pattern.
///
/// Each input character (whitespace dropped, ASCII or fullwidth) may be
/// followed by a parenthetical reading; whitespace is permitted between
/// characters. `稲妻` becomes `稲(?:[（(][^）)]*[）)])?\s*妻(?:...)?`.
pub fn furigana_pattern(input: &str) -> String {
    build_pattern(input, r"\s*")
}

/// Loose variant of [`furigana_pattern`]: arbitrary characters may
/// intervene between the input characters, not just whitespace.
pub fn loose_furigana_pattern(input: &str) -> String {
    build_pattern(input, ".*?")
}

fn build_pattern(input: &str, separator: &str) -> String {
    let parts: Vec<String> = input
        .trim()
        .chars()
        .filter(|c| *c != ' ' && *c != '\u{3000}')
        .map(|c| format!("{}{}", escape_regex(&c.to_string()), ANNOTATION_GROUP))
        .collect();
    parts.join(separator)
}
