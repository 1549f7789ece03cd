use once_cell::sync::Lazy;
use regex::Regex;

static CITATION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[[0-9]+\]|\{[0-9]+\}").expect("CITATION_REGEX is a valid regex pattern")
});

// Phonetic span between slashes followed by the audio icon, e.g. `/ˈrʌst/ ⓘ`.
static PRONUNCIATION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"/[^/]+/ \x{24D8}").expect("PRONUNCIATION_REGEX is a valid regex pattern")
});

static DISALLOWED_CHARS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^a-zA-Z0-9.,' ]").expect("DISALLOWED_CHARS_REGEX is a valid regex pattern")
});

static WHITESPACE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("WHITESPACE_REGEX is a valid regex pattern"));

/// Cleans a raw paragraph into plain ASCII prose.
///
/// Citation markers go first, then pronunciation guides (which need their
/// non-ASCII glyphs intact to match), then every character outside
/// letters, digits, `.`, `,`, `'` and space. Whitespace runs collapse to a
/// single space and the result is trimmed.
pub fn normalize(raw: &str) -> String {
    let text = CITATION_REGEX.replace_all(raw, "");
    let text = PRONUNCIATION_REGEX.replace_all(&text, "");
    let text = DISALLOWED_CHARS_REGEX.replace_all(&text, "");
    let text = WHITESPACE_REGEX.replace_all(&text, " ");
    text.trim().to_string()
}
