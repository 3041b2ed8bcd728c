use std::sync::OnceLock;

use regex::Regex;

/// Concatenate per-page text into one document, one newline between pages.
pub fn join_pages<S: AsRef<str>>(pages: &[S]) -> String {
    pages
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Strip PDF extraction artifacts from the full document text.
///
/// The substitutions run in a fixed order; later ones assume the earlier
/// ones have already been applied. "Whitespace" in the underscore and colon
/// rules includes newlines, so a speaker name left alone on its line before a
/// colon is joined with the dialogue that follows it.
pub fn normalize_text(text: &str) -> String {
    // 1. Carriage returns.
    let mut result = text.replace('\r', "");

    // 2. Markdown emphasis leftovers.
    static RE_ASTERISKS: OnceLock<Regex> = OnceLock::new();
    let re_asterisks = RE_ASTERISKS.get_or_init(|| Regex::new(r"\*{1,3}").unwrap());
    result = re_asterisks.replace_all(&result, "").to_string();

    // 3. Leading underscores.
    static RE_LEADING_UNDERSCORES: OnceLock<Regex> = OnceLock::new();
    let re_leading =
        RE_LEADING_UNDERSCORES.get_or_init(|| Regex::new(r"(?m)^_+\s*").unwrap());
    result = re_leading.replace_all(&result, "").to_string();

    // 4. Trailing underscores.
    static RE_TRAILING_UNDERSCORES: OnceLock<Regex> = OnceLock::new();
    let re_trailing =
        RE_TRAILING_UNDERSCORES.get_or_init(|| Regex::new(r"(?m)\s*_+$").unwrap());
    result = re_trailing.replace_all(&result, "").to_string();

    // 5. Escaped parentheses.
    result = result.replace("\\(", "(").replace("\\)", ")");

    // 6. Colon spacing.
    static RE_COLON: OnceLock<Regex> = OnceLock::new();
    let re_colon = RE_COLON.get_or_init(|| Regex::new(r"\s*:\s*").unwrap());
    result = re_colon.replace_all(&result, ": ").to_string();

    // 7. Tabs, vertical tabs, form feeds and non-breaking spaces.
    static RE_BLANKS: OnceLock<Regex> = OnceLock::new();
    let re_blanks = RE_BLANKS.get_or_init(|| Regex::new(r"[\t\x0B\x0C\u{00A0}]+").unwrap());
    result = re_blanks.replace_all(&result, " ").to_string();

    result
}
