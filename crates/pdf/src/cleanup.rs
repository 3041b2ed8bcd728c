use unicode_normalization::UnicodeNormalization;

const LIGATURES: [(&str, &str); 5] = [
    ("\u{FB00}", "ff"),
    ("\u{FB01}", "fi"),
    ("\u{FB02}", "fl"),
    ("\u{FB03}", "ffi"),
    ("\u{FB04}", "ffl"),
];

/// Clean up the text layer of a single page.
///
/// Applies unicode NFC normalization, ligature replacement and replacement
/// character removal. Line structure is left untouched.
pub fn cleanup_page_text(text: &str) -> String {
    // 1. Unicode NFC normalization, so `O` + combining grave becomes `Ò`.
    let mut result: String = text.nfc().collect();

    // 2. Fix ligatures (fi, fl, ffi, ffl).
    for (lig, replacement) in &LIGATURES {
        result = result.replace(lig, replacement);
    }

    // 3. Remove Unicode replacement character.
    result.replace('\u{FFFD}', "")
}
