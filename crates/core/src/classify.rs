use std::sync::OnceLock;

use regex::Regex;

/// Substrings that mark a line as a section heading (menu-style script
/// sections and the cast list), matched case-insensitively.
const HEADING_MARKERS: [&str; 5] = ["PERSONAGGI", "ANTIPASTO", "PRIMI", "DOLCI", "CAFF"];

/// Result of matching a line against the `Name: dialogue` pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeakerMatch<'a> {
    NoMatch,
    Speaker { name: String, rest: &'a str },
}

/// Classification of a single trimmed line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    Blank,
    Heading,
    Speaker { name: String, rest: &'a str },
    /// A line that is entirely one parenthetical, e.g. `(Buio in sala)`.
    StageDirection,
    Continuation,
}

/// Classify a line that has already been trimmed.
///
/// Rules are tried in priority order: blank, heading, speaker, standalone
/// stage direction. Anything else is a continuation.
pub fn classify_line(line: &str) -> LineKind<'_> {
    if line.is_empty() {
        return LineKind::Blank;
    }
    if is_section_heading(line) {
        return LineKind::Heading;
    }
    if let SpeakerMatch::Speaker { name, rest } = match_speaker(line) {
        return LineKind::Speaker { name, rest };
    }
    if line.starts_with('(') && line.ends_with(')') {
        return LineKind::StageDirection;
    }
    LineKind::Continuation
}

pub fn is_section_heading(line: &str) -> bool {
    let upper = line.to_uppercase();
    upper.starts_with("SCENA ") || HEADING_MARKERS.iter().any(|m| upper.contains(m))
}

fn speaker_regex() -> &'static Regex {
    static RE_SPEAKER: OnceLock<Regex> = OnceLock::new();
    RE_SPEAKER.get_or_init(|| {
        Regex::new(
            r"^(?P<who>[A-ZÀ-ÖØ-Þ][A-Za-zÀ-ÖØ-öø-ÿ’' .\-]*(?:\([^)]*\))?)\s*:\s*(?P<what>.*)$",
        )
        .unwrap()
    })
}

/// Match a line of the form `NAME (annotation): dialogue`.
///
/// The name must start with an uppercase Latin-1 letter and may contain
/// letters, both apostrophe forms, spaces, dots and hyphens, optionally
/// followed by one parenthetical. The returned `rest` is the raw text after
/// the colon.
pub fn match_speaker(line: &str) -> SpeakerMatch<'_> {
    let Some(caps) = speaker_regex().captures(line) else {
        return SpeakerMatch::NoMatch;
    };
    let (Some(who), Some(what)) = (caps.name("who"), caps.name("what")) else {
        return SpeakerMatch::NoMatch;
    };

    let name = clean_speaker_name(who.as_str());
    if name.is_empty() {
        return SpeakerMatch::NoMatch;
    }

    SpeakerMatch::Speaker {
        name,
        rest: what.as_str(),
    }
}

/// Drop parenthetical annotations from a speaker name and collapse
/// internal whitespace runs.
pub fn clean_speaker_name(raw: &str) -> String {
    static RE_ANNOTATION: OnceLock<Regex> = OnceLock::new();
    let re_annotation = RE_ANNOTATION.get_or_init(|| Regex::new(r"\s*\([^)]*\)\s*").unwrap());

    static RE_SPACES: OnceLock<Regex> = OnceLock::new();
    let re_spaces = RE_SPACES.get_or_init(|| Regex::new(r"\s{2,}").unwrap());

    let without_annotations = re_annotation.replace_all(raw, "");
    re_spaces
        .replace_all(without_annotations.trim(), " ")
        .to_string()
}

/// Remove a stage direction anchored at the very start of `text`.
///
/// Only a leading `(...)` is removed; one level of nested parentheses is
/// allowed inside it. The result is trimmed.
pub fn strip_leading_stage_direction(text: &str) -> &str {
    static RE_STAGE: OnceLock<Regex> = OnceLock::new();
    let re_stage =
        RE_STAGE.get_or_init(|| Regex::new(r"^\((?:[^()]|\([^)]*\))*\)\s*").unwrap());

    let rest = match re_stage.find(text) {
        Some(m) => &text[m.end()..],
        None => text,
    };
    rest.trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn speaker(line: &str) -> Option<(String, String)> {
        match match_speaker(line) {
            SpeakerMatch::Speaker { name, rest } => Some((name, rest.to_string())),
            SpeakerMatch::NoMatch => None,
        }
    }

    // -- match_speaker ------------------------------------------------------

    #[test]
    fn test_simple_speaker() {
        assert_eq!(
            speaker("MARIO: Ciao a tutti"),
            Some(("MARIO".to_string(), "Ciao a tutti".to_string()))
        );
    }

    #[test]
    fn test_speaker_with_annotation() {
        assert_eq!(
            speaker("MARIO (fuori scena): Arrivo!"),
            Some(("MARIO".to_string(), "Arrivo!".to_string()))
        );
    }

    #[test]
    fn test_speaker_with_accents_and_apostrophes() {
        assert_eq!(
            speaker("NICOLÒ D’ANGELO: Eccomi"),
            Some(("NICOLÒ D’ANGELO".to_string(), "Eccomi".to_string()))
        );
        assert_eq!(
            speaker("Zia Carmela d'Amico: Sì"),
            Some(("Zia Carmela d'Amico".to_string(), "Sì".to_string()))
        );
    }

    #[test]
    fn test_speaker_name_spaces_collapsed() {
        assert_eq!(
            speaker("DON   PEPPE: Allora"),
            Some(("DON PEPPE".to_string(), "Allora".to_string()))
        );
    }

    #[test]
    fn test_speaker_with_empty_dialogue() {
        assert_eq!(
            speaker("MARIO:"),
            Some(("MARIO".to_string(), String::new()))
        );
    }

    #[test]
    fn test_lowercase_start_is_not_speaker() {
        assert_eq!(speaker("poi disse: basta"), None);
    }

    #[test]
    fn test_digits_in_name_are_not_speaker() {
        assert_eq!(speaker("ORE 10: si comincia"), None);
    }

    #[test]
    fn test_no_colon_is_not_speaker() {
        assert_eq!(speaker("MARIO entra"), None);
    }

    #[test]
    fn test_accented_capital_start() {
        assert_eq!(
            speaker("ÈVA: Buongiorno"),
            Some(("ÈVA".to_string(), "Buongiorno".to_string()))
        );
    }

    // -- is_section_heading ---------------------------------------------------

    #[test]
    fn test_scene_heading() {
        assert!(is_section_heading("SCENA 1"));
        assert!(is_section_heading("Scena seconda"));
        assert!(!is_section_heading("SCENARIO"));
    }

    #[test]
    fn test_menu_headings() {
        assert!(is_section_heading("PERSONAGGI E INTERPRETI"));
        assert!(is_section_heading("Antipasto"));
        assert!(is_section_heading("I primi piatti"));
        assert!(is_section_heading("dolci"));
        assert!(is_section_heading("CAFFÈ"));
    }

    #[test]
    fn test_plain_line_is_not_heading() {
        assert!(!is_section_heading("MARIO: Ciao"));
    }

    // -- strip_leading_stage_direction ---------------------------------------

    #[test]
    fn test_strip_leading_direction() {
        assert_eq!(strip_leading_stage_direction("(sorridendo) Ciao"), "Ciao");
    }

    #[test]
    fn test_strip_nested_direction() {
        assert_eq!(
            strip_leading_stage_direction("(guarda (di nuovo) la porta)   Chi è?"),
            "Chi è?"
        );
    }

    #[test]
    fn test_inner_direction_untouched() {
        assert_eq!(
            strip_leading_stage_direction("Ciao (sorride) a tutti"),
            "Ciao (sorride) a tutti"
        );
    }

    #[test]
    fn test_direction_only() {
        assert_eq!(strip_leading_stage_direction("(pausa)"), "");
    }

    #[test]
    fn test_unbalanced_direction_kept() {
        assert_eq!(strip_leading_stage_direction("(pausa Ciao"), "(pausa Ciao");
    }

    // -- classify_line --------------------------------------------------------

    #[test]
    fn test_classify_order() {
        assert_eq!(classify_line(""), LineKind::Blank);
        assert_eq!(classify_line("SCENA 2"), LineKind::Heading);
        assert_eq!(classify_line("(Buio in sala)"), LineKind::StageDirection);
        assert_eq!(classify_line("come va?"), LineKind::Continuation);
        assert!(matches!(
            classify_line("MARIO: Ciao"),
            LineKind::Speaker { name, rest } if name == "MARIO" && rest == "Ciao"
        ));
    }

    #[test]
    fn test_heading_wins_over_speaker() {
        assert_eq!(classify_line("PRIMI: pasta e fagioli"), LineKind::Heading);
    }
}
