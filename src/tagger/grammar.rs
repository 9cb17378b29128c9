//! Structural classification of a verse's surface form.

use crate::utils::dedup_preserve;

const CONTRAST_OPENERS: &[&str] = &[
    "but",
    "however",
    "yet",
    "nevertheless",
    "though",
    "still",
    "rather",
];

const INFERENCE_OPENERS: &[&str] = &["therefore", "wherefore", "so", "then"];

// Space-delimited entries avoid matching inside words ("nothing", "snort").
const NEGATION_MARKERS: &[&str] = &[" not ", "neither", " nor ", "without", " no ", " never "];

const CONTRAST_MARKERS: &[&str] = &[
    " but ",
    " but,",
    "but, ",
    "yet",
    "however",
    "nevertheless",
    "though",
];

const CONDITIONAL_MARKERS: &[&str] = &[
    "unless",
    "except",
    "provided that",
    "in case",
    "whether",
    "lest",
    "though",
];

const RHETORICAL_CUES: &[&str] = &[
    "what if",
    "think ye",
    "think you",
    "shall we",
    "should we",
    "would we",
    "would you",
    "could we",
    "suppose",
];

const DELIBERATIVE_VERBS: &[&str] = &["think", "suppose", "consider", "reckon"];

const CAUSE_EFFECT_MARKERS: &[&str] = &["therefore", "for this cause", "so that"];

const CLOSING_FORMULAS: &[&str] = &[
    "grace be unto you",
    "grace be to you",
    "grace and peace",
    " amen",
];

const QUOTE_MARKS: &[char] = &['"', '\u{201c}', '\u{201d}', '\u{2018}', '\u{2019}'];

/// Emits structural tags for the verse text.
///
/// Every rule is evaluated independently; a verse can carry any combination
/// of tags. All substring checks run on a lowercased copy of the trimmed
/// text. Pure and deterministic.
///
/// # Examples
///
/// ```
/// use versenotes::tagger::grammar_tags;
///
/// let tags = grammar_tags("But the LORD is faithful.");
/// assert!(tags.contains(&"contrast-opener".to_string()));
/// assert!(tags.contains(&"contrast".to_string()));
/// ```
#[must_use]
pub fn grammar_tags(text: &str) -> Vec<String> {
    let trimmed = text.trim();
    let lower = trimmed.to_lowercase();
    let mut tags: Vec<String> = Vec::new();
    let mut tag = |label: &str| tags.push(label.to_string());

    // terminal punctuation
    if trimmed.ends_with('?') {
        tag("question");
    }
    if trimmed.ends_with('!') {
        tag("exclamation");
    }
    if trimmed.contains(QUOTE_MARKS) {
        tag("dialogue");
    }
    if trimmed.matches(';').count() >= 2 {
        tag("semicolon-heavy");
    }

    // discourse openers
    let first = lower.split_whitespace().next().unwrap_or("");
    if CONTRAST_OPENERS.contains(&first) {
        tag("contrast-opener");
    }
    if INFERENCE_OPENERS.contains(&first) {
        tag("inference-opener");
    }
    if first == "and" {
        tag("conjunctive-opener");
    }

    // polarity
    if contains_any(&lower, NEGATION_MARKERS) {
        tag("negation");
    }

    // contrast markers anywhere; sentence-initial "but" has no leading
    // space, so the padded markers miss it
    if contains_any(&lower, CONTRAST_MARKERS) || lower.starts_with("but ") {
        tag("contrast");
    }

    // conditional, explicit and rhetorical
    let conditional = lower.contains("if")
        || contains_any(&lower, CONDITIONAL_MARKERS)
        || contains_any(&lower, RHETORICAL_CUES)
        || (trimmed.ends_with('?') && contains_any(&lower, DELIBERATIVE_VERBS));
    if conditional {
        tag("conditional");
    }

    // logical relation
    if contains_any(&lower, CAUSE_EFFECT_MARKERS) {
        tag("cause-effect");
    }

    // formulaic closings
    if contains_any(&lower, CLOSING_FORMULAS) {
        tag("greeting/closing");
    }

    // genealogical construction
    if lower.contains("begat") || lower.contains("son of") || lower.contains("daughter of") {
        tag("genealogy-structure");
    }

    dedup_preserve(tags)
}

fn contains_any(text: &str, markers: &[&str]) -> bool {
    markers.iter().any(|marker| text.contains(marker))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(text: &str) -> Vec<String> {
        grammar_tags(text)
    }

    fn has(text: &str, tag: &str) -> bool {
        tags(text).iter().any(|t| t == tag)
    }

    #[test]
    fn terminal_punctuation_tags_question_and_exclamation() {
        assert!(has("Where art thou?", "question"));
        assert!(has("O Lord, how long!", "exclamation"));
        assert!(!has("A plain statement.", "question"));
        assert!(!has("A plain statement.", "exclamation"));
    }

    #[test]
    fn quotation_marks_tag_dialogue() {
        assert!(has("And he said, \"Here am I.\"", "dialogue"));
        assert!(has("And he said, \u{201c}Here am I.\u{201d}", "dialogue"));
        assert!(!has("And he said nothing.", "dialogue"));
    }

    #[test]
    fn two_or_more_semicolons_tag_semicolon_heavy() {
        assert!(has("first; second; third.", "semicolon-heavy"));
        assert!(!has("first; second.", "semicolon-heavy"));
    }

    #[test]
    fn first_word_openers() {
        assert!(has("But the LORD is faithful.", "contrast-opener"));
        assert!(has("Nevertheless I live.", "contrast-opener"));
        assert!(has("Therefore be ye also ready.", "inference-opener"));
        assert!(has("And God said, Let there be light.", "conjunctive-opener"));
        assert!(!has("The LORD is my shepherd.", "contrast-opener"));
    }

    #[test]
    fn opener_comparison_is_case_insensitive() {
        assert!(has("BUT the LORD is faithful.", "contrast-opener"));
        assert!(has("THEREFORE be ready.", "inference-opener"));
    }

    #[test]
    fn negation_markers_are_space_delimited() {
        assert!(has("Thou shalt not kill.", "negation"));
        assert!(has("There is neither Jew nor Greek.", "negation"));
        assert!(has("He did it without fear.", "negation"));
        // "nothing" must not trip the " not " marker
        assert!(!has("He said nothing at all.", "negation"));
    }

    #[test]
    fn contrast_fires_for_markers_and_sentence_initial_but() {
        assert!(has("But the LORD is faithful.", "contrast"));
        assert!(has("I sought him, but I found him not.", "contrast"));
        assert!(has("Though he slay me, yet will I trust in him.", "contrast"));
        assert!(!has("The LORD is my shepherd.", "contrast"));
    }

    #[test]
    fn conditional_detects_explicit_markers() {
        assert!(has("If thou be the Son of God, command.", "conditional"));
        assert!(has("Except a man be born again.", "conditional"));
        assert!(has("Lest ye be judged.", "conditional"));
    }

    #[test]
    fn conditional_detects_rhetorical_cues() {
        assert!(has("Shall we continue in sin?", "conditional"));
        assert!(has("What think ye of Christ?", "conditional"));
    }

    #[test]
    fn conditional_detects_deliberative_questions() {
        assert!(has("Do you reckon it so?", "conditional"));
        assert!(!has("He did reckon the cost.", "conditional"));
    }

    #[test]
    fn if_matches_as_a_substring() {
        // Substring containment is the table semantics, not a defect.
        assert!(has("He gave his life for the sheep.", "conditional"));
    }

    #[test]
    fn cause_effect_markers() {
        assert!(has("Therefore being justified by faith.", "cause-effect"));
        assert!(has("He died for this cause.", "cause-effect"));
        assert!(has("Walk so that ye may obtain.", "cause-effect"));
    }

    #[test]
    fn closing_formulas_tag_greeting_closing() {
        assert!(has("Grace be unto you, and peace.", "greeting/closing"));
        assert!(has("For ever and ever, Amen.", "greeting/closing"));
        assert!(!has("A plain statement.", "greeting/closing"));
    }

    #[test]
    fn genealogy_structure() {
        assert!(has("Abraham begat Isaac.", "genealogy-structure"));
        assert!(has("Joshua the son of Nun.", "genealogy-structure"));
        assert!(has("The daughter of Zion.", "genealogy-structure"));
    }

    #[test]
    fn output_is_deduplicated_and_deterministic() {
        let text = "Though he slay me, though he try me, yet will I trust him.";
        let first = tags(text);
        let second = tags(text);
        assert_eq!(first, second);
        let mut sorted = first.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), first.len(), "duplicate tags in {first:?}");
    }

    #[test]
    fn empty_text_yields_no_tags() {
        assert!(tags("").is_empty());
        assert!(tags("   ").is_empty());
    }
}
