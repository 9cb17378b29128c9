//! Lexical classification of a verse's content against the lexicon tables.

use crate::lexicon::{
    ADVERSARY_EPITHETS, ADVERSARY_METAPHORS, ADVERSARY_NAMED_ENTITIES, ADVERSARY_SETS,
    ADVERSARY_TITLES, BENEDICTION_WORDS, COVENANT_WORDS, DEMONIC_ENTITIES, DEMONIC_PHRASES,
    JESUS_LAMB_WORD, JESUS_LORD_PHRASES, JESUS_SON_OF_GOD, JESUS_SON_OF_MAN, JESUS_TITLES,
    LAMENT_WORDS, NAMES_OF_GOD, NEG_COMMAND_PATTERNS, ONE_ANOTHER_PHRASES, PHYSICAL_WARFARE,
    POS_COMMAND_PATTERNS, PRAISE_WORDS, SPIRITUAL_WARFARE, THANKSGIVING_WORDS, TIME_ESCHATOLOGY,
    TIME_FEASTS, TIME_PARTS_OF_DAY, TIME_PERIOD_PHRASES, TIME_SEASONS, TIME_SETS, TIME_UNITS,
    contains_any, contains_any_of,
};
use crate::utils::dedup_preserve;

/// Emits content tags for the verse text.
///
/// Each lexicon category is evaluated independently against the lowercased
/// text, so one verse can carry many tags at once. The Christology and
/// adversary rules intentionally emit a specific tag plus a generic one;
/// the final deduplication collapses repeats but both rules still fire.
/// The one exception is the ethical-command pair, where the negative
/// pattern wins and suppresses the positive one. Pure and deterministic.
///
/// # Examples
///
/// ```
/// use versenotes::tagger::thematic_tags;
///
/// let tags = thematic_tags("Thou shalt not kill.");
/// assert!(tags.contains(&"negative-command".to_string()));
/// assert!(!tags.contains(&"positive-command".to_string()));
/// ```
#[must_use]
pub fn thematic_tags(text: &str) -> Vec<String> {
    let lower = text.trim().to_lowercase();
    let mut tags: Vec<String> = Vec::new();
    let mut tag = |label: &str| tags.push(label.to_string());

    // core themes
    if contains_any(&lower, NAMES_OF_GOD) {
        tag("names-of-god");
    }
    if contains_any(&lower, PHYSICAL_WARFARE) {
        tag("warfare");
    }
    if contains_any(&lower, SPIRITUAL_WARFARE) {
        tag("warfare");
    }
    if contains_any(&lower, ONE_ANOTHER_PHRASES) {
        tag("one-another");
    }

    // Christology: specific tags ride along with the generic `jesus` tag
    if contains_any(&lower, JESUS_LORD_PHRASES) || lower.contains("jesus") {
        tag("jesus");
    }
    if contains_any(&lower, JESUS_TITLES) {
        tag("jesus-title");
        tag("jesus");
    }
    if contains_any(&lower, JESUS_SON_OF_GOD) {
        tag("son-of-god");
        tag("jesus");
    }
    if contains_any(&lower, JESUS_SON_OF_MAN) {
        tag("son-of-man");
        tag("jesus");
    }
    if contains_any(&lower, JESUS_LAMB_WORD) {
        tag("lamb-of-god");
        tag("jesus");
    }

    // adversary / demonic: each subcategory plus the generic union tag
    if contains_any(&lower, ADVERSARY_TITLES) {
        tag("adversary-title");
    }
    if contains_any(&lower, ADVERSARY_EPITHETS) {
        tag("adversary-epithet");
    }
    if contains_any(&lower, ADVERSARY_METAPHORS) {
        tag("adversary-metaphor");
    }
    if contains_any(&lower, ADVERSARY_NAMED_ENTITIES) {
        tag("adversary-named");
    }
    if contains_any(&lower, DEMONIC_ENTITIES) {
        tag("demonic-entities");
    }
    if contains_any(&lower, DEMONIC_PHRASES) {
        tag("demonic-phrases");
    }
    if contains_any_of(&lower, ADVERSARY_SETS) {
        tag("adversary");
    }

    // prayer & worship
    if contains_any(&lower, THANKSGIVING_WORDS) {
        tag("thanksgiving");
    }
    if contains_any(&lower, PRAISE_WORDS) {
        tag("praise-worship");
    }
    if contains_any(&lower, LAMENT_WORDS) {
        tag("lament");
    }

    // covenant / promise
    if contains_any(&lower, COVENANT_WORDS) {
        tag("covenant");
    }

    // blessing & benediction
    if contains_any(&lower, BENEDICTION_WORDS) {
        tag("benediction");
    }

    // ethics: first match wins, unlike every other category
    if NEG_COMMAND_PATTERNS
        .iter()
        .any(|pattern| lower.starts_with(pattern))
    {
        tag("negative-command");
    } else if POS_COMMAND_PATTERNS
        .iter()
        .any(|pattern| lower.starts_with(pattern))
    {
        tag("positive-command");
    }

    // time / eschatology, evaluated at every granularity at once
    if contains_any(&lower, TIME_ESCHATOLOGY) {
        tag("time-eschatology");
    }
    if contains_any(&lower, TIME_UNITS) {
        tag("time-units");
    }
    if contains_any(&lower, TIME_PARTS_OF_DAY) {
        tag("time-parts-of-day");
    }
    if contains_any(&lower, TIME_SEASONS) {
        tag("time-seasons");
    }
    if contains_any(&lower, TIME_FEASTS) {
        tag("time-feasts");
    }
    if contains_any(&lower, TIME_PERIOD_PHRASES) {
        tag("time-period");
    }
    if contains_any_of(&lower, TIME_SETS) {
        tag("time");
    }

    dedup_preserve(tags)
}
