//! Lexicon tables for the thematic tagger.
//!
//! Each table is a read-only set of lowercase keywords or phrases for one
//! semantic category. Matching is plain substring containment against the
//! lowercased verse text, not word-boundary matching, so short entries can
//! match inside longer words. That is the intended table semantics.
//!
//! Some physical-warfare entries carry their own spacing or punctuation
//! (`" war "`, `" war."`) to keep the bare trigram from matching words like
//! "toward".

/// Names and titles of God, including the compound Jehovah/Yahweh names.
pub const NAMES_OF_GOD: &[&str] = &[
    "jehovah",
    "yahweh",
    "yhwh",
    "lord",
    "god",
    "el",
    "eloah",
    "elohim",
    "adonai",
    "most high",
    "almighty",
    "jehovah-jireh",
    "jehovah jireh",
    "yahweh-yireh",
    "yahweh yireh",
    "jehovah-rapha",
    "jehovah rapha",
    "yahweh-rapha",
    "yahweh rapha",
    "jehovah-nissi",
    "jehovah nissi",
    "yahweh-nissi",
    "yahweh nissi",
    "jehovah-shalom",
    "jehovah shalom",
    "yahweh-shalom",
    "yahweh shalom",
    "jehovah-raah",
    "jehovah raah",
    "yahweh-raah",
    "yahweh raah",
    "jehovah-tsidkenu",
    "jehovah tsidkenu",
    "yahweh-tsidqenu",
    "yahweh tsidqenu",
    "jehovah-shammah",
    "jehovah shammah",
    "yahweh-shammah",
    "yahweh shammah",
    "lord of hosts",
    "king of kings",
    "lord of lords",
    "ancient of days",
    "the rock",
    "i am",
    "i am that i am",
];

/// Literal battle vocabulary.
pub const PHYSICAL_WARFARE: &[&str] = &[
    " war ",
    " war.",
    ", war",
    "war, ",
    "battle",
    "battles",
    "fight",
    "fought",
    "fighting",
    "army",
    "armies",
    "hosts",
    "chariot",
    "chariots",
    "spear",
    "spears",
    "sword",
    "swords",
    "shield",
    "shields",
    "captains",
    "horse",
    "horses",
    "siege",
    "besieged",
    "slain",
    "smote",
    "smite",
    "smitten",
    "kill",
    "killed",
];

/// Spiritual-conflict vocabulary; maps to the same `warfare` tag as
/// [`PHYSICAL_WARFARE`].
pub const SPIRITUAL_WARFARE: &[&str] = &[
    "armor of god",
    "whole armour of god",
    "devil",
    "devils",
    "satan",
    "tempter",
    "temptation",
    "stronghold",
    "strongholds",
    "principalities",
    "powers",
    "rulers of the darkness",
    "spiritual wickedness",
    "fiery darts",
    "resist",
    "deliver us from evil",
];

/// Mutuality phrases ("one another" commands).
pub const ONE_ANOTHER_PHRASES: &[&str] = &[
    "one another",
    "each other",
    "one to another",
    "one toward another",
    "members one of another",
];

/// Titles of Jesus beyond the bare name.
///
/// The bare token "jesus" is handled by the generic rule in the tagger, so
/// a plain name mention tags `jesus` without also tagging `jesus-title`.
pub const JESUS_TITLES: &[&str] = &[
    "jesus christ",
    "christ jesus",
    "the christ",
    "christ",
    "messiah",
    "immanuel",
    "emmanuel",
    "rabbi",
    "teacher",
];

pub const JESUS_SON_OF_GOD: &[&str] = &["son of god", "only begotten son"];

pub const JESUS_SON_OF_MAN: &[&str] = &["son of man"];

pub const JESUS_LORD_PHRASES: &[&str] = &["lord jesus", "our lord jesus", "lord jesus christ"];

pub const JESUS_LAMB_WORD: &[&str] = &["lamb of god"];

/// Thanksgiving vocabulary.
pub const THANKSGIVING_WORDS: &[&str] = &[
    "give thanks",
    "thanksgiving",
    "thanks be",
    "thank",
    "thanked",
    "thankful",
];

/// Praise and worship vocabulary.
pub const PRAISE_WORDS: &[&str] = &[
    "praise",
    "praised",
    "praiseth",
    "sing",
    "sang",
    "sung",
    "worship",
    "bless the lord",
    "bless the name",
];

/// Lament and mourning vocabulary.
pub const LAMENT_WORDS: &[&str] = &[
    "woe", "lament", "tears", "mourn", "mourning", "cry", "cried", "crying",
];

/// Covenant and promise vocabulary.
pub const COVENANT_WORDS: &[&str] = &[
    "covenant",
    "everlasting covenant",
    "my covenant",
    "new covenant",
];

/// Blessing and benediction formulas.
pub const BENEDICTION_WORDS: &[&str] = &[
    "blessed is",
    "blessed be",
    "peace be",
    "the lord bless thee",
    "the lord make his face shine",
    "the lord lift up",
];

/// Negative-command openings. Checked before [`POS_COMMAND_PATTERNS`];
/// first match wins, unlike every other category.
pub const NEG_COMMAND_PATTERNS: &[&str] = &["do not", "be not", "let not", "thou shalt not"];

/// Positive-command openings.
pub const POS_COMMAND_PATTERNS: &[&str] = &["thou shalt", "ye shall", "you shall"];

// Adversary / demonic subcategories. Each emits its own tag; the union of
// all six additionally emits the generic `adversary` tag.

pub const ADVERSARY_TITLES: &[&str] = &[
    "satan",
    "devil",
    "lucifer",
    "beelzebub",
    "belial",
    "antichrist",
    "the wicked one",
    "the evil one",
    "the adversary",
];

pub const ADVERSARY_EPITHETS: &[&str] = &[
    "accuser",
    "tempter",
    "destroyer",
    "deceiver",
    "father of lies",
    "murderer from the beginning",
    "prince of this world",
    "prince of the power of the air",
    "god of this world",
    "that wicked",
    "man of sin",
    "son of perdition",
    "mystery of iniquity",
];

pub const ADVERSARY_METAPHORS: &[&str] = &[
    "serpent",
    "that old serpent",
    "dragon",
    "red dragon",
    "roaring lion",
    "leviathan",
    "angel of light",
];

pub const ADVERSARY_NAMED_ENTITIES: &[&str] = &["abaddon", "apollyon", "legion"];

pub const DEMONIC_ENTITIES: &[&str] = &[
    "devils",
    "unclean spirit",
    "unclean spirits",
    "evil spirit",
    "evil spirits",
    "familiar spirit",
    "familiar spirits",
];

pub const DEMONIC_PHRASES: &[&str] = &[
    "works of the devil",
    "synagogue of satan",
    "power of darkness",
    "rulers of the darkness",
    "doctrines of devils",
    "possessed with a devil",
    "cast out devils",
];

/// Union of all adversary/demonic subcategories, for the generic
/// `adversary` tag.
pub const ADVERSARY_SETS: &[&[&str]] = &[
    ADVERSARY_TITLES,
    ADVERSARY_EPITHETS,
    ADVERSARY_METAPHORS,
    ADVERSARY_NAMED_ENTITIES,
    DEMONIC_ENTITIES,
    DEMONIC_PHRASES,
];

// Time / eschatology, split by granularity. All subcategories are evaluated
// independently; any match additionally emits the generic `time` tag.

pub const TIME_ESCHATOLOGY: &[&str] = &[
    "in the last days",
    "the last days",
    "the latter days",
    "in that day",
    "in those days",
    "day of the lord",
    "the time of the end",
    "the end of days",
    "time appointed",
    "times and seasons",
    "a time times and an half",
    "forty and two months",
    "one thousand two hundred and threescore days",
    "shortly come to pass",
    "the time is at hand",
    "he that shall come will come",
    "from everlasting to everlasting",
    "for ever and ever",
    "the fullness of time",
];

pub const TIME_UNITS: &[&str] = &[
    "day", "days", "month", "months", "year", "years", "week", "weeks", "sabbath", "sabbaths",
    "jubilee",
];

pub const TIME_PARTS_OF_DAY: &[&str] = &[
    "morning",
    "noon",
    "evening",
    "night",
    "midnight",
    "dawning of the day",
    "break of day",
    "the third hour",
    "the sixth hour",
    "the ninth hour",
    "the eleventh hour",
    "watch of the night",
    "first watch",
    "second watch",
    "third watch",
    "fourth watch",
];

pub const TIME_SEASONS: &[&str] = &[
    "winter",
    "summer",
    "harvest",
    "seedtime",
    "cold and heat",
    "former rain",
    "latter rain",
    "early rain",
    "time of the latter rain",
];

pub const TIME_FEASTS: &[&str] = &[
    "passover",
    "feast of unleavened bread",
    "pentecost",
    "feast of weeks",
    "feast of trumpets",
    "day of atonement",
    "feast of tabernacles",
    "feast of booths",
    "new moon",
    "new moons",
    "sabbath day",
];

pub const TIME_PERIOD_PHRASES: &[&str] = &[
    "at that time",
    "at the time appointed",
    "at the end of",
    "in process of time",
    "after many days",
    "after these things",
    "before these days",
    "from that day forward",
    "hereafter",
    "henceforth",
    "from this time forth",
    "till the day",
    "until the time",
    "until the day",
    "for a season",
    "for a time",
    "for a long time",
    "for a little while",
    "not many days hence",
    "yet a little while",
    "a little season",
];

/// Union of all time subcategories, for the generic `time` tag.
pub const TIME_SETS: &[&[&str]] = &[
    TIME_ESCHATOLOGY,
    TIME_UNITS,
    TIME_PARTS_OF_DAY,
    TIME_SEASONS,
    TIME_FEASTS,
    TIME_PERIOD_PHRASES,
];

/// True if any keyword in the table occurs as a substring of `text`.
///
/// `text` is expected to already be lowercased and trimmed.
#[must_use]
pub fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| text.contains(keyword))
}

/// True if any table in the union matches `text`.
#[must_use]
pub fn contains_any_of(text: &str, tables: &[&[&str]]) -> bool {
    tables.iter().any(|table| contains_any(text, table))
}
