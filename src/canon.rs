//! Canonical book order, name normalization, and genre classification.
//!
//! Every verse record must normalize to one of the 66 canonical book names
//! before any metadata is derived from it. Normalization is a data-integrity
//! gate, not a best-effort guess: unknown names reject the record.

/// The 66 canonical book names in traditional canon order.
pub static BOOKS_IN_ORDER: [&str; 66] = [
    "Genesis",
    "Exodus",
    "Leviticus",
    "Numbers",
    "Deuteronomy",
    "Joshua",
    "Judges",
    "Ruth",
    "1 Samuel",
    "2 Samuel",
    "1 Kings",
    "2 Kings",
    "1 Chronicles",
    "2 Chronicles",
    "Ezra",
    "Nehemiah",
    "Esther",
    "Job",
    "Psalms",
    "Proverbs",
    "Ecclesiastes",
    "Song of Solomon",
    "Isaiah",
    "Jeremiah",
    "Lamentations",
    "Ezekiel",
    "Daniel",
    "Hosea",
    "Joel",
    "Amos",
    "Obadiah",
    "Jonah",
    "Micah",
    "Nahum",
    "Habakkuk",
    "Zephaniah",
    "Haggai",
    "Zechariah",
    "Malachi",
    "Matthew",
    "Mark",
    "Luke",
    "John",
    "Acts",
    "Romans",
    "1 Corinthians",
    "2 Corinthians",
    "Galatians",
    "Ephesians",
    "Philippians",
    "Colossians",
    "1 Thessalonians",
    "2 Thessalonians",
    "1 Timothy",
    "2 Timothy",
    "Titus",
    "Philemon",
    "Hebrews",
    "James",
    "1 Peter",
    "2 Peter",
    "1 John",
    "2 John",
    "3 John",
    "Jude",
    "Revelation",
];

/// Alias table applied before canonical matching.
///
/// Covers compact forms without spaces and alternate titles
/// (e.g. "Canticles" for "Song of Solomon").
static BOOK_ALIASES: [(&str, &str); 20] = [
    ("1Samuel", "1 Samuel"),
    ("2Samuel", "2 Samuel"),
    ("1Kings", "1 Kings"),
    ("2Kings", "2 Kings"),
    ("1Chronicles", "1 Chronicles"),
    ("2Chronicles", "2 Chronicles"),
    ("1Corinthians", "1 Corinthians"),
    ("2Corinthians", "2 Corinthians"),
    ("1Thessalonians", "1 Thessalonians"),
    ("2Thessalonians", "2 Thessalonians"),
    ("1Timothy", "1 Timothy"),
    ("2Timothy", "2 Timothy"),
    ("1Peter", "1 Peter"),
    ("2Peter", "2 Peter"),
    ("1John", "1 John"),
    ("2John", "2 John"),
    ("3John", "3 John"),
    ("SongofSolomon", "Song of Solomon"),
    ("SongofSongs", "Song of Solomon"),
    ("Canticles", "Song of Solomon"),
];

/// Normalizes a raw book name to its canonical form.
///
/// Trims whitespace and applies the alias table, then matches against the
/// canon. Returns `None` for anything that does not resolve to one of the
/// 66 canonical names.
///
/// # Examples
///
/// ```
/// use versenotes::canon::normalize_book;
///
/// assert_eq!(normalize_book("1Samuel"), Some("1 Samuel"));
/// assert_eq!(normalize_book("Canticles"), Some("Song of Solomon"));
/// assert_eq!(normalize_book("Atlantis"), None);
/// ```
#[must_use]
pub fn normalize_book(raw: &str) -> Option<&'static str> {
    let trimmed = raw.trim();
    let fixed = BOOK_ALIASES
        .iter()
        .find(|(alias, _)| *alias == trimmed)
        .map_or(trimmed, |(_, canonical)| *canonical);
    BOOKS_IN_ORDER.iter().find(|book| **book == fixed).copied()
}

/// Returns the 1-based position of a canonical book in canon order.
///
/// Returns `None` for non-canonical names; callers normalize first.
#[must_use]
pub fn ordinal_of(book: &str) -> Option<usize> {
    BOOKS_IN_ORDER
        .iter()
        .position(|candidate| *candidate == book)
        .map(|index| index + 1)
}

/// Returns the fixed genre classification for a canonical book.
///
/// Returns `"Unknown"` for names outside the genre map. With a canonical
/// input this path is unreachable; it exists so a lookup can never fail.
#[must_use]
pub fn genre_of(book: &str) -> &'static str {
    match book {
        "Genesis" | "Exodus" | "Leviticus" | "Numbers" | "Deuteronomy" => "Law",
        "Joshua" | "Judges" | "Ruth" | "1 Samuel" | "2 Samuel" | "1 Kings" | "2 Kings"
        | "1 Chronicles" | "2 Chronicles" | "Ezra" | "Nehemiah" | "Esther" | "Acts" => "History",
        "Job" | "Psalms" | "Proverbs" | "Ecclesiastes" | "Song of Solomon" => "Poetry/Wisdom",
        "Isaiah" | "Jeremiah" | "Lamentations" | "Ezekiel" | "Daniel" => "Major Prophet",
        "Hosea" | "Joel" | "Amos" | "Obadiah" | "Jonah" | "Micah" | "Nahum" | "Habakkuk"
        | "Zephaniah" | "Haggai" | "Zechariah" | "Malachi" => "Minor Prophet",
        "Matthew" | "Mark" | "Luke" | "John" => "Gospel",
        "Romans" | "1 Corinthians" | "2 Corinthians" | "Galatians" | "Ephesians"
        | "Philippians" | "Colossians" | "1 Thessalonians" | "2 Thessalonians" | "1 Timothy"
        | "2 Timothy" | "Titus" | "Philemon" => "Pauline Epistle",
        "Hebrews" | "James" | "1 Peter" | "2 Peter" | "1 John" | "2 John" | "3 John" | "Jude" => {
            "General Epistle"
        }
        "Revelation" => "Apocalypse",
        _ => "Unknown",
    }
}

/// Builds the ordinal-prefixed folder name for a canonical book.
///
/// The ordinal is zero-padded to `pad` digits; `pad == 0` leaves it
/// unpadded. Returns `None` for non-canonical names.
///
/// # Examples
///
/// ```
/// use versenotes::canon::folder_name;
///
/// assert_eq!(folder_name("Genesis", 2).as_deref(), Some("01 - Genesis"));
/// assert_eq!(folder_name("Genesis", 0).as_deref(), Some("1 - Genesis"));
/// ```
#[must_use]
pub fn folder_name(book: &str, pad: usize) -> Option<String> {
    let ordinal = ordinal_of(book)?;
    let number = if pad > 0 {
        format!("{ordinal:0width$}", width = pad)
    } else {
        ordinal.to_string()
    };
    Some(format!("{number} - {book}"))
}
