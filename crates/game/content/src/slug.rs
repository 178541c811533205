//! Slug identifiers for generated content entries.

/// Right single quotation mark as typographic sources write it.
const RIGHT_QUOTE: char = '\u{2019}';

/// The same mark after its UTF-8 bytes were read back as Windows-1252.
const RIGHT_QUOTE_MOJIBAKE: &str = "\u{e2}\u{20ac}\u{2122}";

/// Derives a stable identifier from a display name.
///
/// The name is lower-cased, apostrophes (straight, curly, or mojibake) are
/// dropped, and whitespace-separated words are joined with `-` after
/// `prefix`. Other characters pass through unchanged.
///
/// ```
/// use game_content::slugify;
///
/// assert_eq!(slugify("fighter", "Armor Master"), "fighter-armor-master");
/// assert_eq!(slugify("fighter", "Child of War"), "fighter-child-of-war");
/// ```
pub fn slugify(prefix: &str, name: &str) -> String {
    let cleaned = name
        .to_lowercase()
        .replace(RIGHT_QUOTE_MOJIBAKE, "'")
        .replace(RIGHT_QUOTE, "'")
        .replace('\'', "");

    let words: Vec<&str> = cleaned.split_whitespace().collect();
    format!("{prefix}-{}", words.join("-"))
}
