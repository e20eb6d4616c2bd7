//! Value normalization shared by the filter and sort engines.

use arp_model::Scalar;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Comparable form of a field value: text form, lowercased, trimmed.
/// Missing values normalize to the empty string.
pub fn normalize(value: Option<&Scalar>) -> String {
    match value {
        Some(value) => normalize_str(&value.as_text()),
        None => String::new(),
    }
}

/// [`normalize`] for raw text such as a search query.
pub fn normalize_str(value: &str) -> String {
    value.to_lowercase().trim().to_string()
}

/// Base-strength collation key: case and accents fold away, so `"Émile"`
/// and `"emile"` compare equal. Stroked letters fold to their base letter
/// and `ß`, `æ`, `œ` expand to two letters.
pub fn collation_key(value: &str) -> String {
    let stripped = value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase();
    let mut key = String::with_capacity(stripped.len());
    for c in stripped.chars() {
        match c {
            'ß' => key.push_str("ss"),
            'æ' => key.push_str("ae"),
            'œ' => key.push_str("oe"),
            'ø' => key.push('o'),
            'ł' => key.push('l'),
            'đ' => key.push('d'),
            'ħ' => key.push('h'),
            other => key.push(other),
        }
    }
    key
}

/// Primary character classes in collation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CharClass {
    Whitespace,
    Punctuation,
    Symbol,
    Digit,
    Letter,
}

// ASCII punctuation and symbols in root collation order.
const PUNCTUATION: &str = "_-,;:!?.'\"()[]{}@*/\\&#%`^";
const SYMBOLS: &str = "+<=>|~$";

/// Primary weight of one collation key character.
///
/// Whitespace sorts before punctuation, then symbols, digits and letters.
/// Within a class, ASCII punctuation and symbols follow root collation order
/// and everything else follows code point order.
pub fn primary_weight(c: char) -> (CharClass, u32) {
    if c.is_whitespace() || c.is_control() {
        return (CharClass::Whitespace, u32::from(c));
    }
    if let Some(position) = PUNCTUATION.chars().position(|p| p == c) {
        return (CharClass::Punctuation, position as u32);
    }
    if let Some(position) = SYMBOLS.chars().position(|p| p == c) {
        return (CharClass::Symbol, position as u32);
    }
    if c.is_numeric() {
        (CharClass::Digit, u32::from(c))
    } else if c.is_alphabetic() {
        (CharClass::Letter, u32::from(c))
    } else {
        // Offset past the ASCII symbol table.
        (CharClass::Symbol, 0x80 + u32::from(c))
    }
}
