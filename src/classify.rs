//! Key classification: a single ASCII letter or digit becomes a glyph, anything
//! else (named keys, punctuation, non-ASCII characters) summons a mascot.

/// What a key press turns into on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyClass {
    /// Upper-cased glyph to draw.
    Glyph(char),
    Other,
}

/// True iff `key` is exactly one character in `[a-zA-Z0-9]`.
pub fn is_alphanumeric(key: &str) -> bool {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => c.is_ascii_alphanumeric(),
        _ => false,
    }
}

pub fn classify(key: &str) -> KeyClass {
    if is_alphanumeric(key) {
        // is_alphanumeric guarantees exactly one char
        let c = key.chars().next().unwrap_or_default();
        KeyClass::Glyph(c.to_ascii_uppercase())
    } else {
        KeyClass::Other
    }
}
