//! Text normalization and tokenization.

/// Characters that separate tokens besides whitespace.
pub const TOKEN_PUNCTUATION: &[char] = &[',', '.', ';', ':', '!', '?'];

/// Lower-case the full text.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
}

/// Whitespace that separates tokens.
///
/// This is Unicode `White_Space` without U+0085 (NEXT LINE), plus U+FEFF
/// (BYTE ORDER MARK). It differs from [`char::is_whitespace`] in exactly
/// those two characters.
pub fn is_separator_space(c: char) -> bool {
    match c {
        '\u{85}' => false,
        '\u{FEFF}' => true,
        c => c.is_whitespace(),
    }
}

/// Whether `c` ends a token.
pub fn is_token_boundary(c: char) -> bool {
    is_separator_space(c) || TOKEN_PUNCTUATION.contains(&c)
}

/// Split text into tokens.
///
/// Runs of whitespace and `,.;:!?` form a single boundary and empty tokens
/// are dropped. Other punctuation (hyphens, apostrophes, quotes) stays part of
/// the token.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_token_boundary).filter(|token| !token.is_empty())
}
