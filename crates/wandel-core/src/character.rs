// Vowel and umlaut classification for the German alphabet

use crate::TransformError;

// ---------------------------------------------------------------------------
// German vowel constants
// ---------------------------------------------------------------------------

/// Plain vowels, both cases: A E I O U.
pub const PLAIN_VOWELS: &[char] = &['A', 'E', 'I', 'O', 'U', 'a', 'e', 'i', 'o', 'u'];

/// Umlaut vowels, both cases: Ä Ö Ü.
pub const UMLAUT_VOWELS: &[char] = &[
    '\u{00C4}', '\u{00D6}', '\u{00DC}', '\u{00E4}', '\u{00F6}', '\u{00FC}',
];

/// Check whether a character is a plain (non-umlaut) vowel.
pub fn is_plain_vowel(c: char) -> bool {
    PLAIN_VOWELS.contains(&c)
}

/// Check whether a character is an umlaut vowel.
pub fn is_umlaut_vowel(c: char) -> bool {
    UMLAUT_VOWELS.contains(&c)
}

/// Check whether a character is a vowel, plain or umlaut.
pub fn is_vowel(c: char) -> bool {
    is_plain_vowel(c) || is_umlaut_vowel(c)
}

// ---------------------------------------------------------------------------
// Umlaut mapping
// ---------------------------------------------------------------------------

/// Map a vowel to its umlaut form, preserving case.
///
/// `a`, `o`, and `u` map to `ä`, `ö`, and `ü`; vowels without a distinct
/// umlaut counterpart (`e`, `i`, and the umlaut vowels themselves) map to
/// themselves. Returns [`TransformError::NotAVowel`] for any other character.
pub fn add_umlaut(c: char) -> Result<char, TransformError> {
    match c {
        'A' => Ok('\u{00C4}'),
        'a' => Ok('\u{00E4}'),
        'O' => Ok('\u{00D6}'),
        'o' => Ok('\u{00F6}'),
        'U' => Ok('\u{00DC}'),
        'u' => Ok('\u{00FC}'),
        _ if is_vowel(c) => Ok(c),
        _ => Err(TransformError::NotAVowel(c)),
    }
}

/// Map a vowel to its plain form, preserving case.
///
/// Inverse of [`add_umlaut`]: umlaut vowels map to their plain counterpart,
/// plain vowels map to themselves. Returns [`TransformError::NotAVowel`] for
/// any other character.
pub fn remove_umlaut(c: char) -> Result<char, TransformError> {
    match c {
        '\u{00C4}' => Ok('A'),
        '\u{00E4}' => Ok('a'),
        '\u{00D6}' => Ok('O'),
        '\u{00F6}' => Ok('o'),
        '\u{00DC}' => Ok('U'),
        '\u{00FC}' => Ok('u'),
        _ if is_plain_vowel(c) => Ok(c),
        _ => Err(TransformError::NotAVowel(c)),
    }
}

/// Check whether a character is a plain vowel with a distinct umlaut form.
///
/// True exactly for `A a O o U u`; false for every other vowel and for all
/// non-vowels.
pub fn can_receive_umlaut(c: char) -> bool {
    matches!(c, 'A' | 'a' | 'O' | 'o' | 'U' | 'u')
}

/// Check whether `target` is exactly the umlaut form of `source`.
///
/// The comparison is case-folded, so `'A'`/`'ä'` counts as an umlaut
/// addition. False whenever `source` has no distinct umlaut form, including
/// when the characters are equal or either one is not a vowel.
pub fn is_umlaut_added(source: char, target: char) -> bool {
    match simple_lower(source) {
        'a' => simple_lower(target) == '\u{00E4}',
        'o' => simple_lower(target) == '\u{00F6}',
        'u' => simple_lower(target) == '\u{00FC}',
        _ => false,
    }
}

// ---------------------------------------------------------------------------
// Simple case conversion
//
// The standard library's to_lowercase / to_uppercase produce iterators
// because some characters map to multiple characters; for the "simple"
// one-to-one mapping we only take the first character.
// ---------------------------------------------------------------------------

/// Convert a character to its simple lowercase equivalent.
pub fn simple_lower(c: char) -> char {
    let mut iter = c.to_lowercase();
    iter.next().unwrap_or(c)
}

/// Convert a character to its simple uppercase equivalent.
pub fn simple_upper(c: char) -> char {
    let mut iter = c.to_uppercase();
    iter.next().unwrap_or(c)
}
