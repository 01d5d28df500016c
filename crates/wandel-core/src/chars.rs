// Conversion between strings and indexable character sequences

/// Convert a string into a vector of characters.
///
/// Both `compute` and `apply` need to consume characters from either end of a
/// word; a `Vec<char>` gives random access from both ends through ordinary
/// slicing, and keeps multi-byte characters (ä, ß) as single units.
pub fn str_to_chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

/// Collect a character slice back into a string.
pub fn chars_to_str(chars: &[char]) -> String {
    chars.iter().collect()
}
