// SuffixTransform: derive a suffix rule from a word pair and replay it
//
// German inflection concentrates change at the word's end, with at most one
// internal vowel umlaut (Buch -> Bücher, hoch -> höher). Matching the two
// forms from the front and treating the first point of true divergence as
// the start of the differing suffix isolates the productive part of the rule
// while ignoring the identical stem.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::chars::{chars_to_str, str_to_chars};
use crate::{Transform, TransformError, character};

/// Marker glyph for a transform that does not add an umlaut.
const PLAIN_MARKER: &str = "-";

/// Marker glyph for a transform that adds an umlaut.
const UMLAUT_MARKER: &str = "\u{2E1A}"; // ⸚ HYPHEN WITH DIAERESIS

/// A suffix rule: remove a suffix, optionally umlaut one stem vowel, add a
/// suffix.
///
/// The value is immutable and compares structurally: two transforms are equal
/// iff all three fields are equal. A transform carries no relationship to the
/// word pair it was derived from; it can be replayed on any word of the same
/// inflection pattern via [`Transform::apply`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SuffixTransform {
    suffix_to_remove: String,
    adds_umlaut: bool,
    suffix_to_add: String,
}

impl SuffixTransform {
    /// Create a transform from explicit fields. An empty suffix means
    /// "nothing to remove" or "nothing to add".
    pub fn new(
        suffix_to_remove: impl Into<String>,
        adds_umlaut: bool,
        suffix_to_add: impl Into<String>,
    ) -> Self {
        Self {
            suffix_to_remove: suffix_to_remove.into(),
            adds_umlaut,
            suffix_to_add: suffix_to_add.into(),
        }
    }

    /// Derive the transform turning `origin` into `derived`.
    ///
    /// Scans both words from the front, consuming pairs that are identical or
    /// (at most once) an umlaut addition; the scan stops at the first pair
    /// that is neither, or when `origin` is exhausted. The unconsumed
    /// remainders become the suffix to remove and the suffix to add.
    ///
    /// A second umlaut-addition pair after one has already been consumed is a
    /// hard mismatch, not a second mutation; two independent vowel changes
    /// cannot be represented by this model.
    ///
    /// Fails with [`TransformError::DerivedShorterThanOriginal`] when
    /// `derived` has fewer characters than `origin`.
    pub fn compute(origin: &str, derived: &str) -> Result<Self, TransformError> {
        let origin_chars = str_to_chars(origin);
        let derived_chars = str_to_chars(derived);

        if origin_chars.len() > derived_chars.len() {
            return Err(TransformError::DerivedShorterThanOriginal {
                original: origin.to_string(),
                derived: derived.to_string(),
            });
        }

        let mut umlaut_added = false;
        let mut matched = 0;

        while matched < origin_chars.len() {
            let origin_char = origin_chars[matched];
            let derived_char = derived_chars[matched];

            if origin_char != derived_char {
                if !umlaut_added && character::is_umlaut_added(origin_char, derived_char) {
                    umlaut_added = true;
                } else {
                    break;
                }
            }

            matched += 1;
        }

        Ok(Self {
            suffix_to_remove: chars_to_str(&origin_chars[matched..]),
            adds_umlaut: umlaut_added,
            suffix_to_add: chars_to_str(&derived_chars[matched..]),
        })
    }

    /// The tail of the original word consumed by this transform; may be empty.
    pub fn suffix_to_remove(&self) -> &str {
        &self.suffix_to_remove
    }

    /// Whether exactly one stem vowel is umlauted as part of this transform.
    pub fn adds_umlaut(&self) -> bool {
        self.adds_umlaut
    }

    /// The tail appended to produce the derived word; may be empty.
    pub fn suffix_to_add(&self) -> &str {
        &self.suffix_to_add
    }
}

impl Transform for SuffixTransform {
    /// Replay the transform on a new word.
    ///
    /// Strips `suffix_to_remove` from the tail of `origin`, umlauts the
    /// rightmost umlaut-capable vowel of the remaining stem when the
    /// transform calls for it (a stem without such a vowel is left unchanged,
    /// not an error), and appends `suffix_to_add`.
    ///
    /// Fails with [`TransformError::OriginShorterThanSuffix`] when `origin`
    /// is shorter than the suffix to remove, and with
    /// [`TransformError::SuffixMismatch`] when `origin` does not end with it.
    fn apply(&self, origin: &str) -> Result<String, TransformError> {
        let origin_chars = str_to_chars(origin);
        let remove_chars = str_to_chars(&self.suffix_to_remove);

        if origin_chars.len() < remove_chars.len() {
            return Err(TransformError::OriginShorterThanSuffix {
                origin: origin.to_string(),
                suffix: self.suffix_to_remove.clone(),
            });
        }

        let stem_len = origin_chars.len() - remove_chars.len();
        if origin_chars[stem_len..] != remove_chars[..] {
            return Err(TransformError::SuffixMismatch {
                origin: origin.to_string(),
                suffix: self.suffix_to_remove.clone(),
            });
        }

        let mut stem = origin_chars[..stem_len].to_vec();

        if self.adds_umlaut {
            // The umlaut targets the vowel closest to the removed suffix.
            for c in stem.iter_mut().rev() {
                if character::can_receive_umlaut(*c) {
                    *c = character::add_umlaut(*c)?;
                    break;
                }
            }
        }

        let mut result = chars_to_str(&stem);
        result.push_str(&self.suffix_to_add);
        Ok(result)
    }
}

impl fmt::Display for SuffixTransform {
    /// Compact rule notation, for diagnostics only (never parsed back):
    /// `-` for the identity transform, `⸚` when only the umlaut applies,
    /// `⸚er` / `-s` when nothing is removed, and `-a ⇒ -en` when a suffix is
    /// replaced.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.adds_umlaut {
            UMLAUT_MARKER
        } else {
            PLAIN_MARKER
        };

        if self.suffix_to_add.is_empty() {
            write!(f, "{marker}")
        } else if self.suffix_to_remove.is_empty() {
            write!(f, "{marker}{}", self.suffix_to_add)
        } else {
            write!(
                f,
                "-{} \u{21D2} {marker}{}",
                self.suffix_to_remove, self.suffix_to_add
            )
        }
    }
}
