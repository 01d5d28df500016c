//! Suffix-transform engine for German morphology.
//!
//! This crate derives and replays *suffix transforms*: given two related word
//! forms (for example a singular and its plural), it computes a compact rule
//! describing the minimal edit turning one into the other (a removed suffix,
//! an optional single stem-vowel umlaut, and an added suffix) and can replay
//! that rule on a different word of the same inflection pattern.
//!
//! # Architecture
//!
//! - [`character`] -- Vowel and umlaut classification tables and predicates
//! - [`chars`] -- Conversion between strings and indexable character sequences
//! - [`transform`] -- The [`SuffixTransform`] value: compute, apply, rendering
//!
//! All operations are pure functions over immutable inputs; there is no I/O,
//! no shared mutable state, and no suspension point anywhere in the crate.

pub mod character;
pub mod chars;
pub mod transform;

pub use transform::SuffixTransform;

/// Error type for transform computation, replay, and umlaut mapping.
///
/// Every variant signals a caller-correctable input error raised synchronously
/// at the point of the bad call; nothing is caught or retried internally.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransformError {
    /// `compute` was called with a derived form shorter than the original.
    /// Even a pure umlaut mutation preserves length, so real shrinkage
    /// signals a modeling error upstream.
    #[error("derived form '{derived}' must not be shorter than the original '{original}'")]
    DerivedShorterThanOriginal { original: String, derived: String },

    /// `apply` was called with an origin shorter than the suffix to remove.
    #[error("origin '{origin}' must not be shorter than the suffix to remove '{suffix}'")]
    OriginShorterThanSuffix { origin: String, suffix: String },

    /// `apply` was called with an origin that does not end with the suffix
    /// to remove.
    #[error("'{origin}' does not end with '{suffix}'")]
    SuffixMismatch { origin: String, suffix: String },

    /// An umlaut mapping was requested on a non-vowel character.
    #[error("'{0}' is not a vowel")]
    NotAVowel(char),
}

/// Trait for morphological transforms that can be replayed on a new word.
///
/// A transform is a reusable rule, not bound to the word pair it was derived
/// from: `apply` reuses the stored edit on any word assumed to belong to the
/// same inflection pattern.
pub trait Transform {
    /// Apply the transform to `origin`, returning the derived form.
    fn apply(&self, origin: &str) -> Result<String, TransformError>;
}
