//! German lexicon records built on top of the `wandel-core` transform engine.
//!
//! This crate holds the record/value-object layer of the lexicon: lemmas and
//! their part-of-speech refinements, plus the noun declension grid. It has no
//! algorithmic content of its own; its job is to hold validated word forms,
//! to map them to and from storage via serde, and to hand word-form pairs to
//! `wandel-core` when an inflection rule is derived.
//!
//! # Architecture
//!
//! - [`grammar`] -- Grammatical coordinate enums (Genus, Numerus, Kasus, slot)
//! - [`lemma`] -- The dictionary headword shared by all parts of speech
//! - [`declension`] -- The sparse grid of declined noun forms
//! - [`noun`] -- Noun: lemma + genus + declensions
//! - [`adjective`] -- Adjective: lemma + degrees of comparison
//! - [`verb`] -- Verb: lemma + principal parts

pub mod adjective;
pub mod declension;
pub mod grammar;
pub mod lemma;
pub mod noun;
pub mod verb;

pub use adjective::Adjective;
pub use declension::NounDeclension;
pub use grammar::{DeclensionSlot, Genus, Kasus, Numerus};
pub use lemma::Lemma;
pub use noun::Noun;
pub use verb::Verb;

use wandel_core::TransformError;

/// Error type for lexicon record construction and rule derivation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexiconError {
    /// A lemma was constructed without any category.
    #[error("at least one category must be provided")]
    NoCategories,

    /// A rule derivation needed a word form the record does not carry.
    #[error("missing form: {0}")]
    MissingForm(String),

    /// A word-form pair was rejected by the transform engine.
    #[error(transparent)]
    Transform(#[from] TransformError),
}
