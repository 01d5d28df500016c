// Lemma: the dictionary headword shared by all parts of speech

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::LexiconError;

/// A dictionary headword with its lexical relations.
///
/// A lemma belongs to at least one category (thematic grouping such as
/// "Tiere" or "Technik"); construction fails with
/// [`LexiconError::NoCategories`] otherwise. The remaining fields are
/// optional annotations. Values are immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Lemma {
    expression: String,
    categories: BTreeSet<String>,
    syllables: Vec<String>,
    pronunciation: Option<String>,
    synonyms: BTreeSet<String>,
    antonyms: BTreeSet<String>,
    hypernyms: BTreeSet<String>,
}

impl Lemma {
    /// Create a lemma with only an expression and its categories.
    pub fn new(
        expression: impl Into<String>,
        categories: BTreeSet<String>,
    ) -> Result<Self, LexiconError> {
        Self::with_details(
            expression,
            categories,
            Vec::new(),
            None,
            BTreeSet::new(),
            BTreeSet::new(),
            BTreeSet::new(),
        )
    }

    /// Create a fully annotated lemma.
    #[allow(clippy::too_many_arguments)]
    pub fn with_details(
        expression: impl Into<String>,
        categories: BTreeSet<String>,
        syllables: Vec<String>,
        pronunciation: Option<String>,
        synonyms: BTreeSet<String>,
        antonyms: BTreeSet<String>,
        hypernyms: BTreeSet<String>,
    ) -> Result<Self, LexiconError> {
        if categories.is_empty() {
            return Err(LexiconError::NoCategories);
        }

        Ok(Self {
            expression: expression.into(),
            categories,
            syllables,
            pronunciation,
            synonyms,
            antonyms,
            hypernyms,
        })
    }

    /// The headword itself.
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// The thematic categories; never empty.
    pub fn categories(&self) -> &BTreeSet<String> {
        &self.categories
    }

    /// The syllable split of the expression, in order.
    pub fn syllables(&self) -> &[String] {
        &self.syllables
    }

    pub fn pronunciation(&self) -> Option<&str> {
        self.pronunciation.as_deref()
    }

    pub fn synonyms(&self) -> &BTreeSet<String> {
        &self.synonyms
    }

    pub fn antonyms(&self) -> &BTreeSet<String> {
        &self.antonyms
    }

    pub fn hypernyms(&self) -> &BTreeSet<String> {
        &self.hypernyms
    }
}
