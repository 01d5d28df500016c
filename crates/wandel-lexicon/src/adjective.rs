// Adjective: lemma + degrees of comparison

use serde::{Deserialize, Serialize};

use wandel_core::SuffixTransform;

use crate::LexiconError;
use crate::lemma::Lemma;

/// An adjective: a lemma refined with optional comparative and superlative
/// forms.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Adjective {
    lemma: Lemma,
    comparative: Option<String>,
    superlative: Option<String>,
}

impl Adjective {
    /// Create an adjective without degree forms.
    pub fn new(lemma: Lemma) -> Self {
        Self::with_details(lemma, None, None)
    }

    /// Create an adjective with its degrees of comparison.
    pub fn with_details(
        lemma: Lemma,
        comparative: Option<String>,
        superlative: Option<String>,
    ) -> Self {
        Self {
            lemma,
            comparative,
            superlative,
        }
    }

    pub fn lemma(&self) -> &Lemma {
        &self.lemma
    }

    pub fn comparative(&self) -> Option<&str> {
        self.comparative.as_deref()
    }

    pub fn superlative(&self) -> Option<&str> {
        self.superlative.as_deref()
    }

    /// Derive the positive-to-comparative rule (hoch -> höher).
    pub fn comparative_transform(&self) -> Result<SuffixTransform, LexiconError> {
        self.degree_transform("comparative", self.comparative())
    }

    /// Derive the positive-to-superlative rule (hoch -> höchsten).
    pub fn superlative_transform(&self) -> Result<SuffixTransform, LexiconError> {
        self.degree_transform("superlative", self.superlative())
    }

    fn degree_transform(
        &self,
        degree: &str,
        derived: Option<&str>,
    ) -> Result<SuffixTransform, LexiconError> {
        let derived = derived.ok_or_else(|| LexiconError::MissingForm(degree.to_string()))?;
        Ok(SuffixTransform::compute(self.lemma.expression(), derived)?)
    }
}
