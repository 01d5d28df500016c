// Verb: lemma + principal parts

use serde::{Deserialize, Serialize};

use crate::lemma::Lemma;

/// A verb: a lemma refined with its optional principal parts.
///
/// The parts are plain recorded forms; German verb conjugation changes the
/// word at both ends (ging, gemacht), so no suffix rule is derived from them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Verb {
    lemma: Lemma,
    praesens: Option<String>,
    praeteritum: Option<String>,
    partizip_perfekt: Option<String>,
    imperativ_singular: Option<String>,
}

impl Verb {
    /// Create a verb without principal parts.
    pub fn new(lemma: Lemma) -> Self {
        Self::with_details(lemma, None, None, None, None)
    }

    /// Create a verb with its principal parts.
    pub fn with_details(
        lemma: Lemma,
        praesens: Option<String>,
        praeteritum: Option<String>,
        partizip_perfekt: Option<String>,
        imperativ_singular: Option<String>,
    ) -> Self {
        Self {
            lemma,
            praesens,
            praeteritum,
            partizip_perfekt,
            imperativ_singular,
        }
    }

    pub fn lemma(&self) -> &Lemma {
        &self.lemma
    }

    pub fn praesens(&self) -> Option<&str> {
        self.praesens.as_deref()
    }

    pub fn praeteritum(&self) -> Option<&str> {
        self.praeteritum.as_deref()
    }

    pub fn partizip_perfekt(&self) -> Option<&str> {
        self.partizip_perfekt.as_deref()
    }

    pub fn imperativ_singular(&self) -> Option<&str> {
        self.imperativ_singular.as_deref()
    }
}
