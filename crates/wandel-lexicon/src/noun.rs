// Noun: lemma + genus + declension grids

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use wandel_core::SuffixTransform;

use crate::LexiconError;
use crate::declension::NounDeclension;
use crate::grammar::{DeclensionSlot, Genus, Kasus, Numerus};
use crate::lemma::Lemma;

/// A noun: a lemma refined with a genus and one or two declension grids.
///
/// Every noun carries a main declension; a second, alternative declension is
/// optional (der Atlas: die Atlasse / die Atlanten). The genus is optional
/// because pluralia tantum ("Leute") have none.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Noun {
    lemma: Lemma,
    genus: Option<Genus>,
    declension: NounDeclension,
    alternative_declension: Option<NounDeclension>,
}

impl Noun {
    /// Create a noun from a lemma and its main declension.
    pub fn new(lemma: Lemma, declension: NounDeclension) -> Self {
        Self::with_details(lemma, None, declension, None)
    }

    /// Create a noun with genus and an optional alternative declension.
    pub fn with_details(
        lemma: Lemma,
        genus: Option<Genus>,
        declension: NounDeclension,
        alternative_declension: Option<NounDeclension>,
    ) -> Self {
        Self {
            lemma,
            genus,
            declension,
            alternative_declension,
        }
    }

    pub fn lemma(&self) -> &Lemma {
        &self.lemma
    }

    pub fn genus(&self) -> Option<Genus> {
        self.genus
    }

    pub fn declension(&self) -> &NounDeclension {
        &self.declension
    }

    pub fn alternative_declension(&self) -> Option<&NounDeclension> {
        self.alternative_declension.as_ref()
    }

    /// Flatten both declensions into a single sparse grid keyed by explicit
    /// `(slot, numerus, kasus)` coordinates, the shape a persistence layer
    /// stores and queries.
    pub fn declension_grid(&self) -> BTreeMap<(DeclensionSlot, Numerus, Kasus), &str> {
        let slots = [
            (DeclensionSlot::Main, Some(&self.declension)),
            (
                DeclensionSlot::Alternative,
                self.alternative_declension.as_ref(),
            ),
        ];

        let mut grid = BTreeMap::new();
        for (slot, declension) in slots {
            if let Some(declension) = declension {
                for (numerus, kasus, expression) in declension.forms() {
                    grid.insert((slot, numerus, kasus), expression);
                }
            }
        }
        grid
    }

    /// Derive the singular-to-plural rule of the main declension for a case.
    ///
    /// Fails with [`LexiconError::MissingForm`] when either form is absent
    /// from the grid, and propagates the transform engine's rejection when
    /// the pair violates its length invariant.
    pub fn plural_transform(&self, kasus: Kasus) -> Result<SuffixTransform, LexiconError> {
        let singular = self.grid_form(Numerus::Singular, kasus)?;
        let plural = self.grid_form(Numerus::Plural, kasus)?;
        Ok(SuffixTransform::compute(singular, plural)?)
    }

    fn grid_form(&self, numerus: Numerus, kasus: Kasus) -> Result<&str, LexiconError> {
        self.declension
            .form(numerus, kasus)
            .ok_or_else(|| LexiconError::MissingForm(format!("{numerus:?} {kasus:?}")))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    fn lemma(expression: &str) -> Lemma {
        let categories: BTreeSet<String> = ["Beispiele".to_string()].into();
        Lemma::new(expression, categories).unwrap()
    }

    fn buch_declension() -> NounDeclension {
        NounDeclension::from_grid(
            "Buch",
            "Buch",
            "Buch",
            "Buches",
            "B\u{00FC}cher",
            "B\u{00FC}cher",
            "B\u{00FC}chern",
            "B\u{00FC}cher",
        )
        .unwrap()
    }

    #[test]
    fn noun_exposes_its_parts() {
        let noun = Noun::with_details(
            lemma("Buch"),
            Some(Genus::Neutral),
            buch_declension(),
            None,
        );

        assert_eq!(noun.lemma().expression(), "Buch");
        assert_eq!(noun.genus(), Some(Genus::Neutral));
        assert_eq!(
            noun.declension().form(Numerus::Plural, Kasus::Dativ),
            Some("B\u{00FC}chern")
        );
        assert!(noun.alternative_declension().is_none());
    }

    #[test]
    fn structural_equality() {
        let noun = Noun::new(lemma("Buch"), buch_declension());
        let very_same_noun = Noun::new(lemma("Buch"), buch_declension());
        let different_noun =
            Noun::with_details(lemma("Buch"), Some(Genus::Neutral), buch_declension(), None);

        assert_eq!(noun, very_same_noun);
        assert_ne!(noun, different_noun);
    }

    #[test]
    fn grid_covers_both_slots() {
        let alternative = NounDeclension::from_grid(
            "Atlas", "Atlas", "Atlas", "Atlas", "Atlanten", "Atlanten", "Atlanten", "Atlanten",
        )
        .unwrap();
        let main = NounDeclension::from_grid(
            "Atlas", "Atlas", "Atlas", "Atlas", "Atlasse", "Atlasse", "Atlassen", "Atlasse",
        )
        .unwrap();

        let noun = Noun::with_details(
            lemma("Atlas"),
            Some(Genus::Maskulin),
            main,
            Some(alternative),
        );

        let grid = noun.declension_grid();
        assert_eq!(
            grid.get(&(DeclensionSlot::Main, Numerus::Plural, Kasus::Nominativ)),
            Some(&"Atlasse")
        );
        assert_eq!(
            grid.get(&(DeclensionSlot::Alternative, Numerus::Plural, Kasus::Nominativ)),
            Some(&"Atlanten")
        );
        assert_eq!(grid.len(), 16);
    }

    #[test]
    fn grid_is_sparse() {
        let singular_only =
            NounDeclension::from_grid("Obst", "Obst", "Obst", "Obstes", "", "", "", "").unwrap();
        let noun = Noun::new(lemma("Obst"), singular_only);

        let grid = noun.declension_grid();
        assert_eq!(grid.len(), 4);
        assert!(!grid.contains_key(&(DeclensionSlot::Main, Numerus::Plural, Kasus::Nominativ)));
    }

    // -- rule derivation --

    #[test]
    fn plural_transform_feeds_the_engine() {
        let noun = Noun::new(lemma("Buch"), buch_declension());

        let transform = noun.plural_transform(Kasus::Nominativ).unwrap();
        assert_eq!(transform, SuffixTransform::new("", true, "er"));

        // "Buches" and "Bücher" share the "e" after the stem, so only the
        // final consonant is replaced.
        let transform = noun.plural_transform(Kasus::Genitiv).unwrap();
        assert_eq!(transform, SuffixTransform::new("s", true, "r"));
    }

    #[test]
    fn plural_transform_without_plural_form_fails() {
        let singular_only =
            NounDeclension::from_grid("Obst", "Obst", "Obst", "Obstes", "", "", "", "").unwrap();
        let noun = Noun::new(lemma("Obst"), singular_only);

        assert_eq!(
            noun.plural_transform(Kasus::Nominativ),
            Err(LexiconError::MissingForm("Plural Nominativ".to_string()))
        );
    }

    #[test]
    fn serde_roundtrip() {
        let noun = Noun::with_details(
            lemma("Buch"),
            Some(Genus::Neutral),
            buch_declension(),
            None,
        );

        let json = serde_json::to_string(&noun).unwrap();
        let restored: Noun = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, noun);
    }
}
