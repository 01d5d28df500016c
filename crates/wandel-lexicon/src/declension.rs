// NounDeclension: the sparse grid of declined noun forms

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::grammar::{Kasus, Numerus};

/// Placeholder for a numerus with no forms at all.
const NO_NUMERUS_ROW: &str = "\u{2022}"; // •

/// Placeholder for a single missing form within a numerus row.
const NO_KASUS_FORM: &str = "\u{2014}"; // —

const FORM_SEPARATOR: &str = ", ";

/// The declined forms of a noun, keyed by numerus and case.
///
/// The grid is sparse: a form may be missing for any coordinate (singularia
/// tantum have no plural row at all), but a declension always carries at
/// least one form. Empty strings are filtered out at construction so that
/// "no form" has exactly one representation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NounDeclension {
    forms: BTreeMap<Numerus, BTreeMap<Kasus, String>>,
}

impl NounDeclension {
    /// Build a declension from a nested form map.
    ///
    /// Empty form strings and numerus rows left empty after filtering are
    /// dropped; returns `None` when no form remains at all.
    pub fn from_forms(forms: BTreeMap<Numerus, BTreeMap<Kasus, String>>) -> Option<Self> {
        let filtered: BTreeMap<Numerus, BTreeMap<Kasus, String>> = forms
            .into_iter()
            .map(|(numerus, row)| {
                let filtered_row: BTreeMap<Kasus, String> = row
                    .into_iter()
                    .filter(|(_, expression)| !expression.is_empty())
                    .collect();
                (numerus, filtered_row)
            })
            .filter(|(_, row)| !row.is_empty())
            .collect();

        if filtered.is_empty() {
            None
        } else {
            Some(Self { forms: filtered })
        }
    }

    /// Build a declension from the eight enumerated forms, singular first,
    /// each numerus in [`Kasus::ALL`] order. An empty string means the form
    /// is absent.
    #[allow(clippy::too_many_arguments)]
    pub fn from_grid(
        singular_nominative: &str,
        singular_accusative: &str,
        singular_dative: &str,
        singular_genitive: &str,
        plural_nominative: &str,
        plural_accusative: &str,
        plural_dative: &str,
        plural_genitive: &str,
    ) -> Option<Self> {
        let rows = [
            (
                Numerus::Singular,
                [
                    singular_nominative,
                    singular_accusative,
                    singular_dative,
                    singular_genitive,
                ],
            ),
            (
                Numerus::Plural,
                [
                    plural_nominative,
                    plural_accusative,
                    plural_dative,
                    plural_genitive,
                ],
            ),
        ];

        let forms = rows
            .into_iter()
            .map(|(numerus, expressions)| {
                let row = Kasus::ALL
                    .into_iter()
                    .zip(expressions)
                    .map(|(kasus, expression)| (kasus, expression.to_string()))
                    .collect();
                (numerus, row)
            })
            .collect();

        Self::from_forms(forms)
    }

    /// Look up the form at a grid coordinate.
    pub fn form(&self, numerus: Numerus, kasus: Kasus) -> Option<&str> {
        self.forms
            .get(&numerus)
            .and_then(|row| row.get(&kasus))
            .map(String::as_str)
    }

    /// Iterate over all present forms in grid order.
    pub fn forms(&self) -> impl Iterator<Item = (Numerus, Kasus, &str)> {
        self.forms.iter().flat_map(|(&numerus, row)| {
            row.iter()
                .map(move |(&kasus, expression)| (numerus, kasus, expression.as_str()))
        })
    }
}

impl fmt::Display for NounDeclension {
    /// Bracketed grid notation: one inner list per numerus in `Kasus::ALL`
    /// order, `—` for a missing form, `•` for a numerus with no forms.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<String> = Numerus::ALL
            .into_iter()
            .map(|numerus| match self.forms.get(&numerus) {
                None => NO_NUMERUS_ROW.to_string(),
                Some(row) => {
                    let entries: Vec<&str> = Kasus::ALL
                        .into_iter()
                        .map(|kasus| row.get(&kasus).map_or(NO_KASUS_FORM, String::as_str))
                        .collect();
                    format!("[{}]", entries.join(FORM_SEPARATOR))
                }
            })
            .collect();

        write!(f, "[{}]", rows.join(FORM_SEPARATOR))
    }
}
