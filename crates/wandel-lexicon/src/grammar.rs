// Grammatical coordinate enums for the declension grid

use serde::{Deserialize, Serialize};

/// Grammatical number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Numerus {
    Singular,
    Plural,
}

impl Numerus {
    /// All numeri, in grid order.
    pub const ALL: [Numerus; 2] = [Numerus::Singular, Numerus::Plural];
}

/// Grammatical case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Kasus {
    Nominativ,
    Akkusativ,
    Dativ,
    Genitiv,
}

impl Kasus {
    /// All cases, in grid order.
    pub const ALL: [Kasus; 4] = [
        Kasus::Nominativ,
        Kasus::Akkusativ,
        Kasus::Dativ,
        Kasus::Genitiv,
    ];
}

/// Grammatical gender of a noun.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Genus {
    Maskulin,
    Feminin,
    Neutral,
}

/// Which of a noun's declensions a grid entry belongs to.
///
/// Some nouns decline in two ways (der Atlas: die Atlasse / die Atlanten);
/// the slot distinguishes the main declension from the alternative one when
/// both are flattened into a single persisted grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DeclensionSlot {
    Main,
    Alternative,
}
