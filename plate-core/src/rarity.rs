//! Rarity tiers derived from a plate's letter and digit repetition.
use crate::plate::PlateString;
use serde::{Deserialize, Serialize};

/// Hand-picked plates that are always legendary.
///
/// Layered over the general rule in [`classify`]; plates the rule already
/// covers may appear here too.
pub const LEGENDARY_PLATES: [&str; 5] = ["О000ОО", "А777АА", "Р999РР", "Е777ВА", "М666ММ"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Legendary,
}

impl Rarity {
    pub const ALL: [Self; 4] = [Self::Common, Self::Uncommon, Self::Rare, Self::Legendary];

    /// Stable identifier used for translation keys and CSS classes.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Common => "common",
            Self::Uncommon => "uncommon",
            Self::Rare => "rare",
            Self::Legendary => "legendary",
        }
    }

    /// Decorative price tag shown under a settled plate.
    #[must_use]
    pub const fn price_label(self) -> &'static str {
        match self {
            Self::Legendary => "1 000 000 ₽",
            Self::Rare => "300 000 ₽",
            Self::Uncommon => "100 000 ₽",
            Self::Common => "10 000 ₽",
        }
    }

    /// Anything above the lowest tier counts as a win.
    #[must_use]
    pub const fn is_win(self) -> bool {
        !matches!(self, Self::Common)
    }
}

fn is_listed_legendary(plate: &PlateString) -> bool {
    let text = plate.to_string();
    LEGENDARY_PLATES.contains(&text.as_str())
}

fn all_equal(chars: &[char]) -> bool {
    chars.windows(2).all(|pair| pair[0] == pair[1])
}

/// Classify a plate. Total and deterministic; the first matching rule wins.
#[must_use]
pub fn classify(plate: &PlateString) -> Rarity {
    if is_listed_legendary(plate) {
        return Rarity::Legendary;
    }

    let digits_same = all_equal(&plate.digits());
    let letters_same = all_equal(&plate.letters());

    match (digits_same, letters_same) {
        (true, true) => Rarity::Legendary,
        (true, false) => Rarity::Rare,
        (false, true) => Rarity::Uncommon,
        (false, false) => Rarity::Common,
    }
}
