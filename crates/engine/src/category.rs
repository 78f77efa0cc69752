use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use unicode_normalization::UnicodeNormalization;

use crate::EngineError;

/// The fixed set of expense categories.
///
/// Categories are stored and displayed by their Russian label; the enum keeps
/// matching and aggregation strongly typed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Groceries,
    Transport,
    Entertainment,
    Health,
    Clothing,
    Housing,
    Education,
    Other,
}

impl Category {
    /// All categories, in the order the selector and the breakdown show them.
    pub const ALL: [Category; 8] = [
        Category::Groceries,
        Category::Transport,
        Category::Entertainment,
        Category::Health,
        Category::Clothing,
        Category::Housing,
        Category::Education,
        Category::Other,
    ];

    /// Display label, also the value stored in the persisted blob.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Category::Groceries => "Продукты",
            Category::Transport => "Транспорт",
            Category::Entertainment => "Развлечения",
            Category::Health => "Здоровье",
            Category::Clothing => "Одежда",
            Category::Housing => "Жильё",
            Category::Education => "Образование",
            Category::Other => "Другое",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<&str> for Category {
    type Error = EngineError;

    /// Matches a stored label against the fixed set.
    ///
    /// Comparison is NFC-normalized so labels written by other tools (for
    /// example `Жильё` with a combining diaeresis) still resolve.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized: String = value.trim().nfc().collect();
        Category::ALL
            .into_iter()
            .find(|category| category.label() == normalized)
            .ok_or_else(|| EngineError::UnknownCategory(value.to_string()))
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Category::try_from(label.as_str()).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::try_from(category.label()).unwrap(), category);
        }
    }

    #[test]
    fn matching_is_nfc_normalized() {
        // `Жильё` with `ё` decomposed into `е` + U+0308.
        let decomposed = "Жил\u{44c}\u{435}\u{308}";
        assert_eq!(Category::try_from(decomposed).unwrap(), Category::Housing);
    }

    #[test]
    fn unknown_label_is_rejected() {
        assert!(matches!(
            Category::try_from("Питомцы"),
            Err(EngineError::UnknownCategory(_))
        ));
    }
}
