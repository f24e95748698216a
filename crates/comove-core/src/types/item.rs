//! Fuzzy item keys: the boolean columns of a transaction table.
//!
//! A key is `<Commodity>_<L|M|H>_<I|D>` for a magnitude bucket combined with a
//! movement, or `<Commodity>_S` for an unchanged price. Keys are only ever
//! built through [`ItemKey::movement`] and [`ItemKey::stable`], so the
//! separator layout lives in one place.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{COLUMNS_PER_COMMODITY, ITEM_KEY_SEPARATOR};
use crate::errors::TableError;

/// Period-over-period direction of a price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Increase,
    Decrease,
    Stable,
}

impl Direction {
    /// Classify a signed percentage change. Only an exact zero is `Stable`.
    pub fn from_change(change: f64) -> Self {
        if change > 0.0 {
            Self::Increase
        } else if change < 0.0 {
            Self::Decrease
        } else {
            Self::Stable
        }
    }

    /// The movement carried by this direction, `None` for `Stable`.
    pub fn movement(self) -> Option<Movement> {
        match self {
            Self::Increase => Some(Movement::Increase),
            Self::Decrease => Some(Movement::Decrease),
            Self::Stable => None,
        }
    }
}

/// A direction that carries a magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Movement {
    Increase,
    Decrease,
}

impl Movement {
    pub const ALL: [Movement; 2] = [Movement::Increase, Movement::Decrease];

    pub fn code(self) -> char {
        match self {
            Self::Increase => 'I',
            Self::Decrease => 'D',
        }
    }

    fn from_code(code: &str) -> Option<Self> {
        match code {
            "I" => Some(Self::Increase),
            "D" => Some(Self::Decrease),
            _ => None,
        }
    }
}

impl From<Movement> for Direction {
    fn from(m: Movement) -> Self {
        match m {
            Movement::Increase => Direction::Increase,
            Movement::Decrease => Direction::Decrease,
        }
    }
}

/// Fuzzy magnitude bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Bucket {
    Low,
    Medium,
    High,
}

impl Bucket {
    pub const ALL: [Bucket; 3] = [Bucket::Low, Bucket::Medium, Bucket::High];

    pub fn code(self) -> char {
        match self {
            Self::Low => 'L',
            Self::Medium => 'M',
            Self::High => 'H',
        }
    }

    fn from_code(code: &str) -> Option<Self> {
        match code {
            "L" => Some(Self::Low),
            "M" => Some(Self::Medium),
            "H" => Some(Self::High),
            _ => None,
        }
    }
}

/// The label half of an item key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ItemLabel {
    Move { bucket: Bucket, movement: Movement },
    Stable,
}

/// One boolean column of the transaction table.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct ItemKey {
    commodity: String,
    label: ItemLabel,
}

impl ItemKey {
    /// Key for `commodity` moving in `movement` with magnitude `bucket`.
    pub fn movement(commodity: impl Into<String>, bucket: Bucket, movement: Movement) -> Self {
        Self {
            commodity: commodity.into(),
            label: ItemLabel::Move { bucket, movement },
        }
    }

    /// Key for `commodity` being unchanged.
    pub fn stable(commodity: impl Into<String>) -> Self {
        Self {
            commodity: commodity.into(),
            label: ItemLabel::Stable,
        }
    }

    /// The seven keys of one commodity, in column order:
    /// `L_I, L_D, M_I, M_D, H_I, H_D, S`.
    pub fn columns_for(commodity: &str) -> Vec<ItemKey> {
        let mut keys = Vec::with_capacity(COLUMNS_PER_COMMODITY);
        for bucket in Bucket::ALL {
            for movement in Movement::ALL {
                keys.push(Self::movement(commodity, bucket, movement));
            }
        }
        keys.push(Self::stable(commodity));
        keys
    }

    pub fn commodity(&self) -> &str {
        &self.commodity
    }

    pub fn label(&self) -> ItemLabel {
        self.label
    }

    pub fn is_stable(&self) -> bool {
        matches!(self.label, ItemLabel::Stable)
    }
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = ITEM_KEY_SEPARATOR;
        match self.label {
            ItemLabel::Move { bucket, movement } => write!(
                f,
                "{}{sep}{}{sep}{}",
                self.commodity,
                bucket.code(),
                movement.code()
            ),
            ItemLabel::Stable => write!(f, "{}{sep}S", self.commodity),
        }
    }
}

impl FromStr for ItemKey {
    type Err = TableError;

    /// Parses from the right, so commodity names may contain underscores.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TableError::InvalidItemKey { key: s.to_string() };

        let (head, last) = s.rsplit_once(ITEM_KEY_SEPARATOR).ok_or_else(invalid)?;
        if last == "S" {
            if head.is_empty() {
                return Err(invalid());
            }
            return Ok(Self::stable(head));
        }

        let movement = Movement::from_code(last).ok_or_else(invalid)?;
        let (commodity, bucket) = head.rsplit_once(ITEM_KEY_SEPARATOR).ok_or_else(invalid)?;
        let bucket = Bucket::from_code(bucket).ok_or_else(invalid)?;
        if commodity.is_empty() {
            return Err(invalid());
        }
        Ok(Self::movement(commodity, bucket, movement))
    }
}

impl From<ItemKey> for String {
    fn from(key: ItemKey) -> Self {
        key.to_string()
    }
}

impl TryFrom<String> for ItemKey {
    type Error = TableError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_column_grammar() {
        let key = ItemKey::movement("Beras", Bucket::High, Movement::Increase);
        assert_eq!(key.to_string(), "Beras_H_I");
        assert_eq!(ItemKey::stable("Beras").to_string(), "Beras_S");
    }

    #[test]
    fn parse_keeps_underscores_in_commodity() {
        let key: ItemKey = "Cabai_Merah_M_D".parse().unwrap();
        assert_eq!(key.commodity(), "Cabai_Merah");
        assert_eq!(
            key.label(),
            ItemLabel::Move {
                bucket: Bucket::Medium,
                movement: Movement::Decrease
            }
        );

        let stable: ItemKey = "Bawang_Merah_S".parse().unwrap();
        assert!(stable.is_stable());
        assert_eq!(stable.commodity(), "Bawang_Merah");
    }

    #[test]
    fn parse_rejects_malformed_keys() {
        for bad in ["Beras", "Beras_L_", "Beras_L", "Beras_X_I", "_S", "_L_I", "BerasLI"] {
            assert!(bad.parse::<ItemKey>().is_err(), "{bad} should not parse");
        }
    }

    #[test]
    fn columns_for_has_fixed_order() {
        let names: Vec<String> = ItemKey::columns_for("Gula")
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(
            names,
            ["Gula_L_I", "Gula_L_D", "Gula_M_I", "Gula_M_D", "Gula_H_I", "Gula_H_D", "Gula_S"]
        );
    }

    #[test]
    fn direction_from_change() {
        assert_eq!(Direction::from_change(0.5), Direction::Increase);
        assert_eq!(Direction::from_change(-0.5), Direction::Decrease);
        assert_eq!(Direction::from_change(0.0), Direction::Stable);
        assert_eq!(Direction::from_change(-0.0), Direction::Stable);
    }
}
