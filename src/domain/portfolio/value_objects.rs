use derive_more::{Deref, Display, Into};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumCount, EnumIter, IntoEnumIterator};

/// Value Object - market-data identifier of a token (e.g. `bitcoin`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deref, Display, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenId(String);

impl TokenId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TokenId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for TokenId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Value Object - quantity of a token the user owns, never negative
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Into, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Holdings(f64);

impl Holdings {
    pub const ZERO: Holdings = Holdings(0.0);
    /// Largest quantity kept; keeps `price * holdings` finite for any sane price.
    pub const MAX: f64 = 1e15;

    /// Negative, NaN and infinite quantities collapse to zero; larger than
    /// [`Holdings::MAX`] is capped.
    pub fn new(value: f64) -> Self {
        if value.is_finite() && value > 0.0 {
            Self(value.min(Self::MAX))
        } else {
            Self::ZERO
        }
    }

    /// Parse free-text input from the holdings editor; anything unparsable is zero.
    pub fn parse(input: &str) -> Self {
        input.trim().parse::<f64>().map(Self::new).unwrap_or(Self::ZERO)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl From<f64> for Holdings {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

/// Fixed allocation palette; a token takes the color at its watchlist index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCount, AsRefStr)]
pub enum PaletteColor {
    #[strum(serialize = "#ff7f50")]
    Coral,
    #[strum(serialize = "#9370db")]
    MediumPurple,
    #[strum(serialize = "#00ffff")]
    Cyan,
    #[strum(serialize = "#32cd32")]
    LimeGreen,
    #[strum(serialize = "#4169e1")]
    RoyalBlue,
}

impl PaletteColor {
    /// Cycles through the palette, so index 5 wraps back to the first color.
    pub fn for_index(index: usize) -> Self {
        Self::iter()
            .nth(index % Self::COUNT)
            .unwrap_or(PaletteColor::Coral)
    }

    pub fn hex(&self) -> &str {
        self.as_ref()
    }
}
