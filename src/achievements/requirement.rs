use serde::{Deserialize, Serialize};

/// Calendar window for temporal requirements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timeframe {
    Day,
    Month,
    Year,
}

/// Unlock condition attached to an achievement.
///
/// Tagged by `type` in catalog JSON (e.g.
/// `{"type": "category_drinks", "value": 5, "category": "beer"}`), so the
/// serialized form matches the stored catalog documents. Adding a variant
/// is a compile-time checked extension point: every match over this enum
/// is exhaustive.
///
/// The temporal variants (`DailyDrinks`, `MonthlyDrinks`, `YearlyDrinks`)
/// are reserved: they exist in catalog data but never unlock yet. See
/// [`crate::achievements::is_unlocked`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Requirement {
    /// Total drinks logged reaches `value`
    DrinksCount { value: u64 },
    /// Lifetime XP reaches `value`
    XpTotal { value: u64 },
    /// Level reaches `value`
    Level { value: u64 },
    /// Distinct drink names logged reaches `value`
    UniqueDrinks { value: u64 },
    /// Daily streak reaches `value` days
    Streak { value: u64 },
    /// Drinks in `category` reach `value` (needs the drink history)
    CategoryDrinks { value: u64, category: String },
    /// Logs of the exact `drink_name` reach `value` (needs the history)
    SpecificDrink { value: u64, drink_name: String },
    /// Reserved: `value` drinks within one day
    DailyDrinks { value: u64, timeframe: Timeframe },
    /// Reserved: `value` drinks within one month
    MonthlyDrinks { value: u64, timeframe: Timeframe },
    /// Reserved: `value` drinks within one year
    YearlyDrinks { value: u64, timeframe: Timeframe },
}

impl Requirement {
    /// Raw threshold, regardless of what it counts.
    ///
    /// Used by next-achievement ranking, which compares thresholds across
    /// requirement kinds on this single scale (see `Catalog::next_achievement`).
    pub fn threshold(&self) -> u64 {
        match self {
            Self::DrinksCount { value }
            | Self::XpTotal { value }
            | Self::Level { value }
            | Self::UniqueDrinks { value }
            | Self::Streak { value }
            | Self::CategoryDrinks { value, .. }
            | Self::SpecificDrink { value, .. }
            | Self::DailyDrinks { value, .. }
            | Self::MonthlyDrinks { value, .. }
            | Self::YearlyDrinks { value, .. } => *value,
        }
    }

    /// Whether this is one of the reserved time-window requirements
    pub fn is_temporal(&self) -> bool {
        matches!(
            self,
            Self::DailyDrinks { .. } | Self::MonthlyDrinks { .. } | Self::YearlyDrinks { .. }
        )
    }

    /// Whether evaluation needs the per-drink history, not just aggregates
    pub fn needs_drink_history(&self) -> bool {
        matches!(self, Self::CategoryDrinks { .. } | Self::SpecificDrink { .. })
    }
}
