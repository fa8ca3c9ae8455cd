use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single logged drink, as stored by the backing document store.
///
/// Records are the source of truth: every aggregate ([`super::UserStats`])
/// is recomputed from the full list of a user's records, and deleting a
/// record takes exactly its `xp_reward` back out of the totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrinkRecord {
    /// Display name of the drink (e.g. "Cristal", "Pisco Sour")
    pub drink_name: String,

    /// Category identifier (e.g. "beer", "wine", "cocktail")
    pub category: String,

    /// XP granted when this drink was logged
    pub xp_reward: u64,

    /// When the drink was logged
    pub timestamp: DateTime<Utc>,
}

impl DrinkRecord {
    pub fn new(
        drink_name: impl Into<String>,
        category: impl Into<String>,
        xp_reward: u64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            drink_name: drink_name.into(),
            category: category.into(),
            xp_reward,
            timestamp,
        }
    }
}
