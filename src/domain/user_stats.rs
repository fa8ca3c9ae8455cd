use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Aggregate view over a user's complete drink history.
///
/// This is a derived snapshot, not ground truth: it is recomputed from the
/// full record list on every read (see [`crate::stats::compute_user_stats`])
/// and handed to the achievement engine as-is. Date-sensitive fields like
/// `current_streak` are resolved by the caller before evaluation - the
/// engines never consult the wall clock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserStats {
    /// Lifetime XP across all drinks and invitation rewards
    pub total_xp: u64,

    /// Level derived from `total_xp` via the progression curve
    pub level: u32,

    /// Total number of logged drinks
    pub total_drinks: u64,

    /// Number of distinct drink names logged
    pub unique_drinks: u64,

    /// Most-logged category ("beer" when no drinks exist)
    pub favorite_category: String,

    /// Consecutive calendar days with at least one drink
    pub current_streak: u32,

    /// Timestamp of the most recent drink, if any
    pub last_drink_date: Option<DateTime<Utc>>,
}

impl Default for UserStats {
    fn default() -> Self {
        Self {
            total_xp: 0,
            level: 1,
            total_drinks: 0,
            unique_drinks: 0,
            favorite_category: "beer".to_string(),
            current_streak: 0,
            last_drink_date: None,
        }
    }
}
