//! Derived user statistics
//!
//! [`UserStats`] is always recomputed from the complete drink history -
//! there is no incremental counter to drift out of sync with the records.
//! Recomputation is O(n), idempotent, and insensitive to record order, so
//! concurrent readers converge on the same aggregate for the same history.

mod streaks;

pub use streaks::current_streak;

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::domain::{DrinkRecord, UserStats};
use crate::progression::level_from_xp;

/// Recompute the aggregate view from the full drink history.
///
/// `today` anchors the streak computation; the caller resolves it once per
/// read so repeated evaluation stays referentially identical.
pub fn compute_user_stats(drinks: &[DrinkRecord], today: NaiveDate) -> UserStats {
    let total_xp = drinks
        .iter()
        .fold(0u64, |sum, d| sum.saturating_add(d.xp_reward));

    let unique_drinks = drinks
        .iter()
        .map(|d| d.drink_name.as_str())
        .collect::<HashSet<_>>()
        .len() as u64;

    UserStats {
        total_xp,
        level: level_from_xp(total_xp),
        total_drinks: drinks.len() as u64,
        unique_drinks,
        favorite_category: favorite_category(drinks),
        current_streak: current_streak(drinks, today),
        last_drink_date: drinks.iter().map(|d| d.timestamp).max(),
    }
}

/// Most-logged category; ties go to the category seen first in the
/// history. "beer" when there are no drinks at all.
fn favorite_category(drinks: &[DrinkRecord]) -> String {
    // First-encounter order, so the tie-break is deterministic for a given
    // record order (descending-count sort, stable).
    let mut counts: Vec<(&str, u64)> = Vec::new();
    for drink in drinks {
        match counts.iter_mut().find(|(c, _)| *c == drink.category) {
            Some((_, n)) => *n += 1,
            None => counts.push((&drink.category, 1)),
        }
    }

    counts
        .iter()
        .fold(None::<(&str, u64)>, |best, &(category, n)| match best {
            Some((_, max)) if n <= max => best,
            _ => Some((category, n)),
        })
        .map(|(category, _)| category.to_string())
        .unwrap_or_else(|| "beer".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn drink(name: &str, category: &str, xp: u64, day: &str) -> DrinkRecord {
        let date: NaiveDate = day.parse().unwrap();
        let ts = Utc.from_utc_datetime(&date.and_hms_opt(21, 0, 0).unwrap());
        DrinkRecord::new(name, category, xp, ts)
    }

    fn today() -> NaiveDate {
        "2025-06-10".parse().unwrap()
    }

    #[test]
    fn test_empty_history_yields_defaults() {
        let stats = compute_user_stats(&[], today());
        assert_eq!(stats, UserStats::default());
    }

    #[test]
    fn test_aggregates_from_history() {
        let drinks = [
            drink("Cristal", "beer", 10, "2025-06-09"),
            drink("Cristal", "beer", 10, "2025-06-10"),
            drink("Pisco Sour", "cocktail", 40, "2025-06-10"),
        ];
        let stats = compute_user_stats(&drinks, today());

        assert_eq!(stats.total_xp, 60);
        assert_eq!(stats.level, 1);
        assert_eq!(stats.total_drinks, 3);
        assert_eq!(stats.unique_drinks, 2);
        assert_eq!(stats.favorite_category, "beer");
        assert_eq!(stats.current_streak, 2);
        assert_eq!(
            stats.last_drink_date.unwrap().date_naive(),
            today()
        );
    }

    #[test]
    fn test_level_follows_progression_curve() {
        // 50 drinks x 12 XP = 600 XP: past the 500 threshold for level 2.
        let drinks: Vec<DrinkRecord> = (0..50)
            .map(|i| drink(&format!("Beer {i}"), "beer", 12, "2025-06-10"))
            .collect();
        let stats = compute_user_stats(&drinks, today());

        assert_eq!(stats.total_xp, 600);
        assert_eq!(stats.level, 2);
        assert_eq!(stats.unique_drinks, 50);
    }

    #[test]
    fn test_favorite_category_ties_go_to_first_seen() {
        let drinks = [
            drink("Merlot", "wine", 20, "2025-06-10"),
            drink("Cristal", "beer", 10, "2025-06-10"),
            drink("Syrah", "wine", 25, "2025-06-10"),
            drink("Escudo", "beer", 10, "2025-06-10"),
        ];
        let stats = compute_user_stats(&drinks, today());
        assert_eq!(stats.favorite_category, "wine");
    }

    #[test]
    fn test_recomputation_is_order_insensitive() {
        let mut drinks = vec![
            drink("Cristal", "beer", 10, "2025-06-08"),
            drink("Merlot", "wine", 20, "2025-06-09"),
            drink("Piscola", "cocktail", 20, "2025-06-10"),
        ];
        let forward = compute_user_stats(&drinks, today());
        drinks.reverse();
        let backward = compute_user_stats(&drinks, today());

        assert_eq!(forward.total_xp, backward.total_xp);
        assert_eq!(forward.current_streak, backward.current_streak);
        assert_eq!(forward.last_drink_date, backward.last_drink_date);
        assert_eq!(forward.unique_drinks, backward.unique_drinks);
    }

    #[test]
    fn test_deleting_a_drink_takes_back_exactly_its_xp() {
        let drinks = vec![
            drink("Cristal", "beer", 10, "2025-06-09"),
            drink("Terremoto", "cocktail", 50, "2025-06-10"),
        ];
        let before = compute_user_stats(&drinks, today());
        let after = compute_user_stats(&drinks[..1], today());

        assert_eq!(before.total_xp - after.total_xp, 50);
        assert_eq!(before.total_drinks - after.total_drinks, 1);
    }
}
