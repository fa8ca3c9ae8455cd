//! Daily streak computation
//!
//! A streak is a run of consecutive calendar days each containing at least
//! one drink. It is alive as long as the most recent drink was today or
//! yesterday; `today` comes from the caller so the computation stays
//! deterministic.

use std::collections::HashSet;

use chrono::{Days, NaiveDate};

use crate::domain::DrinkRecord;

/// Current daily streak ending today or yesterday (0 otherwise)
pub fn current_streak(drinks: &[DrinkRecord], today: NaiveDate) -> u32 {
    let days: HashSet<NaiveDate> = drinks.iter().map(|d| d.timestamp.date_naive()).collect();
    if days.is_empty() {
        return 0;
    }

    // The streak anchors on today if a drink was logged today, otherwise on
    // yesterday (an unbroken streak the user can still extend).
    let yesterday = today - Days::new(1);
    let mut cursor = if days.contains(&today) {
        today
    } else if days.contains(&yesterday) {
        yesterday
    } else {
        return 0;
    };

    let mut streak = 0;
    while days.contains(&cursor) {
        streak += 1;
        cursor = cursor - Days::new(1);
    }
    streak
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn drink_on(date: NaiveDate) -> DrinkRecord {
        let ts = Utc
            .from_utc_datetime(&date.and_hms_opt(20, 30, 0).unwrap());
        DrinkRecord::new("Cristal", "beer", 10, ts)
    }

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_empty_history_has_no_streak() {
        assert_eq!(current_streak(&[], day("2025-06-10")), 0);
    }

    #[test]
    fn test_consecutive_days_count() {
        let drinks = [
            drink_on(day("2025-06-08")),
            drink_on(day("2025-06-09")),
            drink_on(day("2025-06-10")),
        ];
        assert_eq!(current_streak(&drinks, day("2025-06-10")), 3);
    }

    #[test]
    fn test_streak_ending_yesterday_still_counts() {
        let drinks = [drink_on(day("2025-06-08")), drink_on(day("2025-06-09"))];
        assert_eq!(current_streak(&drinks, day("2025-06-10")), 2);
    }

    #[test]
    fn test_streak_broken_two_days_ago() {
        let drinks = [drink_on(day("2025-06-07")), drink_on(day("2025-06-08"))];
        assert_eq!(current_streak(&drinks, day("2025-06-10")), 0);
    }

    #[test]
    fn test_gap_resets_the_run() {
        // 2025-06-06 is separated from 08/09/10 by a dry day.
        let drinks = [
            drink_on(day("2025-06-06")),
            drink_on(day("2025-06-08")),
            drink_on(day("2025-06-09")),
            drink_on(day("2025-06-10")),
        ];
        assert_eq!(current_streak(&drinks, day("2025-06-10")), 3);
    }

    #[test]
    fn test_multiple_drinks_per_day_count_once() {
        let drinks = [
            drink_on(day("2025-06-10")),
            drink_on(day("2025-06-10")),
            drink_on(day("2025-06-09")),
        ];
        assert_eq!(current_streak(&drinks, day("2025-06-10")), 2);
    }
}
