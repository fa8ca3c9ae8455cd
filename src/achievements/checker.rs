//! Requirement evaluation
//!
//! Pure predicate dispatch over a stats snapshot and (optionally) the
//! per-drink history. Evaluation never fails: requirement kinds that need
//! the drink history degrade to "not satisfied" when it is absent, and the
//! reserved temporal kinds always evaluate to locked.

use crate::domain::{DrinkRecord, UserStats};

use super::definitions::Achievement;
use super::requirement::Requirement;

fn count_in_category(drinks: &[DrinkRecord], category: &str) -> u64 {
    drinks.iter().filter(|d| d.category == category).count() as u64
}

fn count_of_drink(drinks: &[DrinkRecord], drink_name: &str) -> u64 {
    drinks.iter().filter(|d| d.drink_name == drink_name).count() as u64
}

/// Whether an achievement's requirement is satisfied.
///
/// `drinks` is only consulted for requirement kinds that need item-level
/// detail ([`Requirement::needs_drink_history`]); passing `None` makes those
/// achievements evaluate as locked rather than erroring. Temporal kinds are
/// reserved and always return `false`.
pub fn is_unlocked(
    achievement: &Achievement,
    stats: &UserStats,
    drinks: Option<&[DrinkRecord]>,
) -> bool {
    match &achievement.requirement {
        Requirement::DrinksCount { value } => stats.total_drinks >= *value,
        Requirement::XpTotal { value } => stats.total_xp >= *value,
        Requirement::Level { value } => u64::from(stats.level) >= *value,
        Requirement::UniqueDrinks { value } => stats.unique_drinks >= *value,
        Requirement::Streak { value } => u64::from(stats.current_streak) >= *value,
        Requirement::CategoryDrinks { value, category } => match drinks {
            Some(drinks) => count_in_category(drinks, category) >= *value,
            None => false,
        },
        Requirement::SpecificDrink { value, drink_name } => match drinks {
            Some(drinks) => count_of_drink(drinks, drink_name) >= *value,
            None => false,
        },
        // Reserved: need per-window counting that is not implemented yet.
        Requirement::DailyDrinks { .. }
        | Requirement::MonthlyDrinks { .. }
        | Requirement::YearlyDrinks { .. } => false,
    }
}

/// Current progress towards an achievement, on the requirement's own scale.
///
/// `None` for the reserved temporal kinds ("not available"); missing drink
/// history counts as zero progress, mirroring [`is_unlocked`].
pub fn progress_value(
    achievement: &Achievement,
    stats: &UserStats,
    drinks: Option<&[DrinkRecord]>,
) -> Option<u64> {
    match &achievement.requirement {
        Requirement::DrinksCount { .. } => Some(stats.total_drinks),
        Requirement::XpTotal { .. } => Some(stats.total_xp),
        Requirement::Level { .. } => Some(u64::from(stats.level)),
        Requirement::UniqueDrinks { .. } => Some(stats.unique_drinks),
        Requirement::Streak { .. } => Some(u64::from(stats.current_streak)),
        Requirement::CategoryDrinks { category, .. } => {
            Some(drinks.map_or(0, |d| count_in_category(d, category)))
        }
        Requirement::SpecificDrink { drink_name, .. } => {
            Some(drinks.map_or(0, |d| count_of_drink(d, drink_name)))
        }
        Requirement::DailyDrinks { .. }
        | Requirement::MonthlyDrinks { .. }
        | Requirement::YearlyDrinks { .. } => None,
    }
}

/// Progress towards an achievement as a percentage in `[0, 100]`.
///
/// Temporal kinds report 0.
pub fn progress_percent(
    achievement: &Achievement,
    stats: &UserStats,
    drinks: Option<&[DrinkRecord]>,
) -> f64 {
    let threshold = achievement.requirement.threshold();
    if threshold == 0 {
        return 100.0;
    }

    match progress_value(achievement, stats, drinks) {
        Some(current) => ((current as f64 / threshold as f64) * 100.0).min(100.0),
        None => 0.0,
    }
}

/// Progress display label, e.g. `"7/10"` (current capped at the threshold).
///
/// `None` for the reserved temporal kinds, where the UI shows its own
/// placeholder instead.
pub fn progress_label(
    achievement: &Achievement,
    stats: &UserStats,
    drinks: Option<&[DrinkRecord]>,
) -> Option<String> {
    let threshold = achievement.requirement.threshold();
    progress_value(achievement, stats, drinks)
        .map(|current| format!("{}/{}", current.min(threshold), threshold))
}
