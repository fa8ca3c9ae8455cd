//! Level curve calculations
//!
//! The curve is piecewise geometric: advancing from level 1 to 2 costs
//! 500 XP, and each later step costs the previous step times 1.75, floored
//! to an integer *before* it accumulates. Flooring per step (not on the
//! closed-form sum) is load-bearing: thresholds diverge otherwise.

use serde::{Deserialize, Serialize};

use super::titles::{badge_for_level, title_for_level};

/// Terminal level; XP beyond its threshold never levels up further
pub const MAX_LEVEL: u32 = 999;

/// XP cost to advance from level 1 to level 2
const BASE_STEP: u64 = 500;

/// Next step cost: floor(step * 1.75), saturating at u64::MAX.
///
/// 1.75 == 7/4 exactly, so integer `step * 7 / 4` matches the reference
/// float-then-floor for every value that fits. Once a step saturates it
/// stays saturated, which keeps the curve monotonic.
fn next_step(step: u64) -> u64 {
    match step.checked_mul(7) {
        Some(v) => v / 4,
        None => u64::MAX,
    }
}

/// XP cost of the step from `level` to `level + 1`.
///
/// Returns 0 at or beyond [`MAX_LEVEL`]. Level 0 is treated as level 1.
pub fn xp_for_next_level(level: u32) -> u64 {
    if level >= MAX_LEVEL {
        return 0;
    }

    let mut step = BASE_STEP;
    for _ in 2..=level {
        step = next_step(step);
    }
    step
}

/// Cumulative XP required to *reach* `level`.
///
/// `total_xp_for_level(1) == 0`. Accumulation saturates at `u64::MAX` for
/// the far tail of the curve, where thresholds exceed any reachable XP.
pub fn total_xp_for_level(level: u32) -> u64 {
    let level = level.min(MAX_LEVEL);
    if level <= 1 {
        return 0;
    }

    let mut total: u64 = 0;
    let mut step = BASE_STEP;
    for _ in 2..=level {
        total = total.saturating_add(step);
        step = next_step(step);
    }
    total
}

/// Level for a given cumulative XP: the greatest level whose threshold is
/// `<= total_xp`, clamped to `[1, MAX_LEVEL]`.
pub fn level_from_xp(total_xp: u64) -> u32 {
    if total_xp < BASE_STEP {
        return 1;
    }

    let mut level = 1;
    let mut accumulated: u64 = 0;
    let mut step = BASE_STEP;

    while accumulated.saturating_add(step) <= total_xp && level < MAX_LEVEL {
        accumulated = accumulated.saturating_add(step);
        level += 1;
        step = next_step(step);
    }

    level
}

/// Full display data for a user's level
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LevelInfo {
    pub level: u32,
    /// XP earned within the current level
    pub current_xp: u64,
    /// XP still missing to reach the next level (0 at the terminal level)
    pub xp_to_next_level: u64,
    /// Cumulative XP threshold of the next level (current at the terminal)
    pub total_xp_required: u64,
    pub title: &'static str,
    pub badge: &'static str,
}

/// Compose the complete level view for a cumulative XP value
pub fn level_info(total_xp: u64) -> LevelInfo {
    let level = level_from_xp(total_xp);
    let current_threshold = total_xp_for_level(level);
    let next_threshold = total_xp_for_level(level + 1);

    let at_max = level >= MAX_LEVEL;
    LevelInfo {
        level,
        current_xp: total_xp - current_threshold,
        xp_to_next_level: if at_max { 0 } else { next_threshold - total_xp },
        total_xp_required: if at_max { current_threshold } else { next_threshold },
        title: title_for_level(level),
        badge: badge_for_level(level),
    }
}

/// Progress towards the next level as a percentage in `[0, 100]`
pub fn level_progress_percent(total_xp: u64) -> f64 {
    let info = level_info(total_xp);
    if info.level >= MAX_LEVEL {
        return 100.0;
    }

    let step = xp_for_next_level(info.level);
    if step == 0 {
        return 100.0;
    }
    ((info.current_xp as f64 / step as f64) * 100.0).min(100.0)
}

/// Outcome of a hypothetical XP award
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct XpGain {
    pub new_total_xp: u64,
    pub leveled_up: bool,
    pub old_level: u32,
    pub new_level: u32,
    pub levels_gained: u32,
}

/// Dry-run an XP award: what would the new total and level be?
///
/// Pure - nothing is persisted, callers decide what to do with the result.
pub fn simulate_xp_gain(current_total_xp: u64, xp_gained: u64) -> XpGain {
    let old_level = level_from_xp(current_total_xp);
    let new_total_xp = current_total_xp.saturating_add(xp_gained);
    let new_level = level_from_xp(new_total_xp);

    XpGain {
        new_total_xp,
        leveled_up: new_level > old_level,
        old_level,
        new_level,
        levels_gained: new_level - old_level,
    }
}
