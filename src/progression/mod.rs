//! XP and level progression engine
//!
//! Pure functions mapping cumulative XP to a level, title, and badge. The
//! cost to advance from level 1 to 2 is 500 XP; every following step is the
//! previous one times 1.75, floored before it accumulates.

mod levels;
mod rewards;
mod titles;

pub use levels::{
    level_from_xp, level_info, level_progress_percent, simulate_xp_gain, total_xp_for_level,
    xp_for_next_level, LevelInfo, XpGain, MAX_LEVEL,
};
pub use rewards::XpRewards;
pub use titles::{badge_for_level, title_for_level, LEVEL_BADGES, LEVEL_TITLES};
