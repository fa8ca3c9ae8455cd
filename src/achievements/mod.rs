//! Achievement catalog and rule evaluation engine
//!
//! Achievements are declarative catalog entries: a requirement (threshold
//! predicate over user statistics and/or drink history) plus display
//! metadata and a one-time XP reward. The engine evaluates an injected
//! [`Catalog`] against a [`crate::UserStats`] snapshot - adding or
//! rebalancing achievements is a data change, never an engine change.

mod catalog;
mod checker;
mod definitions;
mod requirement;

pub use catalog::{Catalog, CatalogError};
pub use checker::{is_unlocked, progress_label, progress_percent, progress_value};
pub use definitions::{default_achievements, Achievement, AchievementCategory, Rarity};
pub use requirement::{Requirement, Timeframe};
