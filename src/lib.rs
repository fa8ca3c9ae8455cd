//! Brindis - gamified drink-tracking core
//!
//! Brindis is the progression and achievement engine behind a drink-tracking
//! app: users log drinks, earn XP, level up, and unlock achievements. This
//! crate owns the pure computation only - the surrounding app supplies the
//! drink history and statistics snapshots and renders whatever comes back.
//!
//! ## Components
//!
//! 1. **Progression engine** ([`progression`]): converts cumulative XP into
//!    a level, title, and badge via a geometric cost curve (500 XP to reach
//!    level 2, each following step x1.75 floored).
//!
//! 2. **Achievement engine** ([`achievements`]): evaluates a declarative
//!    rule catalog against a [`UserStats`] snapshot and the drink history,
//!    partitioning it into unlocked and locked sets.
//!
//! Both engines are side-effect free and deterministic: no I/O, no hidden
//! clock, no mutation of inputs. Statistics are recomputed from the full
//! drink history on every read ([`stats::compute_user_stats`]), never
//! maintained incrementally.
//!
//! # Usage
//!
//! ```
//! use brindis::achievements::Catalog;
//! use brindis::progression::level_info;
//! use brindis::stats::compute_user_stats;
//!
//! let drinks = vec![];
//! let today = chrono::Utc::now().date_naive();
//!
//! let user = compute_user_stats(&drinks, today);
//! let catalog = Catalog::default();
//!
//! let (unlocked, _locked) = catalog.partition(&user, Some(&drinks));
//! let info = level_info(user.total_xp);
//! assert_eq!(info.level, 1);
//! assert!(unlocked.is_empty());
//! ```

pub mod achievements;
pub mod domain;
pub mod progression;
pub mod stats;

pub use domain::*;
