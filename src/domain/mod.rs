//! Core domain types for Brindis

mod drink;
mod menu;
mod user_stats;

pub use drink::DrinkRecord;
pub use menu::{Difficulty, MenuDrink, MENU};
pub use user_stats::UserStats;
