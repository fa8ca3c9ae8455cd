//! Integration tests for the full progression + achievement flow
//!
//! Drives the engines the way the app does: build a drink history,
//! recompute the stats snapshot, evaluate the catalog against both, and
//! render level data from the resulting XP.

use std::fs;

use chrono::{Days, NaiveDate, TimeZone, Utc};
use tempfile::TempDir;

use brindis::achievements::{Catalog, Requirement};
use brindis::progression::{level_info, level_progress_percent, simulate_xp_gain};
use brindis::stats::compute_user_stats;
use brindis::DrinkRecord;

fn day(s: &str) -> NaiveDate {
    s.parse().expect("valid date literal")
}

fn drink_on(name: &str, category: &str, xp: u64, date: NaiveDate) -> DrinkRecord {
    let ts = Utc.from_utc_datetime(&date.and_hms_opt(22, 0, 0).expect("valid time"));
    DrinkRecord::new(name, category, xp, ts)
}

/// A week of beers: one Cristal per day, 10 XP each
fn beer_week(last_day: NaiveDate) -> Vec<DrinkRecord> {
    (0..7u64)
        .map(|i| drink_on("Cristal", "beer", 10, last_day - Days::new(i)))
        .collect()
}

#[test]
fn full_flow_from_history_to_unlocks() {
    let today = day("2025-06-10");
    let drinks = beer_week(today);

    let stats = compute_user_stats(&drinks, today);
    assert_eq!(stats.total_drinks, 7);
    assert_eq!(stats.unique_drinks, 1);
    assert_eq!(stats.current_streak, 7);
    assert_eq!(stats.favorite_category, "beer");

    let catalog = Catalog::builtin();
    let (unlocked, locked) = catalog.partition(&stats, Some(&drinks));
    let ids: Vec<&str> = unlocked.iter().map(|a| a.id.as_str()).collect();

    // Drink count milestones up to 5, the beer exploration entries up to 5,
    // and both streak achievements within 7 days.
    assert!(ids.contains(&"first_drink"));
    assert!(ids.contains(&"five_drinks"));
    assert!(!ids.contains(&"ten_drinks"));
    assert!(ids.contains(&"first_beer"));
    assert!(ids.contains(&"beer_explorer"));
    assert!(ids.contains(&"weekend_warrior"));
    assert!(ids.contains(&"week_streak"));
    assert!(!ids.contains(&"month_streak"));

    assert_eq!(unlocked.len() + locked.len(), catalog.len());

    // Level display for the recomputed XP (70 XP, still level 1).
    let info = level_info(stats.total_xp);
    assert_eq!(info.level, 1);
    assert_eq!(info.current_xp, 70);
    assert_eq!(info.xp_to_next_level, 430);
    assert_eq!(info.title, "Principiante");
    assert!((level_progress_percent(stats.total_xp) - 14.0).abs() < 0.01);
}

#[test]
fn achievement_rewards_feed_back_into_progression() {
    let today = day("2025-06-10");
    let drinks = beer_week(today);
    let stats = compute_user_stats(&drinks, today);

    let unlock_xp: u64 = Catalog::builtin()
        .unlocked(&stats, Some(&drinks))
        .iter()
        .map(|a| a.xp_reward)
        .sum();

    // The app credits unlock rewards on top of drink XP; a level-up out of
    // that combination is visible in the dry-run before anything persists.
    let gain = simulate_xp_gain(stats.total_xp, unlock_xp);
    assert!(gain.leveled_up);
    assert_eq!(gain.old_level, 1);
    assert!(gain.new_level >= 2);
}

#[test]
fn next_achievement_moves_as_milestones_fall() {
    let today = day("2025-06-10");
    let catalog = Catalog::builtin();

    let empty_stats = compute_user_stats(&[], today);
    let first = catalog.next_achievement(&empty_stats, Some(&[])).unwrap();
    assert_eq!(first.id, "first_drink");

    let drinks = beer_week(today);
    let stats = compute_user_stats(&drinks, today);
    let next = catalog.next_achievement(&stats, Some(&drinks)).unwrap();
    // Everything at threshold 1 for beer is unlocked; the smallest locked
    // threshold is now a value-1 entry of another category.
    assert_eq!(next.requirement.threshold(), 1);
    assert_ne!(next.id, "first_drink");
}

#[test]
fn catalog_can_be_injected_from_a_json_file() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("catalog.json");

    let json = r#"[
        {
            "id": "hundred_xp",
            "name": "Cien Puntos",
            "description": "Acumula 100 XP",
            "icon": "💎",
            "category": "xp",
            "rarity": "common",
            "xp_reward": 25,
            "requirement": { "type": "xp_total", "value": 100 }
        },
        {
            "id": "wine_night",
            "name": "Noche de Vinos",
            "description": "Registra 2 vinos",
            "icon": "🍷",
            "category": "exploration",
            "rarity": "rare",
            "xp_reward": 50,
            "requirement": { "type": "category_drinks", "value": 2, "category": "wine" }
        }
    ]"#;
    fs::write(&path, json).expect("write catalog file");

    let catalog = Catalog::from_json_file(&path).expect("load catalog");
    assert_eq!(catalog.len(), 2);
    assert_eq!(
        catalog.get("wine_night").unwrap().requirement,
        Requirement::CategoryDrinks {
            value: 2,
            category: "wine".to_string()
        }
    );

    let today = day("2025-06-10");
    let drinks = vec![
        drink_on("Merlot", "wine", 20, today),
        drink_on("Carmenère", "wine", 25, today),
        drink_on("Cristal", "beer", 10, today),
        drink_on("Terremoto", "cocktail", 50, today),
    ];
    let stats = compute_user_stats(&drinks, today);

    let unlocked = catalog.unlocked(&stats, Some(&drinks));
    let ids: Vec<&str> = unlocked.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["hundred_xp", "wine_night"]);
}
