//! Level titles and badges
//!
//! Sparse threshold tables: the highest entry whose level is `<=` the
//! user's level wins. Both tables must stay sorted ascending by level.

/// Title thresholds
pub static LEVEL_TITLES: &[(u32, &str)] = &[
    (1, "Principiante"),
    (10, "Aficionado"),
    (25, "Conocedor"),
    (50, "Experto"),
    (100, "Maestro Cervecero"),
    (200, "Sommelier"),
    (500, "Leyenda"),
    (999, "Gran Maestro"),
];

/// Badge glyph thresholds
pub static LEVEL_BADGES: &[(u32, &str)] = &[
    (1, "🌱"),
    (10, "⭐"),
    (25, "📚"),
    (50, "🎓"),
    (100, "🍺"),
    (200, "🥇"),
    (500, "🏆"),
    (999, "👑"),
];

/// Title for a level
pub fn title_for_level(level: u32) -> &'static str {
    LEVEL_TITLES
        .iter()
        .rev()
        .find(|(threshold, _)| level >= *threshold)
        .map(|(_, title)| *title)
        .unwrap_or(LEVEL_TITLES[0].1)
}

/// Badge glyph for a level
pub fn badge_for_level(level: u32) -> &'static str {
    LEVEL_BADGES
        .iter()
        .rev()
        .find(|(threshold, _)| level >= *threshold)
        .map(|(_, badge)| *badge)
        .unwrap_or(LEVEL_BADGES[0].1)
}
