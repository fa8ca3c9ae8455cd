//! Achievement definitions and metadata
//!
//! The built-in catalog ships every achievement the product knows about.
//! It is configuration, not logic: rebalancing rewards or adding entries
//! happens here (or in an injected JSON catalog), never in the engine.

use serde::{Deserialize, Serialize};

use super::requirement::{Requirement, Timeframe};

/// Achievement grouping for the UI filter tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AchievementCategory {
    Drinks,
    Xp,
    Social,
    Exploration,
    Special,
    Temporal,
}

impl AchievementCategory {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Drinks => "Bebidas",
            Self::Xp => "Experiencia",
            Self::Social => "Social",
            Self::Exploration => "Exploración",
            Self::Special => "Especiales",
            Self::Temporal => "Temporales",
        }
    }
}

/// Rarity tier, ordered by ascending difficulty.
///
/// Display metadata only - unlock logic never looks at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Common => "Común",
            Self::Rare => "Raro",
            Self::Epic => "Épico",
            Self::Legendary => "Legendario",
        }
    }

    /// Style token pair for rendering this rarity
    pub fn color_class(&self) -> &'static str {
        match self {
            Self::Common => "text-gray-600 bg-gray-100",
            Self::Rare => "text-blue-600 bg-blue-100",
            Self::Epic => "text-purple-600 bg-purple-100",
            Self::Legendary => "text-yellow-600 bg-yellow-100",
        }
    }
}

/// One unlockable achievement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    /// Unique identifier, also the storage key for unlock records
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub category: AchievementCategory,
    pub rarity: Rarity,
    /// One-time XP granted on unlock
    pub xp_reward: u64,
    pub requirement: Requirement,
}

#[allow(clippy::too_many_arguments)]
fn entry(
    id: &str,
    name: &str,
    description: &str,
    icon: &str,
    category: AchievementCategory,
    rarity: Rarity,
    xp_reward: u64,
    requirement: Requirement,
) -> Achievement {
    Achievement {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        category,
        rarity,
        xp_reward,
        requirement,
    }
}

fn category_drinks(value: u64, category: &str) -> Requirement {
    Requirement::CategoryDrinks {
        value,
        category: category.to_string(),
    }
}

fn specific_drink(value: u64, drink_name: &str) -> Requirement {
    Requirement::SpecificDrink {
        value,
        drink_name: drink_name.to_string(),
    }
}

/// The full built-in achievement catalog, in declaration order.
///
/// Declaration order matters: it is the tie-break for next-achievement
/// suggestions and the display order within category filters.
pub fn default_achievements() -> Vec<Achievement> {
    use AchievementCategory::*;
    use Rarity::*;

    vec![
        // === DRINK COUNT MILESTONES ===
        entry(
            "first_drink",
            "Primera Gota",
            "Registra tu primera bebida",
            "🍺",
            Drinks,
            Common,
            50,
            Requirement::DrinksCount { value: 1 },
        ),
        entry(
            "five_drinks",
            "Explorador Novato",
            "Registra 5 bebidas",
            "🌟",
            Drinks,
            Common,
            100,
            Requirement::DrinksCount { value: 5 },
        ),
        entry(
            "ten_drinks",
            "Conocedor",
            "Registra 10 bebidas",
            "🏆",
            Drinks,
            Common,
            150,
            Requirement::DrinksCount { value: 10 },
        ),
        entry(
            "twenty_five_drinks",
            "Catador Experimentado",
            "Registra 25 bebidas",
            "🥉",
            Drinks,
            Rare,
            300,
            Requirement::DrinksCount { value: 25 },
        ),
        entry(
            "fifty_drinks",
            "Experto Catador",
            "Registra 50 bebidas",
            "🥈",
            Drinks,
            Rare,
            500,
            Requirement::DrinksCount { value: 50 },
        ),
        entry(
            "hundred_drinks",
            "Maestro Degustador",
            "Registra 100 bebidas",
            "🥇",
            Drinks,
            Epic,
            1000,
            Requirement::DrinksCount { value: 100 },
        ),
        entry(
            "two_hundred_drinks",
            "Leyenda Viviente",
            "Registra 200 bebidas",
            "👑",
            Drinks,
            Legendary,
            2000,
            Requirement::DrinksCount { value: 200 },
        ),
        // === LEVEL AND XP ===
        entry(
            "first_level",
            "Subiendo de Nivel",
            "Alcanza el nivel 2",
            "⭐",
            Xp,
            Common,
            75,
            Requirement::Level { value: 2 },
        ),
        entry(
            "level_three",
            "Progresando",
            "Alcanza el nivel 3",
            "🌟",
            Xp,
            Common,
            100,
            Requirement::Level { value: 3 },
        ),
        entry(
            "level_five",
            "Experimentado",
            "Alcanza el nivel 5",
            "🎖️",
            Xp,
            Rare,
            200,
            Requirement::Level { value: 5 },
        ),
        entry(
            "level_ten",
            "Veterano",
            "Alcanza el nivel 10",
            "🏅",
            Xp,
            Epic,
            500,
            Requirement::Level { value: 10 },
        ),
        entry(
            "level_twenty",
            "Maestro Supremo",
            "Alcanza el nivel 20",
            "👑",
            Xp,
            Legendary,
            1000,
            Requirement::Level { value: 20 },
        ),
        entry(
            "thousand_xp",
            "Mil Puntos",
            "Acumula 1000 XP",
            "💎",
            Xp,
            Rare,
            300,
            Requirement::XpTotal { value: 1000 },
        ),
        entry(
            "five_thousand_xp",
            "Cinco Mil Puntos",
            "Acumula 5000 XP",
            "💰",
            Xp,
            Epic,
            750,
            Requirement::XpTotal { value: 5000 },
        ),
        entry(
            "ten_thousand_xp",
            "Diez Mil Puntos",
            "Acumula 10000 XP",
            "🏆",
            Xp,
            Legendary,
            1500,
            Requirement::XpTotal { value: 10000 },
        ),
        // === BEER ===
        entry(
            "first_beer",
            "Primera Cerveza",
            "Registra tu primera cerveza",
            "🍺",
            Exploration,
            Common,
            75,
            category_drinks(1, "beer"),
        ),
        entry(
            "beer_explorer",
            "Explorador Cervecero",
            "Registra 5 cervezas diferentes",
            "🍻",
            Exploration,
            Common,
            150,
            category_drinks(5, "beer"),
        ),
        entry(
            "beer_enthusiast",
            "Entusiasta Cervecero",
            "Registra 10 cervezas diferentes",
            "🍺",
            Exploration,
            Rare,
            300,
            category_drinks(10, "beer"),
        ),
        entry(
            "beer_expert",
            "Experto Cervecero",
            "Registra 50 cervezas diferentes",
            "🏆",
            Exploration,
            Epic,
            750,
            category_drinks(50, "beer"),
        ),
        entry(
            "beer_master",
            "Maestro Cervecero",
            "Registra 100 cervezas diferentes",
            "👑",
            Exploration,
            Legendary,
            1500,
            category_drinks(100, "beer"),
        ),
        // === WINE ===
        entry(
            "first_wine",
            "Primera Copa",
            "Registra tu primer vino",
            "🍷",
            Exploration,
            Common,
            75,
            category_drinks(1, "wine"),
        ),
        entry(
            "wine_explorer",
            "Explorador Vinícola",
            "Registra 5 vinos diferentes",
            "🍾",
            Exploration,
            Common,
            150,
            category_drinks(5, "wine"),
        ),
        entry(
            "wine_connoisseur",
            "Conocedor de Vinos",
            "Registra 10 vinos diferentes",
            "🍷",
            Exploration,
            Rare,
            300,
            category_drinks(10, "wine"),
        ),
        entry(
            "wine_expert",
            "Experto Enólogo",
            "Registra 50 vinos diferentes",
            "🏆",
            Exploration,
            Epic,
            750,
            category_drinks(50, "wine"),
        ),
        entry(
            "wine_master",
            "Maestro Sommelier",
            "Registra 100 vinos diferentes",
            "👑",
            Exploration,
            Legendary,
            1500,
            category_drinks(100, "wine"),
        ),
        // === COCKTAILS ===
        entry(
            "first_cocktail",
            "Primer Cóctel",
            "Registra tu primer cóctel",
            "🍸",
            Exploration,
            Common,
            75,
            category_drinks(1, "cocktail"),
        ),
        entry(
            "cocktail_explorer",
            "Explorador de Cócteles",
            "Registra 5 cócteles diferentes",
            "🍹",
            Exploration,
            Common,
            150,
            category_drinks(5, "cocktail"),
        ),
        entry(
            "cocktail_enthusiast",
            "Entusiasta de Cócteles",
            "Registra 10 cócteles diferentes",
            "🍸",
            Exploration,
            Rare,
            300,
            category_drinks(10, "cocktail"),
        ),
        entry(
            "cocktail_expert",
            "Experto Coctelero",
            "Registra 50 cócteles diferentes",
            "🏆",
            Exploration,
            Epic,
            750,
            category_drinks(50, "cocktail"),
        ),
        entry(
            "cocktail_master",
            "Maestro Mixólogo",
            "Registra 100 cócteles diferentes",
            "👑",
            Exploration,
            Legendary,
            1500,
            category_drinks(100, "cocktail"),
        ),
        // === SPIRITS ===
        entry(
            "first_spirit",
            "Primer Destilado",
            "Registra tu primer destilado",
            "🥃",
            Exploration,
            Common,
            75,
            category_drinks(1, "spirits"),
        ),
        entry(
            "spirits_explorer",
            "Explorador de Destilados",
            "Registra 5 destilados diferentes",
            "🍾",
            Exploration,
            Common,
            150,
            category_drinks(5, "spirits"),
        ),
        entry(
            "spirits_enthusiast",
            "Entusiasta de Destilados",
            "Registra 10 destilados diferentes",
            "🥃",
            Exploration,
            Rare,
            300,
            category_drinks(10, "spirits"),
        ),
        entry(
            "spirits_expert",
            "Experto en Destilados",
            "Registra 50 destilados diferentes",
            "🏆",
            Exploration,
            Epic,
            750,
            category_drinks(50, "spirits"),
        ),
        entry(
            "spirits_master",
            "Maestro Destilador",
            "Registra 100 destilados diferentes",
            "👑",
            Exploration,
            Legendary,
            1500,
            category_drinks(100, "spirits"),
        ),
        // === CHILEAN SPECIFIC DRINKS ===
        entry(
            "first_piscola",
            "Primera Piscola",
            "Registra tu primera piscola",
            "🇨🇱",
            Exploration,
            Common,
            100,
            specific_drink(1, "Piscola"),
        ),
        entry(
            "piscola_lover",
            "Amante de la Piscola",
            "Registra 10 piscolas",
            "🥤",
            Exploration,
            Rare,
            300,
            specific_drink(10, "Piscola"),
        ),
        entry(
            "first_sour",
            "Primer Sour",
            "Registra tu primer pisco sour",
            "🍋",
            Exploration,
            Common,
            100,
            specific_drink(1, "Pisco Sour"),
        ),
        entry(
            "sour_enthusiast",
            "Entusiasta del Sour",
            "Registra 10 pisco sours",
            "🍸",
            Exploration,
            Rare,
            300,
            specific_drink(10, "Pisco Sour"),
        ),
        // === TEMPORAL - DAILY (reserved) ===
        entry(
            "daily_explorer",
            "Explorador Diario",
            "Registra 3 bebidas en un día",
            "☀️",
            Temporal,
            Common,
            150,
            Requirement::DailyDrinks {
                value: 3,
                timeframe: Timeframe::Day,
            },
        ),
        entry(
            "daily_champion",
            "Campeón Diario",
            "Registra 5 bebidas en un día",
            "🌟",
            Temporal,
            Rare,
            300,
            Requirement::DailyDrinks {
                value: 5,
                timeframe: Timeframe::Day,
            },
        ),
        entry(
            "daily_legend",
            "Leyenda Diaria",
            "Registra 10 bebidas en un día",
            "🔥",
            Temporal,
            Epic,
            500,
            Requirement::DailyDrinks {
                value: 10,
                timeframe: Timeframe::Day,
            },
        ),
        // === TEMPORAL - MONTHLY (reserved) ===
        entry(
            "monthly_explorer",
            "Explorador Mensual",
            "Registra 20 bebidas en un mes",
            "📅",
            Temporal,
            Common,
            400,
            Requirement::MonthlyDrinks {
                value: 20,
                timeframe: Timeframe::Month,
            },
        ),
        entry(
            "monthly_champion",
            "Campeón Mensual",
            "Registra 50 bebidas en un mes",
            "🏆",
            Temporal,
            Rare,
            750,
            Requirement::MonthlyDrinks {
                value: 50,
                timeframe: Timeframe::Month,
            },
        ),
        entry(
            "monthly_legend",
            "Leyenda Mensual",
            "Registra 100 bebidas en un mes",
            "👑",
            Temporal,
            Epic,
            1200,
            Requirement::MonthlyDrinks {
                value: 100,
                timeframe: Timeframe::Month,
            },
        ),
        // === TEMPORAL - YEARLY (reserved) ===
        entry(
            "yearly_explorer",
            "Explorador Anual",
            "Registra 200 bebidas en un año",
            "🗓️",
            Temporal,
            Rare,
            1000,
            Requirement::YearlyDrinks {
                value: 200,
                timeframe: Timeframe::Year,
            },
        ),
        entry(
            "yearly_champion",
            "Campeón Anual",
            "Registra 500 bebidas en un año",
            "🏅",
            Temporal,
            Epic,
            2000,
            Requirement::YearlyDrinks {
                value: 500,
                timeframe: Timeframe::Year,
            },
        ),
        entry(
            "yearly_legend",
            "Leyenda Anual",
            "Registra 1000 bebidas en un año",
            "👑",
            Temporal,
            Legendary,
            5000,
            Requirement::YearlyDrinks {
                value: 1000,
                timeframe: Timeframe::Year,
            },
        ),
        // === STREAKS ===
        entry(
            "weekend_warrior",
            "Guerrero del Fin de Semana",
            "Mantén una racha de 3 días",
            "🔥",
            Special,
            Common,
            200,
            Requirement::Streak { value: 3 },
        ),
        entry(
            "week_streak",
            "Semana Completa",
            "Mantén una racha de 7 días",
            "🌟",
            Special,
            Rare,
            500,
            Requirement::Streak { value: 7 },
        ),
        entry(
            "month_streak",
            "Mes Completo",
            "Mantén una racha de 30 días",
            "🏆",
            Special,
            Epic,
            1500,
            Requirement::Streak { value: 30 },
        ),
        // === VARIETY ===
        entry(
            "variety_seeker",
            "Buscador de Variedad",
            "Prueba 15 bebidas únicas diferentes",
            "🌈",
            Exploration,
            Rare,
            400,
            Requirement::UniqueDrinks { value: 15 },
        ),
        entry(
            "variety_master",
            "Maestro de la Variedad",
            "Prueba 50 bebidas únicas diferentes",
            "🎨",
            Exploration,
            Epic,
            1000,
            Requirement::UniqueDrinks { value: 50 },
        ),
        entry(
            "variety_legend",
            "Leyenda de la Variedad",
            "Prueba 100 bebidas únicas diferentes",
            "🌟",
            Exploration,
            Legendary,
            2500,
            Requirement::UniqueDrinks { value: 100 },
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_size() {
        assert_eq!(default_achievements().len(), 54);
    }

    #[test]
    fn test_default_catalog_ids_unique() {
        let achievements = default_achievements();
        let mut ids: Vec<&str> = achievements.iter().map(|a| a.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), achievements.len());
    }

    #[test]
    fn test_rarity_color_classes() {
        assert_eq!(Rarity::Common.color_class(), "text-gray-600 bg-gray-100");
        assert_eq!(Rarity::Rare.color_class(), "text-blue-600 bg-blue-100");
        assert_eq!(Rarity::Epic.color_class(), "text-purple-600 bg-purple-100");
        assert_eq!(
            Rarity::Legendary.color_class(),
            "text-yellow-600 bg-yellow-100"
        );
    }

    #[test]
    fn test_rarity_ordering() {
        assert!(Rarity::Common < Rarity::Rare);
        assert!(Rarity::Rare < Rarity::Epic);
        assert!(Rarity::Epic < Rarity::Legendary);
    }

    #[test]
    fn test_achievement_serde_round_trip() {
        let achievements = default_achievements();
        let json = serde_json::to_string(&achievements).unwrap();
        let back: Vec<Achievement> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, achievements);
    }
}
