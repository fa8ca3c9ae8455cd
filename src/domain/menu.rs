//! Built-in drink menu
//!
//! The fixed list of drinks users can log, with per-drink XP rewards.
//! Like the achievement catalog this is product data, not logic: balance
//! changes are edits to this table.

/// How hard a drink is considered to acquire/finish (display only)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Easy => "Fácil",
            Self::Medium => "Medio",
            Self::Hard => "Difícil",
        }
    }
}

/// A drink on the menu
#[derive(Debug, Clone)]
pub struct MenuDrink {
    pub name: &'static str,
    pub category: &'static str,
    /// Alcohol by volume, percent
    pub alcohol_content: f32,
    /// XP granted for logging this drink
    pub xp_reward: u64,
    pub difficulty: Difficulty,
    pub icon: &'static str,
    pub description: &'static str,
}

/// All menu entries
pub static MENU: &[MenuDrink] = &[
    // === BEERS ===
    MenuDrink {
        name: "Cristal",
        category: "beer",
        alcohol_content: 4.6,
        xp_reward: 10,
        difficulty: Difficulty::Easy,
        icon: "🍺",
        description: "Cerveza lager chilena clásica",
    },
    MenuDrink {
        name: "Escudo",
        category: "beer",
        alcohol_content: 4.8,
        xp_reward: 10,
        difficulty: Difficulty::Easy,
        icon: "🍺",
        description: "Cerveza premium chilena",
    },
    MenuDrink {
        name: "Brahma",
        category: "beer",
        alcohol_content: 4.3,
        xp_reward: 10,
        difficulty: Difficulty::Easy,
        icon: "🍺",
        description: "Cerveza brasileña popular en Chile",
    },
    MenuDrink {
        name: "Heineken",
        category: "beer",
        alcohol_content: 5.0,
        xp_reward: 12,
        difficulty: Difficulty::Easy,
        icon: "🍺",
        description: "Cerveza holandesa premium",
    },
    MenuDrink {
        name: "Corona",
        category: "beer",
        alcohol_content: 4.5,
        xp_reward: 12,
        difficulty: Difficulty::Easy,
        icon: "🍺",
        description: "Cerveza mexicana con limón",
    },
    MenuDrink {
        name: "Stella Artois",
        category: "beer",
        alcohol_content: 5.2,
        xp_reward: 15,
        difficulty: Difficulty::Easy,
        icon: "🍺",
        description: "Cerveza belga elegante",
    },
    MenuDrink {
        name: "Budweiser",
        category: "beer",
        alcohol_content: 5.0,
        xp_reward: 12,
        difficulty: Difficulty::Easy,
        icon: "🍺",
        description: "Cerveza americana clásica",
    },
    MenuDrink {
        name: "Kunstmann",
        category: "beer",
        alcohol_content: 5.0,
        xp_reward: 15,
        difficulty: Difficulty::Easy,
        icon: "🍺",
        description: "Cerveza artesanal chilena",
    },
    // === WINES ===
    MenuDrink {
        name: "Cabernet Sauvignon",
        category: "wine",
        alcohol_content: 13.5,
        xp_reward: 20,
        difficulty: Difficulty::Medium,
        icon: "🍷",
        description: "Vino tinto chileno clásico",
    },
    MenuDrink {
        name: "Carmenère",
        category: "wine",
        alcohol_content: 14.0,
        xp_reward: 25,
        difficulty: Difficulty::Medium,
        icon: "🍷",
        description: "Cepa emblemática de Chile",
    },
    MenuDrink {
        name: "Sauvignon Blanc",
        category: "wine",
        alcohol_content: 12.5,
        xp_reward: 18,
        difficulty: Difficulty::Medium,
        icon: "🥂",
        description: "Vino blanco fresco y aromático",
    },
    MenuDrink {
        name: "Chardonnay",
        category: "wine",
        alcohol_content: 13.0,
        xp_reward: 20,
        difficulty: Difficulty::Medium,
        icon: "🥂",
        description: "Vino blanco elegante",
    },
    MenuDrink {
        name: "Merlot",
        category: "wine",
        alcohol_content: 13.5,
        xp_reward: 20,
        difficulty: Difficulty::Medium,
        icon: "🍷",
        description: "Vino tinto suave y afrutado",
    },
    MenuDrink {
        name: "Pinot Noir",
        category: "wine",
        alcohol_content: 12.5,
        xp_reward: 22,
        difficulty: Difficulty::Medium,
        icon: "🍷",
        description: "Vino tinto delicado",
    },
    MenuDrink {
        name: "Syrah",
        category: "wine",
        alcohol_content: 14.5,
        xp_reward: 25,
        difficulty: Difficulty::Medium,
        icon: "🍷",
        description: "Vino tinto intenso y especiado",
    },
    // === WHISKEY ===
    MenuDrink {
        name: "Johnnie Walker Red",
        category: "whiskey",
        alcohol_content: 40.0,
        xp_reward: 30,
        difficulty: Difficulty::Medium,
        icon: "🥃",
        description: "Whisky escocés blend",
    },
    MenuDrink {
        name: "Johnnie Walker Black",
        category: "whiskey",
        alcohol_content: 40.0,
        xp_reward: 40,
        difficulty: Difficulty::Hard,
        icon: "🥃",
        description: "Whisky escocés premium",
    },
    MenuDrink {
        name: "Chivas Regal",
        category: "whiskey",
        alcohol_content: 40.0,
        xp_reward: 45,
        difficulty: Difficulty::Hard,
        icon: "🥃",
        description: "Whisky escocés de lujo",
    },
    MenuDrink {
        name: "Jack Daniels",
        category: "whiskey",
        alcohol_content: 40.0,
        xp_reward: 35,
        difficulty: Difficulty::Medium,
        icon: "🥃",
        description: "Whiskey americano Tennessee",
    },
    MenuDrink {
        name: "Jameson",
        category: "whiskey",
        alcohol_content: 40.0,
        xp_reward: 35,
        difficulty: Difficulty::Medium,
        icon: "🥃",
        description: "Whiskey irlandés suave",
    },
    // === VODKA ===
    MenuDrink {
        name: "Smirnoff",
        category: "vodka",
        alcohol_content: 40.0,
        xp_reward: 25,
        difficulty: Difficulty::Medium,
        icon: "🍸",
        description: "Vodka ruso clásico",
    },
    MenuDrink {
        name: "Absolut",
        category: "vodka",
        alcohol_content: 40.0,
        xp_reward: 30,
        difficulty: Difficulty::Medium,
        icon: "🍸",
        description: "Vodka sueco premium",
    },
    MenuDrink {
        name: "Grey Goose",
        category: "vodka",
        alcohol_content: 40.0,
        xp_reward: 50,
        difficulty: Difficulty::Hard,
        icon: "🍸",
        description: "Vodka francés ultra premium",
    },
    MenuDrink {
        name: "Stolichnaya",
        category: "vodka",
        alcohol_content: 40.0,
        xp_reward: 30,
        difficulty: Difficulty::Medium,
        icon: "🍸",
        description: "Vodka ruso tradicional",
    },
    // === RUM ===
    MenuDrink {
        name: "Bacardi",
        category: "rum",
        alcohol_content: 40.0,
        xp_reward: 25,
        difficulty: Difficulty::Medium,
        icon: "🥃",
        description: "Ron blanco caribeño",
    },
    MenuDrink {
        name: "Captain Morgan",
        category: "rum",
        alcohol_content: 35.0,
        xp_reward: 20,
        difficulty: Difficulty::Easy,
        icon: "🥃",
        description: "Ron especiado",
    },
    MenuDrink {
        name: "Havana Club",
        category: "rum",
        alcohol_content: 40.0,
        xp_reward: 30,
        difficulty: Difficulty::Medium,
        icon: "🥃",
        description: "Ron cubano auténtico",
    },
    MenuDrink {
        name: "Flor de Caña",
        category: "rum",
        alcohol_content: 40.0,
        xp_reward: 35,
        difficulty: Difficulty::Medium,
        icon: "🥃",
        description: "Ron nicaragüense premium",
    },
    // === COCKTAILS ===
    MenuDrink {
        name: "Pisco Sour",
        category: "cocktail",
        alcohol_content: 20.0,
        xp_reward: 40,
        difficulty: Difficulty::Medium,
        icon: "🍸",
        description: "Cóctel nacional de Chile y Perú",
    },
    MenuDrink {
        name: "Mojito",
        category: "cocktail",
        alcohol_content: 15.0,
        xp_reward: 35,
        difficulty: Difficulty::Medium,
        icon: "🌿",
        description: "Cóctel cubano refrescante",
    },
    MenuDrink {
        name: "Caipirinha",
        category: "cocktail",
        alcohol_content: 18.0,
        xp_reward: 30,
        difficulty: Difficulty::Easy,
        icon: "🍋",
        description: "Cóctel brasileño con cachaça",
    },
    MenuDrink {
        name: "Margarita",
        category: "cocktail",
        alcohol_content: 22.0,
        xp_reward: 35,
        difficulty: Difficulty::Medium,
        icon: "🍹",
        description: "Cóctel mexicano con tequila",
    },
    MenuDrink {
        name: "Daiquiri",
        category: "cocktail",
        alcohol_content: 20.0,
        xp_reward: 40,
        difficulty: Difficulty::Medium,
        icon: "🍹",
        description: "Cóctel clásico con ron",
    },
    MenuDrink {
        name: "Piña Colada",
        category: "cocktail",
        alcohol_content: 12.0,
        xp_reward: 25,
        difficulty: Difficulty::Easy,
        icon: "🥥",
        description: "Cóctel tropical cremoso",
    },
    MenuDrink {
        name: "Cosmopolitan",
        category: "cocktail",
        alcohol_content: 18.0,
        xp_reward: 45,
        difficulty: Difficulty::Hard,
        icon: "🍸",
        description: "Cóctel elegante con vodka",
    },
    // === OTHERS & CHILEAN CLASSICS ===
    MenuDrink {
        name: "Pisco",
        category: "other",
        alcohol_content: 40.0,
        xp_reward: 35,
        difficulty: Difficulty::Medium,
        icon: "🍾",
        description: "Destilado de uva chileno",
    },
    MenuDrink {
        name: "Terremoto",
        category: "cocktail",
        alcohol_content: 25.0,
        xp_reward: 50,
        difficulty: Difficulty::Hard,
        icon: "🌋",
        description: "Cóctel chileno tradicional",
    },
    MenuDrink {
        name: "Chicha",
        category: "other",
        alcohol_content: 12.0,
        xp_reward: 15,
        difficulty: Difficulty::Easy,
        icon: "🌽",
        description: "Bebida fermentada tradicional",
    },
    MenuDrink {
        name: "Gin Tonic",
        category: "cocktail",
        alcohol_content: 15.0,
        xp_reward: 25,
        difficulty: Difficulty::Easy,
        icon: "🍸",
        description: "Cóctel clásico británico",
    },
    MenuDrink {
        name: "Whiskey Sour",
        category: "cocktail",
        alcohol_content: 20.0,
        xp_reward: 40,
        difficulty: Difficulty::Medium,
        icon: "🥃",
        description: "Cóctel ácido con whiskey",
    },
    MenuDrink {
        name: "Negroni",
        category: "cocktail",
        alcohol_content: 24.0,
        xp_reward: 45,
        difficulty: Difficulty::Hard,
        icon: "🍸",
        description: "Cóctel italiano amargo",
    },
    MenuDrink {
        name: "Old Fashioned",
        category: "cocktail",
        alcohol_content: 35.0,
        xp_reward: 50,
        difficulty: Difficulty::Hard,
        icon: "🥃",
        description: "Cóctel clásico americano",
    },
    MenuDrink {
        name: "Manhattan",
        category: "cocktail",
        alcohol_content: 30.0,
        xp_reward: 45,
        difficulty: Difficulty::Hard,
        icon: "🥃",
        description: "Cóctel elegante con whiskey",
    },
    MenuDrink {
        name: "Aperol Spritz",
        category: "cocktail",
        alcohol_content: 11.0,
        xp_reward: 20,
        difficulty: Difficulty::Easy,
        icon: "🥂",
        description: "Aperitivo italiano refrescante",
    },
    MenuDrink {
        name: "Bloody Mary",
        category: "cocktail",
        alcohol_content: 15.0,
        xp_reward: 30,
        difficulty: Difficulty::Medium,
        icon: "🍅",
        description: "Cóctel con vodka y tomate",
    },
    MenuDrink {
        name: "Espresso Martini",
        category: "cocktail",
        alcohol_content: 20.0,
        xp_reward: 40,
        difficulty: Difficulty::Hard,
        icon: "☕",
        description: "Cóctel con café y vodka",
    },
    MenuDrink {
        name: "Tequila Sunrise",
        category: "cocktail",
        alcohol_content: 18.0,
        xp_reward: 30,
        difficulty: Difficulty::Medium,
        icon: "🌅",
        description: "Cóctel colorido mexicano",
    },
    MenuDrink {
        name: "Long Island",
        category: "cocktail",
        alcohol_content: 28.0,
        xp_reward: 60,
        difficulty: Difficulty::Hard,
        icon: "🍹",
        description: "Cóctel fuerte con múltiples licores",
    },
    MenuDrink {
        name: "Sex on the Beach",
        category: "cocktail",
        alcohol_content: 16.0,
        xp_reward: 25,
        difficulty: Difficulty::Easy,
        icon: "🏖️",
        description: "Cóctel tropical afrutado",
    },
    MenuDrink {
        name: "Blue Lagoon",
        category: "cocktail",
        alcohol_content: 18.0,
        xp_reward: 35,
        difficulty: Difficulty::Medium,
        icon: "💙",
        description: "Cóctel azul tropical",
    },
    MenuDrink {
        name: "Piscola",
        category: "cocktail",
        alcohol_content: 12.0,
        xp_reward: 20,
        difficulty: Difficulty::Easy,
        icon: "🥤",
        description: "Pisco con Coca-Cola, muy popular en Chile",
    },
    MenuDrink {
        name: "Cuba Libre",
        category: "cocktail",
        alcohol_content: 14.0,
        xp_reward: 25,
        difficulty: Difficulty::Easy,
        icon: "🥤",
        description: "Ron con Coca-Cola y limón",
    },
    MenuDrink {
        name: "Tropical Gin",
        category: "cocktail",
        alcohol_content: 16.0,
        xp_reward: 30,
        difficulty: Difficulty::Medium,
        icon: "🌺",
        description: "Gin con frutas tropicales",
    },
    MenuDrink {
        name: "Fernet con Cola",
        category: "cocktail",
        alcohol_content: 18.0,
        xp_reward: 25,
        difficulty: Difficulty::Easy,
        icon: "🥤",
        description: "Fernet Branca con Coca-Cola",
    },
    MenuDrink {
        name: "Jote",
        category: "cocktail",
        alcohol_content: 15.0,
        xp_reward: 30,
        difficulty: Difficulty::Medium,
        icon: "🍷",
        description: "Vino tinto con Coca-Cola",
    },
    MenuDrink {
        name: "Borgoña",
        category: "cocktail",
        alcohol_content: 16.0,
        xp_reward: 35,
        difficulty: Difficulty::Medium,
        icon: "🍓",
        description: "Vino tinto con frutillas",
    },
    MenuDrink {
        name: "Clery",
        category: "cocktail",
        alcohol_content: 14.0,
        xp_reward: 25,
        difficulty: Difficulty::Easy,
        icon: "🍓",
        description: "Vino blanco con frutillas",
    },
    MenuDrink {
        name: "Navegado",
        category: "cocktail",
        alcohol_content: 20.0,
        xp_reward: 40,
        difficulty: Difficulty::Medium,
        icon: "🍊",
        description: "Vino caliente especiado navideño",
    },
];

impl MenuDrink {
    /// Look up a menu entry by exact name
    pub fn find(name: &str) -> Option<&'static MenuDrink> {
        MENU.iter().find(|d| d.name == name)
    }

    /// All menu entries in a category, menu order preserved
    pub fn by_category(category: &str) -> Vec<&'static MenuDrink> {
        MENU.iter().filter(|d| d.category == category).collect()
    }

    /// XP reward for a drink name (None if it is not on the menu)
    pub fn xp_reward_for(name: &str) -> Option<u64> {
        Self::find(name).map(|d| d.xp_reward)
    }
}
