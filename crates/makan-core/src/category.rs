//! Coarse merchant categories selectable through the `type` query parameter.

/// A category filter value. Parsing never fails: anything other than the four
/// known names becomes [`Category::Unknown`], which matches no cuisine code
/// and therefore filters out every merchant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Food,
    Drink,
    Snack,
    Coffee,
    Unknown,
}

const FOOD_KEYWORDS: &[&str] = &[
    "ANEKA_NASI",
    "FASTFOOD",
    "SOTO_BAKSO_SOP",
    "ANEKA_AYAM_BEBEK",
    "ROTI",
    "CHINESE",
    "KOREAN",
    "JAPANESE",
    "SEAFOOD",
    "BAKMIE",
    "SATE",
    "PIZZA_PASTA",
    "THAI",
    "MIDDLE_EASTERN",
    "BURGER_SANDWICH_STEAK",
];

const DRINK_KEYWORDS: &[&str] = &["COFFEE_SHOP", "MINUMAN"];

const SNACK_KEYWORDS: &[&str] = &["SNACKS_JAJANAN", "SWEETS_DESSERTS", "MARTABAK"];

const COFFEE_KEYWORDS: &[&str] = &["COFFEE_SHOP"];

impl Category {
    /// Parses a raw query value. Matching is exact and case-sensitive, so
    /// `"food"` is [`Category::Unknown`].
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "FOOD" => Category::Food,
            "DRINK" => Category::Drink,
            "SNACK" => Category::Snack,
            "COFFEE" => Category::Coffee,
            _ => Category::Unknown,
        }
    }

    /// The cuisine codes that place a merchant in this category.
    #[must_use]
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Category::Food => FOOD_KEYWORDS,
            Category::Drink => DRINK_KEYWORDS,
            Category::Snack => SNACK_KEYWORDS,
            Category::Coffee => COFFEE_KEYWORDS,
            Category::Unknown => &[],
        }
    }

    /// Whether a merchant's comma-joined `tag` string belongs to this
    /// category. Substring match, case-sensitive.
    #[must_use]
    pub fn admits(self, tag: &str) -> bool {
        self.keywords().iter().any(|keyword| tag.contains(keyword))
    }
}
