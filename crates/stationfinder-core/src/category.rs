//! User-facing venue categories and their OpenStreetMap tag vocabularies.

/// Category value that disables type filtering.
pub const ALL_CATEGORIES: &str = "all";

/// Label returned when a raw tag belongs to no known category.
pub const OTHER_CATEGORY: &str = "other";

const DEFAULT_TABLE: &[(&str, &[&str])] = &[
    (
        "restaurant",
        &[
            "restaurant",
            "fast_food",
            "cafe",
            "bar",
            "pub",
            "food_court",
            "ice_cream",
            "biergarten",
        ],
    ),
    (
        "supermarket",
        &[
            "supermarket",
            "convenience",
            "grocery",
            "greengrocer",
            "bakery",
            "butcher",
            "deli",
        ],
    ),
    (
        "gym",
        &[
            "fitness_centre",
            "sports_centre",
            "gym",
            "swimming_pool",
            "sports_hall",
        ],
    ),
    ("pharmacy", &["pharmacy", "chemist", "medical_supply"]),
    ("bank", &["bank", "atm", "bureau_de_change"]),
    (
        "hotel",
        &["hotel", "hostel", "guest_house", "motel", "apartment"],
    ),
    ("fuel", &["fuel", "charging_station"]),
    ("hospital", &["hospital", "clinic", "doctors", "dentist"]),
    (
        "school",
        &["school", "university", "college", "kindergarten", "library"],
    ),
    (
        "shopping",
        &[
            "mall",
            "department_store",
            "clothes",
            "shoes",
            "electronics",
            "books",
            "gift",
            "florist",
            "mobile_phone",
            "variety_store",
        ],
    ),
    (
        "entertainment",
        &[
            "cinema",
            "theatre",
            "nightclub",
            "arts_centre",
            "casino",
            "bowling_alley",
            "amusement_arcade",
        ],
    ),
    (
        "tourism",
        &[
            "museum",
            "attraction",
            "gallery",
            "viewpoint",
            "zoo",
            "theme_park",
            "information",
        ],
    ),
];

/// How a requested category translates into a type restriction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategorySelection<'a> {
    /// No type restriction; any element carrying a type tag matches.
    All,
    /// Restrict to these venue-type tags.
    Tags(&'a [String]),
    /// The category has no known mapping; a search should yield nothing.
    Unmapped,
}

/// Ordered mapping from category labels to venue-type tags.
///
/// Reverse lookups return the first label in table order whose tag set
/// contains the raw tag, so overlapping tables resolve deterministically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryMap {
    entries: Vec<(String, Vec<String>)>,
}

impl CategoryMap {
    #[must_use]
    pub fn new(entries: Vec<(String, Vec<String>)>) -> Self {
        Self { entries }
    }

    /// Category labels in table order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(label, _)| label.as_str())
    }

    /// Venue-type tags for a label, or `None` when the label is unknown.
    #[must_use]
    pub fn tags_for(&self, category: &str) -> Option<&[String]> {
        let wanted = normalize_label(category);
        self.entries
            .iter()
            .find(|(label, _)| *label == wanted)
            .map(|(_, tags)| tags.as_slice())
    }

    /// Translate a requested category into a [`CategorySelection`].
    ///
    /// An empty string is treated like [`ALL_CATEGORIES`].
    #[must_use]
    pub fn selection(&self, category: &str) -> CategorySelection<'_> {
        let wanted = normalize_label(category);
        if wanted.is_empty() || wanted == ALL_CATEGORIES {
            return CategorySelection::All;
        }
        match self.tags_for(&wanted) {
            Some(tags) if !tags.is_empty() => CategorySelection::Tags(tags),
            _ => CategorySelection::Unmapped,
        }
    }

    /// Reverse lookup: the category a raw venue-type tag belongs to.
    #[must_use]
    pub fn category_for_tag(&self, raw_tag: &str) -> &str {
        let raw_tag = raw_tag.trim();
        self.entries
            .iter()
            .find(|(_, tags)| tags.iter().any(|t| t == raw_tag))
            .map_or(OTHER_CATEGORY, |(label, _)| label.as_str())
    }
}

impl Default for CategoryMap {
    fn default() -> Self {
        Self::new(
            DEFAULT_TABLE
                .iter()
                .map(|(label, tags)| {
                    (
                        (*label).to_string(),
                        tags.iter().map(|t| (*t).to_string()).collect(),
                    )
                })
                .collect(),
        )
    }
}

fn normalize_label(category: &str) -> String {
    category.trim().to_lowercase()
}
