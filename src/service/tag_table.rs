use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::service::color_policy::Category;

#[derive(Debug, Clone, Copy)]
pub struct TagEntry {
    pub tag: &'static str,
    pub emoji: &'static str,
    pub category: Option<Category>,
}

// Tags with a category drive classification; the rest are cosmetic only.
const TAG_ENTRIES: &[TagEntry] = &[
    TagEntry { tag: ":run:", emoji: "🏃‍♂️", category: Some(Category::Run) },
    TagEntry { tag: ":bike:", emoji: "🚴‍♂️", category: Some(Category::Bike) },
    TagEntry { tag: ":birthday:", emoji: "🎂", category: Some(Category::Birthday) },
    TagEntry { tag: ":dinner:", emoji: "🍽️", category: Some(Category::Dinner) },
    TagEntry { tag: ":health:", emoji: "🩺", category: Some(Category::Health) },
    TagEntry { tag: ":gym:", emoji: "🏋️‍♂️", category: Some(Category::Gym) },
    TagEntry { tag: ":check:", emoji: "✅", category: None },
    TagEntry { tag: ":$:", emoji: "💸", category: None },
    TagEntry { tag: ":call:", emoji: "📞", category: None },
    TagEntry { tag: ":gift:", emoji: "🎁", category: None },
    TagEntry { tag: ":beer:", emoji: "🍻", category: None },
    TagEntry { tag: ":flight:", emoji: "✈️", category: None },
];

static TAG_TABLE: Lazy<HashMap<&'static str, &'static TagEntry>> =
    Lazy::new(|| TAG_ENTRIES.iter().map(|entry| (entry.tag, entry)).collect());

/// Exact, case-sensitive lookup of a bracketed tag like `:run:`.
/// A miss is a normal outcome, not an error.
pub fn lookup(tag: &str) -> Option<&'static TagEntry> {
    TAG_TABLE.get(tag).copied()
}
