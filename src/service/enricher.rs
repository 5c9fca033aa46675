use once_cell::sync::Lazy;
use regex::Regex;

use crate::service::color_policy::Category;
use crate::service::tag_table;

// Lowercase letters and a literal `$`, delimited by colons.
static TAG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r":[a-z$]+:").expect("tag pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enrichment {
    pub title: String,
    pub category: Option<Category>,
}

/// Rewrites every known tag in `title` to its emoji and derives a category
/// from the first (leftmost) tag that carries one.
///
/// Category selection and substitution are two separate passes: the first
/// categorized tag wins regardless of how many tags follow, while
/// substitution replaces every literal occurrence of each distinct known
/// tag. Unknown tokens that happen to match the tag syntax stay verbatim.
pub fn enrich(title: &str) -> Enrichment {
    let mut category: Option<Category> = None;
    let mut matched: Vec<&'static tag_table::TagEntry> = Vec::new();

    for found in TAG_PATTERN.find_iter(title) {
        let Some(entry) = tag_table::lookup(found.as_str()) else {
            continue;
        };
        if category.is_none() {
            category = entry.category;
        }
        if !matched.iter().any(|seen| seen.tag == entry.tag) {
            matched.push(entry);
        }
    }

    let mut new_title = title.to_string();
    for entry in matched {
        new_title = new_title.replace(entry.tag, entry.emoji);
    }

    Enrichment {
        title: new_title,
        category,
    }
}
