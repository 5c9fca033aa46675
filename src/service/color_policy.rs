#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Run,
    Bike,
    Birthday,
    Dinner,
    Health,
    Gym,
}

/// The subset of Google Calendar event colors this bot assigns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventColor {
    Graphite,
    Banana,
    Blueberry,
    Tomato,
    Flamingo,
}

impl EventColor {
    /// Google Calendar API `colorId` for this color.
    pub fn color_id(&self) -> &'static str {
        match self {
            EventColor::Graphite => "8",
            EventColor::Banana => "5",
            EventColor::Blueberry => "9",
            EventColor::Tomato => "11",
            EventColor::Flamingo => "4",
        }
    }
}

/// Maps a derived category to a display color. `None` means the event's
/// existing color is left alone.
pub fn color_for(category: Option<Category>) -> Option<EventColor> {
    match category? {
        Category::Run => Some(EventColor::Graphite),
        Category::Bike => Some(EventColor::Graphite),
        Category::Birthday => Some(EventColor::Banana),
        Category::Dinner => Some(EventColor::Blueberry),
        Category::Health => Some(EventColor::Tomato),
        Category::Gym => Some(EventColor::Flamingo),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_maps_to_a_fixed_color() {
        assert_eq!(color_for(Some(Category::Run)), Some(EventColor::Graphite));
        assert_eq!(color_for(Some(Category::Bike)), Some(EventColor::Graphite));
        assert_eq!(color_for(Some(Category::Birthday)), Some(EventColor::Banana));
        assert_eq!(color_for(Some(Category::Dinner)), Some(EventColor::Blueberry));
        assert_eq!(color_for(Some(Category::Health)), Some(EventColor::Tomato));
        assert_eq!(color_for(Some(Category::Gym)), Some(EventColor::Flamingo));
    }

    #[test]
    fn no_category_means_no_color_change() {
        assert_eq!(color_for(None), None);
    }

    #[test]
    fn color_ids_match_google_palette() {
        assert_eq!(EventColor::Graphite.color_id(), "8");
        assert_eq!(EventColor::Banana.color_id(), "5");
        assert_eq!(EventColor::Blueberry.color_id(), "9");
        assert_eq!(EventColor::Tomato.color_id(), "11");
        assert_eq!(EventColor::Flamingo.color_id(), "4");
    }
}
