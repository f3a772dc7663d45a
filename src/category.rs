use crate::models::Property;

/// Canonical listing category, as used for category pages and price suffixes.
///
/// Category strings arrive in several spellings per category (URL slugs,
/// display names, legacy tags), so resolution goes through a compact
/// normalized form first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    VirtualOffice,
    MeetingRoom,
    DayPass,
    Coworking,
    DedicatedDesk,
    PrivateCabin,
    Managed,
}

impl Category {
    /// Resolve a raw category string to its canonical category, if any.
    ///
    /// "Virtual Office", "virtual-office" and "virtualoffice" all land on the
    /// same compact form and resolve identically. Unrecognized strings are
    /// None, which callers treat as "no category context".
    pub fn parse(raw: &str) -> Option<Category> {
        let compact = compact(raw);
        if compact.is_empty() {
            return None;
        }
        let category = match compact.as_str() {
            "virtualoffice" | "virtualoffices" | "virtualofficespace" => Category::VirtualOffice,
            "meetingroom" | "meetingrooms" | "conferenceroom" => Category::MeetingRoom,
            "daypass" | "daypasses" | "dailypass" => Category::DayPass,
            "coworking" | "coworkingspace" | "coworkingspaces" | "sharedoffice" => {
                Category::Coworking
            }
            "dedicateddesk" | "dedicateddesks" | "dedicatedseat" => Category::DedicatedDesk,
            "privatecabin" | "privatecabins" | "privateoffice" => Category::PrivateCabin,
            "managed" | "managedoffice" | "managedoffices" | "managedofficespace" => {
                Category::Managed
            }
            _ => return None,
        };
        Some(category)
    }

    /// The price suffix shown after the grouped amount for this category.
    pub fn suffix(self) -> &'static str {
        match self {
            Category::VirtualOffice => "/Year",
            Category::MeetingRoom => "/Hour",
            Category::DayPass => "/seat/Day",
            Category::Managed
            | Category::Coworking
            | Category::DedicatedDesk
            | Category::PrivateCabin => "/seat/month",
        }
    }
}

// Lowercase and drop everything that is not a letter or digit, so that
// hyphenated, spaced and concatenated spellings compare equal
pub(crate) fn compact(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}

/// Resolve an optional category context string (e.g. a URL query parameter).
pub fn resolve_context(raw: Option<&str>) -> Option<Category> {
    raw.and_then(Category::parse)
}

/// Suffix for an optionally resolved category; unresolved listings get the
/// generic monthly suffix.
pub fn suffix_for(category: Option<Category>) -> &'static str {
    match category {
        Some(category) => category.suffix(),
        None => "/month",
    }
}

/// The category the displayed suffix is computed from: the page's category
/// context when it resolves, otherwise the property's primary category (its
/// first tag that parses). Independent of which plan ends up priced.
pub fn display_category(property: &Property, context: Option<&str>) -> Option<Category> {
    resolve_context(context)
        .or_else(|| property.categories.iter().find_map(|c| Category::parse(c)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spellings_normalize_to_one_category() {
        for raw in ["Virtual Office", "virtual-office", "virtualoffice", "VIRTUAL_OFFICE"] {
            assert_eq!(Category::parse(raw), Some(Category::VirtualOffice), "input: {}", raw);
        }
        for raw in ["meeting-room", "meetingroom", "Meeting Room"] {
            assert_eq!(Category::parse(raw), Some(Category::MeetingRoom), "input: {}", raw);
        }
    }

    #[test]
    fn unrecognized_and_empty_strings_resolve_to_none() {
        assert_eq!(Category::parse(""), None);
        assert_eq!(Category::parse("   "), None);
        assert_eq!(Category::parse("penthouse"), None);
        assert_eq!(resolve_context(None), None);
        assert_eq!(resolve_context(Some("")), None);
    }

    #[test]
    fn suffix_table() {
        assert_eq!(Category::VirtualOffice.suffix(), "/Year");
        assert_eq!(Category::MeetingRoom.suffix(), "/Hour");
        assert_eq!(Category::DayPass.suffix(), "/seat/Day");
        assert_eq!(Category::Managed.suffix(), "/seat/month");
        assert_eq!(Category::Coworking.suffix(), "/seat/month");
        assert_eq!(Category::DedicatedDesk.suffix(), "/seat/month");
        assert_eq!(Category::PrivateCabin.suffix(), "/seat/month");
        assert_eq!(suffix_for(None), "/month");
    }

    #[test]
    fn display_category_prefers_context_over_property_tags() {
        let property = Property {
            name: "Hub One".into(),
            city: None,
            categories: vec!["coworking".into()],
            property_options: Vec::new(),
            price_display: None,
        };
        assert_eq!(
            display_category(&property, Some("meeting-room")),
            Some(Category::MeetingRoom)
        );
        assert_eq!(display_category(&property, None), Some(Category::Coworking));
        assert_eq!(display_category(&property, Some("not-a-category")), Some(Category::Coworking));
    }
}
