use std::collections::HashSet;

use crate::category::{self, Category};
use crate::matcher::{category_price, meeting_room_price, plan_price};
use crate::models::{PlanKind, Property, SeatingPlan};
use crate::price::{display_price, extract_price};
use crate::trace_println;

/// Property-level tag extracted from `categories`. A superset of the category
/// pages: Flexi Desk exists only as a tag and a plan type, never as a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListingTag {
    Managed,
    PrivateCabin,
    VirtualOffice,
    DedicatedDesk,
    DayPass,
    FlexiDesk,
    MeetingRoom,
    Coworking,
}

fn tag_of(raw: &str) -> Option<ListingTag> {
    if let Some(cat) = Category::parse(raw) {
        let tag = match cat {
            Category::Managed => ListingTag::Managed,
            Category::PrivateCabin => ListingTag::PrivateCabin,
            Category::VirtualOffice => ListingTag::VirtualOffice,
            Category::DedicatedDesk => ListingTag::DedicatedDesk,
            Category::DayPass => ListingTag::DayPass,
            Category::MeetingRoom => ListingTag::MeetingRoom,
            Category::Coworking => ListingTag::Coworking,
        };
        return Some(tag);
    }
    // Tags that are not category pages
    match category::compact(raw).as_str() {
        "flexidesk" | "flexidesks" | "flexiseat" | "flexi" => Some(ListingTag::FlexiDesk),
        "dedicated" => Some(ListingTag::DedicatedDesk),
        _ => None,
    }
}

/// Normalized tag set for a property's category strings.
pub fn listing_tags(categories: &[String]) -> HashSet<ListingTag> {
    categories.iter().filter_map(|c| tag_of(c)).collect()
}

#[derive(Debug, Clone, Copy)]
enum StepMatcher {
    Plan(PlanKind),
    MeetingRooms,
    CheapestOverall,
}

impl StepMatcher {
    fn run(self, plans: &[SeatingPlan]) -> Option<f64> {
        match self {
            StepMatcher::Plan(kind) => plan_price(kind, plans),
            StepMatcher::MeetingRooms => meeting_room_price(plans),
            StepMatcher::CheapestOverall => cheapest_overall(plans),
        }
    }

    fn describe(self) -> &'static str {
        match self {
            StepMatcher::Plan(kind) => kind.as_str(),
            StepMatcher::MeetingRooms => "meeting rooms",
            StepMatcher::CheapestOverall => "cheapest overall",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Strictness {
    // Tag applies but no usable price: stop the chain, show nothing
    Strict,
    // No usable price: try the next step
    Chained,
}

struct Step {
    tag: Option<ListingTag>,
    matcher: StepMatcher,
    strictness: Strictness,
}

// Priority order for untargeted listings (homepage, generic search). Managed
// Office and Private Cabin are premium offerings whose price must never be
// undercut by a cheaper plan on the same property; Virtual Office is checked
// before Dedicated Desk because a property tagged both virtual-office and
// coworking must show the Virtual Office price; Dedicated Desk is the default
// coworking headline. Strict steps stop the chain even when they find no
// price.
const FALLBACK_CHAIN: [Step; 10] = [
    Step {
        tag: Some(ListingTag::Managed),
        matcher: StepMatcher::Plan(PlanKind::ManagedOffice),
        strictness: Strictness::Strict,
    },
    Step {
        tag: Some(ListingTag::PrivateCabin),
        matcher: StepMatcher::Plan(PlanKind::PrivateCabin),
        strictness: Strictness::Strict,
    },
    Step {
        tag: Some(ListingTag::VirtualOffice),
        matcher: StepMatcher::Plan(PlanKind::VirtualOffice),
        strictness: Strictness::Strict,
    },
    Step {
        tag: None,
        matcher: StepMatcher::Plan(PlanKind::DedicatedDesk),
        strictness: Strictness::Chained,
    },
    // A dedicated-tagged property whose desk plan yielded nothing shows no
    // price; the cabin steps below must not stand in for it
    Step {
        tag: Some(ListingTag::DedicatedDesk),
        matcher: StepMatcher::Plan(PlanKind::DedicatedDesk),
        strictness: Strictness::Strict,
    },
    Step {
        tag: Some(ListingTag::DayPass),
        matcher: StepMatcher::Plan(PlanKind::DayPass),
        strictness: Strictness::Strict,
    },
    Step {
        tag: Some(ListingTag::FlexiDesk),
        matcher: StepMatcher::Plan(PlanKind::FlexiDesk),
        strictness: Strictness::Strict,
    },
    Step {
        tag: Some(ListingTag::MeetingRoom),
        matcher: StepMatcher::MeetingRooms,
        strictness: Strictness::Strict,
    },
    Step {
        tag: None,
        matcher: StepMatcher::Plan(PlanKind::PrivateCabin),
        strictness: Strictness::Chained,
    },
    Step {
        tag: None,
        matcher: StepMatcher::CheapestOverall,
        strictness: Strictness::Chained,
    },
];

fn cheapest_overall(plans: &[SeatingPlan]) -> Option<f64> {
    plans
        .iter()
        .filter_map(|p| extract_price(&p.price))
        .reduce(f64::min)
}

/// Walk the fallback chain for a property with no category context.
pub fn fallback_price(property: &Property) -> Option<f64> {
    let tags = listing_tags(&property.categories);
    let plans = &property.property_options;

    for step in &FALLBACK_CHAIN {
        if let Some(tag) = step.tag {
            if !tags.contains(&tag) {
                continue;
            }
        }

        match step.matcher.run(plans) {
            Some(price) => {
                trace_println!(
                    "{}: fallback step '{}' resolved {}",
                    property.name,
                    step.matcher.describe(),
                    price
                );
                return Some(price);
            }
            None if step.strictness == Strictness::Strict => {
                trace_println!(
                    "{}: strict step '{}' found no usable price, showing none",
                    property.name,
                    step.matcher.describe()
                );
                return None;
            }
            None => {}
        }
    }

    None
}

/// Resolve the numeric headline price for a property, honoring an optional
/// category context (e.g. the category page the card is rendered under).
pub fn resolve_price(property: &Property, context: Option<&str>) -> Option<f64> {
    if property.property_options.is_empty() {
        return None;
    }

    match category::resolve_context(context) {
        Some(cat) => {
            let price = category_price(cat, &property.property_options);
            trace_println!(
                "{}: category matcher {:?} resolved {:?}",
                property.name,
                cat,
                price
            );
            price
        }
        None => fallback_price(property),
    }
}

/// The display string for a listing card: grouped rupee amount with the
/// category suffix, or the property's precomputed display text (with the same
/// suffix) when no plan price resolves. Pure projection of its inputs.
pub fn headline_price(property: &Property, context: Option<&str>) -> String {
    let display_cat = category::display_category(property, context);

    match resolve_price(property, context) {
        Some(price) => display_price(price, display_cat),
        None => match property.price_display.as_deref() {
            Some(text) if !text.trim().is_empty() => {
                format!("{}{}", text, category::suffix_for(display_cat))
            }
            _ => String::new(),
        },
    }
}
