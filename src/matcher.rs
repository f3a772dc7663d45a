use crate::category::Category;
use crate::models::{PlanKind, SeatingPlan};
use crate::price::extract_price;

/// First plan of the given kind, in stored order.
fn first_of(kind: PlanKind, plans: &[SeatingPlan]) -> Option<&SeatingPlan> {
    plans.iter().find(|p| p.kind == kind)
}

/// Price of the first plan of the given kind, if it has a usable one.
pub fn plan_price(kind: PlanKind, plans: &[SeatingPlan]) -> Option<f64> {
    first_of(kind, plans).and_then(|p| extract_price(&p.price))
}

/// Headline price for a property viewed under a specific category page.
///
/// Most categories are strict: no plan of the matching kind (or no usable
/// price on it) means no price is shown. Substituting another plan's price
/// here would be wrong — a Dedicated Desk rate on a Managed Office page is
/// not a lower-fidelity answer, it is a different product.
pub fn category_price(category: Category, plans: &[SeatingPlan]) -> Option<f64> {
    match category {
        Category::VirtualOffice => plan_price(PlanKind::VirtualOffice, plans),
        Category::MeetingRoom => meeting_room_price(plans),
        Category::DayPass => plan_price(PlanKind::DayPass, plans),
        Category::Coworking => {
            // Dedicated Desk is the coworking headline; Private Cabin only
            // when no desk plan exists at all
            match first_of(PlanKind::DedicatedDesk, plans) {
                Some(plan) => extract_price(&plan.price),
                None => plan_price(PlanKind::PrivateCabin, plans),
            }
        }
        Category::DedicatedDesk => plan_price(PlanKind::DedicatedDesk, plans),
        Category::PrivateCabin => plan_price(PlanKind::PrivateCabin, plans),
        Category::Managed => plan_price(PlanKind::ManagedOffice, plans),
    }
}

/// Headline price across a property's meeting rooms.
///
/// Meeting rooms are the one plan type listed once per seat-count tier. The
/// 4-seater tier is the conventional "from ₹X" card price; when it is absent
/// or unpriced, the cheapest priced tier stands in.
pub fn meeting_room_price(plans: &[SeatingPlan]) -> Option<f64> {
    let rooms: Vec<&SeatingPlan> = plans
        .iter()
        .filter(|p| p.kind == PlanKind::MeetingRoom)
        .collect();
    if rooms.is_empty() {
        return None;
    }

    for room in &rooms {
        let seating = room.seating.to_lowercase();
        if seating.contains("04") || seating.contains("4 seater") {
            if let Some(price) = extract_price(&room.price) {
                return Some(price);
            }
        }
    }

    rooms
        .iter()
        .filter_map(|p| extract_price(&p.price))
        .reduce(f64::min)
}
