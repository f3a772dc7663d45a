//! Headline price resolution for coworking/real-estate listing cards.
//!
//! Given a property snapshot (category tags, seating plans, precomputed
//! fallback text) and an optional category context, produce the single price
//! string shown on the listing card, e.g. `"₹ 11,999/seat/month"`.

pub mod category;
pub mod matcher;
pub mod models;
pub mod price;
pub mod resolver;
pub mod trace;
pub mod utils;

pub use category::Category;
pub use models::{PlanKind, Property, SeatingPlan};
pub use resolver::{headline_price, resolve_price};
