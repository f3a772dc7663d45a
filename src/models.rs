use serde::{Serialize, Deserialize, Serializer, Deserializer};
use serde::ser::SerializeStruct;

/// Typed discriminant for a seating plan, derived from its free-text title.
///
/// The upstream data has no plan-type field; listings carry titles like
/// "Dedicated Desk" or "Meeting Room - 04 Seater" and the convention is a
/// case-insensitive keyword somewhere in the title. Classifying once at
/// ingestion means everything downstream matches on a closed set instead of
/// re-scanning text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlanKind {
    ManagedOffice,
    PrivateCabin,
    VirtualOffice,
    DedicatedDesk,
    DayPass,
    FlexiDesk,
    MeetingRoom,
    Other,
}

impl PlanKind {
    pub fn classify(title: &str) -> PlanKind {
        let title = title.to_lowercase();
        if title.contains("managed office") {
            PlanKind::ManagedOffice
        } else if title.contains("private cabin") {
            PlanKind::PrivateCabin
        } else if title.contains("virtual office")
            || (title.contains("virtual") && title.contains("office"))
        {
            PlanKind::VirtualOffice
        } else if title.contains("dedicated desk") {
            PlanKind::DedicatedDesk
        } else if title.contains("day pass") {
            PlanKind::DayPass
        } else if title.contains("flexi") {
            PlanKind::FlexiDesk
        } else if title.contains("meeting room") {
            PlanKind::MeetingRoom
        } else {
            PlanKind::Other
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PlanKind::ManagedOffice => "managed office",
            PlanKind::PrivateCabin => "private cabin",
            PlanKind::VirtualOffice => "virtual office",
            PlanKind::DedicatedDesk => "dedicated desk",
            PlanKind::DayPass => "day pass",
            PlanKind::FlexiDesk => "flexi desk",
            PlanKind::MeetingRoom => "meeting room",
            PlanKind::Other => "other",
        }
    }
}

/// A priced seating option attached to a property, as delivered by the
/// listings API. `price` and `seating` are free text and may be empty.
#[derive(Debug, Clone)]
pub struct SeatingPlan {
    pub title: String,
    pub price: String,
    pub seating: String,
    pub kind: PlanKind,
}

impl SeatingPlan {
    pub fn new(title: String, price: String, seating: String) -> Self {
        let kind = PlanKind::classify(&title);
        SeatingPlan { title, price, seating, kind }
    }
}

// Custom serialization for SeatingPlan: `kind` is derived state, only the
// three wire fields go out
impl Serialize for SeatingPlan {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("SeatingPlan", 3)?;
        state.serialize_field("title", &self.title)?;
        state.serialize_field("price", &self.price)?;
        state.serialize_field("seating", &self.seating)?;
        state.end()
    }
}

// Custom deserialization for SeatingPlan to classify the title as it comes in
impl<'de> Deserialize<'de> for SeatingPlan {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct SeatingPlanHelper {
            #[serde(default)]
            title: String,
            #[serde(default)]
            price: String,
            #[serde(default)]
            seating: String,
        }

        let helper = SeatingPlanHelper::deserialize(deserializer)?;
        Ok(SeatingPlan::new(helper.title, helper.price, helper.seating))
    }
}

/// The subset of a property record relevant to headline pricing, in the
/// camelCase shape the listings API uses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    // The API sometimes sends null instead of an empty list
    #[serde(default, deserialize_with = "null_as_empty_plans")]
    pub property_options: Vec<SeatingPlan>,
    #[serde(default)]
    pub price_display: Option<String>,
}

fn null_as_empty_plans<'de, D>(deserializer: D) -> Result<Vec<SeatingPlan>, D::Error>
where
    D: Deserializer<'de>,
{
    let plans = Option::<Vec<SeatingPlan>>::deserialize(deserializer)?;
    Ok(plans.unwrap_or_default())
}
