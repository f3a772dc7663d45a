use deskfinder::resolver::headline_price;
use deskfinder::Property;

fn parse(json: &str) -> Property {
    serde_json::from_str(json).unwrap()
}

#[test]
fn coworking_listing_shows_dedicated_desk_price() {
    let property = parse(
        r#"{
            "name": "Hub One",
            "categories": ["coworking"],
            "propertyOptions": [
                {"title": "Dedicated Desk", "price": "11999", "seating": ""},
                {"title": "Private Cabin", "price": "18000", "seating": ""}
            ]
        }"#,
    );
    assert_eq!(headline_price(&property, None), "₹ 11,999/seat/month");
}

#[test]
fn managed_listing_without_managed_plan_shows_fallback_text() {
    let property = parse(
        r#"{
            "name": "Tower A",
            "categories": ["managed"],
            "propertyOptions": [
                {"title": "Dedicated Desk", "price": "9000", "seating": ""}
            ],
            "priceDisplay": "Price on request"
        }"#,
    );
    let shown = headline_price(&property, None);
    assert_eq!(shown, "Price on request/seat/month");
    assert!(!shown.contains("9,000"));
}

#[test]
fn virtual_office_context_gets_yearly_suffix() {
    let property = parse(
        r#"{
            "name": "Hub One",
            "categories": ["virtual office", "coworking"],
            "propertyOptions": [
                {"title": "Virtual Office", "price": "₹ 3,500", "seating": ""},
                {"title": "Dedicated Desk", "price": "11999", "seating": ""}
            ]
        }"#,
    );
    assert_eq!(headline_price(&property, Some("virtual-office")), "₹ 3,500/Year");
    // without a context the virtual-office tag still wins over the desk
    assert_eq!(headline_price(&property, None), "₹ 3,500/Year");
}

#[test]
fn meeting_room_context_prices_the_four_seater_tier() {
    let property = parse(
        r#"{
            "name": "Hub One",
            "categories": ["meeting-room"],
            "propertyOptions": [
                {"title": "Meeting Room", "price": "500", "seating": "04 Seater"},
                {"title": "Meeting Room", "price": "300", "seating": "08 Seater"}
            ]
        }"#,
    );
    assert_eq!(headline_price(&property, Some("meeting-room")), "₹ 500/Hour");
}

#[test]
fn plans_with_unparseable_prices_fall_through_to_display_text() {
    let property = parse(
        r#"{
            "name": "Hub One",
            "categories": ["coworking"],
            "propertyOptions": [
                {"title": "Dedicated Desk", "price": "N/A", "seating": ""}
            ],
            "priceDisplay": "₹ 8,000 onwards"
        }"#,
    );
    assert_eq!(headline_price(&property, None), "₹ 8,000 onwards/seat/month");
}
