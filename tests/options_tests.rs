use chrono::NaiveDate;
use modeshare::prelude::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn state() -> UserChoiceState {
    UserChoiceState::new(DateRange::new((date(2021, 1, 1), date(2021, 12, 1))).unwrap())
}

fn area_type(id: &str, identifier: &str, name: &str) -> AreaType {
    AreaType {
        id: id.into(),
        identifier: identifier.into(),
        name: name.into(),
        ..Default::default()
    }
}

fn mode(id: &str, identifier: &str, name: &str) -> TransportMode {
    TransportMode {
        id: id.into(),
        identifier: identifier.into(),
        name: name.into(),
    }
}

#[test]
fn empty_catalog_never_resolves() {
    let empty: Catalog<AreaType> = Catalog::default();
    let mut state = state();
    assert!(resolve_area_type(&state, &empty).is_none());
    state.area_type = Some("muni-042".into());
    assert!(resolve_area_type(&state, &empty).is_none());
}

#[test]
fn unset_choice_never_resolves() {
    let catalog = Catalog::new(vec![area_type("1", "muni-042", "Example City")]);
    assert!(resolve_area_type(&state(), &catalog).is_none());
}

#[test]
fn stale_identifier_is_not_ready() {
    let catalog = Catalog::new(vec![area_type("1", "muni-042", "Example City")]);
    let mut state = state();
    state.area_type = Some("muni-999".into());
    assert!(resolve_area_type(&state, &catalog).is_none());
}

#[test]
fn resolves_matching_entry() {
    let catalog = Catalog::new(vec![
        area_type("7", "district-1", "Centre"),
        area_type("1", "muni-042", "Example City"),
    ]);
    let mut controller = UserChoiceController::new(state());
    controller.dispatch(FieldValue::AnalyticsQuantity(AnalyticsQuantity::Lengths).into());
    controller.dispatch(FieldValue::AreaType("muni-042".into()).into());
    let state = controller.state();

    let first = resolve_area_type(state, &catalog).unwrap();
    assert_eq!(first.id.as_ref(), "1");
    assert_eq!(first.name.as_ref(), "Example City");
    let second = resolve_area_type(state, &catalog).unwrap();
    assert!(std::ptr::eq(first, second));
    assert_eq!(select_visualisation(state), VisualisationKind::Map);
}

#[test]
fn resolves_transport_mode() {
    let catalog = Catalog::new(vec![mode("1", "walk", "Walk"), mode("2", "car", "Car")]);
    let mut state = state();
    assert!(resolve_transport_mode(&state, &catalog).is_none());
    state.transport_mode = Some("car".into());
    assert_eq!(
        resolve_transport_mode(&state, &catalog).map(|val| val.name.as_ref()),
        Some("Car")
    );
}

#[test]
fn duplicate_identifier_first_wins() {
    let catalog = Catalog::new(vec![mode("1", "car", "Car"), mode("2", "car", "Car (old)")]);
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.get("car").map(|val| val.id.as_ref()), Some("1"));
}

#[test]
fn lookup_by_backend_id() {
    let catalog = Catalog::new(vec![mode("1", "walk", "Walk"), mode("2", "car", "Car")]);
    assert_eq!(catalog.get_by_id("2").map(|val| val.identifier()), Some("car"));
    assert!(catalog.get_by_id("car").is_none());
}

#[test]
fn resolve_needs_every_choice() {
    let options = OptionLists {
        area_types: Catalog::new(vec![area_type("1", "muni-042", "Example City")]),
        transport_modes: Catalog::new(vec![mode("2", "car", "Car")]),
    };
    let mut controller = UserChoiceController::new(state());
    controller.dispatch(FieldValue::AreaType("muni-042".into()).into());
    controller.dispatch(FieldValue::TransportMode("car".into()).into());
    assert!(resolve(controller.state(), &options).is_none());

    controller.dispatch(FieldValue::AnalyticsQuantity(AnalyticsQuantity::Trips).into());
    controller.dispatch(FieldValue::Visualisation(Visualisation::Table).into());
    let resolved = resolve(controller.state(), &options).unwrap();
    assert_eq!(resolved.area_type.identifier.as_ref(), "muni-042");
    assert_eq!(resolved.transport_mode.identifier.as_ref(), "car");
    assert_eq!(resolved.quantity, AnalyticsQuantity::Trips);
    assert_eq!(resolved.visualisation, VisualisationKind::Matrix);
}

#[test]
fn daily_url_follows_quantity() {
    let value = AreaType {
        daily_trips_url: Some("https://example.org/trips.csv".into()),
        daily_lengths_url: Some("https://example.org/lengths.csv".into()),
        ..area_type("1", "muni", "Municipalities")
    };
    assert_eq!(
        value.daily_url(AnalyticsQuantity::Trips),
        Some("https://example.org/trips.csv")
    );
    assert_eq!(
        value.daily_url(AnalyticsQuantity::Lengths),
        Some("https://example.org/lengths.csv")
    );
}
