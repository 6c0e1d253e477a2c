use chrono::NaiveDate;
use modeshare::{
    choice::{Config, Error, initial_actions, reduce},
    options::{GraphqlAnalytics, GraphqlArea, GraphqlAreaType, GraphqlOptions, GraphqlTransportMode},
    prelude::*,
};
use std::str::FromStr;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn fresh_state() -> UserChoiceState {
    UserChoiceState::new(DateRange::new((date(2021, 1, 1), date(2021, 12, 1))).unwrap())
}

fn options() -> OptionLists {
    GraphqlOptions {
        analytics: GraphqlAnalytics {
            area_types: vec![
                GraphqlAreaType {
                    id: "1".into(),
                    identifier: "district".into(),
                    name: "Districts".into(),
                    topojson_url: None,
                    daily_trips_url: None,
                    daily_lengths_url: None,
                    areas: vec![],
                },
                GraphqlAreaType {
                    id: "2".into(),
                    identifier: "muni".into(),
                    name: "Municipalities".into(),
                    topojson_url: None,
                    daily_trips_url: None,
                    daily_lengths_url: None,
                    areas: vec![GraphqlArea {
                        id: "1".into(),
                        identifier: "muni-042".into(),
                        name: "Example City".into(),
                    }],
                },
            ],
        },
        transport_modes: vec![
            GraphqlTransportMode {
                id: "1".into(),
                identifier: "walk".into(),
                name: "Walk".into(),
            },
            GraphqlTransportMode {
                id: "2".into(),
                identifier: "car".into(),
                name: "Car".into(),
            },
        ],
    }
    .into()
}

#[test]
fn initial_state_defaults() {
    let state = fresh_state();
    assert_eq!(state.week_subset, WeekSubset::Workday);
    assert_eq!(state.visualisation, Visualisation::ChoroplethMap);
    assert_eq!(state.analytics_quantity, None);
    assert_eq!(state.area_type, None);
    assert_eq!(state.transport_mode, None);
    assert_eq!(state.date_range.range, state.date_range.bounds);
}

#[test]
fn set_replaces_only_target_field() {
    let state = fresh_state();
    let next = reduce(
        &state,
        Action::Set(FieldValue::Visualisation(Visualisation::Table)),
    );
    assert_eq!(next.visualisation, Visualisation::Table);
    assert_eq!(next.week_subset, state.week_subset);
    assert_eq!(next.area_type, state.area_type);
    assert_eq!(next.transport_mode, state.transport_mode);
    assert_eq!(next.analytics_quantity, state.analytics_quantity);
    assert_eq!(next.date_range, state.date_range);
}

#[test]
fn last_write_wins() {
    let mut controller = UserChoiceController::new(fresh_state());
    controller.dispatch_all([
        FieldValue::AreaType("muni".into()).into(),
        FieldValue::WeekSubset(WeekSubset::Weekend).into(),
        FieldValue::AreaType("district".into()).into(),
        FieldValue::AnalyticsQuantity(AnalyticsQuantity::Trips).into(),
        FieldValue::WeekSubset(WeekSubset::All).into(),
        FieldValue::AnalyticsQuantity(AnalyticsQuantity::Lengths).into(),
    ]);
    let state = controller.state();
    assert_eq!(state.area_type.as_deref(), Some("district"));
    assert_eq!(state.week_subset, WeekSubset::All);
    assert_eq!(state.analytics_quantity, Some(AnalyticsQuantity::Lengths));
    // untouched
    assert_eq!(state.transport_mode, None);
    assert_eq!(state.visualisation, Visualisation::ChoroplethMap);
}

#[test]
fn dispatch_all_matches_single_dispatches() {
    let actions: Vec<Action> = vec![
        FieldValue::TransportMode("bike".into()).into(),
        FieldValue::Visualisation(Visualisation::Table).into(),
        FieldValue::TransportMode("car".into()).into(),
    ];
    let mut batched = UserChoiceController::new(fresh_state());
    batched.dispatch_all(actions.clone());
    let mut single = UserChoiceController::new(fresh_state());
    for action in actions {
        single.dispatch(action);
    }
    assert_eq!(batched.state(), single.state());
    assert_eq!(batched.state().transport_mode.as_deref(), Some("car"));
}

#[test]
fn dispatch_is_idempotent() {
    let mut controller = UserChoiceController::new(fresh_state());
    let action: Action = FieldValue::TransportMode("car".into()).into();
    let once = controller.dispatch(action.clone()).clone();
    let twice = controller.dispatch(action).clone();
    assert_eq!(once, twice);
}

#[test]
fn date_range_keeps_bounds() {
    let mut controller = UserChoiceController::new(fresh_state());
    let bounds = controller.state().date_range.bounds;
    let range = (date(2021, 3, 1), date(2021, 6, 1));
    let state = controller.dispatch(Action::SetDateRange { range });
    assert_eq!(state.date_range.bounds, bounds);
    assert_eq!(state.date_range.range, range);
}

#[test]
fn slider_action_round_trip() {
    let mut controller = UserChoiceController::new(fresh_state());
    let action = controller
        .state()
        .date_range
        .set_range_action(2, 4)
        .unwrap();
    let state = controller.dispatch(action);
    assert_eq!(state.date_range.range_offsets(), (2, 4));
}

#[test]
fn field_keys_parse() {
    for field in [
        Field::AreaType,
        Field::TransportMode,
        Field::AnalyticsQuantity,
        Field::WeekSubset,
        Field::Visualisation,
        Field::DateRange,
    ] {
        assert_eq!(Field::from_str(field.key()), Ok(field));
    }
}

#[test]
fn unknown_field_rejected() {
    assert_eq!(
        Field::from_str("colour"),
        Err(Error::UnknownField("colour".into()))
    );
}

#[test]
fn visualisation_lengths_map() {
    let mut state = fresh_state();
    state.analytics_quantity = Some(AnalyticsQuantity::Lengths);
    assert_eq!(select_visualisation(&state), VisualisationKind::Map);
}

#[test]
fn visualisation_lengths_table() {
    let mut state = fresh_state();
    state.visualisation = Visualisation::Table;
    state.analytics_quantity = Some(AnalyticsQuantity::Lengths);
    assert_eq!(select_visualisation(&state), VisualisationKind::Table);
}

#[test]
fn visualisation_trips_matrix() {
    let mut state = fresh_state();
    state.visualisation = Visualisation::Table;
    state.analytics_quantity = Some(AnalyticsQuantity::Trips);
    assert_eq!(select_visualisation(&state), VisualisationKind::Matrix);
}

#[test]
fn visualisation_trips_map_is_none() {
    let mut state = fresh_state();
    state.analytics_quantity = Some(AnalyticsQuantity::Trips);
    assert_eq!(select_visualisation(&state), VisualisationKind::None);
}

#[test]
fn visualisation_without_quantity_is_none() {
    assert_eq!(select_visualisation(&fresh_state()), VisualisationKind::None);
}

#[test]
fn initial_actions_fill_unset_fields() {
    let options = options();
    let mut controller = UserChoiceController::new(fresh_state());
    let actions = initial_actions(controller.state(), &options, &Config::default());
    assert_eq!(actions.len(), 3);
    let state = controller.dispatch_all(actions);
    // no configured area type, first one wins
    assert_eq!(state.area_type.as_deref(), Some("district"));
    assert_eq!(state.transport_mode.as_deref(), Some("car"));
    assert_eq!(state.analytics_quantity, Some(AnalyticsQuantity::Lengths));
}

#[test]
fn initial_actions_keep_existing_choices() {
    let options = options();
    let mut controller = UserChoiceController::new(fresh_state());
    controller.dispatch(FieldValue::TransportMode("walk".into()).into());
    controller.dispatch(FieldValue::AnalyticsQuantity(AnalyticsQuantity::Trips).into());
    let actions = initial_actions(controller.state(), &options, &Config::default());
    assert_eq!(
        actions,
        vec![Action::Set(FieldValue::AreaType("district".into()))]
    );
}

#[test]
fn initial_actions_fall_back_to_first_entry() {
    let options = options();
    let config = Config {
        area_type: Some("muni".into()),
        transport_mode: Some("hovercraft".into()),
        ..Default::default()
    };
    let mut controller = UserChoiceController::new(fresh_state());
    let actions = initial_actions(controller.state(), &options, &config);
    let state = controller.dispatch_all(actions);
    assert_eq!(state.area_type.as_deref(), Some("muni"));
    assert_eq!(state.transport_mode.as_deref(), Some("walk"));
}

#[test]
fn end_to_end_resolution() {
    let options = options();
    let mut controller = UserChoiceController::new(fresh_state());
    controller.dispatch(FieldValue::AnalyticsQuantity(AnalyticsQuantity::Lengths).into());
    controller.dispatch(FieldValue::AreaType("muni".into()).into());
    let state = controller.state();

    let area_type = resolve_area_type(state, &options.area_types).unwrap();
    assert_eq!(area_type.name.as_ref(), "Municipalities");
    let area = area_type.areas.get("muni-042").unwrap();
    assert_eq!(area.name.as_ref(), "Example City");
    assert_eq!(select_visualisation(state), VisualisationKind::Map);

    // transport mode still unset
    assert!(resolve(state, &options).is_none());
}
