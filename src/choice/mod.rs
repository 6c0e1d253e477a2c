use std::{fmt, str::FromStr, sync::Arc};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use thiserror::Error;
use tracing::debug;

use crate::{
    options::{Catalog, OptionLists},
    shared::{Identifiable, is_weekend},
};

mod config;
pub mod date_range;
mod view;
pub use config::*;
pub use view::*;

use date_range::DateRange;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("Unknown user choice field: {0}")]
    UnknownField(String),
    #[error("Invalid date range: {0}")]
    InvalidRange(String),
    #[error("Invalid payload for {field}: {reason}")]
    InvalidPayload { field: Field, reason: String },
}

/// Whether to analyze trip lengths or trip counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalyticsQuantity {
    Lengths,
    Trips,
}

/// Which days of the week to include.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum WeekSubset {
    #[default]
    Workday,
    Weekend,
    /// Every day of the week. Written as `null` on the wire.
    All,
}

impl WeekSubset {
    pub fn includes(&self, date: chrono::NaiveDate) -> bool {
        match self {
            WeekSubset::Workday => !is_weekend(date),
            WeekSubset::Weekend => is_weekend(date),
            WeekSubset::All => true,
        }
    }
}

impl Serialize for WeekSubset {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            WeekSubset::Workday => serializer.serialize_str("workday"),
            WeekSubset::Weekend => serializer.serialize_str("weekend"),
            WeekSubset::All => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for WeekSubset {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Option::<String>::deserialize(deserializer)?.as_deref() {
            None | Some("all") => Ok(WeekSubset::All),
            Some("workday") => Ok(WeekSubset::Workday),
            Some("weekend") => Ok(WeekSubset::Weekend),
            Some(other) => Err(de::Error::unknown_variant(
                other,
                &["workday", "weekend", "all"],
            )),
        }
    }
}

/// How the user wants the result rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Visualisation {
    #[default]
    #[serde(rename = "choropleth-map")]
    ChoroplethMap,
    #[serde(rename = "table")]
    Table,
}

/// Everything the user has picked. A controller changes it only through [`reduce`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserChoiceState {
    pub area_type: Option<Arc<str>>,
    pub transport_mode: Option<Arc<str>>,
    pub analytics_quantity: Option<AnalyticsQuantity>,
    pub week_subset: WeekSubset,
    pub visualisation: Visualisation,
    pub date_range: DateRange,
}

impl UserChoiceState {
    pub fn new(date_range: DateRange) -> Self {
        Self::with_config(date_range, &Config::default())
    }

    pub fn with_config(date_range: DateRange, config: &Config) -> Self {
        Self {
            area_type: None,
            transport_mode: None,
            analytics_quantity: None,
            week_subset: config.week_subset,
            visualisation: config.visualisation,
            date_range,
        }
    }
}

/// Names of the fields an action can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    AreaType,
    TransportMode,
    AnalyticsQuantity,
    WeekSubset,
    Visualisation,
    DateRange,
}

impl Field {
    pub const fn key(&self) -> &'static str {
        match self {
            Field::AreaType => "areaType",
            Field::TransportMode => "transportMode",
            Field::AnalyticsQuantity => "analyticsQuantity",
            Field::WeekSubset => "weekSubset",
            Field::Visualisation => "visualisation",
            Field::DateRange => "dateRange",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Field {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "areaType" => Ok(Field::AreaType),
            "transportMode" => Ok(Field::TransportMode),
            "analyticsQuantity" => Ok(Field::AnalyticsQuantity),
            "weekSubset" => Ok(Field::WeekSubset),
            "visualisation" => Ok(Field::Visualisation),
            "dateRange" => Ok(Field::DateRange),
            other => Err(Error::UnknownField(other.to_string())),
        }
    }
}

/// A new value for exactly one simple field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "key", content = "payload", rename_all = "camelCase")]
pub enum FieldValue {
    AreaType(Arc<str>),
    TransportMode(Arc<str>),
    AnalyticsQuantity(AnalyticsQuantity),
    WeekSubset(WeekSubset),
    Visualisation(Visualisation),
}

impl FieldValue {
    pub const fn field(&self) -> Field {
        match self {
            FieldValue::AreaType(_) => Field::AreaType,
            FieldValue::TransportMode(_) => Field::TransportMode,
            FieldValue::AnalyticsQuantity(_) => Field::AnalyticsQuantity,
            FieldValue::WeekSubset(_) => Field::WeekSubset,
            FieldValue::Visualisation(_) => Field::Visualisation,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Set(FieldValue),
    /// Replaces the selected range. The bounds are never touched.
    SetDateRange {
        range: (chrono::NaiveDate, chrono::NaiveDate),
    },
}

impl From<FieldValue> for Action {
    fn from(value: FieldValue) -> Self {
        Action::Set(value)
    }
}

/// Computes the state that follows `state` once `action` is applied.
/// Every field other than the targeted one is carried over unchanged.
pub fn reduce(state: &UserChoiceState, action: Action) -> UserChoiceState {
    let mut next = state.clone();
    match action {
        Action::Set(FieldValue::AreaType(value)) => next.area_type = Some(value),
        Action::Set(FieldValue::TransportMode(value)) => next.transport_mode = Some(value),
        Action::Set(FieldValue::AnalyticsQuantity(value)) => {
            next.analytics_quantity = Some(value)
        }
        Action::Set(FieldValue::WeekSubset(value)) => next.week_subset = value,
        Action::Set(FieldValue::Visualisation(value)) => next.visualisation = value,
        Action::SetDateRange { range } => next.date_range.range = range,
    }
    next
}

/// Single owner of a [`UserChoiceState`].
#[derive(Debug, Clone)]
pub struct UserChoiceController {
    state: UserChoiceState,
}

impl UserChoiceController {
    pub fn new(state: UserChoiceState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &UserChoiceState {
        &self.state
    }

    /// Applies one action and returns the resulting state.
    pub fn dispatch(&mut self, action: Action) -> &UserChoiceState {
        debug!("Dispatching {action:?}");
        self.state = reduce(&self.state, action);
        &self.state
    }

    /// Applies actions in order.
    pub fn dispatch_all<I>(&mut self, actions: I) -> &UserChoiceState
    where
        I: IntoIterator<Item = Action>,
    {
        for action in actions {
            self.dispatch(action);
        }
        &self.state
    }
}

/// Actions that fill in the fields still unset once the option lists
/// have arrived. Fields that already hold a value are left alone.
pub fn initial_actions(
    state: &UserChoiceState,
    options: &OptionLists,
    config: &Config,
) -> Vec<Action> {
    let mut actions = Vec::new();
    if state.area_type.is_none()
        && let Some(area_type) = pick(&options.area_types, config.area_type.as_deref())
    {
        actions.push(FieldValue::AreaType(area_type.identifier().into()).into());
    }
    if state.transport_mode.is_none()
        && let Some(mode) = pick(&options.transport_modes, config.transport_mode.as_deref())
    {
        actions.push(FieldValue::TransportMode(mode.identifier().into()).into());
    }
    if state.analytics_quantity.is_none() {
        actions.push(FieldValue::AnalyticsQuantity(config.analytics_quantity).into());
    }
    actions
}

fn pick<'a, T: Identifiable>(catalog: &'a Catalog<T>, preferred: Option<&str>) -> Option<&'a T> {
    preferred
        .and_then(|identifier| catalog.get(identifier))
        .or_else(|| catalog.first())
}
