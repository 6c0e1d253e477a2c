use chrono::NaiveDate;
use modeshare::{
    choice::{Error, Field},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Wire form of an action:
/// `{"type": "set", "key": "areaType", "payload": "muni-042"}` or
/// `{"type": "dateRange", "payload": {"bounds": [..], "range": [..]}}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionDto {
    #[serde(rename = "type")]
    pub kind: String,
    pub key: Option<String>,
    #[serde(default)]
    pub payload: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateRangePayload {
    /// Sent by clients for symmetry. Bounds are fixed and this is ignored.
    pub bounds: Option<(NaiveDate, NaiveDate)>,
    pub range: (NaiveDate, NaiveDate),
}

impl ActionDto {
    /// Builds the typed action, checking a date range against the current bounds.
    pub fn into_action(self, state: &UserChoiceState) -> Result<Action, Error> {
        match self.kind.as_str() {
            "set" => {
                let key = self.key.unwrap_or_default();
                let field: Field = key.parse()?;
                if field == Field::DateRange {
                    return date_range_action(self.payload, state);
                }
                let value: FieldValue =
                    serde_json::from_value(json!({ "key": key, "payload": self.payload }))
                        .map_err(|err| Error::InvalidPayload {
                            field,
                            reason: err.to_string(),
                        })?;
                Ok(Action::Set(value))
            }
            "dateRange" => date_range_action(self.payload, state),
            other => Err(Error::UnknownField(other.to_string())),
        }
    }
}

fn date_range_action(payload: Value, state: &UserChoiceState) -> Result<Action, Error> {
    let payload: DateRangePayload =
        serde_json::from_value(payload).map_err(|err| Error::InvalidPayload {
            field: Field::DateRange,
            reason: err.to_string(),
        })?;
    state.date_range.check_range(payload.range)?;
    Ok(Action::SetDateRange {
        range: payload.range,
    })
}

#[cfg(test)]
fn state() -> UserChoiceState {
    let bounds = (
        NaiveDate::from_ymd_opt(2021, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2021, 12, 1).unwrap(),
    );
    UserChoiceState::new(DateRange::new(bounds).unwrap())
}

#[test]
fn parse_set_action() {
    let dto: ActionDto = serde_json::from_value(json!({
        "type": "set",
        "key": "areaType",
        "payload": "muni-042"
    }))
    .unwrap();
    assert_eq!(
        dto.into_action(&state()).unwrap(),
        Action::Set(FieldValue::AreaType("muni-042".into()))
    );
}

#[test]
fn parse_week_subset_null() {
    let dto: ActionDto = serde_json::from_value(json!({
        "type": "set",
        "key": "weekSubset",
        "payload": null
    }))
    .unwrap();
    assert_eq!(
        dto.into_action(&state()).unwrap(),
        Action::Set(FieldValue::WeekSubset(WeekSubset::All))
    );
}

#[test]
fn parse_visualisation() {
    let dto: ActionDto = serde_json::from_value(json!({
        "type": "set",
        "key": "visualisation",
        "payload": "table"
    }))
    .unwrap();
    assert_eq!(
        dto.into_action(&state()).unwrap(),
        Action::Set(FieldValue::Visualisation(Visualisation::Table))
    );
}

#[test]
fn unknown_key_rejected() {
    let dto: ActionDto = serde_json::from_value(json!({
        "type": "set",
        "key": "colour",
        "payload": "red"
    }))
    .unwrap();
    assert_eq!(
        dto.into_action(&state()),
        Err(Error::UnknownField("colour".into()))
    );
}

#[test]
fn bad_payload_rejected() {
    let dto: ActionDto = serde_json::from_value(json!({
        "type": "set",
        "key": "analyticsQuantity",
        "payload": "distance"
    }))
    .unwrap();
    assert!(matches!(
        dto.into_action(&state()),
        Err(Error::InvalidPayload {
            field: Field::AnalyticsQuantity,
            ..
        })
    ));
}

#[test]
fn date_range_ignores_bounds() {
    let dto: ActionDto = serde_json::from_value(json!({
        "type": "set",
        "key": "dateRange",
        "payload": {
            "bounds": ["2000-01-01", "2030-01-01"],
            "range": ["2021-03-01", "2021-05-01"]
        }
    }))
    .unwrap();
    let range = (
        NaiveDate::from_ymd_opt(2021, 3, 1).unwrap(),
        NaiveDate::from_ymd_opt(2021, 5, 1).unwrap(),
    );
    assert_eq!(
        dto.into_action(&state()).unwrap(),
        Action::SetDateRange { range }
    );
}

#[test]
fn date_range_outside_bounds_rejected() {
    let dto: ActionDto = serde_json::from_value(json!({
        "type": "dateRange",
        "payload": { "range": ["2020-03-01", "2021-05-01"] }
    }))
    .unwrap();
    assert!(matches!(
        dto.into_action(&state()),
        Err(Error::InvalidRange(_))
    ));
}
