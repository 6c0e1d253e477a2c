use modeshare::prelude::*;
use serde::{Deserialize, Serialize};

use crate::dto::OptionDto;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SliderDto {
    pub max: u32,
    pub value: (u32, u32),
    pub labels: (String, String),
}

impl SliderDto {
    pub fn from(date_range: &DateRange) -> Self {
        let value = date_range.range_offsets();
        let label = |offset| date_range.offset_label(offset).unwrap_or_default();
        Self {
            max: date_range.month_span(),
            value,
            labels: (label(value.0), label(value.1)),
        }
    }
}

/// Current choices plus everything derived from them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoicesDto {
    pub state: UserChoiceState,
    /// False while option lists are missing or a choice does not resolve.
    pub ready: bool,
    pub visualisation: VisualisationKind,
    pub area_type: Option<OptionDto>,
    pub transport_mode: Option<OptionDto>,
    pub slider: SliderDto,
}

impl ChoicesDto {
    pub fn from(state: UserChoiceState, options: Option<&OptionLists>) -> Self {
        let area_type = options
            .and_then(|options| resolve_area_type(&state, &options.area_types))
            .map(OptionDto::from);
        let transport_mode = options
            .and_then(|options| resolve_transport_mode(&state, &options.transport_modes))
            .map(OptionDto::from);
        let ready = options
            .and_then(|options| resolve(&state, options))
            .is_some();
        let visualisation = select_visualisation(&state);
        let slider = SliderDto::from(&state.date_range);
        Self {
            state,
            ready,
            visualisation,
            area_type,
            transport_mode,
            slider,
        }
    }
}
