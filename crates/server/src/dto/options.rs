use modeshare::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionDto {
    pub id: String,
    pub identifier: String,
    pub name: String,
}

impl OptionDto {
    pub fn from<T: Identifiable>(value: &T) -> Self {
        Self {
            id: value.id().to_string(),
            identifier: value.identifier().to_string(),
            name: value.name().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaTypeDto {
    pub id: String,
    pub identifier: String,
    pub name: String,
    pub topojson_url: Option<String>,
    pub areas: Vec<OptionDto>,
}

impl AreaTypeDto {
    pub fn from(area_type: &AreaType) -> Self {
        Self {
            id: area_type.id.to_string(),
            identifier: area_type.identifier.to_string(),
            name: area_type.name.to_string(),
            topojson_url: area_type.topojson_url.as_deref().map(str::to_string),
            areas: area_type.areas.iter().map(OptionDto::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionsDto {
    pub area_types: Vec<AreaTypeDto>,
    pub transport_modes: Vec<OptionDto>,
}

impl OptionsDto {
    pub fn from(options: &OptionLists) -> Self {
        Self {
            area_types: options.area_types.iter().map(AreaTypeDto::from).collect(),
            transport_modes: options.transport_modes.iter().map(OptionDto::from).collect(),
        }
    }
}
