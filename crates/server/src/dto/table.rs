use modeshare::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowDto {
    pub area_id: String,
    pub absolute: HashMap<String, f64>,
    pub relative: HashMap<String, f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableDto {
    pub visualisation: VisualisationKind,
    pub modes: Vec<String>,
    pub rows: Vec<RowDto>,
}

impl TableDto {
    pub fn from(table: &AnalyticsTable, visualisation: VisualisationKind) -> Self {
        let rows = table
            .rows()
            .iter()
            .map(|row| RowDto {
                area_id: row.area_id.to_string(),
                absolute: to_owned_keys(&row.absolute),
                relative: to_owned_keys(&row.relative),
            })
            .collect();
        Self {
            visualisation,
            modes: table.modes().iter().map(|mode| mode.to_string()).collect(),
            rows,
        }
    }
}

fn to_owned_keys<K: ToString>(values: &HashMap<K, f64>) -> HashMap<String, f64> {
    values
        .iter()
        .map(|(key, value)| (key.to_string(), *value))
        .collect()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaShareDto {
    pub area_id: String,
    pub identifier: String,
    pub name: String,
    pub absolute: f64,
    pub relative: f64,
    pub tooltip: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareDto {
    pub mode: String,
    pub extent: Option<(f64, f64)>,
    pub areas: Vec<AreaShareDto>,
}

impl ShareDto {
    pub fn from(share: &ModeShare) -> Self {
        let mode = share.mode();
        let areas = share
            .areas()
            .iter()
            .map(|value| AreaShareDto {
                area_id: value.area.id.to_string(),
                identifier: value.area.identifier.to_string(),
                name: value.area.name.to_string(),
                absolute: value.absolute,
                relative: value.relative,
                tooltip: value.tooltip(mode),
            })
            .collect();
        Self {
            mode: mode.identifier.to_string(),
            extent: share.absolute_extent(),
            areas,
        }
    }
}
