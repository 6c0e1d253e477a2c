use tracing::warn;

use crate::{
    analytics::{AnalyticsTable, Error},
    options::{Area, AreaType, TransportMode},
};

/// One area's values for the selected mode.
#[derive(Debug, Clone, PartialEq)]
pub struct AreaShare<'a> {
    pub area: &'a Area,
    pub absolute: f64,
    pub relative: f64,
}

impl AreaShare<'_> {
    /// Hover text: relative share in percent and absolute value in kilometres.
    pub fn tooltip(&self, mode: &TransportMode) -> String {
        format!(
            "{} ({}): {:.1} % ({}), {:.0} km",
            self.area.name,
            self.area.identifier,
            self.relative * 100.0,
            mode.name,
            self.absolute / 1000.0
        )
    }
}

/// A result table joined to the areas of an area type for one mode.
#[derive(Debug, Clone)]
pub struct ModeShare<'a> {
    mode: &'a TransportMode,
    areas: Vec<AreaShare<'a>>,
}

impl<'a> ModeShare<'a> {
    pub fn build(
        table: &AnalyticsTable,
        area_type: &'a AreaType,
        mode: &'a TransportMode,
    ) -> Result<Self, Error> {
        if !table.has_mode(&mode.identifier) {
            return Err(Error::ModeNotInData(mode.identifier.to_string()));
        }
        let areas = table
            .rows()
            .iter()
            .filter_map(|row| {
                let Some(area) = area_type.areas.get_by_id(&row.area_id) else {
                    warn!(
                        "Unknown area {} in {} data",
                        row.area_id, area_type.identifier
                    );
                    return None;
                };
                Some(AreaShare {
                    area,
                    absolute: row.absolute(&mode.identifier),
                    relative: row.relative(&mode.identifier),
                })
            })
            .collect();
        Ok(Self { mode, areas })
    }

    pub fn mode(&self) -> &TransportMode {
        self.mode
    }

    pub fn areas(&self) -> &[AreaShare<'a>] {
        &self.areas
    }

    /// Smallest and largest absolute value, None when no area matched.
    pub fn absolute_extent(&self) -> Option<(f64, f64)> {
        self.areas.iter().fold(None, |extent, share| {
            let value = share.absolute;
            Some(match extent {
                None => (value, value),
                Some((min, max)) => (f64::min(min, value), f64::max(max, value)),
            })
        })
    }

    pub fn area(&self, area_id: &str) -> Option<&AreaShare<'a>> {
        self.areas.iter().find(|share| share.area.id.as_ref() == area_id)
    }
}
