use crate::choice::{AnalyticsQuantity, Visualisation, WeekSubset};

/// Starting values for a fresh session.
pub struct Config {
    /// Area type picked once option lists arrive. Falls back to the first listed.
    pub area_type: Option<String>,
    /// Transport mode picked once option lists arrive. Falls back to the first listed.
    pub transport_mode: Option<String>,
    pub analytics_quantity: AnalyticsQuantity,
    pub week_subset: WeekSubset,
    pub visualisation: Visualisation,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            area_type: None,
            transport_mode: Some("car".into()),
            analytics_quantity: AnalyticsQuantity::Lengths,
            week_subset: WeekSubset::Workday,
            visualisation: Visualisation::ChoroplethMap,
        }
    }
}
