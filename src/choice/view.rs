use serde::{Deserialize, Serialize};

use crate::choice::{AnalyticsQuantity, UserChoiceState, Visualisation};

/// The concrete view the presentation layer should draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisualisationKind {
    Map,
    Table,
    /// Origin-destination matrix.
    Matrix,
    /// Nothing to draw for this combination.
    None,
}

/// Trip counts have no map rendering, so a map request for trips yields
/// `None` and the caller shows a hint instead of a view. An unset quantity
/// also yields `None`.
pub fn select_visualisation(state: &UserChoiceState) -> VisualisationKind {
    match (state.visualisation, state.analytics_quantity) {
        (Visualisation::ChoroplethMap, Some(AnalyticsQuantity::Lengths)) => VisualisationKind::Map,
        (Visualisation::Table, Some(AnalyticsQuantity::Lengths)) => VisualisationKind::Table,
        (Visualisation::Table, Some(AnalyticsQuantity::Trips)) => VisualisationKind::Matrix,
        (Visualisation::ChoroplethMap, Some(AnalyticsQuantity::Trips)) | (_, None) => {
            VisualisationKind::None
        }
    }
}
