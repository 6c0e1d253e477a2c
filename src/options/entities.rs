use std::sync::Arc;

use crate::{
    choice::AnalyticsQuantity,
    options::{Catalog, GraphqlArea, GraphqlAreaType, GraphqlTransportMode},
    shared::Identifiable,
};

/// A single member of an area type, e.g. one municipality.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Area {
    /// Backend id. Analytics rows refer to areas by this id.
    pub id: Arc<str>,
    /// Official code of the area.
    pub identifier: Arc<str>,
    pub name: Arc<str>,
}

impl Identifiable for Area {
    fn id(&self) -> &str {
        &self.id
    }

    fn identifier(&self) -> &str {
        &self.identifier
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl From<GraphqlArea> for Area {
    fn from(value: GraphqlArea) -> Self {
        Self {
            id: value.id.into(),
            identifier: value.identifier.into(),
            name: value.name.into(),
        }
    }
}

/// A geographic partitioning scheme together with its areas and the
/// locations of its statistics.
#[derive(Debug, Default, Clone)]
pub struct AreaType {
    pub id: Arc<str>,
    pub identifier: Arc<str>,
    pub name: Arc<str>,
    pub topojson_url: Option<Arc<str>>,
    pub daily_trips_url: Option<Arc<str>>,
    pub daily_lengths_url: Option<Arc<str>>,
    pub areas: Catalog<Area>,
}

impl AreaType {
    /// Where the daily statistics for `quantity` can be downloaded.
    pub fn daily_url(&self, quantity: AnalyticsQuantity) -> Option<&str> {
        match quantity {
            AnalyticsQuantity::Lengths => self.daily_lengths_url.as_deref(),
            AnalyticsQuantity::Trips => self.daily_trips_url.as_deref(),
        }
    }
}

impl Identifiable for AreaType {
    fn id(&self) -> &str {
        &self.id
    }

    fn identifier(&self) -> &str {
        &self.identifier
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl From<GraphqlAreaType> for AreaType {
    fn from(value: GraphqlAreaType) -> Self {
        Self {
            id: value.id.into(),
            identifier: value.identifier.into(),
            name: value.name.into(),
            topojson_url: value.topojson_url.map(|val| val.into()),
            daily_trips_url: value.daily_trips_url.map(|val| val.into()),
            daily_lengths_url: value.daily_lengths_url.map(|val| val.into()),
            areas: value.areas.into_iter().map(Area::from).collect(),
        }
    }
}

/// A mode of travel such as car, bike or walk.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TransportMode {
    pub id: Arc<str>,
    pub identifier: Arc<str>,
    pub name: Arc<str>,
}

impl Identifiable for TransportMode {
    fn id(&self) -> &str {
        &self.id
    }

    fn identifier(&self) -> &str {
        &self.identifier
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl From<GraphqlTransportMode> for TransportMode {
    fn from(value: GraphqlTransportMode) -> Self {
        Self {
            id: value.id.into(),
            identifier: value.identifier.into(),
            name: value.name.into(),
        }
    }
}
