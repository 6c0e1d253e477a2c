use serde::{Deserialize, Serialize};

/// The query the option lists are fetched with.
pub const OPTIONS_QUERY: &str = r#"
query getAreas {
  analytics {
    areaTypes {
      id
      identifier
      name
      topojsonUrl
      dailyTripsUrl
      dailyLengthsUrl
      areas {
        id
        identifier
        name
      }
    }
  }
  transportModes {
    id
    identifier
    name
  }
}
"#;

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GraphqlOptions {
    pub analytics: GraphqlAnalytics,
    pub transport_modes: Vec<GraphqlTransportMode>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GraphqlAnalytics {
    pub area_types: Vec<GraphqlAreaType>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GraphqlAreaType {
    pub id: String,
    pub identifier: String,
    pub name: String,
    pub topojson_url: Option<String>,
    pub daily_trips_url: Option<String>,
    pub daily_lengths_url: Option<String>,
    #[serde(default)]
    pub areas: Vec<GraphqlArea>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GraphqlArea {
    pub id: String,
    pub identifier: String,
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GraphqlTransportMode {
    pub id: String,
    pub identifier: String,
    pub name: String,
}
