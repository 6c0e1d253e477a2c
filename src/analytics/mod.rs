use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::{io, sync::Arc};
use thiserror::Error;

mod daily;
mod share;
mod table;
pub use daily::*;
pub use share::*;
pub use table::*;

use crate::{
    choice::{AnalyticsQuantity, WeekSubset},
    options::ResolvedChoices,
    shared::{Identifiable, last_day_of_month},
};

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Selected transport mode {0} not found in data")]
    ModeNotInData(String),
}

/// Parameters of one analytics request. Both dates are inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsQuery {
    pub quantity: AnalyticsQuantity,
    pub area_type_id: Arc<str>,
    pub week_subset: WeekSubset,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub transport_modes: Vec<Arc<str>>,
}

impl AnalyticsQuery {
    /// The selected range is month based, so the query runs through the
    /// last day of the end month.
    pub fn from_resolved(resolved: &ResolvedChoices) -> Self {
        let (start_date, end) = resolved.date_range;
        Self {
            quantity: resolved.quantity,
            area_type_id: resolved.area_type.id.clone(),
            week_subset: resolved.week_subset,
            start_date,
            end_date: last_day_of_month(end).unwrap_or(end),
            transport_modes: resolved
                .transport_modes
                .iter()
                .map(|mode| mode.identifier().into())
                .collect(),
        }
    }
}

/// Anything that can answer an [`AnalyticsQuery`] with a table.
pub trait DataProvider {
    fn fetch(&self, query: &AnalyticsQuery) -> Result<AnalyticsTable, Error>;
}
