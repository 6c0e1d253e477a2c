use std::{
    collections::{BTreeMap, HashMap, HashSet},
    io::Read,
    sync::Arc,
    time::Instant,
};

use chrono::NaiveDate;
use csv::Reader;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    analytics::{AnalyticsQuery, AnalyticsRow, AnalyticsTable, DataProvider, Error},
    choice::AnalyticsQuantity,
};

/// One line of a daily statistics file: the summed value of one mode in
/// one area on one day.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub area_id: String,
    pub mode: String,
    pub value: f64,
}

type SourceKey = (Arc<str>, AnalyticsQuantity);

/// In-memory provider over daily statistics, one source per area type
/// and quantity.
#[derive(Debug, Clone, Default)]
pub struct DailyStats {
    sources: HashMap<SourceKey, Box<[DailyRecord]>>,
}

impl DailyStats {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_records(
        mut self,
        area_type_id: &str,
        quantity: AnalyticsQuantity,
        records: Vec<DailyRecord>,
    ) -> Self {
        self.sources
            .insert((area_type_id.into(), quantity), records.into());
        self
    }

    /// Reads a `date,area_id,mode,value` CSV into the source for the given
    /// area type and quantity, replacing what was there.
    /// Returns the number of records read.
    pub fn load_csv<R: Read>(
        &mut self,
        area_type_id: &str,
        quantity: AnalyticsQuantity,
        reader: R,
    ) -> Result<usize, Error> {
        let now = Instant::now();
        let mut rdr = Reader::from_reader(reader);
        let mut records: Vec<DailyRecord> = Vec::new();
        for result in rdr.deserialize() {
            let record: DailyRecord = result?;
            records.push(record);
        }
        let count = records.len();
        self.sources
            .insert((area_type_id.into(), quantity), records.into());
        debug!(
            "Loaded {count} {quantity:?} records for area type {area_type_id} in {:?}",
            now.elapsed()
        );
        Ok(count)
    }

    pub fn has_source(&self, area_type_id: &str, quantity: AnalyticsQuantity) -> bool {
        self.sources.contains_key(&(area_type_id.into(), quantity))
    }
}

impl DataProvider for DailyStats {
    fn fetch(&self, query: &AnalyticsQuery) -> Result<AnalyticsTable, Error> {
        let records = self
            .sources
            .get(&(query.area_type_id.clone(), query.quantity))
            .ok_or_else(|| {
                Error::QueryFailed(format!(
                    "no {:?} data for area type {}",
                    query.quantity, query.area_type_id
                ))
            })?;
        Ok(aggregate(records, query))
    }
}

fn aggregate(records: &[DailyRecord], query: &AnalyticsQuery) -> AnalyticsTable {
    let now = Instant::now();
    let modes: HashSet<&str> = query.transport_modes.iter().map(|mode| &**mode).collect();

    let sums: HashMap<(&str, &str), f64> = records
        .par_iter()
        .filter(|record| {
            record.date >= query.start_date
                && record.date <= query.end_date
                && query.week_subset.includes(record.date)
                && modes.contains(record.mode.as_str())
        })
        .fold(HashMap::new, |mut acc, record| {
            *acc.entry((record.area_id.as_str(), record.mode.as_str()))
                .or_insert(0.0) += record.value;
            acc
        })
        .reduce(HashMap::new, |mut acc, other| {
            for (key, value) in other {
                *acc.entry(key).or_insert(0.0) += value;
            }
            acc
        });

    // Only modes that occur in the filtered data get a column
    let present: HashSet<&str> = sums.keys().map(|&(_, mode)| mode).collect();
    let columns: Vec<Arc<str>> = query
        .transport_modes
        .iter()
        .filter(|&mode| present.contains(&**mode))
        .cloned()
        .collect();

    let mut by_area: BTreeMap<&str, HashMap<&str, f64>> = BTreeMap::new();
    for (&(area_id, mode), &value) in sums.iter() {
        by_area.entry(area_id).or_default().insert(mode, value);
    }

    let rows: Vec<AnalyticsRow> = by_area
        .into_iter()
        .map(|(area_id, values)| {
            let total: f64 = values.values().sum();
            let mut absolute = HashMap::with_capacity(columns.len());
            let mut relative = HashMap::with_capacity(columns.len());
            for mode in columns.iter() {
                let value = values.get(&**mode).copied().unwrap_or_default();
                let share = if total > 0.0 { value / total } else { 0.0 };
                absolute.insert(mode.clone(), value);
                relative.insert(mode.clone(), share);
            }
            AnalyticsRow {
                area_id: area_id.into(),
                absolute,
                relative,
            }
        })
        .collect();

    debug!(
        "Aggregated {} records into {} rows in {:?}",
        records.len(),
        rows.len(),
        now.elapsed()
    );
    AnalyticsTable::new(columns, rows)
}
