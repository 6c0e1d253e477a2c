use std::{collections::HashMap, sync::Arc};

/// One area's values, keyed by transport mode identifier.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalyticsRow {
    pub area_id: Arc<str>,
    pub absolute: HashMap<Arc<str>, f64>,
    /// Share of the area total, between 0 and 1.
    pub relative: HashMap<Arc<str>, f64>,
}

impl AnalyticsRow {
    pub fn absolute(&self, mode: &str) -> f64 {
        self.absolute.get(mode).copied().unwrap_or_default()
    }

    pub fn relative(&self, mode: &str) -> f64 {
        self.relative.get(mode).copied().unwrap_or_default()
    }
}

/// Result of an analytics query: rows keyed by area id with an absolute and
/// a relative column per transport mode.
#[derive(Debug, Clone, Default)]
pub struct AnalyticsTable {
    modes: Box<[Arc<str>]>,
    rows: Box<[AnalyticsRow]>,
    row_lookup: HashMap<Arc<str>, usize>,
}

impl AnalyticsTable {
    pub fn new(modes: Vec<Arc<str>>, rows: Vec<AnalyticsRow>) -> Self {
        let row_lookup = rows
            .iter()
            .enumerate()
            .map(|(i, row)| (row.area_id.clone(), i))
            .collect();
        Self {
            modes: modes.into(),
            rows: rows.into(),
            row_lookup,
        }
    }

    /// Transport modes that have a column, in column order.
    pub fn modes(&self) -> &[Arc<str>] {
        &self.modes
    }

    pub fn rows(&self) -> &[AnalyticsRow] {
        &self.rows
    }

    pub fn row(&self, area_id: &str) -> Option<&AnalyticsRow> {
        let index = self.row_lookup.get(area_id)?;
        Some(&self.rows[*index])
    }

    pub fn has_mode(&self, mode: &str) -> bool {
        self.modes.iter().any(|val| val.as_ref() == mode)
    }

    /// Absolute values of a mode in row order.
    /// If the table has no column for the mode None is returned.
    pub fn column(&self, mode: &str) -> Option<Vec<f64>> {
        self.has_mode(mode)
            .then(|| self.rows.iter().map(|row| row.absolute(mode)).collect())
    }

    pub fn relative_column(&self, mode: &str) -> Option<Vec<f64>> {
        self.has_mode(mode)
            .then(|| self.rows.iter().map(|row| row.relative(mode)).collect())
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
