use std::{collections::HashMap, sync::Arc};

use chrono::NaiveDate;
use tracing::{debug, warn};

mod entities;
mod models;
pub use entities::*;
pub use models::*;

use crate::{
    choice::{
        AnalyticsQuantity, UserChoiceState, VisualisationKind, WeekSubset, select_visualisation,
    },
    shared::Identifiable,
};

type IdToIndex = HashMap<Arc<str>, usize>;

/// Read-only option list with lookups by identifier and by backend id.
/// When identifiers repeat, the first entry wins.
#[derive(Debug, Clone)]
pub struct Catalog<T> {
    entries: Box<[T]>,
    identifier_lookup: IdToIndex,
    id_lookup: IdToIndex,
}

impl<T> Default for Catalog<T> {
    fn default() -> Self {
        Self {
            entries: Box::new([]),
            identifier_lookup: HashMap::new(),
            id_lookup: HashMap::new(),
        }
    }
}

impl<T: Identifiable> Catalog<T> {
    pub fn new(entries: Vec<T>) -> Self {
        let mut identifier_lookup: IdToIndex = HashMap::new();
        let mut id_lookup: IdToIndex = HashMap::new();
        for (i, entry) in entries.iter().enumerate() {
            if identifier_lookup.contains_key(entry.identifier()) {
                warn!("Duplicate identifier {} in option list", entry.identifier());
            } else {
                identifier_lookup.insert(entry.identifier().into(), i);
            }
            id_lookup.entry(entry.id().into()).or_insert(i);
        }
        Self {
            entries: entries.into(),
            identifier_lookup,
            id_lookup,
        }
    }

    /// Get the entry with the given identifier.
    /// If no entry is found None is returned.
    pub fn get(&self, identifier: &str) -> Option<&T> {
        let index = self.identifier_lookup.get(identifier)?;
        Some(&self.entries[*index])
    }

    /// Get the entry with the given backend id.
    pub fn get_by_id(&self, id: &str) -> Option<&T> {
        let index = self.id_lookup.get(id)?;
        Some(&self.entries[*index])
    }
}

impl<T> Catalog<T> {
    pub fn first(&self) -> Option<&T> {
        self.entries.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: Identifiable> FromIterator<T> for Catalog<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a Catalog<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// The option lists fetched once at startup.
#[derive(Debug, Clone, Default)]
pub struct OptionLists {
    pub area_types: Catalog<AreaType>,
    pub transport_modes: Catalog<TransportMode>,
}

impl From<GraphqlOptions> for OptionLists {
    fn from(value: GraphqlOptions) -> Self {
        let area_types: Catalog<AreaType> = value
            .analytics
            .area_types
            .into_iter()
            .map(AreaType::from)
            .collect();
        let transport_modes: Catalog<TransportMode> = value
            .transport_modes
            .into_iter()
            .map(TransportMode::from)
            .collect();
        debug!(
            "Loaded {} area types and {} transport modes",
            area_types.len(),
            transport_modes.len()
        );
        Self {
            area_types,
            transport_modes,
        }
    }
}

/// Looks up the selected area type. None means "not ready": the list has
/// not arrived yet, nothing is selected, or the selection is stale.
pub fn resolve_area_type<'a>(
    state: &UserChoiceState,
    area_types: &'a Catalog<AreaType>,
) -> Option<&'a AreaType> {
    area_types.get(state.area_type.as_deref()?)
}

/// Same contract as [`resolve_area_type`], keyed on the transport mode.
pub fn resolve_transport_mode<'a>(
    state: &UserChoiceState,
    transport_modes: &'a Catalog<TransportMode>,
) -> Option<&'a TransportMode> {
    transport_modes.get(state.transport_mode.as_deref()?)
}

/// Every user choice matched against the live option lists.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedChoices<'a> {
    pub area_type: &'a AreaType,
    pub transport_mode: &'a TransportMode,
    pub transport_modes: &'a Catalog<TransportMode>,
    pub quantity: AnalyticsQuantity,
    pub week_subset: WeekSubset,
    pub date_range: (NaiveDate, NaiveDate),
    pub visualisation: VisualisationKind,
}

/// Resolves all parameters at once. None as soon as any one is not ready.
pub fn resolve<'a>(state: &UserChoiceState, options: &'a OptionLists) -> Option<ResolvedChoices<'a>> {
    Some(ResolvedChoices {
        area_type: resolve_area_type(state, &options.area_types)?,
        transport_mode: resolve_transport_mode(state, &options.transport_modes)?,
        transport_modes: &options.transport_modes,
        quantity: state.analytics_quantity?,
        week_subset: state.week_subset,
        date_range: state.date_range.range,
        visualisation: select_visualisation(state),
    })
}
