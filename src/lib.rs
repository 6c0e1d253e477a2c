pub mod analytics;
pub mod choice;
pub mod options;
pub mod shared;

pub mod prelude {
    pub use crate::analytics::{
        AnalyticsQuery, AnalyticsRow, AnalyticsTable, AreaShare, DailyRecord, DailyStats,
        DataProvider, ModeShare,
    };
    pub use crate::choice::{
        Action, AnalyticsQuantity, Field, FieldValue, UserChoiceController, UserChoiceState,
        Visualisation, VisualisationKind, WeekSubset, date_range::DateRange,
        select_visualisation,
    };
    pub use crate::options::{
        Area, AreaType, Catalog, OptionLists, ResolvedChoices, TransportMode, resolve,
        resolve_area_type, resolve_transport_mode,
    };
    pub use crate::shared::Identifiable;
}
