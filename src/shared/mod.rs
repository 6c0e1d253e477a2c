pub mod month;

pub use month::*;

/// Anything the backend hands out as an option record: a backend id, the
/// stable identifier user choices refer to, and a display name.
pub trait Identifiable {
    fn id(&self) -> &str;
    fn identifier(&self) -> &str;
    fn name(&self) -> &str;
}
