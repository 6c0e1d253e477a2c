mod choices;
mod data;
mod options;
pub use choices::*;
pub use data::*;
pub use options::*;
