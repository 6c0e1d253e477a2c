mod action;
mod choices;
mod options;
mod table;
pub use action::*;
pub use choices::*;
pub use options::*;
pub use table::*;
