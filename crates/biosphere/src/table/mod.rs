//! Typed tabular data model.

mod column;
#[allow(clippy::module_inception)]
mod table;
mod types;

pub use column::Column;
pub use table::Table;
pub use types::{ColumnKind, TIMESTAMP_FORMAT, TemperatureUnit, Value, is_null_token};
