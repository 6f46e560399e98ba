//! Data cleaning for zone sensor tables.
//!
//! Three stages run in order, each taking ownership of the table and handing
//! back a new one:
//!
//! - [`ColumnNormalizer`] canonicalizes column names
//! - [`ValueSanitizer`] removes sentinels, empty and duplicate rows, parses
//!   timestamps and normalizes temperature units
//! - [`OutlierClipper`] clips numeric columns into their IQR fences
//!
//! [`CleaningPipeline`] chains them and records every change in a
//! [`CleaningReport`].

mod clip;
mod normalize;
mod pipeline;
mod report;
mod sanitize;
mod timestamp;

pub use clip::{ClipBounds, DEFAULT_IQR_MULTIPLIER, OutlierClipper};
pub use normalize::{ColumnNormalizer, normalize_name};
pub use pipeline::{CleanedTable, CleaningConfig, CleaningPipeline};
pub use report::{CleaningChange, CleaningReport, CleaningStep};
pub use sanitize::{
    DEFAULT_FAHRENHEIT_THRESHOLD, DEFAULT_SENTINEL, ValueSanitizer, fahrenheit_to_celsius,
};
pub use timestamp::parse_timestamp;
