//! Biosphere: cleaning and analysis of Biosphere 2 zone sensor exports.
//!
//! Raw CSV exports from the ocean, desert, rainforest and LEO biomes carry
//! inconsistent column names, sentinel values, mixed temperature units,
//! unparsed timestamps and instrument spikes. Biosphere turns them into
//! typed, cleaned tables and reports descriptive statistics.
//!
//! # Pipeline
//!
//! - **Normalize**: trimmed, lowercase, underscore-joined column names
//! - **Sanitize**: sentinels to missing, empty and duplicate rows dropped,
//!   timestamps parsed, Fahrenheit converted to Celsius
//! - **Clip**: numeric values clamped to their IQR fences
//!
//! Every change is recorded in a [`CleaningReport`].
//!
//! # Example
//!
//! ```no_run
//! use biosphere::{Biosphere, SummaryStyle};
//!
//! let biosphere = Biosphere::new();
//! let dataset = biosphere.load_file("desert_soil.csv").unwrap();
//!
//! println!("Rows removed: {}", dataset.report.rows_removed());
//! println!("{}", biosphere.summarize(&dataset).render(SummaryStyle::Minimal));
//! ```

pub mod clean;
pub mod error;
pub mod input;
pub mod llm;
pub mod stats;
pub mod table;
pub mod zone;

mod biosphere;

pub use crate::biosphere::{AnalysisConfig, Biosphere, BiosphereConfig, ZoneAnswer};
pub use clean::{CleanedTable, CleaningConfig, CleaningPipeline, CleaningReport, CleaningStep};
pub use error::{BiosphereError, Result};
pub use input::{Parser, ParserConfig, SourceMetadata};
pub use llm::{LlmConfig, LlmProvider, MockProvider, OllamaProvider, PromptKind, Severity};
pub use stats::{SummaryRecord, SummaryReport, SummaryReporter, SummaryStyle};
pub use table::{Column, ColumnKind, Table, Value};
pub use zone::{DatasetCache, Zone, ZoneCatalog, ZoneDataset, ZoneLoader};
