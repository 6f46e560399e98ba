//! Descriptive statistics, anomaly scans and correlation hypotheses.

mod anomaly;
mod correlation;
mod descriptive;
mod summary;

pub use anomaly::{Anomaly, AnomalyScanner, ColumnAnomalies, DEFAULT_Z_THRESHOLD};
pub use correlation::{DEFAULT_CORRELATION_THRESHOLD, Hypothesis, HypothesisGenerator};
pub use descriptive::{Moments, mean, pearson, quantile, quantile_sorted, sorted};
pub use summary::{SummaryRecord, SummaryReport, SummaryReporter, SummaryStyle, fmt_stat};
