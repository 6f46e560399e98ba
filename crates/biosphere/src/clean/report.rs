//! Record of what a cleaning run changed.

use serde::{Deserialize, Serialize};

/// A cleaning step that can change a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CleaningStep {
    NormalizeNames,
    ReplaceSentinel,
    DropEmptyRows,
    ParseTimestamps,
    ConvertTemperature,
    DropDuplicates,
    ClipOutliers,
}

impl CleaningStep {
    /// Short human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            CleaningStep::NormalizeNames => "normalize names",
            CleaningStep::ReplaceSentinel => "replace sentinel",
            CleaningStep::DropEmptyRows => "drop empty rows",
            CleaningStep::ParseTimestamps => "parse timestamps",
            CleaningStep::ConvertTemperature => "convert temperature",
            CleaningStep::DropDuplicates => "drop duplicates",
            CleaningStep::ClipOutliers => "clip outliers",
        }
    }
}

/// A single change made during cleaning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleaningChange {
    /// Step that made the change.
    pub step: CleaningStep,

    /// Column affected (None for row-level steps).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<String>,

    /// Number of values (or rows, for row-level steps) changed.
    pub values_changed: usize,

    /// Description of the change.
    pub description: String,
}

/// Result of running the cleaning pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CleaningReport {
    /// Rows in the input table.
    pub rows_before: usize,

    /// Rows in the cleaned table.
    pub rows_after: usize,

    /// Detailed changes in the order they were made.
    pub changes: Vec<CleaningChange>,
}

impl CleaningReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a change to the report. Changes that touched nothing are not recorded.
    pub fn record(
        &mut self,
        step: CleaningStep,
        column: Option<&str>,
        values_changed: usize,
        description: impl Into<String>,
    ) {
        if values_changed == 0 {
            return;
        }
        let description = description.into();
        tracing::debug!(step = step.label(), column, values_changed, "{}", description);
        self.changes.push(CleaningChange {
            step,
            column: column.map(str::to_string),
            values_changed,
            description,
        });
    }

    /// Changes made by a particular step.
    pub fn changes_for(&self, step: CleaningStep) -> impl Iterator<Item = &CleaningChange> {
        self.changes.iter().filter(move |c| c.step == step)
    }

    /// Total values/rows changed by a particular step.
    pub fn total_for(&self, step: CleaningStep) -> usize {
        self.changes_for(step).map(|c| c.values_changed).sum()
    }

    /// Rows removed over the whole run.
    pub fn rows_removed(&self) -> usize {
        self.rows_before.saturating_sub(self.rows_after)
    }
}
