//! Prompt templates and reply classification.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BiosphereError;
use crate::table::Table;
use crate::zone::Zone;

/// Rows of raw data included in a prompt by default.
pub const DEFAULT_SNAPSHOT_ROWS: usize = 10;

/// Hint lines keyed on exact column names.
const VARIABLE_HINTS: &[(&[&str], &str)] = &[
    (
        &["temp", "temperature"],
        "Temperature data is critical; consider diurnal patterns and verify unit conversion.",
    ),
    (
        &["rh", "relative_humidity"],
        "Relative humidity data influences evaporation and plant stress.",
    ),
    (&["ph"], "pH values help assess water quality in aquatic ecosystems."),
    (
        &["salinity"],
        "Salinity levels are important for marine or estuarine conditions.",
    ),
    (&["co2"], "CO2 data reflects carbon cycling and greenhouse gas dynamics."),
];

/// What kind of analysis to ask the model for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptKind {
    #[default]
    Descriptive,
    Analytical,
    Predictive,
    HypothesisGeneration,
}

impl PromptKind {
    pub const ALL: [PromptKind; 4] = [
        PromptKind::Descriptive,
        PromptKind::Analytical,
        PromptKind::Predictive,
        PromptKind::HypothesisGeneration,
    ];

    /// The instruction sentence placed before the data.
    pub fn instruction(&self) -> &'static str {
        match self {
            PromptKind::Descriptive => {
                "Describe the environmental conditions based on the following data."
            }
            PromptKind::Analytical => {
                "Analyze the following data for trends and anomalies. Propose possible explanations for any irregularities."
            }
            PromptKind::Predictive => {
                "Predict potential environmental changes based on the following data. Suggest interventions if the trends continue."
            }
            PromptKind::HypothesisGeneration => {
                "Generate at least three testable hypotheses regarding the relationships between key environmental variables based on the following data."
            }
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PromptKind::Descriptive => "descriptive",
            PromptKind::Analytical => "analytical",
            PromptKind::Predictive => "predictive",
            PromptKind::HypothesisGeneration => "hypothesis",
        }
    }
}

impl fmt::Display for PromptKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PromptKind {
    type Err = BiosphereError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "descriptive" => Ok(PromptKind::Descriptive),
            "analytical" => Ok(PromptKind::Analytical),
            "predictive" => Ok(PromptKind::Predictive),
            "hypothesis" | "hypothesis_generation" => Ok(PromptKind::HypothesisGeneration),
            other => Err(BiosphereError::Config(format!("Unknown prompt kind: {}", other))),
        }
    }
}

/// One-line description of each biome, used as prompt context.
pub fn zone_context(zone: Zone) -> &'static str {
    match zone {
        Zone::Ocean => {
            "The ocean biome is a 2.6 million-liter marine mesocosm used to study coral reef dynamics under controlled temperature, chemistry and light."
        }
        Zone::Desert => {
            "The desert biome is a coastal fog desert with seasonal rains, summer droughts and drought-tolerant plants."
        }
        Zone::Rainforest => {
            "The rainforest biome is a tropical forest modeled on the Amazon Basin, studied for plant-atmosphere gas exchange and water stress."
        }
        Zone::Leo => {
            "The Landscape Evolution Observatory tracks how water, soil, microbes and plants interact as landscapes evolve under changing climate."
        }
    }
}

/// List a dataset's variables, followed by one hint line per well-known variable.
pub fn dataset_context(table: &Table, dataset: &str) -> String {
    let names = table.column_names();
    let mut lines = vec![format!(
        "Dataset '{}' includes the following variables: {}.",
        dataset,
        names.join(", ")
    )];

    for (columns, hint) in VARIABLE_HINTS {
        if columns.iter().any(|c| names.contains(c)) {
            lines.push(hint.to_string());
        }
    }
    lines.join("\n")
}

/// Render the first `limit` rows as a right-aligned text grid under a header.
///
/// Missing cells render as `NaN`.
pub fn data_snapshot(table: &Table, limit: usize) -> String {
    let rows = table.row_count().min(limit);
    let mut grid: Vec<Vec<String>> = vec![table.column_names().iter().map(|n| n.to_string()).collect()];
    for row in 0..rows {
        grid.push(
            table
                .row(row)
                .into_iter()
                .map(|v| if v.is_missing() { "NaN".to_string() } else { v.to_string() })
                .collect(),
        );
    }

    let widths: Vec<usize> = (0..table.column_count())
        .map(|col| {
            grid.iter()
                .filter_map(|line| line.get(col))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    grid.iter()
        .map(|line| {
            line.iter()
                .zip(&widths)
                .map(|(cell, width)| format!("{:>width$}", cell, width = *width))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Build a prompt: instruction, dataset name, optional biome context, then
/// the summary text.
pub fn build_prompt(kind: PromptKind, dataset: &str, zone: Option<Zone>, summary: &str) -> String {
    let mut prompt = format!("{}\n\nDataset: {}\n", kind.instruction(), dataset);
    if let Some(zone) = zone {
        prompt.push_str(&format!("Zone: {}. {}\n", zone, zone_context(zone)));
    }
    prompt.push('\n');
    prompt.push_str(summary);
    prompt
}

/// How alarming a model reply reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Normal,
    Moderate,
    Severe,
}

impl Severity {
    /// Classify a reply by keyword, case-insensitively.
    pub fn classify(reply: &str) -> Severity {
        let lower = reply.to_lowercase();
        let has = |words: &[&str]| words.iter().any(|w| lower.contains(w));

        if has(&["urgent", "critical"]) {
            Severity::Severe
        } else if has(&["issue", "problem", "concern"]) {
            Severity::Moderate
        } else {
            Severity::Normal
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Severity::Normal => "normal",
            Severity::Moderate => "moderate",
            Severity::Severe => "severe",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
