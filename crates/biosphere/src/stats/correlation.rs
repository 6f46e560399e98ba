//! Rule-based hypotheses from strong pairwise correlations.

use serde::{Deserialize, Serialize};

use crate::table::{Column, Table, Value};

use super::descriptive::pearson;

/// Default |r| at or above which a pair becomes a hypothesis.
pub const DEFAULT_CORRELATION_THRESHOLD: f64 = 0.7;

/// A strongly correlated column pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hypothesis {
    pub first: String,
    pub second: String,
    pub correlation: f64,
}

impl Hypothesis {
    pub fn is_positive(&self) -> bool {
        self.correlation > 0.0
    }

    pub fn sentence(&self) -> String {
        let direction = if self.is_positive() { "positively" } else { "negatively" };
        format!(
            "Hypothesis: {} is {} correlated with {} (correlation = {:.2}).",
            self.first, direction, self.second, self.correlation
        )
    }
}

/// Pairs of numeric columns, over rows where both are present.
fn paired(a: &Column, b: &Column) -> (Vec<f64>, Vec<f64>) {
    a.values
        .iter()
        .zip(&b.values)
        .filter_map(|(x, y)| match (x, y) {
            (Value::Number(x), Value::Number(y)) => Some((*x, *y)),
            _ => None,
        })
        .unzip()
}

/// Finds column pairs whose Pearson correlation clears a threshold.
#[derive(Debug, Clone)]
pub struct HypothesisGenerator {
    threshold: f64,
}

impl HypothesisGenerator {
    pub fn new() -> Self {
        Self {
            threshold: DEFAULT_CORRELATION_THRESHOLD,
        }
    }

    pub fn with_threshold(threshold: f64) -> Self {
        Self { threshold }
    }

    /// Every unordered numeric pair with |r| ≥ threshold, in column order.
    pub fn generate(&self, table: &Table) -> Vec<Hypothesis> {
        let numeric: Vec<&Column> = table
            .columns
            .iter()
            .filter(|c| c.kind().is_numeric() && c.non_missing_count() > 0)
            .collect();

        let mut hypotheses = Vec::new();
        for (i, a) in numeric.iter().enumerate() {
            for b in &numeric[i + 1..] {
                let (xs, ys) = paired(a, b);
                let Some(r) = pearson(&xs, &ys) else { continue };
                if r.abs() >= self.threshold {
                    hypotheses.push(Hypothesis {
                        first: a.name.clone(),
                        second: b.name.clone(),
                        correlation: r,
                    });
                }
            }
        }
        hypotheses
    }

    /// Generate and render as text.
    pub fn render(&self, table: &Table) -> String {
        let has_numeric = table
            .columns
            .iter()
            .any(|c| c.kind().is_numeric() && c.non_missing_count() > 0);
        if !has_numeric {
            return "No numeric data available for hypothesis generation.".to_string();
        }

        let hypotheses = self.generate(table);
        if hypotheses.is_empty() {
            return "No strong correlations detected to form hypotheses.".to_string();
        }

        hypotheses
            .iter()
            .map(Hypothesis::sentence)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for HypothesisGenerator {
    fn default() -> Self {
        Self::new()
    }
}
