//! Main Biosphere struct and public API.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::clean::{CleanedTable, CleaningConfig};
use crate::error::{BiosphereError, Result};
use crate::input::ParserConfig;
use crate::llm::{
    DEFAULT_SNAPSHOT_ROWS, LlmConfig, LlmProvider, PromptKind, Severity, build_prompt,
    data_snapshot, dataset_context,
};
use crate::stats::{
    AnomalyScanner, ColumnAnomalies, DEFAULT_CORRELATION_THRESHOLD, DEFAULT_Z_THRESHOLD,
    Hypothesis, HypothesisGenerator, SummaryReport, SummaryReporter, SummaryStyle,
};
use crate::table::Table;
use crate::zone::{DatasetCache, ZoneCatalog, ZoneDataset, ZoneLoader};

/// Thresholds for the analysis passes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// |z| above which a value is an anomaly.
    pub z_threshold: f64,
    /// |r| at or above which a column pair becomes a hypothesis.
    pub correlation_threshold: f64,
    /// Summary layout used in prompts and default rendering.
    pub summary_style: SummaryStyle,
    /// Leading rows of data shown to the model.
    pub snapshot_rows: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            z_threshold: DEFAULT_Z_THRESHOLD,
            correlation_threshold: DEFAULT_CORRELATION_THRESHOLD,
            summary_style: SummaryStyle::Minimal,
            snapshot_rows: DEFAULT_SNAPSHOT_ROWS,
        }
    }
}

/// Configuration for Biosphere.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BiosphereConfig {
    pub parser: ParserConfig,
    pub cleaning: CleaningConfig,
    pub analysis: AnalysisConfig,
    pub llm: LlmConfig,
}

impl BiosphereConfig {
    /// Load configuration from a JSON file. Missing fields take defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| BiosphereError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        serde_json::from_str(&text).map_err(|e| {
            BiosphereError::Config(format!("Invalid config file '{}': {}", path.display(), e))
        })
    }

    pub fn with_cleaning(mut self, cleaning: CleaningConfig) -> Self {
        self.cleaning = cleaning;
        self
    }

    pub fn with_analysis(mut self, analysis: AnalysisConfig) -> Self {
        self.analysis = analysis;
        self
    }

    pub fn with_llm(mut self, llm: LlmConfig) -> Self {
        self.llm = llm;
        self
    }
}

/// A model reply about one dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneAnswer {
    pub dataset: String,
    pub kind: PromptKind,
    pub prompt: String,
    pub reply: String,
    pub severity: Severity,
}

/// The main Biosphere engine: loads, cleans and analyzes zone datasets.
pub struct Biosphere {
    config: BiosphereConfig,
    loader: ZoneLoader,
    reporter: SummaryReporter,
    scanner: AnomalyScanner,
    hypotheses: HypothesisGenerator,
    llm_provider: Option<Arc<dyn LlmProvider>>,
}

impl Biosphere {
    /// Create a new instance with default configuration.
    pub fn new() -> Self {
        Self::with_config(BiosphereConfig::default())
    }

    /// Create an instance with custom configuration.
    pub fn with_config(config: BiosphereConfig) -> Self {
        let loader = ZoneLoader::with_config(config.parser.clone(), &config.cleaning);
        let scanner = AnomalyScanner::with_threshold(config.analysis.z_threshold);
        let hypotheses = HypothesisGenerator::with_threshold(config.analysis.correlation_threshold);

        Self {
            config,
            loader,
            reporter: SummaryReporter::new(),
            scanner,
            hypotheses,
            llm_provider: None,
        }
    }

    /// Add an LLM provider for [`Biosphere::ask`].
    pub fn with_llm(mut self, provider: impl LlmProvider + 'static) -> Self {
        self.llm_provider = Some(Arc::new(provider));
        self
    }

    pub fn config(&self) -> &BiosphereConfig {
        &self.config
    }

    pub fn has_llm(&self) -> bool {
        self.llm_provider.is_some()
    }

    /// Parse and clean one file.
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<ZoneDataset> {
        self.loader.load_file(path)
    }

    /// Parse and clean every CSV file in a folder.
    pub fn load_folder(&self, dir: impl AsRef<Path>) -> Result<ZoneCatalog> {
        self.loader.load_folder(dir)
    }

    /// Like [`Biosphere::load_folder`], reusing `cache` while the folder is unchanged.
    pub fn load_folder_cached(
        &self,
        cache: &mut DatasetCache,
        dir: impl AsRef<Path>,
    ) -> Result<Arc<ZoneCatalog>> {
        cache.get_or_load(dir, &self.loader)
    }

    /// Clean an in-memory table.
    pub fn clean_table(&self, table: Table) -> Result<CleanedTable> {
        self.loader.pipeline().run(table)
    }

    pub fn summarize(&self, dataset: &ZoneDataset) -> SummaryReport {
        self.reporter.summarize(dataset.name.clone(), &dataset.table)
    }

    pub fn scan_anomalies(&self, dataset: &ZoneDataset) -> Vec<ColumnAnomalies> {
        self.scanner.scan(&dataset.table)
    }

    pub fn hypotheses(&self, dataset: &ZoneDataset) -> Vec<Hypothesis> {
        self.hypotheses.generate(&dataset.table)
    }

    /// The text handed to the model for a prompt kind: variable context, the
    /// kind's analysis, then a snapshot of the leading rows.
    pub fn analysis_text(&self, dataset: &ZoneDataset, kind: PromptKind) -> String {
        format!(
            "{}\n\n{}\n\nData Snapshot:\n{}",
            dataset_context(&dataset.table, &dataset.name),
            self.kind_analysis(dataset, kind),
            data_snapshot(&dataset.table, self.config.analysis.snapshot_rows)
        )
    }

    fn kind_analysis(&self, dataset: &ZoneDataset, kind: PromptKind) -> String {
        let summary = self.summarize(dataset);
        match kind {
            PromptKind::Descriptive => summary.render(self.config.analysis.summary_style),
            PromptKind::Predictive => summary.render(SummaryStyle::Extended),
            PromptKind::Analytical => format!(
                "{}\n\n{}",
                summary.render(self.config.analysis.summary_style),
                AnomalyScanner::render(&dataset.name, &self.scan_anomalies(dataset))
            ),
            PromptKind::HypothesisGeneration => format!(
                "{}\n\n{}",
                summary.render(self.config.analysis.summary_style),
                self.hypotheses.render(&dataset.table)
            ),
        }
    }

    /// Ask the configured model about a dataset and classify the reply.
    pub fn ask(&self, dataset: &ZoneDataset, kind: PromptKind) -> Result<ZoneAnswer> {
        let llm = self
            .llm_provider
            .as_ref()
            .ok_or_else(|| BiosphereError::Config("No LLM provider configured".to_string()))?;

        let prompt = build_prompt(
            kind,
            &dataset.name,
            dataset.zone,
            &self.analysis_text(dataset, kind),
        );
        debug!(provider = llm.name(), dataset = %dataset.name, %kind, "asking model");

        let reply = llm.generate(&prompt)?;
        let severity = Severity::classify(&reply);

        Ok(ZoneAnswer {
            dataset: dataset.name.clone(),
            kind,
            prompt,
            reply,
            severity,
        })
    }
}

impl Default for Biosphere {
    fn default() -> Self {
        Self::new()
    }
}
