//! Integration tests for loading, cleaning and summarizing single files.

use std::io::Write;
use tempfile::NamedTempFile;

use biosphere::{
    Biosphere, BiosphereConfig, BiosphereError, CleaningConfig, CleaningStep, MockProvider,
    PromptKind, Severity, SummaryStyle, Value,
};

/// Helper to create a temporary file with given content.
fn create_test_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write to temp file");
    file
}

// =============================================================================
// Cleaning Scenarios
// =============================================================================

#[test]
fn test_sentinel_and_bad_date_row_is_dropped() {
    let file = create_test_file("Temp F,Date \n95,2023-01-01\n-9999,bad\n");

    let dataset = Biosphere::new().load_file(file.path()).unwrap();
    let table = &dataset.table;

    assert_eq!(table.column_names(), vec!["temp_f", "date"]);
    assert_eq!(table.row_count(), 1);
    assert_eq!(table.columns[0].values, vec![Value::Number(35.0)]);
    assert_eq!(
        table.columns[1].values[0].to_string(),
        "2023-01-01 00:00:00"
    );

    let report = &dataset.report;
    assert_eq!(report.rows_before, 2);
    assert_eq!(report.rows_after, 1);
    assert_eq!(report.total_for(CleaningStep::ReplaceSentinel), 1);
    assert_eq!(report.total_for(CleaningStep::ParseTimestamps), 1);
    assert_eq!(report.total_for(CleaningStep::ConvertTemperature), 1);
}

#[test]
fn test_outliers_are_clipped_to_fences() {
    let file = create_test_file("co2\n1\n2\n3\n4\n100\n");

    let dataset = Biosphere::new().load_file(file.path()).unwrap();

    assert_eq!(
        dataset.table.columns[0].numbers(),
        vec![1.0, 2.0, 3.0, 4.0, 7.0]
    );
    assert_eq!(dataset.report.total_for(CleaningStep::ClipOutliers), 1);
}

#[test]
fn test_duplicates_and_empty_rows_removed() {
    let file = create_test_file(
        "Zone,Humidity\n\
         desert,20\n\
         desert,20\n\
         ,\n\
         desert,21\n",
    );

    let dataset = Biosphere::new().load_file(file.path()).unwrap();

    assert_eq!(dataset.table.row_count(), 2);
    assert_eq!(dataset.report.total_for(CleaningStep::DropDuplicates), 1);
    assert_eq!(dataset.report.total_for(CleaningStep::DropEmptyRows), 1);
    assert_eq!(dataset.source.row_count, 4);
}

#[test]
fn test_celsius_column_left_alone() {
    let file = create_test_file("air_temp,rh\n21.5,40\n24.0,45\n22.1,50\n");

    let dataset = Biosphere::new().load_file(file.path()).unwrap();

    assert_eq!(dataset.table.columns[0].numbers(), vec![21.5, 24.0, 22.1]);
    assert_eq!(dataset.report.total_for(CleaningStep::ConvertTemperature), 0);
}

#[test]
fn test_tab_delimited_input() {
    let file = create_test_file("Soil Moisture\tTime\n0.31\t08:30\n0.29\t09:30\n");

    let dataset = Biosphere::new().load_file(file.path()).unwrap();

    assert_eq!(dataset.source.format, "tsv");
    assert_eq!(dataset.table.column_names(), vec!["soil_moisture", "time"]);
    assert!(matches!(dataset.table.columns[1].values[0], Value::Timestamp(_)));
}

#[test]
fn test_clipping_disabled_by_config() {
    let file = create_test_file("co2\n1\n2\n3\n4\n100\n");
    let config = BiosphereConfig::default().with_cleaning(CleaningConfig {
        clip_outliers: false,
        ..CleaningConfig::default()
    });

    let dataset = Biosphere::with_config(config).load_file(file.path()).unwrap();

    assert_eq!(dataset.table.columns[0].numbers()[4], 100.0);
}

// =============================================================================
// Error Cases
// =============================================================================

#[test]
fn test_name_collision_fails() {
    let file = create_test_file("Temp F,temp f\n1,2\n");

    let result = Biosphere::new().load_file(file.path());

    assert!(matches!(result, Err(BiosphereError::NameCollision { .. })));
}

#[test]
fn test_header_only_file_is_empty() {
    let file = create_test_file("co2,rh\n");

    let result = Biosphere::new().load_file(file.path());

    assert!(matches!(result, Err(BiosphereError::EmptyData(_))));
}

#[test]
fn test_missing_file_is_io_error() {
    let result = Biosphere::new().load_file("/nonexistent/zone.csv");

    assert!(matches!(result, Err(BiosphereError::Io { .. })));
}

// =============================================================================
// Summary and Analysis
// =============================================================================

#[test]
fn test_all_missing_column_summary() {
    let file = create_test_file("co2,rh\n400,NA\n410,\n420,-9999\n");

    let biosphere = Biosphere::new();
    let dataset = biosphere.load_file(file.path()).unwrap();
    let summary = biosphere.summarize(&dataset);

    let rh = summary.record("rh").unwrap();
    assert_eq!(rh.count, 0);
    assert_eq!(rh.mean, None);
    assert_eq!(rh.std, None);

    let text = summary.render(SummaryStyle::Minimal);
    assert!(text.starts_with("Descriptive Analysis for "));
    assert!(text.contains("rh: min=undefined, max=undefined, mean=undefined, std=undefined"));
    assert!(text.contains("co2: min=400.00, max=420.00, mean=410.00, std=10.00"));
}

#[test]
fn test_summary_json_uses_null_for_undefined() {
    let file = create_test_file("ph\n8.1\n");

    let biosphere = Biosphere::new();
    let dataset = biosphere.load_file(file.path()).unwrap();
    let json = serde_json::to_value(biosphere.summarize(&dataset)).unwrap();

    assert_eq!(json["records"][0]["name"], "ph");
    assert_eq!(json["records"][0]["count"], 1);
    assert!(json["records"][0]["std"].is_null());
}

#[test]
fn test_hypotheses_from_file() {
    let file = create_test_file(
        "light,air_temp,humidity\n\
         100,20,80\n\
         200,22,70\n\
         300,25,62\n\
         400,27,51\n\
         500,30,45\n",
    );

    let biosphere = Biosphere::new();
    let dataset = biosphere.load_file(file.path()).unwrap();
    let hypotheses = biosphere.hypotheses(&dataset);

    assert_eq!(hypotheses.len(), 3);
    assert!(hypotheses.iter().any(|h| h.first == "light" && h.second == "humidity" && !h.is_positive()));
}

#[test]
fn test_ask_with_mock_provider() {
    let file = create_test_file("ocean_ph\n8.0\n8.1\n8.2\n");

    let biosphere = Biosphere::new().with_llm(MockProvider::with_reply("No concern at this time."));
    let dataset = biosphere.load_file(file.path()).unwrap();
    let answer = biosphere.ask(&dataset, PromptKind::Analytical).unwrap();

    assert_eq!(answer.kind, PromptKind::Analytical);
    assert_eq!(answer.severity, Severity::Moderate);
    assert!(answer.prompt.contains("Analytical Analysis for "));
    assert!(answer.prompt.contains("ocean_ph: min=8.00"));
}

#[test]
fn test_ask_prompt_carries_bounded_snapshot() {
    let mut content = String::from("Timestamp,CO2\n");
    for i in 0..30 {
        content.push_str(&format!("2023-01-01 {:02}:00,{}\n", i % 24, 400 + i));
    }
    let file = create_test_file(&content);

    let biosphere = Biosphere::new().with_llm(MockProvider::with_reply("Stable."));
    let dataset = biosphere.load_file(file.path()).unwrap();
    let answer = biosphere.ask(&dataset, PromptKind::Descriptive).unwrap();

    assert!(answer.prompt.contains("includes the following variables: timestamp, co2."));
    assert!(answer.prompt.contains("CO2 data reflects carbon cycling"));

    let snapshot = answer.prompt.split("Data Snapshot:\n").nth(1).unwrap();
    assert_eq!(snapshot.lines().count(), 11);
    assert!(snapshot.lines().last().unwrap().ends_with("409"));
}
