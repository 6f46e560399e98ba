//! Integration tests for folder loading and the dataset cache.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use tempfile::TempDir;

use biosphere::{Biosphere, DatasetCache, Zone, ZoneLoader};

fn write_file(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).expect("Failed to write test file");
}

/// A folder with two good zone files, one unreadable CSV and one non-CSV file.
fn create_zone_folder() -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    write_file(dir.path(), "ocean_ph.csv", "Timestamp,pH\n2023-01-01 00:00,8.1\n2023-01-01 01:00,8.0\n");
    write_file(dir.path(), "desert_soil.csv", "Soil Temp,Moisture\n95,0.12\n100,0.10\n");
    write_file(dir.path(), "leo_broken.csv", "");
    write_file(dir.path(), "notes.txt", "not data");
    dir
}

// =============================================================================
// Folder Loading
// =============================================================================

#[test]
fn test_load_folder_sorted_and_skips_bad_files() {
    let dir = create_zone_folder();

    let catalog = ZoneLoader::new().load_folder(dir.path()).unwrap();

    let names: Vec<&str> = catalog.names().collect();
    assert_eq!(names, vec!["desert_soil.csv", "ocean_ph.csv"]);
    assert_eq!(catalog.skipped.len(), 1);
    assert!(catalog.skipped[0].path.ends_with("leo_broken.csv"));
}

#[test]
fn test_zones_guessed_and_tables_cleaned() {
    let dir = create_zone_folder();

    let catalog = Biosphere::new().load_folder(dir.path()).unwrap();

    let desert = catalog.get("desert_soil.csv").unwrap();
    assert_eq!(desert.zone, Some(Zone::Desert));
    assert_eq!(desert.table.column_names(), vec!["soil_temp", "moisture"]);
    let temps = desert.table.columns[0].numbers();
    assert!((temps[0] - 35.0).abs() < 1e-9);

    let ocean = catalog.get("ocean_ph.csv").unwrap();
    assert_eq!(ocean.zone, Some(Zone::Ocean));
    assert!(ocean.table.columns[0].values[0].as_timestamp().is_some());
}

#[test]
fn test_navigation_over_loaded_folder() {
    let dir = create_zone_folder();
    let catalog = ZoneLoader::new().load_folder(dir.path()).unwrap();

    let (next, dataset) = catalog.next(1).unwrap();
    assert_eq!(next, 0);
    assert_eq!(dataset.name, "desert_soil.csv");

    let (prev, dataset) = catalog.previous(0).unwrap();
    assert_eq!(prev, 1);
    assert_eq!(dataset.name, "ocean_ph.csv");
}

#[test]
fn test_empty_folder_loads_nothing() {
    let dir = TempDir::new().unwrap();

    let catalog = ZoneLoader::new().load_folder(dir.path()).unwrap();

    assert!(catalog.is_empty());
    assert!(catalog.next(0).is_none());
}

#[test]
fn test_missing_folder_fails() {
    let result = ZoneLoader::new().load_folder("/nonexistent/zones");
    assert!(result.is_err());
}

// =============================================================================
// Dataset Cache
// =============================================================================

#[test]
fn test_cache_reuses_unchanged_folder() {
    let dir = create_zone_folder();
    let loader = ZoneLoader::new();
    let mut cache = DatasetCache::new();

    let first = cache.get_or_load(dir.path(), &loader).unwrap();
    let second = cache.get_or_load(dir.path(), &loader).unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(cache.len(), 1);
}

#[test]
fn test_cache_reloads_after_change() {
    let dir = create_zone_folder();
    let biosphere = Biosphere::new();
    let mut cache = DatasetCache::new();

    let first = biosphere.load_folder_cached(&mut cache, dir.path()).unwrap();
    assert_eq!(first.len(), 2);

    write_file(dir.path(), "rainforest_co2.csv", "CO2\n410\n415\n");
    let second = biosphere.load_folder_cached(&mut cache, dir.path()).unwrap();

    assert!(!Arc::ptr_eq(&first, &second));
    assert_eq!(second.len(), 3);
    assert_eq!(
        second.get("rainforest_co2.csv").and_then(|d| d.zone),
        Some(Zone::Rainforest)
    );
}

#[test]
fn test_cache_invalidate() {
    let dir = create_zone_folder();
    let loader = ZoneLoader::new();
    let mut cache = DatasetCache::new();

    let first = cache.get_or_load(dir.path(), &loader).unwrap();
    cache.invalidate(dir.path());
    assert!(cache.is_empty());

    let second = cache.get_or_load(dir.path(), &loader).unwrap();
    assert!(!Arc::ptr_eq(&first, &second));
}
