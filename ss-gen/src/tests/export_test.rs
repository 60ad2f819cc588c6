use std::fs;

use super::*;
use crate::errors::ExportError;
use crate::export::export_events;
use crate::simulation::generate;

#[rstest]
fn test_export_creates_directories(small_config: GeneratorConfig) {
    let records = generate(&small_config).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("data").join("synthetic_sessions.csv");

    export_events(&path, &records).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    let mut lines = contents.lines();
    assert_eq!(lines.next().unwrap(), EVENT_COLUMNS.join(","));
    assert_eq!(lines.count(), records.len());
}

#[rstest]
fn test_export_reads_back(small_config: GeneratorConfig) {
    let records = generate(&small_config).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("events.csv");
    export_events(&path, &records).unwrap();

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let read: Vec<EventRecord> = reader.deserialize().collect::<Result<_, _>>().unwrap();
    assert_eq!(read, records);
}

#[rstest]
fn test_export_bad_directory() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "not a directory").unwrap();
    let path = blocker.join("events.csv");

    let err = export_events(&path, &[]).unwrap_err();
    assert!(matches!(err.downcast_ref::<ExportError>(), Some(ExportError::CreateDir(p)) if *p == blocker));
    assert!(format!("{err:#}").contains(&blocker.display().to_string()));
}
