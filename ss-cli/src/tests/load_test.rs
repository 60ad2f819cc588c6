use std::fs;

use super::*;
use crate::load::read_events;

#[rstest]
fn test_read_events(shuffled_events: Vec<EventRecord>) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("events.csv");
    write_events(&path, &shuffled_events);

    assert_eq!(read_events(&path).unwrap(), shuffled_events);
}

#[rstest]
fn test_read_events_missing_column() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("events.csv");
    fs::write(&path, "session_id,user_id,position\n1,1,1\n").unwrap();

    let err = read_events(&path).unwrap_err();
    assert!(err.to_string().contains("missing columns"), "{err}");
}

#[rstest]
fn test_read_events_bad_symbol(shuffled_events: Vec<EventRecord>) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("events.csv");
    let mut writer = csv::Writer::from_path(&path).unwrap();
    writer.serialize(&shuffled_events[0]).unwrap();
    writer.flush().unwrap();
    let contents = fs::read_to_string(&path).unwrap().replace("EU_UK", "ATLANTIS");
    fs::write(&path, contents).unwrap();

    assert!(read_events(&path).is_err());
}

#[rstest]
fn test_read_events_no_file() {
    let err = read_events(std::path::Path::new("/no/such/events.csv")).unwrap_err();
    assert!(err.to_string().contains("/no/such/events.csv"));
}
