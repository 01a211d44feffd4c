use keytravel::api;
use keytravel::config::SearchParams;
use keytravel::error::KeyTravelError;
use keytravel::geometry::{Finger, KeyboardDefinition, Marker};
use std::fs;

// Shape written by the layout editor's "Save Layout" button
const SAVED_LAYOUT: &str = r#"{
  "markers": [
    { "x": 120, "y": 80 },
    { "x": 160, "y": 80 },
    { "x": 200.5, "y": 82 }
  ],
  "allowedCharacters": "abc",
  "markerFingers": {
    "0": "Left Middle",
    "2": "Thumbs"
  }
}"#;

#[test]
fn test_parses_saved_layout() {
    let def = KeyboardDefinition::from_json_str(SAVED_LAYOUT).expect("parse failed");

    assert_eq!(def.marker_count(), 3);
    assert_eq!(def.markers[2], Marker::new(200.5, 82.0));
    assert_eq!(def.allowed_characters, "abc");
    assert_eq!(def.finger_for(0), Finger::LeftMiddle);
    assert_eq!(def.finger_for(1), Finger::Unknown);
    assert_eq!(def.finger_for(2), Finger::Thumbs);
}

#[test]
fn test_missing_fields_default_to_empty() {
    let def = KeyboardDefinition::from_json_str("{}").unwrap();
    assert!(def.markers.is_empty());
    assert!(def.allowed_characters.is_empty());
    assert!(def.marker_fingers.is_empty());
}

#[test]
fn test_unknown_finger_label_is_an_error() {
    let json = r#"{ "markers": [], "markerFingers": { "0": "Left Toe" } }"#;
    let err = KeyboardDefinition::from_json_str(json).unwrap_err();
    assert!(matches!(err, KeyTravelError::Json(_)));
}

#[test]
fn test_file_round_trip() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("keyboard_layout.json");

    let def = KeyboardDefinition::from_json_str(SAVED_LAYOUT).unwrap();
    def.save_to_file(&path).unwrap();

    let raw = fs::read_to_string(&path).unwrap();
    assert!(raw.contains("\"allowedCharacters\""));
    assert!(raw.contains("\"markerFingers\""));
    assert!(raw.contains("\"Left Middle\""));

    let loaded = KeyboardDefinition::load_from_file(&path).unwrap();
    assert_eq!(loaded, def);
}

#[test]
fn test_missing_file_is_io_error() {
    let err = KeyboardDefinition::load_from_file("/definitely/not/here.json").unwrap_err();
    assert!(matches!(err, KeyTravelError::Io(_)));
}

#[test]
fn test_search_params_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("params.json");
    fs::write(&path, r#"{ "population_size": 12, "max_generations": 3 }"#).unwrap();

    let params = SearchParams::load_from_file(&path).unwrap();
    assert_eq!(params.population_size, 12);
    assert_eq!(params.max_generations, Some(3));
    assert_eq!(params.report_interval, 10);

    fs::write(&path, r#"{ "population_size": 0 }"#).unwrap();
    assert!(matches!(
        SearchParams::load_from_file(&path),
        Err(KeyTravelError::Config(_))
    ));
}

#[test]
fn test_saved_layout_drives_search() {
    let def = KeyboardDefinition::from_json_str(SAVED_LAYOUT).unwrap();
    let params = SearchParams {
        seed: Some(42),
        ..Default::default()
    };

    let best = api::optimize_once(&def, "  cab cab cab  \n", &params).unwrap();
    assert_eq!(best.layout().len(), 3);
    assert_eq!(best.layout()[0].finger, Finger::LeftMiddle);
    assert_eq!(best.layout()[2].finger, Finger::Thumbs);
}
