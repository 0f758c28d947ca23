use std::fs;
use std::path::Path;

use qpp_measures::hash::sha256_hex;
use qpp_measures::{MeasuresError, load_measure_configs, parse_measure_configs};

const SAMPLE: &str = r#"[
  {
    "electronicMeasureVerUuid": "40280381-51F0-825B-0152-22B98CFF181A",
    "measureId": "236",
    "title": "Controlling High Blood Pressure",
    "subPopulation": [
      {
        "denominatorUuid": "D1",
        "numeratorUuid": "N1",
        "initialPopulationUuid": "I1"
      }
    ]
  },
  {
    "measureId": "999",
    "title": "No eCQM GUID"
  }
]"#;

#[test]
fn loads_file_and_fingerprints_contents() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("measures-data.json");
    fs::write(&path, SAMPLE).unwrap();

    let loaded = load_measure_configs(&path).expect("load measures");
    assert_eq!(loaded.configs.len(), 1);
    assert_eq!(loaded.source, path);
    assert_eq!(loaded.sha256, sha256_hex(SAMPLE.as_bytes()));

    let config = loaded
        .configs
        .get("40280381-51F0-825B-0152-22B98CFF181A")
        .expect("configured measure");
    assert_eq!(config.measure_id.as_deref(), Some("236"));
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_measure_configs(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, MeasuresError::Io { .. }));
}

#[test]
fn malformed_json_is_reported_with_path() {
    let err = parse_measure_configs(b"{not json", Path::new("bad.json")).unwrap_err();
    assert!(matches!(err, MeasuresError::Json { .. }));
    assert!(err.to_string().contains("bad.json"));
}

#[test]
fn duplicate_guid_is_rejected() {
    let json = br#"[
        {"electronicMeasureVerUuid": "G"},
        {"electronicMeasureVerUuid": "G"}
    ]"#;
    let err = parse_measure_configs(json, Path::new("dup.json")).unwrap_err();
    assert!(matches!(err, MeasuresError::Invalid { .. }));
}

#[test]
fn bundled_configuration_parses() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../config/measures-data.json");
    let loaded = load_measure_configs(&path).expect("load bundled measures");
    assert!(!loaded.configs.is_empty());
}
