use std::io::Write;

use assertables::*;

use super::*;
use crate::errors::ConfigError;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[rstest]
fn test_default_config_is_the_reference_run() {
    let config = GeneratorConfig::default();
    assert_eq!(config.seed, 42);
    assert_eq!((config.n_users, config.n_tracks, config.n_sessions), (2000, 5000, 20000));
    assert_eq!(config.output_path, std::path::Path::new("data/synthetic_sessions.csv"));
    assert_ok!(config.validate());
}

#[rstest]
#[case::users(GeneratorConfig { n_users: 0, ..Default::default() }, "n_users")]
#[case::tracks(GeneratorConfig { n_tracks: 0, ..Default::default() }, "n_tracks")]
#[case::sessions(GeneratorConfig { n_sessions: 0, ..Default::default() }, "n_sessions")]
fn test_zero_count_rejected(#[case] config: GeneratorConfig, #[case] field: &str) {
    let err = config.validate().unwrap_err();
    assert!(matches!(err.downcast_ref::<ConfigError>(), Some(ConfigError::InvalidCount(f)) if f == field));
}

#[rstest]
#[case::short_sum(&[(DayType::Weekday, 0.7), (DayType::Weekend, 0.2)], "sum to")]
#[case::missing_symbol(&[(DayType::Weekday, 1.0)], "no weight given for Weekend")]
#[case::negative(&[(DayType::Weekday, 1.5), (DayType::Weekend, -0.5)], "non-negative")]
#[case::nan(&[(DayType::Weekday, f64::NAN), (DayType::Weekend, 1.0)], "non-negative")]
fn test_malformed_weights_rejected(#[case] pairs: &[(DayType, f64)], #[case] reason: &str) {
    let mut config = GeneratorConfig::default();
    config.weights.day_type = pairs.iter().copied().collect();

    let err = config.validate().unwrap_err();
    let Some(ConfigError::MalformedWeights(msg)) = err.downcast_ref::<ConfigError>() else {
        panic!("unexpected error: {err:?}");
    };
    assert_starts_with!(msg.as_str(), "day_type: ");
    assert_contains!(msg.as_str(), reason);
}

#[rstest]
fn test_load_partial_yaml() {
    let file = write_config(
        r#"
seed: 7
n_users: 10
output_path: out/events.csv
weights:
  day_type:
    weekday: 0.5
    weekend: 0.5
  age_group:
    "13-17": 0.2
    "18-24": 0.2
    "25-34": 0.2
    "35-44": 0.2
    "45+": 0.2
"#,
    );

    let config = GeneratorConfig::load(file.path()).unwrap();
    let defaults = GeneratorConfig::default();
    assert_eq!(config.seed, 7);
    assert_eq!(config.n_users, 10);
    assert_eq!(config.n_tracks, defaults.n_tracks);
    assert_eq!(config.output_path, std::path::Path::new("out/events.csv"));
    assert_eq!(config.weights.day_type[&DayType::Weekend], 0.5);
    assert_eq!(config.weights.age_group[&AgeGroup::Senior], 0.2);
    assert_eq!(config.weights.genre, defaults.weights.genre);
    assert_ok!(config.validate());
}

#[rstest]
#[case::unknown_field("n_artists: 5\n")]
#[case::unknown_symbol("weights:\n  day_type:\n    holiday: 1.0\n")]
fn test_load_rejects_bad_yaml(#[case] contents: &str) {
    let file = write_config(contents);
    assert_err!(GeneratorConfig::load(file.path()));
}

#[rstest]
fn test_load_missing_file() {
    let err = GeneratorConfig::load(std::path::Path::new("/definitely/not/here.yaml")).unwrap_err();
    assert_contains!(err.to_string(), "/definitely/not/here.yaml");
}
