use fitlogger::config::Config;
use fitlogger::models::input::WorkoutInput;

#[test]
fn test_partial_config_uses_defaults() {
    let cfg = Config::parse("database: /tmp/custom.db\n").unwrap();
    assert_eq!(cfg.database, "/tmp/custom.db");
    assert_eq!(cfg.default_duration, 30);
    assert!(!cfg.strict_not_found);
    assert_eq!(cfg.model, Config::model_file().to_string_lossy());
}

#[test]
fn test_tilde_is_expanded() {
    let cfg = Config::parse("database: ~/fit/workouts.db\nstrict_not_found: true\n").unwrap();
    assert!(!cfg.database.starts_with('~'));
    assert!(cfg.database.ends_with("workouts.db"));
    assert!(cfg.strict_not_found);
}

#[test]
fn test_invalid_config_is_an_error() {
    assert!(Config::parse("default_duration: [1, 2]\n").is_err());
}

#[test]
fn test_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("conf").join("fitlogger.conf");

    let cfg = Config {
        database: "/data/w.db".into(),
        model: "/data/m.json".into(),
        default_duration: 20,
        strict_not_found: true,
    };
    cfg.save_to(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded.database, "/data/w.db");
    assert_eq!(loaded.model, "/data/m.json");
    assert_eq!(loaded.default_duration, 20);
    assert!(loaded.strict_not_found);

    let missing = Config::load_from(&dir.path().join("nope.conf")).unwrap();
    assert_eq!(missing.default_duration, 30);
}

#[test]
fn test_input_validation() {
    assert_eq!(
        WorkoutInput::parse("Run", " 30 ", "250").unwrap(),
        WorkoutInput::new("Run", 30, 250)
    );
    assert!(WorkoutInput::parse("", "30", "250").is_err());
    assert!(WorkoutInput::parse("Run", "", "250").is_err());
    assert!(WorkoutInput::parse("Run", "30", "2.5").is_err());
    assert!(WorkoutInput::parse("Run", "x", "250").is_err());
}
