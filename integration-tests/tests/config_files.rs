use rootfind::{Config, ConfigError};

#[test]
fn reads_config_from_toml() {
    let config: Config = toml::from_str("tolerance = 1e-9\nmax_iters = 25\n").expect("valid toml");
    assert_eq!(config, Config::new(1e-9, 25).expect("valid config"));
}

#[test]
fn missing_fields_use_defaults() {
    let config: Config = toml::from_str("").expect("empty table is valid");
    assert_eq!(config, Config::default());

    let config: Config = serde_json::from_str(r#"{"max_iters": 10}"#).expect("valid json");
    assert_eq!(config.max_iters(), 10);
    assert_eq!(config.tolerance(), Config::default().tolerance());
}

#[test]
fn invalid_values_are_rejected_on_load() {
    let err = serde_json::from_str::<Config>(r#"{"tolerance": -1.0}"#)
        .expect_err("negative tolerance");
    assert!(err.to_string().contains(&ConfigError::Tolerance.to_string()));

    let err = toml::from_str::<Config>("max_iters = 0").expect_err("zero iterations");
    assert!(err.to_string().contains(&ConfigError::MaxIters.to_string()));
}

#[test]
fn unknown_fields_are_rejected() {
    assert!(serde_json::from_str::<Config>(r#"{"tol": 1e-3}"#).is_err());
}

#[test]
fn config_round_trips_through_json() {
    let config = Config::new(1e-8, 42).expect("valid config");
    let json = serde_json::to_string(&config).expect("should serialize");
    let back: Config = serde_json::from_str(&json).expect("should deserialize");
    assert_eq!(back, config);
}
