use ghana_names::infrastructure::observability::{DEFAULT_LOG_FILTER, TracingConfig};
use ghana_names::presentation::config::{Environment, LoggingSettings};

#[test]
fn given_local_environment_when_building_config_then_uses_text_and_default_filter() {
    let config = TracingConfig::from_settings(Environment::Local, &LoggingSettings::default());

    assert!(!config.json_format);
    assert_eq!(config.environment, "local");
    assert_eq!(config.filter, DEFAULT_LOG_FILTER);
}

#[test]
fn given_prod_environment_when_building_config_then_forces_json() {
    let config = TracingConfig::from_settings(Environment::Prod, &LoggingSettings::default());
    assert!(config.json_format);
}

#[test]
fn given_explicit_logging_settings_when_building_config_then_they_win() {
    let logging = LoggingSettings {
        filter: Some("warn".to_string()),
        enable_json: true,
    };

    let config = TracingConfig::from_settings(Environment::Test, &logging);

    assert!(config.json_format);
    assert_eq!(config.filter, "warn");
}
