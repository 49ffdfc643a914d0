use std::path::PathBuf;
use std::time::Duration;

use pipeline_ops::presentation::{Environment, Settings};

#[test]
fn given_no_settings_file_when_loading_test_environment_then_defaults_apply() {
    let settings = Settings::load(Environment::Test).unwrap();

    assert_eq!(settings.logs.pipeline_dir, "pipelines");
    assert_eq!(settings.logs.recent_limit, 10);
    assert_eq!(settings.database.probe_timeout(), Duration::from_secs(5));
    assert_eq!(
        settings.pipelines.scripts.daily,
        PathBuf::from("scripts/run_daily_pipeline.sh")
    );
    assert!(!settings.pipelines.single_flight_per_kind);
}

#[test]
fn given_database_url_when_debug_formatting_settings_then_url_is_redacted() {
    let mut settings = Settings::load(Environment::Test).unwrap();
    settings.database.url = Some("postgres://ops:hunter2@db/ops".to_string());

    let rendered = format!("{:?}", settings);

    assert!(!rendered.contains("hunter2"));
    assert!(rendered.contains("[REDACTED]"));
}
