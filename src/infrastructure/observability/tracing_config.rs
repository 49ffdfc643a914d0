/// Configuration for tracing initialization.
pub struct TracingConfig {
    pub environment: String,
    pub json_format: bool,
    /// Filter used when `RUST_LOG` is not set.
    pub default_directive: String,
}

impl TracingConfig {
    /// Settings win unless `LOG_FORMAT=json` forces JSON output.
    pub fn new(environment: impl Into<String>, enable_json: bool, level: &str) -> Self {
        let defaults = Self::default();
        Self {
            environment: environment.into(),
            json_format: enable_json || defaults.json_format,
            default_directive: format!("{},pipeline_ops=debug,tower_http=debug", level),
        }
    }
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            environment: std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "local".to_string()),
            json_format: std::env::var("LOG_FORMAT")
                .map(|v| v.to_lowercase() == "json")
                .unwrap_or(false),
            default_directive: "info,pipeline_ops=debug,tower_http=debug".to_string(),
        }
    }
}
