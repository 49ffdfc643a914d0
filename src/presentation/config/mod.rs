mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    DatabaseSettings, LoggingSettings, LogsSettings, PipelineScriptSettings, PipelineSettings,
    ServerSettings, Settings, SystemSettings,
};
