use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use pipeline_ops::application::ports::{DatabaseProbe, JobRegistry, LogStore};
use pipeline_ops::application::services::{
    LaunchPolicy, LogAccessService, PipelineScripts, PipelineService, SystemStatusService,
};
use pipeline_ops::domain::PipelineKind;
use pipeline_ops::infrastructure::observability::{TracingConfig, init_tracing};
use pipeline_ops::infrastructure::persistence::{
    InMemoryJobRegistry, PgDatabaseProbe, create_pool,
};
use pipeline_ops::infrastructure::process::TokioProcessLauncher;
use pipeline_ops::infrastructure::storage::LocalLogStore;
use pipeline_ops::infrastructure::system::SysinfoResourceMonitor;
use pipeline_ops::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(anyhow::Error::msg)?;

    let settings = Settings::load(environment).context("Failed to load settings")?;

    let tracing_config = TracingConfig::new(
        environment.as_str(),
        settings.logging.enable_json,
        &settings.logging.level,
    );
    init_tracing(&tracing_config).context("Failed to initialize tracing")?;
    tracing::info!(
        environment = %tracing_config.environment,
        json_format = tracing_config.json_format,
        port = settings.server.port,
        "Pipeline ops service starting"
    );
    tracing::debug!(?settings, "Settings loaded");

    let database_probe: Arc<dyn DatabaseProbe> = match settings.database.url.as_deref() {
        Some(url) => Arc::new(PgDatabaseProbe::new(create_pool(
            url,
            settings.database.max_connections,
            settings.database.probe_timeout(),
        )?)),
        None => {
            tracing::warn!("No database URL configured; system status will report degraded");
            Arc::new(PgDatabaseProbe::unconfigured())
        }
    };

    let log_store: Arc<dyn LogStore> = Arc::new(
        LocalLogStore::new(settings.logs.root.clone()).context("Failed to prepare logs root")?,
    );

    // Lives for the whole process; job history does not survive a restart.
    let registry: Arc<dyn JobRegistry> = Arc::new(InMemoryJobRegistry::new());

    let scripts = PipelineScripts::new(settings.pipelines.working_dir.clone())
        .with_script(PipelineKind::Daily, settings.pipelines.scripts.daily.clone())
        .with_script(
            PipelineKind::WeeklyTraining,
            settings.pipelines.scripts.weekly_training.clone(),
        )
        .with_script(
            PipelineKind::MonthlyTraining,
            settings.pipelines.scripts.monthly_training.clone(),
        );

    let launcher = Arc::new(TokioProcessLauncher::new(
        settings.pipelines.working_dir.clone(),
        settings.pipelines.interpreter.clone(),
        settings.logs.root.clone(),
        settings.logs.pipeline_dir.clone(),
    ));

    let pipeline_service = Arc::new(PipelineService::new(
        registry,
        launcher,
        scripts,
        LaunchPolicy {
            single_flight_per_kind: settings.pipelines.single_flight_per_kind,
        },
    ));

    let system_status_service = Arc::new(SystemStatusService::new(
        database_probe,
        Arc::new(SysinfoResourceMonitor::new(
            settings.system.disk_path.clone(),
            settings.system.cpu_sample_interval(),
        )),
        Arc::clone(&log_store),
        Arc::clone(&pipeline_service),
        settings.database.probe_timeout(),
        settings.logs.recent_limit,
    ));

    let log_access_service = Arc::new(LogAccessService::new(log_store));

    let state = AppState {
        pipeline_service,
        system_status_service,
        log_access_service,
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server address")?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
