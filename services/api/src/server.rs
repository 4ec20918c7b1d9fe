use crate::cli::ServeArgs;
use crate::infra::{load_directory, AppState};
use crate::routes::with_competency_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use chrono::Local;
use competency_ai::config::AppConfig;
use competency_ai::error::AppError;
use competency_ai::telemetry;
use competency_ai::workflows::competency::CompetencyService;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::{info, warn};

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if let Some(roster) = args.roster.take() {
        config.roster_path = Some(roster);
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let today = Local::now().date_naive();
    let directory = load_directory(config.roster_path.as_deref(), today)?;
    match &config.roster_path {
        Some(path) => info!(
            roster = %path.display(),
            employees = directory.len(),
            as_of = %directory.as_of(),
            "roster loaded"
        ),
        None => warn!(
            employees = directory.len(),
            "no roster configured; serving the sample directory"
        ),
    }

    let competency_service = Arc::new(CompetencyService::new(
        Arc::new(directory),
        config.scoring.clone(),
    )?);

    let app = with_competency_routes(competency_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "competency scoring service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
