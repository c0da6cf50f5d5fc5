use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_service_routes;
use artist_verdict::config::AppConfig;
use artist_verdict::error::AppError;
use artist_verdict::store::SqliteEvaluationStore;
use artist_verdict::telemetry;
use artist_verdict::EvaluationService;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::{AtomicBool, Ordering};
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
    if let Some(db) = args.db.take() {
        config.storage.database_path = db;
    }
    if let Some(web_root) = args.web_root.take() {
        config.server.web_root = web_root;
    }

    telemetry::init(&config.telemetry, config.environment)?;

    if !config.auth.is_configured() {
        warn!("VERDICT_USER/VERDICT_PASS not set; protected routes will refuse every request");
    }

    let store = Arc::new(SqliteEvaluationStore::open(&config.storage.database_path)?);
    let service = Arc::new(EvaluationService::new(store));

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        web_root: Arc::new(config.server.web_root.clone()),
    };

    let app = with_service_routes(service, app_state, config.auth.clone()).layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        database = %config.storage.database_path.display(),
        "artist verdict service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
