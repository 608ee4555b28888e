use axum::{
    routing::{get, post},
    Router,
};
use axum_prometheus::PrometheusMetricLayer;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::EnvFilter;

use saveit_server::config::Config;
use saveit_server::handlers;
use saveit_server::state::AppState;

#[tokio::main]
async fn main() {
    // Load configuration — fatal if PORT is not a number.
    let config = Config::from_env().expect("Failed to load configuration");

    // Initialize tracing — JSON in production, human-readable in dev.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("saveit_server=info,tower_http=info"));

    if config.is_production {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    info!("🚀 SaveIt Server starting...");
    info!("📝 Notion API: {}", config.notion_api_url);

    let app_state = AppState::new(config.notion_api_url.as_str());

    // Prometheus metrics layer
    let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();

    // Build router
    let app = Router::new()
        // Health check + metrics
        .route("/health", get(handlers::health_check))
        .route(
            "/metrics",
            get(move || async move { metric_handle.render() }),
        )
        // The function itself
        .route("/", post(handlers::save_it::save_it))
        // Middleware
        .layer(prometheus_layer)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    let addr = config.server_addr();
    info!("🎧 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .await
        .expect("Server failed to start");
}
