pub mod handlers;
pub mod types;

use crate::{Result, config::Config, predict::PredictionService};
use axum::{
    Router,
    routing::{get, post},
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::info;

pub fn router(service: Arc<PredictionService>) -> Router {
    let app_state = handlers::AppState { service };

    Router::new()
        .route("/", get(handlers::form_page).post(handlers::form_submit))
        .route("/batch", post(handlers::batch_form_submit))
        .route("/predict", post(handlers::predict))
        .route("/predict/batch", post(handlers::predict_batch))
        .route("/model", get(handlers::model_info))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

pub async fn run(config: Config, service: Arc<PredictionService>) -> Result<()> {
    let app = router(service);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
