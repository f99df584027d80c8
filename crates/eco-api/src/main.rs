//! Binario del servicio HTTP de escenarios de sostenibilidad.

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use eco_api::config::AppConfig;
use eco_api::state::AppState;

#[tokio::main]
async fn main() {
    // Cargar .env antes de leer cualquier variable de entorno
    let _ = dotenvy::dotenv();
    let config = AppConfig::from_env();

    tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(config.log_filter.clone()))
                                  .with(tracing_subscriber::fmt::layer())
                                  .init();

    info!("starting sustainability scenario service");

    // Store en memoria con seeds, dueño único del estado, inyectado al router
    let state = Arc::new(AppState::seeded());
    let app = eco_api::app(state);

    info!("listening on {}", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await
                                                                   .expect("failed to bind listen address");
    axum::serve(listener, app).await.expect("server error");
}
