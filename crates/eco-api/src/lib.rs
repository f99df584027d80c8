//! Capa HTTP del servicio de escenarios de sostenibilidad.
//!
//! Pegamento fino sobre eco-core: cada handler valida la entrada, invoca
//! la función de cálculo y/o el store, y traduce el resultado a códigos
//! HTTP. Toda la lógica con contenido vive en eco-core/eco-domain.
pub mod config;
pub mod routes;
pub mod state;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Construye el router completo sobre un estado compartido.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new().route("/health", get(routes::health_check))
                 .route("/api/scenarios",
                        get(routes::scenarios::list_scenarios).post(routes::scenarios::create_scenario))
                 .route("/api/scenarios/calculate", post(routes::scenarios::calculate_metrics))
                 .route("/api/scenarios/:id",
                        get(routes::scenarios::get_scenario).delete(routes::scenarios::delete_scenario))
                 .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
                 .layer(TraceLayer::new_for_http())
                 .with_state(state)
}
