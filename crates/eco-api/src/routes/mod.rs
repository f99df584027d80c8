//! Rutas del API y tipos de respuesta compartidos.

pub mod scenarios;

use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok".to_string(),
                          version: env!("CARGO_PKG_VERSION").to_string() })
}

/// Cuerpo JSON de todo error del API. `details` lleva la lista de
/// violaciones por campo cuando aplica (errores de validación).
#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

pub type ApiError = (StatusCode, Json<ErrorBody>);

pub fn bad_request(msg: &str, details: Option<Vec<String>>) -> ApiError {
    (StatusCode::BAD_REQUEST, Json(ErrorBody { error: msg.to_string(), details }))
}

pub fn not_found(msg: String) -> ApiError {
    (StatusCode::NOT_FOUND, Json(ErrorBody { error: msg, details: None }))
}

/// Fallo inesperado: mensaje genérico, sin detalle (el detalle va al log).
pub fn internal_error() -> ApiError {
    (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorBody { error: "internal server error".to_string(), details: None }))
}
