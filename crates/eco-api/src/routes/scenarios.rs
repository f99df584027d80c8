//! Handlers CRUD de escenarios.
//!
//! Mapeo de resultados a códigos (contrato de frontera):
//! - lecturas/borrados ausentes -> 404; id malformado o cero -> 400;
//! - violaciones de esquema -> 400 con la lista de campos;
//! - cualquier fallo inesperado (lock envenenado) -> 500 genérico.
use std::sync::{Arc, Mutex, MutexGuard};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use eco_core::ScenarioStore;
use eco_domain::{ProcessParameters, Scenario, ScenarioDraft, SustainabilityMetrics};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use super::{bad_request, internal_error, not_found, ApiError};
use crate::state::AppState;

/// Payload de creación: nombre + parámetros aplanados (camelCase).
#[derive(Deserialize)]
pub struct CreateScenarioRequest {
    pub name: String,
    #[serde(flatten)]
    pub params: ProcessParameters,
}

#[derive(Serialize)]
pub struct DeleteResponse {
    pub deleted: bool,
    pub id: u64,
}

type StoreGuard<'a> = MutexGuard<'a, Box<dyn ScenarioStore + Send>>;

fn lock_store(store: &Mutex<Box<dyn ScenarioStore + Send>>) -> Result<StoreGuard<'_>, ApiError> {
    store.lock().map_err(|e| {
                    error!("scenario store lock poisoned: {e}");
                    internal_error()
                })
}

/// Un id de ruta debe ser un entero positivo; el extractor ya rechaza lo
/// no numérico, aquí sólo queda el cero.
fn check_id(id: u64) -> Result<u64, ApiError> {
    if id == 0 {
        return Err(bad_request("id must be a positive integer", None));
    }
    Ok(id)
}

pub async fn list_scenarios(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Scenario>>, ApiError> {
    let store = lock_store(&state.store)?;
    Ok(Json(store.list_all()))
}

pub async fn get_scenario(State(state): State<Arc<AppState>>,
                          Path(id): Path<u64>)
                          -> Result<Json<Scenario>, ApiError> {
    let id = check_id(id)?;
    let store = lock_store(&state.store)?;
    store.get_by_id(id)
         .map(Json)
         .ok_or_else(|| not_found(format!("scenario {id} not found")))
}

/// Calcula métricas sin persistir nada (endpoint de simulación).
pub async fn calculate_metrics(Json(body): Json<serde_json::Value>)
                               -> Result<Json<SustainabilityMetrics>, ApiError> {
    let params: ProcessParameters =
        serde_json::from_value(body).map_err(|e| bad_request(&format!("invalid request body: {e}"), None))?;
    let violations = params.violations();
    if !violations.is_empty() {
        return Err(bad_request("validation failed", Some(violations)));
    }
    Ok(Json(eco_core::calculate_metrics(&params)))
}

pub async fn create_scenario(State(state): State<Arc<AppState>>,
                             Json(body): Json<serde_json::Value>)
                             -> Result<Json<Scenario>, ApiError> {
    let req: CreateScenarioRequest =
        serde_json::from_value(body).map_err(|e| bad_request(&format!("invalid request body: {e}"), None))?;
    let violations = ScenarioDraft::violations(&req.name, &req.params);
    if !violations.is_empty() {
        return Err(bad_request("validation failed", Some(violations)));
    }
    // Las métricas se calculan exactamente una vez, aquí; el store sólo
    // asigna id y timestamp.
    let metrics = eco_core::calculate_metrics(&req.params);
    let draft = ScenarioDraft::new(&req.name, req.params, metrics).map_err(|e| {
                    error!("draft rejected after boundary validation: {e}");
                    internal_error()
                })?;
    let mut store = lock_store(&state.store)?;
    let scenario = store.create(draft);
    info!(id = scenario.id, name = %scenario.name, "scenario created");
    Ok(Json(scenario))
}

pub async fn delete_scenario(State(state): State<Arc<AppState>>,
                             Path(id): Path<u64>)
                             -> Result<(StatusCode, Json<DeleteResponse>), ApiError> {
    let id = check_id(id)?;
    let mut store = lock_store(&state.store)?;
    if !store.delete_by_id(id) {
        return Err(not_found(format!("scenario {id} not found")));
    }
    info!(id, "scenario deleted");
    Ok((StatusCode::OK, Json(DeleteResponse { deleted: true, id })))
}
