//! Escenario persistido: nombre + parámetros + métricas congeladas.
//!
//! Invariante: las métricas de un `Scenario` son la función pura de sus
//! propios parámetros, calculadas exactamente una vez al crearlo. Después
//! el registro es de sólo lectura (no existe update, sólo delete).
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{DomainError, ProcessParameters, SustainabilityMetrics};

/// Registro persistido en el store. En el wire los parámetros y las
/// métricas van aplanados junto a `id`, `name` y `createdAt`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub id: u64,
    pub name: String,
    #[serde(flatten)]
    pub params: ProcessParameters,
    #[serde(flatten)]
    pub metrics: SustainabilityMetrics,
    pub created_at: DateTime<Utc>,
}

/// Entrada de creación: nombre + parámetros + métricas ya calculadas.
/// El store asigna `id` y `createdAt`; nunca recalcula métricas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioDraft {
    pub name: String,
    #[serde(flatten)]
    pub params: ProcessParameters,
    #[serde(flatten)]
    pub metrics: SustainabilityMetrics,
}

impl ScenarioDraft {
    pub fn new(name: &str, params: ProcessParameters, metrics: SustainabilityMetrics) -> Result<Self, DomainError> {
        let violations = Self::violations(name, &params);
        if !violations.is_empty() {
            return Err(DomainError::from_violations(&violations));
        }
        Ok(ScenarioDraft { name: name.to_string(), params, metrics })
    }

    /// Violaciones de esquema de una petición de creación: nombre no vacío
    /// más las restricciones de los parámetros.
    pub fn violations(name: &str, params: &ProcessParameters) -> Vec<String> {
        let mut violations = params.violations();
        if name.trim().is_empty() {
            violations.insert(0, "name must be a non-empty string".to_string());
        }
        violations
    }
}
