//! Métricas de sostenibilidad derivadas, nunca persistidas por sí solas.
use serde::{Deserialize, Serialize};

/// Los cuatro valores derivados de unos [`ProcessParameters`].
///
/// `carbon_footprint` viene redondeado a 1 decimal; las eficiencias y el
/// score son enteros en [0,100]. Se calculan una sola vez (al crear el
/// escenario) y quedan congelados.
///
/// [`ProcessParameters`]: crate::ProcessParameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SustainabilityMetrics {
    pub carbon_footprint: f64,
    pub water_efficiency: u8,
    pub energy_efficiency: u8,
    pub sustainability_score: u8,
}
