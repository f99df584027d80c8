//! Parámetros de proceso: los cinco insumos crudos de un mes de producción.
//!
//! Los nombres en el wire son camelCase (`energyConsumption`, ...) para
//! mantener compatibilidad con los cuerpos JSON de referencia.
use serde::{Deserialize, Serialize};

/// Insumos mensuales de un proceso productivo.
///
/// Todos los campos deben ser no negativos; `production_volume` debe ser
/// estrictamente positivo (divide las eficiencias por unidad). El core
/// asume entrada ya validada: usar [`ProcessParameters::violations`] en
/// la frontera antes de calcular métricas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessParameters {
    /// kWh por mes.
    pub energy_consumption: f64,
    /// kg de residuos por mes.
    pub waste_generation: f64,
    /// Litros por mes.
    pub water_usage: f64,
    /// kg de materias primas por mes.
    pub raw_materials: f64,
    /// Unidades producidas por mes (> 0).
    pub production_volume: f64,
}

impl ProcessParameters {
    /// Lista las violaciones de esquema de estos parámetros. Vacía si la
    /// entrada es válida para el cálculo de métricas.
    pub fn violations(&self) -> Vec<String> {
        let mut out = Vec::new();
        let non_negative = [("energyConsumption", self.energy_consumption),
                            ("wasteGeneration", self.waste_generation),
                            ("waterUsage", self.water_usage),
                            ("rawMaterials", self.raw_materials)];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                out.push(format!("{field} must be a non-negative number"));
            }
        }
        if !self.production_volume.is_finite() || self.production_volume <= 0.0 {
            out.push("productionVolume must be a positive number".to_string());
        }
        out
    }

    pub fn is_valid(&self) -> bool {
        self.violations().is_empty()
    }
}
