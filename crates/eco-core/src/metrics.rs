//! Cálculo puro de métricas de sostenibilidad.
//!
//! `calculate_metrics` es determinista y sin efectos: misma entrada, misma
//! salida. El orden de redondeo es parte del contrato:
//! - huella de carbono: multiplicar por 10, redondear, dividir por 10;
//! - eficiencias: clamp a [0,100] ANTES de redondear;
//! - score: media de las eficiencias YA redondeadas, redondeada.
//!
//! El llamador garantiza `production_volume > 0` (validación de frontera);
//! con volumen cero el intermedio por unidad es infinito.
use eco_domain::{ProcessParameters, SustainabilityMetrics};

use crate::constants::{CARBON_PER_KG_WASTE, CARBON_PER_KWH, ENERGY_BASELINE_KWH_PER_UNIT, WATER_BASELINE_L_PER_UNIT};

/// Deriva las cuatro métricas a partir de los parámetros de proceso.
pub fn calculate_metrics(params: &ProcessParameters) -> SustainabilityMetrics {
    let carbon = params.energy_consumption * CARBON_PER_KWH + params.waste_generation * CARBON_PER_KG_WASTE;
    let carbon_footprint = (carbon * 10.0).round() / 10.0;

    let water_per_unit = params.water_usage / params.production_volume;
    let water_efficiency = efficiency_against_baseline(water_per_unit, WATER_BASELINE_L_PER_UNIT);

    let energy_per_unit = params.energy_consumption / params.production_volume;
    let energy_efficiency = efficiency_against_baseline(energy_per_unit, ENERGY_BASELINE_KWH_PER_UNIT);

    // El score se calcula sobre los valores ya redondeados, no sobre los
    // previos al redondeo (compatibilidad con el comportamiento de referencia).
    let sustainability_score = (f64::from(water_efficiency) + f64::from(energy_efficiency)) / 2.0;

    SustainabilityMetrics { carbon_footprint,
                            water_efficiency,
                            energy_efficiency,
                            sustainability_score: sustainability_score.round() as u8 }
}

/// Eficiencia [0,100] de un consumo por unidad contra su baseline:
/// 100 en el baseline, decrece linealmente por encima, satura en los
/// extremos. Clamp antes del redondeo.
fn efficiency_against_baseline(per_unit: f64, baseline: f64) -> u8 {
    let raw = 100.0 - (per_unit - baseline) / baseline * 100.0;
    raw.clamp(0.0, 100.0).round() as u8
}
