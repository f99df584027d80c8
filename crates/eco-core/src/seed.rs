//! Escenarios seed de arranque (demo/bootstrap).
//!
//! Los tres registros reproducen los datos seed de referencia al pie de la
//! letra. Sus métricas están cargadas a mano y NO coinciden con lo que
//! produce `calculate_metrics` para esos mismos parámetros (p.ej. el seed
//! "current" guarda score 76 donde la fórmula da otro valor). Se preservan
//! tal cual para compatibilidad; la fórmula manda sólo en escenarios
//! nuevos. No recalcular estos valores.
use eco_domain::{ProcessParameters, ScenarioDraft, SustainabilityMetrics};

/// Los tres drafts seed, en orden de inserción (current, optimized, green).
pub fn seed_scenarios() -> Vec<ScenarioDraft> {
    vec![ScenarioDraft { name: "Current Process".to_string(),
                         params: ProcessParameters { energy_consumption: 5000.0,
                                                     waste_generation: 1200.0,
                                                     water_usage: 25000.0,
                                                     raw_materials: 8000.0,
                                                     production_volume: 10000.0 },
                         metrics: SustainabilityMetrics { carbon_footprint: 2.8,
                                                          water_efficiency: 72,
                                                          energy_efficiency: 85,
                                                          sustainability_score: 76 } },
         ScenarioDraft { name: "Optimized Process".to_string(),
                         params: ProcessParameters { energy_consumption: 3500.0,
                                                     waste_generation: 800.0,
                                                     water_usage: 18000.0,
                                                     raw_materials: 7500.0,
                                                     production_volume: 10000.0 },
                         metrics: SustainabilityMetrics { carbon_footprint: 2.0,
                                                          water_efficiency: 85,
                                                          energy_efficiency: 92,
                                                          sustainability_score: 89 } },
         ScenarioDraft { name: "Green Process".to_string(),
                         params: ProcessParameters { energy_consumption: 2000.0,
                                                     waste_generation: 400.0,
                                                     water_usage: 12000.0,
                                                     raw_materials: 6000.0,
                                                     production_volume: 10000.0 },
                         metrics: SustainabilityMetrics { carbon_footprint: 1.4,
                                                          water_efficiency: 95,
                                                          energy_efficiency: 98,
                                                          sustainability_score: 97 } },]
}
