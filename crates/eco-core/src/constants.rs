//! Constantes del cálculo de métricas.
//!
//! Este módulo agrupa los factores fijos del contrato de cálculo. Cambiar
//! cualquiera de estos valores cambia las métricas de todos los escenarios
//! creados a partir de ese momento (los ya almacenados quedan congelados),
//! así que se mantienen estables y con nombre.

/// kg CO2e por kWh consumido.
pub const CARBON_PER_KWH: f64 = 0.0005;

/// kg CO2e por kg de residuo generado.
pub const CARBON_PER_KG_WASTE: f64 = 0.001;

/// Consumo de agua de referencia: litros por unidad producida.
pub const WATER_BASELINE_L_PER_UNIT: f64 = 2.5;

/// Consumo energético de referencia: kWh por unidad producida.
pub const ENERGY_BASELINE_KWH_PER_UNIT: f64 = 0.5;
