//! eco-core: cálculo de métricas + registro de escenarios en memoria.
pub mod constants;
pub mod metrics;
pub mod seed;
pub mod store;

pub use metrics::calculate_metrics;
pub use store::{InMemoryScenarioStore, ScenarioStore};
