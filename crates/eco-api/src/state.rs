//! Estado compartido entre handlers.
//!
//! El store se inyecta explícitamente (nada de singletons globales) y se
//! comparte vía `Arc<AppState>`. Un único mutex serializa las cuatro
//! operaciones junto con el contador de ids: las operaciones son baratas
//! y síncronas, no hace falta locking más fino.
use std::sync::Mutex;

use eco_core::{InMemoryScenarioStore, ScenarioStore};

pub struct AppState {
    pub store: Mutex<Box<dyn ScenarioStore + Send>>,
}

impl AppState {
    /// Estado sobre un store arbitrario (permite sustituir el backend en
    /// memoria por uno persistente sin tocar los handlers).
    pub fn new(store: Box<dyn ScenarioStore + Send>) -> Self {
        Self { store: Mutex::new(store) }
    }

    /// Estado de arranque estándar: store en memoria con los seeds demo.
    pub fn seeded() -> Self {
        Self::new(Box::new(InMemoryScenarioStore::with_seed_data()))
    }
}
