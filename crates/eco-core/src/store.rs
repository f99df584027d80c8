//! Registro autoritativo de escenarios con operaciones de ciclo de vida.
//!
//! El trait expone el conjunto de capacidades {get, list, create, delete}
//! para que un backend persistente pueda sustituir al default en memoria
//! sin tocar a los llamadores. Las lecturas devuelven clones (el store es
//! dueño único de sus registros); en entorno multihilo los cuatro métodos
//! deben serializarse bajo un único mutex junto con el contador de ids.
use std::collections::HashMap;

use chrono::Utc;
use eco_domain::{Scenario, ScenarioDraft};

/// Contrato de almacenamiento de escenarios.
pub trait ScenarioStore {
    /// Búsqueda O(1) por id. `None` si no existe (ausencia no es error).
    fn get_by_id(&self, id: u64) -> Option<Scenario>;
    /// Todos los escenarios, ordenados por `created_at` descendente
    /// (empates por `id` descendente para que el orden sea determinista).
    fn list_all(&self) -> Vec<Scenario>;
    /// Asigna el siguiente id secuencial, estampa `created_at` y guarda.
    /// Siempre tiene éxito con entrada bien formada.
    fn create(&mut self, draft: ScenarioDraft) -> Scenario;
    /// Elimina el registro si existe; devuelve si había algo que borrar.
    /// Idempotente en efecto: la segunda llamada reporta `false`.
    fn delete_by_id(&mut self, id: u64) -> bool;
}

/// Implementación default en memoria: HashMap + contador monotónico.
///
/// Los ids arrancan en 1, nunca se resetean ni se reutilizan (tampoco
/// tras borrados); los seeds consumen el mismo contador que los registros
/// creados vía API.
pub struct InMemoryScenarioStore {
    records: HashMap<u64, Scenario>,
    next_id: u64,
}

impl InMemoryScenarioStore {
    /// Store vacío, sin seeds.
    pub fn new() -> Self {
        Self { records: HashMap::new(), next_id: 1 }
    }

    /// Store inicializado con los tres escenarios seed de arranque
    /// (ver [`crate::seed`]).
    pub fn with_seed_data() -> Self {
        let mut store = Self::new();
        for draft in crate::seed::seed_scenarios() {
            store.create(draft);
        }
        store
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for InMemoryScenarioStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ScenarioStore for InMemoryScenarioStore {
    fn get_by_id(&self, id: u64) -> Option<Scenario> {
        self.records.get(&id).cloned()
    }

    fn list_all(&self) -> Vec<Scenario> {
        let mut all: Vec<Scenario> = self.records.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        all
    }

    fn create(&mut self, draft: ScenarioDraft) -> Scenario {
        let id = self.next_id;
        self.next_id += 1;
        let scenario = Scenario { id,
                                  name: draft.name,
                                  params: draft.params,
                                  metrics: draft.metrics,
                                  created_at: Utc::now() };
        self.records.insert(id, scenario.clone());
        scenario
    }

    fn delete_by_id(&mut self, id: u64) -> bool {
        self.records.remove(&id).is_some()
    }
}
