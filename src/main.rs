//! Demo/validación del core: seeds, cálculo de métricas y ciclo de vida
//! del store, de punta a punta y sin capa HTTP.

use eco_core::{calculate_metrics, InMemoryScenarioStore, ScenarioStore};
use eco_domain::{ProcessParameters, ScenarioDraft};
use serde_json::to_string_pretty;

fn main() {
    // Store de arranque con los tres escenarios seed
    let mut store = InMemoryScenarioStore::with_seed_data();
    println!("--- Escenarios seed (orden: más reciente primero) ---");
    for scenario in store.list_all() {
        println!("[{}] {} -> score {}", scenario.id, scenario.name, scenario.metrics.sustainability_score);
    }
    assert_eq!(store.len(), 3, "Deben existir 3 seeds");

    // Cálculo puro: misma entrada, misma salida
    let params = ProcessParameters { energy_consumption: 4000.0,
                                     waste_generation: 1000.0,
                                     water_usage: 20000.0,
                                     raw_materials: 5000.0,
                                     production_volume: 10000.0 };
    let metrics = calculate_metrics(&params);
    println!("--- Métricas calculadas ---");
    println!("{}", to_string_pretty(&metrics).unwrap_or_default());
    assert_eq!(metrics, calculate_metrics(&params), "El cálculo debe ser idempotente");

    // Crear: id secuencial compartido con los seeds, métricas congeladas
    let draft = ScenarioDraft::new("Pilot Line", params, metrics).expect("draft válido");
    let created = store.create(draft);
    println!("Creado [{}] {} (createdAt={})", created.id, created.name, created.created_at);
    assert_eq!(created.id, 4, "El contador continúa tras los seeds");
    assert_eq!(store.list_all().first().map(|s| s.id), Some(4), "El más nuevo lista primero");

    // Borrar: idempotente en efecto, el id no se reutiliza
    assert!(store.delete_by_id(created.id), "Primer borrado elimina");
    assert!(!store.delete_by_id(created.id), "Segundo borrado reporta false");
    let next = store.create(ScenarioDraft::new("Pilot Line 2", params, metrics).expect("draft válido"));
    assert_eq!(next.id, 5, "Los ids borrados no se reasignan");

    println!("!Validación core: OK (seeds, cálculo, ciclo de vida del store)");
}
