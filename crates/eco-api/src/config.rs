//! Configuración del binario API desde variables de entorno.
//! Convención `ECO_API_ADDR` para la dirección de escucha; `.env` se
//! carga en `main` antes de leer nada.

use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub log_filter: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let bind_addr = env::var("ECO_API_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_filter = env::var("RUST_LOG").unwrap_or_else(|_| "eco_api=debug,tower_http=debug".to_string());
        Self { bind_addr, log_filter }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
