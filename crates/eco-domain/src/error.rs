use thiserror::Error;

/// Error del dominio. Las búsquedas ausentes NO son errores (se modelan
/// con `Option`); aquí sólo vive la validación de entrada.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation failed: {0}")]
    ValidationError(String),
}

impl DomainError {
    /// Construye un `ValidationError` a partir de la lista de violaciones
    /// por campo que reporta la capa de entrada.
    pub fn from_violations(violations: &[String]) -> Self {
        DomainError::ValidationError(violations.join("; "))
    }
}
