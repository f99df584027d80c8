// eco-domain library entry point
pub mod error;
pub mod metrics;
pub mod params;
pub mod scenario;
pub use error::DomainError;
pub use metrics::SustainabilityMetrics;
pub use params::ProcessParameters;
pub use scenario::{Scenario, ScenarioDraft};
