pub mod backend;
pub mod config;
pub mod error;
pub mod scenario;
pub mod sim;
pub mod species;
pub mod web;

pub use config::ServiceConfig;
pub use scenario::{CalamityKind, CalamityScenario};
pub use sim::{run_simulation, SimulationRequest, SimulationResult};
pub use species::SpeciesCatalog;
