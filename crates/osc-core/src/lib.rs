#![deny(missing_docs)]
#![doc = "Core value types and structured errors for the coupled oscillator simulator."]

pub mod errors;
pub mod provenance;
mod types;

pub use errors::{ErrorInfo, OscError};
pub use provenance::{RunProvenance, SchemaVersion};
pub use types::{PhysicalParameters, State};
