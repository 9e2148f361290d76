//! Deal pipeline progression
//!
//! The gate decides which stage transitions are legal and which required
//! fields are still missing; the service wires it to the persistence port.

pub mod definitions;
pub mod gate;
pub mod ports;
pub mod service;

pub use definitions::StageDefinition;
pub use gate::StageGate;
pub use service::DealService;
