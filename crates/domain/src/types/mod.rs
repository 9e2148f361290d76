//! Domain types and models

pub mod deal;
pub mod meeting;

// Re-export record types for convenience
pub use deal::{Deal, DealStage, FieldValue};
pub use meeting::{Meeting, UtcWindow};
