//! # Fathom Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The deal pipeline gate (legal stage transitions, required-field gating)
//! - The meeting schedule resolver (local time <-> UTC, slot enumeration)
//! - Port/adapter interfaces (traits) for the external collaborators
//! - Use-case services orchestrating validate-then-persist
//!
//! ## Architecture Principles
//! - Only depends on `fathom-domain`
//! - No database, HTTP, or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod pipeline;
pub mod scheduling;

// Re-export specific items to avoid ambiguity
pub use pipeline::gate::StageGate;
pub use pipeline::ports::DealRepository;
pub use pipeline::DealService;
pub use scheduling::clock::{Clock, SystemClock};
pub use scheduling::ports::{MeetingNotifier, MeetingRepository};
pub use scheduling::resolver::ScheduleResolver;
pub use scheduling::slots::Slots;
pub use scheduling::{MeetingService, ScheduleRequest};
