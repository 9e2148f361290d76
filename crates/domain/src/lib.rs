//! # Fathom Domain
//!
//! Business domain types and models for Fathom CRM.
//!
//! This crate contains:
//! - Domain data types (Deal, Meeting, FieldValue)
//! - Domain error types and Result definitions
//! - Domain constants (slot granularity, reconcile fallback)
//!
//! ## Architecture
//! - No dependencies on other Fathom crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use errors::*;
pub use types::*;
