//! Domain constants
//!
//! Centralized location for scheduling and pipeline constants used
//! throughout the application.

// Scheduling grid configuration
pub const SLOT_INTERVAL_MINUTES: u32 = 30;
pub const SLOTS_PER_DAY: u32 = 24 * 60 / SLOT_INTERVAL_MINUTES;

/// Slot returned by reconcile when nothing remains for the chosen day.
/// Meant as the first slot of the next business day.
pub const FALLBACK_SLOT: &str = "09:00";

/// Wall-clock format accepted and produced by the scheduler.
pub const TIME_FORMAT: &str = "%H:%M";
