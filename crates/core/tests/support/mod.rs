//! Shared test support for fathom-core integration tests

pub mod repositories;

use chrono::{DateTime, Utc};
use fathom_core::Clock;

/// Deterministic clock pinned to a fixed instant.
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
