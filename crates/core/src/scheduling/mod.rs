//! Meeting scheduling
//!
//! Bidirectional local-time <-> UTC conversion, slot enumeration, and the
//! service that persists meetings and hands the resulting UTC pair to the
//! notification collaborator.

pub mod clock;
pub mod ports;
pub mod resolver;
pub mod service;
pub mod slots;

pub use clock::{Clock, SystemClock};
pub use resolver::ScheduleResolver;
pub use service::{MeetingService, ScheduleRequest};
pub use slots::Slots;
