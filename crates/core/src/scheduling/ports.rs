//! Port interfaces for meeting persistence and notification

use async_trait::async_trait;
use fathom_domain::{Meeting, Result, UtcWindow};
use uuid::Uuid;

/// Trait for persisting meetings
#[async_trait]
pub trait MeetingRepository: Send + Sync {
    /// Fetch a meeting by id
    async fn get_meeting(&self, id: Uuid) -> Result<Meeting>;

    /// Persist a meeting
    async fn save_meeting(&self, meeting: &Meeting) -> Result<()>;
}

/// Trait for the notification/meeting-link collaborator
///
/// Receives exactly the UTC pair plus participant identifiers - never local
/// time or a timezone, so it cannot double-convert.
#[async_trait]
pub trait MeetingNotifier: Send + Sync {
    /// Announce a scheduled (or rescheduled) meeting window
    async fn meeting_scheduled(&self, window: UtcWindow, participants: &[String]) -> Result<()>;
}
