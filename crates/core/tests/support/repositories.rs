//! Mock repository implementations for testing
//!
//! Provides in-memory mocks for the core ports, enabling deterministic
//! service tests without a hosted database or notification function.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use fathom_core::{DealRepository, MeetingNotifier, MeetingRepository};
use fathom_domain::{Deal, FathomError, Meeting, Result as DomainResult, UtcWindow};
use uuid::Uuid;

/// In-memory mock for `DealRepository`.
#[derive(Default, Clone)]
pub struct MockDealRepository {
    deals: Arc<Mutex<HashMap<Uuid, Deal>>>,
}

impl MockDealRepository {
    /// Create a mock seeded with the provided deals.
    pub fn new(deals: Vec<Deal>) -> Self {
        let map = deals.into_iter().map(|deal| (deal.id, deal)).collect();
        Self { deals: Arc::new(Mutex::new(map)) }
    }

    /// Snapshot of a stored deal, if present.
    pub fn stored(&self, id: Uuid) -> Option<Deal> {
        self.deals.lock().unwrap().get(&id).cloned()
    }
}

#[async_trait]
impl DealRepository for MockDealRepository {
    async fn get_deal(&self, id: Uuid) -> DomainResult<Deal> {
        self.deals
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or_else(|| FathomError::NotFound(format!("deal {id}")))
    }

    async fn save_deal(&self, deal: &Deal) -> DomainResult<()> {
        self.deals.lock().unwrap().insert(deal.id, deal.clone());
        Ok(())
    }
}

/// In-memory mock for `MeetingRepository`.
#[derive(Default, Clone)]
pub struct MockMeetingRepository {
    meetings: Arc<Mutex<HashMap<Uuid, Meeting>>>,
}

impl MockMeetingRepository {
    /// Create a mock seeded with the provided meetings.
    pub fn new(meetings: Vec<Meeting>) -> Self {
        let map = meetings.into_iter().map(|meeting| (meeting.id, meeting)).collect();
        Self { meetings: Arc::new(Mutex::new(map)) }
    }

    /// Snapshot of a stored meeting, if present.
    pub fn stored(&self, id: Uuid) -> Option<Meeting> {
        self.meetings.lock().unwrap().get(&id).cloned()
    }

    /// Number of persisted meetings.
    pub fn count(&self) -> usize {
        self.meetings.lock().unwrap().len()
    }
}

#[async_trait]
impl MeetingRepository for MockMeetingRepository {
    async fn get_meeting(&self, id: Uuid) -> DomainResult<Meeting> {
        self.meetings
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or_else(|| FathomError::NotFound(format!("meeting {id}")))
    }

    async fn save_meeting(&self, meeting: &Meeting) -> DomainResult<()> {
        self.meetings.lock().unwrap().insert(meeting.id, meeting.clone());
        Ok(())
    }
}

/// Notifier mock that records every UTC window it receives.
#[derive(Default, Clone)]
pub struct RecordingNotifier {
    windows: Arc<Mutex<Vec<(UtcWindow, Vec<String>)>>>,
}

impl RecordingNotifier {
    /// All notifications received so far.
    pub fn received(&self) -> Vec<(UtcWindow, Vec<String>)> {
        self.windows.lock().unwrap().clone()
    }
}

#[async_trait]
impl MeetingNotifier for RecordingNotifier {
    async fn meeting_scheduled(
        &self,
        window: UtcWindow,
        participants: &[String],
    ) -> DomainResult<()> {
        self.windows.lock().unwrap().push((window, participants.to_vec()));
        Ok(())
    }
}
