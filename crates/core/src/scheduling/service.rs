//! Meeting scheduling service - core business logic

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use fathom_domain::{Meeting, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use super::ports::{MeetingNotifier, MeetingRepository};
use super::resolver::ScheduleResolver;

/// What the form submits to schedule a meeting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleRequest {
    pub title: String,
    pub deal_id: Option<Uuid>,
    pub date: NaiveDate,
    /// Wall-clock start time, `HH:mm`.
    pub local_time: String,
    /// IANA timezone the time is expressed in.
    pub timezone: String,
    pub duration_minutes: i64,
    pub participants: Vec<String>,
}

/// Meeting scheduling service
///
/// Validates strictly before any port write: an invalid time, unknown
/// timezone, or past instant keeps the form open with nothing persisted.
pub struct MeetingService {
    repository: Arc<dyn MeetingRepository>,
    notifier: Arc<dyn MeetingNotifier>,
    resolver: ScheduleResolver,
}

impl MeetingService {
    /// Create a new meeting service
    pub fn new(
        repository: Arc<dyn MeetingRepository>,
        notifier: Arc<dyn MeetingNotifier>,
        resolver: ScheduleResolver,
    ) -> Self {
        Self { repository, notifier, resolver }
    }

    /// Schedule a meeting: resolve the UTC window, reject past instants,
    /// persist, then hand the UTC pair to the notifier.
    pub async fn schedule(&self, request: ScheduleRequest) -> Result<Meeting> {
        if let Err(err) =
            self.resolver.ensure_future(request.date, &request.local_time, &request.timezone)
        {
            warn!(date = %request.date, time = %request.local_time, "meeting submission refused");
            return Err(err);
        }

        let window = self.resolver.to_utc(
            request.date,
            &request.local_time,
            &request.timezone,
            request.duration_minutes,
        )?;

        let meeting = Meeting {
            id: Uuid::new_v4(),
            deal_id: request.deal_id,
            title: request.title,
            date: request.date,
            local_time: request.local_time,
            timezone: request.timezone,
            duration_minutes: request.duration_minutes,
            utc_start: window.start,
            utc_end: window.end,
            participants: request.participants,
            created_at: Utc::now(),
        };

        self.repository.save_meeting(&meeting).await?;
        self.notifier.meeting_scheduled(window, &meeting.participants).await?;

        info!(meeting_id = %meeting.id, start = %meeting.utc_start, "meeting scheduled");
        Ok(meeting)
    }

    /// Move an existing meeting to a new date (and possibly timezone).
    ///
    /// The stored time is reconciled against the new context first, so the
    /// persisted record never carries a slot that is no longer valid.
    pub async fn reschedule(
        &self,
        id: Uuid,
        new_date: NaiveDate,
        timezone: &str,
    ) -> Result<Meeting> {
        let mut meeting = self.repository.get_meeting(id).await?;

        let time = self.resolver.reconcile(&meeting.local_time, new_date, timezone)?;
        let window = self.resolver.to_utc(new_date, &time, timezone, meeting.duration_minutes)?;

        meeting.date = new_date;
        meeting.local_time = time;
        meeting.timezone = timezone.to_string();
        meeting.utc_start = window.start;
        meeting.utc_end = window.end;

        self.repository.save_meeting(&meeting).await?;
        self.notifier.meeting_scheduled(window, &meeting.participants).await?;

        info!(meeting_id = %meeting.id, start = %meeting.utc_start, "meeting rescheduled");
        Ok(meeting)
    }

    /// Render a stored meeting for editing in the viewer's own timezone.
    pub fn local_view(&self, meeting: &Meeting, viewer_timezone: &str) -> Result<(NaiveDate, String)> {
        self.resolver.from_utc(meeting.utc_start, viewer_timezone)
    }
}
