//! Meeting record types

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An absolute meeting window in UTC.
///
/// This pair is what the notification/meeting-link collaborator consumes;
/// it never receives local time or a timezone, so no double conversion can
/// happen at that boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtcWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl UtcWindow {
    pub fn new(start: DateTime<Utc>, duration_minutes: i64) -> Self {
        Self { start, end: start + Duration::minutes(duration_minutes) }
    }
}

/// A meeting record.
///
/// The local representation (`date`, `local_time`, `timezone`) is persisted
/// alongside the derived UTC pair so the record can be re-edited later. The
/// timezone string is never discarded after conversion: without it the UTC
/// pair could not be recomputed and the stored times could not be checked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meeting {
    pub id: Uuid,
    pub deal_id: Option<Uuid>,
    pub title: String,
    /// Calendar date in the meeting's own timezone.
    pub date: NaiveDate,
    /// Wall-clock start time, `HH:mm`.
    pub local_time: String,
    /// IANA timezone identifier the meeting was scheduled in.
    pub timezone: String,
    pub duration_minutes: i64,
    pub utc_start: DateTime<Utc>,
    pub utc_end: DateTime<Utc>,
    #[serde(default)]
    pub participants: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Meeting {
    /// The stored UTC pair.
    pub fn utc_window(&self) -> UtcWindow {
        UtcWindow { start: self.utc_start, end: self.utc_end }
    }

    /// Whether the stored UTC pair matches a freshly derived one.
    ///
    /// Callers recompute the window from (date, local_time, timezone,
    /// duration) and use this to detect records whose invariant was broken
    /// by an out-of-band edit.
    pub fn matches_window(&self, window: UtcWindow) -> bool {
        self.utc_window() == window
    }
}
