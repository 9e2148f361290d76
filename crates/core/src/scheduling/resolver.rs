//! Local time <-> UTC resolution
//!
//! Wall-clock times carry no timezone of their own; they become instants
//! only when paired with a calendar date and an IANA zone. The offset is
//! resolved for the specific date, so DST transitions are handled by the
//! zone database rather than by whatever offset happens to hold today.

use std::sync::Arc;

use chrono::{DateTime, Duration, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use fathom_domain::constants::{FALLBACK_SLOT, SLOT_INTERVAL_MINUTES, TIME_FORMAT};
use fathom_domain::{FathomError, Result, UtcWindow};

use super::clock::{Clock, SystemClock};
use super::slots::Slots;

/// Resolves wall-clock times to UTC instants and back, and enumerates
/// valid meeting slots.
///
/// Stateless apart from the injected clock; every method is a pure
/// function of its inputs and "now".
pub struct ScheduleResolver {
    clock: Arc<dyn Clock>,
}

impl Default for ScheduleResolver {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}

impl ScheduleResolver {
    /// Create a resolver with an explicit clock.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Interpret `time` (`HH:mm`) as wall-clock time on `date` in `timezone`
    /// and convert to an absolute UTC window of `duration_minutes`.
    ///
    /// Ambiguous local times (DST fall-back) resolve to the earlier
    /// instant. Local times inside a spring-forward gap roll forward in
    /// slot-granularity steps to the first instant that exists in the zone.
    pub fn to_utc(
        &self,
        date: NaiveDate,
        time: &str,
        timezone: &str,
        duration_minutes: i64,
    ) -> Result<UtcWindow> {
        let tz = parse_timezone(timezone)?;
        let time = parse_time(time)?;
        let local = resolve_local(tz, date.and_time(time));
        Ok(UtcWindow::new(local.with_timezone(&Utc), duration_minutes))
    }

    /// Render a UTC instant as (date, `HH:mm`) in `timezone`.
    ///
    /// Editing forms call this with the current viewer's timezone, so an
    /// editor in another zone sees the meeting in their own local time.
    /// Exact inverse of [`Self::to_utc`] away from DST discontinuities.
    pub fn from_utc(&self, instant: DateTime<Utc>, timezone: &str) -> Result<(NaiveDate, String)> {
        let tz = parse_timezone(timezone)?;
        let local = instant.with_timezone(&tz);
        Ok((local.date_naive(), local.format(TIME_FORMAT).to_string()))
    }

    /// Whether the described wall-clock instant is at or before "now".
    pub fn is_past(&self, date: NaiveDate, time: &str, timezone: &str) -> Result<bool> {
        let window = self.to_utc(date, time, timezone, 0)?;
        Ok(window.start <= self.clock.now())
    }

    /// Reject a submission whose resolved start is not after "now".
    pub fn ensure_future(&self, date: NaiveDate, time: &str, timezone: &str) -> Result<()> {
        if self.is_past(date, time, timezone)? {
            return Err(FathomError::PastDateTime(format!("{date} {time} ({timezone})")));
        }
        Ok(())
    }

    /// Candidate start times for `date`, in chronological order.
    ///
    /// When `date` is today in `timezone`, slots at or before "now" are
    /// filtered out; any other date (including past dates) returns the
    /// full grid unfiltered. The returned iterator is lazy, finite, and
    /// restartable via `Clone`.
    pub fn available_slots(&self, date: NaiveDate, timezone: &str) -> Result<Slots> {
        let tz = parse_timezone(timezone)?;
        let now = self.clock.now();
        let cutoff = (date == now.with_timezone(&tz).date_naive()).then_some(now);
        Ok(Slots::new(date, tz, cutoff))
    }

    /// Re-validate a previously chosen time after a date or timezone edit.
    ///
    /// Keeps `previous_time` when it is still in the valid set for the new
    /// context; otherwise falls back to the earliest available slot, or to
    /// [`FALLBACK_SLOT`] when nothing remains for that day. The form is
    /// never left displaying a stale, now-invalid time.
    pub fn reconcile(
        &self,
        previous_time: &str,
        date: NaiveDate,
        timezone: &str,
    ) -> Result<String> {
        let mut slots = self.available_slots(date, timezone)?;
        if slots.clone().any(|slot| slot == previous_time) {
            return Ok(previous_time.to_string());
        }
        Ok(slots.next().unwrap_or_else(|| FALLBACK_SLOT.to_string()))
    }
}

/// Parse an `HH:mm` wall-clock string. Anything else is a hard
/// input-validation error, never coerced.
pub(crate) fn parse_time(time: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(time, TIME_FORMAT)
        .map_err(|_| FathomError::InvalidTimeFormat(time.to_string()))
}

/// Parse an IANA timezone identifier.
pub(crate) fn parse_timezone(timezone: &str) -> Result<Tz> {
    timezone.parse::<Tz>().map_err(|_| FathomError::UnknownTimezone(timezone.to_string()))
}

/// Resolve a naive local datetime in `tz` to a concrete instant.
///
/// Total: spring-forward gaps roll forward until a representable instant
/// is found, fall-back ambiguity takes the earlier offset.
pub(crate) fn resolve_local(tz: Tz, naive: NaiveDateTime) -> DateTime<Tz> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(instant) => instant,
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => {
            let step = Duration::minutes(i64::from(SLOT_INTERVAL_MINUTES));
            let mut probe = naive + step;
            loop {
                if let Some(instant) = tz.from_local_datetime(&probe).earliest() {
                    return instant;
                }
                probe += step;
            }
        }
    }
}
