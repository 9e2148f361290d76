//! Meeting slot enumeration

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use chrono_tz::Tz;
use fathom_domain::constants::{SLOT_INTERVAL_MINUTES, TIME_FORMAT};

use super::resolver::resolve_local;

/// Lazy enumeration of candidate start times for one day.
///
/// Walks the fixed 30-minute grid in chronological order, skipping slots
/// at or before the cutoff when one is set (the cutoff is "now" when the
/// day being enumerated is today in the target zone). Finite, and
/// restartable by cloning before iteration.
#[derive(Debug, Clone)]
pub struct Slots {
    date: NaiveDate,
    tz: Tz,
    cutoff: Option<DateTime<Utc>>,
    next_minute: u32,
}

impl Slots {
    pub(crate) fn new(date: NaiveDate, tz: Tz, cutoff: Option<DateTime<Utc>>) -> Self {
        Self { date, tz, cutoff, next_minute: 0 }
    }
}

impl Iterator for Slots {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while self.next_minute < 24 * 60 {
            let minute = self.next_minute;
            self.next_minute += SLOT_INTERVAL_MINUTES;

            let time = NaiveTime::from_hms_opt(minute / 60, minute % 60, 0)?;
            if let Some(cutoff) = self.cutoff {
                let instant = resolve_local(self.tz, self.date.and_time(time));
                if instant.with_timezone(&Utc) <= cutoff {
                    continue;
                }
            }
            return Some(time.format(TIME_FORMAT).to_string());
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use chrono_tz::Europe::Paris;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn unfiltered_grid_covers_the_whole_day() {
        let slots: Vec<String> = Slots::new(date(2024, 6, 16), Paris, None).collect();

        assert_eq!(slots.len(), 48);
        assert_eq!(slots.first().map(String::as_str), Some("00:00"));
        assert_eq!(slots.get(1).map(String::as_str), Some("00:30"));
        assert_eq!(slots.last().map(String::as_str), Some("23:30"));
    }

    #[test]
    fn grid_is_chronologically_ascending() {
        let slots: Vec<String> = Slots::new(date(2024, 6, 16), Paris, None).collect();
        let mut sorted = slots.clone();
        sorted.sort();

        // HH:mm strings sort lexicographically in time order.
        assert_eq!(slots, sorted);
    }

    #[test]
    fn cutoff_drops_slots_at_or_before_now() {
        // 08:30Z = 10:30 local in Paris (June).
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 8, 30, 0).unwrap();
        let slots: Vec<String> = Slots::new(date(2024, 6, 15), Paris, Some(now)).collect();

        assert_eq!(slots.first().map(String::as_str), Some("11:00"));
        assert!(!slots.contains(&"09:00".to_string()));
        assert!(!slots.contains(&"10:30".to_string()), "a slot exactly at now is past");
        assert_eq!(slots.len(), 26);
    }

    #[test]
    fn cloning_restarts_the_enumeration() {
        let slots = Slots::new(date(2024, 6, 16), Paris, None);
        let first: Vec<String> = slots.clone().collect();
        let second: Vec<String> = slots.collect();

        assert_eq!(first, second);
    }

    #[test]
    fn partially_consumed_clone_resumes_midway() {
        let mut slots = Slots::new(date(2024, 6, 16), Paris, None);
        assert_eq!(slots.next().as_deref(), Some("00:00"));

        let resumed: Vec<String> = slots.clone().take(2).collect();
        assert_eq!(resumed, vec!["00:30".to_string(), "01:00".to_string()]);
    }
}
