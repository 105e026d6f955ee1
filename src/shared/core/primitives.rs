// Time primitives shared by every module.
//
// Purpose
// - Provide one source of "now" and render it in one fixed civil offset.
//
// Responsibilities
// - Clock: sample the current instant (system or fixed for tests).
// - TimeProvider: derive civil date, civil time and epoch milliseconds from the same instant.
//
// Notes
// - Civil times carry minute precision. Seconds are dropped before any comparison.

use chrono::{
    DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Timelike, Utc,
};
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

pub const CIVIL_DATE_FORMAT: &str = "%Y-%m-%d";
pub const CIVIL_TIME_FORMAT: &str = "%H:%M";

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at a settable instant, stored as epoch milliseconds.
#[derive(Debug)]
pub struct FixedClock {
    millis: AtomicI64,
}

impl FixedClock {
    pub fn at(instant: DateTime<Utc>) -> Self {
        Self {
            millis: AtomicI64::new(instant.timestamp_millis()),
        }
    }

    pub fn set(&self, instant: DateTime<Utc>) {
        self.millis
            .store(instant.timestamp_millis(), Ordering::SeqCst);
    }

    pub fn advance_ms(&self, ms: i64) {
        self.millis.fetch_add(ms, Ordering::SeqCst);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(self.millis.load(Ordering::SeqCst))
            .unwrap_or(DateTime::UNIX_EPOCH)
    }
}

/// Renders instants from a [`Clock`] in one fixed civil offset.
#[derive(Clone)]
pub struct TimeProvider {
    clock: Arc<dyn Clock>,
    offset: FixedOffset,
}

impl TimeProvider {
    pub fn new(clock: Arc<dyn Clock>, offset: FixedOffset) -> Self {
        Self { clock, offset }
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    pub fn now(&self) -> DateTime<FixedOffset> {
        self.clock.now().with_timezone(&self.offset)
    }

    pub fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }

    pub fn current_time(&self) -> NaiveTime {
        truncate_to_minute(self.now().time())
    }

    pub fn civil_date(&self, instant: &DateTime<FixedOffset>) -> String {
        instant
            .with_timezone(&self.offset)
            .format(CIVIL_DATE_FORMAT)
            .to_string()
    }

    pub fn civil_time(&self, instant: &DateTime<FixedOffset>) -> String {
        instant
            .with_timezone(&self.offset)
            .format(CIVIL_TIME_FORMAT)
            .to_string()
    }

    pub fn epoch_millis(&self, instant: &DateTime<FixedOffset>) -> i64 {
        instant.timestamp_millis()
    }

    /// Combines a civil date and time into an instant in the provider's offset.
    pub fn instant_of(&self, date: NaiveDate, time: NaiveTime) -> Option<DateTime<FixedOffset>> {
        civil_instant(date, time, &self.offset)
    }
}

pub fn truncate_to_minute(time: NaiveTime) -> NaiveTime {
    time.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(time)
}

/// A fixed offset has no gaps or folds, so the mapping is single.
/// `None` when the instant falls outside the representable range.
pub fn civil_instant(
    date: NaiveDate,
    time: NaiveTime,
    offset: &FixedOffset,
) -> Option<DateTime<FixedOffset>> {
    let local = NaiveDateTime::new(date, truncate_to_minute(time));
    let utc = local.checked_sub_offset(*offset)?;
    Some(offset.from_utc_datetime(&utc))
}
