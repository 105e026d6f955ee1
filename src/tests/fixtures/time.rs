use crate::shared::core::primitives::{FixedClock, TimeProvider};
use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use std::sync::Arc;

/// 2024-03-01 08:00 at -03:00.
pub fn shift_start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 11, 0, 0).unwrap()
}

pub fn make_time_provider() -> (Arc<FixedClock>, TimeProvider) {
    let clock = Arc::new(FixedClock::at(shift_start()));
    let offset = FixedOffset::west_opt(3 * 3600).unwrap();
    (clock.clone(), TimeProvider::new(clock, offset))
}
