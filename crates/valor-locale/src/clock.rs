use std::fmt::Debug;
use std::time::{SystemTime, UNIX_EPOCH};

use time::{Duration, OffsetDateTime, UtcOffset};

/// Source of "now" readings.
///
/// Value objects never read the wall clock directly; they ask a `Clock`, so
/// callers can pin time down when the boundary matters.
pub trait Clock: Send + Sync + Debug {
    /// Current instant, in UTC.
    fn now_utc(&self) -> OffsetDateTime;
}

/// Wall-clock time source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}

/// Clock frozen at a single instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    instant: OffsetDateTime,
}

impl FixedClock {
    pub fn new(instant: OffsetDateTime) -> Self {
        Self {
            instant: instant.to_offset(UtcOffset::UTC),
        }
    }

    /// `None` when `value` lies outside the range `OffsetDateTime` can hold.
    pub fn at_system_time(value: SystemTime) -> Option<Self> {
        instant_from_system_time(value).map(Self::new)
    }
}

/// Converts a `SystemTime` to a UTC instant without panicking on overflow.
pub fn instant_from_system_time(value: SystemTime) -> Option<OffsetDateTime> {
    match value.duration_since(UNIX_EPOCH) {
        Ok(after) => OffsetDateTime::UNIX_EPOCH.checked_add(Duration::try_from(after).ok()?),
        Err(before) => {
            OffsetDateTime::UNIX_EPOCH.checked_sub(Duration::try_from(before.duration()).ok()?)
        }
    }
}

impl Clock for FixedClock {
    fn now_utc(&self) -> OffsetDateTime {
        self.instant
    }
}
