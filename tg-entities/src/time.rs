use std::{
    fmt,
    ops::{Add, Sub},
};

pub use time::Duration;
use time::{error::ComponentRange, format_description::well_known::Rfc3339, OffsetDateTime};

/// A timestamp in UTC with millisecond precision.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(i64);

impl Timestamp {
    pub const UNIX_EPOCH: Self = Self(0);

    pub fn now() -> Self {
        OffsetDateTime::now_utc().into()
    }

    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    pub const fn as_millis(self) -> i64 {
        self.0
    }

    pub const fn from_secs(secs: i64) -> Self {
        Self(secs.saturating_mul(1_000))
    }

    pub const fn as_secs(self) -> i64 {
        self.0.div_euclid(1_000)
    }
}

fn saturating_millis(duration: Duration) -> i64 {
    i64::try_from(duration.whole_milliseconds()).unwrap_or(if duration.is_negative() {
        i64::MIN
    } else {
        i64::MAX
    })
}

impl From<OffsetDateTime> for Timestamp {
    fn from(from: OffsetDateTime) -> Self {
        let millis = from.unix_timestamp_nanos().div_euclid(1_000_000);
        Self(i64::try_from(millis).unwrap_or(i64::MAX))
    }
}

impl TryFrom<Timestamp> for OffsetDateTime {
    type Error = ComponentRange;
    fn try_from(from: Timestamp) -> Result<Self, Self::Error> {
        OffsetDateTime::from_unix_timestamp_nanos(i128::from(from.0) * 1_000_000)
    }
}

impl Add<Duration> for Timestamp {
    type Output = Self;

    fn add(self, rhs: Duration) -> Self {
        Self(self.0.saturating_add(saturating_millis(rhs)))
    }
}

impl Sub<Duration> for Timestamp {
    type Output = Self;

    fn sub(self, rhs: Duration) -> Self {
        Self(self.0.saturating_sub(saturating_millis(rhs)))
    }
}

impl Sub<Timestamp> for Timestamp {
    type Output = Duration;

    fn sub(self, rhs: Timestamp) -> Duration {
        Duration::milliseconds(self.0.saturating_sub(rhs.0))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match OffsetDateTime::try_from(*self) {
            Ok(date_time) => {
                let formatted = date_time.format(&Rfc3339).map_err(|_| fmt::Error)?;
                f.write_str(&formatted)
            }
            Err(_) => write!(f, "{}ms", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convert_from_into_offset_date_time() {
        let t1 = Timestamp::now();
        let dt = OffsetDateTime::try_from(t1).unwrap();
        let t2 = Timestamp::from(dt);
        assert_eq!(t1, t2);
    }

    #[test]
    fn seconds_and_milliseconds() {
        let t = Timestamp::from_millis(1_500);
        assert_eq!(1, t.as_secs());
        assert_eq!(Timestamp::from_secs(1), Timestamp::from_millis(1_000));
        assert_eq!(-1, Timestamp::from_millis(-1).as_secs());
    }

    #[test]
    fn add_and_subtract_durations() {
        let t = Timestamp::from_secs(10_000);
        assert_eq!(Timestamp::from_secs(6_400), t - Duration::hours(1));
        assert_eq!(Timestamp::from_secs(13_600), t + Duration::hours(1));
        assert_eq!(Duration::hours(1), t - Timestamp::from_secs(6_400));
    }

    #[test]
    fn subtraction_saturates() {
        let t = Timestamp::from_millis(i64::MIN + 1);
        assert_eq!(Timestamp::from_millis(i64::MIN), t - Duration::hours(1));
    }

    #[test]
    fn display_as_rfc3339() {
        assert_eq!("1970-01-01T00:00:00Z", Timestamp::UNIX_EPOCH.to_string());
    }
}
