use std::fmt;

use time::{format_description::well_known::Rfc3339, OffsetDateTime};

/// A point in time with millisecond precision.
///
/// Stored as a unix timestamp in **milli**seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn now() -> Self {
        OffsetDateTime::now_utc().into()
    }

    pub const fn from_milliseconds(milliseconds: i64) -> Self {
        Self(milliseconds)
    }

    pub const fn into_milliseconds(self) -> i64 {
        self.0
    }

    pub const fn from_seconds(seconds: i64) -> Self {
        // Saturate instead of wrapping; callers feed in untrusted
        // second values far outside any plausible date range.
        Self(seconds.saturating_mul(1000))
    }

    pub const fn into_seconds(self) -> i64 {
        self.0.div_euclid(1000)
    }
}

impl From<OffsetDateTime> for Timestamp {
    fn from(from: OffsetDateTime) -> Self {
        Self((from.unix_timestamp_nanos() / 1_000_000) as i64)
    }
}

impl From<Timestamp> for OffsetDateTime {
    fn from(from: Timestamp) -> Self {
        OffsetDateTime::from_unix_timestamp_nanos(i128::from(from.0) * 1_000_000)
            .expect("timestamp in range")
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        let dt = OffsetDateTime::from(*self);
        match dt.format(&Rfc3339) {
            Ok(formatted) => f.write_str(&formatted),
            Err(_) => write!(f, "{}", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convert_between_seconds_and_milliseconds() {
        let ts = Timestamp::from_seconds(1_704_067_200);
        assert_eq!(ts.into_milliseconds(), 1_704_067_200_000);
        assert_eq!(ts.into_seconds(), 1_704_067_200);
    }

    #[test]
    fn truncate_sub_second_precision_towards_negative_infinity() {
        assert_eq!(Timestamp::from_milliseconds(1999).into_seconds(), 1);
        assert_eq!(Timestamp::from_milliseconds(-1).into_seconds(), -1);
    }

    #[test]
    fn saturate_on_out_of_range_seconds() {
        assert_eq!(
            Timestamp::from_seconds(i64::MAX).into_milliseconds(),
            i64::MAX
        );
        assert_eq!(
            Timestamp::from_seconds(i64::MIN).into_milliseconds(),
            i64::MIN
        );
        assert!(Timestamp::from_seconds(i64::MAX) > Timestamp::now());
    }

    #[test]
    fn ordered_chronologically() {
        assert!(Timestamp::from_seconds(1) < Timestamp::from_seconds(2));
    }
}
