use std::fmt;

use time::{format_description::well_known::Rfc3339, OffsetDateTime};

/// A point in time with millisecond precision.
///
/// Displayed as RFC 3339 / ISO 8601 in UTC.
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
        Self(seconds * 1_000)
    }

    pub const fn into_seconds(self) -> i64 {
        self.0 / 1_000
    }
}

impl From<OffsetDateTime> for Timestamp {
    fn from(from: OffsetDateTime) -> Self {
        Self((from.unix_timestamp_nanos() / 1_000_000) as i64)
    }
}

impl TryFrom<Timestamp> for OffsetDateTime {
    type Error = time::error::ComponentRange;
    fn try_from(from: Timestamp) -> Result<Self, Self::Error> {
        OffsetDateTime::from_unix_timestamp_nanos(i128::from(from.0) * 1_000_000)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        let dt = OffsetDateTime::try_from(*self).map_err(|_| fmt::Error)?;
        let formatted = dt.format(&Rfc3339).map_err(|_| fmt::Error)?;
        f.write_str(&formatted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convert_from_into_milliseconds() {
        let t1 = Timestamp::now();
        let ms = t1.into_milliseconds();
        let t2 = Timestamp::from_milliseconds(ms);
        assert_eq!(t1, t2);
    }

    #[test]
    fn seconds_precision() {
        let t = Timestamp::from_seconds(1_700_000_000);
        assert_eq!(t.into_seconds(), 1_700_000_000);
        assert_eq!(t.into_milliseconds(), 1_700_000_000_000);
    }

    #[test]
    fn timestamps_are_totally_ordered() {
        let earlier = Timestamp::from_milliseconds(1);
        let later = Timestamp::from_milliseconds(2);
        assert!(earlier < later);
    }

    #[test]
    fn display_as_rfc3339() {
        let t = Timestamp::from_seconds(0);
        assert_eq!(t.to_string(), "1970-01-01T00:00:00Z");
    }
}
