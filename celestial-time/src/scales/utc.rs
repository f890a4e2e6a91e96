//! Coordinated Universal Time (UTC).
//!
//! UTC is the civil scale processing epochs are tagged with. It tracks atomic time
//! with leap seconds so that it stays within 0.9 s of UT1.
//!
//! ```
//! use celestial_time::UTC;
//! use celestial_time::scales::utc::utc_from_calendar;
//!
//! let from_unix = UTC::new(1704067200, 0); // 2024-01-01 00:00:00
//! let from_calendar = utc_from_calendar(2024, 1, 1, 0, 0, 0.0);
//! assert_eq!(from_unix.to_julian_date().to_f64(), from_calendar.to_julian_date().to_f64());
//! ```

use crate::constants::UNIX_EPOCH_JD;
use crate::julian::JulianDate;
use celestial_core::constants::{NANOSECONDS_PER_SECOND_F64, SECONDS_PER_DAY, SECONDS_PER_DAY_F64};
use std::fmt;

/// UTC time scale backed by a split Julian Date.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UTC(JulianDate);

impl UTC {
    /// Creates UTC from Unix timestamp components (seconds and nanoseconds since
    /// 1970-01-01 00:00:00). Whole days go to `jd1`, the rest of the day to `jd2`.
    pub fn new(seconds: i64, nanos: u32) -> Self {
        let days = seconds.div_euclid(SECONDS_PER_DAY);
        let remainder_seconds = seconds.rem_euclid(SECONDS_PER_DAY);
        let jd1 = UNIX_EPOCH_JD + days as f64;
        let jd2 = (remainder_seconds as f64 + nanos as f64 / NANOSECONDS_PER_SECOND_F64)
            / SECONDS_PER_DAY_F64;
        Self(JulianDate::new(jd1, jd2))
    }

    pub fn from_julian_date(jd: JulianDate) -> Self {
        Self(jd)
    }

    pub fn to_julian_date(&self) -> JulianDate {
        self.0
    }

    pub fn add_seconds(&self, seconds: f64) -> Self {
        Self(self.0.add_seconds(seconds))
    }
}

/// Creates UTC from calendar components.
///
/// Leap-second days are not stretched: the fraction is taken over 86400 s.
pub fn utc_from_calendar(year: i32, month: u8, day: u8, hour: u8, minute: u8, second: f64) -> UTC {
    UTC::from_julian_date(JulianDate::from_calendar(year, month, day, hour, minute, second))
}

impl fmt::Display for UTC {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UTC {}", self.0)
    }
}

impl From<JulianDate> for UTC {
    fn from(jd: JulianDate) -> Self {
        Self::from_julian_date(jd)
    }
}
