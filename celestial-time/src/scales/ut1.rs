//! Universal Time UT1.
//!
//! UT1 follows the actual rotation of the Earth. It drifts irregularly against UTC;
//! the offset `DUT1 = UT1 - UTC` comes from IERS Earth orientation data:
//!
//! ```text
//! UT1 = UTC + DUT1
//! ```

use crate::julian::JulianDate;
use std::fmt;

/// Universal Time UT1, stored as a split Julian Date.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UT1(JulianDate);

impl UT1 {
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

/// Creates UT1 from calendar components.
pub fn ut1_from_calendar(year: i32, month: u8, day: u8, hour: u8, minute: u8, second: f64) -> UT1 {
    UT1::from_julian_date(JulianDate::from_calendar(year, month, day, hour, minute, second))
}

impl fmt::Display for UT1 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UT1 {}", self.0)
    }
}

impl From<JulianDate> for UT1 {
    fn from(jd: JulianDate) -> Self {
        Self::from_julian_date(jd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use celestial_core::constants::J2000_JD;

    #[test]
    fn test_ut1_from_calendar() {
        let ut1 = ut1_from_calendar(2000, 1, 1, 12, 0, 0.0);
        assert_eq!(ut1.to_julian_date().to_f64(), J2000_JD);
        assert!(format!("{}", ut1).starts_with("UT1"));
    }

    #[test]
    fn test_ut1_add_seconds() {
        let ut1 = ut1_from_calendar(2000, 1, 1, 0, 0, 0.0).add_seconds(86_400.0);
        assert_eq!(ut1.to_julian_date().to_mjd(), 51545.0);
    }
}
