use crate::constants::SECONDS_TO_DAYS;
use celestial_core::constants::{MJD_ZERO_POINT, SECONDS_PER_DAY_F64};
use std::fmt;

/// A Julian Date split into two parts.
///
/// `jd1` usually holds the Julian Date at 0h (or J2000.0) and `jd2` the fraction
/// or offset in days. Arithmetic only touches `jd2`, so whole days stay exact.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JulianDate {
    pub jd1: f64,
    pub jd2: f64,
}

impl JulianDate {
    pub fn new(jd1: f64, jd2: f64) -> Self {
        Self { jd1, jd2 }
    }

    pub fn jd1(&self) -> f64 {
        self.jd1
    }

    pub fn jd2(&self) -> f64 {
        self.jd2
    }

    pub fn to_f64(&self) -> f64 {
        self.jd1 + self.jd2
    }

    pub fn add_days(&self, days: f64) -> Self {
        Self::new(self.jd1, self.jd2 + days)
    }

    pub fn add_seconds(&self, seconds: f64) -> Self {
        self.add_days(seconds * SECONDS_TO_DAYS)
    }

    /// Modified Julian Date, summed so that the large `jd1` offset cancels first.
    pub fn to_mjd(&self) -> f64 {
        (self.jd1 - MJD_ZERO_POINT) + self.jd2
    }

    /// Splits the instant into the MJD of its 0h and the seconds elapsed since then.
    ///
    /// Each half of the split date is floored separately before recombining, so the
    /// seconds of day are not degraded by the magnitude of the day count.
    ///
    /// ```
    /// use celestial_time::JulianDate;
    ///
    /// let jd = JulianDate::from_calendar(1975, 1, 1, 6, 0, 0.0);
    /// let (mjd, seconds) = jd.mjd_day_and_seconds();
    /// assert_eq!(mjd, 42413.0);
    /// assert!((seconds - 21_600.0).abs() < 1e-9);
    /// ```
    pub fn mjd_day_and_seconds(&self) -> (f64, f64) {
        let mjd1 = self.jd1 - MJD_ZERO_POINT;
        let day1 = mjd1.floor();
        let frac = (mjd1 - day1) + self.jd2;
        let day2 = frac.floor();
        (day1 + day2, (frac - day2) * SECONDS_PER_DAY_F64)
    }

    /// Calendar date to split Julian Date (ERFA `eraCal2jd` + `eraDtf2d` layout):
    /// `jd1` is the Julian Date at midnight, `jd2` the fraction of the day.
    pub fn from_calendar(year: i32, month: u8, day: u8, hour: u8, minute: u8, second: f64) -> Self {
        let my = (month as i32 - 14) / 12;
        let iypmy = year + my;

        let mjd = ((1461 * (iypmy + 4800)) / 4 + (367 * (month as i32 - 2 - 12 * my)) / 12
            - (3 * ((iypmy + 4900) / 100)) / 4
            + day as i32
            - 2432076) as f64;

        let jd1 = MJD_ZERO_POINT + mjd;
        let jd2 = (60.0 * (60 * hour as i32 + minute as i32) as f64 + second) / SECONDS_PER_DAY_F64;

        Self::new(jd1, jd2)
    }
}

impl fmt::Display for JulianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JD {:.9}", self.to_f64())
    }
}

impl From<f64> for JulianDate {
    fn from(jd: f64) -> Self {
        Self::new(jd, 0.0)
    }
}
