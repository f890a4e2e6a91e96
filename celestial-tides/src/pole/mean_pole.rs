//! IERS conventional mean pole (IERS Conventions 2010, sec. 7.1.4).
//!
//! A cubic fit up to 2010.0 and a linear drift afterwards. The two branches are
//! not continuous at 2010.0; the jump is part of the convention.

use crate::constants::MJD_2000;
use celestial_core::constants::DAYS_PER_JULIAN_YEAR;
use celestial_time::UT1;

/// Years after 2000.0 where the linear branch takes over.
const LINEAR_MODEL_START: f64 = 3653.0 / DAYS_PER_JULIAN_YEAR;

/// Mean pole coordinates (milliarcseconds).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeanPole {
    pub x: f64,
    pub y: f64,
}

impl MeanPole {
    /// Mean pole at `years` Julian years after 2000-01-01 0h.
    ///
    /// ```
    /// use celestial_tides::pole::MeanPole;
    ///
    /// let p = MeanPole::at_years(0.0);
    /// assert_eq!((p.x, p.y), (55.974, 346.346));
    /// ```
    pub fn at_years(years: f64) -> Self {
        let y = years;
        if y < LINEAR_MODEL_START {
            let y2 = y * y;
            let y3 = y2 * y;
            Self {
                x: 55.974 + 1.8243 * y + 0.18413 * y2 + 0.007024 * y3,
                y: 346.346 + 1.7896 * y - 0.10729 * y2 - 0.000908 * y3,
            }
        } else {
            Self {
                x: 23.513 + 7.6141 * y,
                y: 358.891 - 0.6287 * y,
            }
        }
    }

    /// Mean pole at epoch `ut1`.
    pub fn at(ut1: &UT1) -> Self {
        Self::at_years(years_since_2000(ut1))
    }
}

/// Julian years from 2000-01-01 0h UT1.
fn years_since_2000(ut1: &UT1) -> f64 {
    (ut1.to_julian_date().to_mjd() - MJD_2000) / DAYS_PER_JULIAN_YEAR
}

#[cfg(test)]
mod tests {
    use super::*;
    use celestial_time::scales::ut1::ut1_from_calendar;

    #[test]
    fn test_cubic_branch_at_reference_epoch() {
        let pole = MeanPole::at(&ut1_from_calendar(2000, 1, 1, 0, 0, 0.0));
        assert_eq!(pole.x, 55.974);
        assert_eq!(pole.y, 346.346);
    }

    #[test]
    fn test_cubic_branch_polynomial() {
        let p = MeanPole::at_years(5.0);
        assert!((p.x - (55.974 + 9.1215 + 4.60325 + 0.878)).abs() < 1e-9);
        assert!((p.y - (346.346 + 8.948 - 2.68225 - 0.1135)).abs() < 1e-9);
    }

    #[test]
    fn test_linear_branch_polynomial() {
        let p = MeanPole::at_years(20.0);
        assert!((p.x - 175.795).abs() < 1e-9);
        assert!((p.y - 346.317).abs() < 1e-9);
    }

    #[test]
    fn test_branch_switch_at_2010() {
        let y = LINEAR_MODEL_START;
        let before = MeanPole::at_years(y - 1e-9);
        let after = MeanPole::at_years(y);
        assert_eq!(after.x, 23.513 + 7.6141 * y);
        assert_eq!(after.y, 358.891 - 0.6287 * y);
        assert!((before.y - (346.346 + 1.7896 * y - 0.10729 * y * y - 0.000908 * y * y * y)).abs() < 1e-6);
        // close but not equal at the switch
        assert!((before.x - after.x).abs() < 0.01);
        assert!((before.y - after.y).abs() < 0.01);

        let epoch = MeanPole::at(&ut1_from_calendar(2010, 1, 1, 0, 0, 0.0));
        assert_eq!(epoch, after);
    }

    #[test]
    fn test_years_since_2000() {
        let y = years_since_2000(&ut1_from_calendar(2001, 1, 1, 0, 0, 0.0));
        assert!((y - 366.0 / 365.25).abs() < 1e-12);
    }
}
