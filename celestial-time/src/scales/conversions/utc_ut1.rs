//! Conversion from UTC to UT1 with a known `UT1 - UTC` offset.
//!
//! The offset (DUT1) is published by the IERS (Bulletin A) and is usually taken
//! from interpolated Earth rotation parameters. The conversion is a plain shift of
//! the instant; leap-second bookkeeping is left to the source of DUT1.
//!
//! ```
//! use celestial_time::{JulianDate, ToUT1WithDUT1, UTC};
//!
//! let utc = UTC::from_julian_date(JulianDate::new(2451545.0, 0.0));
//! let ut1 = utc.to_ut1_with_dut1(0.3);
//!
//! let diff_seconds =
//!     (ut1.to_julian_date().to_f64() - utc.to_julian_date().to_f64()) * 86400.0;
//! assert!((diff_seconds - 0.3).abs() < 1e-4);
//! ```

use crate::scales::{UT1, UTC};

/// Convert to UT1 using a known DUT1 (UT1-UTC) offset in seconds.
pub trait ToUT1WithDUT1 {
    fn to_ut1_with_dut1(&self, dut1_seconds: f64) -> UT1;
}

impl ToUT1WithDUT1 for UTC {
    fn to_ut1_with_dut1(&self, dut1_seconds: f64) -> UT1 {
        UT1::from_julian_date(self.to_julian_date().add_seconds(dut1_seconds))
    }
}
