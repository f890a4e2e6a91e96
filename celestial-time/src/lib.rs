//! Time scales for epoch-driven geodetic models.
//!
//! Instants are stored as split two-part Julian Dates ([`JulianDate`]) so that day
//! numbers and day fractions keep full `f64` precision. Two scales are provided:
//!
//! - [`UTC`]: the civil scale processing epochs are usually tagged with
//! - [`UT1`]: Earth-rotation time, obtained from UTC with a known `UT1 - UTC` offset
//!
//! ```
//! use celestial_time::scales::utc::utc_from_calendar;
//! use celestial_time::ToUT1WithDUT1;
//!
//! let utc = utc_from_calendar(2020, 3, 1, 12, 0, 0.0);
//! let ut1 = utc.to_ut1_with_dut1(-0.2);
//! let (_, seconds) = ut1.to_julian_date().mjd_day_and_seconds();
//! assert!((seconds - 43_199.8).abs() < 1e-6);
//! ```

pub mod constants;
pub mod julian;
pub mod scales;

pub use julian::JulianDate;
pub use scales::conversions::ToUT1WithDUT1;
pub use scales::{UT1, UTC};
