//! Pole tide.
//!
//! Polar motion shifts the Earth's rotation axis away from its secular mean and
//! with it the centrifugal potential. The solid Earth answers with a displacement
//! of up to about 25 mm vertically and 7 mm horizontally.
//!
//! The wobble parameters are the departures of the observed pole from the
//! conventional mean pole, in arcseconds:
//!
//! ```text
//! m1 =   xp - x̄
//! m2 = -(yp - ȳ)
//! ```

mod mean_pole;

pub use mean_pole::MeanPole;

use crate::enu::EnuDisplacement;
use crate::erp::EarthRotationParameters;
use celestial_core::constants::ARCSEC_PER_RAD;
use celestial_time::UT1;

/// Pole tide displacement in the local frame of a site at spherical latitude
/// `lat` and longitude `lon` (radians). Pole coordinates come from `erp`.
pub fn pole_tide(lat: f64, lon: f64, ut1: &UT1, erp: &EarthRotationParameters) -> EnuDisplacement {
    let pole = MeanPole::at(ut1);

    // mas -> arcsec
    let m1 = erp.xp * ARCSEC_PER_RAD - pole.x * 1e-3;
    let m2 = -erp.yp * ARCSEC_PER_RAD + pole.y * 1e-3;

    let (sin_lon, cos_lon) = libm::sincos(lon);
    let cos_term = m1 * cos_lon + m2 * sin_lon;

    let enu = EnuDisplacement::new(
        9e-3 * libm::sin(lat) * (m1 * sin_lon - m2 * cos_lon),
        -9e-3 * libm::cos(2.0 * lat) * cos_term,
        -33e-3 * libm::sin(2.0 * lat) * cos_term,
    );

    log::trace!(
        "pole tide: m1={:.6} m2={:.6} arcsec, {}",
        m1,
        m2,
        enu
    );
    enu
}
