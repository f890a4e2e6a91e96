//! Solid earth tide.
//!
//! Sum of the Sun and Moon point-mass tides with the K1 frequency-dependent
//! radial correction. The permanent tidal deformation is part of the result
//! unless the caller asks for it to be removed, in which case the conventional
//! "tide free" constant offset is added back.

mod point_mass;

pub use point_mass::point_mass_tide;

use crate::constants::{GM_MOON, GM_SUN};
use crate::enu::SiteFrame;
use celestial_core::Vector3;

/// Up and north offsets (meters) of the permanent tide at latitude `lat`.
///
/// Returns `(up, north)`: `0.1196 (1.5 sin²φ − 0.5)` and `0.0247 sin 2φ`.
pub fn permanent_deformation(lat: f64) -> (f64, f64) {
    let sin_lat = libm::sin(lat);
    let up = 0.1196 * (1.5 * sin_lat * sin_lat - 0.5);
    let north = 0.0247 * libm::sin(2.0 * lat);
    (up, north)
}

/// Solid earth tide displacement (earth-fixed, meters).
///
/// `sun` and `moon` are earth-fixed positions in meters, `gmst` is Greenwich mean
/// sidereal time in radians.
pub fn solid_earth_tide(
    frame: &SiteFrame,
    sun: &Vector3,
    moon: &Vector3,
    gmst: f64,
    remove_permanent: bool,
) -> Vector3 {
    let eu = frame.up();

    let mut dr = point_mass_tide(frame, sun, GM_SUN) + point_mass_tide(frame, moon, GM_MOON);

    // K1 frequency correction of the radial displacement
    let du = -0.012 * libm::sin(2.0 * frame.latitude) * libm::sin(gmst + frame.longitude);
    dr += eu * du;

    if remove_permanent {
        let (up, north) = permanent_deformation(frame.latitude);
        dr += eu * up + frame.north() * north;
    }

    log::trace!(
        "solid earth tide: dr=({:.6}, {:.6}, {:.6}) k1={:.6}",
        dr.x,
        dr.y,
        dr.z,
        du
    );
    dr
}
