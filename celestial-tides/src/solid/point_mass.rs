//! Displacement raised by a single perturbing body.
//!
//! Degree-2 and degree-3 tidal potentials of a point mass, with the latitude
//! dependent degree-2 Love/Shida numbers and the out-of-phase radial corrections
//! for the diurnal and semidiurnal bands (IERS Conventions 1996, ch. 7).

use crate::constants::{EARTH_RADIUS, GM_EARTH, H2_NOMINAL, H3, L2_NOMINAL, L3};
use crate::enu::SiteFrame;
use celestial_core::Vector3;

/// Displacement of the site described by `frame` caused by a body of
/// gravitational constant `gm_body` at earth-fixed position `body` (meters).
///
/// The result is earth-fixed: the along-body part on the body direction, the
/// radial part on the local up axis. A body at the geocenter (`|body| == 0`)
/// gives a zero displacement.
///
/// ```
/// use celestial_core::Vector3;
/// use celestial_tides::constants::GM_MOON;
/// use celestial_tides::solid::point_mass_tide;
/// use celestial_tides::SiteFrame;
///
/// let frame = SiteFrame::new(0.0, 0.0);
/// let moon_overhead = Vector3::new(3.844e8, 0.0, 0.0);
/// let dr = point_mass_tide(&frame, &moon_overhead, GM_MOON);
/// assert!(dr.x > 0.2 && dr.x < 0.25);
/// ```
pub fn point_mass_tide(frame: &SiteFrame, body: &Vector3, gm_body: f64) -> Vector3 {
    let r = body.magnitude();
    if r <= 0.0 {
        return Vector3::zeros();
    }
    let ep = *body * (1.0 / r);
    let eu = frame.up();

    let k2 = gm_body / GM_EARTH * EARTH_RADIUS.powi(4) / (r * r * r);
    let k3 = k2 * EARTH_RADIUS / r;

    let body_lat = libm::asin(ep.z);
    let body_lon = libm::atan2(ep.y, ep.x);
    let cos_body_lat = libm::cos(body_lat);
    let cos_lat = libm::cos(frame.latitude);
    let sin_lat = libm::sin(frame.latitude);

    let p = (3.0 * sin_lat * sin_lat - 1.0) / 2.0;
    let h2 = H2_NOMINAL - 0.0006 * p;
    let l2 = L2_NOMINAL + 0.0002 * p;

    let a = ep.dot(&eu);
    let a2 = a * a;
    let dp = k2 * 3.0 * l2 * a + k3 * L3 * (7.5 * a2 - 1.5);
    let mut du = k2 * (h2 * (1.5 * a2 - 0.5) - 3.0 * l2 * a2)
        + k3 * (H3 * (2.5 * a2 * a - 1.5 * a) - L3 * (7.5 * a2 - 1.5) * a);

    let dlon = frame.longitude - body_lon;
    // diurnal band
    du += 3.0 / 4.0
        * 0.0025
        * k2
        * libm::sin(2.0 * body_lat)
        * libm::sin(2.0 * frame.latitude)
        * libm::sin(dlon);
    // semidiurnal band
    du += 3.0 / 4.0
        * 0.0022
        * k2
        * cos_body_lat
        * cos_body_lat
        * cos_lat
        * cos_lat
        * libm::sin(2.0 * dlon);

    log::trace!(
        "point mass tide: gm={:.6e} r={:.1} a={:.6} dp={:.6} du={:.6}",
        gm_body,
        r,
        a,
        dp,
        du
    );

    ep * dp + eu * du
}
