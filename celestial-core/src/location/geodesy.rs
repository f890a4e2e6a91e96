//! Geodetic to earth-fixed Cartesian conversions.
//!
//! **Geodetic coordinates** (what a GNSS receiver reports) are relative to the WGS84
//! ellipsoid: latitude is the angle of the ellipsoid normal, height is measured
//! along that normal. **Earth-fixed (ECEF) coordinates** are Cartesian meters from
//! the geocenter, rotating with the Earth.
//!
//! # WGS84 Ellipsoid Parameters
//!
//! - Semi-major axis (equatorial radius): 6,378,137.0 m
//! - Flattening: 1/298.257223563
//! - First eccentricity squared: ~0.00669438
//!
//! [`Location::to_geocentric_meters`] returns the cylindrical pair `(u, v)`: distance
//! from the rotation axis and distance from the equatorial plane.
//! [`Location::to_ecef`] combines it with longitude: `x = u cos λ`, `y = u sin λ`, `z = v`.

use crate::constants::{WGS84_FLATTENING, WGS84_SEMI_MAJOR_AXIS};
use crate::errors::{AstroError, AstroResult, MathErrorKind};
use crate::Vector3;

use super::Location;

impl Location {
    /// Converts geodetic coordinates to geocentric cylindrical coordinates in meters.
    ///
    /// ```
    /// use celestial_core::Location;
    ///
    /// let equator = Location::from_degrees(0.0, 0.0, 0.0)?;
    /// let (u, v) = equator.to_geocentric_meters()?;
    /// assert!((u - 6_378_137.0).abs() < 1e-6);
    /// assert!(v.abs() < 1e-9);
    /// # Ok::<(), celestial_core::AstroError>(())
    /// ```
    pub fn to_geocentric_meters(&self) -> AstroResult<(f64, f64)> {
        let (phi_sin, phi_cos) = libm::sincos(self.latitude);

        let axis_ratio = 1.0 - WGS84_FLATTENING;
        let axis_ratio_sq = axis_ratio * axis_ratio;

        let norm_sq = phi_cos * phi_cos + axis_ratio_sq * phi_sin * phi_sin;
        if norm_sq <= f64::EPSILON {
            return Err(AstroError::math_error(
                "geocentric_conversion",
                MathErrorKind::DivisionByZero,
                "Latitude too close to critical value causing division by zero",
            ));
        }

        let prime_vertical_radius = WGS84_SEMI_MAJOR_AXIS / libm::sqrt(norm_sq);

        let u = (prime_vertical_radius + self.height) * phi_cos;
        let v = (axis_ratio_sq * prime_vertical_radius + self.height) * phi_sin;

        Ok((u, v))
    }

    /// Converts the location to an earth-fixed Cartesian position in meters.
    ///
    /// ```
    /// use celestial_core::Location;
    ///
    /// let site = Location::from_degrees(45.0, 90.0, 0.0)?.to_ecef()?;
    /// assert!(site.x.abs() < 1e-6);
    /// assert!(site.y > 4.5e6 && site.z > 4.4e6);
    /// # Ok::<(), celestial_core::AstroError>(())
    /// ```
    pub fn to_ecef(&self) -> AstroResult<Vector3> {
        let (u, v) = self.to_geocentric_meters()?;
        let (sin_lon, cos_lon) = libm::sincos(self.longitude);
        Ok(Vector3::new(u * cos_lon, u * sin_lon, v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::assert_ulp_le;

    #[test]
    fn test_equator_prime_meridian() {
        let site = Location::from_degrees(0.0, 0.0, 0.0)
            .unwrap()
            .to_ecef()
            .unwrap();
        assert_ulp_le(site.x, WGS84_SEMI_MAJOR_AXIS, 1, "x at equator");
        assert_eq!(site.y, 0.0);
        assert_eq!(site.z, 0.0);
    }

    #[test]
    fn test_north_pole() {
        let loc = Location::from_degrees(90.0, 0.0, 0.0).unwrap();
        let (u, v) = loc.to_geocentric_meters().unwrap();
        assert!(u.abs() < 1e-9);
        assert_ulp_le(v, 6356752.314245179, 4, "v at pole");
    }

    #[test]
    fn test_height_moves_along_normal() {
        let low = Location::from_degrees(30.0, 40.0, 0.0).unwrap();
        let high = Location::from_degrees(30.0, 40.0, 1000.0).unwrap();
        let delta = high.to_ecef().unwrap() - low.to_ecef().unwrap();
        assert!((delta.magnitude() - 1000.0).abs() < 1e-6);
    }

    #[test]
    fn test_mid_latitude_is_oblate() {
        let site = Location::from_degrees(45.0, 0.0, 0.0)
            .unwrap()
            .to_ecef()
            .unwrap();
        assert!(site.x > site.z, "x={} z={}", site.x, site.z);
        assert!((site.x - site.z).abs() < 100_000.0);
    }

    #[test]
    fn test_southern_hemisphere() {
        let site = Location::from_degrees(-45.0, 180.0, 0.0)
            .unwrap()
            .to_ecef()
            .unwrap();
        assert!(site.z < 0.0);
        assert!(site.x < 0.0);
    }
}
