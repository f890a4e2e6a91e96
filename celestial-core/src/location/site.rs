use crate::errors::{AstroError, AstroResult, MathErrorKind};

/// A station on Earth's surface in WGS84 geodetic coordinates.
///
/// Angles are stored in radians; height is meters above the ellipsoid (not sea level).
///
/// ```
/// use celestial_core::Location;
///
/// let onsala = Location::from_degrees(57.3953, 11.9255, 45.0)?;
/// assert!(onsala.latitude > 1.0);
/// # Ok::<(), celestial_core::AstroError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    /// Latitude in radians (positive north)
    pub latitude: f64,
    /// Longitude in radians (positive east)
    pub longitude: f64,
    /// Height above reference ellipsoid in meters
    pub height: f64,
}

impl Location {
    /// Creates a location from radians, rejecting non-finite values and latitudes
    /// beyond the poles. Longitude is accepted as given (no wrapping).
    pub fn new(latitude: f64, longitude: f64, height: f64) -> AstroResult<Self> {
        if !latitude.is_finite() || !longitude.is_finite() || !height.is_finite() {
            return Err(AstroError::math_error(
                "location_validation",
                MathErrorKind::NotFinite,
                "Location components must be finite",
            ));
        }

        if latitude.abs() > std::f64::consts::FRAC_PI_2 {
            return Err(AstroError::math_error(
                "location_validation",
                MathErrorKind::OutOfRange,
                &format!(
                    "Latitude {:.6} rad outside valid range [-π/2, π/2]",
                    latitude
                ),
            ));
        }

        Ok(Self {
            latitude,
            longitude,
            height,
        })
    }

    pub fn from_degrees(lat_deg: f64, lon_deg: f64, height_m: f64) -> AstroResult<Self> {
        if lat_deg.abs() > 90.0 {
            return Err(AstroError::math_error(
                "location_validation",
                MathErrorKind::OutOfRange,
                &format!("Latitude {:.6}° outside valid range [-90, 90]", lat_deg),
            ));
        }

        Self::new(lat_deg.to_radians(), lon_deg.to_radians(), height_m)
    }

    pub fn latitude_degrees(&self) -> f64 {
        self.latitude.to_degrees()
    }

    pub fn longitude_degrees(&self) -> f64 {
        self.longitude.to_degrees()
    }
}
