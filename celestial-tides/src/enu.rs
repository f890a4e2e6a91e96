//! Site frame and local east/north/up displacements.
//!
//! Tide models work partly in the earth-fixed frame and partly in the local frame
//! of the station. [`SiteFrame`] holds what they need about the site: its
//! latitude, longitude and the ECEF → ENU rotation. Angles are the spherical
//! (geocentric) angles of the site vector, so the up axis points away from the
//! geocenter.

use crate::errors::TideResult;
use celestial_core::{Location, RotationMatrix3, Vector3};
use std::fmt;

/// Earth-fixed position of a station given by WGS84 latitude and longitude
/// (degrees) and ellipsoidal height (meters).
///
/// ```
/// use celestial_tides::enu::site_position;
///
/// let site = site_position(0.0, 0.0, 0.0)?;
/// assert_eq!(site.x, 6_378_137.0);
/// assert!(site_position(91.0, 0.0, 0.0).is_err());
/// # Ok::<(), celestial_tides::TideError>(())
/// ```
pub fn site_position(latitude_deg: f64, longitude_deg: f64, height: f64) -> TideResult<Vector3> {
    let location = Location::from_degrees(latitude_deg, longitude_deg, height)?;
    Ok(location.to_ecef()?)
}

/// Orientation of a station relative to the earth-fixed frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SiteFrame {
    /// Spherical latitude (radians).
    pub latitude: f64,
    /// Longitude (radians).
    pub longitude: f64,
    /// ECEF → ENU rotation; rows are the east, north and up unit vectors.
    pub rotation: RotationMatrix3,
}

impl SiteFrame {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            rotation: RotationMatrix3::enu_from_geodetic(latitude, longitude),
        }
    }

    /// Builds the frame of an earth-fixed site position. Returns `None` for the
    /// zero vector, where no direction is defined.
    ///
    /// ```
    /// use celestial_core::Vector3;
    /// use celestial_tides::SiteFrame;
    ///
    /// let frame = SiteFrame::from_ecef(&Vector3::new(0.0, 6_378_137.0, 0.0)).unwrap();
    /// assert_eq!(frame.latitude, 0.0);
    /// assert_eq!(frame.longitude, std::f64::consts::FRAC_PI_2);
    /// assert!(SiteFrame::from_ecef(&Vector3::zeros()).is_none());
    /// ```
    pub fn from_ecef(site: &Vector3) -> Option<Self> {
        if site.magnitude() <= 0.0 {
            return None;
        }
        let (longitude, latitude) = site.to_spherical();
        Some(Self::new(latitude, longitude))
    }

    pub fn east(&self) -> Vector3 {
        self.rotation.east()
    }

    pub fn north(&self) -> Vector3 {
        self.rotation.north()
    }

    pub fn up(&self) -> Vector3 {
        self.rotation.up()
    }
}

/// A displacement in the local frame of a station (meters).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnuDisplacement {
    pub east: f64,
    pub north: f64,
    pub up: f64,
}

impl EnuDisplacement {
    pub fn new(east: f64, north: f64, up: f64) -> Self {
        Self { east, north, up }
    }

    pub fn zeros() -> Self {
        Self::default()
    }

    pub fn to_array(&self) -> [f64; 3] {
        [self.east, self.north, self.up]
    }

    /// Rotates the displacement into the earth-fixed frame (`Mᵀ · enu`).
    pub fn to_ecef(&self, rotation: &RotationMatrix3) -> Vector3 {
        Vector3::from_array(rotation.apply_transpose_to_vector(self.to_array()))
    }

    /// Projects an earth-fixed displacement onto the local axes (`M · v`).
    pub fn from_ecef(displacement: &Vector3, rotation: &RotationMatrix3) -> Self {
        let [east, north, up] = rotation.apply_to_vector(displacement.to_array());
        Self::new(east, north, up)
    }
}

impl fmt::Display for EnuDisplacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "E={:+.4} N={:+.4} U={:+.4} m",
            self.east, self.north, self.up
        )
    }
}
