//! Sun and Moon positions needed by the solid earth tide.

use crate::erp::EarthRotationParameters;
use celestial_core::Vector3;
use celestial_time::UTC;

/// Earth-fixed Sun and Moon positions (meters) with Greenwich mean sidereal time
/// (radians) at one epoch.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SunMoonPosition {
    pub sun: Vector3,
    pub moon: Vector3,
    pub gmst: f64,
}

impl SunMoonPosition {
    pub fn new(sun: Vector3, moon: Vector3, gmst: f64) -> Self {
        Self { sun, moon, gmst }
    }
}

/// Provider of Sun/Moon positions in the earth-fixed frame.
///
/// Implementations apply the supplied Earth rotation parameters when rotating
/// from the celestial to the terrestrial frame.
pub trait Ephemeris {
    fn sun_moon(&self, utc: &UTC, erp: &EarthRotationParameters) -> SunMoonPosition;
}

/// Positions that do not depend on the epoch. Useful for fixed geometries.
impl Ephemeris for SunMoonPosition {
    fn sun_moon(&self, _utc: &UTC, _erp: &EarthRotationParameters) -> SunMoonPosition {
        *self
    }
}

impl<E: Ephemeris + ?Sized> Ephemeris for &E {
    fn sun_moon(&self, utc: &UTC, erp: &EarthRotationParameters) -> SunMoonPosition {
        (**self).sun_moon(utc, erp)
    }
}
