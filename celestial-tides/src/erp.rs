//! Earth rotation parameters and the sources that supply them.

use crate::errors::TideResult;
use celestial_time::UTC;

/// Earth rotation parameters at one epoch.
///
/// Pole coordinates are in radians, `ut1_utc` in seconds, `lod` in seconds per day.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EarthRotationParameters {
    pub xp: f64,
    pub yp: f64,
    pub ut1_utc: f64,
    /// Excess length of day. The tide models do not read it; it reaches
    /// [`Ephemeris`](crate::Ephemeris) implementations, which receive the full
    /// parameter set when rotating Sun and Moon into the earth-fixed frame.
    pub lod: f64,
}

impl EarthRotationParameters {
    pub fn new(xp: f64, yp: f64, ut1_utc: f64, lod: f64) -> Self {
        Self {
            xp,
            yp,
            ut1_utc,
            lod,
        }
    }

    /// Builds parameters from pole coordinates in arcseconds, as tabulated by the IERS.
    pub fn from_arcseconds(xp_arcsec: f64, yp_arcsec: f64, ut1_utc: f64, lod: f64) -> Self {
        use celestial_core::constants::ARCSEC_TO_RAD;
        Self::new(
            xp_arcsec * ARCSEC_TO_RAD,
            yp_arcsec * ARCSEC_TO_RAD,
            ut1_utc,
            lod,
        )
    }
}

/// Anything that can give Earth rotation parameters for an epoch, typically an
/// interpolator over a loaded IERS table.
pub trait EarthRotationSource {
    fn parameters_at(&self, utc: &UTC) -> TideResult<EarthRotationParameters>;
}

/// A fixed set of parameters is a source valid at every epoch.
impl EarthRotationSource for EarthRotationParameters {
    fn parameters_at(&self, _utc: &UTC) -> TideResult<EarthRotationParameters> {
        Ok(*self)
    }
}
