//! Ocean tide loading.
//!
//! The load of the ocean tides deforms the crust near coasts by up to several
//! centimeters. Displacements are synthesized from per-station amplitudes and
//! phases of eleven constituents, as distributed by ocean loading services
//! (see [`blq`] for the file format).
//!
//! Coefficients are kept in the provider's axis convention: radial, west and
//! south. [`ocean_loading_tide`] maps them to the local frame as
//! `east = -west`, `north = -south`, `up = radial`.

pub mod blq;
pub mod constituents;

pub use constituents::{AstronomicalArguments, Constituent, CONSTITUENTS, CONSTITUENT_COUNT};

use crate::enu::EnuDisplacement;
use crate::errors::{TideError, TideResult};
use celestial_core::constants::DEG_TO_RAD;
use celestial_time::UT1;

/// Values per constituent: amplitudes (radial, west, south) in meters, then
/// phases (radial, west, south) in degrees.
pub const VALUES_PER_CONSTITUENT: usize = 6;

/// Per-station ocean loading amplitudes and phases.
///
/// Row `i` is constituent [`CONSTITUENTS`]`[i]`; columns are amplitude radial,
/// west, south (m) and phase radial, west, south (deg).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OceanLoadingCoefficients {
    rows: [[f64; VALUES_PER_CONSTITUENT]; CONSTITUENT_COUNT],
}

impl OceanLoadingCoefficients {
    pub fn new(rows: [[f64; VALUES_PER_CONSTITUENT]; CONSTITUENT_COUNT]) -> Self {
        Self { rows }
    }

    pub fn zeros() -> Self {
        Self::default()
    }

    /// Builds coefficients from 66 values laid out constituent by constituent
    /// (`values[j + i * 6]` is value `j` of constituent `i`).
    pub fn from_flat(values: &[f64]) -> TideResult<Self> {
        let expected = VALUES_PER_CONSTITUENT * CONSTITUENT_COUNT;
        if values.len() != expected {
            return Err(TideError::parsing_error(format!(
                "expected {} ocean loading values, got {}",
                expected,
                values.len()
            )));
        }
        let mut rows = [[0.0; VALUES_PER_CONSTITUENT]; CONSTITUENT_COUNT];
        for (row, chunk) in rows
            .iter_mut()
            .zip(values.chunks_exact(VALUES_PER_CONSTITUENT))
        {
            row.copy_from_slice(chunk);
        }
        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[[f64; VALUES_PER_CONSTITUENT]; CONSTITUENT_COUNT] {
        &self.rows
    }

    /// Flattened layout accepted by [`from_flat`](Self::from_flat).
    pub fn to_flat(&self) -> Vec<f64> {
        self.rows.iter().flatten().copied().collect()
    }

    /// Amplitudes (radial, west, south) of constituent `i` in meters.
    pub fn amplitudes(&self, i: usize) -> [f64; 3] {
        let r = &self.rows[i];
        [r[0], r[1], r[2]]
    }

    /// Phases (radial, west, south) of constituent `i` in degrees.
    pub fn phases(&self, i: usize) -> [f64; 3] {
        let r = &self.rows[i];
        [r[3], r[4], r[5]]
    }

    pub(crate) fn set(&mut self, constituent: usize, value: usize, v: f64) {
        self.rows[constituent][value] = v;
    }
}

/// Ocean loading displacement in the local frame at `ut1`.
///
/// ```
/// use celestial_tides::ocean::{ocean_loading_tide, OceanLoadingCoefficients};
/// use celestial_time::scales::ut1::ut1_from_calendar;
///
/// let mut rows = [[0.0; 6]; 11];
/// rows[1] = [0.02, 0.0, 0.0, 0.0, 0.0, 0.0]; // S2, radial only
/// let enu = ocean_loading_tide(
///     &ut1_from_calendar(2020, 6, 1, 0, 0, 0.0),
///     &OceanLoadingCoefficients::new(rows),
/// );
/// assert_eq!(enu.up, 0.02);
/// ```
pub fn ocean_loading_tide(ut1: &UT1, coefficients: &OceanLoadingCoefficients) -> EnuDisplacement {
    let args = AstronomicalArguments::at(ut1);

    // radial, west, south
    let mut dp = [0.0; 3];
    for (i, constituent) in CONSTITUENTS.iter().enumerate() {
        let angle = args.argument(constituent);
        let amplitudes = coefficients.amplitudes(i);
        let phases = coefficients.phases(i);
        for j in 0..3 {
            dp[j] += amplitudes[j] * libm::cos(angle - phases[j] * DEG_TO_RAD);
        }
    }

    let enu = EnuDisplacement::new(-dp[1], -dp[2], dp[0]);
    log::trace!("ocean loading tide: {}", enu);
    enu
}

#[cfg(test)]
mod tests {
    use super::*;
    use celestial_time::scales::ut1::ut1_from_calendar;

    fn s2_only(values: [f64; 6]) -> OceanLoadingCoefficients {
        let mut rows = [[0.0; 6]; 11];
        rows[1] = values;
        OceanLoadingCoefficients::new(rows)
    }

    #[test]
    fn test_zero_coefficients_give_zero() {
        for hour in [0, 5, 13, 23] {
            let ut1 = ut1_from_calendar(2021, 2, 3, hour, 17, 42.5);
            let enu = ocean_loading_tide(&ut1, &OceanLoadingCoefficients::zeros());
            assert_eq!(enu, EnuDisplacement::zeros());
        }
    }

    #[test]
    fn test_s2_phase_at_midnight() {
        let ut1 = ut1_from_calendar(2020, 6, 1, 0, 0, 0.0);
        let coeffs = s2_only([0.02, 0.01, 0.005, 30.0, 0.0, 180.0]);
        let enu = ocean_loading_tide(&ut1, &coeffs);
        assert!((enu.up - 0.02 * libm::cos(30.0 * DEG_TO_RAD)).abs() < 1e-15);
        assert!((enu.up - 0.0173205).abs() < 1e-7);
        // west and south flip sign into east and north
        assert!((enu.east + 0.01).abs() < 1e-15);
        assert!((enu.north - 0.005).abs() < 1e-15);
    }

    #[test]
    fn test_s2_period_is_half_day() {
        let coeffs = s2_only([0.01, 0.0, 0.0, 0.0, 0.0, 0.0]);
        let t0 = ocean_loading_tide(&ut1_from_calendar(2020, 6, 1, 1, 0, 0.0), &coeffs);
        let t1 = ocean_loading_tide(&ut1_from_calendar(2020, 6, 1, 13, 0, 0.0), &coeffs);
        // S2 speed is 2π/12h to five digits
        assert!((t0.up - t1.up).abs() < 1e-5);
    }

    #[test]
    fn test_deterministic() {
        let flat: Vec<f64> = (0..66).map(|k| 0.001 * (k as f64 + 1.0)).collect();
        let coeffs = OceanLoadingCoefficients::from_flat(&flat).unwrap();
        let ut1 = ut1_from_calendar(2016, 12, 31, 23, 59, 59.0);
        let a = ocean_loading_tide(&ut1, &coeffs);
        let b = ocean_loading_tide(&ut1, &coeffs);
        assert_eq!(a.east.to_bits(), b.east.to_bits());
        assert_eq!(a.north.to_bits(), b.north.to_bits());
        assert_eq!(a.up.to_bits(), b.up.to_bits());
    }

    #[test]
    fn test_from_flat_layout() {
        let flat: Vec<f64> = (0..66).map(|k| k as f64).collect();
        let coeffs = OceanLoadingCoefficients::from_flat(&flat).unwrap();
        assert_eq!(coeffs.amplitudes(0), [0.0, 1.0, 2.0]);
        assert_eq!(coeffs.phases(0), [3.0, 4.0, 5.0]);
        assert_eq!(coeffs.amplitudes(10), [60.0, 61.0, 62.0]);
        assert_eq!(coeffs.to_flat(), flat);
    }

    #[test]
    fn test_from_flat_rejects_wrong_length() {
        let err = OceanLoadingCoefficients::from_flat(&[0.0; 33]).unwrap_err();
        assert!(err.to_string().contains("expected 66"));
    }
}
