//! Total tidal displacement of a station.

use crate::enu::SiteFrame;
use crate::ephemeris::Ephemeris;
use crate::erp::{EarthRotationParameters, EarthRotationSource};
use crate::ocean::{ocean_loading_tide, OceanLoadingCoefficients};
use crate::options::CorrectionOptions;
use crate::pole::pole_tide;
use crate::solid::solid_earth_tide;
use celestial_core::Vector3;
use celestial_time::{ToUT1WithDUT1, UTC};

/// Earth-fixed displacement (meters) of the station at `site` at epoch `utc`.
///
/// Each correction selected in `options` is added when its inputs are present:
///
/// - solid earth tide, with Sun/Moon positions and GMST from `ephemeris`
/// - ocean loading, when `ocean` coefficients are given
/// - pole tide, when an `erp` source is given
///
/// Missing inputs silently drop the matching term. A site at the geocenter gets
/// the zero vector. When the `erp` source has no data for the epoch a warning is
/// logged and zero parameters are used.
///
/// ```
/// use celestial_core::Vector3;
/// use celestial_time::scales::utc::utc_from_calendar;
/// use celestial_tides::{tidal_displacement, CorrectionOptions, SunMoonPosition};
///
/// let ephemeris = SunMoonPosition::new(
///     Vector3::new(0.0, 1.495978707e11, 0.0),
///     Vector3::new(3.844e8, 0.0, 0.0),
///     0.0,
/// );
/// let site = Vector3::new(6_378_137.0, 0.0, 0.0);
/// let utc = utc_from_calendar(2020, 1, 1, 0, 0, 0.0);
///
/// let dr = tidal_displacement(&ephemeris, &utc, &site, CorrectionOptions::from_bits(1), None, None);
/// assert!(dr.x > 0.1 && dr.x < 0.3);
/// ```
pub fn tidal_displacement<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    utc: &UTC,
    site: &Vector3,
    options: CorrectionOptions,
    erp: Option<&dyn EarthRotationSource>,
    ocean: Option<&OceanLoadingCoefficients>,
) -> Vector3 {
    let erp_values = match erp {
        Some(source) => source.parameters_at(utc).unwrap_or_else(|e| {
            log::warn!("no earth rotation parameters at {}: {}", utc, e);
            EarthRotationParameters::default()
        }),
        None => EarthRotationParameters::default(),
    };
    let ut1 = utc.to_ut1_with_dut1(erp_values.ut1_utc);

    let Some(frame) = SiteFrame::from_ecef(site) else {
        return Vector3::zeros();
    };

    let mut dr = Vector3::zeros();

    if options.solid {
        let bodies = ephemeris.sun_moon(utc, &erp_values);
        dr += solid_earth_tide(
            &frame,
            &bodies.sun,
            &bodies.moon,
            bodies.gmst,
            options.remove_permanent,
        );
    }

    if options.ocean_loading {
        if let Some(coefficients) = ocean {
            dr += ocean_loading_tide(&ut1, coefficients).to_ecef(&frame.rotation);
        }
    }

    if options.pole && erp.is_some() {
        dr += pole_tide(frame.latitude, frame.longitude, &ut1, &erp_values).to_ecef(&frame.rotation);
    }

    log::debug!(
        "tidal displacement at {} ({}): dr=({:.4}, {:.4}, {:.4}) m",
        utc,
        options,
        dr.x,
        dr.y,
        dr.z
    );
    dr
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enu::EnuDisplacement;
    use crate::ephemeris::SunMoonPosition;
    use crate::errors::{TideError, TideResult};
    use celestial_core::constants::ARCSEC_TO_RAD;
    use celestial_time::scales::utc::utc_from_calendar;

    struct NoData;

    impl EarthRotationSource for NoData {
        fn parameters_at(&self, _utc: &UTC) -> TideResult<EarthRotationParameters> {
            Err(TideError::data_unavailable("table ends before epoch"))
        }
    }

    fn ephemeris() -> SunMoonPosition {
        SunMoonPosition::new(
            Vector3::new(0.0, 1.495978707e11, 0.0),
            Vector3::new(3.844e8, 0.0, 0.0),
            0.4,
        )
    }

    fn site() -> Vector3 {
        Vector3::new(4_510_000.0, 120_000.0, 4_480_000.0)
    }

    #[test]
    fn test_zero_site_returns_zero() {
        let utc = utc_from_calendar(2020, 1, 1, 0, 0, 0.0);
        let erp = EarthRotationParameters::new(1e-6, 1e-6, 0.1, 0.0);
        let ocean = OceanLoadingCoefficients::new([[0.01, 0.01, 0.01, 10.0, 20.0, 30.0]; 11]);
        let dr = tidal_displacement(
            &ephemeris(),
            &utc,
            &Vector3::zeros(),
            CorrectionOptions::all(),
            Some(&erp),
            Some(&ocean),
        );
        assert_eq!(dr, Vector3::zeros());
    }

    #[test]
    fn test_missing_ocean_coefficients_drop_term() {
        let utc = utc_from_calendar(2020, 1, 1, 0, 0, 0.0);
        let dr = tidal_displacement(
            &ephemeris(),
            &utc,
            &site(),
            CorrectionOptions::from_bits(2),
            None,
            None,
        );
        assert_eq!(dr, Vector3::zeros());
    }

    #[test]
    fn test_pole_tide_needs_erp_source() {
        let utc = utc_from_calendar(2020, 1, 1, 0, 0, 0.0);
        let options = CorrectionOptions::from_bits(4);
        let without = tidal_displacement(&ephemeris(), &utc, &site(), options, None, None);
        assert_eq!(without, Vector3::zeros());

        let erp = EarthRotationParameters::new(0.2 * ARCSEC_TO_RAD, 0.4 * ARCSEC_TO_RAD, 0.0, 0.0);
        let with = tidal_displacement(&ephemeris(), &utc, &site(), options, Some(&erp), None);
        assert!(with.magnitude() > 1e-4 && with.magnitude() < 0.05);
    }

    #[test]
    fn test_failing_erp_source_uses_zero_parameters() {
        let utc = utc_from_calendar(2020, 1, 1, 0, 0, 0.0);
        let options = CorrectionOptions::from_bits(4);
        let failing = tidal_displacement(&ephemeris(), &utc, &site(), options, Some(&NoData), None);
        let zero = EarthRotationParameters::default();
        let explicit = tidal_displacement(&ephemeris(), &utc, &site(), options, Some(&zero), None);
        assert_eq!(failing, explicit);
        assert!(failing.magnitude() > 0.0);
    }

    #[test]
    fn test_ut1_offset_reaches_ocean_loading() {
        let utc = utc_from_calendar(2020, 1, 1, 0, 0, 0.0);
        let mut rows = [[0.0; 6]; 11];
        rows[1] = [0.01, 0.0, 0.0, 0.0, 0.0, 0.0];
        let ocean = OceanLoadingCoefficients::new(rows);
        let options = CorrectionOptions::from_bits(2);

        let erp = EarthRotationParameters::new(0.0, 0.0, 0.0, 0.0);
        let shifted = EarthRotationParameters::new(0.0, 0.0, 600.0, 0.0);
        let a = tidal_displacement(&ephemeris(), &utc, &site(), options, Some(&erp), Some(&ocean));
        let b = tidal_displacement(&ephemeris(), &utc, &site(), options, Some(&shifted), Some(&ocean));
        assert!((a - b).magnitude() > 1e-5);
    }

    fn assert_local_components(dr: Vector3, frame: &SiteFrame, expected: EnuDisplacement) {
        assert!((dr.dot(&frame.east()) - expected.east).abs() < 1e-15, "east");
        assert!((dr.dot(&frame.north()) - expected.north).abs() < 1e-15, "north");
        assert!((dr.dot(&frame.up()) - expected.up).abs() < 1e-15, "up");
    }

    #[test]
    fn test_local_terms_rotate_into_site_frame() {
        let site = celestial_core::Location::from_degrees(-33.9, 151.2, 40.0)
            .unwrap()
            .to_ecef()
            .unwrap();
        let frame = SiteFrame::from_ecef(&site).unwrap();
        let utc = utc_from_calendar(2021, 4, 9, 17, 45, 0.0);
        let erp = EarthRotationParameters::new(0.21 * ARCSEC_TO_RAD, 0.43 * ARCSEC_TO_RAD, -0.3, 0.0);
        let ut1 = utc.to_ut1_with_dut1(erp.ut1_utc);

        let pole = tidal_displacement(
            &ephemeris(),
            &utc,
            &site,
            CorrectionOptions::from_bits(4),
            Some(&erp),
            None,
        );
        let expected = pole_tide(frame.latitude, frame.longitude, &ut1, &erp);
        assert!(expected.east.abs() > 1e-4 && expected.up.abs() > 1e-4);
        assert_local_components(pole, &frame, expected);

        let flat: Vec<f64> = (0..66)
            .map(|k| if k % 6 < 3 { 0.002 } else { 15.0 * k as f64 })
            .collect();
        let coefficients = OceanLoadingCoefficients::from_flat(&flat).unwrap();
        let ocean = tidal_displacement(
            &ephemeris(),
            &utc,
            &site,
            CorrectionOptions::from_bits(2),
            Some(&erp),
            Some(&coefficients),
        );
        let expected = ocean_loading_tide(&ut1, &coefficients);
        assert!(expected.east.abs() > 1e-5 && expected.north.abs() > 1e-5);
        assert_local_components(ocean, &frame, expected);
    }
}
