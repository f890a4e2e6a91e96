//! The eleven ocean tide constituents and their astronomical arguments.
//!
//! Each argument is `ω·t + a·H0 + b·S0 + c·P0 + d·2π`, with `t` the seconds of
//! the UT1 day and H0, S0, P0 the mean longitudes of the Sun, the Moon and the
//! lunar perigee at 0h UT1.

use crate::constants::MJD_1975;
use celestial_core::constants::{DEG_TO_RAD, TWOPI};
use celestial_time::UT1;

/// A tidal constituent: angular speed and multipliers of (H0, S0, P0, 2π).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constituent {
    pub name: &'static str,
    /// Angular speed (rad/s).
    pub speed: f64,
    pub multipliers: [f64; 4],
}

pub const CONSTITUENT_COUNT: usize = 11;

/// Constituents in the order ocean loading providers tabulate them.
#[rustfmt::skip]
pub const CONSTITUENTS: [Constituent; CONSTITUENT_COUNT] = [
    Constituent { name: "M2", speed: 1.40519e-4, multipliers: [2.0, -2.0, 0.0, 0.0] },
    Constituent { name: "S2", speed: 1.45444e-4, multipliers: [0.0, 0.0, 0.0, 0.0] },
    Constituent { name: "N2", speed: 1.37880e-4, multipliers: [2.0, -3.0, 1.0, 0.0] },
    Constituent { name: "K2", speed: 1.45842e-4, multipliers: [2.0, 0.0, 0.0, 0.0] },
    Constituent { name: "K1", speed: 0.72921e-4, multipliers: [1.0, 0.0, 0.0, 0.25] },
    Constituent { name: "O1", speed: 0.67598e-4, multipliers: [1.0, -2.0, 0.0, -0.25] },
    Constituent { name: "P1", speed: 0.72523e-4, multipliers: [-1.0, 0.0, 0.0, -0.25] },
    Constituent { name: "Q1", speed: 0.64959e-4, multipliers: [1.0, -3.0, 1.0, -0.25] },
    Constituent { name: "Mf", speed: 0.53234e-5, multipliers: [0.0, 2.0, 0.0, 0.0] },
    Constituent { name: "Mm", speed: 0.26392e-5, multipliers: [0.0, 1.0, -1.0, 0.0] },
    Constituent { name: "Ssa", speed: 0.03982e-5, multipliers: [2.0, 0.0, 0.0, 0.0] },
];

/// Mean longitudes at 0h UT1 of the epoch's day, plus its seconds of day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AstronomicalArguments {
    /// Seconds since 0h UT1.
    pub seconds_of_day: f64,
    /// Mean longitude of the Sun (rad).
    pub sun: f64,
    /// Mean longitude of the Moon (rad).
    pub moon: f64,
    /// Mean longitude of the lunar perigee (rad).
    pub perigee: f64,
}

impl AstronomicalArguments {
    pub fn at(ut1: &UT1) -> Self {
        let (mjd, seconds_of_day) = ut1.to_julian_date().mjd_day_and_seconds();
        let days = mjd - MJD_1975 + 1.0;
        let t = (27392.500528 + 1.000000035 * days) / 36525.0;
        let t2 = t * t;
        let t3 = t2 * t;

        let h0 = (279.69668 + 36000.768930485 * t + 3.03e-4 * t2) * DEG_TO_RAD;
        let s0 =
            (270.434358 + 481267.88314137 * t - 0.001133 * t2 + 1.9e-6 * t3) * DEG_TO_RAD;
        let p0 =
            (334.329653 + 4069.0340329577 * t - 0.010325 * t2 - 1.2e-5 * t3) * DEG_TO_RAD;

        Self {
            seconds_of_day,
            sun: h0,
            moon: s0,
            perigee: p0,
        }
    }

    /// Argument of `constituent` (radians, not range-reduced).
    pub fn argument(&self, constituent: &Constituent) -> f64 {
        let [a, b, c, d] = constituent.multipliers;
        constituent.speed * self.seconds_of_day
            + a * self.sun
            + b * self.moon
            + c * self.perigee
            + d * TWOPI
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use celestial_time::scales::ut1::ut1_from_calendar;

    fn index_of(name: &str) -> usize {
        CONSTITUENTS.iter().position(|c| c.name == name).unwrap()
    }

    #[test]
    fn test_table_order() {
        let names: Vec<&str> = CONSTITUENTS.iter().map(|c| c.name).collect();
        assert_eq!(
            names,
            ["M2", "S2", "N2", "K2", "K1", "O1", "P1", "Q1", "Mf", "Mm", "Ssa"]
        );
    }

    #[test]
    fn test_speeds_and_multipliers() {
        #[rustfmt::skip]
        let expected: [(&str, f64, [f64; 4]); CONSTITUENT_COUNT] = [
            ("M2", 1.40519e-4, [2.0, -2.0, 0.0, 0.0]),
            ("S2", 1.45444e-4, [0.0, 0.0, 0.0, 0.0]),
            ("N2", 1.37880e-4, [2.0, -3.0, 1.0, 0.0]),
            ("K2", 1.45842e-4, [2.0, 0.0, 0.0, 0.0]),
            ("K1", 0.72921e-4, [1.0, 0.0, 0.0, 0.25]),
            ("O1", 0.67598e-4, [1.0, -2.0, 0.0, -0.25]),
            ("P1", 0.72523e-4, [-1.0, 0.0, 0.0, -0.25]),
            ("Q1", 0.64959e-4, [1.0, -3.0, 1.0, -0.25]),
            ("Mf", 0.53234e-5, [0.0, 2.0, 0.0, 0.0]),
            ("Mm", 0.26392e-5, [0.0, 1.0, -1.0, 0.0]),
            ("Ssa", 0.03982e-5, [2.0, 0.0, 0.0, 0.0]),
        ];
        for (constituent, (name, speed, multipliers)) in CONSTITUENTS.iter().zip(expected) {
            assert_eq!(constituent.name, name);
            assert_eq!(constituent.speed, speed, "{} speed", name);
            assert_eq!(constituent.multipliers, multipliers, "{} multipliers", name);
        }
    }

    #[test]
    fn test_s2_argument_is_time_of_day() {
        let s2 = &CONSTITUENTS[index_of("S2")];
        let midnight = AstronomicalArguments::at(&ut1_from_calendar(2018, 3, 14, 0, 0, 0.0));
        assert_eq!(midnight.seconds_of_day, 0.0);
        assert_eq!(midnight.argument(s2), 0.0);

        let six = AstronomicalArguments::at(&ut1_from_calendar(2018, 3, 14, 6, 0, 0.0));
        assert!((six.argument(s2) - 1.45444e-4 * 21_600.0).abs() < 1e-9);
    }

    #[test]
    fn test_mean_longitudes_at_1975() {
        // days = 1 at 1975-01-01: t = (27392.500528 + 1.000000035) / 36525
        let args = AstronomicalArguments::at(&ut1_from_calendar(1975, 1, 1, 0, 0, 0.0));
        let t = (27392.500528 + 1.000000035) / 36525.0;
        let h0 = (279.69668 + 36000.768930485 * t + 3.03e-4 * t * t) * DEG_TO_RAD;
        assert!((args.sun - h0).abs() < 1e-12);
        // t is about 0.75 centuries past 1900.0, the Sun's mean longitude advances ~27000 deg
        assert!(args.sun > 27_000.0 * DEG_TO_RAD && args.sun < 28_000.0 * DEG_TO_RAD);
    }

    #[test]
    fn test_k1_and_o1_quarter_cycle_offsets() {
        let args = AstronomicalArguments {
            seconds_of_day: 0.0,
            sun: 0.0,
            moon: 0.0,
            perigee: 0.0,
        };
        assert!((args.argument(&CONSTITUENTS[index_of("K1")]) - TWOPI / 4.0).abs() < 1e-15);
        assert!((args.argument(&CONSTITUENTS[index_of("O1")]) + TWOPI / 4.0).abs() < 1e-15);
        assert!((args.argument(&CONSTITUENTS[index_of("P1")]) + TWOPI / 4.0).abs() < 1e-15);
    }
}
