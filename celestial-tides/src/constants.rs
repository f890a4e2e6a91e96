//! Physical constants and Love/Shida numbers used by the tide models.

/// Earth gravitational constant GM (m³/s²).
pub const GM_EARTH: f64 = 3.986004415e14;

/// Sun gravitational constant GM (m³/s²).
pub const GM_SUN: f64 = 1.327124e20;

/// Moon gravitational constant GM (m³/s²).
pub const GM_MOON: f64 = 4.902801e12;

/// Earth equatorial radius (m).
pub const EARTH_RADIUS: f64 = 6_378_137.0;

/// Degree-3 Love number.
pub const H3: f64 = 0.292;

/// Degree-3 Shida number.
pub const L3: f64 = 0.015;

/// Nominal degree-2 Love number, before the latitude dependence.
pub const H2_NOMINAL: f64 = 0.6078;

/// Nominal degree-2 Shida number, before the latitude dependence.
pub const L2_NOMINAL: f64 = 0.0847;

/// MJD of 1975-01-01 0h, epoch of the ocean loading astronomical arguments.
pub const MJD_1975: f64 = 42413.0;

/// MJD of 2000-01-01 0h, epoch of the IERS mean pole polynomials.
pub const MJD_2000: f64 = 51544.0;
