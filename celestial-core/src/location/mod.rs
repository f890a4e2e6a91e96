//! Station location on Earth.
//!
//! - [`Location`]: WGS84 geodetic coordinates (latitude, longitude, height)
//! - [`geodesy`]: geodetic ↔ earth-fixed Cartesian conversions

pub mod site;
pub mod geodesy;

pub use site::Location;
