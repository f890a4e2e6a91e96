//! Geometric building blocks for earth-fixed station computations.
//!
//! `celestial-core` supplies the small amount of linear algebra and geodesy that
//! station-displacement models lean on: 3-D vectors, 3×3 rotation matrices, and
//! WGS84 geodetic locations.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`matrix`] | [`Vector3`] and [`RotationMatrix3`], including the ECEF→ENU rotation |
//! | [`location`] | Geodetic [`Location`] and its earth-fixed Cartesian form |
//! | [`constants`] | WGS84 ellipsoid, angle conversions, epoch constants |
//! | [`errors`] | [`AstroError`] and [`AstroResult`] |
//!
//! # Re-exports
//!
//! ```
//! use celestial_core::{Location, RotationMatrix3, Vector3};
//! use celestial_core::{AstroError, AstroResult, MathErrorKind};
//! ```
//!
//! # Conventions
//!
//! - Angles are radians, distances meters.
//! - Earth-fixed vectors are ECEF (ITRF-like) Cartesian coordinates.
//! - A local-frame rotation stores the east, north and up unit vectors as its rows,
//!   so `m * v` maps ECEF → ENU and `m.transpose() * v` maps ENU → ECEF.

pub mod constants;
pub mod errors;
pub mod location;
pub mod matrix;

pub use errors::{AstroError, AstroResult, MathErrorKind};
pub use location::Location;
pub use matrix::{RotationMatrix3, Vector3};

pub mod test_helpers;
