//! Tidal displacement of ground stations.
//!
//! Precise positioning has to remove the periodic motion of the ground itself.
//! This crate computes it as an earth-fixed correction vector per epoch, summing
//! up to three effects:
//!
//! | Effect | Module | Typical size |
//! |--------|--------|--------------|
//! | Solid earth tide from Sun and Moon | [`solid`] | up to ~0.4 m |
//! | Ocean tide loading | [`ocean`] | a few cm near coasts |
//! | Pole tide from polar motion | [`pole`] | up to ~25 mm |
//!
//! [`tidal_displacement`] combines them according to [`CorrectionOptions`].
//! Sun/Moon positions come from an [`Ephemeris`] implementation and Earth
//! rotation parameters from an [`EarthRotationSource`]; neither is computed here.
//!
//! ```
//! use celestial_core::{Location, Vector3};
//! use celestial_time::scales::utc::utc_from_calendar;
//! use celestial_tides::{tidal_displacement, CorrectionOptions, EarthRotationParameters, SunMoonPosition};
//!
//! let site = Location::from_degrees(45.0, 0.0, 0.0)?.to_ecef()?;
//! let ephemeris = SunMoonPosition::new(
//!     Vector3::new(0.0, 1.495978707e11, 0.0),
//!     Vector3::new(3.844e8, 0.0, 0.0),
//!     0.0,
//! );
//! let erp = EarthRotationParameters::from_arcseconds(0.15, 0.35, -0.2, 0.0);
//!
//! let dr = tidal_displacement(
//!     &ephemeris,
//!     &utc_from_calendar(2020, 3, 1, 12, 0, 0.0),
//!     &site,
//!     CorrectionOptions::from_bits(1 | 4),
//!     Some(&erp),
//!     None,
//! );
//! assert!(dr.magnitude() < 0.6);
//! # Ok::<(), celestial_core::AstroError>(())
//! ```
//!
//! Errors only arise at the edges (reading ocean loading files, configuration,
//! ERP sources); the displacement models themselves never fail.

pub mod config;
pub mod constants;
pub mod displacement;
pub mod enu;
pub mod ephemeris;
pub mod erp;
pub mod errors;
pub mod ocean;
pub mod options;
pub mod pole;
pub mod solid;

pub use config::TideConfig;
pub use displacement::tidal_displacement;
pub use enu::{site_position, EnuDisplacement, SiteFrame};
pub use ephemeris::{Ephemeris, SunMoonPosition};
pub use erp::{EarthRotationParameters, EarthRotationSource};
pub use errors::{TideError, TideResult};
pub use ocean::OceanLoadingCoefficients;
pub use options::CorrectionOptions;
