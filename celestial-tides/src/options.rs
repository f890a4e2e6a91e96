//! Selection of tide corrections.
//!
//! Options travel as a bitmask in most processing configurations:
//!
//! | bit | correction |
//! |-----|------------|
//! | 1 | solid earth tide |
//! | 2 | ocean tide loading |
//! | 4 | pole tide |
//! | 8 | remove permanent deformation from the solid tide |
//!
//! [`CorrectionOptions`] keeps them as named flags. Any combination is valid.
//! Unknown bits are ignored.
//!
//! ```
//! use celestial_tides::CorrectionOptions;
//!
//! let opts = CorrectionOptions::from_bits(1 | 4);
//! assert!(opts.solid && opts.pole && !opts.ocean_loading);
//! assert_eq!(opts.bits(), 5);
//!
//! let parsed: CorrectionOptions = "solid, pole".parse().unwrap();
//! assert_eq!(parsed, opts);
//! ```

use crate::errors::{TideError, TideResult};
use std::fmt;
use std::str::FromStr;

pub const SOLID_TIDE: u32 = 1;
pub const OCEAN_LOADING: u32 = 2;
pub const POLE_TIDE: u32 = 4;
pub const REMOVE_PERMANENT: u32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CorrectionOptions {
    pub solid: bool,
    pub ocean_loading: bool,
    pub pole: bool,
    /// Exclude the permanent (time-invariant) tidal deformation from the solid tide.
    pub remove_permanent: bool,
}

impl CorrectionOptions {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn all() -> Self {
        Self::from_bits(SOLID_TIDE | OCEAN_LOADING | POLE_TIDE | REMOVE_PERMANENT)
    }

    pub fn from_bits(bits: u32) -> Self {
        Self {
            solid: bits & SOLID_TIDE != 0,
            ocean_loading: bits & OCEAN_LOADING != 0,
            pole: bits & POLE_TIDE != 0,
            remove_permanent: bits & REMOVE_PERMANENT != 0,
        }
    }

    pub fn bits(&self) -> u32 {
        let mut bits = 0;
        if self.solid {
            bits |= SOLID_TIDE;
        }
        if self.ocean_loading {
            bits |= OCEAN_LOADING;
        }
        if self.pole {
            bits |= POLE_TIDE;
        }
        if self.remove_permanent {
            bits |= REMOVE_PERMANENT;
        }
        bits
    }

    pub fn with_solid(mut self, enabled: bool) -> Self {
        self.solid = enabled;
        self
    }

    pub fn with_ocean_loading(mut self, enabled: bool) -> Self {
        self.ocean_loading = enabled;
        self
    }

    pub fn with_pole(mut self, enabled: bool) -> Self {
        self.pole = enabled;
        self
    }

    pub fn with_remove_permanent(mut self, enabled: bool) -> Self {
        self.remove_permanent = enabled;
        self
    }

    /// True when no displacement term is selected. `remove_permanent` alone
    /// selects nothing since it only modifies the solid tide.
    pub fn is_empty(&self) -> bool {
        !(self.solid || self.ocean_loading || self.pole)
    }
}

impl From<u32> for CorrectionOptions {
    fn from(bits: u32) -> Self {
        Self::from_bits(bits)
    }
}

impl FromStr for CorrectionOptions {
    type Err = TideError;

    /// Parses a comma separated list of `solid`, `ocean`, `pole`, `permanent`,
    /// or one of `all` / `none`. Case and surrounding whitespace are ignored.
    fn from_str(s: &str) -> TideResult<Self> {
        let mut opts = Self::none();
        for token in s.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            match token.to_ascii_lowercase().as_str() {
                "solid" => opts.solid = true,
                "ocean" | "ocean_loading" => opts.ocean_loading = true,
                "pole" => opts.pole = true,
                "permanent" | "remove_permanent" => opts.remove_permanent = true,
                "all" => opts = Self::all(),
                "none" => opts = Self::none(),
                other => {
                    return Err(TideError::invalid_config(format!(
                        "unknown tide correction '{}'",
                        other
                    )))
                }
            }
        }
        Ok(opts)
    }
}

impl fmt::Display for CorrectionOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = [
            (self.solid, "solid"),
            (self.ocean_loading, "ocean"),
            (self.pole, "pole"),
            (self.remove_permanent, "permanent"),
        ]
        .iter()
        .filter(|(on, _)| *on)
        .map(|(_, name)| *name)
        .collect();

        if names.is_empty() {
            write!(f, "none")
        } else {
            write!(f, "{}", names.join(","))
        }
    }
}
