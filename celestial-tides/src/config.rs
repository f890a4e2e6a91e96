//! Tide correction settings as carried in a processing configuration.
//!
//! ```
//! use celestial_tides::{CorrectionOptions, TideConfig};
//!
//! let config = TideConfig::new(CorrectionOptions::from_bits(1 | 4));
//! assert!(config.ocean_loading().unwrap().is_none());
//! ```

use crate::errors::{TideError, TideResult};
use crate::ocean::blq::read_blq;
use crate::ocean::OceanLoadingCoefficients;
use crate::options::CorrectionOptions;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TideConfig {
    pub options: CorrectionOptions,
    /// BLQ file with ocean loading coefficients.
    pub ocean_loading_file: Option<PathBuf>,
    /// Station name to look up in the BLQ file.
    pub station: Option<String>,
}

impl TideConfig {
    pub fn new(options: CorrectionOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn with_ocean_loading_file(mut self, path: impl Into<PathBuf>, station: impl Into<String>) -> Self {
        self.ocean_loading_file = Some(path.into());
        self.station = Some(station.into());
        self
    }

    /// Loads the station's ocean loading coefficients.
    ///
    /// Returns `Ok(None)` when ocean loading is disabled or no file is configured.
    /// A file without a station name is a configuration error.
    pub fn ocean_loading(&self) -> TideResult<Option<OceanLoadingCoefficients>> {
        if !self.options.ocean_loading {
            return Ok(None);
        }
        let Some(path) = &self.ocean_loading_file else {
            log::debug!("ocean loading enabled without a BLQ file");
            return Ok(None);
        };
        let station = self.station.as_deref().ok_or_else(|| {
            TideError::invalid_config(format!(
                "ocean loading file {} given without a station name",
                path.display()
            ))
        })?;
        read_blq(path, station).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const BLQ: &str = "\
$$ test file
  ZIMM
  .00100 .00200 .00300 .00400 .00500 .00600 .00700 .00800 .00900 .01000 .01100
  .00010 .00020 .00030 .00040 .00050 .00060 .00070 .00080 .00090 .00100 .00110
  .00001 .00002 .00003 .00004 .00005 .00006 .00007 .00008 .00009 .00010 .00011
    10.0   20.0   30.0   40.0   50.0   60.0   70.0   80.0   90.0  100.0  110.0
    -1.0   -2.0   -3.0   -4.0   -5.0   -6.0   -7.0   -8.0   -9.0  -10.0  -11.0
     0.5    1.5    2.5    3.5    4.5    5.5    6.5    7.5    8.5    9.5   10.5
";

    #[test]
    fn test_disabled_ocean_loading_skips_file() {
        let config = TideConfig::new(CorrectionOptions::from_bits(1))
            .with_ocean_loading_file("/nonexistent/ocean.blq", "ZIMM");
        assert!(config.ocean_loading().unwrap().is_none());
    }

    #[test]
    fn test_loads_configured_station() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(BLQ.as_bytes()).unwrap();

        let config = TideConfig::new(CorrectionOptions::all()).with_ocean_loading_file(file.path(), "zimm");
        let coeffs = config.ocean_loading().unwrap().unwrap();
        assert_eq!(coeffs.amplitudes(2), [0.003, 0.0003, 0.00003]);
        assert_eq!(coeffs.phases(10), [110.0, -11.0, 10.5]);
    }

    #[test]
    fn test_file_without_station_is_an_error() {
        let mut config = TideConfig::new(CorrectionOptions::from_bits(2));
        config.ocean_loading_file = Some(PathBuf::from("ocean.blq"));
        let err = config.ocean_loading().unwrap_err();
        assert!(matches!(err, TideError::InvalidConfig { .. }));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_defaults() {
        let config: TideConfig = serde_json::from_str(r#"{"options": {"solid": true}}"#).unwrap();
        assert!(config.options.solid);
        assert!(!config.options.pole);
        assert!(config.ocean_loading_file.is_none());

        let json = serde_json::to_string(&config).unwrap();
        let back: TideConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
