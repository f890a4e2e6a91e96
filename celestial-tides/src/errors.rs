use celestial_core::AstroError;
use thiserror::Error;

pub type TideResult<T> = Result<T, TideError>;

#[derive(Debug, Error)]
pub enum TideError {
    #[error("Ocean loading data parsing failed: {message}")]
    ParsingError { message: String },

    #[error("Station {station} not found in ocean loading data")]
    StationNotFound { station: String },

    #[error("I/O error on {path}: {message}")]
    Io { path: String, message: String },

    #[error("Earth rotation parameters not available: {message}")]
    DataUnavailable { message: String },

    #[error("Invalid site: {message}")]
    InvalidSite { message: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl TideError {
    pub fn parsing_error(message: impl Into<String>) -> Self {
        Self::ParsingError {
            message: message.into(),
        }
    }

    pub fn station_not_found(station: impl Into<String>) -> Self {
        Self::StationNotFound {
            station: station.into(),
        }
    }

    pub fn io(path: impl AsRef<std::path::Path>, error: &std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().display().to_string(),
            message: error.to_string(),
        }
    }

    pub fn data_unavailable(message: impl Into<String>) -> Self {
        Self::DataUnavailable {
            message: message.into(),
        }
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}

impl From<AstroError> for TideError {
    fn from(error: AstroError) -> Self {
        Self::InvalidSite {
            message: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_station_not_found_names_station() {
        let err = TideError::station_not_found("ONSA");
        assert_eq!(err.to_string(), "Station ONSA not found in ocean loading data");
    }

    #[test]
    fn test_io_error_keeps_path() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = TideError::io("/tmp/ocean.blq", &io);
        let text = err.to_string();
        assert!(text.contains("/tmp/ocean.blq"));
        assert!(text.contains("missing"));
    }

    #[test]
    fn test_from_core_error() {
        let core = AstroError::math_error(
            "location_validation",
            celestial_core::MathErrorKind::OutOfRange,
            "bad latitude",
        );
        let err: TideError = core.into();
        assert!(matches!(err, TideError::InvalidSite { .. }));
        assert!(err.to_string().contains("bad latitude"));
    }
}
