//! Reader for ocean loading coefficients in BLQ format.
//!
//! BLQ is the format of the Onsala ocean loading service. A record is a station
//! name line followed by six rows of eleven values, one value per constituent:
//!
//! ```text
//! $$ comment lines start with two dollar signs
//!   ONSA
//! $$ ONSA,                  RADI TANG  lon/lat:   11.9255   57.3953   45.000
//!   .00344 .00121 .00078 .00029 .00199 .00106 .00064 .00004 .00070 .00035 .00031
//!   .00086 .00026 .00019 .00007 .00037 .00024 .00012 .00002 .00007 .00004 .00003
//!   .00096 .00028 .00021 .00008 .00042 .00025 .00014 .00002 .00005 .00004 .00003
//!    -64.6  -34.0  -86.8  -35.7  -93.0 -147.7  -97.8 -141.2   10.3    3.8    1.2
//!     84.6  118.5   66.0  120.1   23.4  -57.4   26.4  -89.2  -174.9 -174.1 -177.2
//!     50.3   79.4   33.5   80.4   -5.1  -81.6   -7.8 -103.1    2.2    2.2    1.6
//! ```
//!
//! Rows are amplitude radial, west, south (m) and phase radial, west, south (deg).

use super::{OceanLoadingCoefficients, CONSTITUENT_COUNT, VALUES_PER_CONSTITUENT};
use crate::errors::{TideError, TideResult};
use std::path::Path;

const COMMENT_PREFIX: &str = "$$";

/// Finds `station` (case-insensitive) in BLQ text and returns its coefficients.
pub fn parse_blq(content: &str, station: &str) -> TideResult<OceanLoadingCoefficients> {
    let mut lines = content.lines();

    while let Some(line) = lines.next() {
        if is_comment(line) {
            continue;
        }
        let Some(name) = station_name(line) else {
            continue;
        };
        if !name.eq_ignore_ascii_case(station.trim()) {
            continue;
        }
        log::debug!("found ocean loading record for station {}", name);
        return parse_record(&mut lines, station);
    }

    Err(TideError::station_not_found(station))
}

/// Reads `path` and looks up `station` in it.
pub fn read_blq<P: AsRef<Path>>(path: P, station: &str) -> TideResult<OceanLoadingCoefficients> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| TideError::io(path, &e))?;
    log::debug!("reading ocean loading file {}", path.display());
    parse_blq(&content, station)
}

fn is_comment(line: &str) -> bool {
    line.starts_with(COMMENT_PREFIX)
}

/// Station name of a header line: the first token after the two leading columns.
fn station_name(line: &str) -> Option<&str> {
    line.get(2..)?.split_whitespace().next()
}

fn parse_record<'a, I>(lines: &mut I, station: &str) -> TideResult<OceanLoadingCoefficients>
where
    I: Iterator<Item = &'a str>,
{
    let mut coefficients = OceanLoadingCoefficients::zeros();
    let mut row = 0;

    for line in lines {
        if is_comment(line) {
            continue;
        }
        let Some(values) = parse_row(line) else {
            continue;
        };
        for (constituent, value) in values.iter().enumerate() {
            coefficients.set(constituent, row, *value);
        }
        row += 1;
        if row == VALUES_PER_CONSTITUENT {
            return Ok(coefficients);
        }
    }

    Err(TideError::parsing_error(format!(
        "station {}: record ends after {} of {} rows",
        station, row, VALUES_PER_CONSTITUENT
    )))
}

/// Parses a data row; `None` unless it starts with eleven numbers.
fn parse_row(line: &str) -> Option<[f64; CONSTITUENT_COUNT]> {
    let mut values = [0.0; CONSTITUENT_COUNT];
    let mut fields = line.split_whitespace();
    for value in values.iter_mut() {
        *value = fields.next()?.parse().ok()?;
    }
    Some(values)
}
