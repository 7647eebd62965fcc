use crate::ephemeris::EphemerisError;
use thiserror::Error;

/// Errors that can occur while building or projecting a natal chart
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Unsupported house system: {value}. Valid systems: {valid:?}")]
    UnsupportedHouseSystem { value: String, valid: Vec<String> },
    #[error("Ecliptic degree must be finite, got {value}")]
    NonFiniteEclipticDegree { value: f64 },
    #[error("House cusp {house} is not a finite ecliptic degree: {value}")]
    InvalidHouseCusp { house: u8, value: f64 },
    #[error("{angle} is not a finite ecliptic degree: {value}")]
    InvalidChartAngle { angle: &'static str, value: f64 },
    #[error("Invalid calendar date: {0}")]
    InvalidCalendarDate(String),
    #[error("Latitude must be within [-90, 90], got {0}")]
    LatitudeOutOfRange(f64),
    #[error("Longitude must be within [-180, 180], got {0}")]
    LongitudeOutOfRange(f64),
    #[error("UTC offset must be within [-14, 14] hours, got {0}")]
    UtcOffsetOutOfRange(f64),
    #[error("Invalid UTC offset: {0}")]
    InvalidUtcOffset(String),
    #[error("Invalid built-in pattern: {0}")]
    Pattern(#[from] regex::Error),
    #[error("Invalid wheel geometry: {0}")]
    InvalidGeometry(String),
    #[error(transparent)]
    Ephemeris(#[from] EphemerisError),
}
