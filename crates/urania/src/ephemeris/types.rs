use crate::western::CelestialBody;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by an ephemeris provider
#[derive(Error, Debug)]
pub enum EphemerisError {
    #[error("Ephemeris session is already open in this process")]
    SessionBusy,
    #[error("Failed to calculate position for {body:?} at JD {julian_day}: {message}")]
    CalculationFailed {
        body: CelestialBody,
        julian_day: f64,
        message: String,
    },
    #[error("House calculation failed: {message}")]
    HouseCalculationFailed { message: String },
    #[error("No recorded houses for system code '{code}'. Recorded codes: {recorded:?}")]
    MissingHouses { code: char, recorded: Vec<String> },
    #[error("Recorded samples are for JD {recorded}, but JD {requested} was requested")]
    MomentMismatch { recorded: f64, requested: f64 },
    #[error("Failed to read ephemeris samples from {path}: {message}")]
    SampleFile { path: String, message: String },
    #[error("Invalid ephemeris samples: {0}")]
    InvalidSamples(#[from] serde_json::Error),
}

/// Raw longitude and speed of one body, straight from the provider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodySample {
    pub body: CelestialBody,
    /// Ecliptic longitude in degrees; may be outside [0, 360) or non-finite
    pub longitude: f64,
    /// Degrees per day
    pub speed: f64,
}

/// Raw house cusps and angles for one moment, place and house system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HouseSample {
    /// Cusps of houses 1 through 12, in order
    pub cusps: [f64; 12],
    pub ascendant: f64,
    pub midheaven: f64,
}
