//! Replay of previously captured provider output.

use super::types::{BodySample, EphemerisError, HouseSample};
use super::EphemerisProvider;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Largest difference, in days, between the recorded and requested moment (~0.1 s).
const MOMENT_TOLERANCE_DAYS: f64 = 1e-6;

/// Provider backed by recorded samples.
///
/// JSON layout:
///
/// ```json
/// {
///   "julian_day": 2441390.149306,
///   "bodies": [{ "body": "sun", "longitude": 353.2, "speed": 1.0 }],
///   "houses": { "P": { "cusps": [ ... ], "ascendant": 170.1, "midheaven": 81.5 } }
/// }
/// ```
///
/// `julian_day` is optional; when present, requests for any other moment fail.
/// Location is not checked.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordedEphemeris {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub julian_day: Option<f64>,
    #[serde(default)]
    pub bodies: Vec<BodySample>,
    /// Keyed by house system code
    #[serde(default)]
    pub houses: BTreeMap<String, HouseSample>,
}

impl RecordedEphemeris {
    pub fn new(bodies: Vec<BodySample>) -> Self {
        Self {
            julian_day: None,
            bodies,
            houses: BTreeMap::new(),
        }
    }

    pub fn at_julian_day(mut self, julian_day: f64) -> Self {
        self.julian_day = Some(julian_day);
        self
    }

    pub fn with_houses(mut self, system_code: char, sample: HouseSample) -> Self {
        self.houses.insert(system_code.to_string(), sample);
        self
    }

    pub fn from_json(json: &str) -> Result<Self, EphemerisError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, EphemerisError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| EphemerisError::SampleFile {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let recorded = Self::from_json(&content)?;
        log::debug!(
            "Loaded {} body samples and {} house tables from {}",
            recorded.bodies.len(),
            recorded.houses.len(),
            path.display()
        );
        Ok(recorded)
    }

    fn check_moment(&self, requested: f64) -> Result<(), EphemerisError> {
        match self.julian_day {
            Some(recorded) if (recorded - requested).abs() > MOMENT_TOLERANCE_DAYS => {
                Err(EphemerisError::MomentMismatch {
                    recorded,
                    requested,
                })
            }
            _ => Ok(()),
        }
    }
}

impl EphemerisProvider for RecordedEphemeris {
    fn positions_at(&self, julian_day: f64) -> Result<Vec<BodySample>, EphemerisError> {
        self.check_moment(julian_day)?;
        Ok(self.bodies.clone())
    }

    fn houses_at(
        &self,
        julian_day: f64,
        _latitude: f64,
        _longitude: f64,
        system_code: char,
    ) -> Result<HouseSample, EphemerisError> {
        self.check_moment(julian_day)?;
        self.houses
            .get(system_code.to_string().as_str())
            .copied()
            .ok_or_else(|| EphemerisError::MissingHouses {
                code: system_code,
                recorded: self.houses.keys().cloned().collect(),
            })
    }
}
