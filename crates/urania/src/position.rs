//! Ecliptic positions and their sign/degree/minute/second view.

use crate::error::ChartError;
use crate::western::ZodiacSign;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Wrap any finite degree value into [0, 360).
pub fn normalize_degrees(degrees: f64) -> f64 {
    let normalized = ((degrees % 360.0) + 360.0) % 360.0;
    // -1e-15 and friends round up to exactly 360.0 after the shift
    if normalized >= 360.0 {
        0.0
    } else {
        normalized
    }
}

/// Position within a sign, derived from an absolute ecliptic degree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignPosition {
    pub sign: ZodiacSign,
    /// Whole degrees into the sign, 0..30
    pub degree: u8,
    /// 0..60
    pub minute: u8,
    /// 0..60
    pub second: u8,
}

impl SignPosition {
    /// Decimal degrees represented by this position (truncated to the second).
    pub fn to_degrees(&self) -> f64 {
        self.sign.start_degree()
            + self.degree as f64
            + self.minute as f64 / 60.0
            + self.second as f64 / 3600.0
    }
}

impl fmt::Display for SignPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}°{:02}'{:02}\" {}",
            self.degree,
            self.minute,
            self.second,
            self.sign.name()
        )
    }
}

/// Split an absolute degree into sign, degree, minute and second.
///
/// Input is normalized first, so negative and >360 values are accepted.
/// Callers must not pass non-finite values; use [`EclipticPosition::new`]
/// to screen them.
pub fn decompose(degrees: f64) -> SignPosition {
    let degrees = normalize_degrees(degrees);

    let sign_index = ((degrees / 30.0).floor() as usize).min(11);
    let in_sign = degrees % 30.0;
    let degree = in_sign.floor();
    let minute_fraction = (in_sign - degree) * 60.0;
    let minute = minute_fraction.floor();
    let second = ((minute_fraction - minute) * 60.0).floor();

    SignPosition {
        sign: ZodiacSign::from_index(sign_index),
        degree: (degree as u8).min(29),
        minute: (minute as u8).min(59),
        second: (second as u8).min(59),
    }
}

/// Absolute ecliptic longitude in [0, 360).
///
/// This is the only stored form of a position; the sign view is always
/// recomputed from it.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct EclipticPosition(f64);

impl EclipticPosition {
    pub fn new(degrees: f64) -> Result<Self, ChartError> {
        if !degrees.is_finite() {
            return Err(ChartError::NonFiniteEclipticDegree { value: degrees });
        }
        Ok(Self(normalize_degrees(degrees)))
    }

    /// Caller guarantees `degrees` is finite.
    pub(crate) fn from_finite(degrees: f64) -> Self {
        Self(normalize_degrees(degrees))
    }

    pub fn degrees(self) -> f64 {
        self.0
    }

    pub fn sign_position(self) -> SignPosition {
        decompose(self.0)
    }

    pub fn sign(self) -> ZodiacSign {
        self.sign_position().sign
    }

    /// The point directly across the wheel.
    pub fn opposite(self) -> Self {
        Self(normalize_degrees(self.0 + 180.0))
    }
}

impl TryFrom<f64> for EclipticPosition {
    type Error = ChartError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<EclipticPosition> for f64 {
    fn from(position: EclipticPosition) -> Self {
        position.0
    }
}

impl fmt::Display for EclipticPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.sign_position().fmt(f)
    }
}
