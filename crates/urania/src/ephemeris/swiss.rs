//! Swiss Ephemeris provider using the built-in Moshier ephemeris.
//!
//! No data files are needed. The native library keeps global state, so only
//! one [`SwissEphemeris`] may exist at a time in a process.

use super::types::{BodySample, EphemerisError, HouseSample};
use super::EphemerisProvider;
use crate::western::CelestialBody;
use std::sync::{Mutex, MutexGuard, PoisonError, TryLockError};
use swisseph::swe::{calc_ut, houses_ex};
use swisseph::{AscMc, Cusp};

/// SEFLG_MOSEPH
const FLG_MOSEPH: i32 = 4;
/// SEFLG_SPEED
const FLG_SPEED: i32 = 256;
const CALC_FLAGS: i32 = FLG_MOSEPH | FLG_SPEED;

lazy_static::lazy_static! {
    static ref SESSION: Mutex<()> = Mutex::new(());
}

/// Swiss Ephemeris body number. The node is the mean lunar node.
fn swiss_code(body: CelestialBody) -> i32 {
    match body {
        CelestialBody::Sun => 0,
        CelestialBody::Moon => 1,
        CelestialBody::Mercury => 2,
        CelestialBody::Venus => 3,
        CelestialBody::Mars => 4,
        CelestialBody::Jupiter => 5,
        CelestialBody::Saturn => 6,
        CelestialBody::Uranus => 7,
        CelestialBody::Neptune => 8,
        CelestialBody::Pluto => 9,
        CelestialBody::NorthNode => 10,
    }
}

/// An open Swiss Ephemeris session.
///
/// Holding the value holds the process-wide session lock; dropping it
/// releases the lock.
pub struct SwissEphemeris {
    _session: MutexGuard<'static, ()>,
}

impl SwissEphemeris {
    /// Open a session, waiting for any other session in the process to close.
    pub fn open() -> Self {
        let guard = SESSION.lock().unwrap_or_else(PoisonError::into_inner);
        log::debug!("Swiss Ephemeris session opened (Moshier)");
        Self { _session: guard }
    }

    /// Open a session, failing with [`EphemerisError::SessionBusy`] instead of waiting.
    pub fn try_open() -> Result<Self, EphemerisError> {
        let guard = match SESSION.try_lock() {
            Ok(guard) => guard,
            Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner(),
            Err(TryLockError::WouldBlock) => return Err(EphemerisError::SessionBusy),
        };
        log::debug!("Swiss Ephemeris session opened (Moshier)");
        Ok(Self { _session: guard })
    }

    fn calc_body(&self, body: CelestialBody, julian_day: f64) -> Result<BodySample, EphemerisError> {
        let result = calc_ut(julian_day, swiss_code(body) as u32, CALC_FLAGS as u32).map_err(
            |e| EphemerisError::CalculationFailed {
                body,
                julian_day,
                message: format!("Swiss Ephemeris error: {}", e),
            },
        )?;

        let out = result.out;
        Ok(BodySample {
            body,
            longitude: out[0],
            speed: out[3],
        })
    }
}

impl EphemerisProvider for SwissEphemeris {
    fn positions_at(&self, julian_day: f64) -> Result<Vec<BodySample>, EphemerisError> {
        let mut samples = Vec::with_capacity(CelestialBody::ALL.len());
        for body in CelestialBody::ALL {
            match self.calc_body(body, julian_day) {
                Ok(sample) => samples.push(sample),
                Err(e) => log::warn!("Skipping {}: {}", body.name(), e),
            }
        }
        Ok(samples)
    }

    fn houses_at(
        &self,
        julian_day: f64,
        latitude: f64,
        longitude: f64,
        system_code: char,
    ) -> Result<HouseSample, EphemerisError> {
        if !system_code.is_ascii_alphabetic() {
            return Err(EphemerisError::HouseCalculationFailed {
                message: format!("'{}' is not a house system code", system_code),
            });
        }

        let (c, a) = houses_ex(julian_day, 0, latitude, longitude, system_code as i32);
        let cusps = Cusp::from_array(c);
        let ascmc = AscMc::from_array(a);

        Ok(HouseSample {
            cusps: [
                cusps.first,
                cusps.second,
                cusps.third,
                cusps.fourth,
                cusps.fifth,
                cusps.sixth,
                cusps.seventh,
                cusps.eighth,
                cusps.ninth,
                cusps.tenth,
                cusps.eleventh,
                cusps.twelfth,
            ],
            ascendant: ascmc.ascendant,
            midheaven: ascmc.mc,
        })
    }
}

impl Drop for SwissEphemeris {
    fn drop(&mut self) {
        log::debug!("Swiss Ephemeris session closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swiss_codes_are_distinct() {
        let mut codes: Vec<i32> = CelestialBody::ALL.iter().map(|b| swiss_code(*b)).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), CelestialBody::ALL.len());
        assert_eq!(swiss_code(CelestialBody::NorthNode), 10);
    }

    #[test]
    fn test_second_session_is_busy_while_first_is_open() {
        let first = SwissEphemeris::open();
        assert!(matches!(
            SwissEphemeris::try_open(),
            Err(EphemerisError::SessionBusy)
        ));
        drop(first);
        assert!(SwissEphemeris::try_open().is_ok());
    }
}
