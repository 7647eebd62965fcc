pub mod recorded;
#[cfg(feature = "swiss-ephemeris")]
pub mod swiss;
pub mod types;

pub use recorded::RecordedEphemeris;
#[cfg(feature = "swiss-ephemeris")]
pub use swiss::SwissEphemeris;
pub use types::{BodySample, EphemerisError, HouseSample};

/// Source of raw planetary longitudes and house cusps.
///
/// Implementations own whatever native session they need; chart code only
/// borrows a provider for the duration of one computation.
pub trait EphemerisProvider {
    /// Longitude and speed of every body the provider can resolve at `julian_day` (UT).
    ///
    /// Bodies that cannot be computed are left out rather than failing the call.
    fn positions_at(&self, julian_day: f64) -> Result<Vec<BodySample>, EphemerisError>;

    /// House cusps and angles for a location, using a single-letter house
    /// system code such as `'P'`.
    fn houses_at(
        &self,
        julian_day: f64,
        latitude: f64,
        longitude: f64,
        system_code: char,
    ) -> Result<HouseSample, EphemerisError>;
}

impl<P: EphemerisProvider + ?Sized> EphemerisProvider for Box<P> {
    fn positions_at(&self, julian_day: f64) -> Result<Vec<BodySample>, EphemerisError> {
        (**self).positions_at(julian_day)
    }

    fn houses_at(
        &self,
        julian_day: f64,
        latitude: f64,
        longitude: f64,
        system_code: char,
    ) -> Result<HouseSample, EphemerisError> {
        (**self).houses_at(julian_day, latitude, longitude, system_code)
    }
}
