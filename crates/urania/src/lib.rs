//! Natal chart computation and wheel projection.
//!
//! [`compute_chart`] turns a local birth moment and place into a
//! [`NatalChart`] using any [`EphemerisProvider`]; [`project_wheel`] lays the
//! chart out as a [`WheelDrawing`] that [`render_svg`] can serialize.

pub mod aspects;
pub mod chart;
pub mod ephemeris;
pub mod error;
pub mod houses;
pub mod notation;
pub mod position;
pub mod rendering;
pub mod retrograde;
pub mod time;
pub mod western;

pub use aspects::{detect_aspects, Aspect, AspectKind};
pub use chart::{compute_chart, BirthData, BodyPlacement, HouseCusp, NatalChart};
pub use ephemeris::{BodySample, EphemerisError, EphemerisProvider, HouseSample, RecordedEphemeris};
#[cfg(feature = "swiss-ephemeris")]
pub use ephemeris::SwissEphemeris;
pub use error::ChartError;
pub use houses::{resolve, HouseSystem};
pub use position::{decompose, normalize_degrees, EclipticPosition, SignPosition};
pub use rendering::{project_wheel, render_svg, WheelDrawing, WheelGeometry};
pub use retrograde::is_retrograde;
pub use time::{julian_day_number, parse_utc_offset, to_julian_day_ut, to_universal_time, UniversalTime};
pub use western::{CelestialBody, ZodiacSign};
