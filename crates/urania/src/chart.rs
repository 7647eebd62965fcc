//! Natal chart model and the `compute_chart` entry point.

use crate::aspects::{detect_aspects, Aspect};
use crate::ephemeris::{BodySample, EphemerisProvider};
use crate::error::ChartError;
use crate::houses::{resolve, HouseSystem};
use crate::position::{EclipticPosition, SignPosition};
use crate::retrograde::is_retrograde;
use crate::time::{check_utc_offset, to_julian_day_ut};
use crate::western::CelestialBody;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Local birth moment and place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthData {
    pub date: NaiveDate,
    pub time: NaiveTime,
    /// Hours east of UTC, within [-14, 14]
    pub utc_offset_hours: f64,
    /// Degrees, north positive
    pub latitude: f64,
    /// Degrees, east positive
    pub longitude: f64,
    #[serde(default)]
    pub house_system: HouseSystem,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place: Option<String>,
}

impl BirthData {
    pub fn new(
        date: NaiveDate,
        time: NaiveTime,
        utc_offset_hours: f64,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            date,
            time,
            utc_offset_hours,
            latitude,
            longitude,
            house_system: HouseSystem::default(),
            place: None,
        }
    }

    pub fn with_house_system(mut self, house_system: HouseSystem) -> Self {
        self.house_system = house_system;
        self
    }

    pub fn with_place(mut self, place: impl Into<String>) -> Self {
        self.place = Some(place.into());
        self
    }

    pub fn validate(&self) -> Result<(), ChartError> {
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(ChartError::LatitudeOutOfRange(self.latitude));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(ChartError::LongitudeOutOfRange(self.longitude));
        }
        check_utc_offset(self.utc_offset_hours)
    }
}

/// A body's place on the chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyPlacement {
    pub body: CelestialBody,
    pub position: EclipticPosition,
    /// Degrees per day
    pub speed: f64,
    pub is_retrograde: bool,
}

impl BodyPlacement {
    /// Fails if the sampled longitude is not finite.
    pub fn from_sample(sample: &BodySample) -> Result<Self, ChartError> {
        Ok(Self {
            body: sample.body,
            position: EclipticPosition::new(sample.longitude)?,
            speed: sample.speed,
            is_retrograde: is_retrograde(sample.body, sample.speed),
        })
    }

    pub fn sign_position(&self) -> SignPosition {
        self.position.sign_position()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HouseCusp {
    /// 1..=12
    pub house: u8,
    pub position: EclipticPosition,
}

impl HouseCusp {
    /// Houses 1, 4, 7 and 10.
    pub fn is_angular(&self) -> bool {
        matches!(self.house, 1 | 4 | 7 | 10)
    }
}

/// A computed natal chart.
///
/// `houses` always holds houses 1 through 12 in order. `bodies` is sorted in
/// canonical body order with at most one entry per body; bodies the
/// provider could not resolve are absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NatalChart {
    pub julian_day: f64,
    pub bodies: Vec<BodyPlacement>,
    pub houses: [HouseCusp; 12],
    pub ascendant: EclipticPosition,
    pub midheaven: EclipticPosition,
    pub house_system: HouseSystem,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place: Option<String>,
}

impl NatalChart {
    pub fn body(&self, body: CelestialBody) -> Option<&BodyPlacement> {
        self.bodies.iter().find(|p| p.body == body)
    }

    /// Cusp of house `house` (1..=12).
    pub fn house(&self, house: u8) -> Option<&HouseCusp> {
        self.houses.get(usize::from(house).checked_sub(1)?)
    }

    pub fn descendant(&self) -> EclipticPosition {
        self.ascendant.opposite()
    }

    pub fn imum_coeli(&self) -> EclipticPosition {
        self.midheaven.opposite()
    }

    /// House (1..=12) containing `position`.
    ///
    /// That is the house whose cusp lies closest behind the position going
    /// counter-clockwise, which handles the 360°/0° wrap.
    pub fn house_of(&self, position: EclipticPosition) -> u8 {
        self.houses
            .iter()
            .map(|cusp| {
                let behind = (position.degrees() - cusp.position.degrees()).rem_euclid(360.0);
                (cusp.house, behind)
            })
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(house, _)| house)
            .unwrap_or(1)
    }

    pub fn aspects(&self) -> Vec<Aspect> {
        detect_aspects(&self.bodies)
    }
}

/// Build a natal chart for `birth` from the provider's raw output.
///
/// Bodies with a non-finite longitude are dropped with a warning; a
/// non-finite cusp or angle fails the whole chart.
pub fn compute_chart<P>(birth: &BirthData, provider: &P) -> Result<NatalChart, ChartError>
where
    P: EphemerisProvider + ?Sized,
{
    birth.validate()?;

    let julian_day = to_julian_day_ut(birth.date, birth.time, birth.utc_offset_hours)?;
    log::debug!(
        "Computing chart for {} {} (UTC{:+}) -> JD {:.6}",
        birth.date,
        birth.time,
        birth.utc_offset_hours,
        julian_day
    );

    let mut bodies = Vec::new();
    for sample in provider.positions_at(julian_day)? {
        match BodyPlacement::from_sample(&sample) {
            Ok(placement) => bodies.push(placement),
            Err(e) => log::warn!("Dropping {} from chart: {}", sample.body.name(), e),
        }
    }
    bodies.sort_by_key(|p| p.body);
    bodies.dedup_by_key(|p| p.body);

    let raw = provider.houses_at(
        julian_day,
        birth.latitude,
        birth.longitude,
        resolve(birth.house_system),
    )?;

    Ok(NatalChart {
        julian_day,
        bodies,
        houses: house_cusps(&raw.cusps)?,
        ascendant: chart_angle("Ascendant", raw.ascendant)?,
        midheaven: chart_angle("Midheaven", raw.midheaven)?,
        house_system: birth.house_system,
        place: birth.place.clone(),
    })
}

fn house_cusps(raw: &[f64; 12]) -> Result<[HouseCusp; 12], ChartError> {
    for (index, &value) in raw.iter().enumerate() {
        if !value.is_finite() {
            return Err(ChartError::InvalidHouseCusp {
                house: index as u8 + 1,
                value,
            });
        }
    }
    Ok(std::array::from_fn(|index| HouseCusp {
        house: index as u8 + 1,
        position: EclipticPosition::from_finite(raw[index]),
    }))
}

fn chart_angle(angle: &'static str, value: f64) -> Result<EclipticPosition, ChartError> {
    EclipticPosition::new(value).map_err(|_| ChartError::InvalidChartAngle { angle, value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ephemeris::{HouseSample, RecordedEphemeris};

    fn birth() -> BirthData {
        BirthData::new(
            NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
            NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
            0.0,
            51.5,
            0.0,
        )
        .with_house_system(HouseSystem::EqualHouses)
    }

    fn equal_houses(ascendant: f64) -> HouseSample {
        HouseSample {
            cusps: std::array::from_fn(|i| ascendant + 30.0 * i as f64),
            ascendant,
            midheaven: ascendant + 270.0,
        }
    }

    fn sample(body: CelestialBody, longitude: f64, speed: f64) -> BodySample {
        BodySample {
            body,
            longitude,
            speed,
        }
    }

    #[test]
    fn test_validate_ranges() {
        let mut data = birth();
        assert!(data.validate().is_ok());
        data.latitude = 90.5;
        assert!(matches!(data.validate(), Err(ChartError::LatitudeOutOfRange(_))));
        data.latitude = f64::NAN;
        assert!(data.validate().is_err());
        data.latitude = 0.0;
        data.longitude = -181.0;
        assert!(matches!(data.validate(), Err(ChartError::LongitudeOutOfRange(_))));
        data.longitude = 0.0;
        data.utc_offset_hours = 14.5;
        assert!(matches!(data.validate(), Err(ChartError::UtcOffsetOutOfRange(_))));
    }

    #[test]
    fn test_cusps_are_normalized_and_numbered() {
        let provider = RecordedEphemeris::new(vec![]).with_houses('E', equal_houses(350.0));
        let chart = compute_chart(&birth(), &provider).unwrap();
        let numbers: Vec<u8> = chart.houses.iter().map(|h| h.house).collect();
        assert_eq!(numbers, (1..=12).collect::<Vec<u8>>());
        assert!((chart.houses[1].position.degrees() - 20.0).abs() < 1e-9);
        assert!((chart.midheaven.degrees() - 260.0).abs() < 1e-9);
    }

    #[test]
    fn test_non_finite_cusp_fails_chart() {
        let mut houses = equal_houses(0.0);
        houses.cusps[6] = f64::NAN;
        let provider = RecordedEphemeris::new(vec![]).with_houses('E', houses);
        assert!(matches!(
            compute_chart(&birth(), &provider),
            Err(ChartError::InvalidHouseCusp { house: 7, .. })
        ));
    }

    #[test]
    fn test_non_finite_angle_fails_chart() {
        let mut houses = equal_houses(0.0);
        houses.ascendant = f64::INFINITY;
        let provider = RecordedEphemeris::new(vec![]).with_houses('E', houses);
        assert!(matches!(
            compute_chart(&birth(), &provider),
            Err(ChartError::InvalidChartAngle { angle: "Ascendant", .. })
        ));
    }

    #[test]
    fn test_bodies_sorted_and_unique() {
        let provider = RecordedEphemeris::new(vec![
            sample(CelestialBody::Mars, 10.0, 0.5),
            sample(CelestialBody::Sun, 280.0, 1.0),
            sample(CelestialBody::Mars, 11.0, 0.5),
        ])
        .with_houses('E', equal_houses(0.0));
        let chart = compute_chart(&birth(), &provider).unwrap();
        let bodies: Vec<CelestialBody> = chart.bodies.iter().map(|p| p.body).collect();
        assert_eq!(bodies, vec![CelestialBody::Sun, CelestialBody::Mars]);
    }

    #[test]
    fn test_house_of_wraps_through_aries() {
        let provider = RecordedEphemeris::new(vec![]).with_houses('E', equal_houses(350.0));
        let chart = compute_chart(&birth(), &provider).unwrap();
        let at = |d: f64| chart.house_of(EclipticPosition::new(d).unwrap());
        assert_eq!(at(355.0), 1);
        assert_eq!(at(5.0), 1);
        assert_eq!(at(20.0), 2);
        assert_eq!(at(349.0), 12);
        assert_eq!(at(170.0), 7);
    }

    #[test]
    fn test_derived_angles() {
        let provider = RecordedEphemeris::new(vec![]).with_houses('E', equal_houses(100.0));
        let chart = compute_chart(&birth(), &provider).unwrap();
        assert!((chart.descendant().degrees() - 280.0).abs() < 1e-9);
        assert!((chart.imum_coeli().degrees() - 190.0).abs() < 1e-9);
        assert!(chart.house(1).unwrap().is_angular());
        assert!(!chart.house(2).unwrap().is_angular());
        assert!(chart.house(0).is_none());
        assert!(chart.house(13).is_none());
    }
}
