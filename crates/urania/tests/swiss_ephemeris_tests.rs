#![cfg(feature = "swiss-ephemeris")]

use chrono::{NaiveDate, NaiveTime};
use urania::{
    compute_chart, BirthData, CelestialBody, EphemerisProvider, HouseSystem, SwissEphemeris,
    ZodiacSign,
};

#[test]
fn test_positions_cover_every_body() {
    let ephemeris = SwissEphemeris::open();
    let samples = ephemeris.positions_at(2451545.0).unwrap();
    assert_eq!(samples.len(), CelestialBody::ALL.len());
    for sample in &samples {
        assert!((0.0..360.0).contains(&sample.longitude), "{:?}", sample);
    }
}

#[test]
fn test_every_house_system_returns_twelve_finite_cusps() {
    let ephemeris = SwissEphemeris::open();
    for system in HouseSystem::ALL {
        let sample = ephemeris
            .houses_at(2451545.0, 50.45, 30.52, urania::resolve(system))
            .unwrap();
        assert!(sample.cusps.iter().all(|c| c.is_finite()), "{}", system);
    }
}

#[test]
#[ignore = "needs the native Swiss Ephemeris library"]
fn test_kiev_1972_chart() {
    let birth = BirthData::new(
        NaiveDate::from_ymd_opt(1972, 3, 13).unwrap(),
        NaiveTime::from_hms_opt(18, 35, 0).unwrap(),
        3.0,
        50.45,
        30.52,
    );
    let chart = compute_chart(&birth, &SwissEphemeris::open()).unwrap();
    let expected = [
        (CelestialBody::Sun, ZodiacSign::Pisces, 22..=24),
        (CelestialBody::Moon, ZodiacSign::Aquarius, 27..=29),
        (CelestialBody::Mercury, ZodiacSign::Aries, 10..=12),
        (CelestialBody::Venus, ZodiacSign::Taurus, 6..=8),
        (CelestialBody::Mars, ZodiacSign::Taurus, 20..=22),
    ];
    for (body, sign, degrees) in expected {
        let position = chart.body(body).unwrap().sign_position();
        assert_eq!(position.sign, sign, "{:?} at {}", body, position);
        assert!(degrees.contains(&position.degree), "{:?} at {}", body, position);
    }
    assert_eq!(chart.ascendant.sign(), ZodiacSign::Virgo);
    assert_eq!(chart.midheaven.sign(), ZodiacSign::Gemini);
}

#[test]
#[ignore = "needs the native Swiss Ephemeris library"]
fn test_kiev_fixture_agrees_with_backend() {
    let recorded =
        urania::RecordedEphemeris::from_json(include_str!("fixtures/kiev_1972.json")).unwrap();
    let julian_day = recorded.julian_day.unwrap();
    let ephemeris = SwissEphemeris::open();

    let live = ephemeris.positions_at(julian_day).unwrap();
    for sample in &recorded.bodies {
        let body = live.iter().find(|s| s.body == sample.body).unwrap();
        let error = urania::aspects::angular_separation(body.longitude, sample.longitude);
        assert!(error < 0.25, "{:?} off by {}", sample.body, error);
    }

    let houses = ephemeris.houses_at(julian_day, 50.45, 30.52, 'P').unwrap();
    let recorded_houses = recorded.houses_at(julian_day, 50.45, 30.52, 'P').unwrap();
    for (cusp, expected) in houses.cusps.iter().zip(recorded_houses.cusps.iter()) {
        assert!(urania::aspects::angular_separation(*cusp, *expected) < 0.25);
    }
}
