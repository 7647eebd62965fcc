use crate::western::CelestialBody;

/// Whether a body with the given daily speed is shown as retrograde.
///
/// The luminaries never are; every other body is retrograde iff its
/// longitude is decreasing.
pub fn is_retrograde(body: CelestialBody, speed: f64) -> bool {
    match body {
        CelestialBody::Sun | CelestialBody::Moon => false,
        _ => speed < 0.0,
    }
}
