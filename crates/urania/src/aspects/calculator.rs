use crate::aspects::types::{Aspect, AspectKind};
use crate::chart::BodyPlacement;
use crate::western::CelestialBody;

/// Below this relative speed (degrees/day) the pair is treated as stationary.
const STATIONARY_RELATIVE_SPEED: f64 = 0.01;

/// Detect aspects between every pair of placements.
///
/// The lunar node is ignored. Pairs are visited in canonical body order so
/// each pair is tested once and reported as `(earlier, later)`; a pair yields
/// at most one aspect.
pub fn detect_aspects(placements: &[BodyPlacement]) -> Vec<Aspect> {
    let mut bodies: Vec<&BodyPlacement> = placements
        .iter()
        .filter(|p| p.body != CelestialBody::NorthNode)
        .collect();
    bodies.sort_by_key(|p| p.body);
    bodies.dedup_by_key(|p| p.body);

    // Early exit if not enough bodies
    if bodies.len() < 2 {
        return Vec::new();
    }

    let mut aspects = Vec::new();
    for i in 0..bodies.len() {
        for j in (i + 1)..bodies.len() {
            if let Some(aspect) = calculate_aspect(bodies[i], bodies[j]) {
                aspects.push(aspect);
            }
        }
    }
    aspects
}

/// Shortest distance between two longitudes, 0..=180.
pub fn angular_separation(lon1: f64, lon2: f64) -> f64 {
    let raw_diff = (lon1 - lon2).abs();
    if raw_diff > 180.0 {
        360.0 - raw_diff
    } else {
        raw_diff
    }
}

/// First aspect kind whose orb contains `separation`, with the deviation.
pub fn classify(separation: f64) -> Option<(AspectKind, f64)> {
    AspectKind::ALL.into_iter().find_map(|kind| {
        let orb = (separation - kind.exact_angle()).abs();
        (orb <= kind.orb()).then_some((kind, orb))
    })
}

fn calculate_aspect(a: &BodyPlacement, b: &BodyPlacement) -> Option<Aspect> {
    let lon1 = a.position.degrees();
    let lon2 = b.position.degrees();
    let separation = angular_separation(lon1, lon2);
    let (kind, orb) = classify(separation)?;

    Some(Aspect {
        body_a: a.body,
        body_b: b.body,
        kind,
        separation,
        orb,
        is_applying: is_applying(lon1, lon2, a.speed, b.speed, kind.exact_angle()),
    })
}

/// Whether the separation is moving toward `aspect_angle`.
///
/// The deviation from exact is `|signed_diff| - aspect_angle`; the aspect is
/// applying when that deviation and its rate of change have opposite signs.
/// An exact or stationary pair is not applying.
pub fn is_applying(lon1: f64, lon2: f64, speed1: f64, speed2: f64, aspect_angle: f64) -> bool {
    let relative_speed = speed1 - speed2;
    if relative_speed.abs() < STATIONARY_RELATIVE_SPEED {
        return false;
    }

    let signed_diff = wrap_signed(lon1 - lon2);
    let deviation = signed_diff.abs() - aspect_angle;
    // d|signed_diff|/dt
    let rate = signed_diff.signum() * relative_speed;

    deviation * rate < 0.0
}

/// Wrap a difference into (-180, 180].
fn wrap_signed(diff: f64) -> f64 {
    if diff > 180.0 {
        diff - 360.0
    } else if diff <= -180.0 {
        diff + 360.0
    } else {
        diff
    }
}
