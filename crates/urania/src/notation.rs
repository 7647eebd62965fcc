//! Compact text forms for positions and coordinates.

use crate::chart::BodyPlacement;
use crate::position::EclipticPosition;

/// `9Can59`: degree, sign abbreviation, zero-padded minute.
pub fn compact_position(position: EclipticPosition) -> String {
    let pos = position.sign_position();
    format!("{}{}{:02}", pos.degree, pos.sign.abbreviation(), pos.minute)
}

/// Like [`compact_position`], with a trailing `R` for retrograde bodies.
pub fn compact_placement(placement: &BodyPlacement) -> String {
    let mut text = compact_position(placement.position);
    if placement.is_retrograde {
        text.push('R');
    }
    text
}

/// `50°27'N 30°31'E`. Minutes are rounded to the nearest whole minute.
pub fn coordinates(latitude: f64, longitude: f64) -> String {
    format!(
        "{} {}",
        degrees_minutes(latitude, 'N', 'S'),
        degrees_minutes(longitude, 'E', 'W')
    )
}

fn degrees_minutes(value: f64, positive: char, negative: char) -> String {
    let abs = value.abs();
    let mut degrees = abs.floor() as u32;
    let mut minutes = ((abs - abs.floor()) * 60.0).round() as u32;
    if minutes == 60 {
        degrees += 1;
        minutes = 0;
    }
    let hemisphere = if value >= 0.0 { positive } else { negative };
    format!("{}°{:02}'{}", degrees, minutes, hemisphere)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::western::CelestialBody;

    #[test]
    fn test_compact_position() {
        let pos = EclipticPosition::new(99.99).unwrap();
        assert_eq!(compact_position(pos), "9Can59");
        let pos = EclipticPosition::new(0.1).unwrap();
        assert_eq!(compact_position(pos), "0Ari06");
    }

    #[test]
    fn test_compact_placement_marks_retrograde() {
        let placement = BodyPlacement {
            body: CelestialBody::Saturn,
            position: EclipticPosition::new(99.99).unwrap(),
            speed: -0.02,
            is_retrograde: true,
        };
        assert_eq!(compact_placement(&placement), "9Can59R");
    }

    #[test]
    fn test_coordinates() {
        assert_eq!(coordinates(50.45, 30.52), "50°27'N 30°31'E");
        assert_eq!(coordinates(-33.8688, -70.6693), "33°52'S 70°40'W");
        assert_eq!(coordinates(10.9999, 0.0), "11°00'N 0°00'E");
    }
}
