use crate::western::CelestialBody;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Within this many degrees of exact an aspect is reported as exact.
pub const EXACT_THRESHOLD: f64 = 0.1;

/// The five major (Ptolemaic) aspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectKind {
    Conjunction,
    Opposition,
    Trine,
    Square,
    Sextile,
}

impl AspectKind {
    /// Detection order. The first kind whose orb contains a separation wins.
    pub const ALL: [AspectKind; 5] = [
        AspectKind::Conjunction,
        AspectKind::Opposition,
        AspectKind::Trine,
        AspectKind::Square,
        AspectKind::Sextile,
    ];

    pub fn exact_angle(self) -> f64 {
        match self {
            AspectKind::Conjunction => 0.0,
            AspectKind::Opposition => 180.0,
            AspectKind::Trine => 120.0,
            AspectKind::Square => 90.0,
            AspectKind::Sextile => 60.0,
        }
    }

    /// Maximum allowed deviation from the exact angle
    pub fn orb(self) -> f64 {
        match self {
            AspectKind::Conjunction | AspectKind::Opposition | AspectKind::Trine => 8.0,
            AspectKind::Square | AspectKind::Sextile => 6.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AspectKind::Conjunction => "Conjunction",
            AspectKind::Opposition => "Opposition",
            AspectKind::Trine => "Trine",
            AspectKind::Square => "Square",
            AspectKind::Sextile => "Sextile",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            AspectKind::Conjunction => "☌",
            AspectKind::Opposition => "☍",
            AspectKind::Trine => "△",
            AspectKind::Square => "□",
            AspectKind::Sextile => "⚹",
        }
    }
}

impl fmt::Display for AspectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An aspect between two bodies, `body_a` always ordered before `body_b`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aspect {
    pub body_a: CelestialBody,
    pub body_b: CelestialBody,
    pub kind: AspectKind,
    /// Shortest angular distance between the bodies, 0..=180
    pub separation: f64,
    /// Deviation from the exact angle
    pub orb: f64,
    /// Whether the separation is moving toward exact
    pub is_applying: bool,
}

impl Aspect {
    pub fn is_exact(&self) -> bool {
        self.orb < EXACT_THRESHOLD
    }

    pub fn involves(&self, body: CelestialBody) -> bool {
        self.body_a == body || self.body_b == body
    }
}
