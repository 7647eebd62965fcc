pub mod calculator;
pub mod types;

pub use calculator::{angular_separation, classify, detect_aspects, is_applying};
pub use types::{Aspect, AspectKind, EXACT_THRESHOLD};
