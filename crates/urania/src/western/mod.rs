pub mod balance;
pub mod types;

pub use balance::{chart_balance, ChartBalance, ElementCounts, ModalityCounts, PolarityCounts};
pub use types::{CelestialBody, Element, Modality, Polarity, ZodiacSign};
