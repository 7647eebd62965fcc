//! Element, modality and polarity balance of a chart.

use crate::chart::NatalChart;
use crate::western::types::{Element, Modality, Polarity};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ElementCounts {
    pub fire: u8,
    pub earth: u8,
    pub air: u8,
    pub water: u8,
}

impl ElementCounts {
    pub fn get(&self, element: Element) -> u8 {
        match element {
            Element::Fire => self.fire,
            Element::Earth => self.earth,
            Element::Air => self.air,
            Element::Water => self.water,
        }
    }

    fn add(&mut self, element: Element) {
        match element {
            Element::Fire => self.fire += 1,
            Element::Earth => self.earth += 1,
            Element::Air => self.air += 1,
            Element::Water => self.water += 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ModalityCounts {
    pub cardinal: u8,
    pub fixed: u8,
    pub mutable: u8,
}

impl ModalityCounts {
    pub fn get(&self, modality: Modality) -> u8 {
        match modality {
            Modality::Cardinal => self.cardinal,
            Modality::Fixed => self.fixed,
            Modality::Mutable => self.mutable,
        }
    }

    fn add(&mut self, modality: Modality) {
        match modality {
            Modality::Cardinal => self.cardinal += 1,
            Modality::Fixed => self.fixed += 1,
            Modality::Mutable => self.mutable += 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PolarityCounts {
    pub positive: u8,
    pub negative: u8,
}

impl PolarityCounts {
    pub fn get(&self, polarity: Polarity) -> u8 {
        match polarity {
            Polarity::Positive => self.positive,
            Polarity::Negative => self.negative,
        }
    }
}

/// Counts of bodies per sign quality, plus the qualities of the two main angles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartBalance {
    pub elements: ElementCounts,
    pub modalities: ModalityCounts,
    pub polarities: PolarityCounts,
    pub ascendant_element: Element,
    pub ascendant_modality: Modality,
    pub midheaven_element: Element,
    pub midheaven_modality: Modality,
}

/// Tally every placed body, the lunar node included.
pub fn chart_balance(chart: &NatalChart) -> ChartBalance {
    let mut elements = ElementCounts::default();
    let mut modalities = ModalityCounts::default();
    let mut polarities = PolarityCounts::default();

    for placement in &chart.bodies {
        let sign = placement.position.sign();
        elements.add(sign.element());
        modalities.add(sign.modality());
        match sign.polarity() {
            Polarity::Positive => polarities.positive += 1,
            Polarity::Negative => polarities.negative += 1,
        }
    }

    let asc = chart.ascendant.sign();
    let mc = chart.midheaven.sign();
    ChartBalance {
        elements,
        modalities,
        polarities,
        ascendant_element: asc.element(),
        ascendant_modality: asc.modality(),
        midheaven_element: mc.element(),
        midheaven_modality: mc.modality(),
    }
}
