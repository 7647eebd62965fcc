//! House systems and their single-letter provider codes.

use crate::error::ChartError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HouseSystem {
    #[default]
    Placidus,
    EqualHouses,
    Koch,
    Regiomontanus,
    Campanus,
    WholeSign,
}

impl HouseSystem {
    pub const ALL: [HouseSystem; 6] = [
        HouseSystem::Placidus,
        HouseSystem::EqualHouses,
        HouseSystem::Koch,
        HouseSystem::Regiomontanus,
        HouseSystem::Campanus,
        HouseSystem::WholeSign,
    ];

    /// Provider code for this system. See [`resolve`].
    pub fn code(self) -> char {
        resolve(self)
    }

    /// Inverse of [`resolve`].
    pub fn from_code(code: char) -> Result<Self, ChartError> {
        Self::ALL
            .into_iter()
            .find(|system| resolve(*system) == code.to_ascii_uppercase())
            .ok_or_else(|| unsupported(code.to_string()))
    }

    pub fn name(self) -> &'static str {
        match self {
            HouseSystem::Placidus => "placidus",
            HouseSystem::EqualHouses => "equal_houses",
            HouseSystem::Koch => "koch",
            HouseSystem::Regiomontanus => "regiomontanus",
            HouseSystem::Campanus => "campanus",
            HouseSystem::WholeSign => "whole_sign",
        }
    }
}

/// Map a house system to the code the ephemeris provider understands.
pub fn resolve(system: HouseSystem) -> char {
    match system {
        HouseSystem::Placidus => 'P',
        HouseSystem::EqualHouses => 'E',
        HouseSystem::Koch => 'K',
        HouseSystem::Regiomontanus => 'R',
        HouseSystem::Campanus => 'C',
        HouseSystem::WholeSign => 'W',
    }
}

fn unsupported(value: String) -> ChartError {
    ChartError::UnsupportedHouseSystem {
        value,
        valid: HouseSystem::ALL
            .iter()
            .map(|system| system.name().to_string())
            .collect(),
    }
}

impl FromStr for HouseSystem {
    type Err = ChartError;

    /// Accepts names (`placidus`, `equal-houses`, `WholeSign`, ...) and the
    /// single-letter codes.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        if let (Some(code), None) = (chars.next(), chars.next()) {
            return Self::from_code(code).map_err(|_| unsupported(trimmed.to_string()));
        }

        let key: String = trimmed
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "placidus" => Ok(HouseSystem::Placidus),
            "equal" | "equalhouses" => Ok(HouseSystem::EqualHouses),
            "koch" => Ok(HouseSystem::Koch),
            "regiomontanus" => Ok(HouseSystem::Regiomontanus),
            "campanus" => Ok(HouseSystem::Campanus),
            "wholesign" => Ok(HouseSystem::WholeSign),
            _ => Err(unsupported(trimmed.to_string())),
        }
    }
}

impl fmt::Display for HouseSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_resolve_codes() {
        assert_eq!(resolve(HouseSystem::Placidus), 'P');
        assert_eq!(resolve(HouseSystem::EqualHouses), 'E');
        assert_eq!(resolve(HouseSystem::Koch), 'K');
        assert_eq!(resolve(HouseSystem::Regiomontanus), 'R');
        assert_eq!(resolve(HouseSystem::Campanus), 'C');
        assert_eq!(resolve(HouseSystem::WholeSign), 'W');
    }

    #[test]
    fn test_resolve_is_one_to_one() {
        let codes: HashSet<char> = HouseSystem::ALL.iter().map(|s| resolve(*s)).collect();
        assert_eq!(codes.len(), HouseSystem::ALL.len());
        for system in HouseSystem::ALL {
            assert_eq!(HouseSystem::from_code(resolve(system)).unwrap(), system);
        }
    }

    #[test]
    fn test_from_str_names_and_codes() {
        assert_eq!("placidus".parse::<HouseSystem>().unwrap(), HouseSystem::Placidus);
        assert_eq!("Equal-Houses".parse::<HouseSystem>().unwrap(), HouseSystem::EqualHouses);
        assert_eq!("whole_sign".parse::<HouseSystem>().unwrap(), HouseSystem::WholeSign);
        assert_eq!("k".parse::<HouseSystem>().unwrap(), HouseSystem::Koch);
    }

    #[test]
    fn test_unknown_system_is_rejected_not_defaulted() {
        match "topocentric".parse::<HouseSystem>() {
            Err(ChartError::UnsupportedHouseSystem { value, valid }) => {
                assert_eq!(value, "topocentric");
                assert_eq!(valid.len(), 6);
            }
            other => panic!("expected UnsupportedHouseSystem, got {:?}", other),
        }
        assert!(HouseSystem::from_code('X').is_err());
        assert!("".parse::<HouseSystem>().is_err());
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&HouseSystem::EqualHouses).unwrap();
        assert_eq!(json, "\"equal_houses\"");
    }
}
