use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use urania::{HouseSystem, WheelGeometry};

/// Resolved settings for the natal chart front end.
#[derive(Debug, Clone, PartialEq)]
pub struct NatalSettings {
    pub house_system: HouseSystem,
    pub wheel: WheelGeometry,
    pub samples_path: Option<PathBuf>,
}

impl Default for NatalSettings {
    fn default() -> Self {
        Self {
            house_system: HouseSystem::default(),
            wheel: WheelGeometry::default(),
            samples_path: None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ChartToml {
    #[serde(default)]
    house_system: Option<String>,
}

/// Every field is optional; missing radii keep the proportions of the
/// default wheel scaled to `width` x `height`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct WheelToml {
    width: Option<f64>,
    height: Option<f64>,
    outer_radius: Option<f64>,
    zodiac_radius: Option<f64>,
    house_radius: Option<f64>,
    planet_radius: Option<f64>,
    aspect_radius: Option<f64>,
    hub_radius: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SamplesToml {
    #[serde(default)]
    path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RootConfigToml {
    #[serde(default)]
    chart: ChartToml,
    #[serde(default)]
    wheel: WheelToml,
    #[serde(default)]
    samples: SamplesToml,
}

/// Try common relative paths for `configs/natal.toml`.
pub fn read_natal_toml_text() -> anyhow::Result<String> {
    let paths = ["configs/natal.toml", "../../configs/natal.toml"];
    for p in &paths {
        if let Ok(c) = fs::read_to_string(p) {
            log::debug!("Loaded settings from {}", p);
            return Ok(c);
        }
    }
    anyhow::bail!("Could not load natal.toml from {:?}", paths);
}

/// Load settings from the default locations.
pub fn load_settings() -> anyhow::Result<NatalSettings> {
    let text = read_natal_toml_text()?;
    parse_settings(&text)
}

/// Load settings from an explicit file.
pub fn load_settings_from(path: &Path) -> anyhow::Result<NatalSettings> {
    let text = fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", path.display()))?;
    parse_settings(&text)
}

pub fn parse_settings(text: &str) -> anyhow::Result<NatalSettings> {
    let root: RootConfigToml =
        toml::from_str(text).map_err(|e| anyhow::anyhow!("Failed to parse natal.toml: {e}"))?;

    let house_system = match root.chart.house_system {
        Some(name) => name
            .parse::<HouseSystem>()
            .map_err(|e| anyhow::anyhow!("[chart] house_system: {e}"))?,
        None => HouseSystem::default(),
    };

    let wheel = wheel_geometry(&root.wheel)?;

    Ok(NatalSettings {
        house_system,
        wheel,
        samples_path: root.samples.path,
    })
}

fn wheel_geometry(cfg: &WheelToml) -> anyhow::Result<WheelGeometry> {
    let base = WheelGeometry::default();
    let width = cfg.width.unwrap_or(base.width);
    let height = cfg.height.unwrap_or(base.height);
    if !(width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0) {
        anyhow::bail!("[wheel] width and height must be positive, got {width} x {height}");
    }

    let mut geometry = WheelGeometry::scaled_to(width, height);
    let overrides = [
        (cfg.outer_radius, &mut geometry.outer_radius),
        (cfg.zodiac_radius, &mut geometry.zodiac_radius),
        (cfg.house_radius, &mut geometry.house_radius),
        (cfg.planet_radius, &mut geometry.planet_radius),
        (cfg.aspect_radius, &mut geometry.aspect_radius),
        (cfg.hub_radius, &mut geometry.hub_radius),
    ];
    for (value, slot) in overrides {
        if let Some(value) = value {
            *slot = value;
        }
    }

    geometry
        .validate()
        .map_err(|e| anyhow::anyhow!("[wheel] {e}"))?;
    Ok(geometry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let settings = parse_settings("").unwrap();
        assert_eq!(settings, NatalSettings::default());
    }

    #[test]
    fn test_full_file() {
        let settings = parse_settings(
            r#"
            [chart]
            house_system = "whole-sign"

            [wheel]
            width = 800.0
            height = 800.0
            hub_radius = 50.0

            [samples]
            path = "tests/fixtures/kiev_1972.json"
            "#,
        )
        .unwrap();
        assert_eq!(settings.house_system, HouseSystem::WholeSign);
        assert_eq!(settings.wheel.width, 800.0);
        assert_eq!(settings.wheel.center.x, 400.0);
        assert_eq!(settings.wheel.hub_radius, 50.0);
        assert_eq!(
            settings.samples_path.as_deref(),
            Some(Path::new("tests/fixtures/kiev_1972.json"))
        );
    }

    #[test]
    fn test_unknown_house_system_is_reported() {
        let err = parse_settings("[chart]\nhouse_system = \"porphyry\"").unwrap_err();
        assert!(err.to_string().contains("house_system"), "{err}");
    }

    #[test]
    fn test_unnested_radii_are_reported() {
        let err = parse_settings("[wheel]\nhub_radius = 500.0").unwrap_err();
        assert!(err.to_string().contains("[wheel]"), "{err}");
    }

    #[test]
    fn test_unknown_wheel_key_is_rejected() {
        assert!(parse_settings("[wheel]\nradius = 3").is_err());
    }

    #[test]
    fn test_shipped_settings_parse() {
        let settings = parse_settings(include_str!("../../../configs/natal.toml")).unwrap();
        assert_eq!(settings.house_system, HouseSystem::Placidus);
        assert_eq!(settings.wheel, WheelGeometry::default());
    }

    #[test]
    fn test_missing_file() {
        assert!(load_settings_from(Path::new("/nonexistent/natal.toml")).is_err());
    }
}
