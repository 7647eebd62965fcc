mod report;

use anyhow::Context;
use chrono::{NaiveDate, NaiveTime};
use clap::Parser;
use std::path::{Path, PathBuf};
use urania::{
    compute_chart, parse_utc_offset, project_wheel, render_svg, BirthData, EphemerisProvider,
    HouseSystem, RecordedEphemeris,
};
use urania_config::NatalSettings;

#[derive(Parser, Debug)]
#[command(author, version, about = "Compute a natal chart and draw its wheel")]
struct Args {
    /// Local birth date, YYYY-MM-DD.
    #[arg(long)]
    date: String,

    /// Local birth time, HH:MM or HH:MM:SS.
    #[arg(long)]
    time: String,

    /// UTC offset of the local time, e.g. `+3`, `-5.5`, `+05:30`.
    #[arg(long, allow_hyphen_values = true)]
    offset: String,

    /// Latitude in degrees, north positive.
    #[arg(long, allow_hyphen_values = true)]
    lat: f64,

    /// Longitude in degrees, east positive.
    #[arg(long, allow_hyphen_values = true)]
    lon: f64,

    /// House system; overrides `[chart] house_system` from the settings file.
    #[arg(long)]
    houses: Option<HouseSystem>,

    #[arg(long)]
    place: Option<String>,

    /// Print the chart as JSON instead of a table.
    #[arg(long)]
    json: bool,

    /// Write the chart wheel as SVG.
    #[arg(long)]
    svg: Option<PathBuf>,

    /// Settings file (default: configs/natal.toml when present).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Recorded ephemeris samples (JSON) used instead of the live backend.
    #[arg(long)]
    samples: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let settings = load_settings(args.config.as_deref())?;
    let birth = birth_data(&args, &settings)?;
    let provider = open_provider(args.samples.as_deref().or(settings.samples_path.as_deref()))?;

    let chart = compute_chart(&birth, &provider).context("Failed to compute chart")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&chart)?);
    } else {
        let table = report::chart_table(&chart, &birth).context("Failed to format chart")?;
        print!("{}", table);
    }

    if let Some(path) = &args.svg {
        let drawing = project_wheel(&chart, &settings.wheel).context("Invalid wheel geometry")?;
        let svg = render_svg(&drawing).context("Failed to render SVG")?;
        std::fs::write(path, svg).with_context(|| format!("Failed to write {}", path.display()))?;
        eprintln!("[natal] wheel -> {}", path.display());
    }

    Ok(())
}

fn load_settings(path: Option<&Path>) -> anyhow::Result<NatalSettings> {
    if let Some(path) = path {
        return urania_config::load_settings_from(path);
    }
    match urania_config::read_natal_toml_text() {
        Ok(text) => urania_config::parse_settings(&text),
        Err(e) => {
            log::debug!("{e}; using default settings");
            Ok(NatalSettings::default())
        }
    }
}

fn birth_data(args: &Args, settings: &NatalSettings) -> anyhow::Result<BirthData> {
    let date = NaiveDate::parse_from_str(&args.date, "%Y-%m-%d")
        .with_context(|| format!("Invalid --date {:?} (expected YYYY-MM-DD)", args.date))?;
    let time = NaiveTime::parse_from_str(&args.time, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(&args.time, "%H:%M"))
        .with_context(|| format!("Invalid --time {:?} (expected HH:MM[:SS])", args.time))?;
    let offset = parse_utc_offset(&args.offset)?;

    let mut birth = BirthData::new(date, time, offset, args.lat, args.lon)
        .with_house_system(args.houses.unwrap_or(settings.house_system));
    if let Some(place) = &args.place {
        birth = birth.with_place(place.clone());
    }
    birth.validate()?;
    Ok(birth)
}

fn open_provider(samples: Option<&Path>) -> anyhow::Result<Box<dyn EphemerisProvider>> {
    if let Some(path) = samples {
        let recorded = RecordedEphemeris::load(path)
            .with_context(|| format!("Failed to load samples {}", path.display()))?;
        return Ok(Box::new(recorded));
    }
    live_provider()
}

#[cfg(feature = "swiss-ephemeris")]
fn live_provider() -> anyhow::Result<Box<dyn EphemerisProvider>> {
    Ok(Box::new(urania::SwissEphemeris::try_open()?))
}

#[cfg(not(feature = "swiss-ephemeris"))]
fn live_provider() -> anyhow::Result<Box<dyn EphemerisProvider>> {
    anyhow::bail!("Built without the swiss-ephemeris feature; pass --samples <file.json>")
}
