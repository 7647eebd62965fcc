use std::fmt::{self, Write};
use urania::notation::{compact_placement, compact_position, coordinates};
use urania::western::chart_balance;
use urania::{BirthData, NatalChart};

/// Plain-text summary of a chart: header, bodies, houses, angles, aspects
/// and element/modality/polarity balance.
pub fn chart_table(chart: &NatalChart, birth: &BirthData) -> Result<String, fmt::Error> {
    let mut out = String::new();
    write_table(&mut out, chart, birth)?;
    Ok(out)
}

fn write_table(out: &mut String, chart: &NatalChart, birth: &BirthData) -> fmt::Result {
    let place = chart.place.as_deref().unwrap_or("Unnamed place");
    writeln!(out, "{} ({})", place, coordinates(birth.latitude, birth.longitude))?;
    writeln!(
        out,
        "{} {} UTC{:+}  JD {:.6}  {}",
        birth.date,
        birth.time.format("%H:%M:%S"),
        birth.utc_offset_hours,
        chart.julian_day,
        chart.house_system
    )?;

    writeln!(out)?;
    writeln!(out, "{:<10} {:<10} {:>5}  {}", "Body", "Position", "House", "Sign")?;
    for placement in &chart.bodies {
        writeln!(
            out,
            "{:<10} {:<10} {:>5}  {}",
            placement.body.name(),
            compact_placement(placement),
            chart.house_of(placement.position),
            placement.sign_position()
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Houses")?;
    for cusp in &chart.houses {
        let marker = if cusp.is_angular() { "*" } else { "" };
        writeln!(
            out,
            "{:>3}{:<1} {}",
            cusp.house,
            marker,
            compact_position(cusp.position)
        )?;
    }

    writeln!(out)?;
    writeln!(
        out,
        "Asc {}  Dsc {}  MC {}  IC {}",
        compact_position(chart.ascendant),
        compact_position(chart.descendant()),
        compact_position(chart.midheaven),
        compact_position(chart.imum_coeli())
    )?;

    let aspects = chart.aspects();
    writeln!(out)?;
    writeln!(out, "Aspects ({})", aspects.len())?;
    for aspect in &aspects {
        writeln!(
            out,
            "{:<8} {} {:<8} orb {:.2}° {}",
            aspect.body_a.name(),
            aspect.kind.glyph(),
            aspect.body_b.name(),
            aspect.orb,
            if aspect.is_applying { "applying" } else { "separating" }
        )?;
    }

    let balance = chart_balance(chart);
    writeln!(out)?;
    writeln!(
        out,
        "Elements   fire {} earth {} air {} water {}",
        balance.elements.fire, balance.elements.earth, balance.elements.air, balance.elements.water
    )?;
    writeln!(
        out,
        "Modalities cardinal {} fixed {} mutable {}",
        balance.modalities.cardinal, balance.modalities.fixed, balance.modalities.mutable
    )?;
    writeln!(
        out,
        "Polarities positive {} negative {}",
        balance.polarities.positive, balance.polarities.negative
    )?;
    writeln!(
        out,
        "Asc {:?}/{:?}  MC {:?}/{:?}",
        balance.ascendant_element,
        balance.ascendant_modality,
        balance.midheaven_element,
        balance.midheaven_modality
    )
}
