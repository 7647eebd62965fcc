use criterion::{black_box, criterion_group, criterion_main, Criterion};
use urania::chart::{BodyPlacement, HouseCusp, NatalChart};
use urania::{
    is_retrograde, project_wheel, render_svg, CelestialBody, EclipticPosition, HouseSystem,
    WheelGeometry,
};

fn chart() -> Option<NatalChart> {
    let bodies = CelestialBody::ALL
        .iter()
        .enumerate()
        .map(|(i, body)| {
            let speed = if i > 6 { -0.01 } else { 1.0 };
            Ok(BodyPlacement {
                body: *body,
                position: EclipticPosition::new(i as f64 * 29.1 + 3.0)?,
                speed,
                is_retrograde: is_retrograde(*body, speed),
            })
        })
        .collect::<Result<Vec<_>, urania::ChartError>>()
        .ok()?;
    let mut houses = Vec::with_capacity(12);
    for i in 0..12u8 {
        houses.push(HouseCusp {
            house: i + 1,
            position: EclipticPosition::new(169.7 + 30.0 * i as f64).ok()?,
        });
    }
    Some(NatalChart {
        julian_day: 2441390.149306,
        bodies,
        houses: houses.try_into().ok()?,
        ascendant: EclipticPosition::new(169.7).ok()?,
        midheaven: EclipticPosition::new(76.7).ok()?,
        house_system: HouseSystem::EqualHouses,
        place: None,
    })
}

fn bench_project_wheel(c: &mut Criterion) {
    let Some(chart) = chart() else { return };
    let geometry = WheelGeometry::default();
    c.bench_function("project_wheel", |b| {
        b.iter(|| project_wheel(black_box(&chart), black_box(&geometry)))
    });
}

fn bench_render_svg(c: &mut Criterion) {
    let Some(chart) = chart() else { return };
    let Ok(drawing) = project_wheel(&chart, &WheelGeometry::default()) else { return };
    c.bench_function("render_svg", |b| b.iter(|| render_svg(black_box(&drawing))));
}

criterion_group!(benches, bench_project_wheel, bench_render_svg);
criterion_main!(benches);
