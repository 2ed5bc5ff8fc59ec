//! Prints overlap classifications for a set of reference mask scenarios.
//!
//! Usage:
//! ```text
//! cargo run --example classify                      # all scenarios
//! cargo run --example classify -- concave_notch     # one scenario
//! RUST_LOG=maskgeo=trace cargo run --example classify
//! ```

use maskgeo::geometry::{Circle, OverlapCode, Polygon, Region};
use maskgeo::math::Point2;
use maskgeo::operations::{ClassifyBatch, ClassifyOverlap};

struct Scenario {
    name: &'static str,
    mask: Region,
    region: Region,
}

fn circle(x: f64, y: f64, r: f64) -> maskgeo::Result<Region> {
    Ok(Circle::new(Point2::new(x, y), r)?.into())
}

fn polygon(coords: &[(f64, f64)]) -> maskgeo::Result<Region> {
    Ok(Polygon::from_coords(coords)?.into())
}

fn scenarios() -> maskgeo::Result<Vec<Scenario>> {
    let unit = circle(0.0, 0.0, 1.0)?;
    Ok(vec![
        Scenario {
            name: "disjoint_circles",
            mask: unit.clone(),
            region: circle(5.0, 5.0, 1.0)?,
        },
        Scenario {
            name: "partial_circles",
            mask: unit.clone(),
            region: circle(1.2, 0.0, 0.4)?,
        },
        Scenario {
            name: "contained_circle",
            mask: unit.clone(),
            region: circle(0.3, 0.0, 0.1)?,
        },
        Scenario {
            name: "circle_inside_square",
            mask: unit,
            region: polygon(&[(10.0, 10.0), (-10.0, 10.0), (-10.0, -10.0), (10.0, -10.0)])?,
        },
        Scenario {
            name: "triangle_inside_circle",
            mask: polygon(&[(0.0, 1.0), (1.0, -1.0), (-1.0, -1.0)])?,
            region: circle(0.1, 0.0, 6.0)?,
        },
        Scenario {
            name: "concave_notch",
            mask: polygon(&[(0.0, 0.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0), (-1.0, -1.0)])?,
            region: circle(0.0, -0.1, 0.05)?,
        },
    ])
}

fn main() -> maskgeo::Result<()> {
    // Default: WARN for everything, INFO for maskgeo.
    // Override with RUST_LOG env var (e.g. RUST_LOG=maskgeo=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("maskgeo=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let filter = std::env::args().nth(1);
    let scenarios = scenarios()?;
    for s in scenarios
        .iter()
        .filter(|s| filter.as_deref().is_none_or(|f| f == s.name))
    {
        let (forward, reverse) = ClassifyOverlap::new(&s.mask, &s.region).execute_both();
        println!(
            "{:<24} {} vs {}: {} ({}), reverse {} ({})",
            s.name,
            s.mask.kind(),
            s.region.kind(),
            forward,
            forward.code(),
            reverse,
            reverse.code(),
        );
    }

    let regions: Vec<Region> = scenarios.iter().map(|s| s.region.clone()).collect();
    let mask = circle(0.0, 0.0, 1.0)?;
    let tally = ClassifyBatch::new(&mask, &regions).tally();
    println!(
        "unit circle vs all regions: {} {}, {} {}, {} {}",
        tally.disjoint,
        OverlapCode::Disjoint,
        tally.partial,
        OverlapCode::Partial,
        tally.contained,
        OverlapCode::Contained,
    );
    Ok(())
}
