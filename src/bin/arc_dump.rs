//! Prints a sampled arc as CSV (`t,x,y,z`).
//!
//! ```text
//! arc_dump [START_LAT START_LNG END_LAT END_LNG [SEGMENTS]]
//! ```
//! With no arguments, draws the equator/prime-meridian origin to London.

use anyhow::{bail, Context, Result};
use globe_arcs::{logging::init_logging, ArcConfig, GeoLocation, GlobeSession, SphereModel};
use tracing::info;

const DEFAULT_SEGMENTS: usize = 50;

fn parse_coord(args: &[String], index: usize, name: &str) -> Result<f64> {
    args[index]
        .parse()
        .with_context(|| format!("{name} must be a number, got {:?}", args[index]))
}

fn main() -> Result<()> {
    init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (start, end, segments) = match args.len() {
        0 => (
            GeoLocation::new(0.0, 0.0),
            GeoLocation::new(51.5074, 0.1278),
            DEFAULT_SEGMENTS,
        ),
        4 | 5 => {
            let start = GeoLocation::new(
                parse_coord(&args, 0, "START_LAT")?,
                parse_coord(&args, 1, "START_LNG")?,
            );
            let end = GeoLocation::new(
                parse_coord(&args, 2, "END_LAT")?,
                parse_coord(&args, 3, "END_LNG")?,
            );
            let segments = match args.get(4) {
                Some(raw) => raw
                    .parse()
                    .with_context(|| format!("SEGMENTS must be a positive integer, got {raw:?}"))?,
                None => DEFAULT_SEGMENTS,
            };
            (start, end, segments)
        }
        n => bail!("expected 0, 4 or 5 arguments, got {n}"),
    };

    if !start.is_in_range() || !end.is_in_range() {
        bail!("coordinates out of range: {start:?} -> {end:?}");
    }

    let session = GlobeSession::new(SphereModel::default(), ArcConfig::default())
        .context("building globe session")?;
    let arc = session.arc(&start, &end);
    info!(?start, ?end, segments, "sampling arc");

    println!("t,x,y,z");
    let steps = segments.max(1);
    for (i, p) in arc.sample(steps).iter().enumerate() {
        println!("{},{},{},{}", i as f64 / steps as f64, p.x, p.y, p.z);
    }
    Ok(())
}
