//! Run the naive and optimized searches on the same request and show both
//! paths with their timings.
//!
//! Run: cargo run --bin compare -- [--random WxH] [--seed N] [x0 y0 x1 y1]
//!
//! Without `--random` the built-in town map is used. Without coordinates
//! the search runs between the first and last walkable tiles. Set
//! `RUST_LOG=debug` to see per-search logs.

use std::error::Error;

use tilepath::{Algorithm, Pathfinder, PathfinderConfig, Point, WalkabilityGrid};
use tilepath_demos::{TOWN, far_corners, random_map, render_overlay};

struct Args {
    random: Option<(u32, u32)>,
    seed: u64,
    request: Option<(Point, Point)>,
}

fn parse_args() -> Result<Args, Box<dyn Error>> {
    let mut args = Args {
        random: None,
        seed: 42,
        request: None,
    };
    let mut coords = Vec::new();
    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--random" => {
                let size = it.next().ok_or("--random needs WxH")?;
                let (w, h) = size.split_once('x').ok_or("--random needs WxH")?;
                args.random = Some((w.parse()?, h.parse()?));
            }
            "--seed" => {
                args.seed = it.next().ok_or("--seed needs a number")?.parse()?;
            }
            _ => coords.push(arg.parse::<i32>()?),
        }
    }
    match coords.as_slice() {
        [] => {}
        &[x0, y0, x1, y1] => args.request = Some((Point::new(x0, y0), Point::new(x1, y1))),
        _ => return Err("expected four coordinates: x0 y0 x1 y1".into()),
    }
    Ok(args)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = parse_args()?;

    let grid = match args.random {
        Some((w, h)) => random_map(args.seed, w, h, 0.3),
        None => WalkabilityGrid::from_ascii(TOWN)?,
    };
    let (origin, destination) = match args.request {
        Some(req) => req,
        None => far_corners(&grid).ok_or("map has no walkable tiles")?,
    };

    let mut pf = Pathfinder::with_grid(PathfinderConfig::default(), grid);
    log::info!("request {origin} -> {destination}");

    for algorithm in [Algorithm::Naive, Algorithm::Optimized] {
        let result = pf.find_path_with(algorithm, origin, destination);
        let summary = match (result.steps(), result.cost()) {
            (Some(steps), Some(cost)) => format!("{steps} steps, cost {cost}"),
            _ => "no path".to_string(),
        };
        let stats = pf.last_stats().ok_or("search recorded no statistics")?;
        println!(
            "{algorithm}: {summary}, {} nodes expanded in {:?}",
            stats.expanded, stats.elapsed
        );
        println!("{}", render_overlay(pf.grid(), pf.last_path()));
    }
    Ok(())
}
