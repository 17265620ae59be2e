use anyhow::{ensure, Context, Result};
use clap::Parser;
use find_events::{CLIArgs, ClosestEvents, Coord, EventCatalog, Grid};
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let args = CLIArgs::parse();
    let bound = i32::from(args.bound);
    ensure!(
        (-bound..=bound).contains(&args.x) && (-bound..=bound).contains(&args.y),
        "Please only enter values between {} and {}, given ({}, {}).",
        -bound,
        bound,
        args.x,
        args.y
    );

    let grid = Grid::new(args.bound);
    let catalog = load_catalog(&args, &grid)?;
    let query = Coord::new(args.x, args.y);
    let closest = find_events::closest_events(&grid, &catalog, &query, args.limit)
        .with_context(|| format!("Failed to search events near {}.", query))?;
    print_closest(&query, &closest);

    Ok(())
}

fn load_catalog(args: &CLIArgs, grid: &Grid) -> Result<EventCatalog> {
    if let Some(path) = &args.events {
        info!("Reading events from {}", path.display());
        return find_events::read_catalog(path).with_context(|| {
            format!("Failed to read events from given file({}).", path.display())
        });
    }

    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    info!(seed, "Generating random events");
    let mut rng = StdRng::seed_from_u64(seed);
    find_events::random_catalog(grid, &mut rng).context("Failed to generate random events.")
}

fn print_closest(query: &Coord, closest: &ClosestEvents) {
    if closest.is_empty() {
        println!("No events found near {}.", query);
        return;
    }

    println!("Closest Events to {}:", query);
    for hit in closest.events() {
        match hit.cheapest {
            Some(price) => println!(
                "Event {} - ${:.2}, Distance {:.2}",
                hit.event_id, price, hit.distance
            ),
            None => println!(
                "Event {} - No Tickets Available, Distance {:.2}",
                hit.event_id, hit.distance
            ),
        }
    }
}
