use std::{error, fmt::Display, path::PathBuf};

use clap::Parser;

pub mod catalog;
pub mod generate;
pub mod grid;
pub mod rank;
pub mod search;

pub use catalog::{read_catalog, Event, EventCatalog, EventId};
pub use generate::random_catalog;
pub use grid::{Coord, Direction, Grid, VertexId};
pub use rank::{closest_events, rank, ClosestEvents, CLOSEST_EVENTS_LIMIT};
pub use search::{search_events, EventHit};

pub const DEFAULT_GRID_BOUND: u16 = 10;

#[derive(Debug)]
pub enum Error {
    VertexNotFound(Coord),
    DuplicateEvent(Coord, EventId),
    InvalidEventText(String),
    InvalidCoordinateText(String),
    InvalidPriceText(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::VertexNotFound(coord) => {
                write!(f, "No vertex at coordinate {} in grid.", coord)
            }
            Error::DuplicateEvent(coord, id) => write!(
                f,
                "Coordinate {} already hosts an event, can't add event {}.",
                coord, id
            ),
            Error::InvalidEventText(s) => write!(f, "Invalid text({}) for event.", s),
            Error::InvalidCoordinateText(s) => {
                write!(f, "Invalid text({}) for coordinate of event.", s)
            }
            Error::InvalidPriceText(s) => write!(f, "Invalid text({}) for ticket price.", s),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
#[command(about = "Find the closest events to a coordinate and their cheapest tickets.")]
pub struct CLIArgs {
    #[arg(allow_negative_numbers = true)]
    pub x: i32,
    #[arg(allow_negative_numbers = true)]
    pub y: i32,
    /// Grid spans [-bound, bound] on both axes.
    #[arg(long, default_value_t = DEFAULT_GRID_BOUND)]
    pub bound: u16,
    #[arg(long, default_value_t = CLOSEST_EVENTS_LIMIT)]
    pub limit: usize,
    /// Seed for the random event catalog, ignored when --events is given.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Read events from this file instead of generating them.
    #[arg(long)]
    pub events: Option<PathBuf>,
}
