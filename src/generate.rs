use rand::{seq::SliceRandom, Rng};
use tracing::debug;

use crate::{
    catalog::{Event, EventCatalog, EventId},
    grid::Grid,
    Error,
};

pub const MIN_TICKET_PRICE: f64 = 0.99;
pub const MAX_TICKET_PRICE: f64 = 1001.0;

/// Places between one and `grid.vertex_n()` events on distinct coordinates.
/// Each event gets up to as many tickets as there are events, each priced at
/// least `MIN_TICKET_PRICE` and below `MAX_TICKET_PRICE`.
pub fn random_catalog<R: Rng>(grid: &Grid, rng: &mut R) -> Result<EventCatalog, Error> {
    let mut coords = grid.coords().collect::<Vec<_>>();
    let event_n = rng.random_range(1..=coords.len());
    coords.shuffle(rng);

    let mut catalog = EventCatalog::new();
    for (id, coord) in (0u32..).zip(coords.into_iter().take(event_n)) {
        let ticket_n = rng.random_range(0..=event_n);
        let tickets = (0..ticket_n)
            .map(|_| rng.random_range(MIN_TICKET_PRICE..MAX_TICKET_PRICE))
            .collect();
        catalog.insert(coord, Event::new(EventId(id), tickets))?;
    }
    debug!(event_n = catalog.len(), "Generated random event catalog.");

    Ok(catalog)
}
