use tracing::debug;

use crate::{
    catalog::{EventCatalog, EventId},
    grid::{Coord, Grid},
    Error,
};

#[derive(Debug, Clone, PartialEq)]
pub struct EventHit {
    pub event_id: EventId,
    pub coord: Coord,
    pub cheapest: Option<f64>,
    pub distance: f64,
    pub hops: usize,
}

/// Walks the grid breadth first from `start` and records every event met on
/// the way, in visiting order. Distances are measured from `query`.
pub fn search_events(
    grid: &Grid,
    catalog: &EventCatalog,
    start: &Coord,
    query: &Coord,
) -> Result<Vec<EventHit>, Error> {
    let mut hits = Vec::new();
    let mut visited_n = 0;
    for (id, hops) in grid.bfs(start)? {
        visited_n += 1;
        let Some(coord) = grid.coord(id) else {
            continue;
        };

        if let Some(event) = catalog.get(&coord) {
            hits.push(EventHit {
                event_id: event.id(),
                coord,
                cheapest: event.cheapest_ticket(),
                distance: query.distance_to(&coord),
                hops,
            });
        }
    }

    debug!(
        start = %start,
        query = %query,
        visited_n,
        event_n = hits.len(),
        "Finished searching events."
    );

    Ok(hits)
}
