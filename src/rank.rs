use crate::{
    catalog::EventCatalog,
    grid::{Coord, Grid},
    search::{self, EventHit},
    Error,
};

pub const CLOSEST_EVENTS_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct ClosestEvents {
    events: Vec<EventHit>,
    reachable_n: usize,
}

impl ClosestEvents {
    pub fn events(&self) -> &[EventHit] {
        &self.events
    }

    pub fn reachable_n(&self) -> usize {
        self.reachable_n
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Orders hits by distance, then event id, then coordinate, and keeps the first `limit`.
pub fn rank(mut hits: Vec<EventHit>, limit: usize) -> ClosestEvents {
    let reachable_n = hits.len();
    hits.sort_by(|a, b| {
        a.distance
            .total_cmp(&b.distance)
            .then(a.event_id.cmp(&b.event_id))
            .then(a.coord.cmp(&b.coord))
    });
    hits.truncate(limit);

    ClosestEvents {
        events: hits,
        reachable_n,
    }
}

pub fn closest_events(
    grid: &Grid,
    catalog: &EventCatalog,
    query: &Coord,
    limit: usize,
) -> Result<ClosestEvents, Error> {
    let hits = search::search_events(grid, catalog, query, query)?;
    Ok(rank(hits, limit))
}
