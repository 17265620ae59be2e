use std::{
    collections::HashMap,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::{grid::Coord, Error};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EventId(pub u32);

impl Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:03}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    id: EventId,
    tickets: Vec<f64>,
}

impl Event {
    pub fn new(id: EventId, tickets: Vec<f64>) -> Self {
        Self { id, tickets }
    }

    pub fn id(&self) -> EventId {
        self.id
    }

    pub fn tickets(&self) -> &[f64] {
        &self.tickets
    }

    /// `None` when no tickets are left; a free ticket is `Some(0.0)`.
    pub fn cheapest_ticket(&self) -> Option<f64> {
        self.tickets.iter().copied().min_by(f64::total_cmp)
    }
}

#[derive(Debug, Default)]
pub struct EventCatalog {
    events: HashMap<Coord, Event>,
}

impl EventCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, coord: Coord, event: Event) -> Result<(), Error> {
        if self.events.contains_key(&coord) {
            return Err(Error::DuplicateEvent(coord, event.id()));
        }

        self.events.insert(coord, event);
        Ok(())
    }

    pub fn get(&self, coord: &Coord) -> Option<&Event> {
        self.events.get(coord)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Coord, &Event)> {
        self.events.iter()
    }
}

pub fn read_catalog<P: AsRef<Path>>(path: P) -> Result<EventCatalog> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut catalog = EventCatalog::new();
    for (ind, line) in reader.lines().enumerate() {
        let line = line.with_context(|| {
            format!(
                "Failed to read line {} of given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        let text = line.trim();
        if text.is_empty() || text.starts_with('#') {
            continue;
        }

        let (coord, event) = read_event(text)
            .with_context(|| format!("Failed to parse event in line {}.", ind + 1))?;
        catalog
            .insert(coord, event)
            .with_context(|| format!("Failed to add event in line {}.", ind + 1))?;
    }

    Ok(catalog)
}

// "x,y id [price ...]"
fn read_event(text: &str) -> Result<(Coord, Event), Error> {
    static EVENT_PATTERN: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^(-?\d+)\s*,\s*(-?\d+)\s+(\d+)((?:\s+\S+)*)$").unwrap());

    let caps = EVENT_PATTERN
        .captures(text)
        .ok_or_else(|| Error::InvalidEventText(text.to_string()))?;
    let x = caps[1]
        .parse::<i32>()
        .map_err(|_| Error::InvalidCoordinateText(caps[1].to_string()))?;
    let y = caps[2]
        .parse::<i32>()
        .map_err(|_| Error::InvalidCoordinateText(caps[2].to_string()))?;
    let id = caps[3]
        .parse::<u32>()
        .map_err(|_| Error::InvalidEventText(text.to_string()))?;
    let tickets = caps[4]
        .split_whitespace()
        .map(read_price)
        .collect::<Result<Vec<_>, _>>()?;

    Ok((Coord::new(x, y), Event::new(EventId(id), tickets)))
}

fn read_price(text: &str) -> Result<f64, Error> {
    text.parse::<f64>()
        .ok()
        .filter(|price| price.is_finite() && *price >= 0.0)
        .ok_or_else(|| Error::InvalidPriceText(text.to_string()))
}
