use std::{collections::VecDeque, fmt::Display};

use crate::Error;

pub type VertexId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Down,
    Up,
}

impl Direction {
    pub fn all_dirs() -> &'static [Direction] {
        static ALL_DIRECTIONS: [Direction; 4] = [
            Direction::Left,
            Direction::Right,
            Direction::Down,
            Direction::Up,
        ];

        &ALL_DIRECTIONS
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    x: i32,
    y: i32,
}

impl Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl Coord {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn neighbor(&self, dir: Direction) -> Self {
        match dir {
            Direction::Left => Self::new(self.x - 1, self.y),
            Direction::Right => Self::new(self.x + 1, self.y),
            Direction::Down => Self::new(self.x, self.y - 1),
            Direction::Up => Self::new(self.x, self.y + 1),
        }
    }

    pub fn distance_to(&self, other: &Coord) -> f64 {
        let dx = f64::from(self.x) - f64::from(other.x);
        let dy = f64::from(self.y) - f64::from(other.y);
        (dx * dx + dy * dy).sqrt()
    }
}

/// Square grid of unit-spaced vertices covering [-bound, bound] on both axes,
/// each connected to its orthogonal neighbors.
///
/// Vertex ids are assigned in construction order (x outer, y inner), so
/// `id = (x + bound) * side_len + (y + bound)`. The adjacency lists are the
/// only stored form of the edge set; `edges` and `contains_edge` read from them.
#[derive(Debug)]
pub struct Grid {
    bound: i32,
    side_len: usize,
    coords: Vec<Coord>,
    adjacency: Vec<Vec<VertexId>>,
}

impl Grid {
    pub fn new(bound: u16) -> Self {
        let side_len = 2 * usize::from(bound) + 1;
        let bound = i32::from(bound);
        let coords = (-bound..=bound)
            .flat_map(|x| (-bound..=bound).map(move |y| Coord::new(x, y)))
            .collect::<Vec<_>>();
        let mut grid = Self {
            bound,
            side_len,
            coords,
            adjacency: Vec::new(),
        };

        let adjacency: Vec<Vec<VertexId>> = grid
            .coords
            .iter()
            .map(|coord| {
                Direction::all_dirs()
                    .iter()
                    .filter_map(|dir| grid.vertex_id(&coord.neighbor(*dir)))
                    .collect()
            })
            .collect();
        grid.adjacency = adjacency;

        grid
    }

    pub fn bound(&self) -> i32 {
        self.bound
    }

    pub fn side_len(&self) -> usize {
        self.side_len
    }

    pub fn vertex_n(&self) -> usize {
        self.coords.len()
    }

    pub fn contains(&self, coord: &Coord) -> bool {
        (-self.bound..=self.bound).contains(&coord.x)
            && (-self.bound..=self.bound).contains(&coord.y)
    }

    pub fn vertex_id(&self, coord: &Coord) -> Option<VertexId> {
        if !self.contains(coord) {
            return None;
        }

        let col = usize::try_from(coord.x + self.bound).ok()?;
        let row = usize::try_from(coord.y + self.bound).ok()?;
        Some(col * self.side_len + row)
    }

    pub fn coord(&self, id: VertexId) -> Option<Coord> {
        self.coords.get(id).copied()
    }

    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        self.coords.iter().copied()
    }

    pub fn neighbors(&self, id: VertexId) -> &[VertexId] {
        self.adjacency.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn degree(&self, id: VertexId) -> usize {
        self.neighbors(id).len()
    }

    /// Each undirected edge once, as `(smaller id, larger id)`.
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.adjacency.iter().enumerate().flat_map(|(id, neighbors)| {
            neighbors
                .iter()
                .filter(move |next_id| id < **next_id)
                .map(move |next_id| (id, *next_id))
        })
    }

    pub fn edge_n(&self) -> usize {
        self.edges().count()
    }

    pub fn contains_edge(&self, from: VertexId, to: VertexId) -> bool {
        self.neighbors(from).contains(&to)
    }

    pub fn bfs(&self, start: &Coord) -> Result<Bfs<'_>, Error> {
        let start_id = self.vertex_id(start).ok_or(Error::VertexNotFound(*start))?;
        Ok(Bfs::new(self, start_id))
    }
}

/// Level-order walk over a [`Grid`], yielding each reachable vertex once with
/// its hop count from the start. Vertices are marked visited when enqueued.
#[derive(Debug)]
pub struct Bfs<'a> {
    grid: &'a Grid,
    visited: Vec<bool>,
    frontier: VecDeque<(VertexId, usize)>,
}

impl<'a> Bfs<'a> {
    fn new(grid: &'a Grid, start_id: VertexId) -> Self {
        let mut visited = vec![false; grid.vertex_n()];
        visited[start_id] = true;

        Self {
            grid,
            visited,
            frontier: VecDeque::from([(start_id, 0)]),
        }
    }
}

impl Iterator for Bfs<'_> {
    type Item = (VertexId, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (cur_id, cur_hops) = self.frontier.pop_front()?;
        for &next_id in self.grid.neighbors(cur_id) {
            if !self.visited[next_id] {
                self.visited[next_id] = true;
                self.frontier.push_back((next_id, cur_hops + 1));
            }
        }

        Some((cur_id, cur_hops))
    }
}
