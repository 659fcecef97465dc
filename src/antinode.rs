use tailcall::tailcall;

use crate::{grid::AntennaMap, pairs::Pair, position::Position};

/// How far a pair's line is extended past its endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resonance {
    /// One gap beyond each endpoint.
    One,
    /// Every gap-spaced point along the line, endpoints included, until the edge of the map.
    Infinite,
}

impl Resonance {
    pub fn project(&self, pair: &Pair, map: &AntennaMap) -> Vec<Position> {
        let Pair {
            origin,
            destination,
            displacement,
        } = *pair;
        debug_assert_ne!(displacement, Position::default());
        match self {
            Resonance::One => [origin - displacement, destination + displacement]
                .into_iter()
                .filter(|antinode| map.contains(*antinode))
                .collect(),
            Resonance::Infinite => {
                let found = resonate(map, origin, -displacement, Vec::new());
                resonate(map, destination, displacement, found)
            }
        }
    }
}

#[tailcall]
fn resonate(
    map: &AntennaMap,
    position: Position,
    step: Position,
    mut found: Vec<Position>,
) -> Vec<Position> {
    match map.contains(position) {
        true => {
            found.push(position);
            resonate(map, position + step, step, found)
        }
        false => found,
    }
}
