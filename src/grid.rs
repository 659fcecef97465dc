use std::{
    collections::{HashMap, HashSet},
    path::Path,
};

use nom::{
    character::complete::{line_ending, none_of},
    combinator::{all_consuming, map, opt},
    multi::{many1, separated_list0},
    sequence::terminated,
    Finish, IResult,
};

use crate::{error::LoadError, position::Position};

pub const DEFAULT_EMPTY: char = '.';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Empty,
    Antenna(char),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T>(pub Vec<Vec<T>>);

impl<T> Grid<T> {
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.0.iter().map(Vec::as_slice)
    }
    pub fn indexed_iter(&self) -> impl Iterator<Item = (Position, &T)> {
        self.0.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(move |(x, t)| (Position::from((x, y)), t))
        })
    }
    pub fn get(&self, position: Position) -> Option<&T> {
        let x = usize::try_from(position.x).ok()?;
        let y = usize::try_from(position.y).ok()?;
        self.0.get(y).and_then(|row| row.get(x))
    }
    pub fn contains(&self, position: Position) -> bool {
        self.get(position).is_some()
    }
    pub fn width(&self) -> usize {
        self.0.first().map(|row| row.len()).unwrap_or(0)
    }
    pub fn height(&self) -> usize {
        self.0.len()
    }
}

fn parse_tiles(input: &str, empty: char) -> IResult<&str, Vec<Vec<Tile>>> {
    let tile = map(none_of("\r\n"), move |ch| match ch {
        ch if ch == empty => Tile::Empty,
        ch => Tile::Antenna(ch),
    });
    all_consuming(terminated(
        separated_list0(line_ending, many1(tile)),
        opt(line_ending),
    ))(input)
}

fn parse_grid(input: &str, empty: char) -> Result<Grid<Tile>, LoadError> {
    let (_, rows) = parse_tiles(input, empty).finish().map_err(|e| {
        let offset = input.len() - e.input.len();
        LoadError::Malformed {
            line: input[..offset].matches('\n').count() + 1,
        }
    })?;
    let expected = rows.first().map(Vec::len).unwrap_or(0);
    if let Some((idx, row)) = rows
        .iter()
        .enumerate()
        .find(|(_, row)| row.len() != expected)
    {
        return Err(LoadError::Ragged {
            line: idx + 1,
            expected,
            found: row.len(),
        });
    }
    Ok(Grid(rows))
}

fn map_antennas(grid: &Grid<Tile>) -> HashMap<char, Vec<Position>> {
    grid.indexed_iter()
        .flat_map(|(pos, tile)| match tile {
            Tile::Empty => None,
            Tile::Antenna(ch) => Some((*ch, pos)),
        })
        .fold(HashMap::new(), |mut map, (ch, pos)| {
            map.entry(ch).or_default().push(pos);
            map
        })
}

#[derive(Debug, Clone)]
pub struct AntennaMap {
    tiles: Grid<Tile>,
    empty: char,
    frequencies: HashMap<char, Vec<Position>>,
}

impl AntennaMap {
    pub fn parse(input: &str, empty: char) -> Result<Self, LoadError> {
        let tiles = parse_grid(input, empty)?;
        let frequencies = map_antennas(&tiles);
        Ok(Self {
            tiles,
            empty,
            frequencies,
        })
    }

    #[tracing::instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>, empty: char) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let input = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let map = Self::parse(&input, empty)?;
        tracing::info!(
            width = map.width(),
            height = map.height(),
            frequencies = map.frequencies.len(),
            "input loaded"
        );
        Ok(map)
    }

    pub fn width(&self) -> usize {
        self.tiles.width()
    }

    pub fn height(&self) -> usize {
        self.tiles.height()
    }

    pub fn contains(&self, position: Position) -> bool {
        self.tiles.contains(position)
    }

    pub fn frequencies(&self) -> &HashMap<char, Vec<Position>> {
        &self.frequencies
    }

    pub fn render(&self, antinodes: &HashSet<Position>) -> String {
        self.tiles
            .rows()
            .enumerate()
            .map(|(y, row)| {
                row.iter()
                    .enumerate()
                    .map(|(x, tile)| {
                        match (tile, antinodes.contains(&Position::from((x, y)))) {
                            (Tile::Empty, false) => self.empty,
                            (Tile::Empty, true) => '#',
                            (Tile::Antenna(ch), _) => *ch,
                        }
                    })
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
