use std::{collections::HashSet, io::Write};

use indicatif::ProgressStyle;
use tracing::Span;
use tracing_indicatif::span_ext::IndicatifSpanExt;

use crate::{antinode::Resonance, grid::AntennaMap, pairs::pairs, position::Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counts {
    pub part_1: usize,
    pub part_2: usize,
}

impl Counts {
    pub fn write_to(&self, mut out: impl Write) -> std::io::Result<()> {
        writeln!(out, "{}", self.part_1)?;
        writeln!(out, "{}", self.part_2)
    }
}

fn progress_style() -> ProgressStyle {
    ProgressStyle::with_template("{elapsed} {bar} {pos:>3}/{len:3} frequencies")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
}

fn collect_antinodes<'a>(
    map: &AntennaMap,
    groups: impl Iterator<Item = (char, &'a [Position])>,
    resonance: Resonance,
) -> HashSet<Position> {
    groups
        .flat_map(|(symbol, positions)| {
            let pairs = pairs(positions);
            tracing::debug!(%symbol, pairs = pairs.len(), "generated pairs");
            Span::current().pb_inc(1);
            pairs
        })
        .flat_map(|pair| {
            let found = resonance.project(&pair, map);
            tracing::trace!(?pair, ?found);
            found
        })
        .collect()
}

pub fn antinodes(map: &AntennaMap, resonance: Resonance) -> HashSet<Position> {
    let span = tracing::info_span!("antinodes", ?resonance);
    span.pb_set_style(&progress_style());
    span.pb_set_length(map.frequencies().len() as u64);
    let _span = span.enter();

    let groups = map
        .frequencies()
        .iter()
        .map(|(symbol, positions)| (*symbol, positions.as_slice()));
    let antinodes = collect_antinodes(map, groups, resonance);
    tracing::debug!("antinode map\n{}", map.render(&antinodes));
    antinodes
}

pub fn count(map: &AntennaMap, resonance: Resonance) -> usize {
    let total = antinodes(map, resonance).len();
    tracing::info!(?resonance, total, "antinodes counted");
    total
}

pub fn solve(map: &AntennaMap) -> Counts {
    Counts {
        part_1: count(map, Resonance::One),
        part_2: count(map, Resonance::Infinite),
    }
}

pub fn solve_parallel(map: &AntennaMap) -> Counts {
    let (part_1, part_2) = rayon::join(
        || count(map, Resonance::One),
        || count(map, Resonance::Infinite),
    );
    Counts { part_1, part_2 }
}
