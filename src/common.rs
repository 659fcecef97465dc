use anyhow::Context;
use tracing::level_filters::LevelFilter;
use tracing_indicatif::IndicatifLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub mod antinode;
pub mod config;
pub mod error;
pub mod grid;
pub mod pairs;
pub mod position;
pub mod solve;

pub use antinode::Resonance;
pub use config::Config;
pub use error::LoadError;
pub use grid::{AntennaMap, Grid, Tile, DEFAULT_EMPTY};
pub use pairs::{pairs, Pair};
pub use position::Position;
pub use solve::{antinodes, count, solve, solve_parallel, Counts};

pub fn run(config: &Config) -> anyhow::Result<Counts> {
    let map = AntennaMap::load(&config.path, config.empty)
        .context("failed to load antenna map")?;
    let counts = solve_parallel(&map);
    tracing::info!(part_1 = counts.part_1, part_2 = counts.part_2);
    Ok(counts)
}

pub fn init_tracing() -> anyhow::Result<()> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env()?;
    let indicatif_layer = IndicatifLayer::new();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(indicatif_layer.get_stderr_writer()),
        )
        .with(indicatif_layer)
        .with(env_filter)
        .try_init()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn runs_the_sample_input() {
        let config = Config {
            path: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("inputs/sample.txt"),
            ..Config::default()
        };
        let mut out = Vec::new();
        run(&config).unwrap().write_to(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "14\n34\n");
    }

    #[test]
    fn missing_input_fails() {
        let config = Config {
            path: PathBuf::from("inputs/missing.txt"),
            ..Config::default()
        };
        assert!(run(&config).is_err());
    }
}
