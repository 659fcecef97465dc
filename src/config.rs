use std::path::PathBuf;

use clap::Parser;

use crate::grid::DEFAULT_EMPTY;

pub const DEFAULT_INPUT: &str = "inputs/day-8.txt";

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "day-8")]
#[command(about = "Count antinodes of same-frequency antennas", long_about = None)]
pub struct Config {
    /// Antenna map to read
    #[arg(default_value = DEFAULT_INPUT)]
    pub path: PathBuf,

    /// Character marking a cell without an antenna
    #[arg(long, default_value_t = DEFAULT_EMPTY, value_parser = parse_sentinel)]
    pub empty: char,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_INPUT),
            empty: DEFAULT_EMPTY,
        }
    }
}

fn parse_sentinel(value: &str) -> Result<char, String> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) if ch != '\n' && ch != '\r' => Ok(ch),
        _ => Err(format!("expected a single character, got {value:?}")),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn parse(args: &[&str]) -> Result<Config, clap::Error> {
        Config::try_parse_from(std::iter::once("day-8").chain(args.iter().copied()))
    }

    #[test]
    fn defaults_without_arguments() {
        assert_eq!(parse(&[]).unwrap(), Config::default());
    }

    #[test]
    fn reads_path_and_sentinel() {
        let config = parse(&["--empty", "_", "grid.txt"]).unwrap();
        assert_eq!(
            config,
            Config {
                path: PathBuf::from("grid.txt"),
                empty: '_',
            }
        );
    }

    #[rstest]
    #[case(&["--empty"])]
    #[case(&["--empty", "ab"])]
    #[case(&["--empty", ""])]
    #[case(&["--empty", "\n"])]
    #[case(&["--verbose"])]
    #[case(&["a.txt", "b.txt"])]
    fn rejects_bad_arguments(#[case] bad: &[&str]) {
        assert!(parse(bad).is_err());
    }
}
