//! Command-line interface for grid_arcade.

use crate::games::snake::Heading;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;

/// Grid Arcade - turn marking and tick-driven movement on a grid
#[derive(Parser, Debug)]
#[command(name = "grid_arcade")]
#[command(about = "Grid-cell games in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file; defaults apply when absent
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// File that receives logs while a terminal game is running
    #[arg(long, global = true, default_value = "grid_arcade.log")]
    pub log_file: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play tic-tac-toe in the terminal
    Toe,

    /// Play snake in the terminal
    Snake {
        /// Override the tick period in milliseconds
        #[arg(long)]
        tick_ms: Option<u64>,
    },

    /// Play a turn game from a list of cell indices and print the result
    Replay {
        /// Cell indices in play order, comma separated (e.g. 0,3,1,4,2)
        #[arg(long, value_delimiter = ',', required = true)]
        moves: Vec<usize>,
    },

    /// Run the motion game for one tick per character and print the result
    Simulate {
        /// One character per tick: U, D, L, R change heading, '.' keeps it
        #[arg(long, value_parser = parse_path)]
        path: Path,
    },
}

/// Per-tick heading changes for a headless motion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path(pub Vec<Option<Heading>>);

impl FromStr for Path {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| match c {
                '.' => Ok(None),
                other => Heading::from_str(&other.to_string())
                    .map(Some)
                    .map_err(|_| format!("unknown heading '{}' (use U, D, L, R or .)", other)),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Path)
    }
}

fn parse_path(s: &str) -> Result<Path, String> {
    s.parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_replay() {
        let cli = Cli::try_parse_from(["grid_arcade", "replay", "--moves", "0,3,1,4,2"]).unwrap();
        match cli.command {
            Command::Replay { moves } => assert_eq!(moves, vec![0, 3, 1, 4, 2]),
            other => panic!("unexpected command {:?}", other),
        }
        assert_eq!(cli.log_file, PathBuf::from("grid_arcade.log"));
    }

    #[test]
    fn test_parse_simulate() {
        let cli = Cli::try_parse_from(["grid_arcade", "simulate", "--path", "RD.l"]).unwrap();
        match cli.command {
            Command::Simulate { path } => assert_eq!(
                path,
                Path(vec![
                    Some(Heading::Right),
                    Some(Heading::Down),
                    None,
                    Some(Heading::Left)
                ])
            ),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_bad_path_is_rejected() {
        assert!(Cli::try_parse_from(["grid_arcade", "simulate", "--path", "RX"]).is_err());
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::try_parse_from(["grid_arcade", "snake", "--config", "arcade.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("arcade.toml")));
    }
}
