//! Runtime configuration: command-line arguments, falling back to `ARCADE_*`
//! environment variables.
//!
//! | arg | env | default |
//! |-----|-----|---------|
//! | `snake` / `tetris` (positional) | `ARCADE_GAME` | snake |
//! | `--hide-controls` | `ARCADE_HIDE_CONTROLS` | controls shown |
//! | `--seed N` | `ARCADE_SEED` | entropy |
//! | `--log PATH` | `ARCADE_LOG_PATH` | no journal |

use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::Parser;

use crate::types::GameKind;

#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "tui-arcade", version, about = "Terminal Snake and Tetris")]
pub struct ArcadeConfig {
    /// Game to mount (snake or tetris)
    #[arg(env = "ARCADE_GAME", default_value = "snake", value_parser = parse_game)]
    pub game: GameKind,

    /// Deterministic RNG seed; seeds from OS entropy when absent
    #[arg(long, env = "ARCADE_SEED")]
    pub seed: Option<u32>,

    /// Append a JSONL gameplay journal to this file
    #[arg(long = "log", env = "ARCADE_LOG_PATH")]
    pub log_path: Option<PathBuf>,

    /// Hide the one-line controls hint under the playfield
    #[arg(long, env = "ARCADE_HIDE_CONTROLS", value_parser = BoolishValueParser::new())]
    pub hide_controls: bool,
}

impl Default for ArcadeConfig {
    fn default() -> Self {
        Self {
            game: GameKind::Snake,
            seed: None,
            log_path: None,
            hide_controls: false,
        }
    }
}

impl ArcadeConfig {
    pub fn show_controls(&self) -> bool {
        !self.hide_controls
    }
}

fn parse_game(s: &str) -> Result<GameKind, String> {
    GameKind::from_str(s).ok_or_else(|| format!("unknown game '{}' (expected snake or tetris)", s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    // Argument-only cases; environment fallback is covered in tests/config_test.rs.
    fn parse(args: &[&str]) -> Result<ArcadeConfig, clap::Error> {
        ArcadeConfig::try_parse_from(std::iter::once("tui-arcade").chain(args.iter().copied()))
    }

    #[test]
    fn defaults() {
        let cfg = parse(&[]).unwrap();
        assert_eq!(cfg, ArcadeConfig::default());
        assert!(cfg.show_controls());
    }

    #[test]
    fn all_arguments() {
        let cfg = parse(&["Tetris", "--seed", "9", "--log", "/tmp/arcade.jsonl", "--hide-controls"])
            .unwrap();
        assert_eq!(cfg.game, GameKind::Tetris);
        assert_eq!(cfg.seed, Some(9));
        assert_eq!(cfg.log_path, Some(PathBuf::from("/tmp/arcade.jsonl")));
        assert!(!cfg.show_controls());
    }

    #[test]
    fn invalid_values_are_errors() {
        assert!(parse(&["pong"]).is_err());
        assert!(parse(&["--seed", "-3"]).is_err());
        assert!(parse(&["--seed"]).is_err());
        assert!(parse(&["--fast"]).is_err());
    }

    #[test]
    fn help_flag() {
        let err = parse(&["--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }
}
