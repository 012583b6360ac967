//! Command-line and environment configuration.
//!
//! Every option can be given as a flag or through a `CRUSH_*` environment
//! variable; flags win. [`GameConfig`] is the resolved form the rest of the
//! binary works with.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::core::{Grid, GridError, SimpleRng};

/// Designed 15x15 board played with `--demo`.
pub const DEMO_LAYOUT: [&str; 15] = [
    "GBBBBBBBBBBBBBR",
    "GRRRRRRRRRRRRPR",
    "GRRRPPPPPPPRPRR",
    "GRRRPRRRRRRPRRR",
    "GRRRPRRRRRPRRRR",
    "GRRRPRRRRPRRRRR",
    "GRRRPRRRPRRRRRR",
    "GRRRPRRPRRRRRRR",
    "GRRRPRPRRRRRRRR",
    "GRRRRPRRRRRRRRR",
    "GRRRPRRRRRRRRRR",
    "GRRPRRRRRRRRRRR",
    "GRPRRRRRRRRRRRR",
    "GPRRRRRRRRRRRRR",
    "RRRRRRRRRRRRRRR",
];
pub const DEMO_COLORS: u8 = 4;
pub const DEMO_OBJECTIVE: u32 = 80;

#[derive(Parser, Debug, Clone)]
#[command(name = "tui-crush")]
#[command(version, about = "Crush same-colored runs on a terminal grid")]
pub struct Cli {
    /// Board size, color count and objective preset
    #[arg(long, value_enum, env = "CRUSH_DIFFICULTY", default_value_t = Difficulty::Medium)]
    pub difficulty: Difficulty,

    /// Side length of the square board (overrides the preset)
    #[arg(long, env = "CRUSH_SIZE")]
    pub size: Option<usize>,

    /// Number of colors in play (overrides the preset)
    #[arg(long, env = "CRUSH_COLORS")]
    pub colors: Option<u8>,

    /// Points needed to win (overrides the preset)
    #[arg(long, env = "CRUSH_OBJECTIVE")]
    pub objective: Option<u32>,

    /// Seed for refill colors; random when absent
    #[arg(long, env = "CRUSH_SEED")]
    pub seed: Option<u32>,

    /// Play the designed 15x15 demo board
    #[arg(long, env = "CRUSH_DEMO")]
    pub demo: bool,

    /// Line mode: print the board and read "row col" from stdin
    #[arg(long, env = "CRUSH_TEXT")]
    pub text: bool,

    /// Log filter (RUST_LOG takes priority)
    #[arg(long, env = "CRUSH_LOG", default_value = "info")]
    pub log_level: String,

    /// Log file for the interactive mode (no logging without it)
    #[arg(long, env = "CRUSH_LOG_PATH")]
    pub log_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    VeryHard,
    Extreme,
    Insane,
}

impl Difficulty {
    /// `(size, colors, objective)` for this level
    pub fn preset(&self) -> (usize, u8, u32) {
        match self {
            Difficulty::Easy => (7, 3, 100),
            Difficulty::Medium => (12, 3, 200),
            Difficulty::Hard => (15, 4, 350),
            Difficulty::VeryHard => (18, 5, 500),
            Difficulty::Extreme => (21, 6, 900),
            Difficulty::Insane => (30, 7, 1900),
        }
    }
}

/// Which board a game starts from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardKind {
    /// Square board of random cells
    Random { size: usize, colors: u8 },
    /// [`DEMO_LAYOUT`]
    Demo,
}

/// Resolved game configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub board: BoardKind,
    pub objective: u32,
    pub seed: u32,
}

impl GameConfig {
    pub fn new(difficulty: Difficulty) -> Self {
        let (size, colors, objective) = difficulty.preset();
        Self {
            board: BoardKind::Random { size, colors },
            objective,
            seed: 1,
        }
    }

    pub fn demo() -> Self {
        Self {
            board: BoardKind::Demo,
            objective: DEMO_OBJECTIVE,
            seed: 1,
        }
    }

    /// Resolve CLI/env options. A missing seed is drawn from the OS RNG.
    pub fn from_cli(cli: &Cli) -> Self {
        let base = if cli.demo {
            Self::demo()
        } else {
            let mut config = Self::new(cli.difficulty);
            if let BoardKind::Random { size, colors } = &mut config.board {
                *size = cli.size.unwrap_or(*size);
                *colors = cli.colors.unwrap_or(*colors);
            }
            config
        };

        Self {
            objective: cli.objective.unwrap_or(base.objective),
            seed: cli.seed.unwrap_or_else(rand::random),
            ..base
        }
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// Same settings with a seed derived from this one
    pub fn next_seed(self) -> Self {
        let next = SimpleRng::new(self.seed).next_u32();
        self.with_seed(next)
    }

    /// Build the starting grid, reporting invalid size/color overrides
    pub fn build_grid(&self) -> Result<Grid, GridError> {
        let rng = SimpleRng::new(self.seed);
        let grid = match self.board {
            BoardKind::Random { size, colors } => Grid::random(size, size, colors, rng)?,
            BoardKind::Demo => Grid::from_layout(&DEMO_LAYOUT, DEMO_COLORS, rng)?,
        };
        Ok(grid.with_objective(self.objective))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["tui-crush"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn presets_match_levels() {
        assert_eq!(Difficulty::Easy.preset(), (7, 3, 100));
        assert_eq!(Difficulty::Hard.preset(), (15, 4, 350));
        assert_eq!(Difficulty::Insane.preset(), (30, 7, 1900));
    }

    #[test]
    fn overrides_replace_preset_values() {
        let cli = parse(&["--difficulty", "very-hard", "--size", "9", "--objective", "42", "--seed", "7"]);
        let config = GameConfig::from_cli(&cli);
        assert_eq!(config.board, BoardKind::Random { size: 9, colors: 5 });
        assert_eq!(config.objective, 42);
        assert_eq!(config.seed, 7);
    }

    #[test]
    fn demo_uses_designed_board() {
        let cli = parse(&["--demo", "--seed", "3"]);
        let config = GameConfig::from_cli(&cli);
        assert_eq!(config.board, BoardKind::Demo);
        assert_eq!(config.objective, DEMO_OBJECTIVE);

        let grid = config.build_grid().unwrap();
        assert_eq!((grid.rows(), grid.cols()), (15, 15));
        assert_eq!(grid.color_count(), DEMO_COLORS);
        assert!(grid.has_any_move());
    }

    #[test]
    fn invalid_overrides_surface_every_violation() {
        let cli = parse(&["--size", "40", "--colors", "9", "--seed", "1"]);
        let err = GameConfig::from_cli(&cli).build_grid().unwrap_err();
        assert_eq!(err.violations().len(), 2);
    }

    #[test]
    fn next_seed_is_deterministic() {
        let config = GameConfig::new(Difficulty::Easy).with_seed(5);
        assert_eq!(config.next_seed(), config.next_seed());
        assert_ne!(config.next_seed().seed, config.seed);
    }

    #[test]
    fn unknown_difficulty_is_rejected() {
        assert!(Cli::try_parse_from(["tui-crush", "--difficulty", "nightmare"]).is_err());
    }
}
