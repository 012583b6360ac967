//! Game session: a grid plus the cursor and status line a player sees.

use tracing::info;

use crate::config::GameConfig;
use crate::core::{Grid, GridError, GridSnapshot, ShootError, ShotReport};
use crate::types::PlayerAction;

/// One game in progress
///
/// Shots are ignored once the objective is reached; [`PlayerAction::Restart`]
/// starts a fresh game with the next seed.
#[derive(Debug, Clone)]
pub struct Session {
    config: GameConfig,
    grid: Grid,
    cursor: (usize, usize),
    message: String,
    games: u32,
}

impl Session {
    pub fn new(config: GameConfig) -> Result<Self, GridError> {
        let grid = config.build_grid()?;
        let cursor = (grid.rows() / 2, grid.cols() / 2);
        info!(seed = config.seed, rows = grid.rows(), cols = grid.cols(), "game started");
        Ok(Self {
            config,
            grid,
            cursor,
            message: start_message(config.objective),
            games: 1,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// `(row, col)` of the highlighted cell
    pub fn cursor(&self) -> (usize, usize) {
        self.cursor
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Games played, the current one included
    pub fn games(&self) -> u32 {
        self.games
    }

    pub fn is_won(&self) -> bool {
        self.grid.is_objective_reached()
    }

    pub fn snapshot(&self) -> GridSnapshot {
        self.grid.snapshot()
    }

    /// Apply one player action
    ///
    /// Only a restart can fail, and only if the configuration stopped producing a
    /// valid grid.
    pub fn apply(&mut self, action: PlayerAction) -> Result<(), GridError> {
        let (row, col) = self.cursor;
        let last_row = self.grid.rows().saturating_sub(1);
        let last_col = self.grid.cols().saturating_sub(1);

        match action {
            PlayerAction::MoveUp => self.cursor.0 = row.saturating_sub(1),
            PlayerAction::MoveDown => self.cursor.0 = (row + 1).min(last_row),
            PlayerAction::MoveLeft => self.cursor.1 = col.saturating_sub(1),
            PlayerAction::MoveRight => self.cursor.1 = (col + 1).min(last_col),
            PlayerAction::Shoot => {
                self.shoot_at(row as i32, col as i32);
            }
            PlayerAction::Restart => self.restart()?,
        }
        Ok(())
    }

    /// Shoot `(row, col)` and update the status line
    ///
    /// Returns `None` when the shot was ignored because the game is already won.
    pub fn shoot_at(&mut self, row: i32, col: i32) -> Option<Result<ShotReport, ShootError>> {
        if self.is_won() {
            self.message = String::from("Objective reached! Press R for a new game");
            return None;
        }

        let result = self.grid.shoot(row, col);
        self.message = match &result {
            Ok(report) => describe(report),
            Err(err) => format!("Missed: {}", err),
        };

        if self.is_won() {
            let score = self.grid.score();
            info!(points = score.points(), objective = score.objective(), "objective reached");
            self.message = format!("Objective reached with {} points!", score.points());
        }
        Some(result)
    }

    /// Start a new game with the same settings and the next seed
    pub fn restart(&mut self) -> Result<(), GridError> {
        let config = self.config.next_seed();
        let grid = config.build_grid()?;
        info!(seed = config.seed, "game restarted");

        self.cursor = (
            self.cursor.0.min(grid.rows().saturating_sub(1)),
            self.cursor.1.min(grid.cols().saturating_sub(1)),
        );
        self.config = config;
        self.grid = grid;
        self.message = start_message(config.objective);
        self.games += 1;
        Ok(())
    }
}

fn start_message(objective: u32) -> String {
    format!("Reach {} points. Enter shoots, R restarts, Q quits", objective)
}

fn describe(report: &ShotReport) -> String {
    let mut msg = format!("Cleared {} cells", report.cleared);
    if report.detonations > 1 {
        msg.push_str(&format!(", {} specials chained", report.detonations));
    }
    if let Some(kind) = report.spawned {
        msg.push_str(&format!(", {} special created", kind.as_str()));
    }
    msg
}
