use crate::cell::Cell;
use crate::score::{Score, ScoreState};

/// Owned, read-only copy of a grid for renderers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridSnapshot {
    pub rows: usize,
    pub cols: usize,
    /// Row-major cells (`row * cols + col`)
    pub cells: Vec<Cell>,
    pub color_count: u8,
    pub score: ScoreState,
    pub has_any_move: bool,
}

impl GridSnapshot {
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.cells.get(row * self.cols + col).copied()
    }

    /// Cells of one row (empty when out of range)
    pub fn row(&self, row: usize) -> &[Cell] {
        if row >= self.rows {
            return &[];
        }
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    pub fn objective_reached(&self) -> bool {
        self.score.points >= self.score.objective
    }
}

impl Default for GridSnapshot {
    fn default() -> Self {
        Self {
            rows: 0,
            cols: 0,
            cells: Vec::new(),
            color_count: 0,
            score: Score::default().state(),
            has_any_move: false,
        }
    }
}
