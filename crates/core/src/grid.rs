//! Grid module - the match/clear engine
//!
//! The grid is a `rows x cols` array of cells stored row-major in one flat
//! buffer (`row * cols + col`). Row 0 is the top; gravity pulls cells toward the
//! last row.
//!
//! A shot runs `validate -> resolve -> remove -> respawn -> compact -> refill ->
//! score`. Plain cells clear their horizontal and vertical same-color runs and may
//! leave a special block behind. Special cells sweep a row, a column, both, or the
//! whole board, and detonate every other special they sweep over.

use tracing::{debug, trace};

use crate::cell::Cell;
use crate::error::{ConfigViolation, GridError, ShootError};
use crate::rng::{random_color, RandomSource, SimpleRng};
use crate::score::Score;
use crate::snapshot::GridSnapshot;
use crate::types::{
    SpecialKind, MAX_COLORS, MAX_DIMENSION, MIN_COLORS, MIN_DIMENSION, MIN_RUN_FOR_SPECIAL,
};

/// Inclusive bounds of the same-color runs through a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extents {
    pub left: usize,
    pub right: usize,
    pub top: usize,
    pub bottom: usize,
}

impl Extents {
    pub fn horizontal_len(&self) -> usize {
        self.right - self.left + 1
    }

    pub fn vertical_len(&self) -> usize {
        self.bottom - self.top + 1
    }
}

/// Outcome of a successful shot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShotReport {
    /// Cells that held a color and were cleared (including chained detonations)
    pub cleared: u32,
    /// Special block left behind by a long plain run
    pub spawned: Option<SpecialKind>,
    /// Specials detonated, the shot cell included
    pub detonations: u32,
}

/// Gravity owed by a detonation
///
/// Held back until the whole chain has swept so a nested detonation never shifts
/// cells into a row or column an outer sweep is still walking. Rows sort before
/// columns, and rows top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Settle {
    Row(usize),
    Column(usize),
}

/// The game grid
///
/// Owns its cells, the score tracker and the random source used for refills.
#[derive(Debug, Clone)]
pub struct Grid<R = SimpleRng> {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    color_count: u8,
    score: Score,
    rng: R,
}

impl<R: RandomSource> Grid<R> {
    /// Create a randomly filled grid
    ///
    /// Every violated constraint is reported in the returned error.
    pub fn random(rows: usize, cols: usize, color_count: u8, rng: R) -> Result<Self, GridError> {
        let mut violations = Vec::new();
        let dims = MIN_DIMENSION..=MAX_DIMENSION;
        if !dims.contains(&rows) || !dims.contains(&cols) {
            violations.push(ConfigViolation::InvalidDimensions {
                rows,
                cols,
                min: MIN_DIMENSION,
                max: MAX_DIMENSION,
            });
        }
        violations.extend(check_color_count(color_count));
        GridError::check(violations)?;

        let mut grid = Self::assemble(rows, cols, vec![Cell::BLANK; rows * cols], color_count, rng);
        grid.refill();
        debug!(rows, cols, color_count, "random grid created");
        Ok(grid)
    }

    /// Create a grid from a designed layout of color letters
    ///
    /// Rows must be non-empty and of equal length. `E` (or any unknown letter)
    /// is an empty cell. Layouts are not held to the random-grid size bounds.
    pub fn from_layout<S: AsRef<str>>(
        layout: &[S],
        color_count: u8,
        rng: R,
    ) -> Result<Self, GridError> {
        let mut violations = Vec::new();
        let rows = layout.len();
        let cols = layout
            .first()
            .map(|line| line.as_ref().chars().count())
            .unwrap_or(0);

        if rows == 0 || cols == 0 {
            violations.push(ConfigViolation::EmptyLayout);
        } else {
            for (row, line) in layout.iter().enumerate() {
                let found = line.as_ref().chars().count();
                if found != cols {
                    violations.push(ConfigViolation::RaggedLayout {
                        row,
                        expected: cols,
                        found,
                    });
                }
            }
        }
        violations.extend(check_color_count(color_count));
        GridError::check(violations)?;

        let cells = layout
            .iter()
            .flat_map(|line| line.as_ref().chars().map(Cell::from_letter))
            .collect();
        debug!(rows, cols, color_count, "layout grid created");
        Ok(Self::assemble(rows, cols, cells, color_count, rng))
    }

    /// Create a grid from prepared row-major cells (special blocks included)
    pub fn from_cells(
        rows: usize,
        cols: usize,
        cells: Vec<Cell>,
        color_count: u8,
        rng: R,
    ) -> Result<Self, GridError> {
        let mut violations = Vec::new();
        if rows == 0 || cols == 0 {
            violations.push(ConfigViolation::EmptyLayout);
        } else if cells.len() != rows * cols {
            violations.push(ConfigViolation::CellCountMismatch {
                expected: rows * cols,
                found: cells.len(),
            });
        }
        violations.extend(check_color_count(color_count));
        GridError::check(violations)?;

        Ok(Self::assemble(rows, cols, cells, color_count, rng))
    }

    fn assemble(rows: usize, cols: usize, cells: Vec<Cell>, color_count: u8, rng: R) -> Self {
        Self {
            rows,
            cols,
            cells,
            color_count,
            score: Score::default(),
            rng,
        }
    }

    /// Set the score objective
    pub fn with_objective(mut self, objective: u32) -> Self {
        self.score.set_objective(objective);
        self
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn color_count(&self) -> u8 {
        self.color_count
    }

    pub fn score(&self) -> &Score {
        &self.score
    }

    /// Row-major view of every cell
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.cells[self.index(row, col)])
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    fn spot(&self, row: i32, col: i32) -> Option<(usize, usize)> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        (row < self.rows && col < self.cols).then_some((row, col))
    }

    /// Same-color run bounds through `(row, col)`, or `None` out of range
    pub fn extents(&self, row: usize, col: usize) -> Option<Extents> {
        (row < self.rows && col < self.cols).then(|| self.run_extents(row, col))
    }

    fn run_extents(&self, row: usize, col: usize) -> Extents {
        let at = |r: usize, c: usize| &self.cells[r * self.cols + c];

        let mut left = col;
        while left > 0 && at(row, left).color_equals(at(row, left - 1)) {
            left -= 1;
        }
        let mut right = col;
        while right + 1 < self.cols && at(row, right).color_equals(at(row, right + 1)) {
            right += 1;
        }
        let mut top = row;
        while top > 0 && at(top, col).color_equals(at(top - 1, col)) {
            top -= 1;
        }
        let mut bottom = row;
        while bottom + 1 < self.rows && at(bottom, col).color_equals(at(bottom + 1, col)) {
            bottom += 1;
        }

        Extents {
            left,
            right,
            top,
            bottom,
        }
    }

    /// Whether shooting `(row, col)` would succeed
    pub fn has_match(&self, row: i32, col: i32) -> bool {
        self.spot(row, col)
            .map(|(r, c)| self.matches_at(r, c))
            .unwrap_or(false)
    }

    fn matches_at(&self, row: usize, col: usize) -> bool {
        let cell = self.cells[self.index(row, col)];
        if cell.is_blank() {
            return false;
        }
        if cell.is_special() {
            return true;
        }
        let ext = self.run_extents(row, col);
        ext.horizontal_len() > 1 || ext.vertical_len() > 1
    }

    /// Whether any cell on the grid can be shot
    ///
    /// Purely informational: shots are still accepted when this is false.
    pub fn has_any_move(&self) -> bool {
        (0..self.rows).any(|r| (0..self.cols).any(|c| self.matches_at(r, c)))
    }

    pub fn is_objective_reached(&self) -> bool {
        self.score.is_objective_reached()
    }

    /// Shoot the cell at `(row, col)`
    ///
    /// On success the grid is compacted and fully refilled. On failure the grid is
    /// untouched and the score takes the penalty.
    pub fn shoot(&mut self, row: i32, col: i32) -> Result<ShotReport, ShootError> {
        let (r, c) = match self.validate(row, col) {
            Ok(spot) => spot,
            Err(err) => {
                self.score.penalize();
                debug!(row, col, %err, points = self.score.points(), "shot rejected");
                return Err(err);
            }
        };

        let mut report = ShotReport::default();
        if self.cells[self.index(r, c)].is_special() {
            let mut settle = Vec::new();
            self.detonate(r, c, &mut report, &mut settle);
            self.settle(settle);
        } else {
            self.clear_run(r, c, &mut report);
        }

        // Chained detonations share this single streak advance and refill.
        self.score.advance_streak();
        self.refill();

        debug!(
            row = r,
            col = c,
            cleared = report.cleared,
            spawned = report.spawned.map(|k| k.as_str()),
            detonations = report.detonations,
            points = self.score.points(),
            multiplier = self.score.multiplier(),
            "shot resolved"
        );
        Ok(report)
    }

    fn validate(&self, row: i32, col: i32) -> Result<(usize, usize), ShootError> {
        let (r, c) = self.spot(row, col).ok_or(ShootError::OutOfBounds {
            row,
            col,
            rows: self.rows,
            cols: self.cols,
        })?;
        if !self.matches_at(r, c) {
            return Err(ShootError::NoMatch { row: r, col: c });
        }
        Ok((r, c))
    }

    /// Clear the plain runs through `(row, col)`, maybe leave a special, compact
    fn clear_run(&mut self, row: usize, col: usize, report: &mut ShotReport) {
        let ext = self.run_extents(row, col);
        let color = self.cells[self.index(row, col)].color();

        for c in ext.left..=ext.right {
            let idx = self.index(row, c);
            self.blank_at(idx, report);
        }
        // The shot cell sits in both runs and is credited once.
        for r in (ext.top..=ext.bottom).filter(|&r| r != row) {
            let idx = self.index(r, col);
            self.blank_at(idx, report);
        }

        if let Some(kind) = self.special_for_run(&ext) {
            let idx = self.index(row, col);
            self.cells[idx] = Cell::special(color, kind);
            report.spawned = Some(kind);
        }

        self.compact_width(row, ext.left, ext.right);
        self.compact_height(col, ext.top, ext.bottom);
    }

    /// Special earned by clearing the given runs (first match wins)
    ///
    /// Both runs are measured against the row count, so on a wide grid a cross as
    /// tall as the grid earns `AllBoard` without spanning every column.
    fn special_for_run(&self, ext: &Extents) -> Option<SpecialKind> {
        let h = ext.horizontal_len();
        let v = ext.vertical_len();
        if h == self.rows && v == self.rows {
            Some(SpecialKind::AllBoard)
        } else if h >= MIN_RUN_FOR_SPECIAL && v >= MIN_RUN_FOR_SPECIAL {
            Some(SpecialKind::RowAndColumn)
        } else if h >= MIN_RUN_FOR_SPECIAL {
            Some(SpecialKind::Row)
        } else if v >= MIN_RUN_FOR_SPECIAL {
            Some(SpecialKind::Column)
        } else {
            None
        }
    }

    /// Fire the special at `(row, col)`
    ///
    /// The charge is consumed before the sweep, so a chain can never come back
    /// to a special that is already going off. Compaction is queued in `settle`.
    fn detonate(
        &mut self,
        row: usize,
        col: usize,
        report: &mut ShotReport,
        settle: &mut Vec<Settle>,
    ) {
        let idx = self.index(row, col);
        let kind = self.cells[idx].special_kind();
        self.cells[idx].disarm();
        report.detonations += 1;
        trace!(row, col, kind = kind.as_str(), "detonating special");

        match kind {
            SpecialKind::Row => {
                self.sweep_row(row, report, settle);
                settle.push(Settle::Row(row));
            }
            SpecialKind::Column => {
                self.sweep_column(col, report, settle);
                settle.push(Settle::Column(col));
            }
            SpecialKind::RowAndColumn => {
                self.sweep_row(row, report, settle);
                self.sweep_column(col, report, settle);
                settle.push(Settle::Row(row));
            }
            SpecialKind::AllBoard => {
                for idx in 0..self.cells.len() {
                    self.blank_at(idx, report);
                }
            }
            SpecialKind::None => self.blank_at(idx, report),
        }
    }

    fn sweep_row(&mut self, row: usize, report: &mut ShotReport, settle: &mut Vec<Settle>) {
        for c in 0..self.cols {
            let idx = self.index(row, c);
            if self.cells[idx].is_special() {
                self.detonate(row, c, report, settle);
            } else {
                self.blank_at(idx, report);
            }
        }
    }

    fn sweep_column(&mut self, col: usize, report: &mut ShotReport, settle: &mut Vec<Settle>) {
        for r in 0..self.rows {
            let idx = self.index(r, col);
            if self.cells[idx].is_special() {
                self.detonate(r, col, report, settle);
            } else {
                self.blank_at(idx, report);
            }
        }
    }

    /// Apply the compaction queued by a detonation chain
    fn settle(&mut self, mut spans: Vec<Settle>) {
        spans.sort_unstable();
        spans.dedup();
        for span in spans {
            match span {
                Settle::Row(row) => self.compact_width(row, 0, self.cols - 1),
                Settle::Column(col) => self.compact_height(col, 0, self.rows - 1),
            }
        }
    }

    /// Blank one cell; only cells that still held a color are credited
    fn blank_at(&mut self, idx: usize, report: &mut ShotReport) {
        if !self.cells[idx].is_blank() {
            report.cleared += 1;
            self.score.add_points(1);
        }
        self.cells[idx].clear();
    }

    /// Bubble blanks upward in columns `left..=right`, from `row` to the top
    fn compact_width(&mut self, row: usize, left: usize, right: usize) {
        for r in (1..=row).rev() {
            for c in left..=right {
                let below = self.index(r, c);
                if self.cells[below].is_blank() {
                    self.cells.swap(below, below - self.cols);
                }
            }
        }
    }

    /// Re-run the upward bubbling for every blank left in `col`, rows `top..=bottom`
    fn compact_height(&mut self, col: usize, top: usize, bottom: usize) {
        for r in top..=bottom {
            if self.cells[self.index(r, col)].is_blank() {
                self.compact_width(r, col, col);
            }
        }
    }

    /// Replace every blank cell with a fresh random plain cell
    fn refill(&mut self) {
        let mut filled = 0u32;
        for cell in self.cells.iter_mut().filter(|cell| cell.is_blank()) {
            *cell = Cell::new(random_color(&mut self.rng, self.color_count));
            filled += 1;
        }
        trace!(filled, "refilled blank cells");
    }

    /// Letters of each row, rows joined by a single space
    pub fn debug_dump(&self) -> String {
        self.cells
            .chunks(self.cols)
            .map(|row| row.iter().map(Cell::letter).collect::<String>())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn snapshot(&self) -> GridSnapshot {
        let mut snap = GridSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    /// Fill an existing snapshot, reusing its cell buffer
    pub fn snapshot_into(&self, snap: &mut GridSnapshot) {
        snap.rows = self.rows;
        snap.cols = self.cols;
        snap.cells.clear();
        snap.cells.extend_from_slice(&self.cells);
        snap.color_count = self.color_count;
        snap.score = self.score.state();
        snap.has_any_move = self.has_any_move();
    }
}

fn check_color_count(color_count: u8) -> Option<ConfigViolation> {
    (!(MIN_COLORS..=MAX_COLORS).contains(&color_count)).then_some(
        ConfigViolation::InvalidColorCount {
            count: color_count,
            min: MIN_COLORS,
            max: MAX_COLORS,
        },
    )
}
