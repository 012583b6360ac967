//! Grid tests - shot resolution, specials, scoring and construction

use tui_crush::core::{
    Cell, ConfigViolation, Grid, RandomSource, SequenceSource, ShootError, SimpleRng,
};
use tui_crush::types::{Color, SpecialKind};

const ROW_EXAMPLE: [&str; 5] = ["RRRRR", "BBRRR", "BBBBB", "GGBBB", "BBGGG"];

fn layout(rows: &[&str], color_count: u8, fill: Color) -> Grid<SequenceSource> {
    Grid::from_layout(rows, color_count, SequenceSource::of_colors(&[fill])).unwrap()
}

fn assert_full<R: RandomSource>(grid: &Grid<R>) {
    assert_eq!(grid.cells().len(), grid.rows() * grid.cols());
    for (i, cell) in grid.cells().iter().enumerate() {
        assert!(!cell.is_blank(), "blank cell at index {} in {}", i, grid.debug_dump());
    }
}

#[test]
fn test_long_row_spawns_row_special() {
    let mut grid = layout(&ROW_EXAMPLE, 4, Color::Yellow);
    let report = grid.shoot(0, 0).unwrap();

    assert_eq!(report.cleared, 5);
    assert_eq!(report.spawned, Some(SpecialKind::Row));
    assert_eq!(
        grid.get(0, 0),
        Some(Cell::special(Color::Red, SpecialKind::Row))
    );
    assert_eq!(grid.debug_dump(), "RYYYY BBRRR BBBBB GGBBB BBGGG");
    assert_eq!(grid.score().points(), 50);
    assert_full(&grid);
    assert!(grid.has_any_move());
}

#[test]
fn test_row_special_detonation_clears_its_row() {
    let mut grid = layout(&ROW_EXAMPLE, 4, Color::Yellow);
    grid.shoot(0, 0).unwrap();

    let report = grid.shoot(0, 0).unwrap();
    assert_eq!(report.cleared, 5);
    assert_eq!(report.detonations, 1);
    assert_eq!(grid.debug_dump(), "YYYYY BBRRR BBBBB GGBBB BBGGG");
    assert_eq!(grid.score().points(), 100);
    assert_eq!(grid.score().streak(), 2);
}

#[test]
fn test_isolated_cell_is_rejected() {
    let mut grid = layout(&["RGB", "RBY", "GYB"], 4, Color::Red);
    assert_eq!(
        grid.shoot(0, 1),
        Err(ShootError::NoMatch { row: 0, col: 1 })
    );
    assert_eq!(grid.debug_dump(), "RGB RBY GYB");
    assert_eq!(grid.score().points(), 0);
}

#[test]
fn test_rejected_shot_costs_points_and_streak() {
    let mut grid = layout(&ROW_EXAMPLE, 4, Color::Yellow);
    grid.shoot(0, 0).unwrap();
    assert_eq!(grid.score().points(), 50);
    let before = grid.debug_dump();

    let err = grid.shoot(10, 10).unwrap_err();
    assert!(matches!(err, ShootError::OutOfBounds { .. }));
    assert_eq!(grid.debug_dump(), before);
    assert_eq!(grid.score().points(), 40);
    assert_eq!(grid.score().streak(), 0);
    assert_eq!(grid.score().multiplier(), 1);
}

#[test]
fn test_out_of_range_shots() {
    let mut grid = layout(&ROW_EXAMPLE, 4, Color::Yellow);
    let before: Vec<Cell> = grid.cells().to_vec();

    for (row, col) in [(-10, 0), (0, -10), (0, 100), (30, 0), (5, 0), (0, 5)] {
        assert!(
            matches!(grid.shoot(row, col), Err(ShootError::OutOfBounds { .. })),
            "({}, {}) should be out of range",
            row,
            col
        );
        assert!(!grid.has_match(row, col));
    }
    assert_eq!(grid.cells(), &before[..]);
}

#[test]
fn test_full_cross_spawns_all_board_at_shot_cell() {
    let mut grid = layout(&["RRR", "RRR", "RRR"], 4, Color::Green);
    let report = grid.shoot(0, 0).unwrap();

    assert_eq!(report.spawned, Some(SpecialKind::AllBoard));
    assert_eq!(report.cleared, 5);
    // The special falls to the bottom of column 0.
    assert_eq!(
        grid.get(2, 0),
        Some(Cell::special(Color::Red, SpecialKind::AllBoard))
    );
    let special = grid
        .cells()
        .iter()
        .filter(|c| c.special_kind() == SpecialKind::AllBoard)
        .count();
    assert_eq!(special, 1);
}

#[test]
fn test_all_board_detonation_leaves_no_blank() {
    let mut grid = layout(&["RRR", "RRR", "RRR"], 4, Color::Green);
    grid.shoot(1, 1).unwrap();

    let report = grid.shoot(2, 1).unwrap();
    assert_eq!(report.cleared, 9);
    assert_full(&grid);
    assert!(grid.cells().iter().all(|c| !c.is_special()));
}

#[test]
fn test_chain_reaction_counts_each_special_once() {
    let mut cells: Vec<Cell> = ["GYG", "RBR", "YGY"]
        .concat()
        .chars()
        .map(Cell::from_letter)
        .collect();
    cells[3] = Cell::special(Color::Red, SpecialKind::Row);
    cells[5] = Cell::special(Color::Red, SpecialKind::Row);
    let mut grid =
        Grid::from_cells(3, 3, cells, 7, SequenceSource::of_colors(&[Color::White])).unwrap();

    let report = grid.shoot(1, 0).unwrap();
    assert_eq!(report.detonations, 2);
    assert_eq!(report.cleared, 3);
    assert_eq!(grid.debug_dump(), "WWW GYG YGY");
    assert_eq!(grid.score().streak(), 1);
}

#[test]
fn test_plain_shot_clears_exactly_its_runs() {
    let mut grid = Grid::random(12, 12, 3, SimpleRng::new(2024)).unwrap();
    let mut spots = SimpleRng::new(77);

    for _ in 0..300 {
        let row = (spots.next_u32() % 12) as i32;
        let col = (spots.next_u32() % 12) as i32;
        let cell = grid.get(row as usize, col as usize).unwrap();

        let expected = if cell.is_special() || !grid.has_match(row, col) {
            None
        } else {
            let ext = grid.extents(row as usize, col as usize).unwrap();
            Some((ext.horizontal_len() + ext.vertical_len() - 1) as u32)
        };

        match (grid.shoot(row, col), expected) {
            (Ok(report), Some(cleared)) => assert_eq!(report.cleared, cleared),
            (Ok(report), None) => assert!(report.detonations >= 1),
            (Err(err), None) => assert!(matches!(err, ShootError::NoMatch { .. })),
            (Err(err), Some(_)) => panic!("valid shot rejected: {}", err),
        }
        assert_full(&grid);
    }
}

#[test]
fn test_same_seed_same_game() {
    let mut a = Grid::random(9, 9, 4, SimpleRng::new(5)).unwrap();
    let mut b = Grid::random(9, 9, 4, SimpleRng::new(5)).unwrap();
    assert_eq!(a.debug_dump(), b.debug_dump());

    for i in 0..40 {
        let (row, col) = (i % 9, (i * 4) % 9);
        assert_eq!(a.shoot(row, col), b.shoot(row, col));
    }
    assert_eq!(a.debug_dump(), b.debug_dump());
    assert_eq!(a.score(), b.score());
}

#[test]
fn test_shooting_without_moves_is_still_allowed() {
    let mut grid = layout(&["RGR", "GRG", "RGR"], 2, Color::Red);
    assert!(!grid.has_any_move());
    assert!(matches!(grid.shoot(1, 1), Err(ShootError::NoMatch { .. })));
}

#[test]
fn test_objective() {
    let mut grid = layout(&ROW_EXAMPLE, 4, Color::Yellow).with_objective(50);
    assert!(!grid.is_objective_reached());
    grid.shoot(0, 0).unwrap();
    assert!(grid.is_objective_reached());
    assert!(grid.snapshot().objective_reached());
}

#[test]
fn test_random_grid_is_full_and_within_palette() {
    let grid = Grid::random(35, 35, 7, SimpleRng::new(11)).unwrap();
    assert_full(&grid);
    assert!(grid.cells().iter().all(|c| !c.is_special()));

    let small = Grid::random(3, 3, 2, SimpleRng::new(11)).unwrap();
    assert!(small
        .cells()
        .iter()
        .all(|c| matches!(c.color(), Color::Red | Color::Green)));
}

#[test]
fn test_construction_errors_are_aggregated() {
    let err = Grid::random(2, 40, 9, SimpleRng::new(1)).unwrap_err();
    assert_eq!(err.violations().len(), 2);
    assert!(matches!(
        err.violations()[0],
        ConfigViolation::InvalidDimensions { rows: 2, cols: 40, .. }
    ));
    assert!(matches!(
        err.violations()[1],
        ConfigViolation::InvalidColorCount { count: 9, .. }
    ));

    let err = Grid::random(3, 3, 1, SimpleRng::new(1)).unwrap_err();
    assert_eq!(err.violations().len(), 1);

    let empty: [&str; 0] = [];
    let err = Grid::from_layout(&empty, 4, SimpleRng::new(1)).unwrap_err();
    assert_eq!(err.violations(), &[ConfigViolation::EmptyLayout]);

    let err = Grid::from_layout(&["RGB", "RG"], 4, SimpleRng::new(1)).unwrap_err();
    assert_eq!(
        err.violations(),
        &[ConfigViolation::RaggedLayout {
            row: 1,
            expected: 3,
            found: 2
        }]
    );

    let err = Grid::from_cells(3, 3, vec![Cell::BLANK; 4], 4, SimpleRng::new(1)).unwrap_err();
    assert!(matches!(
        err.violations()[0],
        ConfigViolation::CellCountMismatch { expected: 9, found: 4 }
    ));
}

#[test]
fn test_unknown_layout_letters_are_blank() {
    let grid = layout(&["RXR", "GgB", "BGR"], 4, Color::Red);
    assert!(grid.get(0, 1).unwrap().is_blank());
    assert!(grid.get(1, 1).unwrap().is_blank());
    assert_eq!(grid.debug_dump(), "RER GEB BGR");
}
