//! Unit tests for rover-grid.
//!
//! Maps are written in the `.`/`#` text format wherever the layout matters.

#[cfg(test)]
mod construction {
    use rover_core::Cell;

    use crate::{Grid, GridBuilder, GridError};

    #[test]
    fn from_rows_rectangular() {
        let grid = Grid::from_rows(&[
            [true, false, true],
            [true, true,  true],
        ])
        .unwrap();
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.len(), 6);
        assert_eq!(grid.open_count(), 5);
    }

    #[test]
    fn from_rows_ragged_rejected() {
        let matrix = vec![vec![true, true], vec![true], vec![true, true]];
        let err = Grid::from_rows(&matrix).unwrap_err();
        assert_eq!(err, GridError::Ragged { row: 1, expected: 2, found: 1 });
    }

    #[test]
    fn empty_matrix_gives_empty_grid() {
        let matrix: Vec<Vec<bool>> = vec![];
        let grid = Grid::from_rows(&matrix).unwrap();
        assert!(grid.is_empty());
        assert_eq!((grid.rows(), grid.cols()), (0, 0));
        assert!(!grid.traversable(0, 0));
    }

    #[test]
    fn from_flat_checks_length() {
        assert!(Grid::from_flat(2, 2, vec![true; 4]).is_ok());
        let err = Grid::from_flat(2, 2, vec![true; 3]).unwrap_err();
        assert!(matches!(err, GridError::CellCount { expected: 4, found: 3, .. }));
    }

    #[test]
    fn builder_blocks_and_unblocks() {
        let mut b = GridBuilder::new(2, 2);
        b.block(Cell::new(0, 1)).unwrap();
        b.block(Cell::new(1, 1)).unwrap().unblock(Cell::new(1, 1)).unwrap();
        let grid = b.build();
        assert!(!grid.traversable(0, 1));
        assert!(grid.traversable(1, 1));
        assert_eq!(grid.open_count(), 3);
    }

    #[test]
    fn builder_rejects_out_of_range() {
        let mut b = GridBuilder::new(2, 2);
        let err = b.block(Cell::new(2, 0)).err().unwrap();
        assert!(matches!(err, GridError::OutOfBounds { rows: 2, cols: 2, .. }));
    }
}

#[cfg(test)]
mod queries {
    use rover_core::Cell;

    use crate::Grid;

    fn plus() -> Grid {
        "
        #.#
        ...
        #.#
        "
        .parse()
        .unwrap()
    }

    #[test]
    fn traversable_respects_flags_and_bounds() {
        let grid = plus();
        assert!(grid.traversable(1, 1));
        assert!(grid.traversable(0, 1));
        assert!(!grid.traversable(0, 0));
        assert!(!grid.traversable(3, 1));
        assert!(!grid.traversable(1, 3));
        assert!(!grid.traversable(usize::MAX, 0));
    }

    #[test]
    fn index_is_row_major() {
        let grid = plus();
        assert_eq!(grid.index(Cell::new(0, 0)), 0);
        assert_eq!(grid.index(Cell::new(1, 0)), 3);
        assert_eq!(grid.index(Cell::new(2, 2)), 8);
    }

    #[test]
    fn neighbors_in_probe_order() {
        let grid = plus();
        let n: Vec<_> = grid.open_neighbors(Cell::new(1, 1)).collect();
        assert_eq!(n, vec![
            Cell::new(0, 1), // up
            Cell::new(2, 1), // down
            Cell::new(1, 0), // left
            Cell::new(1, 2), // right
        ]);
    }

    #[test]
    fn neighbors_skip_blocked_and_edges() {
        let grid = plus();
        let n: Vec<_> = grid.open_neighbors(Cell::new(0, 1)).collect();
        assert_eq!(n, vec![Cell::new(1, 1)]);
        let corner: Vec<_> = Grid::open(1, 1).open_neighbors(Cell::new(0, 0)).collect();
        assert!(corner.is_empty());
    }

    #[test]
    fn cells_visits_every_cell_once() {
        let grid = Grid::open(2, 3);
        let all: Vec<_> = grid.cells().collect();
        assert_eq!(all.len(), 6);
        assert_eq!(all[0], Cell::new(0, 0));
        assert_eq!(all[5], Cell::new(1, 2));
    }
}

#[cfg(test)]
mod ascii {
    use rover_core::Cell;

    use crate::{Grid, GridError};

    #[test]
    fn parse_and_display_roundtrip() {
        let text = "..#\n#..\n";
        let grid: Grid = text.parse().unwrap();
        assert_eq!(grid.to_string(), text);
    }

    #[test]
    fn parse_reports_position_of_bad_char() {
        let err = "..\n.x\n".parse::<Grid>().unwrap_err();
        assert_eq!(err, GridError::Parse { line: 2, column: 2, found: 'x' });
    }

    #[test]
    fn parse_ragged_rejected() {
        let err = "...\n..\n".parse::<Grid>().unwrap_err();
        assert!(matches!(err, GridError::Ragged { row: 1, expected: 3, found: 2 }));
    }

    #[test]
    fn render_route_overlay() {
        let grid: Grid = "...\n.#.\n...\n".parse().unwrap();
        let route = [
            Cell::new(0, 0),
            Cell::new(0, 1),
            Cell::new(0, 2),
            Cell::new(1, 2),
        ];
        assert_eq!(grid.render_route(&route), "S**\n.#E\n...\n");
    }

    #[test]
    fn render_single_cell_route_marks_start() {
        let grid = Grid::open(1, 2);
        assert_eq!(grid.render_route(&[Cell::new(0, 1)]), ".S\n");
    }
}

#[cfg(test)]
mod generate {
    use rover_core::Cell;

    use crate::{GridError, random_grid};

    #[test]
    fn same_seed_same_grid() {
        let a = random_grid(12, 9, 0.3, 7, &[]).unwrap();
        let b = random_grid(12, 9, 0.3, 7, &[]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn ratio_extremes() {
        let open = random_grid(4, 4, 0.0, 1, &[]).unwrap();
        assert_eq!(open.open_count(), 16);
        let walls = random_grid(4, 4, 1.0, 1, &[]).unwrap();
        assert_eq!(walls.open_count(), 0);
    }

    #[test]
    fn keep_open_cells_survive() {
        let keep = [Cell::new(0, 0), Cell::new(3, 3)];
        let grid = random_grid(4, 4, 1.0, 99, &keep).unwrap();
        assert!(grid.is_traversable(keep[0]));
        assert!(grid.is_traversable(keep[1]));
        assert_eq!(grid.open_count(), 2);
    }

    #[test]
    fn bad_ratio_rejected() {
        assert_eq!(random_grid(2, 2, 1.5, 0, &[]).unwrap_err(), GridError::BlockedRatio(1.5));
        assert!(random_grid(2, 2, f64::NAN, 0, &[]).is_err());
    }
}
