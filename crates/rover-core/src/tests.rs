//! Unit tests for rover-core primitives.

#[cfg(test)]
mod cell {
    use crate::{Cell, Direction};

    #[test]
    fn structural_equality() {
        assert_eq!(Cell::new(2, 3), Cell { row: 2, col: 3 });
        assert_ne!(Cell::new(2, 3), Cell::new(3, 2));
        assert_eq!(Cell::from((1, 4)), Cell::new(1, 4));
    }

    #[test]
    fn step_moves_one_axis() {
        let c = Cell::new(1, 1);
        assert_eq!(c.step(Direction::Up),    Some(Cell::new(0, 1)));
        assert_eq!(c.step(Direction::Down),  Some(Cell::new(2, 1)));
        assert_eq!(c.step(Direction::Left),  Some(Cell::new(1, 0)));
        assert_eq!(c.step(Direction::Right), Some(Cell::new(1, 2)));
    }

    #[test]
    fn step_off_top_left_edge_is_none() {
        let origin = Cell::new(0, 0);
        assert_eq!(origin.step(Direction::Up), None);
        assert_eq!(origin.step(Direction::Left), None);
        assert!(origin.step(Direction::Down).is_some());
    }

    #[test]
    fn manhattan_is_symmetric() {
        let a = Cell::new(0, 0);
        let b = Cell::new(2, 3);
        assert_eq!(a.manhattan(b), 5);
        assert_eq!(b.manhattan(a), 5);
        assert_eq!(a.manhattan(a), 0);
    }

    #[test]
    fn display_and_parse_roundtrip() {
        let c = Cell::new(7, 12);
        assert_eq!(c.to_string(), "(7, 12)");
        assert_eq!(c.to_string().parse::<Cell>().unwrap(), c);
        assert_eq!("3,4".parse::<Cell>().unwrap(), Cell::new(3, 4));
        assert_eq!(" 3 , 4 ".parse::<Cell>().unwrap(), Cell::new(3, 4));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("3".parse::<Cell>().is_err());
        assert!("a,b".parse::<Cell>().is_err());
        assert!("-1,2".parse::<Cell>().is_err());
    }

    #[test]
    fn opposite_directions_cancel() {
        let c = Cell::new(5, 5);
        for dir in Direction::ALL {
            let there = c.step(dir).unwrap();
            assert_eq!(there.step(dir.opposite()), Some(c));
        }
    }
}

#[cfg(test)]
mod strategy {
    use crate::StrategyKind;

    #[test]
    fn default_is_bfs() {
        assert_eq!(StrategyKind::default(), StrategyKind::Bfs);
    }

    #[test]
    fn label_roundtrip() {
        for kind in StrategyKind::ALL {
            assert_eq!(kind.to_string().parse::<StrategyKind>().unwrap(), kind);
        }
        assert_eq!("GREEDY".parse::<StrategyKind>().unwrap(), StrategyKind::Greedy);
        assert!("astar".parse::<StrategyKind>().is_err());
    }
}

#[cfg(test)]
mod config {
    use crate::{DEFAULT_BUDGET, RoverConfig, StrategyKind};

    #[test]
    fn defaults() {
        let cfg = RoverConfig::default();
        assert_eq!(cfg.initial_budget, 100);
        assert_eq!(cfg.initial_budget, DEFAULT_BUDGET);
        assert_eq!(cfg.strategy, StrategyKind::Bfs);
    }

    #[test]
    fn fluent_overrides() {
        let cfg = RoverConfig::default()
            .with_budget(7)
            .with_strategy(StrategyKind::Greedy);
        assert_eq!(cfg.initial_budget, 7);
        assert_eq!(cfg.strategy, StrategyKind::Greedy);
    }
}
