//! Board tests - target and obstacle generation

use tui_dicepath::core::{Board, CellRole, ConfigError, Highlight, SimpleRng};
use tui_dicepath::types::{Pos, MAX_OBSTACLES, TARGET_COUNT};

fn all_positions(board: &Board) -> impl Iterator<Item = Pos> + '_ {
    (0..board.height() as i8).flat_map(move |y| (0..board.width() as i8).map(move |x| Pos::new(x, y)))
}

#[test]
fn test_new_board_is_all_normal() {
    let board = Board::new(6, 6, Pos::new(0, 0)).unwrap();
    assert_eq!(board.cells().len(), 36);
    assert!(board.cells().iter().all(|c| *c == CellRole::Normal));
    assert!(board.targets().iter().all(Option::is_none));
    assert!(board.obstacles().is_empty());
}

#[test]
fn test_out_of_range_queries() {
    let board = Board::new(6, 6, Pos::new(0, 0)).unwrap();
    for pos in [Pos::new(-1, 0), Pos::new(0, -1), Pos::new(6, 0), Pos::new(0, 6)] {
        assert!(!board.in_bounds(pos));
        assert_eq!(board.role(pos), None);
        assert!(!board.is_obstacle(pos));
        assert!(!board.check_target(pos, 1));
    }
}

#[test]
fn test_targets_are_a_permutation_off_the_start_cell() {
    for seed in 1..200u32 {
        let start = Pos::new((seed % 6) as i8, (seed / 6 % 6) as i8);
        let mut board = Board::new(6, 6, start).unwrap();
        board.generate_targets(&mut SimpleRng::new(seed));

        let mut seen = [false; TARGET_COUNT];
        for pos in all_positions(&board) {
            if let Some(CellRole::Target(v)) = board.role(pos) {
                assert!((1..=6).contains(&v), "seed {}: value {}", seed, v);
                assert!(!seen[(v - 1) as usize], "seed {}: duplicate {}", seed, v);
                seen[(v - 1) as usize] = true;
                assert_ne!(pos, start, "seed {}: target on start", seed);
                assert_eq!(board.target_position(v), Some(pos));
                assert!(board.check_target(pos, v));
                assert!(!board.check_target(pos, v % 6 + 1));
            }
        }
        assert!(seen.iter().all(|s| *s), "seed {}: missing target", seed);
    }
}

#[test]
fn test_obstacles_avoid_start_targets_and_excluded_cell() {
    for seed in 1..200u32 {
        let start = Pos::new(0, 0);
        let exclude = Pos::new(3, 2);
        let mut board = Board::new(6, 6, start)
            .unwrap()
            .with_obstacle_count(MAX_OBSTACLES)
            .unwrap();
        let mut rng = SimpleRng::new(seed);
        board.generate_targets(&mut rng);
        board.generate_obstacles(exclude, &mut rng);

        assert_eq!(board.obstacles().len(), MAX_OBSTACLES, "seed {}", seed);
        let mut unique = board.obstacles().to_vec();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), MAX_OBSTACLES, "seed {}: duplicate obstacle", seed);

        for &pos in board.obstacles() {
            assert_ne!(pos, start);
            assert_ne!(pos, exclude);
            assert_eq!(board.role(pos), Some(CellRole::Obstacle));
        }
        // Every target survives obstacle generation.
        for v in 1..=TARGET_COUNT as u8 {
            let pos = board.target_position(v).unwrap();
            assert_eq!(board.role(pos), Some(CellRole::Target(v)));
        }
    }
}

#[test]
fn test_regenerating_obstacles_replaces_the_layout() {
    let mut board = Board::new(6, 6, Pos::new(0, 0))
        .unwrap()
        .with_obstacle_count(5)
        .unwrap();
    let mut rng = SimpleRng::new(77);
    board.generate_targets(&mut rng);
    board.generate_obstacles(Pos::new(0, 0), &mut rng);
    board.generate_obstacles(Pos::new(5, 5), &mut rng);

    let marked = board
        .cells()
        .iter()
        .filter(|c| **c == CellRole::Obstacle)
        .count();
    assert_eq!(marked, board.obstacles().len());
    assert!(!board.is_obstacle(Pos::new(5, 5)));
}

#[test]
fn test_obstacles_degrade_when_board_is_crowded() {
    // 9 cells: start + 6 targets leaves 2 candidates, one of them excluded.
    let mut board = Board::new(3, 3, Pos::new(1, 1))
        .unwrap()
        .with_obstacle_count(5)
        .unwrap();
    let mut rng = SimpleRng::new(4);
    board.generate_targets(&mut rng);

    let free: Vec<Pos> = all_positions(&board)
        .filter(|&p| p != Pos::new(1, 1) && board.role(p) == Some(CellRole::Normal))
        .collect();
    assert_eq!(free.len(), 2);

    board.generate_obstacles(free[0], &mut rng);
    assert_eq!(board.obstacles(), &[free[1]]);
}

#[test]
fn test_highlights_track_next_expected() {
    let mut board = Board::new(6, 6, Pos::new(0, 0)).unwrap();
    board.generate_targets(&mut SimpleRng::new(1));

    board.update_highlights(1);
    assert_eq!(board.highlight(1), Highlight::Emphasized);
    assert_eq!(board.highlight(2), Highlight::Neutral);

    board.update_highlights(4);
    assert_eq!(board.highlight(1), Highlight::Dimmed);
    assert_eq!(board.highlight(3), Highlight::Dimmed);
    assert_eq!(board.highlight(4), Highlight::Emphasized);
    assert_eq!(board.highlight(6), Highlight::Neutral);

    // Past the last target everything is collected.
    board.update_highlights(7);
    for v in 1..=6 {
        assert_eq!(board.highlight(v), Highlight::Dimmed);
    }
}

#[test]
fn test_place_obstacle_rules() {
    let mut board = Board::new(6, 6, Pos::new(0, 0))
        .unwrap()
        .with_obstacle_count(1)
        .unwrap();
    board.generate_targets(&mut SimpleRng::new(2));
    let target = board.target_position(1).unwrap();

    assert!(!board.place_obstacle(Pos::new(0, 0)));
    assert!(!board.place_obstacle(target));
    assert!(!board.place_obstacle(Pos::new(9, 9)));
}

#[test]
fn test_config_errors_display() {
    let err = Board::new(1, 1, Pos::new(0, 0)).unwrap_err();
    assert!(matches!(err, ConfigError::BoardTooSmall { .. }));
    assert!(!err.to_string().is_empty());
}
