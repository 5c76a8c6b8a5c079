//! Die tests - roll guards, animation and face bookkeeping

use tui_dicepath::core::{Board, Die, FaceValues, SimpleRng};
use tui_dicepath::types::{Direction, Pos, DEFAULT_ROLL_STEP, FACE_SUM, ROLL_ANGLE};

fn finish(die: &mut Die) -> Pos {
    loop {
        if let Some(pos) = die.advance(ROLL_ANGLE / 8.0) {
            return pos;
        }
    }
}

#[test]
fn test_roll_right_from_center() {
    let board = Board::new(5, 5, Pos::new(0, 0)).unwrap();
    let mut die = Die::new(Pos::new(2, 2));

    assert!(die.roll(Direction::Right, &board));
    assert!(die.is_rolling());
    // Position only changes when the quarter turn completes.
    assert_eq!(die.position(), Pos::new(2, 2));

    assert_eq!(finish(&mut die), Pos::new(3, 2));
    assert_eq!(die.position(), Pos::new(3, 2));
    assert_eq!(die.current_roll(), None);

    let f = die.faces();
    let c = FaceValues::CANONICAL;
    assert_eq!(f.top, c.left);
    assert_eq!(f.right, c.top);
    assert_eq!(f.bottom, c.right);
    assert_eq!(f.left, c.bottom);
    assert_eq!((f.front, f.back), (c.front, c.back));
    assert_eq!(die.bottom_value(), 3);
}

#[test]
fn test_roll_off_edge_is_rejected() {
    let board = Board::new(5, 5, Pos::new(0, 0)).unwrap();
    let mut die = Die::new(Pos::new(0, 0));

    assert!(!die.roll(Direction::Left, &board));
    assert!(!die.roll(Direction::Up, &board));
    assert_eq!(die.position(), Pos::new(0, 0));
    assert_eq!(die.faces(), FaceValues::CANONICAL);
    assert!(!die.is_rolling());
}

#[test]
fn test_roll_into_obstacle_is_rejected() {
    let mut board = Board::new(5, 5, Pos::new(0, 0)).unwrap();
    assert!(board.place_obstacle(Pos::new(2, 1)));
    let mut die = Die::new(Pos::new(2, 2));

    assert!(!die.roll(Direction::Up, &board));
    assert_eq!(die.position(), Pos::new(2, 2));
    assert_eq!(die.faces(), FaceValues::CANONICAL);

    assert!(die.roll(Direction::Down, &board));
    assert_eq!(finish(&mut die), Pos::new(2, 3));
}

#[test]
fn test_second_roll_rejected_while_rolling() {
    let board = Board::new(5, 5, Pos::new(0, 0)).unwrap();
    let mut die = Die::new(Pos::new(2, 2));

    assert!(die.roll(Direction::Right, &board));
    die.advance(0.3);
    let before = die.current_roll();
    assert!(!die.roll(Direction::Down, &board));
    assert_eq!(die.current_roll(), before);
    assert_eq!(finish(&mut die), Pos::new(3, 2));
}

#[test]
fn test_random_walk_keeps_faces_valid() {
    let board = Board::new(6, 6, Pos::new(0, 0)).unwrap();
    let mut die = Die::new(Pos::new(0, 0));
    let mut rng = SimpleRng::new(2024);

    for _ in 0..500 {
        let dir = Direction::ALL[rng.next_range(4) as usize];
        let from = die.position();
        if die.roll(dir, &board) {
            let to = finish(&mut die);
            assert_eq!(to, from.step(dir));
        } else {
            assert!(!board.in_bounds(from.step(dir)) || from.step(dir) == from);
        }
        let f = die.faces();
        assert!(f.is_valid());
        assert_eq!(f.top + f.bottom, FACE_SUM);
        assert_eq!(f.left + f.right, FACE_SUM);
        assert_eq!(f.front + f.back, FACE_SUM);
        assert!(board.in_bounds(die.position()));
    }
}

#[test]
fn test_reset_restores_home_and_orientation() {
    let board = Board::new(5, 5, Pos::new(0, 0)).unwrap();
    let mut die = Die::new(Pos::new(0, 0));
    assert!(die.roll(Direction::Right, &board));
    finish(&mut die);
    assert!(die.roll(Direction::Down, &board));
    die.advance(0.5);

    die.reset(Pos::new(0, 0));
    assert_eq!(die.position(), Pos::new(0, 0));
    assert_eq!(die.faces(), FaceValues::CANONICAL);
    assert!(!die.is_rolling());
    assert_eq!(die.roll_angle(), 0.0);
}

#[test]
fn test_default_step_lands_on_eighth_tick() {
    let board = Board::new(5, 5, Pos::new(0, 0)).unwrap();
    let mut die = Die::new(Pos::new(2, 2));
    assert!(die.roll(Direction::Left, &board));

    for tick in 1..8 {
        assert_eq!(die.advance(DEFAULT_ROLL_STEP), None, "tick {}", tick);
    }
    assert_eq!(die.advance(DEFAULT_ROLL_STEP), Some(Pos::new(1, 2)));
}
