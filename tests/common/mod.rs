//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};

use tui_dicepath::core::{Board, FaceValues, GameConfig, GameController};
use tui_dicepath::types::{Direction, Pos, TARGET_COUNT};

/// Upper bound on ticks for a single roll at any sane roll step.
pub const MAX_ROLL_TICKS: usize = 1_000;

pub fn started(config: GameConfig) -> GameController {
    let mut game = GameController::new(config).expect("valid config");
    game.start();
    game
}

/// Tick until the roll in flight lands. Panics if it never does.
pub fn land(game: &mut GameController) {
    for _ in 0..MAX_ROLL_TICKS {
        if game.tick() {
            return;
        }
    }
    panic!("roll did not land within {} ticks", MAX_ROLL_TICKS);
}

/// Start a roll and let it land. Returns whether the move was accepted.
pub fn roll(game: &mut GameController, dir: Direction) -> bool {
    if !game.move_cube(dir) {
        return false;
    }
    land(game);
    true
}

/// Shortest sequence of board moves that brings the die onto `goal` with
/// `bottom` facing down, avoiding obstacles and the board edge.
pub fn plan(board: &Board, from: Pos, faces: FaceValues, goal: Pos, bottom: u8) -> Option<Vec<Direction>> {
    plan_avoiding(board, from, faces, goal, bottom, &[])
}

/// Like [`plan`], but never lands on any cell in `avoid`.
pub fn plan_avoiding(
    board: &Board,
    from: Pos,
    faces: FaceValues,
    goal: Pos,
    bottom: u8,
    avoid: &[Pos],
) -> Option<Vec<Direction>> {
    let mut seen: HashMap<(Pos, FaceValues), Option<(Pos, FaceValues, Direction)>> = HashMap::new();
    let mut queue = VecDeque::new();
    seen.insert((from, faces), None);
    queue.push_back((from, faces));

    while let Some((pos, f)) = queue.pop_front() {
        if pos == goal && f.bottom == bottom {
            let mut path = Vec::new();
            let mut key = (pos, f);
            while let Some(Some((prev_pos, prev_faces, dir))) = seen.get(&key).copied() {
                path.push(dir);
                key = (prev_pos, prev_faces);
            }
            path.reverse();
            return Some(path);
        }
        for dir in Direction::ALL {
            let next = pos.step(dir);
            if next == pos
                || !board.in_bounds(next)
                || board.is_obstacle(next)
                || avoid.contains(&next)
            {
                continue;
            }
            let key = (next, f.rolled(dir));
            if !seen.contains_key(&key) {
                seen.insert(key, Some((pos, f, dir)));
                queue.push_back(key);
            }
        }
    }
    None
}

/// Plan from the controller's current state to the next expected target.
pub fn plan_next(game: &GameController) -> Option<Vec<Direction>> {
    let value = game.next_expected()?;
    let goal = game.board().target_position(value)?;
    plan(
        game.board(),
        game.die().position(),
        game.die().faces(),
        goal,
        value,
    )
}

/// Collect every target in order, re-planning after each landing so that
/// obstacle relocations are respected. Assumes camera angle 0.
///
/// Returns the number of accepted moves.
pub fn solve(game: &mut GameController) -> u32 {
    let mut moves = 0;
    for _ in 0..TARGET_COUNT * 200 {
        if game.next_expected().is_none() {
            return moves;
        }
        let path = plan_next(game).expect("next target reachable");
        let Some(&dir) = path.first() else {
            panic!("die already on target {:?} but not collected", game.next_expected());
        };
        assert!(roll(game, dir), "planned move {:?} rejected", dir);
        moves += 1;
    }
    panic!("did not finish within the move budget");
}
