//! Intent dispatch for the terminal host.

use crate::core::{remap_by_camera, GameController};
use crate::session_log::SessionLog;
use crate::types::Intent;

/// Apply one player intent to the controller and log it.
///
/// Start only begins a session when none is active; restarting a running
/// session is left to Reset.
pub fn apply_intent(game: &mut GameController, log: &mut SessionLog, intent: Intent) {
    match intent {
        Intent::Move(screen) => {
            let board = remap_by_camera(screen, game.camera_angle());
            let accepted = game.move_cube(screen);
            log.move_attempt(game, intent, board, accepted);
        }
        Intent::RotateCameraLeft => game.rotate_camera_left(),
        Intent::RotateCameraRight => game.rotate_camera_right(),
        Intent::Start => {
            if !game.is_active() {
                game.start();
                log.session_started(game);
            }
        }
        Intent::Reset => {
            game.reset();
            log.session_started(game);
        }
    }
}
