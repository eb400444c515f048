//! Runner simulation: jump handling, fixed-timestep ticking, physics,
//! obstacle spawning, collision detection, and scoring.

use super::types::*;
use rand::Rng;

/// Apply a jump-key press to the session.
///
/// This is the session's entire input surface. Behavior dispatches on the
/// phase read at call time, so a single key handler serves every state:
/// Idle starts the run and jumps, Running jumps (ignored while airborne),
/// GameOver performs a full restart.
pub fn handle_jump(game: &mut RunnerGame) {
    match game.phase {
        Phase::Idle => {
            game.phase = Phase::Running;
            game.player.jump();
        }
        Phase::Running => game.player.jump(),
        Phase::GameOver => game.restart(),
    }
}

/// Advance the session by `dt_ms` of wall-clock time.
///
/// Steps the simulation in fixed `PHYSICS_TICK_MS` increments, carrying the
/// sub-tick remainder between calls. Deltas are clamped to
/// `MAX_FRAME_DELTA_MS` so a stalled host cannot catapult the player.
/// Returns true if at least one step ran. Idle and GameOver sessions do not
/// tick at all; the frame that detected a collision stays frozen on screen.
pub fn tick_runner<R: Rng>(game: &mut RunnerGame, dt_ms: u64, rng: &mut R) -> bool {
    if game.phase != Phase::Running {
        return false;
    }

    game.accumulated_ms += dt_ms.min(MAX_FRAME_DELTA_MS);
    let mut changed = false;

    while game.accumulated_ms >= PHYSICS_TICK_MS {
        game.accumulated_ms -= PHYSICS_TICK_MS;
        step(game, rng);
        changed = true;

        if game.phase != Phase::Running {
            break;
        }
    }

    changed
}

/// One simulation tick.
fn step<R: Rng>(game: &mut RunnerGame, rng: &mut R) {
    game.tick_count += 1;

    // 1. Vertical kinematics: integrate position, then gravity, then clamp
    //    to the ground. Grounded means exactly GROUNDED_Y with zero velocity.
    game.player.y += game.player.vy;
    game.player.vy += GRAVITY;
    if game.player.y >= GROUNDED_Y {
        game.player.y = GROUNDED_Y;
        game.player.vy = 0.0;
        game.player.airborne = false;
    }

    // 2. Scroll every obstacle left at the shared world speed.
    for obstacle in &mut game.obstacles {
        obstacle.x -= SCROLL_SPEED;
    }

    // 3. Spawner: exactly one obstacle per full interval.
    game.spawn_timer += 1;
    if game.spawn_timer >= SPAWN_INTERVAL_TICKS {
        game.spawn_timer = 0;
        game.spawn_obstacle(rng);
    }

    // 4. Collision ends the session immediately; the rest of the tick
    //    (including scoring) does not run on the fatal frame.
    if check_collision(game) {
        game.phase = Phase::GameOver;
        return;
    }

    // 5. Scoring: one point per obstacle that fully exited the left edge,
    //    plus a survival point every TIME_BONUS_INTERVAL_TICKS.
    let live_before = game.obstacles.len();
    game.obstacles.retain(|o| !o.is_offscreen());
    game.score += (live_before - game.obstacles.len()) as u32;

    if game.tick_count % TIME_BONUS_INTERVAL_TICKS == 0 {
        game.score += 1;
    }
}

/// True when the player's box strictly overlaps any live obstacle's box.
fn check_collision(game: &RunnerGame) -> bool {
    let player = game.player.rect();
    game.obstacles.iter().any(|o| player.intersects(&o.rect()))
}
