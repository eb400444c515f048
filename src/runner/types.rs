//! Runner session data structures and tuning constants.
//!
//! The simulation runs in a fixed logical-pixel viewport, independent of
//! the terminal size; the scene renderer scales logical pixels to cells.
//! Coordinates grow rightward and downward with the origin at the top-left.

use rand::Rng;

// ── Viewport (logical pixels) ───────────────────────────────────────
pub const VIEW_WIDTH: f64 = 640.0;
pub const VIEW_HEIGHT: f64 = 200.0;

/// Y coordinate of the ground line. Ground obstacles stand on it and the
/// player rests on it.
pub const GROUND_LEVEL: f64 = 184.0;

// ── Player ──────────────────────────────────────────────────────────
/// Side length of the player's square bounding box.
pub const PLAYER_SIZE: f64 = 32.0;

/// Fixed horizontal position of the player's left edge.
pub const PLAYER_X: f64 = 56.0;

/// Top edge of the player's box while standing on the ground.
pub const GROUNDED_Y: f64 = GROUND_LEVEL - PLAYER_SIZE;

// ── Kinematics (px/tick, px/tick²) ──────────────────────────────────
/// Downward acceleration applied every airborne tick.
pub const GRAVITY: f64 = 0.8;

/// Velocity set by a jump (negative = upward). Tuned so the resulting arc
/// clears the tallest ground obstacle and stays inside the viewport.
pub const JUMP_IMPULSE: f64 = -15.0;

// ── World scroll ────────────────────────────────────────────────────
/// Horizontal speed shared by obstacles and the ground pattern.
pub const SCROLL_SPEED: f64 = 4.0;

/// Period of the scrolling tick pattern on the ground line.
pub const GROUND_TICK_SPACING: f64 = 40.0;

// ── Obstacle spawner ────────────────────────────────────────────────
pub const SPAWN_INTERVAL_TICKS: u32 = 120;
pub const AIR_OBSTACLE_CHANCE: f64 = 0.3;
pub const GROUND_OBSTACLE_WIDTH: f64 = 16.0;
pub const GROUND_OBSTACLE_HEIGHT_MIN: f64 = 24.0;
pub const GROUND_OBSTACLE_HEIGHT_MAX: f64 = 48.0;
pub const AIR_OBSTACLE_WIDTH: f64 = 24.0;
pub const AIR_OBSTACLE_HEIGHT: f64 = 16.0;

/// Height of an air obstacle's center above the ground line. The range
/// keeps the whole box strictly above the grounded player's head, so a
/// grounded runner passes beneath and only a mistimed jump collides.
pub const AIR_OFFSET_MIN: f64 = 56.0;
pub const AIR_OFFSET_MAX: f64 = 88.0;

// ── Scoring ─────────────────────────────────────────────────────────
/// A survival point is granted every this many ticks while running.
pub const TIME_BONUS_INTERVAL_TICKS: u64 = 60;

// ── Timing ──────────────────────────────────────────────────────────
/// Fixed physics timestep in milliseconds (~60 ticks/s).
pub const PHYSICS_TICK_MS: u64 = 16;

/// Wall-clock deltas are clamped to this to avoid a physics explosion
/// after the host stalls.
pub const MAX_FRAME_DELTA_MS: u64 = 100;

/// Axis-aligned bounding box in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Aabb {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Strict overlap test. Boxes that merely touch along an edge do not
    /// intersect.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }
}

/// Session lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the first jump key. Simulation paused.
    Idle,
    /// Physics, spawner, and collision tick every frame.
    Running,
    /// Frozen on the colliding frame until a jump key restarts.
    GameOver,
}

/// The player entity. Horizontal position and box size are fixed; only the
/// vertical axis simulates.
#[derive(Debug, Clone)]
pub struct Player {
    /// Top edge of the bounding box (y grows downward).
    pub y: f64,
    /// Vertical velocity in px/tick (negative = upward).
    pub vy: f64,
    /// Set by `jump()`, cleared on ground contact.
    pub airborne: bool,
}

impl Player {
    pub fn new() -> Self {
        Self {
            y: GROUNDED_Y,
            vy: 0.0,
            airborne: false,
        }
    }

    /// Launch upward. Silently ignored while airborne, so holding or
    /// mashing the jump key cannot double-jump.
    pub fn jump(&mut self) {
        if !self.airborne {
            self.vy = JUMP_IMPULSE;
            self.airborne = true;
        }
    }

    pub fn rect(&self) -> Aabb {
        Aabb::new(PLAYER_X, self.y, PLAYER_SIZE, PLAYER_SIZE)
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// Obstacle placement variants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ObstacleKind {
    /// Stands on the ground line; cleared by jumping over it.
    Ground,
    /// Floats with its center `offset` px above the ground line; passed
    /// beneath while grounded, or cleared over with a well-timed jump.
    Air { offset: f64 },
}

/// A single obstacle in the world.
#[derive(Debug, Clone)]
pub struct Obstacle {
    /// Left edge in logical pixels. Decreases every tick.
    pub x: f64,
    pub width: f64,
    pub height: f64,
    pub kind: ObstacleKind,
}

impl Obstacle {
    /// Bounding box. Ground obstacles span upward from the ground line;
    /// air obstacles are centered on their vertical offset.
    pub fn rect(&self) -> Aabb {
        let y = match self.kind {
            ObstacleKind::Ground => GROUND_LEVEL - self.height,
            ObstacleKind::Air { offset } => GROUND_LEVEL - offset - self.height / 2.0,
        };
        Aabb::new(self.x, y, self.width, self.height)
    }

    /// True once the right edge has passed the left viewport edge, which
    /// removes the obstacle and scores a point.
    pub fn is_offscreen(&self) -> bool {
        self.x + self.width < 0.0
    }
}

/// One runner session. Exactly one exists per mounted widget instance; it
/// is exclusively owned and mutated only on the frame path.
#[derive(Debug, Clone)]
pub struct RunnerGame {
    pub phase: Phase,
    pub player: Player,
    /// Live obstacles, oldest (leftmost) first.
    pub obstacles: Vec<Obstacle>,
    /// Single source of truth for the displayed score. Monotonic within a
    /// session; reset only by a restart.
    pub score: u32,
    /// Physics ticks elapsed this session.
    pub tick_count: u64,
    /// Ticks since the last spawn; wraps to 0 when an obstacle is created.
    pub spawn_timer: u32,
    /// Sub-tick remainder of wall-clock time (ms).
    pub accumulated_ms: u64,
}

impl RunnerGame {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            player: Player::new(),
            obstacles: Vec::new(),
            score: 0,
            tick_count: 0,
            spawn_timer: 0,
            accumulated_ms: 0,
        }
    }

    /// Full reset into a fresh Running session: score, obstacles, timers,
    /// and player kinematics all return to their initial values.
    pub fn restart(&mut self) {
        *self = RunnerGame {
            phase: Phase::Running,
            ..RunnerGame::new()
        };
    }

    /// Append one randomized obstacle at the right viewport edge.
    pub fn spawn_obstacle<R: Rng>(&mut self, rng: &mut R) {
        let obstacle = if rng.gen::<f64>() < AIR_OBSTACLE_CHANCE {
            Obstacle {
                x: VIEW_WIDTH,
                width: AIR_OBSTACLE_WIDTH,
                height: AIR_OBSTACLE_HEIGHT,
                kind: ObstacleKind::Air {
                    offset: rng.gen_range(AIR_OFFSET_MIN..=AIR_OFFSET_MAX),
                },
            }
        } else {
            Obstacle {
                x: VIEW_WIDTH,
                width: GROUND_OBSTACLE_WIDTH,
                height: rng.gen_range(GROUND_OBSTACLE_HEIGHT_MIN..=GROUND_OBSTACLE_HEIGHT_MAX),
                kind: ObstacleKind::Ground,
            }
        };
        self.obstacles.push(obstacle);
    }
}

impl Default for RunnerGame {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_defaults() {
        let game = RunnerGame::new();
        assert_eq!(game.phase, Phase::Idle);
        assert_eq!(game.score, 0);
        assert_eq!(game.tick_count, 0);
        assert_eq!(game.spawn_timer, 0);
        assert!(game.obstacles.is_empty());
        assert!(!game.player.airborne);
        assert!((game.player.y - GROUNDED_Y).abs() < f64::EPSILON);
        assert!((game.player.vy - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_aabb_touching_edges_do_not_collide() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let b = Aabb::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
        assert!(!b.intersects(&a));
    }

    #[test]
    fn test_aabb_overlap_collides() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let b = Aabb::new(9.0, 0.0, 10.0, 10.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_aabb_disjoint() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let b = Aabb::new(30.0, 30.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_jump_sets_impulse_and_airborne() {
        let mut player = Player::new();
        player.jump();
        assert!(player.airborne);
        assert!((player.vy - JUMP_IMPULSE).abs() < f64::EPSILON);
    }

    #[test]
    fn test_jump_while_airborne_is_noop() {
        let mut player = Player::new();
        player.jump();
        player.vy = -3.0; // mid-arc
        player.jump();
        assert!((player.vy - (-3.0)).abs() < f64::EPSILON);
        assert!(player.airborne);
    }

    #[test]
    fn test_ground_obstacle_rect_spans_up_from_ground() {
        let obstacle = Obstacle {
            x: 100.0,
            width: GROUND_OBSTACLE_WIDTH,
            height: 40.0,
            kind: ObstacleKind::Ground,
        };
        let rect = obstacle.rect();
        assert!((rect.y - (GROUND_LEVEL - 40.0)).abs() < f64::EPSILON);
        assert!((rect.y + rect.h - GROUND_LEVEL).abs() < f64::EPSILON);
    }

    #[test]
    fn test_air_obstacle_rect_centers_on_offset() {
        let obstacle = Obstacle {
            x: 100.0,
            width: AIR_OBSTACLE_WIDTH,
            height: AIR_OBSTACLE_HEIGHT,
            kind: ObstacleKind::Air { offset: 60.0 },
        };
        let rect = obstacle.rect();
        let center = rect.y + rect.h / 2.0;
        assert!((center - (GROUND_LEVEL - 60.0)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_air_obstacles_clear_the_resting_player() {
        // Even the lowest possible air obstacle must sit strictly above
        // the grounded player's box.
        let lowest = Obstacle {
            x: PLAYER_X,
            width: AIR_OBSTACLE_WIDTH,
            height: AIR_OBSTACLE_HEIGHT,
            kind: ObstacleKind::Air {
                offset: AIR_OFFSET_MIN,
            },
        };
        let player = Player::new();
        assert!(lowest.rect().y + lowest.rect().h <= GROUNDED_Y);
        assert!(!player.rect().intersects(&lowest.rect()));
    }

    #[test]
    fn test_spawn_obstacle_at_right_edge() {
        let mut game = RunnerGame::new();
        let mut rng = rand::thread_rng();

        game.spawn_obstacle(&mut rng);

        assert_eq!(game.obstacles.len(), 1);
        let obstacle = &game.obstacles[0];
        assert!((obstacle.x - VIEW_WIDTH).abs() < f64::EPSILON);
        match obstacle.kind {
            ObstacleKind::Ground => {
                assert!((obstacle.width - GROUND_OBSTACLE_WIDTH).abs() < f64::EPSILON);
                assert!(obstacle.height >= GROUND_OBSTACLE_HEIGHT_MIN);
                assert!(obstacle.height <= GROUND_OBSTACLE_HEIGHT_MAX);
            }
            ObstacleKind::Air { offset } => {
                assert!((obstacle.width - AIR_OBSTACLE_WIDTH).abs() < f64::EPSILON);
                assert!((obstacle.height - AIR_OBSTACLE_HEIGHT).abs() < f64::EPSILON);
                assert!(offset >= AIR_OFFSET_MIN);
                assert!(offset <= AIR_OFFSET_MAX);
            }
        }
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut game = RunnerGame::new();
        game.phase = Phase::GameOver;
        game.score = 17;
        game.tick_count = 900;
        game.spawn_timer = 55;
        game.accumulated_ms = 12;
        game.player.y = 80.0;
        game.player.vy = -4.0;
        game.player.airborne = true;
        game.obstacles.push(Obstacle {
            x: 200.0,
            width: GROUND_OBSTACLE_WIDTH,
            height: 30.0,
            kind: ObstacleKind::Ground,
        });

        game.restart();

        assert_eq!(game.phase, Phase::Running);
        assert_eq!(game.score, 0);
        assert_eq!(game.tick_count, 0);
        assert_eq!(game.spawn_timer, 0);
        assert_eq!(game.accumulated_ms, 0);
        assert!(game.obstacles.is_empty());
        assert!(!game.player.airborne);
        assert!((game.player.y - GROUNDED_Y).abs() < f64::EPSILON);
        assert!((game.player.vy - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_tuning_parameters_are_coherent() {
        assert!(GRAVITY > 0.0, "gravity must pull downward");
        assert!(JUMP_IMPULSE < 0.0, "jump impulse must point upward");
        assert!(SCROLL_SPEED > 0.0);
        assert!(GROUND_OBSTACLE_HEIGHT_MAX >= GROUND_OBSTACLE_HEIGHT_MIN);
        assert!(AIR_OFFSET_MAX >= AIR_OFFSET_MIN);
        assert!(GROUNDED_Y > 0.0);
        assert!(GROUND_LEVEL < VIEW_HEIGHT);

        // The full jump arc must stay inside the viewport: simulate the
        // integration used by the tick until the player lands again.
        let mut y = GROUNDED_Y;
        let mut vy = JUMP_IMPULSE;
        let mut peak = y;
        loop {
            y += vy;
            vy += GRAVITY;
            peak = peak.min(y);
            if y >= GROUNDED_Y {
                break;
            }
        }
        assert!(peak >= 0.0, "jump arc leaves the viewport: peak {}", peak);
        // And it must clear the tallest ground obstacle with room to spare.
        let tallest_top = GROUND_LEVEL - GROUND_OBSTACLE_HEIGHT_MAX;
        assert!(peak + PLAYER_SIZE < tallest_top);
    }
}
