//! The runner mini-game.
//!
//! A real-time endless runner shown on the warm-up splash screen: the
//! player jumps over ground obstacles and stays grounded to pass beneath
//! air obstacles. Pure simulation, no terminal types; rendering lives in
//! `crate::ui`.

pub mod logic;
pub mod types;

pub use logic::{handle_jump, tick_runner};
pub use types::{Obstacle, ObstacleKind, Phase, Player, RunnerGame};
