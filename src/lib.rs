//! Hurdle - Splash-Screen Runner Mini-Game
//!
//! A decorative endless-runner widget for terminal hosts: while a backend
//! warms up, the splash screen runs a jump-over-the-obstacles mini-game.
//! The simulation (`runner`) is pure and headless-testable; `ui` renders
//! it with ratatui; `input` maps key events onto the session.

pub mod build_info;
pub mod input;
pub mod runner;
pub mod ui;

pub use runner::types::{Phase, RunnerGame};
