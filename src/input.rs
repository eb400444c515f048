//! Key-event dispatch for the splash screen.
//!
//! One process-wide handler serves every session phase: the jump keys are
//! routed to the session, which decides at event time whether the press
//! starts, jumps, or restarts (no per-phase handler swapping). Raw mode
//! keeps the keys from reaching the host shell. Handlers only mutate
//! immediate session state; rendering and ticking stay on the frame path.

use crate::runner::logic::handle_jump;
use crate::runner::types::RunnerGame;
use crossterm::event::{KeyCode, KeyEvent};

/// Result of handling one key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Continue the frame loop.
    Continue,
    /// Unmount the splash screen.
    Quit,
}

/// Dispatch a key event.
///
/// Space and ArrowUp are the jump keys; `q`/`Esc` quit the host. Every
/// other key is ignored, since the session has no other input surface.
pub fn handle_key(key: KeyEvent, game: &mut RunnerGame) -> InputResult {
    match key.code {
        KeyCode::Char(' ') | KeyCode::Up => {
            handle_jump(game);
            InputResult::Continue
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => InputResult::Quit,
        _ => InputResult::Continue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::types::Phase;
    use crossterm::event::KeyModifiers;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_space_and_up_both_jump() {
        for code in [KeyCode::Char(' '), KeyCode::Up] {
            let mut game = RunnerGame::new();
            let result = handle_key(press(code), &mut game);
            assert_eq!(result, InputResult::Continue);
            assert_eq!(game.phase, Phase::Running);
            assert!(game.player.airborne);
        }
    }

    #[test]
    fn test_quit_keys() {
        for code in [KeyCode::Char('q'), KeyCode::Char('Q'), KeyCode::Esc] {
            let mut game = RunnerGame::new();
            assert_eq!(handle_key(press(code), &mut game), InputResult::Quit);
            // Quit is a host concern; the session is untouched.
            assert_eq!(game.phase, Phase::Idle);
        }
    }

    #[test]
    fn test_other_keys_are_ignored() {
        let mut game = RunnerGame::new();
        for code in [
            KeyCode::Char('x'),
            KeyCode::Down,
            KeyCode::Enter,
            KeyCode::Tab,
        ] {
            assert_eq!(handle_key(press(code), &mut game), InputResult::Continue);
        }
        assert_eq!(game.phase, Phase::Idle);
        assert!(!game.player.airborne);
    }
}
