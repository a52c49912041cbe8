//! Key mapping from terminal events to cube actions.
//!
//! Lower-case face letters turn that face clockwise, upper-case (shift)
//! turns it counterclockwise. Space is reserved for the solve timer.

use crate::types::{Direction, Face, Move};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press asks the session to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Quarter turn
    Turn(Move),
    /// Start/stop the solve timer (not implemented, accepted as a no-op)
    Timer,
}

/// Map keyboard input to a cube action.
pub fn handle_key_event(key: KeyEvent) -> Option<InputAction> {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }

    match key.code {
        KeyCode::Char(' ') => Some(InputAction::Timer),
        KeyCode::Char(c) => {
            let face = Face::from_letter(c)?;
            if c.is_ascii_uppercase() {
                Some(InputAction::Turn(Move::ccw(face)))
            } else {
                Some(InputAction::Turn(Move::cw(face)))
            }
        }
        _ => None,
    }
}

/// The key that produces `mv`.
pub fn key_for_move(mv: Move) -> char {
    let letter = mv.face.letter();
    match mv.direction {
        Direction::Clockwise => letter.to_ascii_lowercase(),
        Direction::CounterClockwise => letter,
    }
}

/// Check if key should end the session.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_lowercase_turns_clockwise() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('f'))),
            Some(InputAction::Turn(Move::cw(Face::Front)))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('r'))),
            Some(InputAction::Turn(Move::cw(Face::Right)))
        );
    }

    #[test]
    fn test_shifted_letter_turns_counterclockwise() {
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('U'), KeyModifiers::SHIFT)),
            Some(InputAction::Turn(Move::ccw(Face::Up)))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('D'))),
            Some(InputAction::Turn(Move::ccw(Face::Down)))
        );
    }

    #[test]
    fn test_every_move_has_a_key() {
        for mv in Move::ALL {
            let key = KeyEvent::from(KeyCode::Char(key_for_move(mv)));
            assert_eq!(handle_key_event(key), Some(InputAction::Turn(mv)));
        }
    }

    #[test]
    fn test_timer_and_unknown_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char(' '))),
            Some(InputAction::Timer)
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Left)), None);
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('f'), KeyModifiers::CONTROL)),
            None
        );
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('f'))));
    }
}
