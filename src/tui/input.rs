use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::Action;
use crate::pass::CharClass;
use crate::terminal::RawModeGuard;

/// Map a key press to an action.
pub fn action_for(key: KeyEvent) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    let action = match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Enter | KeyCode::Char('g') | KeyCode::Char(' ') => Action::Generate,
        KeyCode::Char('c') | KeyCode::Char('y') => Action::Copy,
        KeyCode::Left | KeyCode::Char('-') | KeyCode::Char('h') => Action::Length(-1),
        KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Char('l') => {
            Action::Length(1)
        }
        KeyCode::Down | KeyCode::PageDown => Action::Length(-5),
        KeyCode::Up | KeyCode::PageUp => Action::Length(5),
        KeyCode::Char('1') => Action::Toggle(CharClass::Uppercase),
        KeyCode::Char('2') => Action::Toggle(CharClass::Lowercase),
        KeyCode::Char('3') => Action::Toggle(CharClass::Numbers),
        KeyCode::Char('4') => Action::Toggle(CharClass::Symbols),
        KeyCode::Char('a') => Action::ToggleSimilar,
        KeyCode::Char('o') => Action::ToggleAutoCopy,
        KeyCode::Char('r') => Action::ToggleRng,
        KeyCode::Char('s') => Action::Save,
        KeyCode::Char('?') => Action::Help,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        _ => return None,
    };
    Some(action)
}

/// Wait for the next mapped key press. `timeout` of `None` blocks;
/// `Ok(None)` means the timeout passed or the key was unmapped.
pub fn next_action(timeout: Option<Duration>) -> io::Result<Option<Action>> {
    let _guard = RawModeGuard::new()?;

    if let Some(timeout) = timeout
        && !event::poll(timeout)?
    {
        return Ok(None);
    }

    match event::read()? {
        Event::Key(key) => Ok(action_for(key)),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn enter_generates() {
        assert_eq!(action_for(press(KeyCode::Enter)), Some(Action::Generate));
    }

    #[test]
    fn arrows_move_slider() {
        assert_eq!(action_for(press(KeyCode::Left)), Some(Action::Length(-1)));
        assert_eq!(action_for(press(KeyCode::Right)), Some(Action::Length(1)));
        assert_eq!(action_for(press(KeyCode::Up)), Some(Action::Length(5)));
    }

    #[test]
    fn digits_toggle_classes() {
        assert_eq!(
            action_for(press(KeyCode::Char('4'))),
            Some(Action::Toggle(CharClass::Symbols))
        );
    }

    #[test]
    fn ctrl_c_quits_plain_c_copies() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(action_for(ctrl_c), Some(Action::Quit));
        assert_eq!(action_for(press(KeyCode::Char('c'))), Some(Action::Copy));
    }

    #[test]
    fn releases_and_unmapped_keys_are_ignored() {
        let mut release = press(KeyCode::Enter);
        release.kind = KeyEventKind::Release;
        assert_eq!(action_for(release), None);
        assert_eq!(action_for(press(KeyCode::Char('z'))), None);
    }
}
