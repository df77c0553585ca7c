//! Key codes, editor actions and the dispatch tables that connect them.
//!
//! Key codes are plain integers: the four arrows use reserved negative
//! values and everything else is a character code.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::cursor::Direction;

pub const LEFT_ARROW: i32 = -203;
pub const UP_ARROW: i32 = -204;
pub const RIGHT_ARROW: i32 = -205;
pub const DOWN_ARROW: i32 = -206;

/// Byte produced by Ctrl+C. Raw mode swallows SIGINT, so it quits too.
pub const CTRL_C: i32 = 3;

/// One input event from the surface. Resize, mouse and similar events carry
/// no key code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputEvent {
    pub key_code: Option<i32>,
}

impl InputEvent {
    pub const fn key(code: i32) -> Self {
        Self {
            key_code: Some(code),
        }
    }

    pub fn char(ch: char) -> Self {
        Self::key(ch as i32)
    }

    pub const fn none() -> Self {
        Self { key_code: None }
    }
}

/// Controller state. Editing keys only have handlers while paused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Paused,
    Running,
}

impl Mode {
    pub fn toggled(self) -> Self {
        match self {
            Mode::Paused => Mode::Running,
            Mode::Running => Mode::Paused,
        }
    }

    pub fn is_paused(self) -> bool {
        matches!(self, Mode::Paused)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Move(Direction),
    ToggleCell,
    PlaceGlider,
    TogglePause,
    Quit,
}

/// Resolve a key code against the tables in priority order: arrows, then
/// the paused-only editing table, then the global table.
pub fn action_for(code: i32, mode: Mode) -> Option<Action> {
    arrow(code)
        .map(Action::Move)
        .or_else(|| mode.is_paused().then(|| paused_action(code)).flatten())
        .or_else(|| global_action(code))
}

fn arrow(code: i32) -> Option<Direction> {
    match code {
        LEFT_ARROW => Some(Direction::Left),
        UP_ARROW => Some(Direction::Up),
        RIGHT_ARROW => Some(Direction::Right),
        DOWN_ARROW => Some(Direction::Down),
        _ => None,
    }
}

fn paused_action(code: i32) -> Option<Action> {
    match u8::try_from(code).ok()? {
        b' ' => Some(Action::ToggleCell),
        b'g' => Some(Action::PlaceGlider),
        _ => None,
    }
}

fn global_action(code: i32) -> Option<Action> {
    if code == CTRL_C {
        return Some(Action::Quit);
    }
    match u8::try_from(code).ok()? {
        b's' => Some(Action::TogglePause),
        b'q' => Some(Action::Quit),
        _ => None,
    }
}

/// Translate a crossterm key event into a key code. Releases and keys
/// without a code (function keys, modifiers) yield `None`.
pub fn key_code_from_crossterm(key: &KeyEvent) -> Option<i32> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match key.code {
        KeyCode::Left => Some(LEFT_ARROW),
        KeyCode::Up => Some(UP_ARROW),
        KeyCode::Right => Some(RIGHT_ARROW),
        KeyCode::Down => Some(DOWN_ARROW),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(CTRL_C),
        KeyCode::Char(ch) => Some(ch as i32),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(ch: char) -> i32 {
        ch as i32
    }

    #[test]
    fn arrows_move_in_any_mode() {
        for mode in [Mode::Paused, Mode::Running] {
            assert_eq!(
                action_for(LEFT_ARROW, mode),
                Some(Action::Move(Direction::Left))
            );
            assert_eq!(
                action_for(DOWN_ARROW, mode),
                Some(Action::Move(Direction::Down))
            );
        }
    }

    #[test]
    fn editing_keys_only_work_while_paused() {
        assert_eq!(action_for(code(' '), Mode::Paused), Some(Action::ToggleCell));
        assert_eq!(action_for(code('g'), Mode::Paused), Some(Action::PlaceGlider));
        assert_eq!(action_for(code(' '), Mode::Running), None);
        assert_eq!(action_for(code('g'), Mode::Running), None);
    }

    #[test]
    fn global_keys_work_in_any_mode() {
        for mode in [Mode::Paused, Mode::Running] {
            assert_eq!(action_for(code('s'), mode), Some(Action::TogglePause));
            assert_eq!(action_for(code('q'), mode), Some(Action::Quit));
            assert_eq!(action_for(CTRL_C, mode), Some(Action::Quit));
        }
    }

    #[test]
    fn unknown_codes_are_ignored() {
        assert_eq!(action_for(code('x'), Mode::Paused), None);
        assert_eq!(action_for(code('Q'), Mode::Running), None);
        assert_eq!(action_for(-1, Mode::Paused), None);
        assert_eq!(action_for(0x263A, Mode::Paused), None);
    }

    #[test]
    fn mode_toggles_between_states() {
        assert_eq!(Mode::default(), Mode::Paused);
        assert_eq!(Mode::Paused.toggled(), Mode::Running);
        assert_eq!(Mode::Running.toggled(), Mode::Paused);
    }

    #[test]
    fn crossterm_keys_map_to_codes() {
        let press = |code| KeyEvent::new(code, KeyModifiers::NONE);
        assert_eq!(key_code_from_crossterm(&press(KeyCode::Up)), Some(UP_ARROW));
        assert_eq!(
            key_code_from_crossterm(&press(KeyCode::Right)),
            Some(RIGHT_ARROW)
        );
        assert_eq!(
            key_code_from_crossterm(&press(KeyCode::Char('g'))),
            Some(code('g'))
        );
        assert_eq!(key_code_from_crossterm(&press(KeyCode::F(1))), None);

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_code_from_crossterm(&ctrl_c), Some(CTRL_C));
    }

    #[test]
    fn key_releases_are_dropped() {
        let mut release = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(key_code_from_crossterm(&release), None);
    }
}
