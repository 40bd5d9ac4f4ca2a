// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use strum_macros::{Display, EnumCount, EnumIter};

/// The control key chords that are reported to the consumer (when masked in). `Ctrl+M`
/// is missing because terminals report it as <kbd>Enter</kbd>.
///
/// The declaration order is significant, it determines the chord's bit position in
/// [`crate::NotificationMask`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Display, EnumIter, EnumCount)]
pub enum CtrlChord {
    Space,
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
}

impl CtrlChord {
    /// Chord for `Ctrl` plus `ch`, case insensitive.
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        #[rustfmt::skip]
        let it = match ch.to_ascii_lowercase() {
            ' ' => Self::Space,
            'a' => Self::A, 'b' => Self::B, 'c' => Self::C, 'd' => Self::D,
            'e' => Self::E, 'f' => Self::F, 'g' => Self::G, 'h' => Self::H,
            'i' => Self::I, 'j' => Self::J, 'k' => Self::K, 'l' => Self::L,
            'n' => Self::N, 'o' => Self::O, 'p' => Self::P, 'q' => Self::Q,
            'r' => Self::R, 's' => Self::S, 't' => Self::T, 'u' => Self::U,
            'v' => Self::V, 'w' => Self::W, 'x' => Self::X, 'y' => Self::Y,
            'z' => Self::Z,
            _ => return None,
        };
        Some(it)
    }
}

/// The keys that the reactor knows how to handle. Everything else that the terminal
/// reports is ignored.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum KeyPress {
    /// A printable code point.
    Char(char),
    Enter,
    Backspace,
    Up,
    Down,
    Left,
    Right,
    Ctrl(CtrlChord),
}

impl KeyPress {
    /// Convert a `crossterm` key event. Key release events are dropped, and so are
    /// chords that involve `Alt`.
    #[must_use]
    pub fn try_from_crossterm(key_event: KeyEvent) -> Option<Self> {
        let KeyEvent {
            code,
            modifiers,
            kind,
            ..
        } = key_event;

        if kind == KeyEventKind::Release || modifiers.contains(KeyModifiers::ALT) {
            return None;
        }

        let is_ctrl = modifiers.contains(KeyModifiers::CONTROL);

        match code {
            KeyCode::Char('m' | 'M') if is_ctrl => Some(Self::Enter),
            KeyCode::Char(ch) if is_ctrl => CtrlChord::from_char(ch).map(Self::Ctrl),
            KeyCode::Char(ch) => Some(Self::Char(ch)),
            // The terminal sends the same byte for Tab and Ctrl+I.
            KeyCode::Tab => Some(Self::Ctrl(CtrlChord::I)),
            KeyCode::Enter => Some(Self::Enter),
            KeyCode::Backspace => Some(Self::Backspace),
            KeyCode::Up => Some(Self::Up),
            KeyCode::Down => Some(Self::Down),
            KeyCode::Left => Some(Self::Left),
            KeyCode::Right => Some(Self::Right),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyEventState;
    use strum::{EnumCount, IntoEnumIterator};
    use test_case::test_case;

    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test_case(key(KeyCode::Char('a'), KeyModifiers::NONE), Some(KeyPress::Char('a')))]
    #[test_case(key(KeyCode::Char('A'), KeyModifiers::SHIFT), Some(KeyPress::Char('A')))]
    #[test_case(key(KeyCode::Char('中'), KeyModifiers::NONE), Some(KeyPress::Char('中')))]
    #[test_case(key(KeyCode::Char('c'), KeyModifiers::CONTROL), Some(KeyPress::Ctrl(CtrlChord::C)))]
    #[test_case(key(KeyCode::Char(' '), KeyModifiers::CONTROL), Some(KeyPress::Ctrl(CtrlChord::Space)))]
    #[test_case(key(KeyCode::Char('m'), KeyModifiers::CONTROL), Some(KeyPress::Enter))]
    #[test_case(key(KeyCode::Char('1'), KeyModifiers::CONTROL), None)]
    #[test_case(key(KeyCode::Char('x'), KeyModifiers::ALT), None)]
    #[test_case(key(KeyCode::Tab, KeyModifiers::NONE), Some(KeyPress::Ctrl(CtrlChord::I)))]
    #[test_case(key(KeyCode::Enter, KeyModifiers::NONE), Some(KeyPress::Enter))]
    #[test_case(key(KeyCode::Backspace, KeyModifiers::NONE), Some(KeyPress::Backspace))]
    #[test_case(key(KeyCode::Up, KeyModifiers::NONE), Some(KeyPress::Up))]
    #[test_case(key(KeyCode::Right, KeyModifiers::NONE), Some(KeyPress::Right))]
    #[test_case(key(KeyCode::F(1), KeyModifiers::NONE), None)]
    #[test_case(key(KeyCode::Delete, KeyModifiers::NONE), None)]
    fn test_try_from_crossterm(key_event: KeyEvent, expected: Option<KeyPress>) {
        assert_eq!(KeyPress::try_from_crossterm(key_event), expected);
    }

    #[test]
    fn test_key_release_is_ignored() {
        let key_event = KeyEvent::new_with_kind_and_state(
            KeyCode::Char('a'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        assert_eq!(KeyPress::try_from_crossterm(key_event), None);
    }

    #[test]
    fn test_every_chord_has_a_char() {
        assert_eq!(CtrlChord::COUNT, 26);
        let letters = " abcdefghijklnopqrstuvwxyz";
        for (chord, ch) in CtrlChord::iter().zip(letters.chars()) {
            assert_eq!(CtrlChord::from_char(ch), Some(chord));
        }
        assert_eq!(CtrlChord::from_char('m'), None);
    }
}
