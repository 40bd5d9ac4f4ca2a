// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use bitflags::bitflags;
use chrono::{DateTime, Local};

use crate::{CtrlChord, TermSize};

bitflags! {
    /// Selects which [`Notification`]s are delivered to the consumer. The bit positions
    /// are a stable public contract.
    ///
    /// | bits    | flags                                 |
    /// |---------|---------------------------------------|
    /// | 0 - 5   | scroll and trace notifications        |
    /// | 6       | [`NotificationMask::WINDOW_RESIZE`]   |
    /// | 7       | [`NotificationMask::CTRL_SPACE`]      |
    /// | 8 - 19  | `CTRL_A` to `CTRL_L`                  |
    /// | 20 - 32 | `CTRL_N` to `CTRL_Z`                  |
    #[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
    pub struct NotificationMask: u64 {
        const MOVE_UP              = 1 << 0;
        const MOVE_DOWN            = 1 << 1;
        const TRY_TO_GET_UPPER     = 1 << 2;
        const TRY_TO_GET_LOWER     = 1 << 3;
        const TYPE_UP_WHEN_TRACE   = 1 << 4;
        const TYPE_DOWN_WHEN_TRACE = 1 << 5;
        const WINDOW_RESIZE        = 1 << 6;
        const CTRL_SPACE           = 1 << 7;
        const CTRL_A               = 1 << 8;
        const CTRL_B               = 1 << 9;
        const CTRL_C               = 1 << 10;
        const CTRL_D               = 1 << 11;
        const CTRL_E               = 1 << 12;
        const CTRL_F               = 1 << 13;
        const CTRL_G               = 1 << 14;
        const CTRL_H               = 1 << 15;
        const CTRL_I               = 1 << 16;
        const CTRL_J               = 1 << 17;
        const CTRL_K               = 1 << 18;
        const CTRL_L               = 1 << 19;
        const CTRL_N               = 1 << 20;
        const CTRL_O               = 1 << 21;
        const CTRL_P               = 1 << 22;
        const CTRL_Q               = 1 << 23;
        const CTRL_R               = 1 << 24;
        const CTRL_S               = 1 << 25;
        const CTRL_T               = 1 << 26;
        const CTRL_U               = 1 << 27;
        const CTRL_V               = 1 << 28;
        const CTRL_W               = 1 << 29;
        const CTRL_X               = 1 << 30;
        const CTRL_Y               = 1 << 31;
        const CTRL_Z               = 1 << 32;
    }
}

impl Default for NotificationMask {
    fn default() -> Self { Self::empty() }
}

impl From<CtrlChord> for NotificationMask {
    fn from(chord: CtrlChord) -> Self {
        Self::from_bits_retain(NotificationMask::CTRL_SPACE.bits() << (chord as u32))
    }
}

/// The kind of a [`Notification`], without its payload.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum NotificationKind {
    MoveUp,
    MoveDown,
    TryToGetUpper,
    TryToGetLower,
    TypeUpWhenTrace,
    TypeDownWhenTrace,
    WindowResize,
    Ctrl(CtrlChord),
}

impl NotificationKind {
    /// The single bit in [`NotificationMask`] that gates this kind.
    #[must_use]
    pub fn flag(self) -> NotificationMask {
        match self {
            Self::MoveUp => NotificationMask::MOVE_UP,
            Self::MoveDown => NotificationMask::MOVE_DOWN,
            Self::TryToGetUpper => NotificationMask::TRY_TO_GET_UPPER,
            Self::TryToGetLower => NotificationMask::TRY_TO_GET_LOWER,
            Self::TypeUpWhenTrace => NotificationMask::TYPE_UP_WHEN_TRACE,
            Self::TypeDownWhenTrace => NotificationMask::TYPE_DOWN_WHEN_TRACE,
            Self::WindowResize => NotificationMask::WINDOW_RESIZE,
            Self::Ctrl(chord) => chord.into(),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum NotificationEvent {
    /// The user scrolled up one line.
    MoveUp { line_offset_before_move: usize },
    /// The user scrolled down one line.
    MoveDown { line_offset_before_move: usize },
    /// The user pressed <kbd>Up</kbd> while the first line was already at the top.
    TryToGetUpper,
    /// The user pressed <kbd>Down</kbd> while the last line was already visible.
    TryToGetLower,
    /// The user pressed <kbd>Up</kbd> in trace mode (which doesn't scroll).
    TypeUpWhenTrace,
    /// The user pressed <kbd>Down</kbd> in trace mode (which doesn't scroll).
    TypeDownWhenTrace,
    CtrlKey { chord: CtrlChord },
    WindowResize(TermSize),
}

impl NotificationEvent {
    #[must_use]
    pub fn kind(&self) -> NotificationKind {
        match self {
            Self::MoveUp { .. } => NotificationKind::MoveUp,
            Self::MoveDown { .. } => NotificationKind::MoveDown,
            Self::TryToGetUpper => NotificationKind::TryToGetUpper,
            Self::TryToGetLower => NotificationKind::TryToGetLower,
            Self::TypeUpWhenTrace => NotificationKind::TypeUpWhenTrace,
            Self::TypeDownWhenTrace => NotificationKind::TypeDownWhenTrace,
            Self::CtrlKey { chord } => NotificationKind::Ctrl(*chord),
            Self::WindowResize(_) => NotificationKind::WindowResize,
        }
    }
}

/// Something the user did that the consumer asked to hear about, with the time the
/// reactor observed it.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Notification {
    pub event: NotificationEvent,
    pub when: DateTime<Local>,
}

impl Notification {
    #[must_use]
    pub fn new(event: NotificationEvent) -> Self {
        Self {
            event,
            when: Local::now(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> NotificationKind { self.event.kind() }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_scroll_bits_are_stable() {
        assert_eq!(NotificationMask::MOVE_UP.bits(), 1);
        assert_eq!(NotificationMask::MOVE_DOWN.bits(), 2);
        assert_eq!(NotificationMask::TRY_TO_GET_UPPER.bits(), 4);
        assert_eq!(NotificationMask::TRY_TO_GET_LOWER.bits(), 8);
        assert_eq!(NotificationMask::TYPE_UP_WHEN_TRACE.bits(), 16);
        assert_eq!(NotificationMask::TYPE_DOWN_WHEN_TRACE.bits(), 32);
        assert_eq!(NotificationMask::WINDOW_RESIZE.bits(), 64);
    }

    #[test]
    fn test_ctrl_chord_flags_match_named_constants() {
        assert_eq!(NotificationMask::from(CtrlChord::Space), NotificationMask::CTRL_SPACE);
        assert_eq!(NotificationMask::from(CtrlChord::A), NotificationMask::CTRL_A);
        assert_eq!(NotificationMask::from(CtrlChord::L), NotificationMask::CTRL_L);
        assert_eq!(NotificationMask::from(CtrlChord::N), NotificationMask::CTRL_N);
        assert_eq!(NotificationMask::from(CtrlChord::Z), NotificationMask::CTRL_Z);
    }

    #[test]
    fn test_every_kind_has_a_distinct_bit() {
        let kinds = [
            NotificationKind::MoveUp,
            NotificationKind::MoveDown,
            NotificationKind::TryToGetUpper,
            NotificationKind::TryToGetLower,
            NotificationKind::TypeUpWhenTrace,
            NotificationKind::TypeDownWhenTrace,
            NotificationKind::WindowResize,
        ]
        .into_iter()
        .chain(CtrlChord::iter().map(NotificationKind::Ctrl));

        let mut union = NotificationMask::empty();
        let mut count = 0;
        for kind in kinds {
            let flag = kind.flag();
            assert_eq!(flag.bits().count_ones(), 1);
            assert!(!union.intersects(flag), "{kind:?} shares a bit");
            union |= flag;
            count += 1;
        }
        assert_eq!(union, NotificationMask::all());
        assert_eq!(count, 33);
    }

    #[test]
    fn test_notification_kind() {
        let notification = Notification::new(NotificationEvent::MoveUp {
            line_offset_before_move: 3,
        });
        assert_eq!(notification.kind(), NotificationKind::MoveUp);
    }
}
