// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tokio::sync::oneshot;

use crate::{ConsoleError, KeyPress, StyleAttr, StyledLine, TermSize};

/// Everything the reactor can be asked to do. Keyboard and resize events come from the
/// terminal via the input pump. All the others are posted by [`crate::Console`]
/// handles. Each event is consumed exactly once.
#[derive(Debug)]
pub enum ConsoleEvent {
    // Terminal.
    KeyPress(KeyPress),
    Resize(TermSize),

    // Lifecycle.
    /// Release the terminal and exit. The reply is the result of releasing it.
    Stop {
        reply: oneshot::Sender<Result<(), ConsoleError>>,
    },
    QueryWindowSize {
        reply: oneshot::Sender<TermSize>,
    },

    // Line buffer.
    Clear,
    PopFront,
    PopBack,
    SendFront(StyledLine),
    SendBack(StyledLine),

    // Scrolling.
    GotoTop,
    GotoBottom,
    /// One based line number.
    GotoLine(isize),
    GotoNext,
    GotoPrevious,
    GotoLeft,

    // Modes.
    SetTrace(bool),
    SetBlockInput(bool),
    SetBlockInputAfterEnter(bool),
    SetPrompt {
        prompt: Option<char>,
        style: Option<StyleAttr>,
    },
}

impl ConsoleEvent {
    /// Convert a `crossterm` event into a [`ConsoleEvent`]. Returns [None] for events
    /// that the console doesn't handle (mouse, focus, paste, key release).
    #[must_use]
    pub fn try_from_crossterm(event: crossterm::event::Event) -> Option<Self> {
        match event {
            crossterm::event::Event::Key(key_event) => {
                KeyPress::try_from_crossterm(key_event).map(ConsoleEvent::KeyPress)
            }
            crossterm::event::Event::Resize(cols, rows) => {
                Some(ConsoleEvent::Resize(TermSize { rows, cols }))
            }
            _ => None,
        }
    }

    /// Short name for logging. Payloads (which may be large, or private) are omitted.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::KeyPress(_) => "KeyPress",
            Self::Resize(_) => "Resize",
            Self::Stop { .. } => "Stop",
            Self::QueryWindowSize { .. } => "QueryWindowSize",
            Self::Clear => "Clear",
            Self::PopFront => "PopFront",
            Self::PopBack => "PopBack",
            Self::SendFront(_) => "SendFront",
            Self::SendBack(_) => "SendBack",
            Self::GotoTop => "GotoTop",
            Self::GotoBottom => "GotoBottom",
            Self::GotoLine(_) => "GotoLine",
            Self::GotoNext => "GotoNext",
            Self::GotoPrevious => "GotoPrevious",
            Self::GotoLeft => "GotoLeft",
            Self::SetTrace(_) => "SetTrace",
            Self::SetBlockInput(_) => "SetBlockInput",
            Self::SetBlockInputAfterEnter(_) => "SetBlockInputAfterEnter",
            Self::SetPrompt { .. } => "SetPrompt",
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseEvent,
                           MouseEventKind};

    use super::*;

    #[test]
    fn test_resize_swaps_to_rows_and_cols() {
        let event = ConsoleEvent::try_from_crossterm(Event::Resize(80, 24));
        assert!(matches!(
            event,
            Some(ConsoleEvent::Resize(TermSize { rows: 24, cols: 80 }))
        ));
    }

    #[test]
    fn test_key_event() {
        let event = ConsoleEvent::try_from_crossterm(Event::Key(KeyEvent::new(
            KeyCode::Char('q'),
            KeyModifiers::NONE,
        )));
        assert!(matches!(
            event,
            Some(ConsoleEvent::KeyPress(KeyPress::Char('q')))
        ));
    }

    #[test]
    fn test_unhandled_events_are_ignored() {
        let mouse = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Moved,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        });
        assert!(ConsoleEvent::try_from_crossterm(mouse).is_none());
        assert!(ConsoleEvent::try_from_crossterm(Event::FocusGained).is_none());
    }
}
