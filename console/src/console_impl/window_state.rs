// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::collections::VecDeque;

use crate::{ConsoleConfig, NotificationKind, NotificationMask, StyleAttr, StyledLine,
            TermSize, VisibleWindow, char_display_width, compute_visible_window};

/// All the mutable presentation state of the console. It is owned by the reactor task,
/// and only [`crate::Reactor::apply`] mutates it.
///
/// The last terminal row (`max_row`) is the prompt row, every row above it belongs to
/// the output pane. All column values are display columns, not code point indices.
#[derive(Debug)]
pub struct Window {
    /// Index 0 is the oldest line.
    pub lines: VecDeque<StyledLine>,

    pub input: Vec<char>,
    /// Display width of `input`.
    pub input_width: usize,

    /// Keep the newest line visible. Vertical scroll keys are disabled while set.
    pub trace: bool,
    /// Index of the first visible line.
    pub line_offset: usize,
    /// Display columns that are skipped from the left of every line.
    pub column_offset: usize,

    pub prompt: char,
    pub prompt_style: StyleAttr,
    pub prompt_width: usize,

    pub max_row: usize,
    pub max_col: usize,

    pub blocked_now: bool,
    pub block_input_after_enter: bool,
    pub notification_mask: NotificationMask,

    pub stopped: bool,
}

/// What happened to a code point that was typed at the prompt.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum PushInputResult {
    /// Appended. It should be painted at `col`.
    Accepted { col: usize },
    /// Zero width code points are dropped.
    Ignored,
    /// The prompt row is full.
    NoRoom,
}

impl Window {
    #[must_use]
    pub fn new(config: &ConsoleConfig, size: TermSize) -> Self {
        let mut it = Self {
            lines: VecDeque::new(),
            input: vec![],
            input_width: 0,
            trace: config.trace_after_run,
            line_offset: 0,
            column_offset: 0,
            prompt: config.prompt,
            prompt_style: config.prompt_style,
            prompt_width: char_display_width(config.prompt),
            max_row: 0,
            max_col: 0,
            blocked_now: config.block_input_after_run,
            block_input_after_enter: config.block_input_after_enter,
            notification_mask: config.notification_mask,
            stopped: false,
        };
        it.set_viewport(size);
        it
    }

    pub fn set_viewport(&mut self, size: TermSize) {
        self.max_row = usize::from(size.rows).saturating_sub(1);
        self.max_col = usize::from(size.cols).saturating_sub(1);
    }

    #[must_use]
    pub fn window_size(&self) -> TermSize {
        let rows = u16::try_from(self.max_row + 1).unwrap_or(u16::MAX);
        let cols = u16::try_from(self.max_col + 1).unwrap_or(u16::MAX);
        TermSize::new(rows, cols)
    }

    /// Rows of the output pane.
    #[must_use]
    pub fn viewport_rows(&self) -> usize { self.max_row }

    #[must_use]
    pub fn viewport_cols(&self) -> usize { self.max_col + 1 }

    #[must_use]
    pub fn visible_window(&self) -> VisibleWindow {
        compute_visible_window(self.viewport_rows(), self.lines.len())
    }

    /// Used by every redraw. In trace mode the last line is pinned to the bottom row.
    pub fn pin_line_offset(&mut self) {
        let max_offset = self.visible_window().max_offset;
        if self.trace || self.line_offset > max_offset {
            self.line_offset = max_offset;
        }
    }

    #[must_use]
    pub fn is_masked(&self, kind: NotificationKind) -> bool {
        self.notification_mask.contains(kind.flag())
    }

    /// The column where the first input glyph goes: the prompt glyph, then one blank.
    #[must_use]
    pub fn input_start(&self) -> usize { self.prompt_width + 1 }

    #[must_use]
    pub fn input_capacity(&self) -> usize {
        self.viewport_cols().saturating_sub(self.input_start())
    }

    #[must_use]
    pub fn input_cursor_col(&self) -> usize {
        (self.input_start() + self.input_width).min(self.max_col)
    }

    pub fn try_push_input(&mut self, ch: char) -> PushInputResult {
        let width = char_display_width(ch);
        if width == 0 {
            return PushInputResult::Ignored;
        }
        if self.input_width + width > self.input_capacity() {
            return PushInputResult::NoRoom;
        }
        let col = self.input_start() + self.input_width;
        self.input.push(ch);
        self.input_width += width;
        PushInputResult::Accepted { col }
    }

    pub fn pop_input(&mut self) -> Option<char> {
        let ch = self.input.pop()?;
        self.input_width = self.input_width.saturating_sub(char_display_width(ch));
        Some(ch)
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
        self.input_width = 0;
    }

    /// Returns the submitted text and leaves the input empty.
    pub fn take_input(&mut self) -> String {
        let text: String = self.input.drain(..).collect();
        self.input_width = 0;
        text
    }

    /// Drop input from the end until it fits in the prompt row again.
    pub fn trim_input_to_capacity(&mut self) {
        let capacity = self.input_capacity();
        while self.input_width > capacity && self.pop_input().is_some() {}
    }

    pub fn set_prompt(&mut self, prompt: Option<char>, style: Option<StyleAttr>) {
        if let Some(prompt) = prompt {
            self.prompt = prompt;
            self.prompt_width = char_display_width(prompt);
        }
        if let Some(style) = style {
            self.prompt_style = style;
        }
        self.trim_input_to_capacity();
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn window(rows: u16, cols: u16) -> Window {
        Window::new(&ConsoleConfig::default(), TermSize::new(rows, cols))
    }

    #[test]
    fn test_viewport_leaves_last_row_for_prompt() {
        let window = window(6, 20);
        assert_eq!(window.max_row, 5);
        assert_eq!(window.max_col, 19);
        assert_eq!(window.viewport_rows(), 5);
        assert_eq!(window.viewport_cols(), 20);
        assert_eq!(window.window_size(), TermSize::new(6, 20));
    }

    #[test]
    fn test_input_width_accounting_and_capacity() {
        // Prompt '>' and a blank leave 4 columns for input.
        let mut window = window(3, 6);
        assert_eq!(window.input_capacity(), 4);

        assert_eq!(window.try_push_input('a'), PushInputResult::Accepted { col: 2 });
        assert_eq!(window.try_push_input('中'), PushInputResult::Accepted { col: 3 });
        assert_eq!(window.input_width, 3);
        assert_eq!(window.try_push_input('文'), PushInputResult::NoRoom);
        assert_eq!(window.try_push_input('b'), PushInputResult::Accepted { col: 5 });
        assert_eq!(window.try_push_input('c'), PushInputResult::NoRoom);
        assert_eq!(window.input_cursor_col(), 5);

        assert_eq!(window.pop_input(), Some('b'));
        assert_eq!(window.pop_input(), Some('中'));
        assert_eq!(window.input_width, 1);
        assert_eq!(window.take_input(), "a");
        assert_eq!(window.input_width, 0);
        assert_eq!(window.pop_input(), None);
    }

    #[test]
    fn test_zero_width_input_is_ignored() {
        let mut window = window(3, 10);
        assert_eq!(window.try_push_input('\u{200B}'), PushInputResult::Ignored);
        assert!(window.input.is_empty());
    }

    #[test]
    fn test_wider_prompt_trims_input() {
        let mut window = window(3, 6);
        for ch in "abcd".chars() {
            window.try_push_input(ch);
        }
        window.set_prompt(Some('中'), None);
        assert_eq!(window.input_capacity(), 3);
        assert_eq!(window.input.iter().collect::<String>(), "abc");
        assert_eq!(window.input_width, 3);
    }

    #[test]
    fn test_pin_line_offset() {
        let mut window = window(6, 20);
        for index in 0..10 {
            window
                .lines
                .push_back(StyledLine::from_plain_text(&index.to_string()));
        }
        window.pin_line_offset();
        assert_eq!(window.line_offset, 0);

        window.trace = true;
        window.pin_line_offset();
        assert_eq!(window.line_offset, 5);

        window.trace = false;
        window.lines.truncate(7);
        window.pin_line_offset();
        assert_eq!(window.line_offset, 2);
    }
}
