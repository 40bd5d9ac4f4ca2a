// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Every state transition of the [`Reactor`]. Boundary conditions (popping an empty
//! buffer, scrolling past either end) are no-ops, optionally reported as a
//! [`Notification`].

use std::io;

use crate::{KeyPress, Notification, NotificationEvent, PushInputResult, Reactor,
            StyleAttr, StyledLine, TermSize, max_line_width_from, paint_prompt_row,
            redraw};

impl Reactor {
    /// Hand `event` to the notification delivery task, if its kind is in the mask.
    pub fn notify(&self, event: NotificationEvent) {
        if !self.window.is_masked(event.kind()) {
            return;
        }
        // We don't care about the result of this operation.
        self.outbound
            .notifications
            .send(Notification::new(event))
            .ok();
    }

    fn redraw(&mut self) -> io::Result<()> { redraw(&mut self.window, self.surface.as_mut()) }

    fn redraw_prompt_row(&mut self) -> io::Result<()> {
        paint_prompt_row(&self.window, self.surface.as_mut())?;
        self.surface.present()
    }

    pub fn on_key_press(&mut self, key_press: KeyPress) -> io::Result<()> {
        match key_press {
            KeyPress::Enter => self.on_enter(),
            KeyPress::Backspace => self.on_backspace(),
            KeyPress::Up => self.on_up(),
            KeyPress::Down => self.on_down(),
            KeyPress::Left => self.on_left(),
            KeyPress::Right => self.on_right(),
            KeyPress::Char(ch) => self.on_char(ch),
            KeyPress::Ctrl(chord) => {
                self.notify(NotificationEvent::CtrlKey { chord });
                Ok(())
            }
        }
    }

    fn on_enter(&mut self) -> io::Result<()> {
        if self.window.blocked_now {
            return Ok(());
        }

        let command = self.window.take_input();
        self.redraw_prompt_row()?;

        if self.window.block_input_after_enter {
            self.window.blocked_now = true;
        }

        if self.outbound.commands.send(command).is_err() {
            tracing::warn!(message = "command dropped, delivery task is gone");
        }
        Ok(())
    }

    fn on_backspace(&mut self) -> io::Result<()> {
        if self.window.blocked_now || self.window.pop_input().is_none() {
            return Ok(());
        }
        self.redraw_prompt_row()
    }

    fn on_char(&mut self, ch: char) -> io::Result<()> {
        if self.window.blocked_now {
            return Ok(());
        }
        match self.window.try_push_input(ch) {
            PushInputResult::Ignored => Ok(()),
            PushInputResult::NoRoom => self.surface.beep(),
            PushInputResult::Accepted { col } => {
                let row = self.window.max_row;
                self.surface.set_cell(col, row, ch, StyleAttr::default())?;
                self.surface
                    .show_cursor(self.window.input_cursor_col(), row)?;
                self.surface.present()
            }
        }
    }

    fn on_up(&mut self) -> io::Result<()> {
        if self.window.trace {
            self.notify(NotificationEvent::TypeUpWhenTrace);
            return Ok(());
        }
        if self.window.line_offset == 0 {
            self.notify(NotificationEvent::TryToGetUpper);
            return Ok(());
        }
        self.notify(NotificationEvent::MoveUp {
            line_offset_before_move: self.window.line_offset,
        });
        self.window.line_offset -= 1;
        self.redraw()
    }

    fn on_down(&mut self) -> io::Result<()> {
        if self.window.trace {
            self.notify(NotificationEvent::TypeDownWhenTrace);
            return Ok(());
        }
        if self.window.line_offset >= self.window.visible_window().max_offset {
            self.notify(NotificationEvent::TryToGetLower);
            return Ok(());
        }
        self.notify(NotificationEvent::MoveDown {
            line_offset_before_move: self.window.line_offset,
        });
        self.window.line_offset += 1;
        self.redraw()
    }

    fn on_left(&mut self) -> io::Result<()> {
        if self.window.column_offset == 0 {
            return Ok(());
        }
        self.window.column_offset -= 1;
        self.redraw()
    }

    /// Only scroll while doing so still reveals something. A line that exactly fits
    /// the viewport can't be scrolled.
    fn on_right(&mut self) -> io::Result<()> {
        let remaining = max_line_width_from(&self.window.lines, self.window.column_offset + 1);
        if self.window.viewport_cols() > remaining {
            return Ok(());
        }
        self.window.column_offset += 1;
        self.redraw()
    }

    pub fn on_resize(&mut self, size: TermSize) -> io::Result<()> {
        self.window.set_viewport(size);
        self.window.clear_input();
        self.redraw()?;
        self.notify(NotificationEvent::WindowResize(size));
        Ok(())
    }

    pub fn on_clear(&mut self) -> io::Result<()> {
        self.window.lines.clear();
        self.window.line_offset = 0;
        self.window.column_offset = 0;
        self.redraw()
    }

    pub fn on_pop_front(&mut self) -> io::Result<()> {
        if self.window.lines.pop_front().is_some()
            && !self.window.trace
            && self.window.line_offset >= 1
        {
            self.window.line_offset -= 1;
        }
        self.redraw()
    }

    pub fn on_pop_back(&mut self) -> io::Result<()> {
        self.window.lines.pop_back();
        self.redraw()
    }

    pub fn on_send_back(&mut self, line: StyledLine) -> io::Result<()> {
        self.window.lines.push_back(line);
        self.redraw()
    }

    /// Keeps the same lines on screen when scrolled, by moving the offset along with
    /// them.
    pub fn on_send_front(&mut self, line: StyledLine) -> io::Result<()> {
        self.window.lines.push_front(line);
        let max_offset = self.window.visible_window().max_offset;
        let is_pinned = !self.window.trace && self.window.line_offset == max_offset;
        if !is_pinned {
            self.window.line_offset += 1;
        }
        self.redraw()
    }

    pub fn on_goto_top(&mut self) -> io::Result<()> {
        self.window.trace = false;
        self.window.line_offset = 0;
        self.redraw()
    }

    pub fn on_goto_bottom(&mut self) -> io::Result<()> {
        self.window.trace = false;
        self.window.line_offset = self.window.visible_window().max_offset;
        self.redraw()
    }

    /// `line_number` is one based, and is clamped to the valid range.
    pub fn on_goto_line(&mut self, line_number: isize) -> io::Result<()> {
        self.window.trace = false;
        let max_offset = self.window.visible_window().max_offset;
        let target = usize::try_from(line_number.saturating_sub(1)).unwrap_or(0);
        self.window.line_offset = target.min(max_offset);
        self.redraw()
    }

    pub fn on_goto_next(&mut self) -> io::Result<()> {
        self.window.trace = false;
        if self.window.line_offset < self.window.visible_window().max_offset {
            self.window.line_offset += 1;
        }
        self.redraw()
    }

    pub fn on_goto_previous(&mut self) -> io::Result<()> {
        self.window.trace = false;
        self.window.line_offset = self.window.line_offset.saturating_sub(1);
        self.redraw()
    }

    pub fn on_goto_left(&mut self) -> io::Result<()> {
        if self.window.column_offset == 0 {
            return Ok(());
        }
        self.window.column_offset = 0;
        self.redraw()
    }

    pub fn on_set_trace(&mut self, value: bool) -> io::Result<()> {
        self.window.trace = value;
        self.redraw()
    }

    pub fn on_set_block_input(&mut self, value: bool) -> io::Result<()> {
        self.window.blocked_now = value;
        self.window.clear_input();
        self.redraw_prompt_row()
    }

    pub fn on_set_prompt(
        &mut self,
        prompt: Option<char>,
        style: Option<StyleAttr>,
    ) -> io::Result<()> {
        self.window.set_prompt(prompt, style);
        self.redraw_prompt_row()
    }
}
