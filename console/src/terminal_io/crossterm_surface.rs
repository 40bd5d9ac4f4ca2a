// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io;

use crossterm::{QueueableCommand, cursor,
                style::{Attribute, ContentStyle, Print, ResetColor, SetAttribute, SetStyle},
                terminal::{self, Clear, ClearType, EnterAlternateScreen,
                           LeaveAlternateScreen}};

use crate::{OutputDevice, StdoutMock, StyleAttr, TermSize, TerminalSurface,
            lock_output_device_as_mut};

/// [`TerminalSurface`] that paints on the real terminal using `crossterm`. Commands are
/// queued on the [`OutputDevice`] and only flushed by [`TerminalSurface::present`].
///
/// Acquiring the terminal puts it in raw mode and switches to the alternate screen.
/// [`TerminalSurface::release`] (or dropping the surface) undoes both.
#[derive(Debug)]
pub struct CrosstermSurface {
    output_device: OutputDevice,
    is_acquired: bool,
    /// Only set for mocks, which have no real terminal to query.
    fixed_size: Option<TermSize>,
}

impl CrosstermSurface {
    /// # Errors
    ///
    /// Returns an error if raw mode can't be enabled, or the alternate screen can't be
    /// entered. In that case the terminal is left as it was.
    pub fn try_acquire(output_device: OutputDevice) -> io::Result<Self> {
        terminal::enable_raw_mode()?;

        let result = {
            let term = lock_output_device_as_mut!(output_device);
            term.queue(EnterAlternateScreen)
                .and_then(|term| term.queue(Clear(ClearType::All)))
                .and_then(|term| term.flush())
        }; // Drop the term lock.

        if let Err(error) = result {
            // We don't care about the result of this operation.
            terminal::disable_raw_mode().ok();
            return Err(error);
        }

        tracing::debug!(message = "terminal acquired");

        Ok(Self {
            output_device,
            is_acquired: true,
            fixed_size: None,
        })
    }

    /// Surface that writes into a [`StdoutMock`] and reports `size`. The real terminal
    /// is not touched.
    #[must_use]
    pub fn new_mock(size: TermSize) -> (Self, StdoutMock) {
        let (output_device, stdout_mock) = OutputDevice::new_mock();
        let it = Self {
            output_device,
            is_acquired: false,
            fixed_size: Some(size),
        };
        (it, stdout_mock)
    }
}

impl TerminalSurface for CrosstermSurface {
    fn size(&self) -> io::Result<TermSize> {
        if let Some(size) = self.fixed_size {
            return Ok(size);
        }
        let (cols, rows) = terminal::size()?;
        Ok(TermSize { rows, cols })
    }

    fn clear(&mut self) -> io::Result<()> {
        lock_output_device_as_mut!(self.output_device).queue(Clear(ClearType::All))?;
        Ok(())
    }

    fn set_cell(
        &mut self,
        col: usize,
        row: usize,
        ch: char,
        style: StyleAttr,
    ) -> io::Result<()> {
        let (Ok(col), Ok(row)) = (u16::try_from(col), u16::try_from(row)) else {
            return Ok(());
        };
        let term = lock_output_device_as_mut!(self.output_device);
        term.queue(cursor::MoveTo(col, row))?
            .queue(SetStyle(ContentStyle::from(style)))?
            .queue(Print(ch))?;
        Ok(())
    }

    fn show_cursor(&mut self, col: usize, row: usize) -> io::Result<()> {
        let col = u16::try_from(col).unwrap_or(u16::MAX);
        let row = u16::try_from(row).unwrap_or(u16::MAX);
        let term = lock_output_device_as_mut!(self.output_device);
        term.queue(cursor::MoveTo(col, row))?.queue(cursor::Show)?;
        Ok(())
    }

    fn present(&mut self) -> io::Result<()> {
        let term = lock_output_device_as_mut!(self.output_device);
        term.queue(ResetColor)?
            .queue(SetAttribute(Attribute::Reset))?
            .flush()
    }

    fn beep(&mut self) -> io::Result<()> {
        let term = lock_output_device_as_mut!(self.output_device);
        term.queue(Print('\x07'))?.flush()
    }

    fn release(&mut self) -> io::Result<()> {
        if !self.is_acquired {
            return Ok(());
        }
        self.is_acquired = false;

        {
            let term = lock_output_device_as_mut!(self.output_device);
            term.queue(ResetColor)?
                .queue(LeaveAlternateScreen)?
                .queue(cursor::Show)?
                .flush()?;
        } // Drop the term lock.

        terminal::disable_raw_mode()?;
        tracing::debug!(message = "terminal released");
        Ok(())
    }
}

impl Drop for CrosstermSurface {
    fn drop(&mut self) {
        // We don't care about the result of this operation.
        self.release().ok();
    }
}
