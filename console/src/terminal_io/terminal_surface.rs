// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::Debug, io};

use crate::StyleAttr;

/// Size of the terminal in cells.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct TermSize {
    pub rows: u16,
    pub cols: u16,
}

impl TermSize {
    #[must_use]
    pub const fn new(rows: u16, cols: u16) -> Self { Self { rows, cols } }
}

/// A character cell surface that the reactor paints on. There are two implementations:
/// 1. [`crate::CrosstermSurface`] paints on the real terminal.
/// 2. [`crate::OffscreenSurface`] paints into an in memory grid, for tests.
///
/// Nothing is guaranteed to be visible until [`TerminalSurface::present`] is called.
/// Columns and rows are zero based, and writes outside of the surface are ignored.
pub trait TerminalSurface: Send + Debug {
    /// # Errors
    ///
    /// Returns an error if the size can't be queried.
    fn size(&self) -> io::Result<TermSize>;

    /// Blank every cell.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface can't be written to.
    fn clear(&mut self) -> io::Result<()>;

    /// # Errors
    ///
    /// Returns an error if the surface can't be written to.
    fn set_cell(&mut self, col: usize, row: usize, ch: char, style: StyleAttr)
    -> io::Result<()>;

    /// # Errors
    ///
    /// Returns an error if the surface can't be written to.
    fn show_cursor(&mut self, col: usize, row: usize) -> io::Result<()>;

    /// Flush everything painted so far.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface can't be written to.
    fn present(&mut self) -> io::Result<()>;

    /// # Errors
    ///
    /// Returns an error if the surface can't be written to.
    fn beep(&mut self) -> io::Result<()>;

    /// Give the terminal back in the state it was in before the surface acquired it. It
    /// is safe to call this more than once.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal's mode can't be restored.
    fn release(&mut self) -> io::Result<()>;
}
