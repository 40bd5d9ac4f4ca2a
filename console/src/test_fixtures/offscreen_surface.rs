// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{io, sync::Arc};

use crate::{StdMutex, StyleAttr, TermSize, TerminalSurface, char_display_width};

/// Placeholder stored in the cell to the right of a double width glyph.
pub const WIDE_GLYPH_CONTINUATION: char = '\0';

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct OffscreenCell {
    pub ch: char,
    pub style: StyleAttr,
}

impl Default for OffscreenCell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: StyleAttr::default(),
        }
    }
}

#[derive(Debug, Default)]
pub struct OffscreenState {
    pub size: TermSize,
    /// Indexed by `[row][col]`.
    pub cells: Vec<Vec<OffscreenCell>>,
    pub cursor: Option<(usize, usize)>,
    pub beep_count: usize,
    pub present_count: usize,
    pub release_count: usize,
    /// When set, every write fails with an I/O error.
    pub fail_writes: bool,
}

impl OffscreenState {
    fn blank_cells(size: TermSize) -> Vec<Vec<OffscreenCell>> {
        vec![vec![OffscreenCell::default(); usize::from(size.cols)]; usize::from(size.rows)]
    }

    fn check_writable(&self) -> io::Result<()> {
        if self.fail_writes {
            return Err(io::Error::other("offscreen surface is failing writes"));
        }
        Ok(())
    }
}

/// In memory [`TerminalSurface`]. Clones share the same grid, so a test can hand one
/// clone to a [`crate::Console`] and inspect what was painted with another.
///
/// ```
/// use r3bl_console::{OffscreenSurface, StyleAttr, TermSize, TerminalSurface};
///
/// let surface = OffscreenSurface::new(TermSize::new(3, 10));
/// let mut painter = surface.clone();
/// painter.set_cell(0, 0, 'h', StyleAttr::default()).unwrap();
/// painter.set_cell(1, 0, 'i', StyleAttr::default()).unwrap();
/// assert_eq!(surface.row_text(0), "hi");
/// ```
#[derive(Clone, Debug)]
pub struct OffscreenSurface {
    pub state: Arc<StdMutex<OffscreenState>>,
}

impl OffscreenSurface {
    #[must_use]
    pub fn new(size: TermSize) -> Self {
        let state = OffscreenState {
            size,
            cells: OffscreenState::blank_cells(size),
            ..Default::default()
        };
        Self {
            state: Arc::new(StdMutex::new(state)),
        }
    }

    fn lock_state(&self) -> io::Result<std::sync::MutexGuard<'_, OffscreenState>> {
        self.state
            .lock()
            .map_err(|_| io::Error::other("offscreen surface lock is poisoned"))
    }

    fn inspect<T>(&self, f: impl FnOnce(&OffscreenState) -> T) -> T {
        let state = self.state.lock().unwrap();
        f(&state)
    }

    /// Change the reported size. The grid is blanked, like a real terminal would be.
    ///
    /// # Panics
    ///
    /// This will panic if the lock is poisoned.
    pub fn set_size(&self, size: TermSize) {
        let mut state = self.state.lock().unwrap();
        state.size = size;
        state.cells = OffscreenState::blank_cells(size);
    }

    /// # Panics
    ///
    /// This will panic if the lock is poisoned.
    pub fn set_fail_writes(&self, value: bool) { self.state.lock().unwrap().fail_writes = value; }

    /// Text painted on `row`, with trailing blanks removed.
    ///
    /// # Panics
    ///
    /// This will panic if the lock is poisoned.
    #[must_use]
    pub fn row_text(&self, row: usize) -> String {
        self.inspect(|state| {
            state.cells.get(row).map_or_else(String::new, |cells| {
                let text: String = cells
                    .iter()
                    .map(|cell| cell.ch)
                    .filter(|ch| *ch != WIDE_GLYPH_CONTINUATION)
                    .collect();
                text.trim_end().to_string()
            })
        })
    }

    /// # Panics
    ///
    /// This will panic if the lock is poisoned.
    #[must_use]
    pub fn cell(&self, col: usize, row: usize) -> Option<OffscreenCell> {
        self.inspect(|state| state.cells.get(row).and_then(|cells| cells.get(col)).copied())
    }

    /// # Panics
    ///
    /// This will panic if the lock is poisoned.
    #[must_use]
    pub fn cursor(&self) -> Option<(usize, usize)> { self.inspect(|state| state.cursor) }

    /// # Panics
    ///
    /// This will panic if the lock is poisoned.
    #[must_use]
    pub fn beep_count(&self) -> usize { self.inspect(|state| state.beep_count) }

    /// # Panics
    ///
    /// This will panic if the lock is poisoned.
    #[must_use]
    pub fn present_count(&self) -> usize { self.inspect(|state| state.present_count) }

    /// # Panics
    ///
    /// This will panic if the lock is poisoned.
    #[must_use]
    pub fn release_count(&self) -> usize { self.inspect(|state| state.release_count) }
}

impl TerminalSurface for OffscreenSurface {
    fn size(&self) -> io::Result<TermSize> { Ok(self.lock_state()?.size) }

    fn clear(&mut self) -> io::Result<()> {
        let mut state = self.lock_state()?;
        state.check_writable()?;
        let size = state.size;
        state.cells = OffscreenState::blank_cells(size);
        Ok(())
    }

    fn set_cell(
        &mut self,
        col: usize,
        row: usize,
        ch: char,
        style: StyleAttr,
    ) -> io::Result<()> {
        let mut state = self.lock_state()?;
        state.check_writable()?;
        let Some(cells) = state.cells.get_mut(row) else {
            return Ok(());
        };
        let Some(cell) = cells.get_mut(col) else {
            return Ok(());
        };
        *cell = OffscreenCell { ch, style };
        if char_display_width(ch) == 2
            && let Some(next_cell) = cells.get_mut(col + 1)
        {
            *next_cell = OffscreenCell {
                ch: WIDE_GLYPH_CONTINUATION,
                style,
            };
        }
        Ok(())
    }

    fn show_cursor(&mut self, col: usize, row: usize) -> io::Result<()> {
        let mut state = self.lock_state()?;
        state.check_writable()?;
        state.cursor = Some((col, row));
        Ok(())
    }

    fn present(&mut self) -> io::Result<()> {
        let mut state = self.lock_state()?;
        state.check_writable()?;
        state.present_count += 1;
        Ok(())
    }

    fn beep(&mut self) -> io::Result<()> {
        let mut state = self.lock_state()?;
        state.check_writable()?;
        state.beep_count += 1;
        Ok(())
    }

    fn release(&mut self) -> io::Result<()> {
        self.lock_state()?.release_count += 1;
        Ok(())
    }
}
