// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Pure scroll arithmetic for the output pane. Nothing in here touches the terminal.

use std::collections::VecDeque;

use crate::StyledLine;

/// Which slice of the line buffer can be shown in a viewport.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct VisibleWindow {
    /// The largest valid line offset. At this offset the last line sits on the bottom
    /// row of the pane.
    pub max_offset: usize,
    /// How many lines are painted, starting at the current line offset.
    pub count_to_render: usize,
}

/// There is nothing to scroll when every line fits, otherwise the pane always shows
/// exactly `viewport_rows` lines.
///
/// ```
/// use r3bl_console::{VisibleWindow, compute_visible_window};
///
/// assert_eq!(
///     compute_visible_window(5, 3),
///     VisibleWindow { max_offset: 0, count_to_render: 3 }
/// );
/// assert_eq!(
///     compute_visible_window(5, 10),
///     VisibleWindow { max_offset: 5, count_to_render: 5 }
/// );
/// ```
#[must_use]
pub const fn compute_visible_window(viewport_rows: usize, total_lines: usize) -> VisibleWindow {
    if total_lines < viewport_rows {
        VisibleWindow {
            max_offset: 0,
            count_to_render: total_lines,
        }
    } else {
        VisibleWindow {
            max_offset: total_lines - viewport_rows,
            count_to_render: viewport_rows,
        }
    }
}

/// The widest remainder of any line once its first `from_col` display columns are
/// skipped. Used to decide if scrolling right would reveal anything.
#[must_use]
pub fn max_line_width_from(lines: &VecDeque<StyledLine>, from_col: usize) -> usize {
    lines
        .iter()
        .map(|line| line.display_width().saturating_sub(from_col))
        .max()
        .unwrap_or(0)
}
