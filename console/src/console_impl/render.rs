// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io;

use crate::{StyleAttr, StyledLine, TerminalSurface, Window, char_display_width};

/// Repaint everything: the visible slice of the output pane, then the prompt row.
///
/// This is also where trace mode takes effect, see [`Window::pin_line_offset`].
///
/// # Errors
///
/// Returns the first error reported by the surface.
pub fn redraw(window: &mut Window, surface: &mut dyn TerminalSurface) -> io::Result<()> {
    surface.clear()?;
    window.pin_line_offset();

    let visible_window = window.visible_window();
    tracing::trace!(
        message = "redraw",
        line_offset = window.line_offset,
        column_offset = window.column_offset,
        count_to_render = visible_window.count_to_render,
        total_lines = window.lines.len()
    );

    let viewport_cols = window.viewport_cols();
    for (row, line) in window
        .lines
        .iter()
        .skip(window.line_offset)
        .take(visible_window.count_to_render)
        .enumerate()
    {
        paint_line(surface, line, row, window.column_offset, viewport_cols)?;
    }

    paint_prompt_row(window, surface)?;
    surface.present()
}

/// Paint `line` on `row`, skipping its first `column_offset` display columns.
///
/// - A wide glyph that straddles `column_offset` shows its visible half as a blank in
///   its own style.
/// - A glyph that doesn't entirely fit in `viewport_cols` ends the row.
///
/// # Errors
///
/// Returns the first error reported by the surface.
pub fn paint_line(
    surface: &mut dyn TerminalSurface,
    line: &StyledLine,
    row: usize,
    column_offset: usize,
    viewport_cols: usize,
) -> io::Result<()> {
    let mut line_col = 0;
    for (ch, style) in line.styled_chars() {
        let width = char_display_width(ch);
        if width == 0 {
            continue;
        }

        let start = line_col;
        line_col += width;

        // Scrolled off to the left.
        if line_col <= column_offset {
            continue;
        }

        // Straddles the left edge.
        if start < column_offset {
            for screen_col in 0..(line_col - column_offset).min(viewport_cols) {
                surface.set_cell(screen_col, row, ' ', style)?;
            }
            continue;
        }

        let screen_col = start - column_offset;
        if screen_col + width > viewport_cols {
            break;
        }
        surface.set_cell(screen_col, row, ch, style)?;
    }
    Ok(())
}

/// Paint the prompt glyph, one blank, and then the input, and move the cursor to the
/// end of the input. Nothing is presented.
///
/// # Errors
///
/// Returns the first error reported by the surface.
pub fn paint_prompt_row(window: &Window, surface: &mut dyn TerminalSurface) -> io::Result<()> {
    let row = window.max_row;
    for col in 0..window.viewport_cols() {
        surface.set_cell(col, row, ' ', StyleAttr::default())?;
    }
    surface.set_cell(0, row, window.prompt, window.prompt_style)?;

    let mut col = window.input_start();
    for ch in &window.input {
        surface.set_cell(col, row, *ch, StyleAttr::default())?;
        col += char_display_width(*ch);
    }

    surface.show_cursor(window.input_cursor_col(), row)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{BasicColor, ConsoleConfig, OffscreenSurface, TermSize, line_segments};

    fn plain(text: &str) -> StyledLine { StyledLine::from_plain_text(text) }

    #[test]
    fn test_redraw_paints_pane_and_prompt() {
        let surface = OffscreenSurface::new(TermSize::new(4, 10));
        let mut window = Window::new(&ConsoleConfig::default(), TermSize::new(4, 10));
        for text in ["one", "two", "three", "four"] {
            window.lines.push_back(plain(text));
        }
        window.try_push_input('h');

        redraw(&mut window, &mut surface.clone()).unwrap();

        assert_eq!(surface.row_text(0), "one");
        assert_eq!(surface.row_text(1), "two");
        assert_eq!(surface.row_text(2), "three");
        assert_eq!(surface.row_text(3), "> h");
        assert_eq!(surface.cursor(), Some((3, 3)));
        assert_eq!(surface.present_count(), 1);
    }

    #[test]
    fn test_styles_and_clipping() {
        let mut surface = OffscreenSurface::new(TermSize::new(2, 4));
        let red = StyleAttr::default().fg(BasicColor::Red);
        let line = StyledLine::try_new(line_segments!["ab", red, "cdef"]).unwrap();

        paint_line(&mut surface, &line, 0, 0, 4).unwrap();
        assert_eq!(surface.row_text(0), "abcd");
        assert_eq!(surface.cell(0, 0).unwrap().style, StyleAttr::default());
        assert_eq!(surface.cell(2, 0).unwrap().style, red);
    }

    #[test]
    fn test_column_offset_skips_display_columns() {
        let mut surface = OffscreenSurface::new(TermSize::new(2, 4));
        paint_line(&mut surface, &plain("abcdef"), 0, 2, 4).unwrap();
        assert_eq!(surface.row_text(0), "cdef");
    }

    #[test]
    fn test_wide_glyph_straddling_column_offset_is_blank() {
        let mut surface = OffscreenSurface::new(TermSize::new(2, 6));
        let bold = StyleAttr::default().bold(true);
        let line = StyledLine::try_new(line_segments![bold, "中a"]).unwrap();

        paint_line(&mut surface, &line, 0, 1, 6).unwrap();
        let blank = surface.cell(0, 0).unwrap();
        assert_eq!(blank.ch, ' ');
        assert_eq!(blank.style, bold);
        assert_eq!(surface.cell(1, 0).unwrap().ch, 'a');
    }

    #[test]
    fn test_wide_glyph_that_does_not_fit_ends_the_row() {
        let mut surface = OffscreenSurface::new(TermSize::new(2, 4));
        paint_line(&mut surface, &plain("abc中d"), 0, 0, 4).unwrap();
        assert_eq!(surface.row_text(0), "abc");
    }

    #[test]
    fn test_prompt_style_is_used_for_prompt_glyph_only() {
        let mut surface = OffscreenSurface::new(TermSize::new(2, 8));
        let green = StyleAttr::default().fg(BasicColor::Green);
        let config = ConsoleConfig::default()
            .with_prompt('$')
            .with_prompt_style(green);
        let mut window = Window::new(&config, TermSize::new(2, 8));
        window.try_push_input('x');

        paint_prompt_row(&window, &mut surface).unwrap();
        assert_eq!(surface.row_text(1), "$ x");
        assert_eq!(surface.cell(0, 1).unwrap().style, green);
        assert_eq!(surface.cell(2, 1).unwrap().style, StyleAttr::default());
    }
}
