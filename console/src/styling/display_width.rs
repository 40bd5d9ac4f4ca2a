// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use unicode_width::UnicodeWidthChar;

/// Number of terminal cells that `ch` occupies: 0, 1 or 2. Control characters have no
/// width.
#[must_use]
pub fn char_display_width(ch: char) -> usize { UnicodeWidthChar::width(ch).unwrap_or(0) }

/// Sum of the display widths of each code point in `text`. Code points are measured
/// one at a time, not by grapheme cluster.
#[must_use]
pub fn str_display_width(text: &str) -> usize { text.chars().map(char_display_width).sum() }

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case('a', 1)]
    #[test_case('中', 2)]
    #[test_case('😃', 2)]
    #[test_case('\u{200B}', 0)]
    #[test_case('\u{0301}', 0)]
    #[test_case('\x1b', 0)]
    fn test_char_display_width(ch: char, expected: usize) {
        assert_eq!(char_display_width(ch), expected);
    }

    #[test]
    fn test_str_display_width() {
        assert_eq!(str_display_width("ab中c"), 5);
        assert_eq!(str_display_width(""), 0);
    }
}
