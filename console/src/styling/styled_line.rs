// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ConsoleError, StyleAttr, char_display_width};

/// One element of a [`StyledLine`]. A [`LineSegment::Style`] applies to every
/// [`LineSegment::Text`] that follows it in the same line, until the next
/// [`LineSegment::Style`] or the end of the line.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum LineSegment {
    Style(StyleAttr),
    Text(String),
}

impl From<StyleAttr> for LineSegment {
    fn from(value: StyleAttr) -> Self { LineSegment::Style(value) }
}

impl From<&str> for LineSegment {
    fn from(value: &str) -> Self { LineSegment::Text(value.to_string()) }
}

impl From<String> for LineSegment {
    fn from(value: String) -> Self { LineSegment::Text(value) }
}

/// Build a `Vec<LineSegment>` out of any mix of [`StyleAttr`] and string values.
///
/// ```
/// use r3bl_console::{BasicColor, LineSegment, StyleAttr, line_segments};
///
/// let red = StyleAttr::default().fg(BasicColor::Red);
/// let segments = line_segments![red, "error: ", StyleAttr::default(), "disk full"];
/// assert_eq!(segments.len(), 4);
/// assert_eq!(segments[1], LineSegment::Text("error: ".into()));
/// ```
#[macro_export]
macro_rules! line_segments {
    ($($segment:expr),* $(,)?) => {
        vec![$($crate::LineSegment::from($segment)),*]
    };
}

/// A single row of the output pane. Text runs never contain control characters (this
/// includes line breaks), since each line occupies exactly one terminal row.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct StyledLine {
    segments: Vec<LineSegment>,
}

impl StyledLine {
    /// # Errors
    ///
    /// Returns [`ConsoleError::InvalidArguments`] if any text segment contains a control
    /// character.
    pub fn try_new(segments: Vec<LineSegment>) -> Result<Self, ConsoleError> {
        for (index, segment) in segments.iter().enumerate() {
            if let LineSegment::Text(text) = segment
                && let Some(bad_char) = text.chars().find(|ch| ch.is_control())
            {
                return Err(ConsoleError::InvalidArguments {
                    reason: format!(
                        "segment {index} contains the control character {bad_char:?}"
                    ),
                });
            }
        }
        Ok(Self { segments })
    }

    /// Unstyled line made from `text`. Everything from the first line break onwards is
    /// dropped, as are any other control characters.
    #[must_use]
    pub fn from_plain_text(text: &str) -> Self {
        let first_line = text.split(['\n', '\r']).next().unwrap_or_default();
        let sanitized: String = first_line.chars().filter(|ch| !ch.is_control()).collect();
        Self {
            segments: vec![LineSegment::Text(sanitized)],
        }
    }

    #[must_use]
    pub fn segments(&self) -> &[LineSegment] { &self.segments }

    /// Every code point of this line, paired with the style that is in effect for it.
    pub fn styled_chars(&self) -> impl Iterator<Item = (char, StyleAttr)> + '_ {
        let mut current_style = StyleAttr::default();
        self.segments
            .iter()
            .filter_map(move |segment| match segment {
                LineSegment::Style(style) => {
                    current_style = *style;
                    None
                }
                LineSegment::Text(text) => {
                    let style = current_style;
                    Some(text.chars().map(move |ch| (ch, style)))
                }
            })
            .flatten()
    }

    #[must_use]
    pub fn display_width(&self) -> usize {
        self.styled_chars()
            .map(|(ch, _)| char_display_width(ch))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::BasicColor;

    #[test]
    fn test_style_applies_until_superseded() {
        let red = StyleAttr::default().fg(BasicColor::Red);
        let blue = StyleAttr::default().fg(BasicColor::Blue);
        let line =
            StyledLine::try_new(line_segments!["a", red, "bc", blue, "d", "e"]).unwrap();

        let styles: Vec<(char, StyleAttr)> = line.styled_chars().collect();
        assert_eq!(
            styles,
            vec![
                ('a', StyleAttr::default()),
                ('b', red),
                ('c', red),
                ('d', blue),
                ('e', blue),
            ]
        );
    }

    #[test]
    fn test_reject_control_characters() {
        let result = StyledLine::try_new(line_segments!["ok", "not\nok"]);
        assert!(matches!(
            result,
            Err(ConsoleError::InvalidArguments { reason }) if reason.contains("segment 1")
        ));

        let result = StyledLine::try_new(line_segments!["\x1b[31m"]);
        assert!(matches!(result, Err(ConsoleError::InvalidArguments { .. })));
    }

    #[test]
    fn test_empty_line_is_valid() {
        let line = StyledLine::try_new(vec![]).unwrap();
        assert_eq!(line.display_width(), 0);
        assert_eq!(line.styled_chars().count(), 0);
    }

    #[test]
    fn test_from_plain_text_truncates_at_line_break() {
        let line = StyledLine::from_plain_text("first\nsecond");
        assert_eq!(line.segments(), &[LineSegment::Text("first".into())]);

        let line = StyledLine::from_plain_text("a\tb\r\n");
        assert_eq!(line.segments(), &[LineSegment::Text("ab".into())]);
    }

    #[test]
    fn test_display_width_counts_wide_chars() {
        let line = StyledLine::try_new(line_segments![
            "ab",
            StyleAttr::default().bold(true),
            "中文"
        ])
        .unwrap();
        assert_eq!(line.display_width(), 6);
    }
}
