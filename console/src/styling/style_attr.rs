// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crossterm::style::{Attribute, Attributes, ContentStyle};

use crate::ConsoleColor;

/// Style of a run of text in the output pane, or of the prompt glyph.
///
/// It is a small [`Copy`] value, so it is passed around by value. Two values are equal
/// iff all eight fields are equal. The default is the terminal's default colors with no
/// attributes set.
///
/// ```
/// use r3bl_console::{BasicColor, StyleAttr};
///
/// let style = StyleAttr::default().fg(BasicColor::Red).bold(true);
/// assert!(style.bold);
/// assert!(!style.italic);
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct StyleAttr {
    pub fg: ConsoleColor,
    pub bg: ConsoleColor,
    pub bold: bool,
    pub dim: bool,
    pub italic: bool,
    pub underline: bool,
    pub blink: bool,
    pub reverse: bool,
}

impl StyleAttr {
    #[must_use]
    pub fn fg(mut self, color: impl Into<ConsoleColor>) -> Self {
        self.fg = color.into();
        self
    }

    #[must_use]
    pub fn bg(mut self, color: impl Into<ConsoleColor>) -> Self {
        self.bg = color.into();
        self
    }

    #[must_use]
    pub const fn bold(mut self, value: bool) -> Self {
        self.bold = value;
        self
    }

    #[must_use]
    pub const fn dim(mut self, value: bool) -> Self {
        self.dim = value;
        self
    }

    #[must_use]
    pub const fn italic(mut self, value: bool) -> Self {
        self.italic = value;
        self
    }

    #[must_use]
    pub const fn underline(mut self, value: bool) -> Self {
        self.underline = value;
        self
    }

    #[must_use]
    pub const fn blink(mut self, value: bool) -> Self {
        self.blink = value;
        self
    }

    #[must_use]
    pub const fn reverse(mut self, value: bool) -> Self {
        self.reverse = value;
        self
    }
}

impl From<StyleAttr> for ContentStyle {
    fn from(style: StyleAttr) -> Self {
        let mut attributes = Attributes::default();
        for (is_set, attribute) in [
            (style.bold, Attribute::Bold),
            (style.dim, Attribute::Dim),
            (style.italic, Attribute::Italic),
            (style.underline, Attribute::Underlined),
            (style.blink, Attribute::SlowBlink),
            (style.reverse, Attribute::Reverse),
        ] {
            if is_set {
                attributes.set(attribute);
            }
        }

        ContentStyle {
            foreground_color: Some(style.fg.into()),
            background_color: Some(style.bg.into()),
            underline_color: None,
            attributes,
        }
    }
}
