// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// The 16 colors that every terminal supports.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, strum_macros::Display)]
pub enum BasicColor {
    Black,
    DarkGray,
    Red,
    DarkRed,
    Green,
    DarkGreen,
    Yellow,
    DarkYellow,
    Blue,
    DarkBlue,
    Magenta,
    DarkMagenta,
    Cyan,
    DarkCyan,
    White,
    Gray,
}

/// Foreground or background color of a cell.
///
/// [`ConsoleColor::Reset`] means "whatever the terminal's default is", and it is what a
/// [`crate::StyleAttr::default()`] uses for both the foreground and the background.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum ConsoleColor {
    #[default]
    Reset,
    Basic(BasicColor),
    /// An index into the 256 color ANSI palette.
    Ansi(u8),
    Rgb { r: u8, g: u8, b: u8 },
}

impl From<BasicColor> for ConsoleColor {
    fn from(value: BasicColor) -> Self { ConsoleColor::Basic(value) }
}

impl From<(u8, u8, u8)> for ConsoleColor {
    fn from((r, g, b): (u8, u8, u8)) -> Self { ConsoleColor::Rgb { r, g, b } }
}

impl From<ConsoleColor> for crossterm::style::Color {
    fn from(value: ConsoleColor) -> Self {
        match value {
            ConsoleColor::Reset => crossterm::style::Color::Reset,
            ConsoleColor::Basic(basic_color) => basic_color.into(),
            ConsoleColor::Ansi(number) => crossterm::style::Color::AnsiValue(number),
            ConsoleColor::Rgb { r, g, b } => crossterm::style::Color::Rgb { r, g, b },
        }
    }
}

impl From<BasicColor> for crossterm::style::Color {
    #[rustfmt::skip]
    fn from(value: BasicColor) -> Self {
        match value {
            BasicColor::Black       => crossterm::style::Color::Black,
            BasicColor::DarkGray    => crossterm::style::Color::DarkGrey,
            BasicColor::Red         => crossterm::style::Color::Red,
            BasicColor::DarkRed     => crossterm::style::Color::DarkRed,
            BasicColor::Green       => crossterm::style::Color::Green,
            BasicColor::DarkGreen   => crossterm::style::Color::DarkGreen,
            BasicColor::Yellow      => crossterm::style::Color::Yellow,
            BasicColor::DarkYellow  => crossterm::style::Color::DarkYellow,
            BasicColor::Blue        => crossterm::style::Color::Blue,
            BasicColor::DarkBlue    => crossterm::style::Color::DarkBlue,
            BasicColor::Magenta     => crossterm::style::Color::Magenta,
            BasicColor::DarkMagenta => crossterm::style::Color::DarkMagenta,
            BasicColor::Cyan        => crossterm::style::Color::Cyan,
            BasicColor::DarkCyan    => crossterm::style::Color::DarkCyan,
            BasicColor::White       => crossterm::style::Color::White,
            BasicColor::Gray        => crossterm::style::Color::Grey,
        }
    }
}
