// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::IsTerminal;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum TTYResult {
    IsInteractive,
    IsNotInteractive,
}

/// Returns [`TTYResult::IsInteractive`] only if both stdin and stdout are TTYs, and the
/// process isn't running in a CI environment. The console needs both, since it reads
/// keystrokes from stdin and paints on stdout.
///
/// If you run `cargo run | grep foo` or `echo foo | cargo run` this returns
/// [`TTYResult::IsNotInteractive`].
#[must_use]
pub fn is_fully_interactive_terminal() -> TTYResult {
    let is_tty = std::io::stdin().is_terminal() && std::io::stdout().is_terminal();
    if is_tty && !is_ci::cached() {
        TTYResult::IsInteractive
    } else {
        TTYResult::IsNotInteractive
    }
}
