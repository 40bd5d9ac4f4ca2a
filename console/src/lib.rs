// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_console
//!
//! An async terminal console widget. The screen is split into two parts:
//!
//! 1. A scrollable output pane that shows [`StyledLine`]s, which occupies every row of
//!    the terminal except the last one.
//! 2. A one line command prompt on the last row, where the user types commands.
//!
//! The host program streams output into the pane while it concurrently receives the
//! commands the user submits. It does not matter which task or thread the host uses to
//! do this.
//!
//! # Mental model
//!
//! All the mutable presentation state (the line buffer, the scroll and trace position,
//! the input editor, the prompt) lives in a single reactor task. Nothing else can touch
//! it. Keyboard and resize events that come from the terminal, and control events that
//! come from any number of [`Console`] handles, are funneled into one ordered, bounded
//! [`tokio::sync::mpsc`] queue. The reactor dequeues one [`ConsoleEvent`] at a time,
//! mutates its state and redraws the [`TerminalSurface`].
//!
//! ```text
//! ┌──────────────┐   ┌─────────────┐
//! │ InputDevice  │   │  Console    │ (clone it, use it from anywhere)
//! │ (crossterm)  │   │  handles    │
//! └──────┬───────┘   └──────┬──────┘
//!        │ input pump task  │ post()
//!        ▼                  ▼
//!     ┌────────────────────────┐
//!     │ bounded event queue    │
//!     └───────────┬────────────┘
//!                 ▼
//!     ┌────────────────────────┐      ┌──────────────────┐
//!     │ reactor task (Window)  ├─────►│ TerminalSurface  │
//!     └─────┬────────────┬─────┘      └──────────────────┘
//!           ▼            ▼
//!    command delivery  notification delivery
//!    task              task
//!           ▼            ▼
//!    mpsc::Receiver    mpsc::Receiver
//!    <String>          <Notification>
//! ```
//!
//! Commands (the text of each submitted line) and [`Notification`]s (scroll boundary
//! hits, control key chords, resizes) are delivered to the consumer by dedicated
//! delivery tasks, so a slow consumer never stalls the reactor, and the order in which
//! the reactor produced them is preserved.
//!
//! # Usage
//!
//! ```no_run
//! use r3bl_console::{Console, ConsoleConfig};
//!
//! # async fn demo() -> miette::Result<()> {
//! let Some((console, mut receivers)) =
//!     Console::try_new_with_terminal(ConsoleConfig::default())?
//! else {
//!     return Ok(()); // Not an interactive terminal.
//! };
//!
//! console.send_line_back("hello").await?;
//! while let Some(command) = receivers.commands.recv().await {
//!     if command == "exit" {
//!         break;
//!     }
//!     console.send_line_back(&command).await?;
//! }
//! console.stop().await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Testing
//!
//! Both the terminal surface and the input stream are injected. The
//! [`test_fixtures`] module provides an [`OffscreenSurface`] (an in memory cell grid)
//! and [`gen_input_stream`] (a mock `crossterm` event stream), so the whole widget can
//! be driven end to end without a real terminal.

// Enforce strict error handling in production library code only. Tests and examples are
// allowed to use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules.
pub mod console_impl;
pub mod event;
pub mod log;
pub mod public_api;
pub mod styling;
pub mod terminal_io;
pub mod test_fixtures;

// Re-export.
pub use console_impl::*;
pub use event::*;
pub use log::*;
pub use public_api::*;
pub use styling::*;
pub use terminal_io::*;
pub use test_fixtures::*;

// Type aliases.
use std::pin::Pin;

use futures_core::Stream;

pub type StdMutex<T> = std::sync::Mutex<T>;

pub type SendRawTerminal = dyn std::io::Write + Send;
pub type SafeRawTerminal = std::sync::Arc<StdMutex<SendRawTerminal>>;

pub type PinnedInputStream<T> = Pin<Box<dyn Stream<Item = T> + Send>>;
pub type CrosstermEventResult = Result<crossterm::event::Event, std::io::Error>;
