// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Test doubles for the terminal. They are public so that integration tests (and
//! applications built on top of this crate) can drive a [`crate::Console`] without a
//! real terminal.

// Attach sources.
pub mod input_stream_mock;
pub mod offscreen_surface;
pub mod stdout_mock;

// Re-export.
pub use input_stream_mock::*;
pub use offscreen_surface::*;
pub use stdout_mock::*;
