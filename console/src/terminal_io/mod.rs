// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod crossterm_surface;
pub mod input_device;
pub mod output_device;
pub mod term;
pub mod terminal_surface;

// Re-export.
pub use crossterm_surface::*;
pub use input_device::*;
pub use output_device::*;
pub use term::*;
pub use terminal_surface::*;
