// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod config;
pub mod console;
pub mod error;

// Re-export.
pub use config::*;
pub use console::*;
pub use error::*;
