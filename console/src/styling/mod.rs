// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod console_color;
pub mod display_width;
pub mod style_attr;
pub mod styled_line;

// Re-export.
pub use console_color::*;
pub use display_width::*;
pub use style_attr::*;
pub use styled_line::*;
