// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod delivery;
pub mod event_handlers;
pub mod reactor;
pub mod render;
pub mod viewport;
pub mod window_state;

// Re-export.
pub use delivery::*;
pub use reactor::*;
pub use render::*;
pub use viewport::*;
pub use window_state::*;
