// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod console_event;
pub mod event_queue;
pub mod key_press;
pub mod notification;

// Re-export.
pub use console_event::*;
pub use event_queue::*;
pub use key_press::*;
pub use notification::*;
