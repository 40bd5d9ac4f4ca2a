// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{NotificationMask, StyleAttr};

/// The prompt glyph that is used when none is configured.
pub const DEFAULT_PROMPT: char = '>';

/// Capacity of the bounded channels that the console creates:
/// - The event queue that [`crate::Console`] handles and the input pump post into. When
///   it is full, posting waits until the reactor catches up (backpressure).
/// - The command and notification channels that the consumer reads from.
///
/// The reactor itself never waits on a full consumer channel, see
/// [`crate::console_impl::delivery`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelCapacity {
    /// 16 events - Mostly useful in tests that exercise backpressure.
    Minimal,
    /// 256 events - For hosts that only print an occasional line.
    Moderate,
    /// 1,024 events - Recommended default.
    Large,
    /// 8,192 events - For hosts that stream output in large bursts.
    VeryLarge,
}

impl ChannelCapacity {
    /// Returns the actual channel capacity as a [`usize`].
    #[must_use]
    pub const fn capacity(self) -> usize {
        match self {
            Self::Minimal => 16,
            Self::Moderate => 256,
            Self::Large => 1_024,
            Self::VeryLarge => 8_192,
        }
    }
}

impl Default for ChannelCapacity {
    fn default() -> Self { Self::Large }
}

/// Everything that can be configured when a [`crate::Console`] is created. After that,
/// the same settings can only be changed through the [`crate::Console`] methods.
///
/// The [`Default`] has a `>` prompt, trace mode off, input unblocked, no auto blocking
/// after <kbd>Enter</kbd>, and an empty notification mask (no notifications are
/// delivered).
///
/// ```
/// use r3bl_console::{ConsoleConfig, NotificationMask};
///
/// let config = ConsoleConfig::default()
///     .with_prompt('$')
///     .with_trace_after_run(true)
///     .with_notification_mask(NotificationMask::MOVE_UP | NotificationMask::CTRL_C);
/// assert_eq!(config.prompt, '$');
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    pub prompt: char,
    pub prompt_style: StyleAttr,
    /// Start in trace mode, where the newest output is always visible.
    pub trace_after_run: bool,
    /// Start with input blocked.
    pub block_input_after_run: bool,
    /// Block input after every submitted command, until it is explicitly unblocked.
    pub block_input_after_enter: bool,
    pub notification_mask: NotificationMask,
    pub channel_capacity: ChannelCapacity,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT,
            prompt_style: StyleAttr::default(),
            trace_after_run: false,
            block_input_after_run: false,
            block_input_after_enter: false,
            notification_mask: NotificationMask::empty(),
            channel_capacity: ChannelCapacity::default(),
        }
    }
}

impl ConsoleConfig {
    #[must_use]
    pub fn with_prompt(mut self, prompt: char) -> Self {
        self.prompt = prompt;
        self
    }

    #[must_use]
    pub fn with_prompt_style(mut self, prompt_style: StyleAttr) -> Self {
        self.prompt_style = prompt_style;
        self
    }

    #[must_use]
    pub fn with_trace_after_run(mut self, value: bool) -> Self {
        self.trace_after_run = value;
        self
    }

    #[must_use]
    pub fn with_block_input_after_run(mut self, value: bool) -> Self {
        self.block_input_after_run = value;
        self
    }

    #[must_use]
    pub fn with_block_input_after_enter(mut self, value: bool) -> Self {
        self.block_input_after_enter = value;
        self
    }

    #[must_use]
    pub fn with_notification_mask(mut self, mask: NotificationMask) -> Self {
        self.notification_mask = mask;
        self
    }

    #[must_use]
    pub fn with_channel_capacity(mut self, channel_capacity: ChannelCapacity) -> Self {
        self.channel_capacity = channel_capacity;
        self
    }
}
