// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::time::Duration;

use crossterm::event::EventStream;
use futures_util::{FutureExt, StreamExt};

use crate::{CrosstermEventResult, PinnedInputStream, gen_input_stream,
            gen_input_stream_with_delay};

/// The source of keyboard and resize events. See [`Self::new_mock()`] for testing.
pub struct InputDevice {
    pub resource: PinnedInputStream<CrosstermEventResult>,
}

impl std::fmt::Debug for InputDevice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputDevice").finish_non_exhaustive()
    }
}

impl InputDevice {
    #[must_use]
    pub fn new_event_stream() -> InputDevice {
        InputDevice {
            resource: Box::pin(EventStream::new()),
        }
    }

    #[must_use]
    pub fn new_mock(generator_vec: Vec<CrosstermEventResult>) -> InputDevice {
        InputDevice {
            resource: gen_input_stream(generator_vec),
        }
    }

    #[must_use]
    pub fn new_mock_with_delay(
        generator_vec: Vec<CrosstermEventResult>,
        delay: Duration,
    ) -> InputDevice {
        InputDevice {
            resource: gen_input_stream_with_delay(generator_vec, delay),
        }
    }
}

impl InputDevice {
    /// Returns [None] once the underlying stream has ended.
    pub async fn next(&mut self) -> Option<CrosstermEventResult> {
        self.resource.next().fuse().await
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

    use super::*;

    #[tokio::test]
    async fn test_mock_input_device_yields_events_then_ends() {
        let mut input_device = InputDevice::new_mock(vec![
            Ok(Event::Key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE))),
            Ok(Event::Resize(80, 24)),
        ]);

        assert!(matches!(input_device.next().await, Some(Ok(Event::Key(_)))));
        assert!(matches!(
            input_device.next().await,
            Some(Ok(Event::Resize(80, 24)))
        ));
        assert!(input_device.next().await.is_none());
    }
}
