// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::time::Duration;

use async_stream::stream;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

use crate::{CrosstermEventResult, PinnedInputStream};

/// The main constructors are:
/// - [`crate::InputDevice::new_mock()`]
/// - [`crate::InputDevice::new_mock_with_delay()`]
pub fn gen_input_stream<T>(generator_vec: Vec<T>) -> PinnedInputStream<T>
where
    T: Send + Sync + 'static,
{
    let it = stream! {
        for item in generator_vec {
            yield item;
        }
    };
    Box::pin(it)
}

pub fn gen_input_stream_with_delay<T>(
    generator_vec: Vec<T>,
    delay: Duration,
) -> PinnedInputStream<T>
where
    T: Send + Sync + 'static,
{
    let it = stream! {
        for item in generator_vec {
            tokio::time::sleep(delay).await;
            yield item;
        }
    };
    Box::pin(it)
}

/// Key presses that type out `text`, one event per code point.
#[must_use]
pub fn gen_typed_text(text: &str) -> Vec<CrosstermEventResult> {
    text.chars()
        .map(|ch| gen_key(KeyCode::Char(ch), KeyModifiers::NONE))
        .collect()
}

#[must_use]
pub fn gen_key(code: KeyCode, modifiers: KeyModifiers) -> CrosstermEventResult {
    Ok(Event::Key(KeyEvent::new(code, modifiers)))
}

#[cfg(test)]
mod tests {
    use futures_util::StreamExt;

    use super::*;

    #[tokio::test]
    async fn test_gen_input_stream() {
        let mut input_stream = gen_input_stream(vec![1, 2, 3]);
        for _ in 1..=3 {
            input_stream.next().await;
        }
        pretty_assertions::assert_eq!(input_stream.next().await, None);
    }

    #[tokio::test]
    async fn test_gen_input_stream_with_delay() {
        const DELAY: u64 = 50;

        let start_time = std::time::Instant::now();
        let mut input_stream =
            gen_input_stream_with_delay(vec![1, 2, 3], Duration::from_millis(DELAY));
        for _ in 1..=3 {
            input_stream.next().await;
        }
        let elapsed = start_time.elapsed();

        pretty_assertions::assert_eq!(input_stream.next().await, None);
        assert!(elapsed >= Duration::from_millis(DELAY * 3));
    }

    #[test]
    fn test_gen_typed_text() {
        let events = gen_typed_text("hi");
        assert_eq!(events.len(), 2);
        assert!(matches!(
            &events[1],
            Ok(Event::Key(KeyEvent { code: KeyCode::Char('i'), .. }))
        ));
    }
}
