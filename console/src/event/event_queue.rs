// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::sync::{Arc,
                atomic::{AtomicBool, Ordering}};

use tokio::{spawn,
            sync::mpsc::{self, Receiver, Sender},
            task::JoinHandle};

use crate::{ChannelCapacity, ConsoleError, ConsoleEvent, InputDevice};

/// The producer side of the reactor's event queue. It is cheap to clone, and every
/// clone feeds the same queue, so events posted from different tasks are totally
/// ordered by the time they were accepted.
///
/// The `is_stopped` latch is set by the reactor before it replies to
/// [`ConsoleEvent::Stop`] (or as soon as it exits for any other reason). Once set,
/// every post fails fast with [`ConsoleError::Stopped`] instead of being silently
/// queued.
#[derive(Debug, Clone)]
pub struct EventSender {
    sender: Sender<ConsoleEvent>,
    is_stopped: Arc<AtomicBool>,
}

/// Create the bounded event queue, and the latch that the reactor uses to report that
/// it has stopped.
#[must_use]
pub fn create_event_queue(
    channel_capacity: ChannelCapacity,
) -> (EventSender, Receiver<ConsoleEvent>, Arc<AtomicBool>) {
    let (sender, receiver) = mpsc::channel(channel_capacity.capacity());
    let is_stopped = Arc::new(AtomicBool::new(false));
    let event_sender = EventSender {
        sender,
        is_stopped: is_stopped.clone(),
    };
    (event_sender, receiver, is_stopped)
}

impl EventSender {
    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.is_stopped.load(Ordering::Acquire) || self.sender.is_closed()
    }

    /// Waits only for room in the queue (backpressure), never for the event to be
    /// processed.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Stopped`] if the reactor has stopped.
    pub async fn post(&self, event: ConsoleEvent) -> Result<(), ConsoleError> {
        if self.is_stopped() {
            return Err(ConsoleError::Stopped);
        }
        self.sender
            .send(event)
            .await
            .map_err(|_| ConsoleError::Stopped)
    }

    /// Same as [`Self::post`], for callers on plain OS threads.
    ///
    /// # Panics
    ///
    /// This will panic if called from within an async execution context, see
    /// [`tokio::sync::mpsc::Sender::blocking_send`].
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Stopped`] if the reactor has stopped.
    pub fn blocking_post(&self, event: ConsoleEvent) -> Result<(), ConsoleError> {
        if self.is_stopped() {
            return Err(ConsoleError::Stopped);
        }
        self.sender
            .blocking_send(event)
            .map_err(|_| ConsoleError::Stopped)
    }
}

/// Spawn the task that reads `crossterm` events from `input_device` and posts the
/// ones the console handles into the same queue the [`crate::Console`] handles use.
///
/// The task only holds a weak reference to the queue, so it doesn't keep the reactor
/// alive once every [`crate::Console`] handle is dropped. It exits when the input
/// stream ends, when it fails, or when the queue is closed.
#[must_use]
pub fn spawn_input_pump(
    /* move */ mut input_device: InputDevice,
    event_sender: &EventSender,
) -> JoinHandle<()> {
    let weak_sender = event_sender.sender.downgrade();
    spawn(async move {
        loop {
            let event = match input_device.next().await {
                Some(Ok(event)) => event,
                Some(Err(error)) => {
                    tracing::error!(message = "input stream failed", ?error);
                    break;
                }
                None => {
                    tracing::debug!(message = "input stream ended");
                    break;
                }
            };

            let Some(console_event) = ConsoleEvent::try_from_crossterm(event) else {
                continue;
            };

            let Some(sender) = weak_sender.upgrade() else {
                break;
            };
            if sender.send(console_event).await.is_err() {
                break;
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use crossterm::event::{Event, KeyCode, KeyModifiers};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{KeyPress, TermSize, gen_key};

    #[tokio::test]
    async fn test_post_fails_after_stop_latch_is_set() {
        let (event_sender, mut receiver, is_stopped) =
            create_event_queue(ChannelCapacity::Minimal);

        event_sender.post(ConsoleEvent::Clear).await.unwrap();
        assert!(matches!(receiver.recv().await, Some(ConsoleEvent::Clear)));

        is_stopped.store(true, Ordering::Release);
        assert!(matches!(
            event_sender.post(ConsoleEvent::Clear).await,
            Err(ConsoleError::Stopped)
        ));
    }

    #[tokio::test]
    async fn test_post_fails_after_receiver_is_dropped() {
        let (event_sender, receiver, _) = create_event_queue(ChannelCapacity::Minimal);
        drop(receiver);
        assert!(event_sender.is_stopped());
        assert!(matches!(
            event_sender.post(ConsoleEvent::GotoTop).await,
            Err(ConsoleError::Stopped)
        ));
    }

    #[tokio::test]
    async fn test_input_pump_filters_and_forwards_in_order() {
        let (event_sender, mut receiver, _) = create_event_queue(ChannelCapacity::Minimal);
        let input_device = InputDevice::new_mock(vec![
            gen_key(KeyCode::Char('a'), KeyModifiers::NONE),
            Ok(Event::FocusLost),
            Ok(Event::Resize(40, 10)),
            gen_key(KeyCode::Enter, KeyModifiers::NONE),
        ]);

        spawn_input_pump(input_device, &event_sender).await.unwrap();

        let mut names = vec![];
        while let Ok(event) = receiver.try_recv() {
            match event {
                ConsoleEvent::KeyPress(KeyPress::Char('a')) => names.push("a"),
                ConsoleEvent::Resize(TermSize { rows: 10, cols: 40 }) => {
                    names.push("resize");
                }
                ConsoleEvent::KeyPress(KeyPress::Enter) => names.push("enter"),
                other => panic!("unexpected event {other:?}"),
            }
        }
        assert_eq!(names, vec!["a", "resize", "enter"]);
    }

    #[tokio::test]
    async fn test_input_pump_does_not_keep_queue_open() {
        let (event_sender, mut receiver, _) = create_event_queue(ChannelCapacity::Minimal);
        let input_device = InputDevice::new_mock_with_delay(
            vec![gen_key(KeyCode::Char('a'), KeyModifiers::NONE)],
            std::time::Duration::from_millis(100),
        );
        let pump = spawn_input_pump(input_device, &event_sender);

        drop(event_sender);
        assert!(receiver.recv().await.is_none());
        pump.abort();
    }
}
