// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::sync::{Arc,
                atomic::{AtomicBool, Ordering}};

use tokio::{sync::mpsc::Receiver, task::JoinHandle};

use crate::{ConsoleError, ConsoleEvent, Outbound, TerminalSurface, Window};

/// Internal control flow for [`Reactor::apply`]. This is used primarily to make testing
/// easier.
#[derive(Debug, PartialEq, Clone)]
pub enum ControlFlowExtended<T, E> {
    ReturnOk(T),
    ReturnError(E),
    Continue,
}

/// Owns the [`Window`] and the [`TerminalSurface`], and applies one [`ConsoleEvent`] at
/// a time to them. The state transitions themselves live in
/// [`crate::console_impl::event_handlers`].
#[derive(Debug)]
pub struct Reactor {
    pub window: Window,
    pub surface: Box<dyn TerminalSurface>,
    pub outbound: Outbound,
    /// Shared with every [`crate::EventSender`].
    pub is_stopped: Arc<AtomicBool>,
}

impl Reactor {
    #[must_use]
    pub fn new(
        window: Window,
        surface: Box<dyn TerminalSurface>,
        outbound: Outbound,
        is_stopped: Arc<AtomicBool>,
    ) -> Self {
        Self {
            window,
            surface,
            outbound,
            is_stopped,
        }
    }

    /// Returns only the following:
    /// - [`ControlFlowExtended::Continue`] for every event, except:
    /// - [`ControlFlowExtended::ReturnOk`] once [`ConsoleEvent::Stop`] has been handled.
    /// - [`ControlFlowExtended::ReturnError`] if painting on the surface failed.
    pub fn apply(&mut self, event: ConsoleEvent) -> ControlFlowExtended<(), ConsoleError> {
        tracing::debug!(message = "apply", event = event.name());

        let result = match event {
            ConsoleEvent::Stop { reply } => {
                let release_result = self.stop();
                // We don't care about the result of this operation.
                reply.send(release_result).ok();
                return ControlFlowExtended::ReturnOk(());
            }
            ConsoleEvent::QueryWindowSize { reply } => {
                // We don't care about the result of this operation.
                reply.send(self.window.window_size()).ok();
                Ok(())
            }
            ConsoleEvent::KeyPress(key_press) => self.on_key_press(key_press),
            ConsoleEvent::Resize(size) => self.on_resize(size),
            ConsoleEvent::Clear => self.on_clear(),
            ConsoleEvent::PopFront => self.on_pop_front(),
            ConsoleEvent::PopBack => self.on_pop_back(),
            ConsoleEvent::SendFront(line) => self.on_send_front(line),
            ConsoleEvent::SendBack(line) => self.on_send_back(line),
            ConsoleEvent::GotoTop => self.on_goto_top(),
            ConsoleEvent::GotoBottom => self.on_goto_bottom(),
            ConsoleEvent::GotoLine(line_number) => self.on_goto_line(line_number),
            ConsoleEvent::GotoNext => self.on_goto_next(),
            ConsoleEvent::GotoPrevious => self.on_goto_previous(),
            ConsoleEvent::GotoLeft => self.on_goto_left(),
            ConsoleEvent::SetTrace(value) => self.on_set_trace(value),
            ConsoleEvent::SetBlockInput(value) => self.on_set_block_input(value),
            ConsoleEvent::SetBlockInputAfterEnter(value) => {
                self.window.block_input_after_enter = value;
                Ok(())
            }
            ConsoleEvent::SetPrompt { prompt, style } => self.on_set_prompt(prompt, style),
        };

        match result {
            Ok(()) => ControlFlowExtended::Continue,
            Err(error) => ControlFlowExtended::ReturnError(error.into()),
        }
    }

    /// Enter the final state: set the latch, so that new posts fail fast, and release
    /// the terminal. Safe to call more than once.
    pub fn stop(&mut self) -> Result<(), ConsoleError> {
        let was_stopped = self.window.stopped;
        self.window.stopped = true;
        self.is_stopped.store(true, Ordering::Release);
        if was_stopped {
            return Ok(());
        }
        self.surface.release()?;
        tracing::debug!(message = "reactor stopped");
        Ok(())
    }

    /// The event loop. It runs until [`ConsoleEvent::Stop`] is handled, the surface
    /// fails, or every sender of the queue is dropped. In each case the terminal is
    /// released and the `input_pump` task is aborted before this returns.
    pub async fn run(
        mut self,
        mut receiver: Receiver<ConsoleEvent>,
        input_pump: Option<JoinHandle<()>>,
    ) {
        loop {
            let Some(event) = receiver.recv().await else {
                tracing::debug!(message = "every console handle was dropped");
                self.stop_and_log_failure();
                break;
            };

            match self.apply(event) {
                ControlFlowExtended::Continue => {}
                ControlFlowExtended::ReturnOk(()) => break,
                ControlFlowExtended::ReturnError(error) => {
                    tracing::error!(message = "surface failed, stopping", ?error);
                    self.stop_and_log_failure();
                    break;
                }
            }
        }

        // Any event still in the queue is dropped here, along with its reply sender.
        receiver.close();

        if let Some(input_pump) = input_pump {
            input_pump.abort();
        }
    }

    fn stop_and_log_failure(&mut self) {
        if let Err(error) = self.stop() {
            tracing::error!(message = "failed to release the terminal", ?error);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::sync::{mpsc, oneshot};

    use super::*;
    use crate::{ChannelCapacity, ConsoleConfig, OffscreenSurface, StyledLine, TermSize,
                create_event_queue, spawn_delivery_tasks};

    fn create_reactor(size: TermSize) -> (Reactor, OffscreenSurface) {
        let surface = OffscreenSurface::new(size);
        let (outbound, _) = spawn_delivery_tasks(ChannelCapacity::Minimal);
        let reactor = Reactor::new(
            Window::new(&ConsoleConfig::default(), size),
            Box::new(surface.clone()),
            outbound,
            Arc::new(AtomicBool::new(false)),
        );
        (reactor, surface)
    }

    #[tokio::test]
    async fn test_stop_releases_once_and_replies() {
        let (mut reactor, surface) = create_reactor(TermSize::new(4, 10));

        let (reply, reply_receiver) = oneshot::channel();
        let control_flow = reactor.apply(ConsoleEvent::Stop { reply });
        assert!(matches!(control_flow, ControlFlowExtended::ReturnOk(())));
        assert!(reply_receiver.await.unwrap().is_ok());
        assert!(reactor.is_stopped.load(Ordering::Acquire));

        reactor.stop().unwrap();
        assert_eq!(surface.release_count(), 1);
    }

    #[tokio::test]
    async fn test_surface_failure_is_reported() {
        let (mut reactor, surface) = create_reactor(TermSize::new(4, 10));
        surface.set_fail_writes(true);
        let control_flow =
            reactor.apply(ConsoleEvent::SendBack(StyledLine::from_plain_text("x")));
        assert!(matches!(
            control_flow,
            ControlFlowExtended::ReturnError(ConsoleError::Terminal(_))
        ));
    }

    #[tokio::test]
    async fn test_query_window_size() {
        let (mut reactor, _) = create_reactor(TermSize::new(4, 10));
        let (reply, reply_receiver) = oneshot::channel();
        reactor.apply(ConsoleEvent::QueryWindowSize { reply });
        assert_eq!(reply_receiver.await.unwrap(), TermSize::new(4, 10));
    }

    #[tokio::test]
    async fn test_run_stops_when_every_sender_is_dropped() {
        let (reactor, surface) = create_reactor(TermSize::new(4, 10));
        let is_stopped = reactor.is_stopped.clone();
        let (sender, receiver) = mpsc::channel(ChannelCapacity::Minimal.capacity());
        let handle = tokio::spawn(reactor.run(receiver, None));

        sender.send(ConsoleEvent::GotoTop).await.unwrap();
        drop(sender);

        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(surface.release_count(), 1);
        assert!(is_stopped.load(Ordering::Acquire));
    }

    #[tokio::test]
    async fn test_run_stops_on_surface_failure_and_posts_fail() {
        let surface = OffscreenSurface::new(TermSize::new(4, 10));
        let (outbound, _) = spawn_delivery_tasks(ChannelCapacity::Minimal);
        let (event_sender, receiver, is_stopped) =
            create_event_queue(ChannelCapacity::Minimal);
        let reactor = Reactor::new(
            Window::new(&ConsoleConfig::default(), TermSize::new(4, 10)),
            Box::new(surface.clone()),
            outbound,
            is_stopped,
        );
        let handle = tokio::spawn(reactor.run(receiver, None));

        surface.set_fail_writes(true);
        event_sender
            .post(ConsoleEvent::SendBack(StyledLine::from_plain_text("x")))
            .await
            .unwrap();

        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(surface.release_count(), 1);
        assert!(matches!(
            event_sender.post(ConsoleEvent::Clear).await,
            Err(ConsoleError::Stopped)
        ));
    }
}
