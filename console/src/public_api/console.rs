// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tokio::{spawn, sync::oneshot};

use crate::{ConsoleConfig, ConsoleError, ConsoleEvent, ConsoleReceivers, CrosstermSurface,
            EventSender, InputDevice, LineSegment, OutputDevice, Reactor, StyleAttr,
            StyledLine, TTYResult, TermSize, TerminalSurface, Window, create_event_queue,
            is_fully_interactive_terminal, redraw, spawn_delivery_tasks,
            spawn_input_pump};

/// A handle to a running console. Clone it to use the console from as many tasks as you
/// like. Every method only queues an event for the reactor, and returns as soon as
/// there is room in the queue.
///
/// Once [`Console::stop`] completes, every other method returns
/// [`ConsoleError::Stopped`].
#[derive(Debug, Clone)]
pub struct Console {
    event_sender: EventSender,
}

impl Console {
    /// Paint the initial screen and spawn the reactor, the input pump and the delivery
    /// tasks on the current `tokio` runtime.
    ///
    /// # Panics
    ///
    /// This will panic if called outside of a `tokio` runtime.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Terminal`] if the size of the surface can't be read, or
    /// if the initial paint fails. In both cases the surface is released.
    pub fn try_new(
        config: ConsoleConfig,
        surface: impl TerminalSurface + 'static,
        /* move */ input_device: InputDevice,
    ) -> Result<(Self, ConsoleReceivers), ConsoleError> {
        let mut surface: Box<dyn TerminalSurface> = Box::new(surface);

        let size = match surface.size() {
            Ok(size) => size,
            Err(error) => {
                // We don't care about the result of this operation.
                surface.release().ok();
                return Err(error.into());
            }
        };

        let mut window = Window::new(&config, size);
        if let Err(error) = redraw(&mut window, surface.as_mut()) {
            // We don't care about the result of this operation.
            surface.release().ok();
            return Err(error.into());
        }

        let (event_sender, event_receiver, is_stopped) =
            create_event_queue(config.channel_capacity);
        let (outbound, receivers) = spawn_delivery_tasks(config.channel_capacity);
        let input_pump = spawn_input_pump(input_device, &event_sender);

        let reactor = Reactor::new(window, surface, outbound, is_stopped);
        spawn(reactor.run(event_receiver, Some(input_pump)));

        tracing::debug!(message = "console started", ?size);

        Ok((Self { event_sender }, receivers))
    }

    /// Take over the real terminal. Returns [None] if stdin or stdout is not
    /// interactive, eg: when the output is piped.
    ///
    /// # Panics
    ///
    /// This will panic if called outside of a `tokio` runtime.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Terminal`] if the terminal can't be acquired.
    pub fn try_new_with_terminal(
        config: ConsoleConfig,
    ) -> Result<Option<(Self, ConsoleReceivers)>, ConsoleError> {
        if let TTYResult::IsNotInteractive = is_fully_interactive_terminal() {
            return Ok(None);
        }
        let surface = CrosstermSurface::try_acquire(OutputDevice::new_stdout())?;
        Self::try_new(config, surface, InputDevice::new_event_stream()).map(Some)
    }

    #[must_use]
    pub fn is_stopped(&self) -> bool { self.event_sender.is_stopped() }

    async fn post(&self, event: ConsoleEvent) -> Result<(), ConsoleError> {
        self.event_sender.post(event).await
    }

    /// Append an unstyled line. Anything after the first line break in `text` is
    /// dropped.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Stopped`] if the console has been stopped.
    pub async fn send_line_back(&self, text: &str) -> Result<(), ConsoleError> {
        self.post(ConsoleEvent::SendBack(StyledLine::from_plain_text(text)))
            .await
    }

    /// Prepend an unstyled line. Anything after the first line break in `text` is
    /// dropped.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Stopped`] if the console has been stopped.
    pub async fn send_line_front(&self, text: &str) -> Result<(), ConsoleError> {
        self.post(ConsoleEvent::SendFront(StyledLine::from_plain_text(text)))
            .await
    }

    /// Append a styled line, see [`crate::line_segments!`].
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::InvalidArguments`] if a text segment contains a control
    /// character. Nothing is queued in that case.
    pub async fn send_styled_line_back(
        &self,
        segments: Vec<LineSegment>,
    ) -> Result<(), ConsoleError> {
        let line = StyledLine::try_new(segments)?;
        self.post(ConsoleEvent::SendBack(line)).await
    }

    /// Prepend a styled line, see [`Self::send_styled_line_back`].
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Stopped`] if the console has been stopped.
    pub async fn send_styled_line_front(
        &self,
        segments: Vec<LineSegment>,
    ) -> Result<(), ConsoleError> {
        let line = StyledLine::try_new(segments)?;
        self.post(ConsoleEvent::SendFront(line)).await
    }

    /// Same as [`Self::send_line_back`], for plain OS threads (outside of the `tokio`
    /// runtime).
    ///
    /// # Panics
    ///
    /// This will panic if called from within an async execution context.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Stopped`] if the console has been stopped.
    pub fn blocking_send_line_back(&self, text: &str) -> Result<(), ConsoleError> {
        self.event_sender
            .blocking_post(ConsoleEvent::SendBack(StyledLine::from_plain_text(text)))
    }

    /// Same as [`Self::send_styled_line_back`], for plain OS threads.
    ///
    /// # Panics
    ///
    /// This will panic if called from within an async execution context.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Stopped`] if the console has been stopped.
    pub fn blocking_send_styled_line_back(
        &self,
        segments: Vec<LineSegment>,
    ) -> Result<(), ConsoleError> {
        let line = StyledLine::try_new(segments)?;
        self.event_sender.blocking_post(ConsoleEvent::SendBack(line))
    }

    /// # Errors
    ///
    /// Returns [`ConsoleError::Stopped`] if the console has been stopped.
    pub async fn pop_front_line(&self) -> Result<(), ConsoleError> {
        self.post(ConsoleEvent::PopFront).await
    }

    /// # Errors
    ///
    /// Returns [`ConsoleError::Stopped`] if the console has been stopped.
    pub async fn pop_back_line(&self) -> Result<(), ConsoleError> {
        self.post(ConsoleEvent::PopBack).await
    }

    /// Discard every line and reset both scroll offsets.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Stopped`] if the console has been stopped.
    pub async fn clear(&self) -> Result<(), ConsoleError> {
        self.post(ConsoleEvent::Clear).await
    }

    // Scrolling. All of these turn trace mode off, except `goto_left`.

    /// # Errors
    ///
    /// Returns [`ConsoleError::Stopped`] if the console has been stopped.
    pub async fn goto_top(&self) -> Result<(), ConsoleError> {
        self.post(ConsoleEvent::GotoTop).await
    }

    /// # Errors
    ///
    /// Returns [`ConsoleError::Stopped`] if the console has been stopped.
    pub async fn goto_bottom(&self) -> Result<(), ConsoleError> {
        self.post(ConsoleEvent::GotoBottom).await
    }

    /// Scroll so that the one based `line_number` is on the top row, as far as that is
    /// possible.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Stopped`] if the console has been stopped.
    pub async fn goto_line(&self, line_number: isize) -> Result<(), ConsoleError> {
        self.post(ConsoleEvent::GotoLine(line_number)).await
    }

    /// # Errors
    ///
    /// Returns [`ConsoleError::Stopped`] if the console has been stopped.
    pub async fn goto_next_line(&self) -> Result<(), ConsoleError> {
        self.post(ConsoleEvent::GotoNext).await
    }

    /// # Errors
    ///
    /// Returns [`ConsoleError::Stopped`] if the console has been stopped.
    pub async fn goto_previous_line(&self) -> Result<(), ConsoleError> {
        self.post(ConsoleEvent::GotoPrevious).await
    }

    /// Undo any horizontal scrolling.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Stopped`] if the console has been stopped.
    pub async fn goto_left(&self) -> Result<(), ConsoleError> {
        self.post(ConsoleEvent::GotoLeft).await
    }

    // Modes.

    /// # Errors
    ///
    /// Returns [`ConsoleError::Stopped`] if the console has been stopped.
    pub async fn set_trace(&self, value: bool) -> Result<(), ConsoleError> {
        self.post(ConsoleEvent::SetTrace(value)).await
    }

    /// Blocking or unblocking discards whatever was being typed.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Stopped`] if the console has been stopped.
    pub async fn set_block_input(&self, value: bool) -> Result<(), ConsoleError> {
        self.post(ConsoleEvent::SetBlockInput(value)).await
    }

    /// # Errors
    ///
    /// Returns [`ConsoleError::Stopped`] if the console has been stopped.
    pub async fn set_block_input_after_enter(&self, value: bool) -> Result<(), ConsoleError> {
        self.post(ConsoleEvent::SetBlockInputAfterEnter(value))
            .await
    }

    /// Only the given fields are changed.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Stopped`] if the console has been stopped.
    pub async fn set_prompt(
        &self,
        prompt: Option<char>,
        style: Option<StyleAttr>,
    ) -> Result<(), ConsoleError> {
        self.post(ConsoleEvent::SetPrompt { prompt, style }).await
    }

    /// The size of the whole terminal, including the prompt row, as last seen by the
    /// reactor.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Stopped`] or [`ConsoleError::ReplyDropped`] if the
    /// console stopped before it could reply.
    pub async fn get_window_size(&self) -> Result<TermSize, ConsoleError> {
        let (reply, reply_receiver) = oneshot::channel();
        self.post(ConsoleEvent::QueryWindowSize { reply }).await?;
        reply_receiver.await.map_err(|_| ConsoleError::ReplyDropped)
    }

    /// Release the terminal and stop the reactor. Events that are still queued are
    /// dropped.
    ///
    /// Calling this on a console that is already stopped (or stopping) returns
    /// `Ok(())` right away.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Terminal`] if the terminal could not be released.
    pub async fn stop(&self) -> Result<(), ConsoleError> {
        if self.is_stopped() {
            return Ok(());
        }

        let (reply, reply_receiver) = oneshot::channel();
        if self.post(ConsoleEvent::Stop { reply }).await.is_err() {
            return Ok(());
        }

        // Another stop won the race, and the reactor exited without replying to this one.
        reply_receiver.await.unwrap_or(Ok(()))
    }
}
