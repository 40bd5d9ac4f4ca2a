// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::Diagnostic;

/// Errors returned by the [`crate::Console`] API.
///
/// Predictable conditions like popping a line off an empty buffer, or scrolling past the
/// top, are not errors. They are no-ops.
#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum ConsoleError {
    /// A styled line was rejected before it was queued.
    #[error("Invalid arguments: {reason}")]
    #[diagnostic(
        code(r3bl_console::invalid_arguments),
        help("Text segments can't contain control characters or line breaks")
    )]
    InvalidArguments { reason: String },

    /// The console was stopped, so the event could not be queued.
    #[error("The console has been stopped")]
    #[diagnostic(
        code(r3bl_console::stopped),
        help("Create a new console, a stopped one can't be restarted")
    )]
    Stopped,

    /// The terminal could not be acquired, written to, or released.
    #[error(transparent)]
    #[diagnostic(code(r3bl_console::terminal))]
    Terminal(#[from] std::io::Error),

    /// The reactor exited before it replied to a request.
    #[error("The console exited before it replied")]
    #[diagnostic(code(r3bl_console::reply_dropped))]
    ReplyDropped,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_converts_to_terminal() {
        let error: ConsoleError = std::io::Error::other("boom").into();
        assert!(matches!(error, ConsoleError::Terminal(_)));
        assert_eq!(error.to_string(), "boom");
    }

    #[test]
    fn test_diagnostic_codes() {
        let error = ConsoleError::Stopped;
        let code = error.code().map(|it| it.to_string());
        assert_eq!(code.as_deref(), Some("r3bl_console::stopped"));
        assert!(error.help().is_some());
    }
}
