// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing::subscriber::DefaultGuard;
use tracing_core::LevelFilter;

use crate::TracingConfig;

/// Global default subscriber, which once set, can't be unset or changed. This is great
/// for apps.
///
/// Logging is **DISABLED** by **default**. Nothing is installed if the level filter is
/// [`LevelFilter::OFF`].
///
/// ```no_run
/// use r3bl_console::{TracingConfig, try_initialize_logging_global};
/// use tracing_core::LevelFilter;
///
/// try_initialize_logging_global(TracingConfig::new_file(
///     Some("console_demo.log".to_string()),
///     LevelFilter::DEBUG,
/// ))
/// .unwrap();
/// ```
///
/// # Errors
///
/// Returns an error if the log file can't be created, or a global subscriber is
/// already set.
pub fn try_initialize_logging_global(options: impl Into<TracingConfig>) -> miette::Result<()> {
    let it: TracingConfig = options.into();

    // Early return if the level filter is off.
    if matches!(it.get_level_filter(), LevelFilter::OFF) {
        return Ok(());
    }

    it.install_global()
}

/// Thread local subscriber, which is active until the returned guard is dropped. This
/// is great for tests.
///
/// Returns [None] if the level filter is [`LevelFilter::OFF`].
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_initialize_logging_thread_local(
    options: impl Into<TracingConfig>,
) -> miette::Result<Option<DefaultGuard>> {
    let it: TracingConfig = options.into();

    // Early return if the level filter is off.
    if matches!(it.get_level_filter(), LevelFilter::OFF) {
        return Ok(None);
    }

    it.install_thread_local().map(Some)
}
