// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, registry::LookupSpan};

use crate::{DisplayPreference, TracingConfig, WriterConfig,
            log::rolling_file_appender_impl};

/// Avoid gnarly type annotations by using a macro to create the `fmt` layer.
#[macro_export]
macro_rules! create_fmt {
    () => {
        tracing_subscriber::fmt::layer()
            .compact()
            .with_target(false)
            .with_thread_names(true)
            .with_file(false)
            .with_line_number(false)
    };
}

/// Type alias for a boxed layer.
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Returns the layers, or [None] for [`WriterConfig::None`]. This does not install
/// them, see [`TracingConfig::install_global`] and
/// [`TracingConfig::install_thread_local`].
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_create_layers(
    tracing_config: TracingConfig,
) -> miette::Result<Option<Vec<Box<DynLayer<tracing_subscriber::Registry>>>>> {
    if let WriterConfig::None = tracing_config.writer_config {
        return Ok(None);
    }

    let level_filter = tracing_config.get_level_filter();
    let mut return_it: Vec<Box<DynLayer<tracing_subscriber::Registry>>> = vec![];

    // Applies to every layer, including ones added later that have no filter of their
    // own.
    return_it.push(Box::new(level_filter));

    if let Some(layer) =
        try_create_display_layer(level_filter, tracing_config.get_writer_config())
    {
        return_it.push(layer);
    }

    if let Some(layer) =
        try_create_file_layer(level_filter, tracing_config.get_writer_config())?
    {
        return_it.push(layer);
    }

    Ok(Some(return_it))
}

/// This erases the concrete type of the writer, and returns a boxed layer.
#[must_use]
pub fn try_create_display_layer<S>(
    level_filter: LevelFilter,
    writer_config: WriterConfig,
) -> Option<Box<DynLayer<S>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    let fmt_layer = create_fmt!();

    match writer_config {
        WriterConfig::DisplayAndFile(display_pref, _) | WriterConfig::Display(display_pref) => {
            match display_pref {
                DisplayPreference::Stdout => Some(Box::new(
                    fmt_layer
                        .with_writer(std::io::stdout)
                        .with_filter(level_filter),
                )),
                DisplayPreference::Stderr => Some(Box::new(
                    fmt_layer
                        .with_writer(std::io::stderr)
                        .with_filter(level_filter),
                )),
            }
        }
        WriterConfig::None | WriterConfig::File(_) => None,
    }
}

/// This erases the concrete type of the writer, and returns a boxed layer.
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_create_file_layer<S>(
    level_filter: LevelFilter,
    writer_config: WriterConfig,
) -> miette::Result<Option<Box<DynLayer<S>>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    let fmt_layer = create_fmt!().with_ansi(false);

    Ok(match writer_config {
        WriterConfig::DisplayAndFile(_, tracing_log_file_path)
        | WriterConfig::File(tracing_log_file_path) => {
            let file = rolling_file_appender_impl::try_create(&tracing_log_file_path)?;
            Some(Box::new(
                fmt_layer.with_writer(file).with_filter(level_filter),
            ))
        }
        WriterConfig::None | WriterConfig::Display(_) => None,
    })
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;
    use crate::{try_initialize_logging_global, try_initialize_logging_thread_local};

    fn temp_log_file(dir: &tempfile::TempDir) -> String {
        dir.path().join("console.log").to_str().unwrap().to_string()
    }

    #[test]
    fn test_try_create_display_layer() {
        let layer: Option<Box<DynLayer<tracing_subscriber::Registry>>> =
            try_create_display_layer(
                LevelFilter::DEBUG,
                WriterConfig::Display(DisplayPreference::Stderr),
            );
        assert!(layer.is_some());
    }

    #[test]
    fn test_try_create_both_layers() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = temp_log_file(&dir);

        let tracing_config = TracingConfig {
            writer_config: WriterConfig::DisplayAndFile(
                DisplayPreference::Stdout,
                file_path.clone(),
            ),
            level_filter: LevelFilter::DEBUG,
        };

        let layers = try_create_layers(tracing_config).unwrap().unwrap();
        assert_eq!(layers.len(), 3);
        assert!(std::path::Path::new(&file_path).exists());
    }

    #[test]
    fn test_no_layers_for_writer_config_none() {
        let layers = try_create_layers(WriterConfig::None.into()).unwrap();
        assert!(layers.is_none());
    }

    #[test]
    #[serial]
    fn test_thread_local_file_logging() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = temp_log_file(&dir);

        let guard = try_initialize_logging_thread_local(TracingConfig::new_file(
            Some(file_path.clone()),
            LevelFilter::INFO,
        ))
        .unwrap();
        assert!(guard.is_some());

        tracing::info!(message = "logged to file");
        tracing::debug!(message = "filtered out");
        drop(guard);

        let contents = std::fs::read_to_string(&file_path).unwrap();
        assert!(contents.contains("logged to file"));
        assert!(!contents.contains("filtered out"));
    }

    #[test]
    #[serial]
    fn test_level_off_disables_logging() {
        let guard = try_initialize_logging_thread_local(LevelFilter::OFF).unwrap();
        assert!(guard.is_none());
        assert!(try_initialize_logging_global(LevelFilter::OFF).is_ok());
    }
}
