// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

/// The file is never rolled over, so every run of the app appends to the same file.
///
/// # Errors
///
/// Returns an error if the path has no parent directory, or no file name.
pub fn try_create(
    path_str: &str,
) -> miette::Result<tracing_appender::rolling::RollingFileAppender> {
    let path = PathBuf::from(path_str);

    let parent = match path.parent() {
        Some(parent) if parent.as_os_str().is_empty() => std::path::Path::new("."),
        Some(parent) => parent,
        None => {
            return Err(miette::miette!(
                "Can't access the folder of {}. It might not exist.",
                path.display()
            ));
        }
    };

    let file_name = path.file_name().ok_or_else(|| {
        miette::miette!("Can't access the file name of {}.", path.display())
    })?;

    Ok(tracing_appender::rolling::never(parent, file_name))
}
