// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::sync::Arc;

use crate::{SafeRawTerminal, SendRawTerminal, StdMutex, StdoutMock};

pub type LockedOutputDevice<'a> = &'a mut dyn std::io::Write;

/// Macro to simplify locking and getting a mutable reference to the output device.
/// Don't call this again in the same scope, it will deadlock! A safe approach is to use
/// this macro in a separate block scope.
///
/// ```
/// use r3bl_console::{LockedOutputDevice, OutputDevice, lock_output_device_as_mut};
///
/// let (device, stdout_mock) = OutputDevice::new_mock();
/// {
///     let mut_ref: LockedOutputDevice<'_> = lock_output_device_as_mut!(device);
///     let _ = mut_ref.write_all(b"Hello, world!");
/// } // The lock is released here.
/// assert_eq!(stdout_mock.get_copy_of_buffer_as_string(), "Hello, world!");
/// ```
#[macro_export]
macro_rules! lock_output_device_as_mut {
    ($device:expr) => {
        &mut *$device.lock()
    };
}

/// The device that [`crate::CrosstermSurface`] writes escape sequences to. It is safe to
/// clone, all the clones share the same underlying writer.
#[derive(Clone)]
pub struct OutputDevice {
    pub resource: SafeRawTerminal,
    pub is_mock: bool,
}

impl std::fmt::Debug for OutputDevice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutputDevice")
            .field("is_mock", &self.is_mock)
            .finish_non_exhaustive()
    }
}

impl Default for OutputDevice {
    fn default() -> Self { Self::new_stdout() }
}

impl OutputDevice {
    #[must_use]
    pub fn new_stdout() -> Self {
        Self {
            resource: Arc::new(StdMutex::new(std::io::stdout())),
            is_mock: false,
        }
    }

    /// Output device that records everything written to it in the returned
    /// [`StdoutMock`].
    #[must_use]
    pub fn new_mock() -> (Self, StdoutMock) {
        let stdout_mock = StdoutMock::default();
        let device = Self {
            resource: Arc::new(StdMutex::new(stdout_mock.clone())),
            is_mock: true,
        };
        (device, stdout_mock)
    }

    /// # Panics
    ///
    /// This will panic if the lock is poisoned, which can happen if a thread
    /// panics while holding the lock.
    pub fn lock(&self) -> std::sync::MutexGuard<'_, SendRawTerminal> {
        self.resource.lock().unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stdout_output_device_is_not_mock() {
        let device = OutputDevice::new_stdout();
        assert!(!device.is_mock);
    }

    #[test]
    fn test_mock_output_device_shares_buffer() {
        let (device, stdout_mock) = OutputDevice::new_mock();
        let clone = device.clone();
        {
            let mut_ref: LockedOutputDevice<'_> = lock_output_device_as_mut!(clone);
            mut_ref.write_all(b"abc").unwrap();
        }
        assert!(device.is_mock);
        assert_eq!(stdout_mock.get_copy_of_buffer_as_string(), "abc");
    }
}
