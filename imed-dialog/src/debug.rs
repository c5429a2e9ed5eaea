//! Logging and assertion shim.
//!
//! Messages go through the `log` facade with the caller's location attached.
//! Errors additionally pop a blocking error dialog in every build profile,
//! and fatal errors terminate the process afterwards.
//!
//! ```rust,ignore
//! use imed_dialog::{imed_assert, imed_log, DebugMessageType};
//!
//! imed_log!(DebugMessageType::Info, "loaded {} icons", count);
//! imed_assert!(tokens.len() == 4, "expected 4 elements in {literal}");
//! ```

use std::fmt;

use crate::backend::{self, DialogBackend};
use crate::message_box::{self, MessageBoxButtons, MessageBoxType};

/// Severity of a shim message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DebugMessageType {
    Info,
    Warning,
    Error,
    FatalError,
}

impl DebugMessageType {
    pub fn level(self) -> log::Level {
        match self {
            Self::Info => log::Level::Info,
            Self::Warning => log::Level::Warn,
            Self::Error | Self::FatalError => log::Level::Error,
        }
    }

    /// Release builds only record errors.
    pub fn is_recorded(self) -> bool {
        cfg!(debug_assertions) || self >= Self::Error
    }

    pub fn shows_dialog(self) -> bool {
        matches!(self, Self::Error | Self::FatalError)
    }
}

impl fmt::Display for DebugMessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Info => "Info",
            Self::Warning => "Warning",
            Self::Error => "Error",
            Self::FatalError => "Fatal",
        };
        f.pad(name)
    }
}

/// Where a message was raised. Build it with [`debug_info!`](crate::debug_info).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebugInfo {
    pub file: &'static str,
    pub line: u32,
    pub module: &'static str,
}

impl fmt::Display for DebugInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} {}", self.file, self.line, self.module)
    }
}

/// Record a message and, for fatal errors, exit with status 1.
pub fn log_message(message: &str, kind: DebugMessageType, info: DebugInfo) {
    report(&*backend::current(), message, kind, info);
    if kind == DebugMessageType::FatalError {
        log::logger().flush();
        std::process::exit(1);
    }
}

/// Log the message and show the error dialog if the severity calls for one.
/// Returns whether a dialog was shown.
pub(crate) fn report(
    backend: &dyn DialogBackend,
    message: &str,
    kind: DebugMessageType,
    info: DebugInfo,
) -> bool {
    if !kind.is_recorded() {
        return false;
    }

    let level = kind.level();
    if level <= log::max_level() {
        log::logger().log(
            &log::Record::builder()
                .args(format_args!("[{kind}] {info} - {message}"))
                .level(level)
                .target(info.module)
                .module_path_static(Some(info.module))
                .file_static(Some(info.file))
                .line(Some(info.line))
                .build(),
        );
    }

    if !kind.shows_dialog() {
        return false;
    }
    message_box::show_with(
        backend,
        "Error!",
        &format!("[{kind}] {info} - {message}"),
        MessageBoxType::Error,
        MessageBoxButtons::Ok,
    );
    true
}

/// Capture the current source location as a [`DebugInfo`].
#[macro_export]
macro_rules! debug_info {
    () => {
        $crate::debug::DebugInfo {
            file: file!(),
            line: line!(),
            module: module_path!(),
        }
    };
}

/// Log a formatted message at the given [`DebugMessageType`].
#[macro_export]
macro_rules! imed_log {
    ($kind:expr, $($arg:tt)+) => {
        $crate::debug::log_message(&format!($($arg)+), $kind, $crate::debug_info!())
    };
}

/// Log an error (and show the error dialog in debug builds) when `cond` is
/// false.
#[macro_export]
macro_rules! imed_assert {
    ($cond:expr, $($arg:tt)+) => {
        if !$cond {
            $crate::imed_log!(
                $crate::debug::DebugMessageType::Error,
                "Assertion failed \"{}\": {}",
                stringify!($cond),
                format_args!($($arg)+)
            );
        }
    };
}

/// Like [`imed_assert!`] but terminates the process on failure.
#[macro_export]
macro_rules! imed_assert_fatal {
    ($cond:expr, $($arg:tt)+) => {
        if !$cond {
            $crate::imed_log!(
                $crate::debug::DebugMessageType::FatalError,
                "Assertion failed \"{}\": {}",
                stringify!($cond),
                format_args!($($arg)+)
            );
        }
    };
}
