//! Dialog backends.
//!
//! A backend turns an abstract [`MessageRequest`] or [`FileRequest`] into a
//! concrete dialog and maps the answer back. The process-wide backend is
//! swapped with [`set_backend`]; until then the compile-time default is used.

use std::path::PathBuf;
use std::sync::{Arc, PoisonError, RwLock};

use crate::file_dialog::FileRequest;
use crate::message_box::{MessageBoxResult, MessageRequest};

/// Something that can present blocking dialogs.
pub trait DialogBackend: Send + Sync {
    /// Show a message box and wait for the user's answer.
    ///
    /// Returns [`MessageBoxResult::Invalid`] if the dialog could not be shown
    /// or was dismissed without one of the requested buttons.
    fn message(&self, request: &MessageRequest<'_>) -> MessageBoxResult;

    /// Show a file or directory picker. An empty list means cancelled or
    /// failed.
    fn pick(&self, request: &FileRequest<'_>) -> Vec<PathBuf>;
}

/// Backend for environments without a display.
///
/// Requests are logged and answered as if the user dismissed them.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadlessBackend;

impl DialogBackend for HeadlessBackend {
    fn message(&self, request: &MessageRequest<'_>) -> MessageBoxResult {
        log::info!(
            "headless message box [{:?}] {}: {}",
            request.kind,
            request.title,
            request.message
        );
        MessageBoxResult::Invalid
    }

    fn pick(&self, request: &FileRequest<'_>) -> Vec<PathBuf> {
        log::info!("headless {:?} dialog: {}", request.kind, request.title);
        Vec::new()
    }
}

static BACKEND: RwLock<Option<Arc<dyn DialogBackend>>> = RwLock::new(None);

/// Install the backend used by the free dialog functions.
pub fn set_backend(backend: Arc<dyn DialogBackend>) {
    *BACKEND.write().unwrap_or_else(PoisonError::into_inner) = Some(backend);
}

/// Drop any installed backend and fall back to the default one.
pub fn reset_backend() {
    *BACKEND.write().unwrap_or_else(PoisonError::into_inner) = None;
}

/// The installed backend, or the default for this build.
pub fn current() -> Arc<dyn DialogBackend> {
    let installed = BACKEND
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone();
    installed.unwrap_or_else(default_backend)
}

#[cfg(feature = "native")]
fn default_backend() -> Arc<dyn DialogBackend> {
    Arc::new(crate::native::NativeBackend)
}

#[cfg(not(feature = "native"))]
fn default_backend() -> Arc<dyn DialogBackend> {
    Arc::new(HeadlessBackend)
}
