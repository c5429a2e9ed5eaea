//! Native message boxes, file pickers and the logging/assert shim.
//!
//! Every dialog call blocks until the user answers. Which implementation
//! answers is decided by the installed [`DialogBackend`]: the `native`
//! feature selects the OS dialogs, otherwise the [`HeadlessBackend`] logs
//! the request and reports nothing chosen.

pub mod backend;
pub mod debug;
pub mod file_dialog;
pub mod logging;
pub mod message_box;
#[cfg(feature = "native")]
mod native;

pub use backend::{set_backend, DialogBackend, HeadlessBackend};
pub use debug::{DebugInfo, DebugMessageType};
pub use file_dialog::{FileDialogType, FileFilter, FileRequest};
pub use logging::{init_logging, LogConfig, LogInitError};
pub use message_box::{MessageBoxButtons, MessageBoxResult, MessageBoxType, MessageRequest};
#[cfg(feature = "native")]
pub use native::NativeBackend;
