//! Blocking message boxes.
//!
//! ```rust,ignore
//! use imed_dialog::message_box::{self, MessageBoxResult};
//!
//! if message_box::question("Quit", "Discard unsaved changes?") == MessageBoxResult::Yes {
//!     std::process::exit(0);
//! }
//! ```

use crate::backend::{self, DialogBackend};

/// Icon and severity of a message box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageBoxType {
    Info,
    Warning,
    Error,
    Question,
}

/// Button set offered to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MessageBoxButtons {
    #[default]
    Ok,
    OkCancel,
    YesNo,
    YesNoCancel,
}

/// The button the user pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MessageBoxResult {
    /// The dialog failed or was closed without a button.
    #[default]
    Invalid,
    Ok,
    Cancel,
    Yes,
    No,
}

impl MessageBoxButtons {
    /// Whether `result` is one of the answers this button set can produce.
    pub fn offers(self, result: MessageBoxResult) -> bool {
        use MessageBoxResult as R;
        match self {
            Self::Ok => result == R::Ok,
            Self::OkCancel => matches!(result, R::Ok | R::Cancel),
            Self::YesNo => matches!(result, R::Yes | R::No),
            Self::YesNoCancel => matches!(result, R::Yes | R::No | R::Cancel),
        }
    }
}

/// Everything a backend needs to present one message box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageRequest<'a> {
    pub title: &'a str,
    pub message: &'a str,
    pub kind: MessageBoxType,
    pub buttons: MessageBoxButtons,
}

/// Show a message box through the installed backend.
pub fn show(
    title: &str,
    message: &str,
    kind: MessageBoxType,
    buttons: MessageBoxButtons,
) -> MessageBoxResult {
    show_with(&*backend::current(), title, message, kind, buttons)
}

/// Show a message box through a specific backend.
///
/// Answers the button set could not have produced are reported as
/// [`MessageBoxResult::Invalid`].
pub fn show_with(
    backend: &dyn DialogBackend,
    title: &str,
    message: &str,
    kind: MessageBoxType,
    buttons: MessageBoxButtons,
) -> MessageBoxResult {
    let request = MessageRequest {
        title,
        message,
        kind,
        buttons,
    };
    let result = backend.message(&request);
    if result != MessageBoxResult::Invalid && !buttons.offers(result) {
        log::warn!("dialog answered {result:?}, which {buttons:?} does not offer");
        return MessageBoxResult::Invalid;
    }
    result
}

pub fn info(title: &str, message: &str) -> MessageBoxResult {
    info_with_buttons(title, message, MessageBoxButtons::Ok)
}

pub fn info_with_buttons(
    title: &str,
    message: &str,
    buttons: MessageBoxButtons,
) -> MessageBoxResult {
    show(title, message, MessageBoxType::Info, buttons)
}

pub fn warning(title: &str, message: &str) -> MessageBoxResult {
    warning_with_buttons(title, message, MessageBoxButtons::Ok)
}

/// Warning with a custom button set, e.g. `OkCancel` before a destructive
/// action.
pub fn warning_with_buttons(
    title: &str,
    message: &str,
    buttons: MessageBoxButtons,
) -> MessageBoxResult {
    show(title, message, MessageBoxType::Warning, buttons)
}

pub fn error(title: &str, message: &str) -> MessageBoxResult {
    error_with_buttons(title, message, MessageBoxButtons::Ok)
}

pub fn error_with_buttons(
    title: &str,
    message: &str,
    buttons: MessageBoxButtons,
) -> MessageBoxResult {
    show(title, message, MessageBoxType::Error, buttons)
}

/// Yes/No question.
pub fn question(title: &str, message: &str) -> MessageBoxResult {
    question_with_buttons(title, message, MessageBoxButtons::YesNo)
}

pub fn question_with_buttons(
    title: &str,
    message: &str,
    buttons: MessageBoxButtons,
) -> MessageBoxResult {
    show(title, message, MessageBoxType::Question, buttons)
}
