use std::path::PathBuf;

use rfd::{FileDialog, MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};

use crate::backend::DialogBackend;
use crate::file_dialog::{FileDialogType, FileRequest};
use crate::message_box::{MessageBoxButtons, MessageBoxResult, MessageBoxType, MessageRequest};

/// OS dialogs through `rfd`: shell dialogs on Windows, AppKit on macOS and
/// GTK or the desktop portal elsewhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeBackend;

impl DialogBackend for NativeBackend {
    fn message(&self, request: &MessageRequest<'_>) -> MessageBoxResult {
        let answer = MessageDialog::new()
            .set_title(request.title)
            .set_description(request.message)
            .set_level(level(request.kind))
            .set_buttons(buttons(request.buttons))
            .show();
        result(answer)
    }

    fn pick(&self, request: &FileRequest<'_>) -> Vec<PathBuf> {
        let mut dialog = FileDialog::new().set_title(request.title);
        for filter in request.filters {
            let extensions = filter.extensions();
            // rfd lists every file when no filter is set
            if extensions.is_empty() {
                continue;
            }
            dialog = dialog.add_filter(filter.label(), extensions.as_slice());
        }

        match (request.kind, request.allow_multiple) {
            (FileDialogType::OpenFile, false) => dialog.pick_file().into_iter().collect(),
            (FileDialogType::OpenFile, true) => dialog.pick_files().unwrap_or_default(),
            (FileDialogType::SaveFile, _) => dialog.save_file().into_iter().collect(),
            (FileDialogType::Directory, false) => dialog.pick_folder().into_iter().collect(),
            (FileDialogType::Directory, true) => dialog.pick_folders().unwrap_or_default(),
        }
    }
}

fn level(kind: MessageBoxType) -> MessageLevel {
    match kind {
        // no dedicated question icon
        MessageBoxType::Info | MessageBoxType::Question => MessageLevel::Info,
        MessageBoxType::Warning => MessageLevel::Warning,
        MessageBoxType::Error => MessageLevel::Error,
    }
}

fn buttons(buttons: MessageBoxButtons) -> MessageButtons {
    match buttons {
        MessageBoxButtons::Ok => MessageButtons::Ok,
        MessageBoxButtons::OkCancel => MessageButtons::OkCancel,
        MessageBoxButtons::YesNo => MessageButtons::YesNo,
        MessageBoxButtons::YesNoCancel => MessageButtons::YesNoCancel,
    }
}

fn result(answer: MessageDialogResult) -> MessageBoxResult {
    match answer {
        MessageDialogResult::Ok => MessageBoxResult::Ok,
        MessageDialogResult::Cancel => MessageBoxResult::Cancel,
        MessageDialogResult::Yes => MessageBoxResult::Yes,
        MessageDialogResult::No => MessageBoxResult::No,
        MessageDialogResult::Custom(label) => match label.as_str() {
            "Ok" | "OK" => MessageBoxResult::Ok,
            "Cancel" => MessageBoxResult::Cancel,
            "Yes" => MessageBoxResult::Yes,
            "No" => MessageBoxResult::No,
            _ => MessageBoxResult::Invalid,
        },
    }
}
