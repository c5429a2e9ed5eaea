use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use imed_dialog::file_dialog::{self, FileDialogType, FileFilter, FileRequest};
use imed_dialog::message_box::{
    self, MessageBoxButtons, MessageBoxResult, MessageBoxType, MessageRequest,
};
use imed_dialog::{set_backend, DialogBackend, HeadlessBackend};

/// Answers every message box with a fixed result and every picker with a
/// fixed list, remembering what it was asked.
struct Scripted {
    answer: MessageBoxResult,
    paths: Vec<PathBuf>,
    seen: Mutex<Vec<String>>,
}

impl Scripted {
    fn new(answer: MessageBoxResult, paths: &[&str]) -> Self {
        Self {
            answer,
            paths: paths.iter().map(PathBuf::from).collect(),
            seen: Mutex::new(Vec::new()),
        }
    }

    fn seen(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

impl DialogBackend for Scripted {
    fn message(&self, request: &MessageRequest<'_>) -> MessageBoxResult {
        self.seen.lock().unwrap().push(format!(
            "{:?}/{:?}: {} - {}",
            request.kind, request.buttons, request.title, request.message
        ));
        self.answer
    }

    fn pick(&self, request: &FileRequest<'_>) -> Vec<PathBuf> {
        let filters: Vec<String> = request.filters.iter().map(FileFilter::label).collect();
        self.seen.lock().unwrap().push(format!(
            "{:?} multiple={} [{}]: {}",
            request.kind,
            request.allow_multiple,
            filters.join(", "),
            request.title
        ));
        self.paths.clone()
    }
}

// ============================================================================
// Message boxes
// ============================================================================

#[test]
fn test_message_box_forwards_request() {
    let backend = Scripted::new(MessageBoxResult::Yes, &[]);
    let result = message_box::show_with(
        &backend,
        "Quit",
        "Discard changes?",
        MessageBoxType::Question,
        MessageBoxButtons::YesNoCancel,
    );
    assert_eq!(result, MessageBoxResult::Yes);
    assert_eq!(backend.seen(), vec!["Question/YesNoCancel: Quit - Discard changes?"]);
}

#[test]
fn test_answer_outside_button_set_is_invalid() {
    let backend = Scripted::new(MessageBoxResult::Yes, &[]);
    let result = message_box::show_with(
        &backend,
        "Note",
        "Saved",
        MessageBoxType::Info,
        MessageBoxButtons::OkCancel,
    );
    assert_eq!(result, MessageBoxResult::Invalid);
}

#[test]
fn test_button_sets() {
    use MessageBoxResult as R;
    assert!(MessageBoxButtons::Ok.offers(R::Ok));
    assert!(!MessageBoxButtons::Ok.offers(R::Cancel));
    assert!(MessageBoxButtons::YesNoCancel.offers(R::Cancel));
    assert!(!MessageBoxButtons::YesNo.offers(R::Ok));
    assert!(!MessageBoxButtons::OkCancel.offers(R::Invalid));
}

#[test]
fn test_headless_backend_answers_invalid() {
    let result = message_box::show_with(
        &HeadlessBackend,
        "Error!",
        "something broke",
        MessageBoxType::Error,
        MessageBoxButtons::Ok,
    );
    assert_eq!(result, MessageBoxResult::Invalid);
}

// ============================================================================
// File pickers
// ============================================================================

#[test]
fn test_picker_forwards_filters() {
    let backend = Scripted::new(MessageBoxResult::Invalid, &["/tmp/a.png"]);
    let filters = [
        FileFilter::new("Images", "*.png;*.jpg"),
        FileFilter::new("All files", "*.*"),
    ];
    let paths =
        file_dialog::show_with(&backend, "Open", FileDialogType::OpenFile, false, &filters);
    assert_eq!(paths, vec![PathBuf::from("/tmp/a.png")]);
    assert_eq!(
        backend.seen(),
        vec!["OpenFile multiple=false [Images (*.png;*.jpg), All files (*.*)]: Open"]
    );
}

#[test]
fn test_multiple_selection_keeps_every_path() {
    let backend = Scripted::new(MessageBoxResult::Invalid, &["/a", "/b", "/c"]);
    let paths = file_dialog::show_with(&backend, "Pick", FileDialogType::Directory, true, &[]);
    assert_eq!(paths.len(), 3);
}

#[test]
fn test_single_selection_and_save_return_one_path() {
    let backend = Scripted::new(MessageBoxResult::Invalid, &["/a", "/b"]);
    let single = file_dialog::show_with(&backend, "Open", FileDialogType::OpenFile, false, &[]);
    assert_eq!(single, vec![PathBuf::from("/a")]);

    let save = file_dialog::show_with(&backend, "Save", FileDialogType::SaveFile, true, &[]);
    assert_eq!(save, vec![PathBuf::from("/a")]);
}

#[test]
fn test_headless_picker_is_empty() {
    let paths =
        file_dialog::show_with(&HeadlessBackend, "Open", FileDialogType::OpenFile, true, &[]);
    assert!(paths.is_empty());
}

// ============================================================================
// Installed backend
// ============================================================================

#[test]
fn test_free_functions_use_installed_backend() {
    let backend = Arc::new(Scripted::new(MessageBoxResult::Ok, &["/picked"]));
    set_backend(backend.clone());

    assert_eq!(message_box::error("Error!", "disk full"), MessageBoxResult::Ok);
    assert_eq!(
        file_dialog::open_file("Open", &[]),
        Some(PathBuf::from("/picked"))
    );
    assert_eq!(message_box::question("Sure?", "Really"), MessageBoxResult::Invalid);
    assert_eq!(
        message_box::warning_with_buttons("Delete", "Remove 3 files?", MessageBoxButtons::OkCancel),
        MessageBoxResult::Ok
    );
    assert_eq!(
        message_box::question_with_buttons("Quit", "Save first?", MessageBoxButtons::YesNoCancel),
        MessageBoxResult::Invalid
    );
    assert_eq!(
        message_box::info_with_buttons("Done", "Open folder?", MessageBoxButtons::OkCancel),
        MessageBoxResult::Ok
    );

    let seen = backend.seen();
    assert_eq!(seen[0], "Error/Ok: Error! - disk full");
    assert_eq!(seen[1], "OpenFile multiple=false []: Open");
    assert_eq!(seen[2], "Question/YesNo: Sure? - Really");
    assert_eq!(seen[3], "Warning/OkCancel: Delete - Remove 3 files?");
    assert_eq!(seen[4], "Question/YesNoCancel: Quit - Save first?");
    assert_eq!(seen[5], "Info/OkCancel: Done - Open folder?");
}
