//! Blocking file and directory pickers.

use std::path::PathBuf;

use crate::backend::{self, DialogBackend};

/// What the picker selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileDialogType {
    OpenFile,
    SaveFile,
    Directory,
}

/// A named group of glob patterns, e.g. `Images` / `*.png;*.jpg`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileFilter {
    pub name: String,
    /// `;`-separated globs.
    pub pattern: String,
}

impl FileFilter {
    pub fn new(name: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pattern: pattern.into(),
        }
    }

    /// Extensions named by the pattern, without the leading `*.`.
    ///
    /// Wildcard entries (`*`, `*.*`) and blanks are skipped, so a pattern
    /// that accepts every file yields an empty list.
    pub fn extensions(&self) -> Vec<String> {
        self.pattern
            .split(';')
            .map(str::trim)
            .filter_map(|glob| {
                let ext = glob
                    .strip_prefix("*.")
                    .or_else(|| glob.strip_prefix('.'))
                    .unwrap_or(glob);
                (!ext.is_empty() && !ext.contains('*')).then(|| ext.to_string())
            })
            .collect()
    }

    /// Whether the filter accepts every file.
    pub fn matches_all(&self) -> bool {
        self.extensions().is_empty()
    }

    /// Label shown in the picker's filter list, `Name (pattern)`.
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.pattern)
    }
}

/// Everything a backend needs to present one picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileRequest<'a> {
    pub title: &'a str,
    pub kind: FileDialogType,
    pub allow_multiple: bool,
    pub filters: &'a [FileFilter],
}

/// Show a picker through the installed backend.
///
/// Returns the chosen paths; empty when cancelled or when the dialog failed.
pub fn show(
    title: &str,
    kind: FileDialogType,
    allow_multiple: bool,
    filters: &[FileFilter],
) -> Vec<PathBuf> {
    show_with(&*backend::current(), title, kind, allow_multiple, filters)
}

/// Show a picker through a specific backend.
///
/// Save dialogs and single-selection pickers never return more than one path.
pub fn show_with(
    backend: &dyn DialogBackend,
    title: &str,
    kind: FileDialogType,
    allow_multiple: bool,
    filters: &[FileFilter],
) -> Vec<PathBuf> {
    let request = FileRequest {
        title,
        kind,
        allow_multiple,
        filters,
    };
    let mut paths = backend.pick(&request);
    if kind == FileDialogType::SaveFile || !allow_multiple {
        paths.truncate(1);
    }
    log::debug!("{kind:?} dialog {title:?} returned {} path(s)", paths.len());
    paths
}

pub fn open_file(title: &str, filters: &[FileFilter]) -> Option<PathBuf> {
    show(title, FileDialogType::OpenFile, false, filters)
        .into_iter()
        .next()
}

pub fn save_file(title: &str, filters: &[FileFilter]) -> Option<PathBuf> {
    show(title, FileDialogType::SaveFile, false, filters)
        .into_iter()
        .next()
}

pub fn pick_directory(title: &str) -> Option<PathBuf> {
    show(title, FileDialogType::Directory, false, &[])
        .into_iter()
        .next()
}
