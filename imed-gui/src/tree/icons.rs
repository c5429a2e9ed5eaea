use std::fmt;
use std::path::Path;
use std::rc::Rc;

use imed_types::Vec2;
use log::debug;

use crate::frontend::Frontend;
use crate::image::{Image, ImageError};

/// Picks an icon from a file extension. The extension is passed without its
/// leading dot (`"png"`, not `".png"`), and is empty for files without one.
/// Returning `None` or an empty image falls back to the generic file icon.
pub type FileIconProvider = Rc<dyn Fn(&str) -> Option<Image>>;

/// Icons drawn in front of file tree entries.
#[derive(Clone)]
pub struct FileIcons {
    pub folder: Image,
    pub file: Image,
    pub size: Vec2,
    provider: Option<FileIconProvider>,
}

impl Default for FileIcons {
    fn default() -> Self {
        Self {
            folder: Image::default(),
            file: Image::default(),
            size: Vec2::splat(16.0),
            provider: None,
        }
    }
}

impl FileIcons {
    pub const FOLDER_FILE: &'static str = "folder.png";
    pub const FILE_FILE: &'static str = "file.png";

    pub fn new(folder: Image, file: Image) -> Self {
        Self {
            folder,
            file,
            ..Self::default()
        }
    }

    /// Load `folder.png` and `file.png` from `assets_dir`. A missing file
    /// leaves that icon empty; a file that fails to decode is an error.
    pub fn load(ui: &mut dyn Frontend, assets_dir: impl AsRef<Path>) -> Result<Self, ImageError> {
        let assets_dir = assets_dir.as_ref();
        Ok(Self::new(
            load_icon(ui, &assets_dir.join(Self::FOLDER_FILE))?,
            load_icon(ui, &assets_dir.join(Self::FILE_FILE))?,
        ))
    }

    pub fn size(mut self, size: Vec2) -> Self {
        self.size = size;
        self
    }

    pub fn with_provider(mut self, provider: impl Fn(&str) -> Option<Image> + 'static) -> Self {
        self.provider = Some(Rc::new(provider));
        self
    }

    pub fn set_provider(&mut self, provider: Option<FileIconProvider>) {
        self.provider = provider;
    }

    /// Icon for a file with the given extension.
    pub fn for_file(&self, extension: &str) -> Image {
        self.provider
            .as_ref()
            .and_then(|provider| provider(extension))
            .filter(|image| !image.is_empty())
            .unwrap_or_else(|| self.file.clone())
    }
}

fn load_icon(ui: &mut dyn Frontend, path: &Path) -> Result<Image, ImageError> {
    if !path.is_file() {
        debug!("no icon at {}, leaving it empty", path.display());
        return Ok(Image::default());
    }
    Image::load(ui, path)
}

impl fmt::Debug for FileIcons {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileIcons")
            .field("folder", &self.folder)
            .field("file", &self.file)
            .field("size", &self.size)
            .field("provider", &self.provider.is_some())
            .finish()
    }
}
