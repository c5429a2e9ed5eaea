//! Shared texture handles.

use std::fmt;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use imed_types::Vec2;
use log::debug;

use crate::frontend::{Frontend, ReleaseHook, TextureId};

#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error("cannot read image {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot decode image {path}: {source}")]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("pixel buffer holds {actual} bytes, expected {expected}")]
    Size { expected: usize, actual: usize },

    #[error("frontend refused a {width}x{height} texture")]
    Texture { width: u32, height: u32 },
}

struct Texture {
    id: TextureId,
    width: u32,
    height: u32,
    release: Option<ReleaseHook>,
}

impl Drop for Texture {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release(self.id);
        }
    }
}

/// A host texture plus its pixel size.
///
/// Clones share the texture; the frontend's release hook runs when the last
/// clone is dropped. The default value is the empty image.
#[derive(Clone, Default)]
pub struct Image {
    texture: Option<Rc<Texture>>,
}

impl Image {
    /// Wrap a texture the caller already owns.
    pub fn from_texture(
        id: TextureId,
        width: u32,
        height: u32,
        release: Option<ReleaseHook>,
    ) -> Self {
        Self {
            texture: Some(Rc::new(Texture {
                id,
                width,
                height,
                release,
            })),
        }
    }

    /// Upload tightly packed RGBA8 pixels.
    pub fn from_rgba(
        ui: &mut dyn Frontend,
        rgba: &[u8],
        width: u32,
        height: u32,
    ) -> Result<Self, ImageError> {
        let expected = width as usize * height as usize * 4;
        if rgba.len() != expected {
            return Err(ImageError::Size {
                expected,
                actual: rgba.len(),
            });
        }

        let id = ui
            .create_texture(rgba, width, height)
            .ok_or(ImageError::Texture { width, height })?;
        Ok(Self::from_texture(id, width, height, ui.texture_release_hook()))
    }

    /// Decode an image file and upload it.
    pub fn load(ui: &mut dyn Frontend, path: impl AsRef<Path>) -> Result<Self, ImageError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| ImageError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let decoded = image::load_from_memory(&bytes).map_err(|source| ImageError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

        let rgba = decoded.to_rgba8();
        let (width, height) = rgba.dimensions();
        debug!("loaded {} ({width}x{height})", path.display());
        Self::from_rgba(ui, rgba.as_raw(), width, height)
    }

    /// Texture id, or [`TextureId::NONE`] for the empty image.
    pub fn id(&self) -> TextureId {
        self.texture
            .as_ref()
            .map_or(TextureId::NONE, |texture| texture.id)
    }

    pub fn is_empty(&self) -> bool {
        self.id().is_none()
    }

    pub fn width(&self) -> u32 {
        self.texture.as_ref().map_or(0, |texture| texture.width)
    }

    pub fn height(&self) -> u32 {
        self.texture.as_ref().map_or(0, |texture| texture.height)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width() as f32, self.height() as f32)
    }

    /// Number of handles sharing this texture.
    pub fn handle_count(&self) -> usize {
        self.texture.as_ref().map_or(0, Rc::strong_count)
    }

    /// Draw the image at `size`.
    pub fn show(&self, ui: &mut dyn Frontend, size: Vec2) {
        if !self.is_empty() {
            ui.image(self.id(), size);
        }
    }
}

impl PartialEq for Image {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl fmt::Debug for Image {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Image")
            .field("id", &self.id())
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}
