//! Start-up configuration and themes.

use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use imed_types::{CodeStyle, Style, Vec2};
use log::info;
use serde::{Deserialize, Serialize};

use crate::frontend::Frontend;
use crate::image::ImageError;
use crate::style::StyleExt;
use crate::tree::{BuildOptions, FileIcons, FreeTreeNode, TreeError};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot access {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid theme: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Image(#[from] ImageError),
}

/// Where the GUI finds its assets and theme.
#[derive(Debug, Clone, PartialEq)]
pub struct GuiConfig {
    /// Application directory.
    pub base_dir: PathBuf,

    /// Icon directory. Defaults to `<base_dir>/assets`.
    pub assets_dir: PathBuf,

    /// Theme file applied by [`init`]. Without one the frontend's current
    /// style is kept.
    pub theme_path: Option<PathBuf>,

    /// Size file tree icons are drawn at.
    pub icon_size: Vec2,
}

impl GuiConfig {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        let base_dir = base_dir.into();
        Self {
            assets_dir: base_dir.join("assets"),
            base_dir,
            theme_path: None,
            icon_size: Vec2::splat(16.0),
        }
    }

    pub fn assets_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.assets_dir = dir.into();
        self
    }

    pub fn theme_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.theme_path = Some(path.into());
        self
    }

    pub fn icon_size(mut self, size: Vec2) -> Self {
        self.icon_size = size;
        self
    }
}

/// Widget style plus code editor colors, stored as JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub style: Style,
    pub code: CodeStyle,
}

impl Theme {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        fs::write(path, self.to_json()?).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn apply(&self, ui: &mut dyn Frontend) {
        self.style.apply(ui);
    }
}

/// Resources shared by the widgets of one GUI.
#[derive(Debug, Clone)]
pub struct Context {
    pub icons: Rc<FileIcons>,
    pub theme: Theme,
}

impl Context {
    /// Mirror `root` as a file tree drawn with this context's icons.
    pub fn file_tree(&self, root: impl AsRef<Path>) -> Result<FreeTreeNode, TreeError> {
        self.file_tree_with(root, &BuildOptions::default())
    }

    pub fn file_tree_with(
        &self,
        root: impl AsRef<Path>,
        options: &BuildOptions,
    ) -> Result<FreeTreeNode, TreeError> {
        Ok(FreeTreeNode::build_from_dir_with(root, options)?.with_icons(Rc::clone(&self.icons)))
    }
}

/// Load icons and the theme, then apply the theme to `ui`.
pub fn init(config: &GuiConfig, ui: &mut dyn Frontend) -> Result<Context, ConfigError> {
    let icons = FileIcons::load(ui, &config.assets_dir)?.size(config.icon_size);

    let theme = match &config.theme_path {
        Some(path) => {
            let theme = Theme::load(path)?;
            theme.apply(ui);
            info!("applied theme from {}", path.display());
            theme
        }
        None => Theme {
            style: Style::current(ui),
            code: CodeStyle::default(),
        },
    };

    info!("gui initialised from {}", config.base_dir.display());
    Ok(Context {
        icons: Rc::new(icons),
        theme,
    })
}
