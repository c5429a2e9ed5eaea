//! Retained widget objects over an immediate-mode GUI.
//!
//! Widgets own their state and redraw it every frame through a
//! [`Frontend`]. [`RecordingFrontend`] runs headless; the `imgui` feature
//! adds [`ImguiFrontend`](imgui_frontend::ImguiFrontend).

pub mod config;
pub mod flags;
pub mod frontend;
pub mod image;
#[cfg(feature = "imgui")]
pub mod imgui_frontend;
pub mod record;
pub mod style;
pub mod tree;
pub mod widget;
pub mod widgets;

pub use config::{init, ConfigError, Context, GuiConfig, Theme};
pub use frontend::{Body, Frontend, ReleaseHook, TextureId};
pub use self::image::{Image, ImageError};
pub use record::{Call, RecordingFrontend};
pub use style::StyleExt;
pub use widget::{Custom, Widget};

pub use imed_dialog as dialog;
pub use imed_types as types;

pub mod prelude {
    pub use crate::config::{init, Context, GuiConfig, Theme};
    pub use crate::flags::{InputTextFlags, SliderFlags, TabBarFlags, TabItemFlags};
    pub use crate::frontend::{Frontend, TextureId};
    pub use crate::image::Image;
    pub use crate::record::{Call, RecordingFrontend};
    pub use crate::style::StyleExt;
    pub use crate::tree::{BuildOptions, FileIcons, FreeTreeNode, TreeItem, TreeNode};
    pub use crate::widget::{Custom, Widget};
    pub use crate::widgets::*;

    pub use imed_types::{CodeStyle, Color, Style, Vec2};
}
