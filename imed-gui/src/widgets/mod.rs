//! The widget set.

mod button;
mod input;
mod layout;
mod menu;
mod slider;
mod tabs;
mod text;

pub use self::button::{Button, ImageButton};
pub(crate) use self::input::truncate_to;
pub use self::input::{FloatInput, IntInput, TextEditor, TextInput};
pub use self::layout::{ColumnLayout, HLayout, Layout};
pub use self::menu::{Menu, MenuBar, MenuEntry, MenuItem};
pub use self::slider::{FloatSlider, IntSlider};
pub use self::tabs::{TabItem, TabLayout};
pub use self::text::{BulletPoints, Label, Separator};
