//! The seam between widgets and the host immediate-mode library.
//!
//! Widgets never talk to a GUI library directly. They call into a
//! [`Frontend`], which forwards each call to the host for the current frame.
//! Scoped regions (menus, tab bars, tree nodes) take a body closure that only
//! runs when the region is open; the frontend closes the region after the
//! body returns, so begin/end calls are always balanced.

use std::rc::Rc;

use imed_types::{Style, Vec2};

use crate::flags::{InputTextFlags, SliderFlags, TabBarFlags, TabItemFlags};

/// Host texture handle. `TextureId(0)` means "no texture".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct TextureId(pub usize);

impl TextureId {
    pub const NONE: Self = Self(0);

    pub fn is_none(self) -> bool {
        self == Self::NONE
    }
}

/// Contents of a scoped region.
pub type Body<'a> = &'a mut dyn FnMut(&mut dyn Frontend);

/// Called with a texture id once the last handle to it is gone.
pub type ReleaseHook = Rc<dyn Fn(TextureId)>;

/// Immediate-mode drawing calls used by the widget set.
///
/// Methods returning `bool` report interaction for this frame: a click, an
/// edited value, or an opened region.
pub trait Frontend {
    fn text(&mut self, text: &str);
    fn bullet_text(&mut self, text: &str);
    fn separator(&mut self);
    fn separator_text(&mut self, label: &str);
    /// Place the next item on the same line as the previous one.
    fn same_line(&mut self);

    /// Single-line text field. The frontend must keep `buffer` within
    /// `capacity` bytes.
    fn input_text(
        &mut self,
        label: &str,
        buffer: &mut String,
        capacity: usize,
        flags: InputTextFlags,
    ) -> bool;
    fn input_text_multiline(
        &mut self,
        label: &str,
        buffer: &mut String,
        capacity: usize,
        size: Vec2,
        flags: InputTextFlags,
    ) -> bool;
    fn input_int(
        &mut self,
        label: &str,
        value: &mut i32,
        step: i32,
        step_fast: i32,
        flags: InputTextFlags,
    ) -> bool;
    fn input_float(
        &mut self,
        label: &str,
        value: &mut f32,
        step: f32,
        step_fast: f32,
        format: &str,
        flags: InputTextFlags,
    ) -> bool;
    fn slider_int(
        &mut self,
        label: &str,
        value: &mut i32,
        min: i32,
        max: i32,
        format: &str,
        flags: SliderFlags,
    ) -> bool;
    fn slider_float(
        &mut self,
        label: &str,
        value: &mut f32,
        min: f32,
        max: f32,
        format: &str,
        flags: SliderFlags,
    ) -> bool;

    /// A zero size lets the host fit the button to its label.
    fn button(&mut self, label: &str, size: Vec2) -> bool;
    fn image_button(&mut self, id: &str, texture: TextureId, size: Vec2) -> bool;
    fn image(&mut self, texture: TextureId, size: Vec2);

    fn menu_item(&mut self, label: &str, shortcut: &str, selected: bool, enabled: bool) -> bool;
    fn menu(&mut self, label: &str, enabled: bool, body: Body<'_>) -> bool;
    /// Menu bar of the current window.
    fn menu_bar(&mut self, body: Body<'_>) -> bool;
    /// Menu bar across the top of the screen.
    fn main_menu_bar(&mut self, body: Body<'_>) -> bool;

    fn tab_bar(&mut self, id: &str, flags: TabBarFlags, body: Body<'_>) -> bool;
    /// A tab inside the current tab bar. When `open` is given the tab gets a
    /// close button, and the frontend clears the flag when it is pressed.
    fn tab_item(
        &mut self,
        label: &str,
        open: Option<&mut bool>,
        flags: TabItemFlags,
        body: Body<'_>,
    ) -> bool;

    fn columns(&mut self, count: usize);
    fn next_column(&mut self);

    /// Expandable tree node; `body` runs while it is expanded.
    fn tree_node(&mut self, label: &str, body: Body<'_>) -> bool;
    /// Tree node without children. Returns true when activated.
    fn tree_leaf(&mut self, label: &str) -> bool;

    fn style(&self) -> Style;
    fn set_style(&mut self, style: &Style);

    /// Upload RGBA8 pixels as a texture. Frontends without texture support
    /// return `None`.
    fn create_texture(&mut self, rgba: &[u8], width: u32, height: u32) -> Option<TextureId> {
        let _ = (rgba, width, height);
        None
    }

    /// How textures created by this frontend are released.
    fn texture_release_hook(&self) -> Option<ReleaseHook> {
        None
    }
}
