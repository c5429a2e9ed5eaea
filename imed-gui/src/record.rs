//! A frontend that draws nothing and records every call.
//!
//! [`RecordingFrontend`] stands in for the host library wherever there is
//! no window: tests, tooling, CI. Interactions are scripted ahead of a frame
//! ([`click`](RecordingFrontend::click), [`open`](RecordingFrontend::open),
//! [`edit_text`](RecordingFrontend::edit_text), ...) and the resulting call
//! stream can be inspected afterwards.
//!
//! Scripting rules:
//! - clicks and edits are consumed by the first matching widget,
//! - opened menus and tree nodes stay open until [`close`](RecordingFrontend::close),
//! - menu bars, tab bars and every tab are always open.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use imed_types::{Style, Vec2};

use crate::flags::{InputTextFlags, SliderFlags, TabBarFlags, TabItemFlags};
use crate::frontend::{Body, Frontend, ReleaseHook, TextureId};
use crate::widgets::truncate_to;

/// One recorded frontend call.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Text(String),
    BulletText(String),
    Separator,
    SeparatorText(String),
    SameLine,
    InputText { label: String, value: String },
    InputTextMultiline { label: String, value: String },
    InputInt { label: String, value: i32 },
    InputFloat { label: String, value: f32 },
    SliderInt { label: String, value: i32 },
    SliderFloat { label: String, value: f32 },
    Button(String),
    ImageButton { id: String, texture: TextureId },
    Image { texture: TextureId, size: Vec2 },
    MenuItem { label: String, selected: bool, enabled: bool },
    BeginMenu(String),
    EndMenu,
    BeginMenuBar,
    EndMenuBar,
    BeginMainMenuBar,
    EndMainMenuBar,
    BeginTabBar(String),
    EndTabBar,
    BeginTabItem { label: String, closable: bool },
    EndTabItem,
    Columns(usize),
    NextColumn,
    TreeNode(String),
    TreePop,
    TreeLeaf(String),
    SetStyle,
}

#[derive(Debug, Clone, PartialEq)]
enum Edit {
    Text(String),
    Int(i32),
    Float(f32),
}

#[derive(Default)]
pub struct RecordingFrontend {
    calls: Vec<Call>,
    clicks: HashSet<String>,
    opened: HashSet<String>,
    closing_tabs: HashSet<String>,
    edits: HashMap<String, Edit>,
    style: Style,
    next_texture: usize,
    released: Rc<RefCell<Vec<TextureId>>>,
}

impl RecordingFrontend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report a click on the button, menu item or tree leaf with this label
    /// (image buttons match on their id).
    pub fn click(&mut self, label: impl Into<String>) -> &mut Self {
        self.clicks.insert(label.into());
        self
    }

    /// Expand the menu or tree node with this label.
    pub fn open(&mut self, label: impl Into<String>) -> &mut Self {
        self.opened.insert(label.into());
        self
    }

    pub fn close(&mut self, label: &str) -> &mut Self {
        self.opened.remove(label);
        self
    }

    /// Press the close button of a closable tab.
    pub fn close_tab(&mut self, label: impl Into<String>) -> &mut Self {
        self.closing_tabs.insert(label.into());
        self
    }

    pub fn edit_text(&mut self, label: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.edits.insert(label.into(), Edit::Text(value.into()));
        self
    }

    pub fn edit_int(&mut self, label: impl Into<String>, value: i32) -> &mut Self {
        self.edits.insert(label.into(), Edit::Int(value));
        self
    }

    pub fn edit_float(&mut self, label: impl Into<String>, value: f32) -> &mut Self {
        self.edits.insert(label.into(), Edit::Float(value));
        self
    }

    pub fn calls(&self) -> &[Call] {
        &self.calls
    }

    pub fn take_calls(&mut self) -> Vec<Call> {
        std::mem::take(&mut self.calls)
    }

    /// Textures whose last [`Image`](crate::Image) handle has been dropped.
    pub fn released_textures(&self) -> Vec<TextureId> {
        self.released.borrow().clone()
    }

    pub fn textures_created(&self) -> usize {
        self.next_texture
    }

    fn clicked(&mut self, label: &str) -> bool {
        self.clicks.remove(label)
    }

    fn edit(&mut self, label: &str) -> Option<Edit> {
        self.edits.remove(label)
    }

    fn scoped(&mut self, begin: Call, end: Call, body: Body<'_>) {
        self.calls.push(begin);
        body(self);
        self.calls.push(end);
    }
}

impl Frontend for RecordingFrontend {
    fn text(&mut self, text: &str) {
        self.calls.push(Call::Text(text.to_string()));
    }

    fn bullet_text(&mut self, text: &str) {
        self.calls.push(Call::BulletText(text.to_string()));
    }

    fn separator(&mut self) {
        self.calls.push(Call::Separator);
    }

    fn separator_text(&mut self, label: &str) {
        self.calls.push(Call::SeparatorText(label.to_string()));
    }

    fn same_line(&mut self) {
        self.calls.push(Call::SameLine);
    }

    fn input_text(
        &mut self,
        label: &str,
        buffer: &mut String,
        capacity: usize,
        flags: InputTextFlags,
    ) -> bool {
        let changed = match self.edit(label) {
            Some(Edit::Text(value)) if !flags.contains(InputTextFlags::READ_ONLY) => {
                *buffer = value;
                truncate_to(buffer, capacity);
                true
            }
            _ => false,
        };
        self.calls.push(Call::InputText {
            label: label.to_string(),
            value: buffer.clone(),
        });
        changed
    }

    fn input_text_multiline(
        &mut self,
        label: &str,
        buffer: &mut String,
        capacity: usize,
        _size: Vec2,
        flags: InputTextFlags,
    ) -> bool {
        let changed = match self.edit(label) {
            Some(Edit::Text(value)) if !flags.contains(InputTextFlags::READ_ONLY) => {
                *buffer = value;
                truncate_to(buffer, capacity);
                true
            }
            _ => false,
        };
        self.calls.push(Call::InputTextMultiline {
            label: label.to_string(),
            value: buffer.clone(),
        });
        changed
    }

    fn input_int(
        &mut self,
        label: &str,
        value: &mut i32,
        _step: i32,
        _step_fast: i32,
        _flags: InputTextFlags,
    ) -> bool {
        let changed = match self.edit(label) {
            Some(Edit::Int(new)) => {
                *value = new;
                true
            }
            _ => false,
        };
        self.calls.push(Call::InputInt {
            label: label.to_string(),
            value: *value,
        });
        changed
    }

    fn input_float(
        &mut self,
        label: &str,
        value: &mut f32,
        _step: f32,
        _step_fast: f32,
        _format: &str,
        _flags: InputTextFlags,
    ) -> bool {
        let changed = match self.edit(label) {
            Some(Edit::Float(new)) => {
                *value = new;
                true
            }
            _ => false,
        };
        self.calls.push(Call::InputFloat {
            label: label.to_string(),
            value: *value,
        });
        changed
    }

    fn slider_int(
        &mut self,
        label: &str,
        value: &mut i32,
        min: i32,
        max: i32,
        _format: &str,
        flags: SliderFlags,
    ) -> bool {
        let changed = match self.edit(label) {
            Some(Edit::Int(new)) => {
                *value = if flags.contains(SliderFlags::ALWAYS_CLAMP) {
                    new.clamp(min, max)
                } else {
                    new
                };
                true
            }
            _ => false,
        };
        self.calls.push(Call::SliderInt {
            label: label.to_string(),
            value: *value,
        });
        changed
    }

    fn slider_float(
        &mut self,
        label: &str,
        value: &mut f32,
        min: f32,
        max: f32,
        _format: &str,
        flags: SliderFlags,
    ) -> bool {
        let changed = match self.edit(label) {
            Some(Edit::Float(new)) => {
                *value = if flags.contains(SliderFlags::ALWAYS_CLAMP) {
                    new.clamp(min, max)
                } else {
                    new
                };
                true
            }
            _ => false,
        };
        self.calls.push(Call::SliderFloat {
            label: label.to_string(),
            value: *value,
        });
        changed
    }

    fn button(&mut self, label: &str, _size: Vec2) -> bool {
        self.calls.push(Call::Button(label.to_string()));
        self.clicked(label)
    }

    fn image_button(&mut self, id: &str, texture: TextureId, _size: Vec2) -> bool {
        self.calls.push(Call::ImageButton {
            id: id.to_string(),
            texture,
        });
        self.clicked(id)
    }

    fn image(&mut self, texture: TextureId, size: Vec2) {
        self.calls.push(Call::Image { texture, size });
    }

    fn menu_item(&mut self, label: &str, _shortcut: &str, selected: bool, enabled: bool) -> bool {
        self.calls.push(Call::MenuItem {
            label: label.to_string(),
            selected,
            enabled,
        });
        enabled && self.clicked(label)
    }

    fn menu(&mut self, label: &str, enabled: bool, body: Body<'_>) -> bool {
        if !enabled || !self.opened.contains(label) {
            return false;
        }
        self.scoped(Call::BeginMenu(label.to_string()), Call::EndMenu, body);
        true
    }

    fn menu_bar(&mut self, body: Body<'_>) -> bool {
        self.scoped(Call::BeginMenuBar, Call::EndMenuBar, body);
        true
    }

    fn main_menu_bar(&mut self, body: Body<'_>) -> bool {
        self.scoped(Call::BeginMainMenuBar, Call::EndMainMenuBar, body);
        true
    }

    fn tab_bar(&mut self, id: &str, _flags: TabBarFlags, body: Body<'_>) -> bool {
        self.scoped(Call::BeginTabBar(id.to_string()), Call::EndTabBar, body);
        true
    }

    fn tab_item(
        &mut self,
        label: &str,
        open: Option<&mut bool>,
        _flags: TabItemFlags,
        body: Body<'_>,
    ) -> bool {
        let closable = open.is_some();
        if let Some(open) = open {
            if self.closing_tabs.remove(label) {
                *open = false;
                return false;
            }
        }
        self.scoped(
            Call::BeginTabItem {
                label: label.to_string(),
                closable,
            },
            Call::EndTabItem,
            body,
        );
        true
    }

    fn columns(&mut self, count: usize) {
        self.calls.push(Call::Columns(count));
    }

    fn next_column(&mut self) {
        self.calls.push(Call::NextColumn);
    }

    fn tree_node(&mut self, label: &str, body: Body<'_>) -> bool {
        if !self.opened.contains(label) {
            self.calls.push(Call::TreeNode(label.to_string()));
            return false;
        }
        self.scoped(Call::TreeNode(label.to_string()), Call::TreePop, body);
        true
    }

    fn tree_leaf(&mut self, label: &str) -> bool {
        self.calls.push(Call::TreeLeaf(label.to_string()));
        self.clicked(label)
    }

    fn style(&self) -> Style {
        self.style.clone()
    }

    fn set_style(&mut self, style: &Style) {
        self.calls.push(Call::SetStyle);
        self.style = style.clone();
    }

    fn create_texture(&mut self, rgba: &[u8], width: u32, height: u32) -> Option<TextureId> {
        if rgba.len() != width as usize * height as usize * 4 {
            return None;
        }
        self.next_texture += 1;
        Some(TextureId(self.next_texture))
    }

    fn texture_release_hook(&self) -> Option<ReleaseHook> {
        let released = Rc::clone(&self.released);
        Some(Rc::new(move |id| released.borrow_mut().push(id)))
    }
}
