//! Menus and menu bars.

use std::fmt;

use crate::frontend::Frontend;
use crate::widget::Widget;
use crate::widgets::text::Separator;

/// A clickable menu entry. Activating it flips `selected`, which the host
/// draws as a check mark.
pub struct MenuItem {
    pub label: String,
    pub shortcut: String,
    pub enabled: bool,
    pub selected: bool,
    on_clicked: Option<Box<dyn FnMut(bool)>>,
}

impl MenuItem {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            shortcut: String::new(),
            enabled: true,
            selected: false,
            on_clicked: None,
        }
    }

    /// Shortcut hint drawn next to the label. Display only.
    pub fn shortcut(mut self, shortcut: impl Into<String>) -> Self {
        self.shortcut = shortcut.into();
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Called with the new `selected` state.
    pub fn on_clicked(mut self, callback: impl FnMut(bool) + 'static) -> Self {
        self.on_clicked = Some(Box::new(callback));
        self
    }
}

impl Widget for MenuItem {
    fn show(&mut self, ui: &mut dyn Frontend) {
        if ui.menu_item(&self.label, &self.shortcut, self.selected, self.enabled) {
            self.selected = !self.selected;
            if let Some(callback) = self.on_clicked.as_mut() {
                callback(self.selected);
            }
        }
    }
}

impl fmt::Debug for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuItem")
            .field("label", &self.label)
            .field("shortcut", &self.shortcut)
            .field("enabled", &self.enabled)
            .field("selected", &self.selected)
            .finish_non_exhaustive()
    }
}

#[derive(Debug)]
pub enum MenuEntry {
    Item(MenuItem),
    Separator(Separator),
    Submenu(Menu),
}

impl Widget for MenuEntry {
    fn show(&mut self, ui: &mut dyn Frontend) {
        match self {
            Self::Item(item) => item.show(ui),
            Self::Separator(separator) => separator.show(ui),
            Self::Submenu(menu) => menu.show(ui),
        }
    }
}

impl From<MenuItem> for MenuEntry {
    fn from(item: MenuItem) -> Self {
        Self::Item(item)
    }
}

impl From<Separator> for MenuEntry {
    fn from(separator: Separator) -> Self {
        Self::Separator(separator)
    }
}

impl From<Menu> for MenuEntry {
    fn from(menu: Menu) -> Self {
        Self::Submenu(menu)
    }
}

/// Drop-down menu. Entries show in insertion order while it is open.
#[derive(Debug)]
pub struct Menu {
    pub label: String,
    pub enabled: bool,
    pub entries: Vec<MenuEntry>,
}

impl Menu {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            enabled: true,
            entries: Vec::new(),
        }
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with(mut self, entry: impl Into<MenuEntry>) -> Self {
        self.entries.push(entry.into());
        self
    }

    pub fn add(&mut self, entry: impl Into<MenuEntry>) {
        self.entries.push(entry.into());
    }

    /// First item with the given label, searching submenus too.
    pub fn item_mut(&mut self, label: &str) -> Option<&mut MenuItem> {
        self.entries.iter_mut().find_map(|entry| match entry {
            MenuEntry::Item(item) if item.label == label => Some(item),
            MenuEntry::Submenu(menu) => menu.item_mut(label),
            _ => None,
        })
    }
}

impl Widget for Menu {
    fn show(&mut self, ui: &mut dyn Frontend) {
        let entries = &mut self.entries;
        ui.menu(&self.label, self.enabled, &mut |ui| {
            for entry in entries.iter_mut() {
                entry.show(ui);
            }
        });
    }
}

/// A bar of menus, either across the top of the screen or inside the
/// current window.
#[derive(Debug, Default)]
pub struct MenuBar {
    pub main: bool,
    pub menus: Vec<Menu>,
}

impl MenuBar {
    /// Bar attached to the current window.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bar across the top of the screen.
    pub fn main() -> Self {
        Self {
            main: true,
            menus: Vec::new(),
        }
    }

    pub fn with(mut self, menu: Menu) -> Self {
        self.menus.push(menu);
        self
    }

    pub fn add(&mut self, menu: Menu) {
        self.menus.push(menu);
    }
}

impl Widget for MenuBar {
    fn show(&mut self, ui: &mut dyn Frontend) {
        let menus = &mut self.menus;
        let mut body = |ui: &mut dyn Frontend| {
            for menu in menus.iter_mut() {
                menu.show(ui);
            }
        };
        if self.main {
            ui.main_menu_bar(&mut body);
        } else {
            ui.menu_bar(&mut body);
        }
    }
}
