//! Tab bars.

use std::fmt;

use crate::flags::{TabBarFlags, TabItemFlags};
use crate::frontend::Frontend;
use crate::widget::Widget;

/// One tab. A closable tab gets a close button; once closed it stays hidden
/// until `open` is set again.
pub struct TabItem {
    pub label: String,
    pub open: bool,
    pub closable: bool,
    pub flags: TabItemFlags,
    content: Option<Box<dyn Widget>>,
}

impl TabItem {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            open: true,
            closable: false,
            flags: TabItemFlags::empty(),
            content: None,
        }
    }

    pub fn closable(mut self, closable: bool) -> Self {
        self.closable = closable;
        self
    }

    pub fn flags(mut self, flags: TabItemFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn content(mut self, content: impl Widget + 'static) -> Self {
        self.content = Some(Box::new(content));
        self
    }

    pub fn content_mut(&mut self) -> Option<&mut (dyn Widget + 'static)> {
        self.content.as_deref_mut()
    }
}

impl Widget for TabItem {
    fn show(&mut self, ui: &mut dyn Frontend) {
        if !self.open {
            return;
        }
        let Self {
            label,
            open,
            closable,
            flags,
            content,
        } = self;
        let open = if *closable { Some(open) } else { None };
        ui.tab_item(label.as_str(), open, *flags, &mut |ui| {
            if let Some(content) = content.as_mut() {
                content.show(ui);
            }
        });
    }
}

impl fmt::Debug for TabItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TabItem")
            .field("label", &self.label)
            .field("open", &self.open)
            .field("closable", &self.closable)
            .field("flags", &self.flags)
            .finish_non_exhaustive()
    }
}

#[derive(Debug)]
pub struct TabLayout {
    pub id: String,
    pub flags: TabBarFlags,
    pub tabs: Vec<TabItem>,
}

impl TabLayout {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            flags: TabBarFlags::empty(),
            tabs: Vec::new(),
        }
    }

    pub fn flags(mut self, flags: TabBarFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn with(mut self, tab: TabItem) -> Self {
        self.tabs.push(tab);
        self
    }

    pub fn add(&mut self, tab: TabItem) {
        self.tabs.push(tab);
    }

    pub fn tab(&self, label: &str) -> Option<&TabItem> {
        self.tabs.iter().find(|tab| tab.label == label)
    }

    pub fn tab_mut(&mut self, label: &str) -> Option<&mut TabItem> {
        self.tabs.iter_mut().find(|tab| tab.label == label)
    }

    /// Tabs that have not been closed.
    pub fn open_tabs(&self) -> impl Iterator<Item = &TabItem> + '_ {
        self.tabs.iter().filter(|tab| tab.open)
    }
}

impl Widget for TabLayout {
    fn show(&mut self, ui: &mut dyn Frontend) {
        let tabs = &mut self.tabs;
        ui.tab_bar(&self.id, self.flags, &mut |ui| {
            for tab in tabs.iter_mut() {
                tab.show(ui);
            }
        });
    }
}
