//! Containers that arrange other widgets.

use std::fmt;

use imed_dialog::{imed_log, DebugMessageType};

use crate::frontend::Frontend;
use crate::widget::Widget;

/// Children stacked top to bottom.
#[derive(Default)]
pub struct Layout {
    children: Vec<Box<dyn Widget>>,
}

impl Layout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, widget: impl Widget + 'static) -> Self {
        self.add(widget);
        self
    }

    pub fn add(&mut self, widget: impl Widget + 'static) {
        self.children.push(Box::new(widget));
    }

    pub fn push(&mut self, widget: Box<dyn Widget>) {
        self.children.push(widget);
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn clear(&mut self) {
        self.children.clear();
    }
}

impl Widget for Layout {
    fn show(&mut self, ui: &mut dyn Frontend) {
        for child in &mut self.children {
            child.show(ui);
        }
    }
}

impl fmt::Debug for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Layout")
            .field("children", &self.children.len())
            .finish()
    }
}

/// Children side by side on one line.
#[derive(Default)]
pub struct HLayout {
    children: Vec<Box<dyn Widget>>,
}

impl HLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, widget: impl Widget + 'static) -> Self {
        self.add(widget);
        self
    }

    pub fn add(&mut self, widget: impl Widget + 'static) {
        self.children.push(Box::new(widget));
    }

    pub fn push(&mut self, widget: Box<dyn Widget>) {
        self.children.push(widget);
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Widget for HLayout {
    fn show(&mut self, ui: &mut dyn Frontend) {
        for (i, child) in self.children.iter_mut().enumerate() {
            if i > 0 {
                ui.same_line();
            }
            child.show(ui);
        }
    }
}

impl fmt::Debug for HLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HLayout")
            .field("children", &self.children.len())
            .finish()
    }
}

/// Fixed number of columns; each child is assigned to one of them.
pub struct ColumnLayout {
    count: usize,
    children: Vec<(usize, Box<dyn Widget>)>,
}

impl ColumnLayout {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            children: Vec::new(),
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn with(mut self, column: usize, widget: impl Widget + 'static) -> Self {
        self.add(column, widget);
        self
    }

    /// Widgets in a column past `count` are kept but never shown.
    pub fn add(&mut self, column: usize, widget: impl Widget + 'static) {
        self.push(column, Box::new(widget));
    }

    pub fn push(&mut self, column: usize, widget: Box<dyn Widget>) {
        if column >= self.count {
            imed_log!(
                DebugMessageType::Warning,
                "column {column} is out of range for a {}-column layout, widget will not be shown",
                self.count
            );
        }
        self.children.push((column, widget));
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Widget for ColumnLayout {
    fn show(&mut self, ui: &mut dyn Frontend) {
        if self.count == 0 {
            return;
        }
        ui.columns(self.count);
        for column in 0..self.count {
            for (_, child) in self.children.iter_mut().filter(|(c, _)| *c == column) {
                child.show(ui);
            }
            ui.next_column();
        }
        ui.columns(1);
    }
}

impl fmt::Debug for ColumnLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnLayout")
            .field("count", &self.count)
            .field("children", &self.children.len())
            .finish()
    }
}
