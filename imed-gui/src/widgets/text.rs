//! Static text widgets.

use crate::frontend::Frontend;
use crate::widget::Widget;

/// A line of text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Label {
    pub text: String,
}

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl Widget for Label {
    fn show(&mut self, ui: &mut dyn Frontend) {
        ui.text(&self.text);
    }
}

/// Horizontal rule, optionally with a caption.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Separator {
    pub label: String,
}

impl Separator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_label(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl Widget for Separator {
    fn show(&mut self, ui: &mut dyn Frontend) {
        if self.label.is_empty() {
            ui.separator();
        } else {
            ui.separator_text(&self.label);
        }
    }
}

/// A bulleted list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BulletPoints {
    pub items: Vec<String>,
}

impl BulletPoints {
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    pub fn push(&mut self, item: impl Into<String>) {
        self.items.push(item.into());
    }
}

impl Widget for BulletPoints {
    fn show(&mut self, ui: &mut dyn Frontend) {
        for item in &self.items {
            ui.bullet_text(item);
        }
    }
}
