//! Clickable buttons.

use std::fmt;

use imed_types::Vec2;

use crate::frontend::Frontend;
use crate::image::Image;
use crate::widget::Widget;

type Callback = Box<dyn FnMut()>;

/// Text button. A zero size fits the label.
pub struct Button {
    pub label: String,
    pub size: Vec2,
    on_clicked: Option<Callback>,
}

impl Button {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            size: Vec2::ZERO,
            on_clicked: None,
        }
    }

    pub fn size(mut self, size: Vec2) -> Self {
        self.size = size;
        self
    }

    pub fn on_clicked(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_clicked = Some(Box::new(callback));
        self
    }
}

impl Widget for Button {
    fn show(&mut self, ui: &mut dyn Frontend) {
        if ui.button(&self.label, self.size) {
            if let Some(callback) = self.on_clicked.as_mut() {
                callback();
            }
        }
    }
}

impl fmt::Debug for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Button")
            .field("label", &self.label)
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}

/// Button showing an image. `id` must be unique within the window.
pub struct ImageButton {
    pub id: String,
    pub image: Image,
    pub size: Vec2,
    on_clicked: Option<Callback>,
}

impl ImageButton {
    /// The button takes the image's pixel size until [`size`](Self::size)
    /// overrides it.
    pub fn new(id: impl Into<String>, image: Image) -> Self {
        let size = image.size();
        Self {
            id: id.into(),
            image,
            size,
            on_clicked: None,
        }
    }

    pub fn size(mut self, size: Vec2) -> Self {
        self.size = size;
        self
    }

    pub fn on_clicked(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_clicked = Some(Box::new(callback));
        self
    }
}

impl Widget for ImageButton {
    fn show(&mut self, ui: &mut dyn Frontend) {
        if ui.image_button(&self.id, self.image.id(), self.size) {
            if let Some(callback) = self.on_clicked.as_mut() {
                callback();
            }
        }
    }
}

impl fmt::Debug for ImageButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageButton")
            .field("id", &self.id)
            .field("image", &self.image)
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}
