//! Text and numeric input fields.

use std::fmt;

use imed_types::Vec2;

use crate::flags::InputTextFlags;
use crate::frontend::Frontend;
use crate::widget::Widget;

/// Cut `text` to at most `capacity` bytes without splitting a character.
pub(crate) fn truncate_to(text: &mut String, capacity: usize) {
    if text.len() <= capacity {
        return;
    }
    let mut end = capacity;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    text.truncate(end);
}

/// Single-line text field with a fixed byte capacity.
pub struct TextInput {
    pub label: String,
    pub flags: InputTextFlags,
    text: String,
    capacity: usize,
    on_changed: Option<Box<dyn FnMut(&str)>>,
}

impl TextInput {
    pub fn new(label: impl Into<String>, capacity: usize) -> Self {
        Self {
            label: label.into(),
            flags: InputTextFlags::empty(),
            text: String::with_capacity(capacity),
            capacity,
            on_changed: None,
        }
    }

    pub fn flags(mut self, flags: InputTextFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Called with the new contents after each edit.
    pub fn on_changed(mut self, callback: impl FnMut(&str) + 'static) -> Self {
        self.on_changed = Some(Box::new(callback));
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the contents. Anything past the capacity is dropped.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        truncate_to(&mut self.text, self.capacity);
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Widget for TextInput {
    fn show(&mut self, ui: &mut dyn Frontend) {
        let changed = ui.input_text(&self.label, &mut self.text, self.capacity, self.flags);
        truncate_to(&mut self.text, self.capacity);
        if changed {
            if let Some(callback) = self.on_changed.as_mut() {
                callback(&self.text);
            }
        }
    }
}

impl fmt::Debug for TextInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextInput")
            .field("label", &self.label)
            .field("text", &self.text)
            .field("capacity", &self.capacity)
            .field("flags", &self.flags)
            .finish_non_exhaustive()
    }
}

/// Multiline text area filling the available width.
#[derive(Debug, Clone, Default)]
pub struct TextEditor {
    pub size: Vec2,
    pub flags: InputTextFlags,
    text: String,
    capacity: usize,
}

impl TextEditor {
    pub const LABEL: &'static str = "##text";

    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            text: String::with_capacity(capacity),
            ..Self::default()
        }
    }

    /// Start with `text`. The capacity grows to fit it if needed.
    pub fn with_text(text: impl Into<String>, capacity: usize) -> Self {
        let text = text.into();
        Self {
            capacity: capacity.max(text.len()),
            text,
            ..Self::default()
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Widget for TextEditor {
    fn show(&mut self, ui: &mut dyn Frontend) {
        ui.input_text_multiline(
            Self::LABEL,
            &mut self.text,
            self.capacity,
            self.size,
            self.flags,
        );
        truncate_to(&mut self.text, self.capacity);
    }
}

/// Integer field with +/- step buttons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntInput {
    pub label: String,
    pub value: i32,
    pub step: i32,
    pub step_fast: i32,
    pub flags: InputTextFlags,
}

impl IntInput {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: 0,
            step: 1,
            step_fast: 100,
            flags: InputTextFlags::empty(),
        }
    }

    pub fn value(mut self, value: i32) -> Self {
        self.value = value;
        self
    }

    pub fn step(mut self, step: i32, step_fast: i32) -> Self {
        self.step = step;
        self.step_fast = step_fast;
        self
    }
}

impl Widget for IntInput {
    fn show(&mut self, ui: &mut dyn Frontend) {
        ui.input_int(
            &self.label,
            &mut self.value,
            self.step,
            self.step_fast,
            self.flags,
        );
    }
}

/// Float field. Steps of zero hide the +/- buttons.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatInput {
    pub label: String,
    pub value: f32,
    pub step: f32,
    pub step_fast: f32,
    pub flags: InputTextFlags,
}

impl FloatInput {
    pub const FORMAT: &'static str = "%g";

    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: 0.0,
            step: 0.0,
            step_fast: 0.0,
            flags: InputTextFlags::empty(),
        }
    }

    pub fn value(mut self, value: f32) -> Self {
        self.value = value;
        self
    }

    pub fn step(mut self, step: f32, step_fast: f32) -> Self {
        self.step = step;
        self.step_fast = step_fast;
        self
    }
}

impl Widget for FloatInput {
    fn show(&mut self, ui: &mut dyn Frontend) {
        ui.input_float(
            &self.label,
            &mut self.value,
            self.step,
            self.step_fast,
            Self::FORMAT,
            self.flags,
        );
    }
}
