//! Range sliders.

use std::fmt;

use crate::flags::SliderFlags;
use crate::frontend::Frontend;
use crate::widget::Widget;

pub struct IntSlider {
    pub label: String,
    pub value: i32,
    pub min: i32,
    pub max: i32,
    pub flags: SliderFlags,
    on_changed: Option<Box<dyn FnMut(i32)>>,
}

impl IntSlider {
    pub const FORMAT: &'static str = "%d";

    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: 0,
            min: 0,
            max: 100,
            flags: SliderFlags::empty(),
            on_changed: None,
        }
    }

    pub fn range(mut self, min: i32, max: i32) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    pub fn value(mut self, value: i32) -> Self {
        self.value = value;
        self
    }

    pub fn flags(mut self, flags: SliderFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn on_changed(mut self, callback: impl FnMut(i32) + 'static) -> Self {
        self.on_changed = Some(Box::new(callback));
        self
    }
}

impl Widget for IntSlider {
    fn show(&mut self, ui: &mut dyn Frontend) {
        let changed = ui.slider_int(
            &self.label,
            &mut self.value,
            self.min,
            self.max,
            Self::FORMAT,
            self.flags,
        );
        if changed {
            if let Some(callback) = self.on_changed.as_mut() {
                callback(self.value);
            }
        }
    }
}

impl fmt::Debug for IntSlider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntSlider")
            .field("label", &self.label)
            .field("value", &self.value)
            .field("range", &(self.min..=self.max))
            .finish_non_exhaustive()
    }
}

pub struct FloatSlider {
    pub label: String,
    pub value: f32,
    pub min: f32,
    pub max: f32,
    pub flags: SliderFlags,
    on_changed: Option<Box<dyn FnMut(f32)>>,
}

impl FloatSlider {
    pub const FORMAT: &'static str = "%g";

    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: 0.0,
            min: 0.0,
            max: 100.0,
            flags: SliderFlags::empty(),
            on_changed: None,
        }
    }

    pub fn range(mut self, min: f32, max: f32) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    pub fn value(mut self, value: f32) -> Self {
        self.value = value;
        self
    }

    pub fn flags(mut self, flags: SliderFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn on_changed(mut self, callback: impl FnMut(f32) + 'static) -> Self {
        self.on_changed = Some(Box::new(callback));
        self
    }
}

impl Widget for FloatSlider {
    fn show(&mut self, ui: &mut dyn Frontend) {
        let changed = ui.slider_float(
            &self.label,
            &mut self.value,
            self.min,
            self.max,
            Self::FORMAT,
            self.flags,
        );
        if changed {
            if let Some(callback) = self.on_changed.as_mut() {
                callback(self.value);
            }
        }
    }
}

impl fmt::Debug for FloatSlider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FloatSlider")
            .field("label", &self.label)
            .field("value", &self.value)
            .field("range", &(self.min..=self.max))
            .finish_non_exhaustive()
    }
}
