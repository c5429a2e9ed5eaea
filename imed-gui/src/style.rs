//! Mirroring [`Style`] to and from the frontend.

use imed_types::Style;

use crate::frontend::Frontend;

pub trait StyleExt {
    /// Make this the frontend's active style.
    fn apply(&self, ui: &mut dyn Frontend);

    /// The frontend's active style.
    fn current(ui: &dyn Frontend) -> Self;
}

impl StyleExt for Style {
    fn apply(&self, ui: &mut dyn Frontend) {
        ui.set_style(self);
    }

    fn current(ui: &dyn Frontend) -> Self {
        ui.style()
    }
}
