//! The widget trait.

use crate::frontend::Frontend;

/// Something that draws itself each frame.
///
/// Widgets keep their own state (text buffers, values, open flags) between
/// frames; `show` forwards that state to the frontend and writes back what
/// the user changed.
pub trait Widget {
    fn show(&mut self, ui: &mut dyn Frontend);
}

/// Wraps a closure so it can sit in a container next to other widgets.
pub struct Custom<F>(pub F);

impl<F: FnMut(&mut dyn Frontend)> Widget for Custom<F> {
    fn show(&mut self, ui: &mut dyn Frontend) {
        (self.0)(ui);
    }
}
