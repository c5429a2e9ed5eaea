mod code_style;
mod color;
mod style;
mod vec2;

pub use code_style::CodeStyle;
pub use self::color::{Color, ColorParseError};
pub use style::{Dir, HoveredFlags, Style, StyleColors};
pub use vec2::Vec2;
