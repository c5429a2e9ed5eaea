use serde::{Deserialize, Serialize};

use super::Color;

/// Syntax highlighting palette for code views.
///
/// Every token class has a normal and a disabled variant; the disabled one is
/// used for code that is compiled out or otherwise inactive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodeStyle {
    pub background: Color,
    pub background_selected: Color,

    pub default_text: Color,
    pub disabled_text: Color,

    pub keyword: Color,
    pub keyword_disabled: Color,
    pub type_name: Color,
    pub type_name_disabled: Color,
    pub constant: Color,
    pub constant_disabled: Color,
    pub variable: Color,
    pub variable_disabled: Color,
    pub member: Color,
    pub member_disabled: Color,
    pub function: Color,
    pub function_disabled: Color,
    pub member_function: Color,
    pub member_function_disabled: Color,
    pub preprocessor: Color,
    pub preprocessor_disabled: Color,

    pub numeric_literal: Color,
    pub numeric_literal_disabled: Color,
    pub char_literal: Color,
    pub char_literal_disabled: Color,
    pub string_literal: Color,
    pub string_literal_disabled: Color,
    pub string_escape: Color,
    pub string_escape_disabled: Color,
}

impl CodeStyle {
    /// Dim an enabled color into its disabled variant.
    fn dimmed(color: Color) -> Color {
        color.with_alpha(color.a * 0.5)
    }

    pub fn dark() -> Self {
        let keyword = Color::from_rgba_u32(0x569CD6FF);
        let type_name = Color::from_rgba_u32(0x4EC9B0FF);
        let constant = Color::from_rgba_u32(0x4FC1FFFF);
        let variable = Color::from_rgba_u32(0x9CDCFEFF);
        let member = Color::from_rgba_u32(0x9CDCFEFF);
        let function = Color::from_rgba_u32(0xDCDCAAFF);
        let member_function = Color::from_rgba_u32(0xDCDCAAFF);
        let preprocessor = Color::from_rgba_u32(0xC586C0FF);
        let numeric_literal = Color::from_rgba_u32(0xB5CEA8FF);
        let char_literal = Color::from_rgba_u32(0xCE9178FF);
        let string_literal = Color::from_rgba_u32(0xCE9178FF);
        let string_escape = Color::from_rgba_u32(0xD7BA7DFF);

        Self {
            background: Color::from_rgba_u32(0x1E1E1EFF),
            background_selected: Color::from_rgba_u32(0x264F78FF),
            default_text: Color::from_rgba_u32(0xD4D4D4FF),
            disabled_text: Color::from_rgba_u32(0x808080FF),
            keyword,
            keyword_disabled: Self::dimmed(keyword),
            type_name,
            type_name_disabled: Self::dimmed(type_name),
            constant,
            constant_disabled: Self::dimmed(constant),
            variable,
            variable_disabled: Self::dimmed(variable),
            member,
            member_disabled: Self::dimmed(member),
            function,
            function_disabled: Self::dimmed(function),
            member_function,
            member_function_disabled: Self::dimmed(member_function),
            preprocessor,
            preprocessor_disabled: Self::dimmed(preprocessor),
            numeric_literal,
            numeric_literal_disabled: Self::dimmed(numeric_literal),
            char_literal,
            char_literal_disabled: Self::dimmed(char_literal),
            string_literal,
            string_literal_disabled: Self::dimmed(string_literal),
            string_escape,
            string_escape_disabled: Self::dimmed(string_escape),
        }
    }
}

impl Default for CodeStyle {
    fn default() -> Self {
        Self::dark()
    }
}
