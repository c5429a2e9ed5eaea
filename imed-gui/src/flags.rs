//! Widget option flags. Bit values follow Dear ImGui's enums; frontends map
//! them onto whatever their host version uses.

use bitflags::bitflags;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct InputTextFlags: u32 {
        const CHARS_DECIMAL = 1 << 0;
        const CHARS_HEXADECIMAL = 1 << 1;
        const CHARS_SCIENTIFIC = 1 << 2;
        const CHARS_UPPERCASE = 1 << 3;
        const CHARS_NO_BLANK = 1 << 4;
        const ALLOW_TAB_INPUT = 1 << 5;
        const ENTER_RETURNS_TRUE = 1 << 6;
        const CTRL_ENTER_FOR_NEW_LINE = 1 << 8;
        const READ_ONLY = 1 << 9;
        const PASSWORD = 1 << 10;
        const AUTO_SELECT_ALL = 1 << 12;
        const NO_UNDO_REDO = 1 << 16;
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct SliderFlags: u32 {
        const ALWAYS_CLAMP = 1 << 4;
        const LOGARITHMIC = 1 << 5;
        const NO_ROUND_TO_FORMAT = 1 << 6;
        const NO_INPUT = 1 << 7;
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct TabBarFlags: u32 {
        const REORDERABLE = 1 << 0;
        const AUTO_SELECT_NEW_TABS = 1 << 1;
        const TAB_LIST_POPUP_BUTTON = 1 << 2;
        const NO_CLOSE_WITH_MIDDLE_MOUSE_BUTTON = 1 << 3;
        const NO_TAB_LIST_SCROLLING_BUTTONS = 1 << 4;
        const NO_TOOLTIP = 1 << 5;
        const FITTING_POLICY_RESIZE_DOWN = 1 << 7;
        const FITTING_POLICY_SCROLL = 1 << 8;
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct TabItemFlags: u32 {
        const UNSAVED_DOCUMENT = 1 << 0;
        const SET_SELECTED = 1 << 1;
        const NO_CLOSE_WITH_MIDDLE_MOUSE_BUTTON = 1 << 2;
        const NO_PUSH_ID = 1 << 3;
        const NO_TOOLTIP = 1 << 4;
        const NO_REORDER = 1 << 5;
        const LEADING = 1 << 6;
        const TRAILING = 1 << 7;
    }
}
