//! [`Frontend`] on top of the `imgui` crate.
//!
//! ```rust,ignore
//! let ui = imgui_ctx.new_frame();
//! let mut frontend = ImguiFrontend::new(ui);
//! root.show(&mut frontend);
//! let pending = frontend.take_pending_style();
//! // after the frame
//! if let Some(style) = pending {
//!     apply_style(&style, imgui_ctx.style_mut());
//! }
//! ```

use imed_types::{Color, Style, Vec2};
use log::debug;

use crate::flags::{InputTextFlags, SliderFlags, TabBarFlags, TabItemFlags};
use crate::frontend::{Body, Frontend, TextureId};
use crate::widgets::truncate_to;

/// Forwards widget calls to an `imgui::Ui` for one frame.
///
/// The style can only be replaced between frames, so [`set_style`] parks it
/// until the host collects it with [`take_pending_style`].
///
/// [`set_style`]: Frontend::set_style
/// [`take_pending_style`]: ImguiFrontend::take_pending_style
pub struct ImguiFrontend<'ui> {
    ui: &'ui imgui::Ui,
    pending_style: Option<Style>,
}

impl<'ui> ImguiFrontend<'ui> {
    pub fn new(ui: &'ui imgui::Ui) -> Self {
        Self {
            ui,
            pending_style: None,
        }
    }

    pub fn ui(&self) -> &'ui imgui::Ui {
        self.ui
    }

    pub fn take_pending_style(&mut self) -> Option<Style> {
        self.pending_style.take()
    }
}

fn texture(id: TextureId) -> imgui::TextureId {
    imgui::TextureId::new(id.0)
}

fn size(size: Vec2) -> [f32; 2] {
    [size.x, size.y]
}

impl Frontend for ImguiFrontend<'_> {
    fn text(&mut self, text: &str) {
        self.ui.text(text);
    }

    fn bullet_text(&mut self, text: &str) {
        self.ui.bullet_text(text);
    }

    fn separator(&mut self) {
        self.ui.separator();
    }

    fn separator_text(&mut self, label: &str) {
        self.ui.text_disabled(label);
        self.ui.separator();
    }

    fn same_line(&mut self) {
        self.ui.same_line();
    }

    fn input_text(
        &mut self,
        label: &str,
        buffer: &mut String,
        capacity: usize,
        flags: InputTextFlags,
    ) -> bool {
        let changed = self
            .ui
            .input_text(label, buffer)
            .flags(input_flags(flags))
            .build();
        truncate_to(buffer, capacity);
        changed
    }

    fn input_text_multiline(
        &mut self,
        label: &str,
        buffer: &mut String,
        capacity: usize,
        area: Vec2,
        flags: InputTextFlags,
    ) -> bool {
        let changed = self
            .ui
            .input_text_multiline(label, buffer, size(area))
            .flags(input_flags(flags))
            .build();
        truncate_to(buffer, capacity);
        changed
    }

    fn input_int(
        &mut self,
        label: &str,
        value: &mut i32,
        step: i32,
        step_fast: i32,
        flags: InputTextFlags,
    ) -> bool {
        self.ui
            .input_int(label, value)
            .step(step)
            .step_fast(step_fast)
            .flags(input_flags(flags))
            .build()
    }

    fn input_float(
        &mut self,
        label: &str,
        value: &mut f32,
        step: f32,
        step_fast: f32,
        format: &str,
        flags: InputTextFlags,
    ) -> bool {
        self.ui
            .input_float(label, value)
            .step(step)
            .step_fast(step_fast)
            .display_format(format)
            .flags(input_flags(flags))
            .build()
    }

    fn slider_int(
        &mut self,
        label: &str,
        value: &mut i32,
        min: i32,
        max: i32,
        format: &str,
        flags: SliderFlags,
    ) -> bool {
        self.ui
            .slider_config(label, min, max)
            .display_format(format)
            .flags(slider_flags(flags))
            .build(value)
    }

    fn slider_float(
        &mut self,
        label: &str,
        value: &mut f32,
        min: f32,
        max: f32,
        format: &str,
        flags: SliderFlags,
    ) -> bool {
        self.ui
            .slider_config(label, min, max)
            .display_format(format)
            .flags(slider_flags(flags))
            .build(value)
    }

    fn button(&mut self, label: &str, area: Vec2) -> bool {
        self.ui.button_with_size(label, size(area))
    }

    fn image_button(&mut self, id: &str, image: TextureId, area: Vec2) -> bool {
        self.ui.image_button(id, texture(image), size(area))
    }

    fn image(&mut self, image: TextureId, area: Vec2) {
        self.ui.image_config(texture(image), size(area)).build();
    }

    fn menu_item(&mut self, label: &str, shortcut: &str, selected: bool, enabled: bool) -> bool {
        let mut item = self
            .ui
            .menu_item_config(label)
            .selected(selected)
            .enabled(enabled);
        if !shortcut.is_empty() {
            item = item.shortcut(shortcut);
        }
        item.build()
    }

    fn menu(&mut self, label: &str, enabled: bool, body: Body<'_>) -> bool {
        let ui = self.ui;
        match ui.begin_menu_with_enabled(label, enabled) {
            Some(_token) => {
                body(self);
                true
            }
            None => false,
        }
    }

    fn menu_bar(&mut self, body: Body<'_>) -> bool {
        let ui = self.ui;
        match ui.begin_menu_bar() {
            Some(_token) => {
                body(self);
                true
            }
            None => false,
        }
    }

    fn main_menu_bar(&mut self, body: Body<'_>) -> bool {
        let ui = self.ui;
        match ui.begin_main_menu_bar() {
            Some(_token) => {
                body(self);
                true
            }
            None => false,
        }
    }

    fn tab_bar(&mut self, id: &str, flags: TabBarFlags, body: Body<'_>) -> bool {
        let ui = self.ui;
        match ui.tab_bar_with_flags(id, tab_bar_flags(flags)) {
            Some(_token) => {
                body(self);
                true
            }
            None => false,
        }
    }

    fn tab_item(
        &mut self,
        label: &str,
        open: Option<&mut bool>,
        flags: TabItemFlags,
        body: Body<'_>,
    ) -> bool {
        let ui = self.ui;
        match ui.tab_item_with_flags(label, open, tab_item_flags(flags)) {
            Some(_token) => {
                body(self);
                true
            }
            None => false,
        }
    }

    fn columns(&mut self, count: usize) {
        let count = i32::try_from(count).unwrap_or(i32::MAX);
        self.ui.columns(count, "##columns", false);
    }

    fn next_column(&mut self) {
        self.ui.next_column();
    }

    fn tree_node(&mut self, label: &str, body: Body<'_>) -> bool {
        let ui = self.ui;
        match ui.tree_node(label) {
            Some(_token) => {
                body(self);
                true
            }
            None => false,
        }
    }

    fn tree_leaf(&mut self, label: &str) -> bool {
        // no tree push, so the token has nothing to pop
        let _token = self
            .ui
            .tree_node_config(label)
            .flags(imgui::TreeNodeFlags::LEAF | imgui::TreeNodeFlags::NO_TREE_PUSH_ON_OPEN)
            .push();
        self.ui.is_item_clicked()
    }

    fn style(&self) -> Style {
        style_from_imgui(&self.ui.clone_style())
    }

    fn set_style(&mut self, style: &Style) {
        debug!("style change queued for the next frame");
        self.pending_style = Some(style.clone());
    }
}

macro_rules! map_flags {
    ($name:ident, $from:ty => $to:ty { $($flag:ident),+ $(,)? }) => {
        fn $name(flags: $from) -> $to {
            let mut out = <$to>::empty();
            $(
                if flags.contains(<$from>::$flag) {
                    out |= <$to>::$flag;
                }
            )+
            out
        }
    };
}

map_flags!(input_flags, InputTextFlags => imgui::InputTextFlags {
    CHARS_DECIMAL,
    CHARS_HEXADECIMAL,
    CHARS_SCIENTIFIC,
    CHARS_UPPERCASE,
    CHARS_NO_BLANK,
    ALLOW_TAB_INPUT,
    ENTER_RETURNS_TRUE,
    CTRL_ENTER_FOR_NEW_LINE,
    READ_ONLY,
    PASSWORD,
    AUTO_SELECT_ALL,
    NO_UNDO_REDO,
});

map_flags!(slider_flags, SliderFlags => imgui::SliderFlags {
    ALWAYS_CLAMP,
    LOGARITHMIC,
    NO_ROUND_TO_FORMAT,
    NO_INPUT,
});

map_flags!(tab_bar_flags, TabBarFlags => imgui::TabBarFlags {
    REORDERABLE,
    AUTO_SELECT_NEW_TABS,
    TAB_LIST_POPUP_BUTTON,
    NO_CLOSE_WITH_MIDDLE_MOUSE_BUTTON,
    NO_TAB_LIST_SCROLLING_BUTTONS,
    NO_TOOLTIP,
    FITTING_POLICY_RESIZE_DOWN,
    FITTING_POLICY_SCROLL,
});

map_flags!(tab_item_flags, TabItemFlags => imgui::TabItemFlags {
    UNSAVED_DOCUMENT,
    SET_SELECTED,
    NO_CLOSE_WITH_MIDDLE_MOUSE_BUTTON,
    NO_PUSH_ID,
    NO_TOOLTIP,
    NO_REORDER,
    LEADING,
    TRAILING,
});

macro_rules! style_mapping {
    (
        sizes { $($size:ident),+ $(,)? }
        vecs { $($vec:ident),+ $(,)? }
        colors { $($color:ident => $slot:ident),+ $(,)? }
    ) => {
        /// Copy `style` into an imgui style. Fields imgui lacks are ignored.
        pub fn apply_style(style: &Style, target: &mut imgui::Style) {
            $(target.$size = style.$size;)+
            $(target.$vec = [style.$vec.x, style.$vec.y];)+
            $(target[imgui::StyleColor::$slot] = style.colors.$color.to_array();)+
        }

        /// Read an imgui style. Fields imgui lacks keep their defaults.
        pub fn style_from_imgui(source: &imgui::Style) -> Style {
            let mut style = Style::default();
            $(style.$size = source.$size;)+
            $(style.$vec = Vec2::new(source.$vec[0], source.$vec[1]);)+
            $(style.colors.$color = Color::from(source[imgui::StyleColor::$slot]);)+
            style
        }
    };
}

style_mapping! {
    sizes {
        alpha,
        disabled_alpha,
        window_rounding,
        window_border_size,
        child_rounding,
        child_border_size,
        popup_rounding,
        popup_border_size,
        frame_rounding,
        frame_border_size,
        indent_spacing,
        columns_min_spacing,
        scrollbar_size,
        scrollbar_rounding,
        grab_min_size,
        grab_rounding,
        log_slider_deadzone,
        tab_rounding,
        tab_border_size,
        tab_min_width_for_close_button,
        mouse_cursor_scale,
        anti_aliased_lines,
        anti_aliased_lines_use_tex,
        anti_aliased_fill,
        curve_tessellation_tol,
    }
    vecs {
        window_padding,
        window_min_size,
        window_title_align,
        frame_padding,
        item_spacing,
        item_inner_spacing,
        cell_padding,
        touch_extra_padding,
        button_text_align,
        selectable_text_align,
        display_window_padding,
        display_safe_area_padding,
    }
    colors {
        text => Text,
        text_disabled => TextDisabled,
        window_bg => WindowBg,
        child_bg => ChildBg,
        popup_bg => PopupBg,
        border => Border,
        border_shadow => BorderShadow,
        frame_bg => FrameBg,
        frame_bg_hovered => FrameBgHovered,
        frame_bg_active => FrameBgActive,
        title_bg => TitleBg,
        title_bg_active => TitleBgActive,
        title_bg_collapsed => TitleBgCollapsed,
        menu_bar_bg => MenuBarBg,
        scrollbar_bg => ScrollbarBg,
        scrollbar_grab => ScrollbarGrab,
        scrollbar_grab_hovered => ScrollbarGrabHovered,
        scrollbar_grab_active => ScrollbarGrabActive,
        check_mark => CheckMark,
        slider_grab => SliderGrab,
        slider_grab_active => SliderGrabActive,
        button => Button,
        button_hovered => ButtonHovered,
        button_active => ButtonActive,
        header => Header,
        header_hovered => HeaderHovered,
        header_active => HeaderActive,
        separator => Separator,
        separator_hovered => SeparatorHovered,
        separator_active => SeparatorActive,
        resize_grip => ResizeGrip,
        resize_grip_hovered => ResizeGripHovered,
        resize_grip_active => ResizeGripActive,
        tab => Tab,
        tab_hovered => TabHovered,
        tab_selected => TabActive,
        tab_dimmed => TabUnfocused,
        tab_dimmed_selected => TabUnfocusedActive,
        plot_lines => PlotLines,
        plot_lines_hovered => PlotLinesHovered,
        plot_histogram => PlotHistogram,
        plot_histogram_hovered => PlotHistogramHovered,
        table_header_bg => TableHeaderBg,
        table_border_strong => TableBorderStrong,
        table_border_light => TableBorderLight,
        table_row_bg => TableRowBg,
        table_row_bg_alt => TableRowBgAlt,
        text_selected_bg => TextSelectedBg,
        drag_drop_target => DragDropTarget,
        nav_highlight => NavHighlight,
        nav_windowing_highlight => NavWindowingHighlight,
        nav_windowing_dim_bg => NavWindowingDimBg,
        modal_window_dim_bg => ModalWindowDimBg,
    }
}
