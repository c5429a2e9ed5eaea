//! Flat style parameters mirrored to and from the host GUI library.
//!
//! Field names follow the host's style object one-to-one so a frontend can
//! copy them across without a lookup table. All fields default to the host's
//! stock dark style, and serde fills missing fields from those defaults, so a
//! theme file only needs to list what it changes.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use super::{Color, Vec2};

/// Cardinal direction, used for arrow and button placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dir {
    None,
    #[default]
    Left,
    Right,
    Up,
    Down,
}

bitflags! {
    /// Conditions under which an item counts as hovered.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct HoveredFlags: u32 {
        const CHILD_WINDOWS = 1 << 0;
        const ROOT_WINDOW = 1 << 1;
        const ANY_WINDOW = 1 << 2;
        const NO_POPUP_HIERARCHY = 1 << 3;
        const ALLOW_WHEN_BLOCKED_BY_POPUP = 1 << 5;
        const ALLOW_WHEN_BLOCKED_BY_ACTIVE_ITEM = 1 << 7;
        const ALLOW_WHEN_OVERLAPPED_BY_ITEM = 1 << 8;
        const ALLOW_WHEN_OVERLAPPED_BY_WINDOW = 1 << 9;
        const ALLOW_WHEN_DISABLED = 1 << 10;
        const NO_NAV_OVERRIDE = 1 << 11;
        const FOR_TOOLTIP = 1 << 12;
        const STATIONARY = 1 << 13;
        const DELAY_NONE = 1 << 14;
        const DELAY_SHORT = 1 << 15;
        const DELAY_NORMAL = 1 << 16;
        const NO_SHARED_DELAY = 1 << 17;
    }
}

/// Every sizing and behavior parameter of the host style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    pub alpha: f32,
    pub disabled_alpha: f32,
    pub window_padding: Vec2,
    pub window_rounding: f32,
    pub window_border_size: f32,
    pub window_min_size: Vec2,
    pub window_title_align: Vec2,
    pub window_menu_button_position: Dir,
    pub child_rounding: f32,
    pub child_border_size: f32,
    pub popup_rounding: f32,
    pub popup_border_size: f32,
    pub frame_padding: Vec2,
    pub frame_rounding: f32,
    pub frame_border_size: f32,
    pub item_spacing: Vec2,
    pub item_inner_spacing: Vec2,
    pub cell_padding: Vec2,
    pub touch_extra_padding: Vec2,
    pub indent_spacing: f32,
    pub columns_min_spacing: f32,
    pub scrollbar_size: f32,
    pub scrollbar_rounding: f32,
    pub grab_min_size: f32,
    pub grab_rounding: f32,
    pub log_slider_deadzone: f32,
    pub tab_rounding: f32,
    pub tab_border_size: f32,
    pub tab_min_width_for_close_button: f32,
    pub tab_bar_border_size: f32,
    /// Radians.
    pub table_angled_headers_angle: f32,
    pub table_angled_headers_text_align: Vec2,
    pub color_button_position: Dir,
    pub button_text_align: Vec2,
    pub selectable_text_align: Vec2,
    pub separator_text_border_size: f32,
    pub separator_text_align: Vec2,
    pub separator_text_padding: Vec2,
    pub display_window_padding: Vec2,
    pub display_safe_area_padding: Vec2,
    pub mouse_cursor_scale: f32,
    pub anti_aliased_lines: bool,
    pub anti_aliased_lines_use_tex: bool,
    pub anti_aliased_fill: bool,
    pub curve_tessellation_tol: f32,
    pub circle_tessellation_max_error: f32,
    /// Seconds.
    pub hover_stationary_delay: f32,
    pub hover_delay_short: f32,
    pub hover_delay_normal: f32,
    pub hover_flags_for_tooltip_mouse: HoveredFlags,
    pub hover_flags_for_tooltip_nav: HoveredFlags,
    pub colors: StyleColors,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            disabled_alpha: 0.6,
            window_padding: Vec2::new(8.0, 8.0),
            window_rounding: 0.0,
            window_border_size: 1.0,
            window_min_size: Vec2::new(32.0, 32.0),
            window_title_align: Vec2::new(0.0, 0.5),
            window_menu_button_position: Dir::Left,
            child_rounding: 0.0,
            child_border_size: 1.0,
            popup_rounding: 0.0,
            popup_border_size: 1.0,
            frame_padding: Vec2::new(4.0, 3.0),
            frame_rounding: 0.0,
            frame_border_size: 0.0,
            item_spacing: Vec2::new(8.0, 4.0),
            item_inner_spacing: Vec2::new(4.0, 4.0),
            cell_padding: Vec2::new(4.0, 2.0),
            touch_extra_padding: Vec2::ZERO,
            indent_spacing: 21.0,
            columns_min_spacing: 6.0,
            scrollbar_size: 14.0,
            scrollbar_rounding: 9.0,
            grab_min_size: 12.0,
            grab_rounding: 0.0,
            log_slider_deadzone: 4.0,
            tab_rounding: 4.0,
            tab_border_size: 0.0,
            tab_min_width_for_close_button: 0.0,
            tab_bar_border_size: 1.0,
            table_angled_headers_angle: 35.0_f32.to_radians(),
            table_angled_headers_text_align: Vec2::new(0.5, 0.0),
            color_button_position: Dir::Right,
            button_text_align: Vec2::new(0.5, 0.5),
            selectable_text_align: Vec2::ZERO,
            separator_text_border_size: 3.0,
            separator_text_align: Vec2::new(0.0, 0.5),
            separator_text_padding: Vec2::new(20.0, 3.0),
            display_window_padding: Vec2::new(19.0, 19.0),
            display_safe_area_padding: Vec2::new(3.0, 3.0),
            mouse_cursor_scale: 1.0,
            anti_aliased_lines: true,
            anti_aliased_lines_use_tex: true,
            anti_aliased_fill: true,
            curve_tessellation_tol: 1.25,
            circle_tessellation_max_error: 0.30,
            hover_stationary_delay: 0.15,
            hover_delay_short: 0.15,
            hover_delay_normal: 0.40,
            hover_flags_for_tooltip_mouse: HoveredFlags::STATIONARY
                | HoveredFlags::DELAY_SHORT
                | HoveredFlags::ALLOW_WHEN_DISABLED,
            hover_flags_for_tooltip_nav: HoveredFlags::NO_SHARED_DELAY
                | HoveredFlags::DELAY_NORMAL
                | HoveredFlags::ALLOW_WHEN_DISABLED,
            colors: StyleColors::dark(),
        }
    }
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn colors(mut self, colors: StyleColors) -> Self {
        self.colors = colors;
        self
    }

    /// Set every corner rounding at once.
    pub fn rounding(mut self, radius: f32) -> Self {
        self.window_rounding = radius;
        self.child_rounding = radius;
        self.popup_rounding = radius;
        self.frame_rounding = radius;
        self.scrollbar_rounding = radius;
        self.grab_rounding = radius;
        self.tab_rounding = radius;
        self
    }

    /// Multiply every size in place, like the host's own DPI scaling.
    pub fn scale_all_sizes(&mut self, factor: f32) {
        self.window_padding = self.window_padding * factor;
        self.window_rounding *= factor;
        self.window_min_size = self.window_min_size * factor;
        self.child_rounding *= factor;
        self.popup_rounding *= factor;
        self.frame_padding = self.frame_padding * factor;
        self.frame_rounding *= factor;
        self.item_spacing = self.item_spacing * factor;
        self.item_inner_spacing = self.item_inner_spacing * factor;
        self.cell_padding = self.cell_padding * factor;
        self.touch_extra_padding = self.touch_extra_padding * factor;
        self.indent_spacing *= factor;
        self.columns_min_spacing *= factor;
        self.scrollbar_size *= factor;
        self.scrollbar_rounding *= factor;
        self.grab_min_size *= factor;
        self.grab_rounding *= factor;
        self.log_slider_deadzone *= factor;
        self.tab_rounding *= factor;
        if self.tab_min_width_for_close_button != f32::MAX {
            self.tab_min_width_for_close_button *= factor;
        }
        self.separator_text_padding = self.separator_text_padding * factor;
        self.display_window_padding = self.display_window_padding * factor;
        self.display_safe_area_padding = self.display_safe_area_padding * factor;
        self.mouse_cursor_scale *= factor;
    }
}

/// The host style's color table, one field per slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleColors {
    pub text: Color,
    pub text_disabled: Color,
    pub window_bg: Color,
    pub child_bg: Color,
    pub popup_bg: Color,
    pub border: Color,
    pub border_shadow: Color,
    pub frame_bg: Color,
    pub frame_bg_hovered: Color,
    pub frame_bg_active: Color,
    pub title_bg: Color,
    pub title_bg_active: Color,
    pub title_bg_collapsed: Color,
    pub menu_bar_bg: Color,
    pub scrollbar_bg: Color,
    pub scrollbar_grab: Color,
    pub scrollbar_grab_hovered: Color,
    pub scrollbar_grab_active: Color,
    pub check_mark: Color,
    pub slider_grab: Color,
    pub slider_grab_active: Color,
    pub button: Color,
    pub button_hovered: Color,
    pub button_active: Color,
    pub header: Color,
    pub header_hovered: Color,
    pub header_active: Color,
    pub separator: Color,
    pub separator_hovered: Color,
    pub separator_active: Color,
    pub resize_grip: Color,
    pub resize_grip_hovered: Color,
    pub resize_grip_active: Color,
    pub tab: Color,
    pub tab_hovered: Color,
    pub tab_selected: Color,
    pub tab_selected_overline: Color,
    pub tab_dimmed: Color,
    pub tab_dimmed_selected: Color,
    pub tab_dimmed_selected_overline: Color,
    pub plot_lines: Color,
    pub plot_lines_hovered: Color,
    pub plot_histogram: Color,
    pub plot_histogram_hovered: Color,
    pub table_header_bg: Color,
    pub table_border_strong: Color,
    pub table_border_light: Color,
    pub table_row_bg: Color,
    pub table_row_bg_alt: Color,
    pub text_selected_bg: Color,
    pub drag_drop_target: Color,
    pub nav_highlight: Color,
    pub nav_windowing_highlight: Color,
    pub nav_windowing_dim_bg: Color,
    pub modal_window_dim_bg: Color,
}

impl Default for StyleColors {
    fn default() -> Self {
        Self::dark()
    }
}

const fn c(r: f32, g: f32, b: f32, a: f32) -> Color {
    Color::new(r, g, b, a)
}

impl StyleColors {
    /// The host library's stock dark palette.
    pub fn dark() -> Self {
        let header = c(0.26, 0.59, 0.98, 0.31);
        let header_hovered = c(0.26, 0.59, 0.98, 0.80);
        let header_active = c(0.26, 0.59, 0.98, 1.00);
        let title_bg = c(0.04, 0.04, 0.04, 1.00);
        let title_bg_active = c(0.16, 0.29, 0.48, 1.00);
        let border = c(0.43, 0.43, 0.50, 0.50);
        let tab = Color::lerp(header, title_bg_active, 0.80);
        let tab_selected = Color::lerp(header_active, title_bg_active, 0.60);

        Self {
            text: c(1.00, 1.00, 1.00, 1.00),
            text_disabled: c(0.50, 0.50, 0.50, 1.00),
            window_bg: c(0.06, 0.06, 0.06, 0.94),
            child_bg: c(0.00, 0.00, 0.00, 0.00),
            popup_bg: c(0.08, 0.08, 0.08, 0.94),
            border,
            border_shadow: c(0.00, 0.00, 0.00, 0.00),
            frame_bg: c(0.16, 0.29, 0.48, 0.54),
            frame_bg_hovered: c(0.26, 0.59, 0.98, 0.40),
            frame_bg_active: c(0.26, 0.59, 0.98, 0.67),
            title_bg,
            title_bg_active,
            title_bg_collapsed: c(0.00, 0.00, 0.00, 0.51),
            menu_bar_bg: c(0.14, 0.14, 0.14, 1.00),
            scrollbar_bg: c(0.02, 0.02, 0.02, 0.53),
            scrollbar_grab: c(0.31, 0.31, 0.31, 1.00),
            scrollbar_grab_hovered: c(0.41, 0.41, 0.41, 1.00),
            scrollbar_grab_active: c(0.51, 0.51, 0.51, 1.00),
            check_mark: c(0.26, 0.59, 0.98, 1.00),
            slider_grab: c(0.24, 0.52, 0.88, 1.00),
            slider_grab_active: c(0.26, 0.59, 0.98, 1.00),
            button: c(0.26, 0.59, 0.98, 0.40),
            button_hovered: c(0.26, 0.59, 0.98, 1.00),
            button_active: c(0.06, 0.53, 0.98, 1.00),
            header,
            header_hovered,
            header_active,
            separator: border,
            separator_hovered: c(0.10, 0.40, 0.75, 0.78),
            separator_active: c(0.10, 0.40, 0.75, 1.00),
            resize_grip: c(0.26, 0.59, 0.98, 0.20),
            resize_grip_hovered: c(0.26, 0.59, 0.98, 0.67),
            resize_grip_active: c(0.26, 0.59, 0.98, 0.95),
            tab,
            tab_hovered: header_hovered,
            tab_selected,
            tab_selected_overline: header_active,
            tab_dimmed: Color::lerp(tab, title_bg, 0.80),
            tab_dimmed_selected: Color::lerp(tab_selected, title_bg, 0.40),
            tab_dimmed_selected_overline: c(0.50, 0.50, 0.50, 0.00),
            plot_lines: c(0.61, 0.61, 0.61, 1.00),
            plot_lines_hovered: c(1.00, 0.43, 0.35, 1.00),
            plot_histogram: c(0.90, 0.70, 0.00, 1.00),
            plot_histogram_hovered: c(1.00, 0.60, 0.00, 1.00),
            table_header_bg: c(0.19, 0.19, 0.20, 1.00),
            table_border_strong: c(0.31, 0.31, 0.35, 1.00),
            table_border_light: c(0.23, 0.23, 0.25, 1.00),
            table_row_bg: c(0.00, 0.00, 0.00, 0.00),
            table_row_bg_alt: c(1.00, 1.00, 1.00, 0.06),
            text_selected_bg: c(0.26, 0.59, 0.98, 0.35),
            drag_drop_target: c(1.00, 1.00, 0.00, 0.90),
            nav_highlight: c(0.26, 0.59, 0.98, 1.00),
            nav_windowing_highlight: c(1.00, 1.00, 1.00, 0.70),
            nav_windowing_dim_bg: c(0.80, 0.80, 0.80, 0.20),
            modal_window_dim_bg: c(0.80, 0.80, 0.80, 0.35),
        }
    }

    /// The host library's stock light palette.
    pub fn light() -> Self {
        let header = c(0.26, 0.59, 0.98, 0.31);
        let header_hovered = c(0.26, 0.59, 0.98, 0.80);
        let header_active = c(0.26, 0.59, 0.98, 1.00);
        let title_bg = c(0.96, 0.96, 0.96, 1.00);
        let title_bg_active = c(0.82, 0.82, 0.82, 1.00);
        let tab = Color::lerp(header, title_bg_active, 0.90);
        let tab_selected = Color::lerp(header_active, title_bg_active, 0.60);

        Self {
            text: c(0.00, 0.00, 0.00, 1.00),
            text_disabled: c(0.60, 0.60, 0.60, 1.00),
            window_bg: c(0.94, 0.94, 0.94, 1.00),
            child_bg: c(0.00, 0.00, 0.00, 0.00),
            popup_bg: c(1.00, 1.00, 1.00, 0.98),
            border: c(0.00, 0.00, 0.00, 0.30),
            border_shadow: c(0.00, 0.00, 0.00, 0.00),
            frame_bg: c(1.00, 1.00, 1.00, 1.00),
            frame_bg_hovered: c(0.26, 0.59, 0.98, 0.40),
            frame_bg_active: c(0.26, 0.59, 0.98, 0.67),
            title_bg,
            title_bg_active,
            title_bg_collapsed: c(1.00, 1.00, 1.00, 0.51),
            menu_bar_bg: c(0.86, 0.86, 0.86, 1.00),
            scrollbar_bg: c(0.98, 0.98, 0.98, 0.53),
            scrollbar_grab: c(0.69, 0.69, 0.69, 0.80),
            scrollbar_grab_hovered: c(0.49, 0.49, 0.49, 0.80),
            scrollbar_grab_active: c(0.49, 0.49, 0.49, 1.00),
            check_mark: c(0.26, 0.59, 0.98, 1.00),
            slider_grab: c(0.26, 0.59, 0.98, 0.78),
            slider_grab_active: c(0.46, 0.54, 0.80, 0.60),
            button: c(0.26, 0.59, 0.98, 0.40),
            button_hovered: c(0.26, 0.59, 0.98, 1.00),
            button_active: c(0.06, 0.53, 0.98, 1.00),
            header,
            header_hovered,
            header_active,
            separator: c(0.39, 0.39, 0.39, 0.62),
            separator_hovered: c(0.14, 0.44, 0.80, 0.78),
            separator_active: c(0.14, 0.44, 0.80, 1.00),
            resize_grip: c(0.35, 0.35, 0.35, 0.17),
            resize_grip_hovered: c(0.26, 0.59, 0.98, 0.67),
            resize_grip_active: c(0.26, 0.59, 0.98, 0.95),
            tab,
            tab_hovered: header_hovered,
            tab_selected,
            tab_selected_overline: header_active,
            tab_dimmed: Color::lerp(tab, title_bg, 0.80),
            tab_dimmed_selected: Color::lerp(tab_selected, title_bg, 0.40),
            tab_dimmed_selected_overline: c(0.26, 0.59, 1.00, 1.00),
            plot_lines: c(0.39, 0.39, 0.39, 1.00),
            plot_lines_hovered: c(1.00, 0.43, 0.35, 1.00),
            plot_histogram: c(0.90, 0.70, 0.00, 1.00),
            plot_histogram_hovered: c(1.00, 0.45, 0.00, 1.00),
            table_header_bg: c(0.78, 0.87, 0.98, 1.00),
            table_border_strong: c(0.57, 0.57, 0.64, 1.00),
            table_border_light: c(0.68, 0.68, 0.74, 1.00),
            table_row_bg: c(0.00, 0.00, 0.00, 0.00),
            table_row_bg_alt: c(0.30, 0.30, 0.30, 0.09),
            text_selected_bg: c(0.26, 0.59, 0.98, 0.35),
            drag_drop_target: c(0.26, 0.59, 0.98, 0.95),
            nav_highlight: header_hovered,
            nav_windowing_highlight: c(0.70, 0.70, 0.70, 0.70),
            nav_windowing_dim_bg: c(0.20, 0.20, 0.20, 0.20),
            modal_window_dim_bg: c(0.20, 0.20, 0.20, 0.35),
        }
    }
}
