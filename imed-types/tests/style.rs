use imed_types::{CodeStyle, Color, Dir, HoveredFlags, Style, StyleColors, Vec2};

// ============================================================================
// Vec2
// ============================================================================

#[test]
fn test_vec2_arithmetic() {
    let a = Vec2::new(3.0, 4.0);
    let b = Vec2::new(1.0, 2.0);
    assert_eq!(a + b, Vec2::new(4.0, 6.0));
    assert_eq!(a - b, Vec2::new(2.0, 2.0));
    assert_eq!(a * b, Vec2::new(3.0, 8.0));
    assert_eq!(a / b, Vec2::new(3.0, 2.0));
    assert_eq!(a * 2.0, Vec2::new(6.0, 8.0));
    assert_eq!(a / 2.0, Vec2::new(1.5, 2.0));
    assert_eq!(-a, Vec2::new(-3.0, -4.0));
}

#[test]
fn test_vec2_metrics() {
    let a = Vec2::new(3.0, 4.0);
    assert_eq!(a.length(), 5.0);
    assert_eq!(a.dot(Vec2::new(1.0, 1.0)), 7.0);
    assert_eq!(Vec2::ZERO.dist(a), 5.0);
    assert_eq!(a.to_string(), "3, 4");
}

// ============================================================================
// Style defaults
// ============================================================================

#[test]
fn test_default_style_matches_stock_dark() {
    let style = Style::default();
    assert_eq!(style.alpha, 1.0);
    assert_eq!(style.window_padding, Vec2::new(8.0, 8.0));
    assert_eq!(style.window_menu_button_position, Dir::Left);
    assert_eq!(style.color_button_position, Dir::Right);
    assert!(style
        .hover_flags_for_tooltip_mouse
        .contains(HoveredFlags::STATIONARY | HoveredFlags::DELAY_SHORT));
    assert_eq!(style.colors, StyleColors::dark());
    assert_eq!(style.colors.separator, style.colors.border);
}

#[test]
fn test_dark_and_light_differ() {
    let dark = StyleColors::dark();
    let light = StyleColors::light();
    assert_eq!(dark.text, Color::WHITE);
    assert_eq!(light.text, Color::BLACK);
    assert_ne!(dark.window_bg, light.window_bg);
}

#[test]
fn test_rounding_sets_all_corners() {
    let style = Style::new().rounding(6.0);
    assert_eq!(style.window_rounding, 6.0);
    assert_eq!(style.frame_rounding, 6.0);
    assert_eq!(style.tab_rounding, 6.0);
}

#[test]
fn test_scale_all_sizes() {
    let mut style = Style::default();
    style.scale_all_sizes(2.0);
    assert_eq!(style.window_padding, Vec2::new(16.0, 16.0));
    assert_eq!(style.scrollbar_size, 28.0);
    // colors and alpha are not sizes
    assert_eq!(style.alpha, 1.0);
}

// ============================================================================
// Serde
// ============================================================================

#[test]
fn test_style_json_is_stable() {
    let json = serde_json::to_string(&Style::default()).unwrap();
    let parsed: Style = serde_json::from_str(&json).unwrap();
    assert_eq!(serde_json::to_string(&parsed).unwrap(), json);
    assert_eq!(parsed.window_padding, Vec2::new(8.0, 8.0));
}

#[test]
fn test_style_colors_serialize_as_hex() {
    let json = serde_json::to_value(StyleColors::dark()).unwrap();
    assert_eq!(json["text"], "#FFFFFFFF");
}

#[test]
fn test_partial_style_uses_defaults() {
    let json = r##"{
        "alpha": 0.5,
        "window_padding": [2.0, 3.0],
        "colors": { "text": "rgb(1, 0, 0)", "window_bg": "#101010" }
    }"##;
    let style: Style = serde_json::from_str(json).unwrap();
    assert_eq!(style.alpha, 0.5);
    assert_eq!(style.window_padding, Vec2::new(2.0, 3.0));
    assert_eq!(style.colors.text, Color::rgb(1.0, 0.0, 0.0));
    assert_eq!(style.colors.window_bg.to_rgba_u32(), 0x101010FF);
    assert_eq!(style.colors.button, StyleColors::dark().button);
    assert_eq!(style.frame_padding, Style::default().frame_padding);
}

#[test]
fn test_invalid_color_in_theme_is_rejected() {
    let json = r#"{ "text": "rgba(1,2,3)" }"#;
    assert!(serde_json::from_str::<StyleColors>(json).is_err());
}

#[test]
fn test_code_style_disabled_variants_are_dimmed() {
    let code = CodeStyle::default();
    assert_eq!(code.keyword_disabled.a, code.keyword.a * 0.5);
    assert_eq!(code.keyword_disabled.r, code.keyword.r);
}
