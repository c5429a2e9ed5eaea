use imed_types::{Color, ColorParseError};

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

fn approx_color(a: Color, b: Color) -> bool {
    approx(a.r, b.r) && approx(a.g, b.g) && approx(a.b, b.b) && approx(a.a, b.a)
}

// ============================================================================
// Packed values and formatting
// ============================================================================

#[test]
fn test_from_rgba_u32() {
    let color = Color::from_rgba_u32(0xFF000080);
    assert_eq!(color.r, 1.0);
    assert_eq!(color.g, 0.0);
    assert_eq!(color.b, 0.0);
    assert!(approx(color.a, 128.0 / 255.0));
}

#[test]
fn test_display_is_uppercase_rrggbbaa() {
    assert_eq!(Color::from_rgba_u32(0x12ab34cd).to_string(), "#12AB34CD");
    assert_eq!(Color::WHITE.to_string(), "#FFFFFFFF");
    assert_eq!(Color::TRANSPARENT.to_string(), "#00000000");
}

#[test]
fn test_to_rgba_u32_clamps_out_of_range() {
    assert_eq!(Color::new(2.0, -1.0, 0.5, 1.0).to_rgba_u32(), 0xFF0080FF);
}

#[test]
fn test_format_then_parse_reconstructs_hex_color() {
    for packed in [0x00000000, 0xFFFFFFFF, 0x12345678, 0x80FF01C0, 0xDEADBEEF] {
        let color = Color::from_rgba_u32(packed);
        let parsed = Color::parse(&format!("{color}")).unwrap();
        assert_eq!(parsed, color);
        assert_eq!(parsed.to_rgba_u32(), packed);
    }
}

#[test]
fn test_format_then_parse_arbitrary_color_is_equivalent() {
    let color = Color::new(0.2, 0.4, 0.6, 0.8);
    let parsed = Color::parse(&color.to_string()).unwrap();
    assert_eq!(parsed.to_rgba_u32(), color.to_rgba_u32());
}

// ============================================================================
// Hex literals
// ============================================================================

#[test]
fn test_parse_hex_forms() {
    assert_eq!(Color::parse("#FF8000FF"), Some(Color::from_rgba_u32(0xFF8000FF)));
    assert_eq!(Color::parse("#ff8000"), Some(Color::from_rgba_u32(0xFF8000FF)));
    assert_eq!(Color::parse("#F80"), Some(Color::from_rgba_u32(0xFF8800FF)));
    assert_eq!(Color::parse("#F808"), Some(Color::from_rgba_u32(0xFF880088)));
    assert_eq!(Color::parse("  #000000FF  "), Some(Color::BLACK));
}

#[test]
fn test_parse_hex_rejects_garbage() {
    assert_eq!(Color::parse("#"), None);
    assert_eq!(Color::parse("#12345"), None);
    assert_eq!(Color::parse("#GGGGGG"), None);
    assert_eq!(Color::parse("#+1234567"), None);
    assert_eq!(Color::parse("#123456789"), None);
}

// ============================================================================
// Functional literals
// ============================================================================

#[test]
fn test_parse_rgb_takes_components_as_is() {
    assert_eq!(Color::parse("rgb(1, 0.5, 0)"), Some(Color::rgb(1.0, 0.5, 0.0)));
    assert_eq!(Color::parse("rgb(1,2,3)"), Some(Color::rgb(1.0, 2.0, 3.0)));
    assert_eq!(
        Color::parse("rgba(0.1, 0.2, 0.3, 0.4)"),
        Some(Color::new(0.1, 0.2, 0.3, 0.4))
    );
}

#[test]
fn test_parse_wrong_arity_is_none() {
    assert_eq!(Color::parse("rgba(1,2,3)"), None);
    assert_eq!(Color::parse("rgb(1,2,3,4)"), None);
    assert_eq!(Color::parse("hsla(0, 100%, 50%)"), None);
    assert_eq!(Color::parse("hsl(0, 100%)"), None);
    assert_eq!(Color::parse("rgb()"), None);
}

#[test]
fn test_parse_non_numeric_token_is_none() {
    assert_eq!(Color::parse("rgb(1, x, 0)"), None);
    assert_eq!(Color::parse("rgba(1, 1, 1, half)"), None);
    assert_eq!(Color::parse("hsl(red, 100%, 50%)"), None);
}

#[test]
fn test_parse_hsl_goes_through_hsv() {
    let red = Color::parse("hsl(0, 100%, 100%)").unwrap();
    assert!(approx_color(red, Color::rgb(1.0, 0.0, 0.0)));

    // third token is value, not lightness
    let green = Color::parse("hsl(120, 100%, 50%)").unwrap();
    assert!(approx_color(green, Color::rgb(0.0, 0.5, 0.0)));
    assert_eq!(green, Color::from_hsv(120.0, 1.0, 0.5, 1.0));

    let blue = Color::parse("hsla(240, 100%, 100%, 0.5)").unwrap();
    assert!(approx_color(blue, Color::new(0.0, 0.0, 1.0, 0.5)));

    let gray = Color::parse("hsl(200, 0%, 50%)").unwrap();
    assert!(approx_color(gray, Color::rgb(0.5, 0.5, 0.5)));
}

#[test]
fn test_parse_hsl_without_percent_sign_is_still_percent() {
    let with_sign = Color::parse("hsl(120, 100%, 50%)").unwrap();
    let without = Color::parse("hsl(120, 100, 50)").unwrap();
    assert_eq!(with_sign, without);
    assert!(approx_color(without, Color::rgb(0.0, 0.5, 0.0)));
}

#[test]
fn test_parse_named_colors() {
    assert!(approx_color(Color::parse("red").unwrap(), Color::rgb(1.0, 0.0, 0.0)));
    assert!(approx_color(Color::parse("White").unwrap(), Color::WHITE));
}

#[test]
fn test_parse_unknown_form_is_none() {
    assert_eq!(Color::parse(""), None);
    assert_eq!(Color::parse("not a color"), None);
}

#[test]
fn test_from_str_reports_literal() {
    let err = "rgba(1,2,3)".parse::<Color>().unwrap_err();
    assert_eq!(err, ColorParseError("rgba(1,2,3)".to_string()));
    assert_eq!("#FFFFFFFF".parse::<Color>(), Ok(Color::WHITE));
}

// ============================================================================
// HSV
// ============================================================================

#[test]
fn test_from_hsv_hits_primaries_exactly() {
    let cases = [
        (0.0, Color::rgb(1.0, 0.0, 0.0)),
        (60.0, Color::rgb(1.0, 1.0, 0.0)),
        (120.0, Color::rgb(0.0, 1.0, 0.0)),
        (180.0, Color::rgb(0.0, 1.0, 1.0)),
        (240.0, Color::rgb(0.0, 0.0, 1.0)),
        (300.0, Color::rgb(1.0, 0.0, 1.0)),
    ];
    for (hue, expected) in cases {
        assert_eq!(Color::from_hsv(hue, 1.0, 1.0, 1.0), expected, "hue {hue}");
    }
}

#[test]
fn test_from_hsv_wraps_hue() {
    assert_eq!(Color::from_hsv(360.0, 1.0, 1.0, 1.0), Color::rgb(1.0, 0.0, 0.0));
    assert_eq!(Color::from_hsv(-120.0, 1.0, 1.0, 1.0), Color::rgb(0.0, 0.0, 1.0));
}

#[test]
fn test_from_hsv_adds_value_offset() {
    let color = Color::from_hsv(0.0, 0.5, 1.0, 0.25);
    assert!(approx_color(color, Color::new(1.0, 0.5, 0.5, 0.25)));
    assert_eq!(Color::from_hsv(90.0, 0.0, 0.3, 1.0), Color::rgb(0.3, 0.3, 0.3));
}

#[test]
fn test_to_hsv_inverts_from_hsv() {
    for hue in [0.0, 45.0, 120.0, 200.0, 330.0] {
        let (h, s, v) = Color::from_hsv(hue, 0.8, 0.6, 1.0).to_hsv();
        assert!(approx(h, hue), "hue {hue} came back as {h}");
        assert!(approx(s, 0.8));
        assert!(approx(v, 0.6));
    }
}

#[test]
fn test_to_hsv_gray_has_no_saturation() {
    let (_, s, v) = Color::rgb(0.5, 0.5, 0.5).to_hsv();
    assert_eq!(s, 0.0);
    assert!(approx(v, 0.5));
}

// ============================================================================
// Misc
// ============================================================================

#[test]
fn test_lerp_endpoints() {
    let a = Color::rgb(0.0, 0.2, 0.4);
    let b = Color::rgb(1.0, 0.4, 0.0);
    assert_eq!(Color::lerp(a, b, 0.0), a);
    assert_eq!(Color::lerp(a, b, 1.0), b);
    assert!(approx_color(Color::lerp(a, b, 0.5), Color::rgb(0.5, 0.3, 0.2)));
}

#[test]
fn test_array_conversion() {
    let color: Color = [0.1, 0.2, 0.3, 0.4].into();
    let back: [f32; 4] = color.into();
    assert_eq!(back, [0.1, 0.2, 0.3, 0.4]);
}
