use std::fs;
use std::path::PathBuf;

use imed_gui::prelude::*;
use imed_gui::ConfigError;

fn write_png(path: &std::path::Path) {
    image::RgbaImage::new(16, 16).save(path).unwrap();
}

/// Colors are stored as 8-bit hex, so compare themes that already went
/// through JSON once.
fn stored_theme() -> Theme {
    Theme::from_json(&Theme::default().to_json().unwrap()).unwrap()
}

// ============================================================================
// GuiConfig
// ============================================================================

#[test]
fn test_config_defaults() {
    let config = GuiConfig::new("app");

    assert_eq!(config.base_dir, PathBuf::from("app"));
    assert_eq!(config.assets_dir, PathBuf::from("app").join("assets"));
    assert_eq!(config.theme_path, None);
    assert_eq!(config.icon_size, Vec2::splat(16.0));
}

#[test]
fn test_config_builders() {
    let config = GuiConfig::new("app")
        .assets_dir("icons")
        .theme_path("theme.json")
        .icon_size(Vec2::splat(24.0));

    assert_eq!(config.assets_dir, PathBuf::from("icons"));
    assert_eq!(config.theme_path, Some(PathBuf::from("theme.json")));
    assert_eq!(config.icon_size.x, 24.0);
}

// ============================================================================
// Themes
// ============================================================================

#[test]
fn test_theme_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("theme.json");
    let mut theme = stored_theme();
    theme.style.alpha = 0.75;
    theme.style.colors.text = Color::rgb(1.0, 0.0, 0.0);

    theme.save(&path).unwrap();
    let loaded = Theme::load(&path).unwrap();

    assert_eq!(loaded, theme);
}

#[test]
fn test_partial_theme_keeps_defaults() {
    let theme = Theme::from_json(r#"{ "style": { "alpha": 0.5 } }"#).unwrap();

    assert_eq!(theme.style.alpha, 0.5);
    assert_eq!(theme.style.colors, Style::default().colors);
    assert_eq!(theme.code, CodeStyle::default());
}

#[test]
fn test_theme_errors() {
    assert!(matches!(
        Theme::from_json("{ not json"),
        Err(ConfigError::Json(_))
    ));
    assert!(matches!(
        Theme::load("/definitely/not/here.json"),
        Err(ConfigError::Io { .. })
    ));
}

#[test]
fn test_style_mirrors_through_frontend() {
    let mut ui = RecordingFrontend::new();
    let mut style = Style::default();
    style.frame_rounding = 6.0;

    style.apply(&mut ui);

    assert_eq!(ui.calls(), [Call::SetStyle]);
    assert_eq!(Style::current(&ui).frame_rounding, 6.0);
}

// ============================================================================
// init
// ============================================================================

#[test]
fn test_init_loads_icons_and_theme() {
    let dir = tempfile::tempdir().unwrap();
    let assets = dir.path().join("assets");
    fs::create_dir(&assets).unwrap();
    write_png(&assets.join("folder.png"));
    write_png(&assets.join("file.png"));

    let mut theme = stored_theme();
    theme.style.window_rounding = 9.0;
    let theme_path = dir.path().join("theme.json");
    theme.save(&theme_path).unwrap();

    let config = GuiConfig::new(dir.path())
        .theme_path(&theme_path)
        .icon_size(Vec2::splat(20.0));
    let mut ui = RecordingFrontend::new();

    let context = init(&config, &mut ui).unwrap();

    assert!(!context.icons.folder.is_empty());
    assert!(!context.icons.file.is_empty());
    assert_eq!(context.icons.size, Vec2::splat(20.0));
    assert_eq!(context.theme, theme);
    assert_eq!(ui.calls(), [Call::SetStyle]);
    assert_eq!(Style::current(&ui).window_rounding, 9.0);
}

#[test]
fn test_init_without_theme_keeps_frontend_style() {
    let dir = tempfile::tempdir().unwrap();
    let mut ui = RecordingFrontend::new();

    let context = init(&GuiConfig::new(dir.path()), &mut ui).unwrap();

    assert!(context.icons.folder.is_empty());
    assert!(ui.calls().is_empty());
    assert_eq!(context.theme.style, Style::current(&ui));
}

#[test]
fn test_init_fails_on_missing_theme() {
    let dir = tempfile::tempdir().unwrap();
    let config = GuiConfig::new(dir.path()).theme_path(dir.path().join("nope.json"));
    let mut ui = RecordingFrontend::new();

    assert!(matches!(
        init(&config, &mut ui),
        Err(ConfigError::Io { .. })
    ));
}

#[test]
fn test_context_file_tree_shares_icons() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "").unwrap();
    let mut ui = RecordingFrontend::new();
    let context = init(&GuiConfig::new(dir.path()), &mut ui).unwrap();

    let tree = context.file_tree(dir.path()).unwrap();

    assert_eq!(tree.len(), 1);
    assert!(std::rc::Rc::ptr_eq(tree.icons().unwrap(), &context.icons));
}
