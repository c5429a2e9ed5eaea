use std::fs;

use imed_gui::prelude::*;
use imed_gui::ImageError;

fn write_png(path: &std::path::Path, width: u32, height: u32) {
    image::RgbaImage::from_pixel(width, height, image::Rgba([10, 20, 30, 255]))
        .save(path)
        .unwrap();
}

// ============================================================================
// Texture lifetime
// ============================================================================

#[test]
fn test_release_runs_once_after_last_clone() {
    let mut ui = RecordingFrontend::new();
    let image = Image::from_rgba(&mut ui, &[255; 16], 2, 2).unwrap();
    let copy = image.clone();

    assert_eq!(image.handle_count(), 2);
    assert_eq!(copy.id(), TextureId(1));

    drop(image);
    assert!(ui.released_textures().is_empty());

    drop(copy);
    assert_eq!(ui.released_textures(), [TextureId(1)]);
}

#[test]
fn test_default_image_is_empty() {
    let image = Image::default();
    let mut ui = RecordingFrontend::new();

    image.show(&mut ui, Vec2::splat(16.0));

    assert!(image.is_empty());
    assert_eq!(image.size(), Vec2::ZERO);
    assert!(ui.calls().is_empty());
}

#[test]
fn test_wrapped_texture_without_hook_releases_nothing() {
    let image = Image::from_texture(TextureId(5), 4, 4, None);
    assert!(!image.is_empty());
    drop(image);
}

#[test]
fn test_pixel_buffer_size_is_checked() {
    let mut ui = RecordingFrontend::new();

    let result = Image::from_rgba(&mut ui, &[0; 10], 2, 2);

    assert!(matches!(
        result,
        Err(ImageError::Size {
            expected: 16,
            actual: 10
        })
    ));
    assert_eq!(ui.textures_created(), 0);
}

// ============================================================================
// Loading
// ============================================================================

#[test]
fn test_load_png() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("icon.png");
    write_png(&path, 3, 2);
    let mut ui = RecordingFrontend::new();

    let image = Image::load(&mut ui, &path).unwrap();

    assert_eq!((image.width(), image.height()), (3, 2));
    assert_eq!(image.id(), TextureId(1));
}

#[test]
fn test_load_errors() {
    let dir = tempfile::tempdir().unwrap();
    let garbage = dir.path().join("garbage.png");
    fs::write(&garbage, b"not a png").unwrap();
    let mut ui = RecordingFrontend::new();

    assert!(matches!(
        Image::load(&mut ui, dir.path().join("missing.png")),
        Err(ImageError::Io { .. })
    ));
    assert!(matches!(
        Image::load(&mut ui, &garbage),
        Err(ImageError::Decode { .. })
    ));
}

#[test]
fn test_icons_load_what_exists() {
    let dir = tempfile::tempdir().unwrap();
    write_png(&dir.path().join(FileIcons::FOLDER_FILE), 16, 16);
    let mut ui = RecordingFrontend::new();

    let icons = FileIcons::load(&mut ui, dir.path()).unwrap();

    assert!(!icons.folder.is_empty());
    assert!(icons.file.is_empty());
    assert_eq!(icons.size, Vec2::splat(16.0));
}

#[test]
fn test_icons_reject_broken_files() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(FileIcons::FILE_FILE), b"broken").unwrap();
    let mut ui = RecordingFrontend::new();

    assert!(FileIcons::load(&mut ui, dir.path()).is_err());
}
