// Generate → save → open flow against real files
use std::path::PathBuf;

use image::{Rgb, RgbImage};
use qr_studio_core::studio::{STATUS_DECODED, STATUS_NOT_FOUND};
use qr_studio_core::{EncodeOptions, StudioConfig, StudioState};

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("qr_studio_flow_{}_{}", std::process::id(), name))
}

#[test]
fn saved_qr_can_be_opened_and_decoded() {
    let config = StudioConfig::default();
    let generated = StudioState::default()
        .generate("round trip through disk", EncodeOptions::default(), &config)
        .expect("generate should succeed");

    let saved = generated.save(&temp_path("saved")).expect("save should succeed");
    assert!(saved.status.starts_with("Saved to "));
    let written = temp_path("saved.png");
    assert!(written.exists());

    let opened = StudioState::default()
        .open(&written, &config)
        .expect("open should succeed");

    assert_eq!(opened.decoded_text, "round trip through disk");
    assert_eq!(opened.input_text, "round trip through disk");
    assert_eq!(opened.status, STATUS_DECODED);
    assert!(opened.copy_enabled);
    assert!(opened.save_enabled);
    assert_eq!(
        opened.uploaded.as_ref().map(|slot| slot.preview.dimensions()),
        Some((295, 265))
    );

    let _ = std::fs::remove_file(written);
}

#[test]
fn opening_a_picture_without_qr_keeps_preview_and_reports_status() {
    let config = StudioConfig::default();
    let picture = RgbImage::from_fn(500, 100, |x, y| Rgb([(x % 256) as u8, (y * 2) as u8, 128]));
    let path = temp_path("photo.png");
    picture.save(&path).expect("fixture should be written");

    let opened = StudioState::default()
        .open(&path, &config)
        .expect("open should succeed");

    assert!(opened.decoded_text.is_empty());
    assert_eq!(opened.status, STATUS_NOT_FOUND);
    assert!(!opened.copy_enabled);
    let slot = opened.uploaded.as_ref().expect("uploaded slot");
    assert_eq!(slot.image.dimensions(), (500, 100));
    assert_eq!(slot.preview.dimensions(), (295, 265));

    let _ = std::fs::remove_file(path);
}

#[test]
fn failed_open_leaves_previous_state_untouched() {
    let config = StudioConfig::default();
    let state = StudioState::default()
        .generate("keep me", EncodeOptions::default(), &config)
        .expect("generate should succeed");

    let path = temp_path("not_an_image.png");
    std::fs::write(&path, b"definitely not a picture").expect("fixture should be written");

    let err = state.open(&path, &config).expect_err("open should fail");
    assert!(!err.is_notice());
    assert!(state.generated.is_some());
    assert!(state.uploaded.is_none());

    let _ = std::fs::remove_file(path);
}
