// Command-level flow without a running webview
use qr_studio::commands::ViewSnapshot;
use qr_studio::service::StudioServiceState;
use qr_studio_core::{EncodeOptions, ErrorLevel};

#[test]
fn generate_then_clear_produces_expected_views() {
    let service = StudioServiceState::new();
    let options = EncodeOptions {
        error_level: ErrorLevel::from_label("Q (25%)"),
        module_size: 8,
        border: 4,
    };

    let generated = service
        .apply(|state, config| state.generate("HELLO", options, config))
        .expect("generate should succeed");
    let view = ViewSnapshot::from_state(&generated).expect("view");
    assert!(view.qr_preview.is_some());
    assert!(view.upload_preview.is_none());
    assert!(view.save_enabled);

    let cleared = service
        .apply(|state, _| Ok(state.clear()))
        .expect("clear should succeed");
    let view = ViewSnapshot::from_state(&cleared).expect("view");
    assert!(view.qr_preview.is_none());
    assert_eq!(view.status, "Cleared");
    assert!(!view.save_enabled);
}

#[test]
fn notice_errors_do_not_touch_current_snapshot() {
    let service = StudioServiceState::new();
    let err = service
        .apply(|state, _| state.save(std::path::Path::new("unused.png")))
        .expect_err("nothing to save");

    assert_eq!(err.code(), "nothing_to_save");
    assert_eq!(err.severity(), "info");
    let snapshot = service.snapshot().expect("snapshot");
    assert_eq!(snapshot.status, "Ready");
}
