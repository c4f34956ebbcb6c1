//! Manifest loading through to an interactive dropdown.

use dropdown::prelude::*;
use dropdown::ManifestError;
use dropdown_test::{init_logging, Harness};

const CITIES: &str = r#"
config:
  font_size: 16
  item_padding: 8
  dropdown_margins: { min: 8, max: 16 }
data:
  - value: ams
    label: Amsterdam
  - value: ber
    label: Berlin
  - ~
  - value: lis
    label: Lisbon
  - value: mad
    label: Madrid
  - value: osl
    label: Oslo
  - value: par
    label: Paris
    disabled: true
  - value: rom
    label: Rome
value: osl
"#;

fn harness(manifest: &Manifest) -> Harness {
    init_logging();
    Harness::new(
        manifest.build(),
        Rect::new(16.0, 100.0, 328.0, 64.0),
        Size::new(360.0, 640.0),
    )
}

#[test]
fn test_built_dropdown_shows_label() {
    let manifest = Manifest::from_yaml(CITIES).unwrap();
    let h = harness(&manifest);
    assert_eq!(h.dropdown().title(), Some("Oslo".to_string()));
    assert_eq!(h.dropdown().selected_index(), Some(5));
    assert_eq!(h.paint().texts(), vec!["Oslo"]);
}

#[test]
fn test_open_scrolls_to_selection() {
    let manifest = Manifest::from_yaml(CITIES).unwrap();
    let mut h = harness(&manifest);
    h.open();

    // Eight rows, four visible: Oslo sits second in the window
    let geometry = h.dropdown().geometry().copied().unwrap();
    assert_eq!(geometry.scroll_offset, 160.0);
    assert_eq!(geometry.vertical_shift, -48.0);
}

#[test]
fn test_absent_and_disabled_rows_are_inert() {
    let manifest = Manifest::from_yaml(CITIES).unwrap();
    let mut h = harness(&manifest);
    h.open();

    assert!(h.item_position(2).is_none());
    assert!(h.tap_item(6).is_none());
    assert_eq!(h.dropdown().value(), Some(&Value::from("osl")));

    let changed = h.tap_item(7).unwrap();
    assert_eq!(changed.value, Value::from("rom"));
    h.settle(1_000);
    assert_eq!(h.dropdown().title(), Some("Rome".to_string()));
}

#[test]
fn test_load_from_file() {
    let path = std::env::temp_dir().join(format!("dropdown-manifest-{}.yaml", std::process::id()));
    std::fs::write(&path, CITIES).unwrap();
    let manifest = Manifest::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(manifest.present_items(), 7);
}

#[test]
fn test_load_missing_file() {
    let err = Manifest::load("/nonexistent/dropdown.yaml").unwrap_err();
    assert!(matches!(err, ManifestError::Io { .. }));
    assert!(err.to_string().contains("/nonexistent/dropdown.yaml"));
}

#[test]
fn test_invalid_opacity_is_rejected() {
    let err = Manifest::from_yaml("config: { ripple_opacity: 1.5 }").unwrap_err();
    assert!(matches!(err, ManifestError::InvalidValue { .. }));
}
