//! Integration tests for the lumen-core public API.
//!
//! These tests drive a device end to end the way a backend crate would:
//! layout file on disk → layout application → color writes → update passes →
//! disposal, all through the crate root exports.

use std::io::Write;
use std::path::{Path, PathBuf};

use lumen_core::{
    Color, Device, DeviceBackend, Led, LedId, Point, Rectangle, Shape, Size, UpdateMode,
};

/// Backend that records every transmission it receives.
#[derive(Default)]
struct RecordingBackend {
    transmissions: Vec<Vec<(LedId, Color)>>,
}

impl DeviceBackend for RecordingBackend {
    fn transmit(&mut self, leds: &[&Led]) {
        self.transmissions
            .push(leds.iter().map(|l| (l.id(), l.color())).collect());
    }
}

const LAYOUT: &str = r#"
width = 160.0
height = 40.0

[[leds]]
id = "Matrix1"
x = 0.0
y = 0.0
width = 40.0
height = 40.0
shape = "circle"

[[leds]]
id = "Matrix2"
x = 40.0
y = 0.0
width = 40.0
height = 40.0

[[leds]]
id = "Matrix3"
x = 80.0
y = 0.0
width = 40.0
height = 40.0

[[image-layouts]]
layout = "default"

  [[image-layouts.images]]
  id = "Matrix2"
  image = "pad2.png"
"#;

fn write_layout_file(dir: &Path) -> PathBuf {
    let path = dir.join("device-layout.toml");
    let mut file = std::fs::File::create(&path).expect("create layout file");
    file.write_all(LAYOUT.as_bytes()).expect("write layout");
    path
}

#[test]
fn test_full_lifecycle_from_layout_file_to_disposal() {
    let dir = tempfile::tempdir().expect("temp dir");
    let layout_path = write_layout_file(dir.path());

    // Initialize from the layout file like a backend factory would.
    let mut device = Device::new(RecordingBackend::default());
    device.apply_layout_from_file(&layout_path, Some("default"), Path::new("/images"), true);

    assert_eq!(device.size, Size::new(160.0, 40.0));
    assert_eq!(device.len(), 3);
    assert_eq!(
        device.led(LedId::Matrix1).map(|l| l.shape),
        Some(Shape::Circle)
    );
    assert_eq!(
        device.led(LedId::Matrix2).and_then(|l| l.image.clone()),
        Some(PathBuf::from("/images/pad2.png"))
    );
    assert_eq!(
        device.led(LedId::Matrix3).and_then(|l| l.image.clone()),
        Some(PathBuf::from("/images/missing.png"))
    );

    // Write two colors and flush.
    device.set_color(LedId::Matrix1, Color::rgb(255, 0, 0));
    device.set_color(LedId::Matrix3, Color::rgb(0, 0, 255));
    device.update(false);

    let mut first: Vec<(LedId, Color)> = device.backend().transmissions[0].clone();
    first.sort_by_key(|(id, _)| id.as_u16());
    assert_eq!(
        first,
        vec![
            (LedId::Matrix1, Color::rgb(255, 0, 0)),
            (LedId::Matrix3, Color::rgb(0, 0, 255)),
        ]
    );

    // Nothing changed – the second pass flushes an empty snapshot.
    device.update(false);
    assert!(device.backend().transmissions[1].is_empty());

    // A full flush re-sends retained colors, clean flags notwithstanding.
    device.update(true);
    assert_eq!(device.backend().transmissions[2].len(), 3);

    // Disposal releases everything and makes further updates inert.
    device.dispose();
    device.dispose();
    device.update(true);
    assert!(device.is_empty());
    assert_eq!(device.backend().transmissions.len(), 3);
}

#[test]
fn test_geometry_lookups_after_layout_application() {
    let dir = tempfile::tempdir().expect("temp dir");
    let layout_path = write_layout_file(dir.path());

    let mut device = Device::new(RecordingBackend::default());
    device.apply_layout_from_file(&layout_path, None, Path::new("/images"), true);

    // Point lookup respects the half-open containment rule: x = 40 belongs
    // to Matrix2, not Matrix1.
    assert_eq!(
        device.led_at(Point::new(39.9, 20.0)).map(Led::id),
        Some(LedId::Matrix1)
    );
    assert_eq!(
        device.led_at(Point::new(40.0, 20.0)).map(Led::id),
        Some(LedId::Matrix2)
    );

    // Region query over the left two cells.
    let region = Rectangle::from_values(0.0, 0.0, 80.0, 40.0);
    let mut covered: Vec<LedId> = device.leds_within(region, 1.0).map(Led::id).collect();
    covered.sort_by_key(|id| id.as_u16());
    assert_eq!(covered, vec![LedId::Matrix1, LedId::Matrix2]);
}

#[test]
fn test_layout_reapplication_overrides_geometry_and_size() {
    let dir = tempfile::tempdir().expect("temp dir");
    let layout_path = write_layout_file(dir.path());

    let mut device = Device::new(RecordingBackend::default());
    device.apply_layout_from_file(&layout_path, None, Path::new("/images"), true);

    let second = "width = 99.0\nheight = 11.0\n[[leds]]\nid = \"Matrix1\"\nx = 1.0\ny = 2.0\nwidth = 3.0\nheight = 4.0\n";
    let second_path = dir.path().join("second.toml");
    std::fs::write(&second_path, second).expect("write second layout");

    device.apply_layout_from_file(&second_path, None, Path::new("/images"), false);

    assert_eq!(device.size, Size::new(99.0, 11.0));
    assert_eq!(
        device.led(LedId::Matrix1).map(|l| l.rectangle),
        Some(Rectangle::from_values(1.0, 2.0, 3.0, 4.0))
    );
    // LEDs from the first layout survive reapplication untouched.
    assert_eq!(device.len(), 3);
}

#[test]
fn test_registration_conflicts_and_update_modes_compose() {
    let mut device = Device::new(RecordingBackend::default());

    assert!(device
        .register_led(LedId::Mouse1, Rectangle::from_values(0.0, 0.0, 5.0, 5.0))
        .is_some());
    assert!(device
        .register_led(LedId::Mouse1, Rectangle::default())
        .is_none());
    assert!(device
        .register_led(LedId::Invalid, Rectangle::default())
        .is_none());
    assert_eq!(device.len(), 1);

    // Batch mode: clear dirtiness locally, transmit nothing.
    device.update_mode = UpdateMode::empty();
    device.set_color(LedId::Mouse1, Color::WHITE);
    device.update(false);
    assert!(device.backend().transmissions.is_empty());

    // Back to sync: the retained color reaches the hardware on a full flush.
    device.update_mode = UpdateMode::SYNC;
    device.update(true);
    assert_eq!(
        device.backend().transmissions,
        vec![vec![(LedId::Mouse1, Color::WHITE)]]
    );
}
