//! # lumen-devices-launchpad
//!
//! A launchpad-style pad-matrix backend for [`lumen_core`]: 64 pads in an
//! 8×8 grid, addressed over MIDI.
//!
//! The crate wires three pieces into the core's [`Device`] abstraction:
//!
//! - [`PadMapping`]: the immutable LED-id to grid-position table,
//! - [`LaunchpadBackend`]: the [`DeviceBackend`](lumen_core::DeviceBackend)
//!   implementation rendering flushed LEDs into MIDI frames,
//! - [`launchpad_device`]: the factory assembling a ready-to-use device.
//!
//! # Example
//!
//! ```
//! use lumen_core::{Color, LedId};
//! use lumen_devices_launchpad::{
//!     launchpad_device, ColorCapability, LaunchpadDeviceInfo, MidiSink, PadMapping, SinkError,
//! };
//!
//! struct NullSink;
//! impl MidiSink for NullSink {
//!     fn send(&mut self, _frame: &[u8]) -> Result<(), SinkError> {
//!         Ok(())
//!     }
//! }
//!
//! let info = LaunchpadDeviceInfo::new("Launchpad S", 0, ColorCapability::LimitedRg);
//! let mut device = launchpad_device(info, PadMapping::standard_8x8(), NullSink);
//!
//! device.set_color(LedId::Matrix1, Color::rgb(255, 0, 0));
//! device.update(false);
//! ```

use lumen_core::{Device, LedId, Rectangle};

mod backend;
mod info;
mod mappings;

pub use backend::{LaunchpadBackend, MidiSink, SinkError};
pub use info::{ColorCapability, LaunchpadDeviceInfo};
pub use mappings::{PadIndex, PadMapping};

/// Edge length of one pad in device-local units.
const PAD_SIZE: f64 = 40.0;

/// Assembles a ready-to-use launchpad device.
///
/// One LED is registered per mapping entry, positioned on the pad grid
/// (`column * 40, row * 40`, pads 40×40); the device size is derived from
/// the mapping's extent. The info record is attached as a special part so
/// applications can retrieve model and capability data from the device
/// without knowing the backend type.
pub fn launchpad_device<S: MidiSink>(
    info: LaunchpadDeviceInfo,
    mapping: PadMapping,
    sink: S,
) -> Device<LaunchpadBackend<S>> {
    let capability = info.color_capability;
    let entries: Vec<(LedId, PadIndex)> = mapping.iter().collect();

    let mut device = Device::new(LaunchpadBackend::new(sink, mapping, capability));

    let mut rows = 0u8;
    let mut columns = 0u8;
    for (id, pad) in entries {
        rows = rows.max(pad.row + 1);
        columns = columns.max(pad.column + 1);
        device.register_led(
            id,
            Rectangle::from_values(
                f64::from(pad.column) * PAD_SIZE,
                f64::from(pad.row) * PAD_SIZE,
                PAD_SIZE,
                PAD_SIZE,
            ),
        );
    }
    device.size = lumen_core::Size::new(f64::from(columns) * PAD_SIZE, f64::from(rows) * PAD_SIZE);

    device.add_special_part(info);
    device
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_core::{Color, Point, Size};

    struct NullSink;
    impl MidiSink for NullSink {
        fn send(&mut self, _frame: &[u8]) -> Result<(), SinkError> {
            Ok(())
        }
    }

    fn standard_device() -> Device<LaunchpadBackend<NullSink>> {
        launchpad_device(
            LaunchpadDeviceInfo::new("Launchpad S", 0, ColorCapability::LimitedRg),
            PadMapping::standard_8x8(),
            NullSink,
        )
    }

    #[test]
    fn test_factory_registers_one_led_per_pad() {
        let device = standard_device();
        assert_eq!(device.len(), 64);
    }

    #[test]
    fn test_factory_derives_surface_size_from_mapping() {
        let device = standard_device();
        assert_eq!(device.size, Size::new(320.0, 320.0));
    }

    #[test]
    fn test_factory_positions_leds_on_the_grid() {
        let device = standard_device();

        // Matrix10 is row 1, column 1 in the standard mapping.
        let led = device.led(LedId::Matrix10).expect("registered");
        assert_eq!(led.rectangle.location, Point::new(40.0, 40.0));
        assert_eq!(led.rectangle.size, Size::new(40.0, 40.0));
    }

    #[test]
    fn test_factory_attaches_info_as_special_part() {
        let device = standard_device();

        let info = device
            .special_part::<LaunchpadDeviceInfo>()
            .expect("info attached");
        assert_eq!(info.model, "Launchpad S");
        assert_eq!(info.color_capability, ColorCapability::LimitedRg);
    }

    #[test]
    fn test_leds_carry_their_pad_index_as_custom_data() {
        let device = standard_device();

        let led = device.led(LedId::Matrix64).expect("registered");
        assert_eq!(
            led.custom_data::<PadIndex>(),
            Some(&PadIndex { row: 7, column: 7 })
        );
    }

    #[test]
    fn test_point_lookup_resolves_pads() {
        let device = standard_device();

        let led = device.led_at(Point::new(45.0, 45.0)).expect("pad under point");
        assert_eq!(led.id(), LedId::Matrix10);
    }

    #[test]
    fn test_partial_mapping_builds_smaller_device() {
        let mapping = PadMapping::from_entries([
            (LedId::Matrix1, PadIndex { row: 0, column: 0 }),
            (LedId::Matrix2, PadIndex { row: 0, column: 1 }),
        ]);
        let device = launchpad_device(
            LaunchpadDeviceInfo::new("Mini", 2, ColorCapability::Rgb),
            mapping,
            NullSink,
        );

        assert_eq!(device.len(), 2);
        assert_eq!(device.size, Size::new(80.0, 40.0));
    }

    #[test]
    fn test_end_to_end_color_write_and_flush() {
        let mut device = standard_device();

        device.set_color(LedId::Matrix1, Color::rgb(0, 255, 0));
        device.update(false);

        assert!(!device.led(LedId::Matrix1).expect("present").is_dirty());
    }
}
