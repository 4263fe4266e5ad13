//! # lumen-core
//!
//! Device and LED abstractions for addressable lighting hardware: a bounded
//! 2-D surface of individually addressable LEDs whose colors are buffered
//! locally and flushed to hardware in batches.
//!
//! This crate is hardware-agnostic: it owns the LED collection, identity,
//! geometry, dirty tracking, layout application, and the update protocol.
//! Vendor specifics live in backend crates that implement
//! [`DeviceBackend`].
//!
//! # The update lifecycle
//!
//! ```text
//! register LEDs ──► write colors (marks dirty) ──► Device::update
//!                                                    │
//!                                 backend pre-update hook
//!                                 snapshot dirty (or all) LEDs
//!                                 per-LED flush: clear dirty, capture color
//!                                 Sync mode? ──► backend transmit
//! ```
//!
//! Recoverable conditions do not panic: registering under a taken or
//! invalid id yields `None`, unloadable layout files and unknown layout ids
//! are skipped with a log entry, and a missing LED image degrades to a
//! placeholder path. Only backend transmission failures are surfaced or
//! absorbed, at the backend's discretion.
//!
//! # Example
//!
//! ```
//! use lumen_core::{Color, Device, DeviceBackend, Led, LedId, Rectangle};
//!
//! struct StdoutBackend;
//!
//! impl DeviceBackend for StdoutBackend {
//!     fn transmit(&mut self, leds: &[&Led]) {
//!         for led in leds {
//!             println!("{:?} -> {:?}", led.id(), led.color());
//!         }
//!     }
//! }
//!
//! let mut device = Device::new(StdoutBackend);
//! let led = device.register_led(LedId::KeyboardA, Rectangle::from_values(0.0, 0.0, 10.0, 10.0));
//! assert!(led.is_some());
//!
//! device.set_color(LedId::KeyboardA, Color::rgb(255, 0, 0));
//! device.update(false);
//! ```

pub mod color;
pub mod device;
pub mod geometry;
pub mod layout;
pub mod led;

// Re-export the working set at the crate root so backends and applications
// can write `lumen_core::Device` instead of spelling out the module paths.
pub use color::Color;
pub use device::{Device, DeviceBackend, SpecialPartRegistry, UpdateMode};
pub use geometry::{Point, Rectangle, Size};
pub use layout::{DeviceLayout, LayoutFileError, LedImage, LedImageLayout, LedLayout};
pub use led::{Led, LedId, Shape};
