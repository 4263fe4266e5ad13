//! The hardware half of a launchpad device.
//!
//! [`LaunchpadBackend`] implements [`DeviceBackend`]: at registration it
//! stamps every LED with its [`PadIndex`], and at transmit time it renders
//! each flushed LED into a MIDI frame pushed through a [`MidiSink`]. The
//! sink is a trait so tests run against a recording sink instead of a real
//! MIDI port.
//!
//! Transmission failures never escape an update pass: by the time `transmit`
//! runs the snapshot's dirty flags are already cleared, so this backend logs
//! the failure and drops the rest of the frame batch. The hardware catches
//! up on the next full flush.

use std::any::Any;

use tracing::warn;

use lumen_core::{Color, DeviceBackend, Led, LedId};

use crate::info::ColorCapability;
use crate::mappings::{PadIndex, PadMapping};

/// Error type for MIDI sink writes.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    /// The device disappeared from the bus.
    #[error("MIDI device disconnected")]
    Disconnected,

    /// The transport rejected the frame.
    #[error("MIDI send failed: {0}")]
    Send(String),
}

/// Byte-level output channel to one MIDI device.
///
/// The production implementation wraps a vendor MIDI port; tests record the
/// frames instead.
pub trait MidiSink {
    /// Writes one complete MIDI frame.
    fn send(&mut self, frame: &[u8]) -> Result<(), SinkError>;
}

/// [`DeviceBackend`] for launchpad-style pad matrices.
pub struct LaunchpadBackend<S: MidiSink> {
    sink: S,
    mapping: PadMapping,
    capability: ColorCapability,
}

impl<S: MidiSink> LaunchpadBackend<S> {
    /// Creates a backend writing to `sink`, addressing pads through
    /// `mapping`.
    pub fn new(sink: S, mapping: PadMapping, capability: ColorCapability) -> Self {
        Self {
            sink,
            mapping,
            capability,
        }
    }

    /// Returns the pad mapping this backend addresses hardware through.
    pub fn mapping(&self) -> &PadMapping {
        &self.mapping
    }

    /// Returns the sink, for test inspection.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Renders one LED into the wire frame for this hardware generation.
    fn frame(&self, pad: PadIndex, color: Color) -> Vec<u8> {
        let note = pad.row * 16 + pad.column;
        match self.capability {
            ColorCapability::LimitedRg => {
                // 2-bit red/green velocity encoding of first-generation pads.
                let red = color.r >> 6;
                let green = color.g >> 6;
                vec![0x90, note, (green << 4) | red]
            }
            ColorCapability::Rgb => {
                // SysEx LED color message with 6-bit channels.
                vec![
                    0xF0,
                    0x00,
                    0x20,
                    0x29,
                    0x0B,
                    note,
                    color.r >> 2,
                    color.g >> 2,
                    color.b >> 2,
                    0xF7,
                ]
            }
        }
    }
}

impl<S: MidiSink> DeviceBackend for LaunchpadBackend<S> {
    fn transmit(&mut self, leds: &[&Led]) {
        for led in leds {
            // LEDs registered outside the mapping have no pad to address.
            let Some(&pad) = led.custom_data::<PadIndex>() else {
                continue;
            };
            let frame = self.frame(pad, led.color());
            if let Err(err) = self.sink.send(&frame) {
                warn!(id = ?led.id(), error = %err, "dropping remainder of LED batch");
                return;
            }
        }
    }

    fn make_custom_data(&self, id: LedId) -> Option<Box<dyn Any + Send>> {
        self.mapping
            .pad(id)
            .map(|pad| Box::new(pad) as Box<dyn Any + Send>)
    }
}
