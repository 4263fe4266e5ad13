//! The addressable light-emitting element.
//!
//! A [`Led`] is created only through [`Device::register_led`] and lives for
//! as long as its owning device holds it. Application code mutates its color
//! over time; every write marks the LED dirty, and the device's update pass
//! later flushes dirty LEDs to hardware and clears the flag.
//!
//! [`Device::register_led`]: crate::device::Device::register_led

use std::any::Any;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::geometry::Rectangle;

pub mod id;

pub use id::LedId;

/// The drawable outline of an LED.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Shape {
    /// A plain rectangle filling the LED's bounds.
    #[default]
    Rectangle,
    /// An ellipse inscribed in the LED's bounds.
    Circle,
    /// A custom outline; the path description lives in [`Led::shape_data`].
    Custom,
}

/// One addressable LED owned by a device.
///
/// The identity is fixed at registration; geometry, shape, and imagery are
/// rewritten by layout application; the color is the only state application
/// code touches per frame.
pub struct Led {
    id: LedId,
    /// Position and extent in device-local coordinates.
    pub rectangle: Rectangle,
    /// Drawable outline.
    pub shape: Shape,
    /// Outline description when [`Led::shape`] is [`Shape::Custom`].
    pub shape_data: Option<String>,
    /// Resolved path of the image representing this LED, if a layout
    /// provided one.
    pub image: Option<PathBuf>,
    color: Color,
    dirty: bool,
    custom_data: Option<Box<dyn Any + Send>>,
}

impl std::fmt::Debug for Led {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // custom_data is an opaque backend payload; only its presence is
        // meaningful here.
        f.debug_struct("Led")
            .field("id", &self.id)
            .field("rectangle", &self.rectangle)
            .field("shape", &self.shape)
            .field("shape_data", &self.shape_data)
            .field("image", &self.image)
            .field("color", &self.color)
            .field("dirty", &self.dirty)
            .field("has_custom_data", &self.custom_data.is_some())
            .finish()
    }
}

impl Led {
    /// Constructs an LED. Only the owning device does this, which is what
    /// enforces per-device id uniqueness.
    pub(crate) fn new(
        id: LedId,
        rectangle: Rectangle,
        custom_data: Option<Box<dyn Any + Send>>,
    ) -> Self {
        Self {
            id,
            rectangle,
            shape: Shape::default(),
            shape_data: None,
            image: None,
            color: Color::TRANSPARENT,
            dirty: false,
            custom_data,
        }
    }

    /// Returns the identity of this LED.
    pub fn id(&self) -> LedId {
        self.id
    }

    /// Returns the currently buffered color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns `true` if the color changed since this LED was last included
    /// in an update snapshot.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Buffers a new color and marks the LED dirty.
    ///
    /// Writes always dirty the LED, including writes of the current color;
    /// the flag records "was written", not "differs from hardware".
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
        self.dirty = true;
    }

    /// The flush transition: clears the dirty flag and returns the color
    /// captured for transmission.
    ///
    /// Called exactly once per LED included in a device update pass. The
    /// color itself is retained on the LED, so a later full flush re-sends
    /// it even though the flag is clear.
    pub(crate) fn update(&mut self) -> Color {
        self.dirty = false;
        self.color
    }

    /// Overwrites the buffered color without dirtying the LED.
    ///
    /// Used by the sync-back path: the hardware already shows this color, so
    /// there is nothing to flush.
    pub(crate) fn sync_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Returns the backend payload attached at registration, downcast to its
    /// concrete type.
    pub fn custom_data<T: Any>(&self) -> Option<&T> {
        self.custom_data.as_ref()?.downcast_ref::<T>()
    }
}
