//! The device abstraction and its update lifecycle.
//!
//! A [`Device`] owns the LEDs of one physical lighting peripheral. Hardware
//! specifics are injected through the [`DeviceBackend`] trait: the core runs
//! the update protocol (pre-update hook, dirty snapshot, per-LED flush,
//! conditional transmit) and the backend turns the flushed snapshot into
//! vendor wire traffic.
//!
//! The core is single-threaded: every mutating operation takes
//! `&mut self`, so one device is driven from one logical render context at a
//! time and a flush always observes a consistent snapshot of dirty state.

use std::any::Any;
use std::collections::HashMap;
use std::path::Path;

use bitflags::bitflags;
use tracing::{debug, warn};

use crate::color::Color;
use crate::geometry::{Point, Rectangle, Size};
use crate::layout::{DeviceLayout, MISSING_IMAGE};
use crate::led::{Led, LedId};

pub mod parts;

pub use parts::SpecialPartRegistry;

bitflags! {
    /// How a device propagates update passes to hardware.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct UpdateMode: u8 {
        /// Every [`Device::update`] call transmits its snapshot immediately.
        const SYNC = 0b0000_0001;
        /// The device supports reading current hardware state back through
        /// [`Device::sync_back`].
        const SYNC_BACK = 0b0000_0010;
    }
}

impl Default for UpdateMode {
    /// Devices push to hardware on every update unless configured otherwise.
    fn default() -> Self {
        Self::SYNC
    }
}

/// The hardware-specific half of a device.
///
/// The core calls these hooks during the update lifecycle; all of them except
/// [`DeviceBackend::transmit`] have no-op defaults. A backend that fails to
/// transmit decides for itself whether to absorb or surface the failure; by
/// the time `transmit` runs, the snapshot's dirty flags are already cleared,
/// so a failed transmission never leaves stale dirty state behind.
#[cfg_attr(test, mockall::automock)]
pub trait DeviceBackend {
    /// Hands the flushed snapshot to the hardware.
    ///
    /// Called only when the device's update mode contains
    /// [`UpdateMode::SYNC`], and then on every update pass, including
    /// passes whose snapshot is empty.
    fn transmit<'a>(&mut self, leds: &[&'a Led]);

    /// Hardware-specific pre-processing before colors are read (e.g.
    /// polling sensors). Runs at the start of every update pass.
    fn pre_update(&mut self) {}

    /// Reads current hardware colors, for devices that support it.
    ///
    /// Returns the per-LED colors to copy back into the local buffer; ids
    /// unknown to the device are ignored. The default reads nothing.
    fn sync_back(&mut self) -> Vec<(LedId, Color)> {
        Vec::new()
    }

    /// Creates the vendor-specific addressing payload stored on an LED at
    /// registration time.
    fn make_custom_data(&self, id: LedId) -> Option<Box<dyn Any + Send>> {
        let _ = id;
        None
    }
}

/// One addressable lighting peripheral.
///
/// Constructed by a backend-specific factory, populated via
/// [`Device::register_led`] or layout application, driven by color writes and
/// [`Device::update`] calls, and retired by [`Device::dispose`].
#[derive(Debug)]
pub struct Device<B: DeviceBackend> {
    backend: B,
    /// Extent of the device surface; [`Size::INVALID`] until a layout or the
    /// backend sets it.
    pub size: Size,
    /// Placement of the device in a larger multi-device coordinate space.
    pub location: Point,
    /// How update passes reach hardware.
    pub update_mode: UpdateMode,
    leds: HashMap<LedId, Led>,
    special_parts: SpecialPartRegistry,
    disposed: bool,
}

impl<B: DeviceBackend> Device<B> {
    /// Creates an empty device driven by the given backend.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            size: Size::INVALID,
            location: Point::default(),
            update_mode: UpdateMode::default(),
            leds: HashMap::new(),
            special_parts: SpecialPartRegistry::new(),
            disposed: false,
        }
    }

    /// Returns the backend driving this device.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Mutable access to the backend, for backend-specific configuration.
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    // ── Registration and lookup ───────────────────────────────────────────────

    /// Registers a new LED under `id` and returns it.
    ///
    /// Returns `None`, without registering anything, when `id` is
    /// [`LedId::Invalid`], when an LED with that id already exists, or when
    /// the device is disposed. Callers commonly probe optimistically, so
    /// rejection is silent.
    pub fn register_led(&mut self, id: LedId, rectangle: Rectangle) -> Option<&mut Led> {
        if self.disposed || id == LedId::Invalid || self.leds.contains_key(&id) {
            debug!(?id, "led registration rejected");
            return None;
        }

        let custom_data = self.backend.make_custom_data(id);
        self.leds.insert(id, Led::new(id, rectangle, custom_data));
        self.leds.get_mut(&id)
    }

    /// Returns the LED with the given id.
    pub fn led(&self, id: LedId) -> Option<&Led> {
        self.leds.get(&id)
    }

    /// Mutable access to the LED with the given id.
    pub fn led_mut(&mut self, id: LedId) -> Option<&mut Led> {
        self.leds.get_mut(&id)
    }

    /// Returns an LED whose rectangle contains the given point.
    ///
    /// When LED rectangles overlap the choice among containing LEDs is
    /// arbitrary.
    pub fn led_at(&self, point: Point) -> Option<&Led> {
        self.leds.values().find(|led| led.rectangle.contains(point))
    }

    /// Returns all LEDs whose rectangle is covered by `reference` by at
    /// least `min_overlap_percentage` (a fraction in `[0, 1]`).
    pub fn leds_within(
        &self,
        reference: Rectangle,
        min_overlap_percentage: f64,
    ) -> impl Iterator<Item = &Led> {
        self.leds
            .values()
            .filter(move |led| {
                reference.intersect_percentage(&led.rectangle) >= min_overlap_percentage
            })
    }

    /// Iterates over all LEDs of this device.
    pub fn leds(&self) -> impl Iterator<Item = &Led> {
        self.leds.values()
    }

    /// Mutable iteration over all LEDs of this device.
    pub fn leds_mut(&mut self) -> impl Iterator<Item = &mut Led> {
        self.leds.values_mut()
    }

    /// Returns the number of registered LEDs.
    pub fn len(&self) -> usize {
        self.leds.len()
    }

    /// Returns `true` when no LEDs are registered.
    pub fn is_empty(&self) -> bool {
        self.leds.is_empty()
    }

    /// Buffers a color on the LED with the given id.
    ///
    /// Returns `false` when no such LED exists.
    pub fn set_color(&mut self, id: LedId, color: Color) -> bool {
        match self.leds.get_mut(&id) {
            Some(led) => {
                led.set_color(color);
                true
            }
            None => false,
        }
    }

    // ── Update protocol ───────────────────────────────────────────────────────

    /// Runs one update pass.
    ///
    /// The pass invokes the backend's pre-update hook, materializes the
    /// snapshot (all LEDs when `flush_all`, else the dirty ones), clears
    /// dirtiness on every snapshot member while capturing its color, and,
    /// when the update mode contains [`UpdateMode::SYNC`], hands the
    /// snapshot to [`DeviceBackend::transmit`]. Without `SYNC` the snapshot
    /// is discarded; the captured colors stay on the LEDs, so a later
    /// `update(true)` in sync mode re-sends them.
    ///
    /// Two consecutive calls with `flush_all = false` and no intervening
    /// writes produce an empty second snapshot.
    ///
    /// On a disposed device this is a no-op; no hooks run.
    pub fn update(&mut self, flush_all: bool) {
        if self.disposed {
            return;
        }

        self.backend.pre_update();

        // The snapshot is materialized once; dirtying during the pass only
        // affects the next cycle.
        let snapshot: Vec<LedId> = if flush_all {
            self.leds.keys().copied().collect()
        } else {
            self.leds
                .values()
                .filter(|led| led.is_dirty())
                .map(Led::id)
                .collect()
        };

        for id in &snapshot {
            if let Some(led) = self.leds.get_mut(id) {
                led.update();
            }
        }
        debug!(flushed = snapshot.len(), flush_all, "device update pass");

        if self.update_mode.contains(UpdateMode::SYNC) {
            let leds = &self.leds;
            let to_transmit: Vec<&Led> = snapshot.iter().filter_map(|id| leds.get(id)).collect();
            self.backend.transmit(&to_transmit);
        }
    }

    /// Copies current hardware colors back into the local buffer, for
    /// backends that can read them.
    ///
    /// Synced colors do not dirty the LEDs: the hardware already shows them.
    pub fn sync_back(&mut self) {
        if self.disposed {
            return;
        }
        for (id, color) in self.backend.sync_back() {
            if let Some(led) = self.leds.get_mut(&id) {
                led.sync_color(color);
            }
        }
    }

    /// Releases all LEDs and special parts and makes the device inert.
    ///
    /// Safe to call repeatedly; subsequent calls operate on the already
    /// empty collections.
    pub fn dispose(&mut self) {
        self.special_parts.clear();
        self.leds.clear();
        self.disposed = true;
    }

    /// Returns `true` once [`Device::dispose`] has run.
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    // ── Special parts ─────────────────────────────────────────────────────────

    /// Attaches a capability object, replacing any previous part of the same
    /// type.
    pub fn add_special_part<T: Any + Send>(&mut self, part: T) {
        self.special_parts.insert(part);
    }

    /// Returns the attached capability object of type `T`, if any.
    pub fn special_part<T: Any + Send>(&self) -> Option<&T> {
        self.special_parts.get::<T>()
    }

    /// Mutable variant of [`Device::special_part`].
    pub fn special_part_mut<T: Any + Send>(&mut self) -> Option<&mut T> {
        self.special_parts.get_mut::<T>()
    }

    // ── Layout application ────────────────────────────────────────────────────

    /// Positions and shapes this device's LEDs from a parsed layout.
    ///
    /// The device size is taken from the layout unconditionally. Each LED
    /// record is resolved by its textual id (case-insensitively; unknown ids
    /// are skipped); missing LEDs are registered with an empty rectangle when
    /// `create_missing` is set and skipped otherwise. Later records for the
    /// same id overwrite earlier ones. Every resolved LED also gets an image
    /// path: the record's entry in the named image layout when present and
    /// non-empty, else the `missing.png` fallback under `image_base_path`.
    pub fn apply_layout(
        &mut self,
        layout: &DeviceLayout,
        image_layout: Option<&str>,
        image_base_path: &Path,
        create_missing: bool,
    ) {
        if self.disposed {
            return;
        }

        self.size = Size::new(layout.width, layout.height);

        let images = image_layout.and_then(|name| layout.image_layout(name));

        for record in &layout.leds {
            let Some(id) = LedId::from_name(&record.id) else {
                warn!(id = %record.id, "skipping layout record with unknown led id");
                continue;
            };

            if !self.leds.contains_key(&id) {
                if !create_missing {
                    continue;
                }
                self.register_led(id, Rectangle::default());
            }
            let Some(led) = self.leds.get_mut(&id) else {
                continue;
            };

            led.rectangle.location = Point::new(record.x, record.y);
            led.rectangle.size = Size::new(record.width, record.height);
            led.shape = record.shape;
            led.shape_data = record.shape_data.clone();

            let filename = images
                .and_then(|il| il.image_for(&record.id))
                .unwrap_or(MISSING_IMAGE);
            led.image = Some(image_base_path.join(filename));
        }
    }

    /// Loads the layout file at `layout_path` and applies it.
    ///
    /// An absent or unloadable layout file makes this a no-op: layout
    /// application is cosmetic and never fails the caller.
    pub fn apply_layout_from_file(
        &mut self,
        layout_path: &Path,
        image_layout: Option<&str>,
        image_base_path: &Path,
        create_missing: bool,
    ) {
        if let Some(layout) = DeviceLayout::load(layout_path) {
            self.apply_layout(&layout, image_layout, image_base_path, create_missing);
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
