//! Type-keyed storage for optional device capabilities.
//!
//! Backends sometimes expose facilities that have no place in the base
//! device contract, such as a per-device lighting-mode controller, a brightness
//! knob, a firmware query channel. Rather than widening [`Device`] for every
//! vendor quirk, a backend attaches such a facet here and callers retrieve
//! it by its concrete type. At most one part per type is stored per device.
//!
//! [`Device`]: crate::device::Device

use std::any::{Any, TypeId};
use std::collections::HashMap;

/// A store of capability objects, at most one per concrete type.
#[derive(Default)]
pub struct SpecialPartRegistry {
    parts: HashMap<TypeId, Box<dyn Any + Send>>,
}

impl std::fmt::Debug for SpecialPartRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpecialPartRegistry")
            .field("parts", &self.parts.len())
            .finish()
    }
}

impl SpecialPartRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `part`, replacing any previously stored part of type `T`.
    pub fn insert<T: Any + Send>(&mut self, part: T) {
        self.parts.insert(TypeId::of::<T>(), Box::new(part));
    }

    /// Returns the stored part of type `T`, or `None` when none was
    /// registered.
    pub fn get<T: Any + Send>(&self) -> Option<&T> {
        self.parts
            .get(&TypeId::of::<T>())
            .and_then(|part| part.downcast_ref::<T>())
    }

    /// Mutable variant of [`SpecialPartRegistry::get`].
    pub fn get_mut<T: Any + Send>(&mut self) -> Option<&mut T> {
        self.parts
            .get_mut(&TypeId::of::<T>())
            .and_then(|part| part.downcast_mut::<T>())
    }

    /// Removes and returns the stored part of type `T`.
    pub fn remove<T: Any + Send>(&mut self) -> Option<T> {
        self.parts
            .remove(&TypeId::of::<T>())
            .and_then(|part| part.downcast::<T>().ok())
            .map(|boxed| *boxed)
    }

    /// Removes all stored parts.
    pub fn clear(&mut self) {
        self.parts.clear();
    }

    /// Returns `true` when no parts are stored.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}
