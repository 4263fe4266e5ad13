//! Hardware index tables for pad-matrix devices.
//!
//! The vendor protocol addresses pads by grid position, while the core
//! addresses LEDs by [`LedId`]. A [`PadMapping`] is the immutable table
//! between the two, built once per device model and handed into the device
//! factory; per-model tables never live in process-wide mutable state.

use std::collections::HashMap;

use lumen_core::LedId;

/// Grid position of one pad on the device, row-major from the top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PadIndex {
    pub row: u8,
    pub column: u8,
}

/// Immutable translation table from LED ids to pad grid positions.
#[derive(Debug, Clone, Default)]
pub struct PadMapping {
    pads: HashMap<LedId, PadIndex>,
}

impl PadMapping {
    /// Builds a mapping from explicit entries.
    ///
    /// Later entries for the same id overwrite earlier ones; the
    /// [`LedId::Invalid`] sentinel is never mapped.
    pub fn from_entries(entries: impl IntoIterator<Item = (LedId, PadIndex)>) -> Self {
        let pads = entries
            .into_iter()
            .filter(|(id, _)| *id != LedId::Invalid)
            .collect();
        Self { pads }
    }

    /// The standard 8×8 pad grid: `Matrix1` at the top-left, row-major.
    pub fn standard_8x8() -> Self {
        Self::from_entries((0..64).filter_map(|i| {
            let id = LedId::matrix(i)?;
            Some((
                id,
                PadIndex {
                    row: (i / 8) as u8,
                    column: (i % 8) as u8,
                },
            ))
        }))
    }

    /// Returns the grid position mapped to `id`, if any.
    pub fn pad(&self, id: LedId) -> Option<PadIndex> {
        self.pads.get(&id).copied()
    }

    /// Iterates over all mapped entries (in no particular order).
    pub fn iter(&self) -> impl Iterator<Item = (LedId, PadIndex)> + '_ {
        self.pads.iter().map(|(&id, &pad)| (id, pad))
    }

    /// Returns the number of mapped pads.
    pub fn len(&self) -> usize {
        self.pads.len()
    }

    /// Returns `true` when no pads are mapped.
    pub fn is_empty(&self) -> bool {
        self.pads.is_empty()
    }
}
