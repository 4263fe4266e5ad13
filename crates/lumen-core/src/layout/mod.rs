//! Device layout files: per-model LED geometry, shape, and imagery.
//!
//! A layout file describes where every LED of one device model sits on the
//! device surface, which outline it has, and optionally which image
//! represents it. Layouts ship alongside the application as TOML:
//!
//! ```toml
//! width = 320.0
//! height = 320.0
//!
//! [[leds]]
//! id = "Matrix1"
//! x = 0.0
//! y = 0.0
//! width = 40.0
//! height = 40.0
//! shape = "circle"
//!
//! [[image-layouts]]
//! layout = "default"
//!
//!   [[image-layouts.images]]
//!   id = "Matrix1"
//!   image = "pad1.png"
//! ```
//!
//! Layout files are optional cosmetics: a device works without one, so the
//! loading entry point ([`DeviceLayout::load`]) never surfaces an error.
//! A missing or corrupt file is logged and collapses to `None`, and the
//! caller skips layout application.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::led::Shape;

/// Image filename used when a named image layout has no entry for an LED.
pub const MISSING_IMAGE: &str = "missing.png";

/// Error type for layout file reading.
///
/// Only [`DeviceLayout::read`] surfaces these; [`DeviceLayout::load`] maps
/// them to `None`.
#[derive(Debug, Error)]
pub enum LayoutFileError {
    /// A file system I/O error occurred.
    #[error("I/O error reading layout at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse layout TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

// ── Layout schema types ───────────────────────────────────────────────────────

/// A parsed device layout: overall surface extent plus per-LED records.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct DeviceLayout {
    /// Width of the device surface in layout units.
    pub width: f64,
    /// Height of the device surface in layout units.
    pub height: f64,
    /// Per-LED geometry records. Later records for the same id overwrite
    /// earlier ones during application.
    #[serde(default)]
    pub leds: Vec<LedLayout>,
    /// Named sets of per-LED image associations.
    #[serde(default)]
    pub image_layouts: Vec<LedImageLayout>,
}

/// Geometry and shape of one LED within a [`DeviceLayout`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct LedLayout {
    /// Textual LED id, resolved case-insensitively against the
    /// [`LedId`](crate::led::LedId) vocabulary. Records with unknown ids are
    /// skipped during application.
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Drawable outline; plain rectangle when omitted.
    #[serde(default)]
    pub shape: Shape,
    /// Outline description for [`Shape::Custom`].
    #[serde(default)]
    pub shape_data: Option<String>,
}

/// A named set of per-LED images (e.g. `"default"`, `"dark"`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct LedImageLayout {
    /// Name this set is selected by; compared case-insensitively.
    pub layout: String,
    /// Per-LED image filenames, relative to the image base path.
    #[serde(default)]
    pub images: Vec<LedImage>,
}

/// The image filename for one LED within a [`LedImageLayout`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LedImage {
    /// Textual LED id, matched against [`LedLayout::id`].
    pub id: String,
    /// Image filename; an empty string means "no image".
    #[serde(default)]
    pub image: String,
}

impl DeviceLayout {
    /// Reads and parses the layout file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutFileError::Io`] when the file cannot be read and
    /// [`LayoutFileError::Parse`] when it is not valid layout TOML.
    pub fn read(path: &Path) -> Result<Self, LayoutFileError> {
        let text = std::fs::read_to_string(path).map_err(|source| LayoutFileError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&text)?)
    }

    /// Loads the layout file at `path`, swallowing all failures.
    ///
    /// Missing or corrupt layout files degrade to `None` (with a warning in
    /// the log); devices then simply keep their current geometry.
    pub fn load(path: &Path) -> Option<Self> {
        match Self::read(path) {
            Ok(layout) => Some(layout),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "skipping unloadable device layout");
                None
            }
        }
    }

    /// Returns the image layout with the given name, compared
    /// case-insensitively, or `None` when no set carries that name.
    pub fn image_layout(&self, name: &str) -> Option<&LedImageLayout> {
        self.image_layouts
            .iter()
            .find(|il| il.layout.eq_ignore_ascii_case(name))
    }
}

impl LedImageLayout {
    /// Returns the non-empty image filename recorded for the given textual
    /// LED id, if any.
    pub fn image_for(&self, id: &str) -> Option<&str> {
        self.images
            .iter()
            .find(|img| img.id == id && !img.image.is_empty())
            .map(|img| img.image.as_str())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
