//! Static information about one launchpad model.

use std::path::{Path, PathBuf};

/// How many distinct colors the device hardware can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorCapability {
    /// First-generation hardware: 2-bit red and green channels only.
    LimitedRg,
    /// Full RGB hardware addressed via SysEx.
    Rgb,
}

/// Identity and capabilities of one launchpad, fixed at detection time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchpadDeviceInfo {
    /// Marketing name of the model, e.g. `"Launchpad S"`.
    pub model: String,
    /// Index of the device on its vendor bus.
    pub device_id: u8,
    /// Color depth the hardware supports.
    pub color_capability: ColorCapability,
}

impl LaunchpadDeviceInfo {
    /// Creates the info record for a detected device.
    pub fn new(model: impl Into<String>, device_id: u8, color_capability: ColorCapability) -> Self {
        Self {
            model: model.into(),
            device_id,
            color_capability,
        }
    }

    /// Returns the path of the device image under `base`, derived from the
    /// model name: spaces stripped, uppercased, `.png` appended, so
    /// `"Launchpad S"` becomes `<base>/LAUNCHPADS.png`.
    pub fn image_path(&self, base: &Path) -> PathBuf {
        let file: String = self
            .model
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_uppercase();
        base.join(format!("{file}.png"))
    }
}
