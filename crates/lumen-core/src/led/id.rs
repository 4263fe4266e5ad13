//! The device-agnostic LED identifier vocabulary.
//!
//! Every addressable element on any supported device is named by a [`LedId`]
//! drawn from one fixed vocabulary: keyboard keys, mouse zones, and generic
//! matrix cells. Backends translate their vendor-specific hardware indices
//! to and from these ids at the transmission boundary, so application code
//! never sees vendor numbering.
//!
//! Ids are grouped into numeric blocks by device class:
//!
//! | Block    | Range           |
//! |----------|-----------------|
//! | Keyboard | 0x0100 – 0x01FF |
//! | Mouse    | 0x0200 – 0x02FF |
//! | Matrix   | 0x0300 – 0x03FF |
//!
//! # The `Invalid` sentinel
//!
//! [`LedId::Invalid`] (value 0x0000) is reserved: a device never registers
//! an LED under it, and lookups with it always miss. Layout files refer to
//! LEDs by textual id; [`LedId::from_name`] resolves those strings
//! case-insensitively and unknown names simply fail to resolve.

use serde::{Deserialize, Serialize};

/// Identifier of one addressable LED, unique per device.
///
/// The numeric value of each variant encodes its device-class block (see the
/// module documentation). [`LedId::Invalid`] is the reserved sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u16)]
pub enum LedId {
    /// Sentinel for "no LED". Never registered on a device.
    Invalid = 0x0000,

    // Keyboard block (0x0100–0x01FF)
    KeyboardEscape = 0x0100,
    KeyboardF1 = 0x0101,
    KeyboardF2 = 0x0102,
    KeyboardF3 = 0x0103,
    KeyboardF4 = 0x0104,
    KeyboardF5 = 0x0105,
    KeyboardF6 = 0x0106,
    KeyboardF7 = 0x0107,
    KeyboardF8 = 0x0108,
    KeyboardF9 = 0x0109,
    KeyboardF10 = 0x010A,
    KeyboardF11 = 0x010B,
    KeyboardF12 = 0x010C,
    Keyboard1 = 0x010D,
    Keyboard2 = 0x010E,
    Keyboard3 = 0x010F,
    Keyboard4 = 0x0110,
    Keyboard5 = 0x0111,
    Keyboard6 = 0x0112,
    Keyboard7 = 0x0113,
    Keyboard8 = 0x0114,
    Keyboard9 = 0x0115,
    Keyboard0 = 0x0116,
    KeyboardA = 0x0117,
    KeyboardB = 0x0118,
    KeyboardC = 0x0119,
    KeyboardD = 0x011A,
    KeyboardE = 0x011B,
    KeyboardF = 0x011C,
    KeyboardG = 0x011D,
    KeyboardH = 0x011E,
    KeyboardI = 0x011F,
    KeyboardJ = 0x0120,
    KeyboardK = 0x0121,
    KeyboardL = 0x0122,
    KeyboardM = 0x0123,
    KeyboardN = 0x0124,
    KeyboardO = 0x0125,
    KeyboardP = 0x0126,
    KeyboardQ = 0x0127,
    KeyboardR = 0x0128,
    KeyboardS = 0x0129,
    KeyboardT = 0x012A,
    KeyboardU = 0x012B,
    KeyboardV = 0x012C,
    KeyboardW = 0x012D,
    KeyboardX = 0x012E,
    KeyboardY = 0x012F,
    KeyboardZ = 0x0130,
    KeyboardEnter = 0x0131,
    KeyboardSpace = 0x0132,
    KeyboardTab = 0x0133,
    KeyboardBackspace = 0x0134,
    KeyboardCapsLock = 0x0135,
    KeyboardLeftShift = 0x0136,
    KeyboardRightShift = 0x0137,
    KeyboardLeftCtrl = 0x0138,
    KeyboardRightCtrl = 0x0139,
    KeyboardLeftAlt = 0x013A,
    KeyboardRightAlt = 0x013B,
    KeyboardArrowLeft = 0x013C,
    KeyboardArrowRight = 0x013D,
    KeyboardArrowUp = 0x013E,
    KeyboardArrowDown = 0x013F,

    // Mouse block (0x0200–0x02FF)
    Mouse1 = 0x0201,
    Mouse2 = 0x0202,
    Mouse3 = 0x0203,
    Mouse4 = 0x0204,
    Mouse5 = 0x0205,
    Mouse6 = 0x0206,
    Mouse7 = 0x0207,
    Mouse8 = 0x0208,

    // Matrix block (0x0300–0x03FF), row-major on matrix devices
    Matrix1 = 0x0301,
    Matrix2 = 0x0302,
    Matrix3 = 0x0303,
    Matrix4 = 0x0304,
    Matrix5 = 0x0305,
    Matrix6 = 0x0306,
    Matrix7 = 0x0307,
    Matrix8 = 0x0308,
    Matrix9 = 0x0309,
    Matrix10 = 0x030A,
    Matrix11 = 0x030B,
    Matrix12 = 0x030C,
    Matrix13 = 0x030D,
    Matrix14 = 0x030E,
    Matrix15 = 0x030F,
    Matrix16 = 0x0310,
    Matrix17 = 0x0311,
    Matrix18 = 0x0312,
    Matrix19 = 0x0313,
    Matrix20 = 0x0314,
    Matrix21 = 0x0315,
    Matrix22 = 0x0316,
    Matrix23 = 0x0317,
    Matrix24 = 0x0318,
    Matrix25 = 0x0319,
    Matrix26 = 0x031A,
    Matrix27 = 0x031B,
    Matrix28 = 0x031C,
    Matrix29 = 0x031D,
    Matrix30 = 0x031E,
    Matrix31 = 0x031F,
    Matrix32 = 0x0320,
    Matrix33 = 0x0321,
    Matrix34 = 0x0322,
    Matrix35 = 0x0323,
    Matrix36 = 0x0324,
    Matrix37 = 0x0325,
    Matrix38 = 0x0326,
    Matrix39 = 0x0327,
    Matrix40 = 0x0328,
    Matrix41 = 0x0329,
    Matrix42 = 0x032A,
    Matrix43 = 0x032B,
    Matrix44 = 0x032C,
    Matrix45 = 0x032D,
    Matrix46 = 0x032E,
    Matrix47 = 0x032F,
    Matrix48 = 0x0330,
    Matrix49 = 0x0331,
    Matrix50 = 0x0332,
    Matrix51 = 0x0333,
    Matrix52 = 0x0334,
    Matrix53 = 0x0335,
    Matrix54 = 0x0336,
    Matrix55 = 0x0337,
    Matrix56 = 0x0338,
    Matrix57 = 0x0339,
    Matrix58 = 0x033A,
    Matrix59 = 0x033B,
    Matrix60 = 0x033C,
    Matrix61 = 0x033D,
    Matrix62 = 0x033E,
    Matrix63 = 0x033F,
    Matrix64 = 0x0340,
}

/// One row of the id table: canonical name and variant.
///
/// The table is the single source of truth for name and value lookups; the
/// numeric value comes from the variant's discriminant.
const ID_TABLE: &[(&str, LedId)] = &[
    ("KeyboardEscape", LedId::KeyboardEscape),
    ("KeyboardF1", LedId::KeyboardF1),
    ("KeyboardF2", LedId::KeyboardF2),
    ("KeyboardF3", LedId::KeyboardF3),
    ("KeyboardF4", LedId::KeyboardF4),
    ("KeyboardF5", LedId::KeyboardF5),
    ("KeyboardF6", LedId::KeyboardF6),
    ("KeyboardF7", LedId::KeyboardF7),
    ("KeyboardF8", LedId::KeyboardF8),
    ("KeyboardF9", LedId::KeyboardF9),
    ("KeyboardF10", LedId::KeyboardF10),
    ("KeyboardF11", LedId::KeyboardF11),
    ("KeyboardF12", LedId::KeyboardF12),
    ("Keyboard1", LedId::Keyboard1),
    ("Keyboard2", LedId::Keyboard2),
    ("Keyboard3", LedId::Keyboard3),
    ("Keyboard4", LedId::Keyboard4),
    ("Keyboard5", LedId::Keyboard5),
    ("Keyboard6", LedId::Keyboard6),
    ("Keyboard7", LedId::Keyboard7),
    ("Keyboard8", LedId::Keyboard8),
    ("Keyboard9", LedId::Keyboard9),
    ("Keyboard0", LedId::Keyboard0),
    ("KeyboardA", LedId::KeyboardA),
    ("KeyboardB", LedId::KeyboardB),
    ("KeyboardC", LedId::KeyboardC),
    ("KeyboardD", LedId::KeyboardD),
    ("KeyboardE", LedId::KeyboardE),
    ("KeyboardF", LedId::KeyboardF),
    ("KeyboardG", LedId::KeyboardG),
    ("KeyboardH", LedId::KeyboardH),
    ("KeyboardI", LedId::KeyboardI),
    ("KeyboardJ", LedId::KeyboardJ),
    ("KeyboardK", LedId::KeyboardK),
    ("KeyboardL", LedId::KeyboardL),
    ("KeyboardM", LedId::KeyboardM),
    ("KeyboardN", LedId::KeyboardN),
    ("KeyboardO", LedId::KeyboardO),
    ("KeyboardP", LedId::KeyboardP),
    ("KeyboardQ", LedId::KeyboardQ),
    ("KeyboardR", LedId::KeyboardR),
    ("KeyboardS", LedId::KeyboardS),
    ("KeyboardT", LedId::KeyboardT),
    ("KeyboardU", LedId::KeyboardU),
    ("KeyboardV", LedId::KeyboardV),
    ("KeyboardW", LedId::KeyboardW),
    ("KeyboardX", LedId::KeyboardX),
    ("KeyboardY", LedId::KeyboardY),
    ("KeyboardZ", LedId::KeyboardZ),
    ("KeyboardEnter", LedId::KeyboardEnter),
    ("KeyboardSpace", LedId::KeyboardSpace),
    ("KeyboardTab", LedId::KeyboardTab),
    ("KeyboardBackspace", LedId::KeyboardBackspace),
    ("KeyboardCapsLock", LedId::KeyboardCapsLock),
    ("KeyboardLeftShift", LedId::KeyboardLeftShift),
    ("KeyboardRightShift", LedId::KeyboardRightShift),
    ("KeyboardLeftCtrl", LedId::KeyboardLeftCtrl),
    ("KeyboardRightCtrl", LedId::KeyboardRightCtrl),
    ("KeyboardLeftAlt", LedId::KeyboardLeftAlt),
    ("KeyboardRightAlt", LedId::KeyboardRightAlt),
    ("KeyboardArrowLeft", LedId::KeyboardArrowLeft),
    ("KeyboardArrowRight", LedId::KeyboardArrowRight),
    ("KeyboardArrowUp", LedId::KeyboardArrowUp),
    ("KeyboardArrowDown", LedId::KeyboardArrowDown),
    ("Mouse1", LedId::Mouse1),
    ("Mouse2", LedId::Mouse2),
    ("Mouse3", LedId::Mouse3),
    ("Mouse4", LedId::Mouse4),
    ("Mouse5", LedId::Mouse5),
    ("Mouse6", LedId::Mouse6),
    ("Mouse7", LedId::Mouse7),
    ("Mouse8", LedId::Mouse8),
    ("Matrix1", LedId::Matrix1),
    ("Matrix2", LedId::Matrix2),
    ("Matrix3", LedId::Matrix3),
    ("Matrix4", LedId::Matrix4),
    ("Matrix5", LedId::Matrix5),
    ("Matrix6", LedId::Matrix6),
    ("Matrix7", LedId::Matrix7),
    ("Matrix8", LedId::Matrix8),
    ("Matrix9", LedId::Matrix9),
    ("Matrix10", LedId::Matrix10),
    ("Matrix11", LedId::Matrix11),
    ("Matrix12", LedId::Matrix12),
    ("Matrix13", LedId::Matrix13),
    ("Matrix14", LedId::Matrix14),
    ("Matrix15", LedId::Matrix15),
    ("Matrix16", LedId::Matrix16),
    ("Matrix17", LedId::Matrix17),
    ("Matrix18", LedId::Matrix18),
    ("Matrix19", LedId::Matrix19),
    ("Matrix20", LedId::Matrix20),
    ("Matrix21", LedId::Matrix21),
    ("Matrix22", LedId::Matrix22),
    ("Matrix23", LedId::Matrix23),
    ("Matrix24", LedId::Matrix24),
    ("Matrix25", LedId::Matrix25),
    ("Matrix26", LedId::Matrix26),
    ("Matrix27", LedId::Matrix27),
    ("Matrix28", LedId::Matrix28),
    ("Matrix29", LedId::Matrix29),
    ("Matrix30", LedId::Matrix30),
    ("Matrix31", LedId::Matrix31),
    ("Matrix32", LedId::Matrix32),
    ("Matrix33", LedId::Matrix33),
    ("Matrix34", LedId::Matrix34),
    ("Matrix35", LedId::Matrix35),
    ("Matrix36", LedId::Matrix36),
    ("Matrix37", LedId::Matrix37),
    ("Matrix38", LedId::Matrix38),
    ("Matrix39", LedId::Matrix39),
    ("Matrix40", LedId::Matrix40),
    ("Matrix41", LedId::Matrix41),
    ("Matrix42", LedId::Matrix42),
    ("Matrix43", LedId::Matrix43),
    ("Matrix44", LedId::Matrix44),
    ("Matrix45", LedId::Matrix45),
    ("Matrix46", LedId::Matrix46),
    ("Matrix47", LedId::Matrix47),
    ("Matrix48", LedId::Matrix48),
    ("Matrix49", LedId::Matrix49),
    ("Matrix50", LedId::Matrix50),
    ("Matrix51", LedId::Matrix51),
    ("Matrix52", LedId::Matrix52),
    ("Matrix53", LedId::Matrix53),
    ("Matrix54", LedId::Matrix54),
    ("Matrix55", LedId::Matrix55),
    ("Matrix56", LedId::Matrix56),
    ("Matrix57", LedId::Matrix57),
    ("Matrix58", LedId::Matrix58),
    ("Matrix59", LedId::Matrix59),
    ("Matrix60", LedId::Matrix60),
    ("Matrix61", LedId::Matrix61),
    ("Matrix62", LedId::Matrix62),
    ("Matrix63", LedId::Matrix63),
    ("Matrix64", LedId::Matrix64),
];

impl LedId {
    /// Returns the raw block-encoded value of this id.
    pub fn as_u16(self) -> u16 {
        self as u16
    }

    /// Converts a raw block-encoded value to a [`LedId`].
    ///
    /// Returns [`LedId::Invalid`] for any value with no assigned id.
    pub fn from_u16(value: u16) -> Self {
        ID_TABLE
            .iter()
            .find(|(_, id)| id.as_u16() == value)
            .map(|&(_, id)| id)
            .unwrap_or(LedId::Invalid)
    }

    /// Resolves a textual id as used in layout files, case-insensitively.
    ///
    /// Returns `None` for unknown names; `"Invalid"` is not resolvable, so a
    /// layout record can never name the sentinel.
    pub fn from_name(name: &str) -> Option<Self> {
        ID_TABLE
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|&(_, id)| id)
    }

    /// Returns the canonical name of this id, or `None` for
    /// [`LedId::Invalid`].
    pub fn name(self) -> Option<&'static str> {
        ID_TABLE
            .iter()
            .find(|(_, id)| *id == self)
            .map(|&(n, _)| n)
    }

    /// Returns the matrix id for a zero-based cell index, or `None` when the
    /// index is outside the 64-cell matrix block.
    pub fn matrix(index: usize) -> Option<Self> {
        if index >= 64 {
            return None;
        }
        Some(Self::from_u16(LedId::Matrix1.as_u16() + index as u16))
    }
}
