//! Per-version locations of header fields.

use zerocopy::TryFromBytes;

use super::header::PreambleError;

/// Byte offsets of the fields in a replay header.
///
/// Optional fields are `None` for format versions that do not store them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OffsetTable {
    pub version: u8,

    pub uuid: usize,
    /// Match duration. Located, but not decoded.
    pub duration: usize,
    pub timestamp: usize,
    pub sequence_number: usize,
    pub spy_name_length: usize,
    pub sniper_name_length: usize,
    pub result: usize,
    pub venue_hash: usize,
    pub missions_completed: usize,
    /// Start of the variable-length player name region.
    pub player_names: usize,
    pub loadout: usize,

    pub spy_display_name_length: Option<usize>,
    pub sniper_display_name_length: Option<usize>,
    pub start_duration: Option<usize>,
    pub num_guests: Option<usize>,
}

const VERSION_6: OffsetTable = OffsetTable {
    version: 6,

    uuid: 0x18,
    duration: 0x14,
    timestamp: 0x28,
    sequence_number: 0x2C,
    spy_name_length: 0x2E,
    sniper_name_length: 0x2F,
    result: 0x38,
    venue_hash: 0x40,
    missions_completed: 0x50,
    player_names: 0x64,
    loadout: 0x3C,

    spy_display_name_length: Some(0x30),
    sniper_display_name_length: Some(0x31),
    start_duration: Some(0x58),
    num_guests: Some(0x54),
};

/// A replay format version with a known offset table.
///
/// Versions 4 and 5 exist in the wild, but only their identifier and duration
/// locations are known, so they are not decodable.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromBytes)]
pub enum FormatVersion {
    V6 = 6,
}

impl FormatVersion {
    /// Every decodable version.
    pub const ALL: &'static [FormatVersion] = &[Self::V6];

    /// The offset table for this version.
    pub fn offsets(self) -> &'static OffsetTable {
        match self {
            Self::V6 => &VERSION_6,
        }
    }
}

impl TryFrom<u8> for FormatVersion {
    type Error = PreambleError;

    fn try_from(version: u8) -> Result<Self, Self::Error> {
        let known: Result<Self, _> = zerocopy::try_transmute!(version);
        known.map_err(|_| PreambleError::UnsupportedVersion(version))
    }
}

/// Format version numbers which can be decoded.
pub fn supported_versions() -> &'static [u8] {
    static SUPPORTED: [u8; FormatVersion::ALL.len()] = {
        let mut versions = [0; FormatVersion::ALL.len()];
        let mut i = 0;
        while i < versions.len() {
            versions[i] = FormatVersion::ALL[i] as u8;
            i += 1;
        }
        versions
    };

    &SUPPORTED
}
