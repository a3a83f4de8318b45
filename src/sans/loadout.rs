//! Mission loadouts, packed into a single integer.

use core::fmt;

use tartan_bitfield::bitfield;
use thiserror::Error;

/// An error decoding a packed loadout.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LoadoutError {
    /// Mode selector outside the known set.
    #[error("Unknown loadout mode ({0}).")]
    UnknownMode(u8),
}

/// How the missions of a match were chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Loadout {
    /// A fixed number of missions must be completed.
    Known(u16),
    /// The spy picks `required` of `available` missions.
    Pick { required: u16, available: u16 },
    /// Any `required` of `available` missions.
    Any { required: u16, available: u16 },
}

bitfield! {
    struct Packed(u32) {
        [0..14] x: u16,
        [14..28] y: u16,
        [28..32] mode: u8,
    }
}

impl Loadout {
    /// Decode a loadout from its packed little-endian representation.
    pub fn decode(r: [u8; 4]) -> Result<Self, LoadoutError> {
        let packed = Packed(u32::from_le_bytes(r));

        let (x, y) = (packed.x(), packed.y());

        Ok(match packed.mode() {
            0 => Self::Known(x),
            1 => Self::Pick {
                required: x,
                available: y,
            },
            2 => Self::Any {
                required: x,
                available: y,
            },
            mode => Err(LoadoutError::UnknownMode(mode))?,
        })
    }
}

/// Formats as the short descriptor used by stat sites: `k4`, `p3/5`, `a1/4`.
impl fmt::Display for Loadout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(x) => write!(f, "k{x}"),
            Self::Pick {
                required,
                available,
            } => write!(f, "p{required}/{available}"),
            Self::Any {
                required,
                available,
            } => write!(f, "a{required}/{available}"),
        }
    }
}
