//! Validation of the signature and version preceding every header.

use thiserror::Error;
use zerocopy::FromBytes;

use super::offsets::{FormatVersion, OffsetTable};

/// An error advancing over a header preamble.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PreambleError {
    /// Incorrect file type marker.
    #[error("Incorrect file type marker.")]
    NotReplay,
    /// No offset table for this format version.
    #[error("Unsupported format version ({0}).")]
    UnsupportedVersion(u8),
}

/// Leading file type marker.
pub const MAGIC: [u8; 4] = *b"RPLY";

/// State token to decode a header preamble.
#[derive(Debug)]
pub struct Preamble;

impl Preamble {
    /// Decode the first five bytes of a header.
    ///
    /// Returns the format version, and the offset table locating every other
    /// field.
    pub fn advance(r: [u8; 5]) -> Result<(FormatVersion, &'static OffsetTable), PreambleError> {
        #[repr(C, packed)]
        #[derive(FromBytes)]
        struct Leading {
            magic: [u8; 4],
            version: u8,
        }

        let Leading { magic, version } = zerocopy::transmute!(r);

        if magic != MAGIC {
            Err(PreambleError::NotReplay)?;
        }

        let version = FormatVersion::try_from(version)?;

        Ok((version, version.offsets()))
    }
}
